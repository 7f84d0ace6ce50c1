//! # Core Module
//!
//! Fundamental data structures shared by every compilation task.
//!
//! ## Overview
//!
//! Nothing in this module performs scene compilation. It describes the inputs handed
//! over by the graphics engine (one record per atom and a raw camera vector), the
//! outputs consumed by a renderer (selection expressions, color maps, structure
//! records) and the small lookup tables both sides rely on.
//!
//! ## Architecture
//!
//! - **Scene Representation** ([`models`]) - Atom records, camera vectors, selections,
//!   representation channels, color maps and secondary-structure records
//! - **Color Palette** ([`palette`]) - The engine's indexed color table with optional
//!   TOML extensions
//! - **Input Readers** ([`io`]) - Parsers for the engine's `iterate` and `get_view` dumps
//! - **Utilities** ([`utils`]) - Atom/residue identifier helpers and residue range collapsing

pub mod io;
pub mod models;
pub mod palette;
pub mod utils;
