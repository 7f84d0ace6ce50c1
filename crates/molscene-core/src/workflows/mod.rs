//! # Workflows Module
//!
//! High-level entry points that run the compilation tasks end to end.
//!
//! ## Overview
//!
//! A workflow takes the materialized scene state (atom records and an optional camera
//! vector), a [`crate::engine::config::TranspileConfig`] and a
//! [`crate::engine::progress::ProgressReporter`], and returns one self-contained result.
//! Any task failure aborts the whole call; there are no partial scenes.
//!
//! - **Transpile Workflow** ([`transpile`]) - Camera, representations, colors, secondary
//!   structure and chain description in one [`transpile::SceneDescription`].

pub mod transpile;
