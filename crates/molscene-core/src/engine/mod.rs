//! # Engine Module
//!
//! The compilation algorithms that turn a graphics engine's scene state into
//! renderer-ready data.
//!
//! ## Overview
//!
//! Every task here is a pure, single-pass computation over data that is already in
//! memory: a camera vector or a read-only list of atom records. Tasks never touch the
//! filesystem, never hold global state and never mutate their input, so the
//! atom-consuming tasks can run side by side on the same slice.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Coloring mode, stick style, palette and render settings
//! - **Compilation Context** ([`context`]) - Read-only configuration and reporter shared by all tasks
//! - **Selection Compression** ([`selection`]) - Collapses per-atom flags into selection expressions
//! - **Tasks** ([`tasks`]) - Camera conversion, representation decoding, color reduction,
//!   secondary structure, structure description and mesh conversion
//! - **Progress Monitoring** ([`progress`]) - Caller-supplied progress callbacks
//! - **Error Handling** ([`error`]) - Input and configuration error types

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod selection;
pub mod tasks;
