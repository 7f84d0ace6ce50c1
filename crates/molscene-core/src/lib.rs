//! # molscene Core Library
//!
//! Compiles the scene state of a molecular graphics session (camera, per-atom
//! representation flags, per-atom colors and secondary structure) into a compact,
//! renderer-agnostic scene description.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that every piece can be
//! tested on its own and reused outside the bundled workflow.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`, `CameraVector`,
//!   `SelectionExpression`, `StructureRecord`, `ColorMap`), the engine color palette and
//!   readers for the textual dumps produced by the graphics engine.
//!
//! - **[`engine`]: The Logic Core.** The compilation tasks: camera conversion,
//!   representation decoding with selection compression, color reduction,
//!   secondary-structure run-length encoding, structure description and mesh conversion.
//!   Configuration, error types and progress reporting live here as well.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single
//!   call that produces a [`workflows::transpile::SceneDescription`].

pub mod core;
pub mod engine;
pub mod workflows;
