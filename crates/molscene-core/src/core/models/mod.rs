//! # Core Models Module
//!
//! Plain data types describing a scene before and after compilation.
//!
//! ## Key Components
//!
//! - [`atom`] - The immutable per-atom record emitted by the graphics engine
//! - [`camera`] - The raw camera parameter vector and its fixed field layout
//! - [`representation`] - The representation bit table and the named selection channels
//! - [`selection`] - Selection expressions at structure, chain, residue and atom granularity
//! - [`color_map`] - The four-layer color map and its priority-ordered lookup
//! - [`structure`] - Run-length HELIX/SHEET records
//!
//! ## Usage
//!
//! ```ignore
//! use molscene::core::models::atom::AtomRecord;
//! use molscene::core::models::selection::SelectionExpression;
//!
//! let atom = AtomRecord::new(1, "A", "10", "GLY", "CA", "C");
//! let expression = SelectionExpression::Chain { chain: "A".to_string() };
//! assert!(expression.matches(&atom));
//! ```

pub mod atom;
pub mod camera;
pub mod color_map;
pub mod representation;
pub mod selection;
pub mod structure;
