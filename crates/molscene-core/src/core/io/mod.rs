//! Text readers for the graphics engine's console dumps.
//!
//! The engine can report its scene through two commands: `iterate`, which prints
//! one line of per-atom fields, and `get_view`, which prints the 18-value camera
//! vector. Both readers share the [`traits::SceneInput`] interface so callers can
//! read from any buffered source or straight from a path.

pub mod iterate;
pub mod traits;
pub mod view;
