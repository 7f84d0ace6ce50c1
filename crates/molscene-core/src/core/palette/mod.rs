//! Color palette of the graphics engine.
//!
//! Atoms refer to colors by a small integer index. The [`ColorSwatch`] maps those
//! indices to a name, an RGB triple and the `0xRRGGBB` hex string the target
//! renderer expects. The built-in table covers every named color the engine ships
//! with; custom colors defined in a session can be added from a TOML file.

mod builtin;
pub mod swatch;

pub use swatch::{ColorItem, ColorSwatch, PaletteLoadError};
