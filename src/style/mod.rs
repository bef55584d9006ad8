//! Styling primitives: colors, color cycles and the preset palettes.

pub mod color;
pub mod cycle;
pub mod palette;

pub use color::Color;
pub use cycle::{ColorCycle, ColorCycleSpec};
