//! Named presets of plotting figure defaults.
//!
//! A [`FigureDefaults`] applies a style (a built-in [`Preset`] or a custom
//! routine) to a settings registry handed to it at construction, and keeps
//! the values it set so they can be read back:
//!
//! ```
//! use figure_defaults::{FigureDefaults, PlotSettings};
//!
//! let fd = FigureDefaults::builder(PlotSettings::new())
//!     .style("nature_sc")
//!     .build()
//!     .unwrap();
//! assert_eq!(fd.fontsize().unwrap(), 6.0);
//! ```

pub mod defaults;
pub mod error;
pub mod options;
pub mod overridable;
pub mod preset;
pub mod settings;
pub mod style;

pub use defaults::{FigureDefaults, FigureDefaultsBuilder, ResetPolicy};
pub use error::{StyleError, StyleResult};
pub use options::{Property, StyleOptions, UnknownKeyPolicy};
pub use overridable::Overridable;
pub use preset::{CustomStyle, Preset, Style};
pub use settings::{
    keys, load_settings, PlotSettings, SettingValue, SettingsMap, SettingsSink, SharedSettings,
};
pub use style::{Color, ColorCycle, ColorCycleSpec};
