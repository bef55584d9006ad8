//! The plotting settings registry the configurator writes into.
//!
//! The registry is reached only through the [`SettingsSink`] capability that
//! is handed to a configurator at construction. [`PlotSettings`] is the
//! in-memory registry carrying the stock defaults; [`SharedSettings`] lets
//! several configurators deliberately share one registry.

pub mod keys;
pub mod shared;
pub mod value;

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::{StyleError, StyleResult};
use crate::style::{palette, ColorCycle};

pub use shared::SharedSettings;
pub use value::SettingValue;

/// A bulk mapping of registry keys to values.
pub type SettingsMap = BTreeMap<String, SettingValue>;

/// Mutable key-value registry of plotting settings.
pub trait SettingsSink: fmt::Debug {
    /// Current value of `key`; `MissingRegistryKey` if the registry does not know it.
    fn get(&self, key: &str) -> StyleResult<SettingValue>;

    /// Store `value` under `key`; fails for unknown keys or values of the wrong kind.
    fn set(&mut self, key: &str, value: SettingValue) -> StyleResult<()>;

    /// Restore every key to the registry's built-in default.
    fn restore_defaults(&mut self);

    /// Apply a bulk update in key order. Stops at the first failure; earlier
    /// entries stay applied.
    fn update(&mut self, values: &SettingsMap) -> StyleResult<()> {
        for (key, value) in values {
            self.set(key, value.clone())?;
        }
        Ok(())
    }
}

/// In-memory settings registry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    values: SettingsMap,
    defaults: SettingsMap,
}

impl PlotSettings {
    /// Registry holding the stock defaults.
    pub fn new() -> Self {
        Self::with_defaults(builtin_defaults())
    }

    /// Registry whose known keys and built-in defaults are `defaults`.
    pub fn with_defaults(defaults: SettingsMap) -> Self {
        PlotSettings {
            values: defaults.clone(),
            defaults,
        }
    }

    /// Copy of every current value.
    pub fn snapshot(&self) -> SettingsMap {
        self.values.clone()
    }

    /// The built-in defaults restored by [`SettingsSink::restore_defaults`].
    pub fn defaults(&self) -> &SettingsMap {
        &self.defaults
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsSink for PlotSettings {
    fn get(&self, key: &str) -> StyleResult<SettingValue> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| StyleError::MissingRegistryKey(key.to_string()))
    }

    fn set(&mut self, key: &str, value: SettingValue) -> StyleResult<()> {
        let default = self
            .defaults
            .get(key)
            .ok_or_else(|| StyleError::MissingRegistryKey(key.to_string()))?;
        let value = coerce(key, value, default)?;
        debug!("settings: {} = {:?}", key, value);
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn restore_defaults(&mut self) {
        self.values = self.defaults.clone();
    }
}

/// Validate `value` against the kind of the key's default.
fn coerce(key: &str, value: SettingValue, default: &SettingValue) -> StyleResult<SettingValue> {
    match (value, default) {
        (SettingValue::Text(s), SettingValue::TextList(_)) => Ok(SettingValue::TextList(vec![s])),
        (value, default) if value.kind() == default.kind() => Ok(value),
        (value, default) => Err(StyleError::InvalidValue {
            key: key.to_string(),
            expected: default.kind(),
            found: value.kind(),
        }),
    }
}

/// The stock defaults of the plotting library.
pub fn builtin_defaults() -> SettingsMap {
    let entries: Vec<(&str, SettingValue)> = vec![
        (keys::FONT_SIZE, 10.0.into()),
        (keys::FONT_FAMILY, vec!["sans-serif".to_string()].into()),
        (
            keys::FONT_SANS_SERIF,
            ["DejaVu Sans", "Bitstream Vera Sans", "Arial", "Helvetica", "sans-serif"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into(),
        ),
        (keys::FIGURE_SIZE, (6.4, 4.8).into()),
        (keys::AXES_LINEWIDTH, 0.8.into()),
        (keys::AXES_PROP_CYCLE, ColorCycle::new(palette::TAB10).into()),
        (keys::LINES_LINEWIDTH, 1.5.into()),
        (keys::LINES_MARKERSIZE, 6.0.into()),
        (keys::LINES_MARKEREDGEWIDTH, 1.0.into()),
        (keys::IMAGE_CMAP, "viridis".into()),
        (keys::LATEX_PREAMBLE, "".into()),
        (keys::USETEX, false.into()),
        (keys::ERRORBAR_CAPSIZE, 0.0.into()),
    ];
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Load a bulk settings update from a JSON object file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> StyleResult<SettingsMap> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let values: SettingsMap = serde_json::from_reader(reader)?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unknown_key_is_missing_on_get_and_set() {
        let mut settings = PlotSettings::new();
        assert!(matches!(
            settings.get("no.such.key"),
            Err(StyleError::MissingRegistryKey(k)) if k == "no.such.key"
        ));
        assert!(matches!(
            settings.set("no.such.key", 1.0.into()),
            Err(StyleError::MissingRegistryKey(_))
        ));
    }

    #[test]
    fn test_set_validates_kind() {
        let mut settings = PlotSettings::new();
        let err = settings.set(keys::FONT_SIZE, "large".into()).unwrap_err();
        assert!(matches!(
            err,
            StyleError::InvalidValue { expected: "float", found: "string", .. }
        ));
        assert_eq!(settings.get(keys::FONT_SIZE).unwrap(), SettingValue::Float(10.0));
    }

    #[test]
    fn test_text_coerced_into_list() {
        let mut settings = PlotSettings::new();
        settings.set(keys::FONT_SANS_SERIF, "Times New Roman".into()).unwrap();
        assert_eq!(
            settings.get(keys::FONT_SANS_SERIF).unwrap(),
            SettingValue::TextList(vec!["Times New Roman".to_string()])
        );
    }

    #[test]
    fn test_restore_defaults() {
        let mut settings = PlotSettings::new();
        let before = settings.snapshot();
        settings.set(keys::USETEX, true.into()).unwrap();
        settings.set(keys::FIGURE_SIZE, (1.0, 2.0).into()).unwrap();
        assert_ne!(settings.snapshot(), before);
        settings.restore_defaults();
        assert_eq!(settings.snapshot(), before);
    }

    #[test]
    fn test_update_stops_at_first_error() {
        let mut settings = PlotSettings::new();
        let mut values = SettingsMap::new();
        values.insert(keys::FONT_SIZE.to_string(), 12.0.into());
        values.insert("zzz.unknown".to_string(), 1.0.into());
        assert!(settings.update(&values).is_err());
        assert_eq!(settings.get(keys::FONT_SIZE).unwrap(), SettingValue::Float(12.0));
    }

    #[test]
    fn test_load_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"font.size": 14, "text.usetex": true, "figure.figsize": [3, 2]}}"#).unwrap();
        let values = load_settings(file.path()).unwrap();
        let mut settings = PlotSettings::new();
        settings.update(&values).unwrap();
        assert_eq!(settings.get(keys::FONT_SIZE).unwrap(), SettingValue::Float(14.0));
        assert_eq!(settings.get(keys::USETEX).unwrap(), SettingValue::Bool(true));
        assert_eq!(settings.get(keys::FIGURE_SIZE).unwrap(), SettingValue::Pair(3.0, 2.0));
    }

    #[test]
    fn test_custom_default_table() {
        let mut defaults = SettingsMap::new();
        defaults.insert(keys::FONT_SIZE.to_string(), 8.0.into());
        let settings = PlotSettings::with_defaults(defaults);
        assert!(settings.contains_key(keys::FONT_SIZE));
        assert!(!settings.contains_key(keys::USETEX));
        assert_eq!(settings.keys().count(), 1);
    }
}
