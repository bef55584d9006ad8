//! Values held by a settings registry.

use serde::{Deserialize, Serialize};

use crate::style::ColorCycle;

/// A single registry value.
///
/// Untagged so a settings file can be plain JSON:
/// `{"font.size": 12, "figure.figsize": [6.4, 4.8], "text.usetex": false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Float(f64),
    Text(String),
    /// Two numbers, e.g. figure width and height in inches
    Pair(f64, f64),
    TextList(Vec<String>),
    Cycle(ColorCycle),
}

impl SettingValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Float(_) => "float",
            SettingValue::Text(_) => "string",
            SettingValue::Pair(_, _) => "pair of floats",
            SettingValue::TextList(_) => "list of strings",
            SettingValue::Cycle(_) => "color cycle",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            SettingValue::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::TextList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_cycle(&self) -> Option<&ColorCycle> {
        match self {
            SettingValue::Cycle(cycle) => Some(cycle),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Float(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Text(v)
    }
}

impl From<(f64, f64)> for SettingValue {
    fn from((a, b): (f64, f64)) -> Self {
        SettingValue::Pair(a, b)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(v: Vec<String>) -> Self {
        SettingValue::TextList(v)
    }
}

impl From<ColorCycle> for SettingValue {
    fn from(v: ColorCycle) -> Self {
        SettingValue::Cycle(v)
    }
}
