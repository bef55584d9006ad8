//! Error types for figure_defaults.

use std::fmt;
use std::io;

/// The main error type for style and settings operations.
#[derive(Debug)]
pub enum StyleError {
    /// Style identifier not present in the preset registry
    UnknownStyle { name: String, valid: Vec<&'static str> },
    /// Registry key not recognized by the settings sink
    MissingRegistryKey(String),
    /// Registry refused a value of the wrong kind
    InvalidValue {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Option key that does not name a stylable property
    UnknownProperty(String),
    /// Error while reading a settings or options file
    Io(io::Error),
    /// Malformed JSON in a settings or options file
    Parse(serde_json::Error),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UnknownStyle { name, valid } => write!(
                f,
                "Unknown style '{}' (valid styles: {})",
                name,
                valid.join(", ")
            ),
            StyleError::MissingRegistryKey(key) => {
                write!(f, "'{}' is not a valid settings key", key)
            }
            StyleError::InvalidValue {
                key,
                expected,
                found,
            } => write!(
                f,
                "Invalid value for '{}': expected {}, got {}",
                key, expected, found
            ),
            StyleError::UnknownProperty(name) => write!(f, "Unknown style property '{}'", name),
            StyleError::Io(err) => write!(f, "IO error: {}", err),
            StyleError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for StyleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StyleError::Io(err) => Some(err),
            StyleError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for StyleError {
    fn from(err: io::Error) -> Self {
        StyleError::Io(err)
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::Parse(err)
    }
}

/// Result type alias for style operations.
pub type StyleResult<T> = Result<T, StyleError>;
