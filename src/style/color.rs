//! Color values stored in color cycles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color entry of a color cycle.
///
/// Serialized as its string form: `#rrggbb`, `#rrggbbaa` or the color name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    /// RGB color with values 0-255
    Rgb(u8, u8, u8),
    /// RGBA color with alpha 0.0-1.0
    Rgba(u8, u8, u8, f64),
    /// Named color (e.g., "red", "C0")
    Named(String),
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba(r, g, b, a.clamp(0.0, 1.0))
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .ok()
                        .map(|v| v * 17)
                };
                Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::Rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    /// Hex form of the color; named colors are returned unchanged.
    pub fn to_hex(&self) -> String {
        match self {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                r,
                g,
                b,
                (a * 255.0).round() as u8
            ),
            Color::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        let looks_hex =
            s.starts_with('#') || (s.len() >= 6 && s.chars().all(|c| c.is_ascii_hexdigit()));
        if looks_hex {
            Color::from_hex(s).unwrap_or_else(|| Color::Named(s.to_string()))
        } else {
            Color::Named(s.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}
