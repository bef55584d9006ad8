//! Typed keyword overrides applied at construction.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{StyleError, StyleResult};
use crate::style::Color;

/// Every stylable property of a [`FigureDefaults`](crate::FigureDefaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Fontsize,
    FigureSize,
    AspectRatio,
    Font,
    AxesLinewidth,
    Linewidth,
    LinewidthNarrow,
    ColorCycle,
    Colormap,
    LatexPreamble,
    Usetex,
    Markersize,
    Markeredgewidth,
    Alpha,
    Capsize,
    SizeFractionX,
    SizeFractionY,
}

impl Property {
    pub const ALL: [Property; 17] = [
        Property::Fontsize,
        Property::FigureSize,
        Property::AspectRatio,
        Property::Font,
        Property::AxesLinewidth,
        Property::Linewidth,
        Property::LinewidthNarrow,
        Property::ColorCycle,
        Property::Colormap,
        Property::LatexPreamble,
        Property::Usetex,
        Property::Markersize,
        Property::Markeredgewidth,
        Property::Alpha,
        Property::Capsize,
        Property::SizeFractionX,
        Property::SizeFractionY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Fontsize => "fontsize",
            Property::FigureSize => "figure_size",
            Property::AspectRatio => "aspect_ratio",
            Property::Font => "font",
            Property::AxesLinewidth => "axes_linewidth",
            Property::Linewidth => "linewidth",
            Property::LinewidthNarrow => "linewidth_narrow",
            Property::ColorCycle => "color_cycle",
            Property::Colormap => "colormap",
            Property::LatexPreamble => "latex_preamble",
            Property::Usetex => "usetex",
            Property::Markersize => "markersize",
            Property::Markeredgewidth => "markeredgewidth",
            Property::Alpha => "alpha",
            Property::Capsize => "capsize",
            Property::SizeFractionX => "size_fraction_x",
            Property::SizeFractionY => "size_fraction_y",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StyleError::UnknownProperty(s.to_string()))
    }
}

/// What to do with option keys that name no known property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Fail with `UnknownProperty`
    #[default]
    Reject,
    /// Log a warning and keep the value in the extension map
    Warn,
    /// Keep the value in the extension map silently
    Ignore,
}

/// Initial property overrides.
///
/// Unset fields leave the property untouched. Reads from JSON with the
/// property names as keys; any other key lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub fontsize: Option<f64>,
    pub figure_size: Option<f64>,
    pub aspect_ratio: Option<f64>,
    pub font: Option<String>,
    pub axes_linewidth: Option<f64>,
    pub linewidth: Option<f64>,
    pub linewidth_narrow: Option<f64>,
    pub color_cycle: Option<Vec<Color>>,
    pub colormap: Option<String>,
    pub latex_preamble: Option<String>,
    pub usetex: Option<bool>,
    pub markersize: Option<f64>,
    pub markeredgewidth: Option<f64>,
    pub alpha: Option<f64>,
    pub capsize: Option<f64>,
    pub size_fraction_x: Option<f64>,
    pub size_fraction_y: Option<f64>,
    /// Keys that are not stylable properties
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object file.
    pub fn load<P: AsRef<Path>>(path: P) -> StyleResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let options: StyleOptions = serde_json::from_reader(reader)?;
        Ok(options)
    }

    /// Add an entry to the extension map.
    pub fn with_extra(mut self, key: &str, value: serde_json::Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// Move `extra` entries that name a property into the typed fields.
    ///
    /// A typed field that is already set wins over an `extra` entry for the
    /// same property. Values of the wrong type fail with `Parse`.
    pub fn with_known_extras(mut self) -> StyleResult<Self> {
        let known: Vec<String> = self
            .extra
            .keys()
            .filter(|key| key.parse::<Property>().is_ok())
            .cloned()
            .collect();
        if known.is_empty() {
            return Ok(self);
        }

        let mut fields = serde_json::Map::new();
        for key in known {
            if let Some(value) = self.extra.remove(&key) {
                fields.insert(key, value);
            }
        }
        let parsed: StyleOptions = serde_json::from_value(serde_json::Value::Object(fields))?;

        self.fontsize = self.fontsize.or(parsed.fontsize);
        self.figure_size = self.figure_size.or(parsed.figure_size);
        self.aspect_ratio = self.aspect_ratio.or(parsed.aspect_ratio);
        self.font = self.font.or(parsed.font);
        self.axes_linewidth = self.axes_linewidth.or(parsed.axes_linewidth);
        self.linewidth = self.linewidth.or(parsed.linewidth);
        self.linewidth_narrow = self.linewidth_narrow.or(parsed.linewidth_narrow);
        self.color_cycle = self.color_cycle.or(parsed.color_cycle);
        self.colormap = self.colormap.or(parsed.colormap);
        self.latex_preamble = self.latex_preamble.or(parsed.latex_preamble);
        self.usetex = self.usetex.or(parsed.usetex);
        self.markersize = self.markersize.or(parsed.markersize);
        self.markeredgewidth = self.markeredgewidth.or(parsed.markeredgewidth);
        self.alpha = self.alpha.or(parsed.alpha);
        self.capsize = self.capsize.or(parsed.capsize);
        self.size_fraction_x = self.size_fraction_x.or(parsed.size_fraction_x);
        self.size_fraction_y = self.size_fraction_y.or(parsed.size_fraction_y);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
