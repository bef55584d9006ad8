//! Named style presets and custom style routines.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::defaults::FigureDefaults;
use crate::error::{StyleError, StyleResult};
use crate::style::palette;

/// Width of a single journal column in inches.
const PR_COLUMN_WIDTH: f64 = 3.0 + 3.0 / 8.0;

const SERIF_FONT: &str = "Times New Roman";

/// The built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Leaves every property untouched
    #[default]
    Default,
    Large,
    /// Nature single column
    NatureSc,
    /// Nature double column
    NatureDc,
    AncStyle,
    Presentation,
    PrSingleColumn,
    PrDoubleColumn,
    PrOneAndHalfColumn,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Default,
        Preset::Large,
        Preset::NatureSc,
        Preset::NatureDc,
        Preset::AncStyle,
        Preset::Presentation,
        Preset::PrSingleColumn,
        Preset::PrDoubleColumn,
        Preset::PrOneAndHalfColumn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Large => "large",
            Preset::NatureSc => "nature_sc",
            Preset::NatureDc => "nature_dc",
            Preset::AncStyle => "anc_style",
            Preset::Presentation => "presentation",
            Preset::PrSingleColumn => "pr_single_column",
            Preset::PrDoubleColumn => "pr_double_column",
            Preset::PrOneAndHalfColumn => "pr_one_and_half_column",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Preset::ALL.iter().map(Preset::name).collect()
    }

    /// Run the preset's property writes against `fd`, in order.
    pub(crate) fn apply(&self, fd: &mut FigureDefaults) -> StyleResult<()> {
        match self {
            Preset::Default => Ok(()),
            Preset::Large => large(fd),
            Preset::NatureSc => nature(fd, 3.5),
            Preset::NatureDc => nature(fd, 6.1),
            Preset::AncStyle => anc_style(fd),
            Preset::Presentation => presentation(fd),
            Preset::PrSingleColumn => pr(fd, PR_COLUMN_WIDTH),
            Preset::PrOneAndHalfColumn => pr(fd, PR_COLUMN_WIDTH * 1.5),
            Preset::PrDoubleColumn => pr(fd, PR_COLUMN_WIDTH * 2.0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = StyleError;

    /// Exact, case-sensitive match on the preset identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| StyleError::UnknownStyle {
                name: s.to_string(),
                valid: Preset::names(),
            })
    }
}

type StyleFn = dyn Fn(&mut FigureDefaults) -> StyleResult<()>;

/// A user-supplied style routine with the name it is reported under.
#[derive(Clone)]
pub struct CustomStyle {
    name: String,
    func: Rc<StyleFn>,
}

impl CustomStyle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn apply(&self, fd: &mut FigureDefaults) -> StyleResult<()> {
        (self.func)(fd)
    }
}

impl fmt::Debug for CustomStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomStyle").field("name", &self.name).finish()
    }
}

/// Style to apply: a preset identifier or a custom routine.
#[derive(Debug, Clone)]
pub enum Style {
    /// Identifier looked up among the presets when applied
    Named(String),
    Custom(CustomStyle),
}

impl Style {
    pub fn custom<F>(name: &str, func: F) -> Self
    where
        F: Fn(&mut FigureDefaults) -> StyleResult<()> + 'static,
    {
        Style::Custom(CustomStyle {
            name: name.to_string(),
            func: Rc::new(func),
        })
    }

    /// Identifier recorded once the style has been applied.
    pub fn name(&self) -> &str {
        match self {
            Style::Named(name) => name,
            Style::Custom(custom) => custom.name(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::from(Preset::Default)
    }
}

impl From<Preset> for Style {
    fn from(preset: Preset) -> Self {
        Style::Named(preset.name().to_string())
    }
}

impl From<&str> for Style {
    fn from(name: &str) -> Self {
        Style::Named(name.to_string())
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Style::Named(name)
    }
}

fn common_settings(fd: &mut FigureDefaults) -> StyleResult<()> {
    fd.set_usetex(false)
}

/// Marker size plus the properties derived from it.
fn markers(fd: &mut FigureDefaults, size: f64) -> StyleResult<()> {
    fd.set_markersize(size)?;
    let markersize = fd.markersize()?;
    fd.set_markeredgewidth(markersize / 7.0)
}

fn unit_size_fractions(fd: &mut FigureDefaults) -> StyleResult<()> {
    fd.set_size_fraction_x(1.0)?;
    fd.set_size_fraction_y(1.0)
}

fn large(fd: &mut FigureDefaults) -> StyleResult<()> {
    common_settings(fd)?;
    fd.set_fontsize(15.0)?;
    fd.set_figure_size(10.0)?;
    fd.set_aspect_ratio(1.5)?;
    fd.set_font(SERIF_FONT)
}

fn nature(fd: &mut FigureDefaults, figure_size: f64) -> StyleResult<()> {
    common_settings(fd)?;
    // Nature asks for 5-7 pt text
    fd.set_fontsize(6.0)?;
    fd.set_figure_size(figure_size)?;
    fd.set_font(SERIF_FONT)
}

/// Shared body of the `pr_*` presets, which differ only in figure width.
fn pr(fd: &mut FigureDefaults, figure_size: f64) -> StyleResult<()> {
    common_settings(fd)?;
    fd.set_fontsize(6.0)?;
    fd.set_figure_size(PR_COLUMN_WIDTH)?;
    fd.set_font(SERIF_FONT)?;
    markers(fd, 3.0)?;
    fd.set_linewidth(1.0)?;
    fd.set_alpha(0.7);
    let capsize = fd.markersize()?;
    fd.set_capsize(capsize)?;
    unit_size_fractions(fd)?;
    fd.set_color_cycle(palette::accessible())?;
    fd.set_figure_size(figure_size)
}

fn anc_style(fd: &mut FigureDefaults) -> StyleResult<()> {
    fd.set_fontsize(6.0)?;
    fd.set_figure_size(6.1)?;
    fd.set_font(SERIF_FONT)?;
    markers(fd, 3.0)?;
    fd.set_linewidth(1.0)?;
    fd.set_alpha(0.7);
    let capsize = fd.markersize()?;
    fd.set_capsize(capsize)?;
    unit_size_fractions(fd)?;
    fd.set_color_cycle(palette::tab10())
}

fn presentation(fd: &mut FigureDefaults) -> StyleResult<()> {
    fd.set_fontsize(16.0)?;
    fd.set_figure_size(6.4)?;
    markers(fd, 8.0)?;
    fd.set_linewidth(1.5)?;
    fd.set_axes_linewidth(1.5)?;
    fd.set_alpha(0.7);
    fd.set_aspect_ratio(0.9)?;
    unit_size_fractions(fd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup_is_exact() {
        assert_eq!("nature_sc".parse::<Preset>().unwrap(), Preset::NatureSc);
        assert!("Nature_SC".parse::<Preset>().is_err());
        assert!(" large".parse::<Preset>().is_err());
    }

    #[test]
    fn test_unknown_preset_lists_all_names() {
        match "nonexistent_style".parse::<Preset>() {
            Err(StyleError::UnknownStyle { name, valid }) => {
                assert_eq!(name, "nonexistent_style");
                assert_eq!(valid.len(), 9);
                assert!(valid.contains(&"pr_one_and_half_column"));
            }
            other => panic!("expected UnknownStyle, got {:?}", other),
        }
    }

    #[test]
    fn test_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_style_names() {
        assert_eq!(Style::default().name(), "default");
        assert_eq!(Style::from(Preset::AncStyle).name(), "anc_style");
        assert_eq!(Style::custom("mine", |_| Ok(())).name(), "mine");
    }

    #[test]
    fn test_column_widths() {
        assert_eq!(PR_COLUMN_WIDTH, 3.375);
        assert_eq!(PR_COLUMN_WIDTH * 1.5, 5.0625);
        assert_eq!(PR_COLUMN_WIDTH * 2.0, 6.75);
    }
}
