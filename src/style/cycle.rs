//! Cyclic color sequences.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// The registry's cyclic color-sequence representation.
///
/// Mirrors a property cycler keyed by `color`: in JSON it reads and writes
/// as `{"color": ["#1f77b4", ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorCycle {
    color: Vec<Color>,
}

impl ColorCycle {
    pub fn new<I, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Color>,
    {
        ColorCycle {
            color: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// The colors of the cycle, in order.
    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    pub fn len(&self) -> usize {
        self.color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_empty()
    }
}

/// Value accepted by the `color_cycle` setter.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorCycleSpec {
    /// Discrete colors, wrapped into a [`ColorCycle`] before being pushed
    Colors(Vec<Color>),
    /// An already-built cycle, pushed as is
    Cycle(ColorCycle),
}

impl ColorCycleSpec {
    /// The colors this value stands for.
    pub fn colors(&self) -> Vec<Color> {
        match self {
            ColorCycleSpec::Colors(colors) => colors.clone(),
            ColorCycleSpec::Cycle(cycle) => cycle.colors().to_vec(),
        }
    }

    /// The cycle to push into the registry.
    pub fn into_cycle(self) -> ColorCycle {
        match self {
            ColorCycleSpec::Colors(colors) => ColorCycle { color: colors },
            ColorCycleSpec::Cycle(cycle) => cycle,
        }
    }
}

impl From<ColorCycle> for ColorCycleSpec {
    fn from(cycle: ColorCycle) -> Self {
        ColorCycleSpec::Cycle(cycle)
    }
}

impl From<Vec<Color>> for ColorCycleSpec {
    fn from(colors: Vec<Color>) -> Self {
        ColorCycleSpec::Colors(colors)
    }
}

impl From<&[&str]> for ColorCycleSpec {
    fn from(colors: &[&str]) -> Self {
        ColorCycleSpec::Colors(colors.iter().map(|c| Color::from(*c)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ColorCycleSpec {
    fn from(colors: [&str; N]) -> Self {
        ColorCycleSpec::Colors(colors.iter().map(|c| Color::from(*c)).collect())
    }
}
