//! Color palettes used by the presets.

use super::color::Color;

/// Seven-color palette chosen to stay distinguishable under color blindness.
pub const ACCESSIBLE: [&str; 7] = [
    "#648fff", "#fe6100", "#dc267f", "#785ef0", "#ffb000", "#000000", "#ffffff",
];

/// The ten "tab" colors of the stock color cycle.
pub const TAB10: [&str; 10] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
];

pub fn accessible() -> Vec<Color> {
    ACCESSIBLE.iter().map(|hex| Color::from(*hex)).collect()
}

pub fn tab10() -> Vec<Color> {
    TAB10.iter().map(|hex| Color::from(*hex)).collect()
}
