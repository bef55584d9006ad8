//! Registry keys written and read by the configurator.

pub const FONT_SIZE: &str = "font.size";
pub const FONT_FAMILY: &str = "font.family";
pub const FONT_SANS_SERIF: &str = "font.sans-serif";
pub const FIGURE_SIZE: &str = "figure.figsize";
pub const AXES_LINEWIDTH: &str = "axes.linewidth";
pub const AXES_PROP_CYCLE: &str = "axes.prop_cycle";
pub const LINES_LINEWIDTH: &str = "lines.linewidth";
pub const LINES_MARKERSIZE: &str = "lines.markersize";
pub const LINES_MARKEREDGEWIDTH: &str = "lines.markeredgewidth";
pub const IMAGE_CMAP: &str = "image.cmap";
pub const LATEX_PREAMBLE: &str = "text.latex.preamble";
pub const USETEX: &str = "text.usetex";
pub const ERRORBAR_CAPSIZE: &str = "errorbar.capsize";
