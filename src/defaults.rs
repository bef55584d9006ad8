//! The figure-defaults configurator.
//!
//! A [`FigureDefaults`] caches explicitly set property values and pushes each
//! of them into the settings registry it was built with. Reads of properties
//! that were never set go straight to the registry (or to a fixed default for
//! the figure geometry properties and `alpha`).

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::error::{StyleError, StyleResult};
use crate::options::{Property, StyleOptions, UnknownKeyPolicy};
use crate::overridable::Overridable;
use crate::preset::{Preset, Style};
use crate::settings::{keys, PlotSettings, SettingValue, SettingsMap, SettingsSink};
use crate::style::{Color, ColorCycleSpec};

pub const DEFAULT_ASPECT_RATIO: f64 = 4.0 / 3.0;
pub const DEFAULT_FIGURE_SIZE: f64 = 6.1;
pub const DEFAULT_SIZE_FRACTION: f64 = 1.0;
pub const DEFAULT_ALPHA: f64 = 1.0;

/// What `reset` does with cached overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Restore the registry only. Overridden properties keep reporting their
    /// cached values even though the registry no longer holds them.
    #[default]
    KeepOverrides,
    /// Restore the registry and drop every cached override
    ClearOverrides,
}

/// Getter/setter pair for a float property mapped 1:1 onto a registry key.
macro_rules! registry_f64 {
    ($field:ident, $setter:ident, $key:expr) => {
        pub fn $field(&self) -> StyleResult<f64> {
            self.$field.value(|| self.read_f64($key))
        }

        pub fn $setter(&mut self, value: f64) -> StyleResult<()> {
            self.$field.set(value);
            self.push($key, value.into())
        }
    };
}

/// Applies style presets and property overrides to a settings registry.
#[derive(Debug)]
pub struct FigureDefaults {
    settings: Box<dyn SettingsSink>,
    style: String,
    reset_policy: ResetPolicy,
    unknown_keys: UnknownKeyPolicy,
    extra: BTreeMap<String, serde_json::Value>,

    fontsize: Overridable<f64>,
    figure_size: Overridable<f64>,
    aspect_ratio: Overridable<f64>,
    font: Overridable<Vec<String>>,
    axes_linewidth: Overridable<f64>,
    linewidth: Overridable<f64>,
    linewidth_narrow: Overridable<f64>,
    color_cycle: Overridable<Vec<Color>>,
    colormap: Overridable<String>,
    latex_preamble: Overridable<String>,
    usetex: Overridable<bool>,
    markersize: Overridable<f64>,
    markeredgewidth: Overridable<f64>,
    alpha: Overridable<f64>,
    capsize: Overridable<f64>,
    size_fraction_x: Overridable<f64>,
    size_fraction_y: Overridable<f64>,
}

impl FigureDefaults {
    /// Build a configurator on `settings`.
    ///
    /// `options` are applied first, then `style` (so a preset wins over an
    /// option for any property both set), then the bulk `rc_params` update.
    pub fn new<S, T>(
        settings: S,
        style: T,
        rc_params: Option<SettingsMap>,
        options: StyleOptions,
    ) -> StyleResult<Self>
    where
        S: SettingsSink + 'static,
        T: Into<Style>,
    {
        let mut builder = Self::builder(settings).style(style).options(options);
        if let Some(values) = rc_params {
            builder = builder.rc_params(values);
        }
        builder.build()
    }

    /// Apply `style` to a fresh registry holding the stock defaults.
    pub fn from_style<T: Into<Style>>(style: T) -> StyleResult<Self> {
        Self::builder(PlotSettings::new()).style(style).build()
    }

    pub fn builder<S: SettingsSink + 'static>(settings: S) -> FigureDefaultsBuilder {
        FigureDefaultsBuilder {
            settings: Box::new(settings),
            style: None,
            rc_params: None,
            options: StyleOptions::default(),
            unknown_keys: UnknownKeyPolicy::default(),
            reset_policy: ResetPolicy::default(),
        }
    }

    fn empty(
        settings: Box<dyn SettingsSink>,
        unknown_keys: UnknownKeyPolicy,
        reset_policy: ResetPolicy,
    ) -> Self {
        FigureDefaults {
            settings,
            style: Preset::Default.name().to_string(),
            reset_policy,
            unknown_keys,
            extra: BTreeMap::new(),
            fontsize: Overridable::default(),
            figure_size: Overridable::default(),
            aspect_ratio: Overridable::default(),
            font: Overridable::default(),
            axes_linewidth: Overridable::default(),
            linewidth: Overridable::default(),
            linewidth_narrow: Overridable::default(),
            color_cycle: Overridable::default(),
            colormap: Overridable::default(),
            latex_preamble: Overridable::default(),
            usetex: Overridable::default(),
            markersize: Overridable::default(),
            markeredgewidth: Overridable::default(),
            alpha: Overridable::default(),
            capsize: Overridable::default(),
            size_fraction_x: Overridable::default(),
            size_fraction_y: Overridable::default(),
        }
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    /// Identifier of the last applied preset, or the name of a custom style.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Apply a style. `None` selects the no-op `default` preset.
    ///
    /// A preset only writes the properties it names; other overrides stay.
    /// A failure partway through leaves the earlier writes applied.
    pub fn set_style(&mut self, style: Option<Style>) -> StyleResult<()> {
        match style.unwrap_or_default() {
            Style::Custom(custom) => {
                custom.apply(self)?;
                self.style = custom.name().to_string();
            }
            Style::Named(name) => {
                let preset: Preset = name.parse()?;
                self.style = name;
                preset.apply(self)?;
            }
        }
        info!("Applied figure style '{}'", self.style);
        Ok(())
    }

    pub fn apply_style<T: Into<Style>>(&mut self, style: T) -> StyleResult<()> {
        self.set_style(Some(style.into()))
    }

    // ------------------------------------------------------------------
    // Registry access
    // ------------------------------------------------------------------

    /// The settings registry this configurator writes into.
    pub fn rc_params(&self) -> &dyn SettingsSink {
        self.settings.as_ref()
    }

    /// Push `values` straight into the registry. The configurator does not
    /// track these writes; cached overrides keep their values.
    pub fn update_rc_params(&mut self, values: &SettingsMap) -> StyleResult<()> {
        self.settings.update(values)
    }

    pub fn into_rc_params(self) -> Box<dyn SettingsSink> {
        self.settings
    }

    /// Restore the registry's built-in defaults, handling overrides per the
    /// configured [`ResetPolicy`].
    pub fn reset(&mut self) {
        self.reset_with(self.reset_policy);
    }

    pub fn reset_with(&mut self, policy: ResetPolicy) {
        self.settings.restore_defaults();
        match policy {
            ResetPolicy::KeepOverrides => {
                let overridden = self.overridden();
                if !overridden.is_empty() {
                    debug!(
                        "Registry reset; {} cached override(s) kept",
                        overridden.len()
                    );
                }
            }
            ResetPolicy::ClearOverrides => self.clear_overrides(),
        }
        info!("Figure settings reset to defaults");
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    pub fn set_reset_policy(&mut self, policy: ResetPolicy) {
        self.reset_policy = policy;
    }

    fn push(&mut self, key: &str, value: SettingValue) -> StyleResult<()> {
        self.settings.set(key, value)
    }

    fn read<T, F>(&self, key: &str, expected: &'static str, pick: F) -> StyleResult<T>
    where
        F: FnOnce(&SettingValue) -> Option<T>,
    {
        let value = self.settings.get(key)?;
        pick(&value).ok_or_else(|| StyleError::InvalidValue {
            key: key.to_string(),
            expected,
            found: value.kind(),
        })
    }

    fn read_f64(&self, key: &str) -> StyleResult<f64> {
        self.read(key, "float", SettingValue::as_f64)
    }

    fn read_string(&self, key: &str) -> StyleResult<String> {
        self.read(key, "string", |v| v.as_str().map(str::to_string))
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    registry_f64!(fontsize, set_fontsize, keys::FONT_SIZE);
    registry_f64!(axes_linewidth, set_axes_linewidth, keys::AXES_LINEWIDTH);
    registry_f64!(linewidth, set_linewidth, keys::LINES_LINEWIDTH);
    registry_f64!(markersize, set_markersize, keys::LINES_MARKERSIZE);
    registry_f64!(markeredgewidth, set_markeredgewidth, keys::LINES_MARKEREDGEWIDTH);
    registry_f64!(capsize, set_capsize, keys::ERRORBAR_CAPSIZE);

    /// Figure width in inches before the size fractions are applied.
    pub fn figure_size(&self) -> StyleResult<f64> {
        self.figure_size.value(|| Ok(DEFAULT_FIGURE_SIZE))
    }

    pub fn set_figure_size(&mut self, value: f64) -> StyleResult<()> {
        self.figure_size.set(value);
        self.push_figure_dimensions()
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> StyleResult<f64> {
        self.aspect_ratio.value(|| Ok(DEFAULT_ASPECT_RATIO))
    }

    pub fn set_aspect_ratio(&mut self, value: f64) -> StyleResult<()> {
        self.aspect_ratio.set(value);
        self.push_figure_dimensions()
    }

    pub fn size_fraction_x(&self) -> StyleResult<f64> {
        self.size_fraction_x.value(|| Ok(DEFAULT_SIZE_FRACTION))
    }

    pub fn set_size_fraction_x(&mut self, value: f64) -> StyleResult<()> {
        self.size_fraction_x.set(value);
        self.push_figure_dimensions()
    }

    pub fn size_fraction_y(&self) -> StyleResult<f64> {
        self.size_fraction_y.value(|| Ok(DEFAULT_SIZE_FRACTION))
    }

    pub fn set_size_fraction_y(&mut self, value: f64) -> StyleResult<()> {
        self.size_fraction_y.set(value);
        self.push_figure_dimensions()
    }

    /// `(width, height)` in inches derived from the geometry properties.
    pub fn figure_dimensions(&self) -> StyleResult<(f64, f64)> {
        let size = self.figure_size()?;
        let width = size * self.size_fraction_x()?;
        let height = size * self.size_fraction_y()? / self.aspect_ratio()?;
        Ok((width, height))
    }

    fn push_figure_dimensions(&mut self) -> StyleResult<()> {
        let dimensions = self.figure_dimensions()?;
        self.push(keys::FIGURE_SIZE, dimensions.into())
    }

    /// Font names, most preferred first. Falls back to the registry's font
    /// family list as stored, which may be empty.
    pub fn font(&self) -> StyleResult<Vec<String>> {
        self.font.value(|| {
            self.read(keys::FONT_FAMILY, "list of strings", |v| {
                v.as_text_list().map(<[String]>::to_vec)
            })
        })
    }

    pub fn set_font(&mut self, value: &str) -> StyleResult<()> {
        self.font.set(vec![value.to_string()]);
        self.push(keys::FONT_SANS_SERIF, value.into())
    }

    /// Width for secondary lines; half the line width unless set.
    pub fn linewidth_narrow(&self) -> StyleResult<f64> {
        self.linewidth_narrow.value(|| Ok(self.linewidth()? / 2.0))
    }

    pub fn set_linewidth_narrow(&mut self, value: f64) {
        self.linewidth_narrow.set(value);
    }

    pub fn color_cycle(&self) -> StyleResult<Vec<Color>> {
        self.color_cycle.value(|| {
            self.read(keys::AXES_PROP_CYCLE, "color cycle", |v| {
                v.as_cycle().map(|cycle| cycle.colors().to_vec())
            })
        })
    }

    /// Set the color cycle. Discrete colors are wrapped into a cycle before
    /// they reach the registry.
    pub fn set_color_cycle<C: Into<ColorCycleSpec>>(&mut self, value: C) -> StyleResult<()> {
        let spec = value.into();
        self.color_cycle.set(spec.colors());
        self.push(keys::AXES_PROP_CYCLE, spec.into_cycle().into())
    }

    pub fn colormap(&self) -> StyleResult<String> {
        self.colormap.value(|| self.read_string(keys::IMAGE_CMAP))
    }

    pub fn set_colormap(&mut self, value: &str) -> StyleResult<()> {
        self.colormap.set(value.to_string());
        self.push(keys::IMAGE_CMAP, value.into())
    }

    pub fn latex_preamble(&self) -> StyleResult<String> {
        self.latex_preamble
            .value(|| self.read_string(keys::LATEX_PREAMBLE))
    }

    pub fn set_latex_preamble(&mut self, value: &str) -> StyleResult<()> {
        self.latex_preamble.set(value.to_string());
        self.push(keys::LATEX_PREAMBLE, value.into())
    }

    pub fn usetex(&self) -> StyleResult<bool> {
        self.usetex
            .value(|| self.read(keys::USETEX, "bool", SettingValue::as_bool))
    }

    pub fn set_usetex(&mut self, value: bool) -> StyleResult<()> {
        self.usetex.set(value);
        self.push(keys::USETEX, value.into())
    }

    /// Opacity for plotted elements; never stored in the registry.
    pub fn alpha(&self) -> f64 {
        self.alpha.get().copied().unwrap_or(DEFAULT_ALPHA)
    }

    pub fn set_alpha(&mut self, value: f64) {
        self.alpha.set(value);
    }

    // ------------------------------------------------------------------
    // Options and overrides
    // ------------------------------------------------------------------

    /// Apply every set option through its setter.
    ///
    /// Extension keys naming a property are applied like the typed field.
    /// The remaining keys are checked against the unknown-key policy before
    /// any property is written.
    pub fn apply_options(&mut self, options: StyleOptions) -> StyleResult<()> {
        let options = options.with_known_extras()?;
        let StyleOptions {
            fontsize,
            figure_size,
            aspect_ratio,
            font,
            axes_linewidth,
            linewidth,
            linewidth_narrow,
            color_cycle,
            colormap,
            latex_preamble,
            usetex,
            markersize,
            markeredgewidth,
            alpha,
            capsize,
            size_fraction_x,
            size_fraction_y,
            extra,
        } = options;

        if self.unknown_keys == UnknownKeyPolicy::Reject {
            if let Some(key) = extra.keys().next() {
                return Err(StyleError::UnknownProperty(key.clone()));
            }
        }

        if let Some(v) = fontsize {
            self.set_fontsize(v)?;
        }
        if let Some(v) = figure_size {
            self.set_figure_size(v)?;
        }
        if let Some(v) = aspect_ratio {
            self.set_aspect_ratio(v)?;
        }
        if let Some(v) = font {
            self.set_font(&v)?;
        }
        if let Some(v) = axes_linewidth {
            self.set_axes_linewidth(v)?;
        }
        if let Some(v) = linewidth {
            self.set_linewidth(v)?;
        }
        if let Some(v) = linewidth_narrow {
            self.set_linewidth_narrow(v);
        }
        if let Some(v) = color_cycle {
            self.set_color_cycle(v)?;
        }
        if let Some(v) = colormap {
            self.set_colormap(&v)?;
        }
        if let Some(v) = latex_preamble {
            self.set_latex_preamble(&v)?;
        }
        if let Some(v) = usetex {
            self.set_usetex(v)?;
        }
        if let Some(v) = markersize {
            self.set_markersize(v)?;
        }
        if let Some(v) = markeredgewidth {
            self.set_markeredgewidth(v)?;
        }
        if let Some(v) = alpha {
            self.set_alpha(v);
        }
        if let Some(v) = capsize {
            self.set_capsize(v)?;
        }
        if let Some(v) = size_fraction_x {
            self.set_size_fraction_x(v)?;
        }
        if let Some(v) = size_fraction_y {
            self.set_size_fraction_y(v)?;
        }

        for (key, value) in extra {
            if self.unknown_keys == UnknownKeyPolicy::Warn {
                warn!("'{}' is not a figure style property; value kept unapplied", key);
            }
            self.extra.insert(key, value);
        }
        Ok(())
    }

    /// Value of an extension key kept from the options.
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    pub fn is_overridden(&self, property: Property) -> bool {
        match property {
            Property::Fontsize => self.fontsize.is_set(),
            Property::FigureSize => self.figure_size.is_set(),
            Property::AspectRatio => self.aspect_ratio.is_set(),
            Property::Font => self.font.is_set(),
            Property::AxesLinewidth => self.axes_linewidth.is_set(),
            Property::Linewidth => self.linewidth.is_set(),
            Property::LinewidthNarrow => self.linewidth_narrow.is_set(),
            Property::ColorCycle => self.color_cycle.is_set(),
            Property::Colormap => self.colormap.is_set(),
            Property::LatexPreamble => self.latex_preamble.is_set(),
            Property::Usetex => self.usetex.is_set(),
            Property::Markersize => self.markersize.is_set(),
            Property::Markeredgewidth => self.markeredgewidth.is_set(),
            Property::Alpha => self.alpha.is_set(),
            Property::Capsize => self.capsize.is_set(),
            Property::SizeFractionX => self.size_fraction_x.is_set(),
            Property::SizeFractionY => self.size_fraction_y.is_set(),
        }
    }

    /// Properties holding a cached override, in declaration order.
    pub fn overridden(&self) -> Vec<Property> {
        Property::ALL
            .iter()
            .copied()
            .filter(|p| self.is_overridden(*p))
            .collect()
    }

    fn clear_overrides(&mut self) {
        self.fontsize.clear();
        self.figure_size.clear();
        self.aspect_ratio.clear();
        self.font.clear();
        self.axes_linewidth.clear();
        self.linewidth.clear();
        self.linewidth_narrow.clear();
        self.color_cycle.clear();
        self.colormap.clear();
        self.latex_preamble.clear();
        self.usetex.clear();
        self.markersize.clear();
        self.markeredgewidth.clear();
        self.alpha.clear();
        self.capsize.clear();
        self.size_fraction_x.clear();
        self.size_fraction_y.clear();
    }
}

/// Step-by-step construction of a [`FigureDefaults`].
pub struct FigureDefaultsBuilder {
    settings: Box<dyn SettingsSink>,
    style: Option<Style>,
    rc_params: Option<SettingsMap>,
    options: StyleOptions,
    unknown_keys: UnknownKeyPolicy,
    reset_policy: ResetPolicy,
}

impl FigureDefaultsBuilder {
    pub fn style<T: Into<Style>>(mut self, style: T) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Bulk registry update pushed after the style has been applied.
    pub fn rc_params(mut self, values: SettingsMap) -> Self {
        self.rc_params = Some(values);
        self
    }

    pub fn options(mut self, options: StyleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn build(self) -> StyleResult<FigureDefaults> {
        let mut fd = FigureDefaults::empty(self.settings, self.unknown_keys, self.reset_policy);
        fd.apply_options(self.options)?;
        fd.set_style(self.style)?;
        if let Some(values) = self.rc_params {
            fd.update_rc_params(&values)?;
        }
        Ok(fd)
    }
}
