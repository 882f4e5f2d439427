//! Pushing themes into the host's global style state.
//!
//! These functions are the only ones in the crate that mutate host state.
//! Application is process-wide and last-applied-wins: nothing is scoped and
//! nothing is merged across calls. [`reset_theme`] is the only inverse.

use std::collections::BTreeMap;

use oxford_theme_render::{FigureSize, FigureSpec, PlotHost};

use super::{ThemeConfig, ThemeOptions, compute_effective_config};
use crate::journal::JournalPreset;
use crate::preset::resolve_preset;
use crate::{Error, Result};

/// Push a resolved theme into the host.
///
/// The base style is activated first, then the Oxford rc values are merged
/// on top of it. The rc batch is built before the host is touched. If the
/// host accepts the style but rejects the rc update, the new base style stays
/// active without the Oxford values; call [`reset_theme`] to recover.
pub fn apply_theme<H: PlotHost>(host: &mut H, config: &ThemeConfig) -> Result<()> {
    let params = config.rc_params();
    host.use_style(config.style_base.name())?;
    host.update_rc(&params)?;

    tracing::info!(
        style_base = config.style_base.name(),
        font_scale = config.font_scale,
        colors = config.color_cycle.len(),
        "applied Oxford theme"
    );
    Ok(())
}

/// Resolve `options` and apply the result.
///
/// Validation finishes before the host is touched, so an invalid color or
/// scale leaves the current global style as it was.
pub fn apply_oxford_theme<H: PlotHost>(host: &mut H, options: &ThemeOptions) -> Result<ThemeConfig> {
    let config = compute_effective_config(options)?;
    apply_theme(host, &config)?;
    Ok(config)
}

/// Apply a named preset.
///
/// # Errors
///
/// [`Error::UnknownPreset`] when the name is not registered.
pub fn apply_preset<H: PlotHost>(host: &mut H, name: &str) -> Result<ThemeConfig> {
    let preset = resolve_preset(name)?;
    tracing::debug!(preset = preset.name.name(), "applying preset");
    apply_oxford_theme(host, &preset.theme_options())
}

/// Restore the host's library defaults.
pub fn reset_theme<H: PlotHost>(host: &mut H) {
    host.restore_defaults();
    tracing::info!("reset theme to library defaults");
}

/// Options for [`oxford_figure`].
#[derive(Debug, Clone, PartialEq)]
pub struct FigureOptions {
    /// Figure size in inches.
    pub size: FigureSize,
    /// Theme overrides applied before the figure is created.
    pub theme: ThemeOptions,
    /// Extra options forwarded to the host's subplot call.
    pub subplot_options: BTreeMap<String, String>,
}

impl FigureOptions {
    /// Default options with a custom size.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            size: FigureSize::new(width, height),
            ..Self::default()
        }
    }

    /// Replace the theme overrides.
    pub fn with_theme(mut self, theme: ThemeOptions) -> Self {
        self.theme = theme;
        self
    }

    /// Add a passthrough subplot option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.subplot_options.insert(key.into(), value.into());
        self
    }
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            size: FigureSize::new(10.0, 6.0),
            theme: ThemeOptions::default(),
            subplot_options: BTreeMap::new(),
        }
    }
}

impl From<&JournalPreset> for FigureOptions {
    fn from(preset: &JournalPreset) -> Self {
        let (width, height) = preset.figsize;
        Self::sized(width, height)
    }
}

/// Apply the theme and create a figure with a single axes.
///
/// # Errors
///
/// [`Error::InvalidParameter`] when either dimension is not positive, plus
/// anything [`apply_oxford_theme`] or the host reports.
pub fn oxford_figure<H: PlotHost>(host: &mut H, options: &FigureOptions) -> Result<(H::Figure, H::Axes)> {
    if !options.size.is_valid() {
        return Err(Error::invalid_parameter(
            "figsize",
            format!(
                "dimensions must be positive, got ({}, {})",
                options.size.width, options.size.height
            ),
        ));
    }

    apply_oxford_theme(host, &options.theme)?;

    let spec = FigureSpec {
        size: options.size,
        options: options.subplot_options.clone(),
    };
    Ok(host.subplots(&spec)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleBase;
    use oxford_theme_render::{HostEvent, RcValue, RecordingHost};

    #[test]
    fn apply_sets_style_then_rc() {
        let mut host = RecordingHost::new();
        let config = apply_oxford_theme(&mut host, &ThemeOptions::new()).unwrap();

        let events = host.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], HostEvent::UseStyle("seaborn-v0_8-paper".into()));
        assert_eq!(events[1], HostEvent::UpdateRc(config.rc_params()));
        assert_eq!(
            host.rc_params().get("text.color").and_then(RcValue::as_str),
            Some("#002147")
        );
    }

    #[test]
    fn invalid_request_leaves_host_untouched() {
        let mut host = RecordingHost::new();
        let before = host.rc_params();
        let options = ThemeOptions::new().color_cycle(["oxford_blue", "not_a_color"]);

        assert!(apply_oxford_theme(&mut host, &options).is_err());
        assert!(host.events().is_empty());
        assert_eq!(host.rc_params(), before);
    }

    #[test]
    fn last_applied_wins() {
        let mut host = RecordingHost::new();
        apply_oxford_theme(&mut host, &ThemeOptions::new().font_scale(1.8)).unwrap();
        apply_oxford_theme(&mut host, &ThemeOptions::new().style_base(StyleBase::SeabornNotebook))
            .unwrap();

        assert_eq!(host.active_style().as_deref(), Some("seaborn-v0_8-notebook"));
        assert_eq!(host.rc_params().number("axes.labelsize"), Some(11.0));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut host = RecordingHost::new();
        let defaults = host.rc_params();
        apply_oxford_theme(&mut host, &ThemeOptions::new()).unwrap();
        reset_theme(&mut host);
        assert_eq!(host.rc_params(), defaults);
        assert!(host.active_style().is_none());
    }

    #[test]
    fn preset_application() {
        let mut host = RecordingHost::new();
        let config = apply_preset(&mut host, "Presentation").unwrap();
        assert_eq!(config.font_scale, 1.4);
        assert_eq!(host.rc_params().number("axes.labelsize"), Some(12.32));

        assert!(matches!(apply_preset(&mut host, "keynote"), Err(Error::UnknownPreset { .. })));
    }

    #[test]
    fn figure_uses_theme_and_geometry() {
        let mut host = RecordingHost::new();
        let options = FigureOptions::sized(3.5, 2.5)
            .with_theme(ThemeOptions::new().color_cycle(["coral", "aqua"]))
            .with_option("dpi", "150");
        let (figure, axes) = oxford_figure(&mut host, &options).unwrap();

        assert_eq!(axes.figure, figure.id());
        assert_eq!(figure.spec().size, FigureSize::new(3.5, 2.5));
        assert_eq!(figure.spec().options.get("dpi").map(String::as_str), Some("150"));
        assert_eq!(
            figure.rc().get("axes.prop_cycle").and_then(RcValue::as_list),
            Some(&["#FE615A".to_string(), "#00AAB4".to_string()][..])
        );
    }

    #[test]
    fn figure_rejects_bad_size_before_applying() {
        let mut host = RecordingHost::new();
        let err = oxford_figure(&mut host, &FigureOptions::sized(0.0, 6.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref parameter, .. } if parameter == "figsize"));
        assert!(host.events().is_empty());
    }

    #[test]
    fn default_figure_size() {
        assert_eq!(FigureOptions::default().size, FigureSize::new(10.0, 6.0));
    }

    struct RcRejectingHost(RecordingHost);

    impl PlotHost for RcRejectingHost {
        type Figure = <RecordingHost as PlotHost>::Figure;
        type Axes = <RecordingHost as PlotHost>::Axes;

        fn use_style(&mut self, style: &str) -> oxford_theme_render::RenderResult<()> {
            self.0.use_style(style)
        }

        fn update_rc(&mut self, _params: &oxford_theme_render::RcParams) -> oxford_theme_render::RenderResult<()> {
            Err(oxford_theme_render::RenderError::Backend("rc is read-only".into()))
        }

        fn restore_defaults(&mut self) {
            self.0.restore_defaults();
        }

        fn rc_params(&self) -> oxford_theme_render::RcParams {
            self.0.rc_params()
        }

        fn subplots(&mut self, spec: &FigureSpec) -> oxford_theme_render::RenderResult<(Self::Figure, Self::Axes)> {
            self.0.subplots(spec)
        }
    }

    #[test]
    fn rejected_rc_update_keeps_base_style_until_reset() {
        let mut host = RcRejectingHost(RecordingHost::new());
        let err = apply_oxford_theme(&mut host, &ThemeOptions::new()).unwrap_err();
        assert!(matches!(err, Error::Host(_)));
        assert_eq!(host.0.active_style().as_deref(), Some("seaborn-v0_8-paper"));
        assert_eq!(host.rc_params().get("text.color").and_then(RcValue::as_str), Some("black"));

        reset_theme(&mut host);
        assert!(host.0.active_style().is_none());
    }
}
