//! Integration tests for theme application against the recording host.

use oxford_theme_render::{HostEvent, PlotHost, RcValue, RecordingHost};
use oxford_theme_style::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_default_theme_pushes_brand_rc() {
    init_tracing();
    let mut host = RecordingHost::new();
    let config = apply_oxford_theme(&mut host, &ThemeOptions::default()).unwrap();

    assert_eq!(config, compute_effective_config(&ThemeOptions::default()).unwrap());
    let rc = host.rc_params();
    for key in ["axes.labelcolor", "axes.edgecolor", "text.color", "xtick.color", "ytick.color"] {
        assert_eq!(rc.get(key).and_then(RcValue::as_str), Some("#002147"), "{key}");
    }
    assert_eq!(
        rc.get("axes.prop_cycle").and_then(RcValue::as_list).map(<[String]>::len),
        Some(PaletteName::Primary.len())
    );
}

#[test]
fn test_font_scale_is_deterministic() {
    let options = ThemeOptions::new().font_scale(2.0);
    let base = StyleBase::SeabornPaper.base_font_sizes();
    let scaled = compute_effective_config(&options).unwrap().font_sizes;

    assert_eq!(scaled, base.scaled(2.0));
    assert_eq!(scaled.font, base.font * 2.0);
    assert_eq!(scaled.figure_title, base.figure_title * 2.0);
    assert_eq!(compute_effective_config(&options).unwrap().font_sizes, scaled);
}

#[test]
fn test_invalid_cycle_leaves_host_state() {
    let mut host = RecordingHost::new();
    apply_preset(&mut host, "notebook").unwrap();
    let before = host.rc_params();
    let events_before = host.events().len();

    let options = ThemeOptions::new().color_cycle(["#002147", "electric_lime"]);
    assert!(apply_oxford_theme(&mut host, &options).is_err());
    assert_eq!(host.rc_params(), before);
    assert_eq!(host.events().len(), events_before);
}

#[test]
fn test_host_rejecting_style_surfaces_as_host_error() {
    let mut host = NoStyleHost::default();
    let err = apply_oxford_theme(&mut host, &ThemeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Host(_)));
}

#[test]
fn test_request_layers_over_preset() {
    let mut host = RecordingHost::new();
    let request = ThemeRequest::from_toml_str(
        r#"
        preset = "print"
        style_base = "seaborn-v0_8-whitegrid"
        "#,
    )
    .unwrap();
    let config = request.apply(&mut host).unwrap();

    assert_eq!(config.style_base, StyleBase::SeabornWhitegrid);
    assert_eq!(config.color_cycle.len(), 5);
    assert_eq!(host.events()[0], HostEvent::UseStyle("seaborn-v0_8-whitegrid".into()));
}

#[test]
fn test_figure_then_branding_then_export() {
    let mut host = RecordingHost::new();
    let (mut figure, _) = oxford_figure(&mut host, &FigureOptions::default()).unwrap();

    add_branding(&mut figure, &BrandingOptions::watermark().opacity(1.0)).unwrap();
    let path = export_figure(&mut figure, "summary", &ExportOptions::default().format("pdf")).unwrap();

    assert_eq!(path.to_str(), Some("summary.pdf"));
    assert_eq!(figure.texts().len(), 1);
    assert_eq!(figure.saves()[0].dpi, 300);
}

/// A host that knows no base styles at all.
#[derive(Default)]
struct NoStyleHost {
    inner: RecordingHost,
}

impl PlotHost for NoStyleHost {
    type Figure = <RecordingHost as PlotHost>::Figure;
    type Axes = <RecordingHost as PlotHost>::Axes;

    fn use_style(&mut self, style: &str) -> oxford_theme_render::RenderResult<()> {
        Err(oxford_theme_render::RenderError::UnknownStyle(style.to_string()))
    }

    fn update_rc(&mut self, params: &oxford_theme_render::RcParams) -> oxford_theme_render::RenderResult<()> {
        self.inner.update_rc(params)
    }

    fn restore_defaults(&mut self) {
        self.inner.restore_defaults();
    }

    fn rc_params(&self) -> oxford_theme_render::RcParams {
        self.inner.rc_params()
    }

    fn subplots(
        &mut self,
        spec: &oxford_theme_render::FigureSpec,
    ) -> oxford_theme_render::RenderResult<(Self::Figure, Self::Axes)> {
        self.inner.subplots(spec)
    }
}
