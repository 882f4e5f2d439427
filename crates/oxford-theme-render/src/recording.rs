//! An in-memory host that records every call.
//!
//! [`RecordingHost`] implements [`PlotHost`] without drawing anything. It
//! keeps the global rc dictionary, the active base style and a log of
//! [`HostEvent`]s so that theme behavior can be inspected headlessly.
//! Figures share the host's log, so overlays and save requests show up in
//! the same event stream.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{RenderError, RenderResult};
use crate::figure::{ExportFormat, FigureSpec, SaveRequest, TextOverlay};
use crate::host::{FigureHandle, PlotHost};
use crate::rc::{RcParams, RcValue};

/// Base styles a [`RecordingHost`] accepts out of the box.
pub const DEFAULT_STYLES: &[&str] = &[
    "default",
    "classic",
    "seaborn-v0_8-paper",
    "seaborn-v0_8-notebook",
    "seaborn-v0_8-whitegrid",
];

/// One recorded host call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// A base style was activated.
    UseStyle(String),
    /// The rc dictionary was updated.
    UpdateRc(RcParams),
    /// Library defaults were restored.
    RestoreDefaults,
    /// A figure was created.
    Subplots { figure: usize, spec: FigureSpec },
    /// A text overlay was placed on a figure.
    AddText { figure: usize, overlay: TextOverlay },
    /// A figure was saved.
    Save { figure: usize, request: SaveRequest },
}

#[derive(Debug)]
struct HostState {
    defaults: RcParams,
    rc: RcParams,
    style: Option<String>,
    events: Vec<HostEvent>,
    next_figure: usize,
}

impl HostState {
    fn new(defaults: RcParams) -> Self {
        Self {
            rc: defaults.clone(),
            defaults,
            style: None,
            events: Vec::new(),
            next_figure: 0,
        }
    }
}

/// Library defaults the recording host starts from.
pub fn library_defaults() -> RcParams {
    [
        ("font.size", RcValue::Number(10.0)),
        ("axes.labelcolor", RcValue::Color("black".into())),
        ("axes.edgecolor", RcValue::Color("black".into())),
        ("axes.facecolor", RcValue::Color("white".into())),
        ("figure.facecolor", RcValue::Color("white".into())),
        ("text.color", RcValue::Color("black".into())),
        ("legend.frameon", RcValue::Bool(true)),
    ]
    .into_iter()
    .collect()
}

/// A headless host recording style changes, figures and save requests.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    state: Arc<Mutex<HostState>>,
    styles: BTreeSet<String>,
}

impl RecordingHost {
    /// Create a host with [`library_defaults`] and [`DEFAULT_STYLES`].
    pub fn new() -> Self {
        Self::with_defaults(library_defaults())
    }

    /// Create a host with custom library defaults.
    pub fn with_defaults(defaults: RcParams) -> Self {
        Self {
            state: Arc::new(Mutex::new(HostState::new(defaults))),
            styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Accept an additional base style name.
    pub fn register_style(&mut self, name: impl Into<String>) {
        self.styles.insert(name.into());
    }

    /// The active base style, if one was applied since the last reset.
    pub fn active_style(&self) -> Option<String> {
        self.state.lock().style.clone()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> Vec<HostEvent> {
        self.state.lock().events.clone()
    }

    /// Drop the event log, keeping style state.
    pub fn clear_events(&self) {
        self.state.lock().events.clear();
    }

    /// Number of figures created so far.
    pub fn figure_count(&self) -> usize {
        self.state.lock().next_figure
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotHost for RecordingHost {
    type Figure = RecordedFigure;
    type Axes = RecordedAxes;

    fn use_style(&mut self, style: &str) -> RenderResult<()> {
        if !self.styles.contains(style) {
            return Err(RenderError::UnknownStyle(style.to_string()));
        }
        let mut state = self.state.lock();
        state.rc = state.defaults.clone();
        state.style = Some(style.to_string());
        state.events.push(HostEvent::UseStyle(style.to_string()));
        Ok(())
    }

    fn update_rc(&mut self, params: &RcParams) -> RenderResult<()> {
        let mut state = self.state.lock();
        state.rc.update(params);
        state.events.push(HostEvent::UpdateRc(params.clone()));
        Ok(())
    }

    fn restore_defaults(&mut self) {
        let mut state = self.state.lock();
        state.rc = state.defaults.clone();
        state.style = None;
        state.events.push(HostEvent::RestoreDefaults);
    }

    fn rc_params(&self) -> RcParams {
        self.state.lock().rc.clone()
    }

    fn subplots(&mut self, spec: &FigureSpec) -> RenderResult<(RecordedFigure, RecordedAxes)> {
        if !spec.size.is_valid() {
            return Err(RenderError::InvalidFigureSize {
                width: spec.size.width,
                height: spec.size.height,
            });
        }

        let mut state = self.state.lock();
        let id = state.next_figure;
        state.next_figure += 1;
        state.events.push(HostEvent::Subplots {
            figure: id,
            spec: spec.clone(),
        });

        let figure = RecordedFigure {
            id,
            spec: spec.clone(),
            rc: state.rc.clone(),
            texts: Vec::new(),
            saves: Vec::new(),
            log: Arc::clone(&self.state),
        };
        Ok((figure, RecordedAxes { figure: id }))
    }
}

/// A figure created by [`RecordingHost`].
#[derive(Debug, Clone)]
pub struct RecordedFigure {
    id: usize,
    spec: FigureSpec,
    rc: RcParams,
    texts: Vec<TextOverlay>,
    saves: Vec<SaveRequest>,
    log: Arc<Mutex<HostState>>,
}

impl RecordedFigure {
    /// Host-assigned figure number.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The spec the figure was created with.
    pub fn spec(&self) -> &FigureSpec {
        &self.spec
    }

    /// Global rc dictionary at creation time.
    pub fn rc(&self) -> &RcParams {
        &self.rc
    }

    /// Text overlays placed on the figure.
    pub fn texts(&self) -> &[TextOverlay] {
        &self.texts
    }

    /// Save requests issued for the figure.
    pub fn saves(&self) -> &[SaveRequest] {
        &self.saves
    }
}

impl FigureHandle for RecordedFigure {
    fn add_text(&mut self, overlay: TextOverlay) -> RenderResult<()> {
        self.log.lock().events.push(HostEvent::AddText {
            figure: self.id,
            overlay: overlay.clone(),
        });
        self.texts.push(overlay);
        Ok(())
    }

    fn text_count(&self) -> usize {
        self.texts.len()
    }

    fn save(&mut self, request: &SaveRequest) -> RenderResult<()> {
        if let ExportFormat::Other(name) = &request.format {
            return Err(RenderError::UnsupportedFormat(name.clone()));
        }
        if request.dpi == 0 {
            return Err(RenderError::Backend("dpi must be positive".into()));
        }

        tracing::debug!(
            target: "oxford_theme_render::recording",
            figure = self.id,
            path = %request.path.display(),
            format = %request.format,
            bbox = request.bbox.as_str(),
            "recorded save"
        );
        self.log.lock().events.push(HostEvent::Save {
            figure: self.id,
            request: request.clone(),
        });
        self.saves.push(request.clone());
        Ok(())
    }
}

/// The single axes of a [`RecordedFigure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedAxes {
    /// Figure the axes belong to.
    pub figure: usize,
}
