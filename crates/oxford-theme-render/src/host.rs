//! The seam between the theme layer and a plotting library.
//!
//! A host owns the process-wide style state (the base style and the rc
//! dictionary) and knows how to create, annotate and save figures. The
//! theme layer only ever talks to the host through these traits.

use crate::error::RenderResult;
use crate::figure::{FigureSpec, SaveRequest, TextOverlay};
use crate::rc::RcParams;

/// A plotting library with global style state.
pub trait PlotHost {
    /// Figure handle produced by this host.
    type Figure: FigureHandle;
    /// Axes handle produced alongside a figure.
    type Axes;

    /// Activate a named base style. Replaces the current base style.
    fn use_style(&mut self, style: &str) -> RenderResult<()>;

    /// Merge `params` into the global rc dictionary.
    fn update_rc(&mut self, params: &RcParams) -> RenderResult<()>;

    /// Restore the library defaults, discarding any applied style.
    fn restore_defaults(&mut self);

    /// Snapshot of the current global rc dictionary.
    fn rc_params(&self) -> RcParams;

    /// Create a figure with a single axes using the current global style.
    fn subplots(&mut self, spec: &FigureSpec) -> RenderResult<(Self::Figure, Self::Axes)>;
}

/// A figure created by a host.
pub trait FigureHandle {
    /// Place a text overlay in figure coordinates.
    fn add_text(&mut self, overlay: TextOverlay) -> RenderResult<()>;

    /// Number of figure-level text overlays.
    fn text_count(&self) -> usize;

    /// Encode and write the figure.
    fn save(&mut self, request: &SaveRequest) -> RenderResult<()>;
}
