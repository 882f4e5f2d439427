//! Prelude module for Oxford Theme.
//!
//! ```
//! use oxford_theme::prelude::*;
//! ```
//!
//! This provides access to:
//! - Registries (`resolve_color`, `resolve_palette`, `resolve_preset`, `resolve_journal`)
//! - Theme application (`apply_oxford_theme`, `apply_preset`, `reset_theme`, `oxford_figure`)
//! - Branding and export (`add_branding`, `export_figure`)
//! - The host seam (`PlotHost`, `FigureHandle`, `RecordingHost`)

// ============================================================================
// Registries, themes, branding and export
// ============================================================================

pub use oxford_theme_style::prelude::*;

// ============================================================================
// Host seam
// ============================================================================

pub use oxford_theme_render::{
    BBoxMode, Color, ExportFormat, FigureHandle, FigureSize, FigureSpec, PlotHost, RcParams,
    RcValue, RecordingHost, RenderError, TextOverlay,
};

pub use crate::init;
