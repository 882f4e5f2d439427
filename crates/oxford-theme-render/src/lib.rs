//! Host plotting-library seam for the Oxford plot theme.
//!
//! The theme layer never draws or encodes anything itself. Everything that
//! touches a plotting library goes through the traits in this crate:
//!
//! - [`PlotHost`]: global style state (base style, rc dictionary) and figure creation
//! - [`FigureHandle`]: text overlays and saving
//!
//! Value types describing those calls ([`RcParams`], [`FigureSpec`],
//! [`TextOverlay`], [`SaveRequest`], [`ExportFormat`]) live here too, along
//! with [`RecordingHost`], a headless host that records every call.
//!
//! # Example
//!
//! ```
//! use oxford_theme_render::{FigureSpec, PlotHost, RecordingHost};
//!
//! let mut host = RecordingHost::new();
//! host.use_style("seaborn-v0_8-paper").unwrap();
//! let (_figure, _axes) = host.subplots(&FigureSpec::new((10.0, 6.0))).unwrap();
//! assert_eq!(host.figure_count(), 1);
//! ```

pub mod figure;
pub mod host;
pub mod rc;
pub mod recording;

mod error;
mod types;

pub use error::{RenderError, RenderResult};
pub use figure::{BBoxMode, ExportFormat, FigureSpec, HAlign, SaveRequest, TextOverlay, VAlign};
pub use host::{FigureHandle, PlotHost};
pub use rc::{RcParams, RcValue};
pub use recording::{HostEvent, RecordedAxes, RecordedFigure, RecordingHost};
pub use types::{Color, FigureSize, is_hex_rgb};
