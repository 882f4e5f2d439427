//! Error types for the host seam.

use thiserror::Error;

/// Errors reported by a plotting host.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Figure dimensions were zero, negative or not finite.
    #[error("invalid figure size: {width}x{height} inches")]
    InvalidFigureSize { width: f64, height: f64 },

    /// The host cannot encode the requested export format.
    #[error("unsupported export format '{0}'")]
    UnsupportedFormat(String),

    /// The host does not know the requested base style.
    #[error("unknown host style '{0}'")]
    UnknownStyle(String),

    /// Any other failure raised by the host library.
    #[error("host error: {0}")]
    Backend(String),
}

/// Result type for host operations.
pub type RenderResult<T> = Result<T, RenderError>;
