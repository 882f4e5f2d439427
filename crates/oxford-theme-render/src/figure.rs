//! Requests handed to the host for figures, overlays and saving.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::types::{Color, FigureSize};

/// Geometry and passthrough options for a new figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    /// Figure size in inches.
    pub size: FigureSize,
    /// Host-specific options forwarded verbatim (e.g. `nrows`, `sharex`).
    pub options: BTreeMap<String, String>,
}

impl FigureSpec {
    /// Create a spec with the given size and no extra options.
    pub fn new(size: impl Into<FigureSize>) -> Self {
        Self {
            size: size.into(),
            options: BTreeMap::new(),
        }
    }

    /// Add a passthrough option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Horizontal anchor of a text overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// A text overlay placed in figure-relative coordinates (0..1 on both axes).
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    /// Horizontal position as a fraction of figure width.
    pub x: f64,
    /// Vertical position as a fraction of figure height.
    pub y: f64,
    /// The text.
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
    /// Opacity, 0 = invisible, 1 = opaque.
    pub alpha: f64,
    /// Horizontal anchor.
    pub h_align: HAlign,
    /// Vertical anchor.
    pub v_align: VAlign,
}

/// Output encodings understood by common hosts.
///
/// Names the host does not know are kept as [`ExportFormat::Other`] so the
/// host can report its own error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Svg,
    Pdf,
    Eps,
    Tiff,
    Jpg,
    Jpeg,
    Ps,
    Raw,
    Rgba,
    Pgf,
    Other(String),
}

impl ExportFormat {
    /// Every named format, in documentation order.
    pub const KNOWN: [ExportFormat; 11] = [
        Self::Png,
        Self::Svg,
        Self::Pdf,
        Self::Eps,
        Self::Tiff,
        Self::Jpg,
        Self::Jpeg,
        Self::Ps,
        Self::Raw,
        Self::Rgba,
        Self::Pgf,
    ];

    /// Parse a format name case-insensitively. Never fails.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "svg" => Self::Svg,
            "pdf" => Self::Pdf,
            "eps" => Self::Eps,
            "tiff" => Self::Tiff,
            "jpg" => Self::Jpg,
            "jpeg" => Self::Jpeg,
            "ps" => Self::Ps,
            "raw" => Self::Raw,
            "rgba" => Self::Rgba,
            "pgf" => Self::Pgf,
            _ => Self::Other(name.to_string()),
        }
    }

    /// The format name, also used as the file extension.
    pub fn extension(&self) -> &str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Eps => "eps",
            Self::Tiff => "tiff",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Ps => "ps",
            Self::Raw => "raw",
            Self::Rgba => "rgba",
            Self::Pgf => "pgf",
            Self::Other(name) => name,
        }
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Png
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl From<&str> for ExportFormat {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// How the saved bounding box is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BBoxMode {
    /// Crop to the drawn content, removing excess whitespace.
    #[default]
    Tight,
    /// Keep the full figure canvas.
    Standard,
}

impl BBoxMode {
    /// Host keyword for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Standard => "standard",
        }
    }
}

/// A fully resolved save call.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    /// Destination path, extension already settled.
    pub path: PathBuf,
    /// Output encoding.
    pub format: ExportFormat,
    /// Resolution in dots per inch.
    pub dpi: u32,
    /// Bounding box mode.
    pub bbox: BBoxMode,
    /// Host-specific options forwarded verbatim (e.g. `pad_inches`).
    pub options: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!(ExportFormat::parse("SVG"), ExportFormat::Svg);
        assert_eq!(ExportFormat::parse("Tiff"), ExportFormat::Tiff);
        assert_eq!(ExportFormat::parse("webp"), ExportFormat::Other("webp".into()));
    }

    #[test]
    fn known_formats_round_trip_through_extension() {
        for format in ExportFormat::KNOWN {
            assert_eq!(ExportFormat::parse(format.extension()), format);
        }
    }

    #[test]
    fn figure_spec_options() {
        let spec = FigureSpec::new((10.0, 6.0)).with_option("nrows", "2");
        assert_eq!(spec.size, FigureSize::new(10.0, 6.0));
        assert_eq!(spec.options.get("nrows").map(String::as_str), Some("2"));
    }
}
