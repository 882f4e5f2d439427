//! Institutional watermark overlay.

use std::fmt;
use std::str::FromStr;

use oxford_theme_render::{FigureHandle, HAlign, TextOverlay, VAlign};

use crate::color::OxfordColor;
use crate::{Error, Result};

/// Corner of the figure the watermark is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl WatermarkPosition {
    /// Every position, in the order used for error messages.
    pub const ALL: [WatermarkPosition; 4] = [
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopRight,
        Self::TopLeft,
    ];

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BottomRight => "bottom_right",
            Self::BottomLeft => "bottom_left",
            Self::TopRight => "top_right",
            Self::TopLeft => "top_left",
        }
    }

    /// Figure-relative `(x, y)` of the anchor point.
    pub const fn coordinates(self) -> (f64, f64) {
        match self {
            Self::BottomRight => (0.98, 0.02),
            Self::BottomLeft => (0.02, 0.02),
            Self::TopRight => (0.98, 0.98),
            Self::TopLeft => (0.02, 0.98),
        }
    }

    /// Text anchors matching the corner, so the text stays inside the figure.
    pub const fn alignment(self) -> (HAlign, VAlign) {
        match self {
            Self::BottomRight => (HAlign::Right, VAlign::Bottom),
            Self::BottomLeft => (HAlign::Left, VAlign::Bottom),
            Self::TopRight => (HAlign::Right, VAlign::Top),
            Self::TopLeft => (HAlign::Left, VAlign::Top),
        }
    }
}

impl fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WatermarkPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::invalid_position(s, Self::ALL.into_iter().map(WatermarkPosition::name)))
    }
}

/// Options for [`add_branding`].
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingOptions {
    /// Whether to place the watermark at all.
    pub add_watermark: bool,
    /// Watermark text.
    pub text: String,
    /// Anchor corner.
    pub position: WatermarkPosition,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Font size in points.
    pub font_size: f64,
}

impl BrandingOptions {
    /// Default options with the watermark switched on.
    pub fn watermark() -> Self {
        Self {
            add_watermark: true,
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn position(mut self, position: WatermarkPosition) -> Self {
        self.position = position;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for BrandingOptions {
    fn default() -> Self {
        Self {
            add_watermark: false,
            text: "University of Oxford".to_string(),
            position: WatermarkPosition::BottomRight,
            opacity: 0.5,
            font_size: 10.0,
        }
    }
}

/// Place a watermark on `figure` and hand it back for chaining.
///
/// With `add_watermark` unset the figure is returned untouched and the other
/// options are not inspected.
///
/// # Errors
///
/// [`Error::InvalidParameter`] for an opacity outside `[0, 1]` or a font size
/// that is not positive. Host failures surface as [`Error::Host`].
pub fn add_branding<'f, F: FigureHandle>(figure: &'f mut F, options: &BrandingOptions) -> Result<&'f mut F> {
    if !options.add_watermark {
        return Ok(figure);
    }

    if !(0.0..=1.0).contains(&options.opacity) {
        return Err(Error::invalid_parameter(
            "opacity",
            format!("must be between 0 and 1, got {}", options.opacity),
        ));
    }
    if !options.font_size.is_finite() || options.font_size <= 0.0 {
        return Err(Error::invalid_parameter(
            "font_size",
            format!("must be positive, got {}", options.font_size),
        ));
    }

    let (x, y) = options.position.coordinates();
    let (h_align, v_align) = options.position.alignment();
    figure.add_text(TextOverlay {
        x,
        y,
        text: options.text.clone(),
        font_size: options.font_size,
        color: OxfordColor::StoneGrey.color(),
        alpha: options.opacity,
        h_align,
        v_align,
    })?;

    tracing::debug!(position = options.position.name(), "added watermark");
    Ok(figure)
}
