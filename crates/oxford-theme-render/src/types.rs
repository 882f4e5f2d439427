//! Basic value types shared with the host.

use std::fmt;

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a 24-bit value (0xRRGGBB).
    #[inline]
    pub const fn from_u24(rgb: u32) -> Self {
        Self::from_rgb8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse a `#RRGGBB` string. Both letter cases are accepted.
    ///
    /// Returns `None` for anything that is not exactly a `#` followed by six
    /// hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !is_hex_rgb(hex) {
            return None;
        }
        let digits = &hex[1..];
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::from_rgb8(r, g, b))
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Check whether `s` matches `#[0-9A-Fa-f]{6}`.
pub fn is_hex_rgb(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// A width/height pair in inches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FigureSize {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
}

impl FigureSize {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Return the size as a `(width, height)` tuple.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl From<(f64, f64)> for FigureSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}
