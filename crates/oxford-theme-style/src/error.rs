//! Error types for theme resolution.

use std::path::PathBuf;

use oxford_theme_render::RenderError;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or applying a theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Color name not present in the registry.
    #[error("Color '{name}' not found. Available colors: {available}")]
    UnknownColor { name: String, available: String },

    /// Palette name not present in the registry.
    #[error("Palette '{name}' not found. Available palettes: {available}")]
    UnknownPalette { name: String, available: String },

    /// Preset name not present in the registry.
    #[error("Preset '{name}' not found. Available presets: {available}")]
    UnknownPreset { name: String, available: String },

    /// Journal name not present in the table.
    #[error("Journal '{name}' not found. Available: {available}")]
    UnknownJournal { name: String, available: String },

    /// Base style identifier not supported.
    #[error("Style base '{name}' not recognized. Available: {available}")]
    UnknownStyleBase { name: String, available: String },

    /// Watermark position outside the four corners.
    #[error("Position '{name}' not recognized. Use: {available}")]
    InvalidPosition { name: String, available: String },

    /// A numeric parameter out of range.
    #[error("Invalid value for '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Theme request file could not be parsed.
    #[error("Invalid theme request: {0}")]
    Config(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read theme request '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plotting host rejected a call.
    #[error(transparent)]
    Host(#[from] RenderError),
}

impl Error {
    /// Create an unknown-color error listing the available names.
    pub fn unknown_color<'a>(name: impl Into<String>, available: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UnknownColor {
            name: name.into(),
            available: sorted_list(available),
        }
    }

    /// Create an unknown-palette error listing the available names.
    pub fn unknown_palette<'a>(name: impl Into<String>, available: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UnknownPalette {
            name: name.into(),
            available: sorted_list(available),
        }
    }

    /// Create an unknown-preset error listing the available names.
    pub fn unknown_preset<'a>(name: impl Into<String>, available: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UnknownPreset {
            name: name.into(),
            available: sorted_list(available),
        }
    }

    /// Create an unknown-journal error listing the available names.
    pub fn unknown_journal<'a>(name: impl Into<String>, available: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UnknownJournal {
            name: name.into(),
            available: sorted_list(available),
        }
    }

    /// Create an unknown-style-base error listing the available names.
    pub fn unknown_style_base<'a>(
        name: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownStyleBase {
            name: name.into(),
            available: sorted_list(available),
        }
    }

    /// Create an invalid-position error. Positions keep their table order.
    pub fn invalid_position<'a>(name: impl Into<String>, available: impl IntoIterator<Item = &'a str>) -> Self {
        Self::InvalidPosition {
            name: name.into(),
            available: available.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Create a parameter error.
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn sorted_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_unstable();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_names_are_sorted() {
        let err = Error::unknown_palette("neon", ["vibrant", "primary", "health"]);
        assert_eq!(
            err.to_string(),
            "Palette 'neon' not found. Available palettes: health, primary, vibrant"
        );
    }

    #[test]
    fn positions_keep_table_order() {
        let err = Error::invalid_position("middle", ["bottom_right", "bottom_left"]);
        assert_eq!(err.to_string(), "Position 'middle' not recognized. Use: bottom_right, bottom_left");
    }

    #[test]
    fn host_errors_are_transparent() {
        let err: Error = RenderError::UnsupportedFormat("webp".into()).into();
        assert_eq!(err.to_string(), "unsupported export format 'webp'");
    }
}
