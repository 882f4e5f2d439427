//! Saving figures at publication quality.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use oxford_theme_render::{BBoxMode, ExportFormat, FigureHandle, SaveRequest};

use crate::journal::JournalPreset;
use crate::{Error, Result};

/// Standard print resolution.
pub const PUBLICATION_DPI: u32 = 300;

/// High resolution for detailed figures.
pub const PUBLICATION_DPI_HIGH: u32 = 600;

/// Options for [`export_figure`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Output format; also the extension appended to bare filenames.
    pub format: ExportFormat,
    /// Resolution in dots per inch.
    pub dpi: u32,
    /// Bounding box mode.
    pub bbox: BBoxMode,
    /// Host-specific save options forwarded verbatim.
    pub options: BTreeMap<String, String>,
}

impl ExportOptions {
    pub fn format(mut self, format: impl Into<ExportFormat>) -> Self {
        self.format = format.into();
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn bbox(mut self, bbox: BBoxMode) -> Self {
        self.bbox = bbox;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            dpi: PUBLICATION_DPI,
            bbox: BBoxMode::Tight,
            options: BTreeMap::new(),
        }
    }
}

impl From<&JournalPreset> for ExportOptions {
    fn from(preset: &JournalPreset) -> Self {
        Self {
            format: preset.format.clone(),
            dpi: preset.dpi,
            ..Self::default()
        }
    }
}

/// Save `figure` to `filename` and return the path actually written.
///
/// A filename without an extension (or ending in a bare `.`) gets
/// `.<format>` appended. A filename that already has one is used as given,
/// even if it disagrees with the format. Encoding is left to the host.
///
/// # Errors
///
/// [`Error::InvalidParameter`] for a zero dpi. Formats the host cannot
/// write come back as [`Error::Host`].
pub fn export_figure<F: FigureHandle>(
    figure: &mut F,
    filename: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<PathBuf> {
    if options.dpi == 0 {
        return Err(Error::invalid_parameter("dpi", "must be positive, got 0"));
    }

    let path = output_path(filename.as_ref(), &options.format);
    let request = SaveRequest {
        path: path.clone(),
        format: options.format.clone(),
        dpi: options.dpi,
        bbox: options.bbox,
        options: options.options.clone(),
    };
    figure.save(&request)?;

    tracing::info!(
        path = %path.display(),
        format = %options.format,
        dpi = options.dpi,
        "exported figure"
    );
    Ok(path)
}

fn output_path(filename: &Path, format: &ExportFormat) -> PathBuf {
    if filename.extension().is_some_and(|ext| !ext.is_empty()) {
        filename.to_path_buf()
    } else {
        filename.with_extension(format.extension())
    }
}
