//! Oxford brand registries and theme resolution.
//!
//! This crate turns names and requests into validated visual parameters and
//! hands them to a plotting host through [`oxford_theme_render`]:
//!
//! - **Colors**: the 56 named brand colors ([`color`])
//! - **Palettes**: ordered color sequences with cycling to any length ([`palette`])
//! - **Presets**: ready-made theme bundles ([`preset`])
//! - **Themes**: layered merging, font scaling and host application ([`theme`])
//! - **Journals**: figure size, resolution and format per journal ([`journal`])
//! - **Branding and export**: watermark overlays and publication-quality saves
//! - **Requests**: TOML theme requests ([`request`])
//!
//! # Example
//!
//! ```
//! use oxford_theme_render::RecordingHost;
//! use oxford_theme_style::prelude::*;
//!
//! let mut host = RecordingHost::new();
//! let config = apply_preset(&mut host, "presentation")?;
//! assert_eq!(config.font_scale, 1.4);
//!
//! let colors = resolve_palette("diverging", Some(7))?;
//! assert_eq!(colors[5], colors[0]);
//! # Ok::<(), oxford_theme_style::Error>(())
//! ```

pub mod branding;
pub mod color;
pub mod export;
pub mod journal;
pub mod palette;
pub mod preset;
pub mod request;
pub mod theme;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::branding::{BrandingOptions, WatermarkPosition, add_branding};
    pub use crate::color::{ColorGroup, OxfordColor, resolve_color};
    pub use crate::export::{ExportOptions, PUBLICATION_DPI, PUBLICATION_DPI_HIGH, export_figure};
    pub use crate::journal::{Journal, JournalPreset, resolve_journal};
    pub use crate::palette::{
        OXFORD_SIGNATURE_CYCLE, PaletteName, resolve_color_palette, resolve_palette,
    };
    pub use crate::preset::{
        PresetConfig, PresetListing, PresetName, PresetSummary, list_presets, resolve_preset,
    };
    pub use crate::request::ThemeRequest;
    pub use crate::theme::{
        FigureOptions, FontSizes, StyleBase, ThemeConfig, ThemeOptions, apply_oxford_theme,
        apply_preset, apply_theme, compute_effective_config, oxford_figure, reset_theme,
    };
    pub use crate::{Error, Result};
}
