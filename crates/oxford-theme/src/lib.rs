//! Oxford Theme - University of Oxford visual identity for scientific plots.
//!
//! This is the umbrella crate that re-exports all public APIs.
//!
//! # Example
//!
//! ```
//! use oxford_theme::prelude::*;
//!
//! fn main() -> oxford_theme::Result<()> {
//!     let mut host = RecordingHost::new();
//!     let journal = resolve_journal("nature")?;
//!
//!     let (mut figure, _axes) = oxford_figure(&mut host, &journal.figure_options())?;
//!     add_branding(&mut figure, &BrandingOptions::watermark())?;
//!     let path = export_figure(&mut figure, "figure1", &journal.export_options())?;
//!     assert_eq!(path.to_str(), Some("figure1.svg"));
//!     Ok(())
//! }
//! ```

pub use oxford_theme_style::*;

pub mod prelude;

/// Host plotting-library seam.
pub mod render {
    pub use oxford_theme_render::*;
}

/// Apply the default Oxford theme, the usual first call of a plotting session.
pub fn init<H: render::PlotHost>(host: &mut H) -> Result<theme::ThemeConfig> {
    let config = theme::apply_oxford_theme(host, &theme::ThemeOptions::default())?;
    tracing::debug!(colors = config.color_cycle.len(), "initialized Oxford theme");
    Ok(config)
}
