//! Theme resolution and application.

mod apply;
mod config;
mod fonts;
mod style_base;

pub use apply::{FigureOptions, apply_oxford_theme, apply_preset, apply_theme, oxford_figure, reset_theme};
pub use config::{DEFAULT_PALETTE, FONT_STACK, ThemeConfig, ThemeOptions, compute_effective_config};
pub use fonts::FontSizes;
pub use style_base::StyleBase;
