//! Effective theme configuration.

use oxford_theme_render::{RcParams, RcValue, is_hex_rgb};

use super::{FontSizes, StyleBase};
use crate::color::{OxfordColor, resolve_color};
use crate::palette::PaletteName;
use crate::{Error, Result};

/// Palette used when no color cycle is requested.
pub const DEFAULT_PALETTE: PaletteName = PaletteName::Primary;

/// Font fallback stack pushed to the host.
pub const FONT_STACK: [&str; 4] = ["Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

/// Optional overrides for a theme. Unset fields fall back to defaults.
///
/// For the eight-color signature cycle instead of the primary palette, pass
/// [`OXFORD_SIGNATURE_CYCLE`](crate::palette::OXFORD_SIGNATURE_CYCLE) as the
/// color cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeOptions {
    /// Base style; defaults to [`StyleBase::SeabornPaper`].
    pub style_base: Option<StyleBase>,
    /// Color names and/or `#RRGGBB` literals; defaults to [`DEFAULT_PALETTE`].
    pub color_cycle: Option<Vec<String>>,
    /// Font size multiplier; defaults to 1.0.
    pub font_scale: Option<f64>,
}

impl ThemeOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base style.
    pub fn style_base(mut self, style_base: StyleBase) -> Self {
        self.style_base = Some(style_base);
        self
    }

    /// Set the color cycle.
    pub fn color_cycle<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_cycle = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the font scale.
    pub fn font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = Some(font_scale);
        self
    }

    /// Fill unset fields of `self` from `fallback`.
    pub fn or(self, fallback: ThemeOptions) -> Self {
        Self {
            style_base: self.style_base.or(fallback.style_base),
            color_cycle: self.color_cycle.or(fallback.color_cycle),
            font_scale: self.font_scale.or(fallback.font_scale),
        }
    }
}

/// A validated, fully merged theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Base style.
    pub style_base: StyleBase,
    /// Resolved `#RRGGBB` color cycle.
    pub color_cycle: Vec<String>,
    /// Font size multiplier.
    pub font_scale: f64,
    /// Scaled font sizes.
    pub font_sizes: FontSizes,
}

impl ThemeConfig {
    /// The host rc dictionary for this theme, without applying it.
    pub fn rc_params(&self) -> RcParams {
        let brand = OxfordColor::OxfordBlue.hex();
        let mut params = RcParams::new();

        params.set("axes.prop_cycle", RcValue::ColorCycle(self.color_cycle.clone()));

        for key in [
            "axes.labelcolor",
            "axes.edgecolor",
            "text.color",
            "xtick.color",
            "ytick.color",
            "legend.edgecolor",
        ] {
            params.set(key, RcValue::Color(brand.to_string()));
        }

        params.set("font.family", RcValue::Text("sans-serif".into()));
        params.set(
            "font.sans-serif",
            RcValue::List(FONT_STACK.iter().map(|f| f.to_string()).collect()),
        );

        params.set("legend.frameon", RcValue::Bool(true));
        params.set("legend.framealpha", RcValue::Number(1.0));
        params.set("legend.fancybox", RcValue::Bool(false));

        params.set("figure.facecolor", RcValue::Color("white".into()));
        params.set("axes.facecolor", RcValue::Color("white".into()));

        for (key, size) in self.font_sizes.entries() {
            params.set(key, RcValue::Number(size));
        }

        params
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let style_base = StyleBase::default();
        Self {
            style_base,
            color_cycle: DEFAULT_PALETTE.colors(None).into_iter().map(String::from).collect(),
            font_scale: 1.0,
            font_sizes: style_base.base_font_sizes(),
        }
    }
}

/// Merge `options` over the defaults and validate the result.
///
/// Every color in the cycle is resolved independently: `#RRGGBB` literals
/// pass through unchanged, anything else must be a registered color name.
///
/// # Errors
///
/// - [`Error::UnknownColor`] for a cycle entry that is neither hex nor a known name.
/// - [`Error::InvalidParameter`] for an empty cycle, a font scale that is
///   not a finite positive number, or one whose scaled sizes round to zero
///   or overflow.
///
/// # Example
///
/// ```
/// use oxford_theme_style::theme::{ThemeOptions, compute_effective_config};
///
/// let config = compute_effective_config(&ThemeOptions::new().font_scale(2.0)).unwrap();
/// assert_eq!(config.font_sizes.legend, 16.0);
/// ```
pub fn compute_effective_config(options: &ThemeOptions) -> Result<ThemeConfig> {
    let font_scale = options.font_scale.unwrap_or(1.0);
    if !font_scale.is_finite() || font_scale <= 0.0 {
        return Err(Error::invalid_parameter(
            "font_scale",
            format!("must be positive, got {font_scale}"),
        ));
    }

    let color_cycle = match &options.color_cycle {
        Some(colors) => resolve_cycle(colors)?,
        None => DEFAULT_PALETTE.colors(None).into_iter().map(String::from).collect(),
    };

    let style_base = options.style_base.unwrap_or_default();
    let font_sizes = style_base.base_font_sizes().scaled(font_scale);
    if let Some((key, size)) = font_sizes
        .entries()
        .into_iter()
        .find(|(_, size)| !size.is_finite() || *size <= 0.0)
    {
        return Err(Error::invalid_parameter(
            "font_scale",
            format!("{font_scale} gives {key} = {size}"),
        ));
    }

    tracing::debug!(
        style_base = style_base.name(),
        colors = color_cycle.len(),
        font_scale,
        "computed effective theme"
    );

    Ok(ThemeConfig {
        style_base,
        color_cycle,
        font_scale,
        font_sizes,
    })
}

fn resolve_cycle(colors: &[String]) -> Result<Vec<String>> {
    if colors.is_empty() {
        return Err(Error::invalid_parameter("color_cycle", "cannot be empty"));
    }
    colors
        .iter()
        .map(|color| {
            if is_hex_rgb(color) {
                Ok(color.clone())
            } else {
                resolve_color(color).map(String::from)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = compute_effective_config(&ThemeOptions::new()).unwrap();
        assert_eq!(config.font_scale, 1.0);
        assert_eq!(config.style_base, StyleBase::SeabornPaper);
        let primary: Vec<String> = PaletteName::Primary
            .colors(None)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(config.color_cycle, primary);
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn font_scale_doubles_every_size() {
        let base = StyleBase::SeabornPaper.base_font_sizes();
        let options = ThemeOptions::new().font_scale(2.0);
        let first = compute_effective_config(&options).unwrap();
        let second = compute_effective_config(&options).unwrap();

        assert_eq!(first, second);
        for ((key, scaled), (_, original)) in first.font_sizes.entries().iter().zip(base.entries()) {
            assert_eq!(*scaled, original * 2.0, "{key}");
        }
    }

    #[test]
    fn mixed_cycle_resolves_each_entry() {
        let options = ThemeOptions::new().color_cycle(["oxford_blue", "#abcdef", "CORAL"]);
        let config = compute_effective_config(&options).unwrap();
        assert_eq!(config.color_cycle, ["#002147", "#abcdef", "#FE615A"]);
    }

    #[test]
    fn signature_cycle_as_override() {
        use crate::palette::OXFORD_SIGNATURE_CYCLE;

        let options = ThemeOptions::new().color_cycle(OXFORD_SIGNATURE_CYCLE);
        let config = compute_effective_config(&options).unwrap();
        assert_eq!(config.color_cycle.len(), 8);
        assert_eq!(config.color_cycle, OXFORD_SIGNATURE_CYCLE);
    }

    #[test]
    fn malformed_hex_goes_through_registry() {
        let options = ThemeOptions::new().color_cycle(["#ZZZZZZ"]);
        let err = compute_effective_config(&options).unwrap_err();
        assert!(matches!(err, Error::UnknownColor { ref name, .. } if name == "#ZZZZZZ"));
    }

    #[test]
    fn unknown_cycle_color_fails() {
        let options = ThemeOptions::new().color_cycle(["oxford_blue", "electric_blue"]);
        assert!(matches!(
            compute_effective_config(&options),
            Err(Error::UnknownColor { .. })
        ));
    }

    #[test]
    fn empty_cycle_fails() {
        let options = ThemeOptions::new().color_cycle(Vec::<String>::new());
        assert!(matches!(
            compute_effective_config(&options),
            Err(Error::InvalidParameter { ref parameter, .. }) if parameter == "color_cycle"
        ));
    }

    #[test]
    fn non_positive_font_scale_fails() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = ThemeOptions::new().font_scale(scale);
            assert!(matches!(
                compute_effective_config(&options),
                Err(Error::InvalidParameter { ref parameter, .. }) if parameter == "font_scale"
            ));
        }
    }

    #[test]
    fn scale_must_yield_usable_sizes() {
        for scale in [0.0004, 1e307] {
            let options = ThemeOptions::new().font_scale(scale);
            assert!(
                matches!(
                    compute_effective_config(&options),
                    Err(Error::InvalidParameter { ref parameter, .. }) if parameter == "font_scale"
                ),
                "{scale}"
            );
        }
        let smallest = compute_effective_config(&ThemeOptions::new().font_scale(0.01)).unwrap();
        assert!(smallest.font_sizes.entries().iter().all(|(_, size)| *size > 0.0));
    }

    #[test]
    fn rc_params_carry_brand_settings() {
        let config = compute_effective_config(&ThemeOptions::new().font_scale(1.5)).unwrap();
        let params = config.rc_params();

        assert_eq!(params.get("axes.labelcolor").and_then(RcValue::as_str), Some("#002147"));
        assert_eq!(params.get("legend.edgecolor").and_then(RcValue::as_str), Some("#002147"));
        assert_eq!(params.get("legend.fancybox").and_then(RcValue::as_bool), Some(false));
        assert_eq!(params.get("axes.prop_cycle").and_then(RcValue::as_list).map(<[_]>::len), Some(10));
        assert_eq!(params.number("font.size"), Some(15.0));
        assert_eq!(params.number("legend.fontsize"), Some(12.0));
        assert_eq!(
            params.get("font.sans-serif").and_then(RcValue::as_list).map(|l| l[0].as_str()),
            Some("Arial")
        );
    }

    #[test]
    fn options_layering() {
        let explicit = ThemeOptions::new().font_scale(1.2);
        let preset = ThemeOptions::new()
            .font_scale(1.8)
            .style_base(StyleBase::SeabornWhitegrid);
        let merged = explicit.or(preset);
        assert_eq!(merged.font_scale, Some(1.2));
        assert_eq!(merged.style_base, Some(StyleBase::SeabornWhitegrid));
        assert!(merged.color_cycle.is_none());
    }
}
