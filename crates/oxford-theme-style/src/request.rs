//! Theme requests loaded from TOML.
//!
//! A request names an optional preset and optional explicit overrides. It
//! resolves in three layers, each filling only what the layer above left
//! unset:
//!
//! 1. explicit fields of the request
//! 2. the named preset
//! 3. built-in defaults
//!
//! ```toml
//! preset = "presentation"
//! color_cycle = ["oxford_blue", "#FE615A"]
//! ```

use std::path::Path;

use oxford_theme_render::PlotHost;
use serde::Deserialize;

use crate::preset::resolve_preset;
use crate::theme::{StyleBase, ThemeConfig, ThemeOptions, apply_theme, compute_effective_config};
use crate::{Error, Result};

/// A theme request as written in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeRequest {
    /// Preset providing the middle layer.
    pub preset: Option<String>,
    /// Base style identifier, e.g. `seaborn-v0_8-whitegrid`.
    pub style_base: Option<String>,
    /// Color names and/or `#RRGGBB` literals.
    pub color_cycle: Option<Vec<String>>,
    /// Font size multiplier.
    pub font_scale: Option<f64>,
}

impl ThemeRequest {
    /// Parse a request from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a request file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let request = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded theme request");
        Ok(request)
    }

    /// Explicit fields merged over the preset layer. Defaults are left unset.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPreset`] or [`Error::UnknownStyleBase`] for names that
    /// are not registered.
    pub fn theme_options(&self) -> Result<ThemeOptions> {
        let explicit = ThemeOptions {
            style_base: self
                .style_base
                .as_deref()
                .map(str::parse::<StyleBase>)
                .transpose()?,
            color_cycle: self.color_cycle.clone(),
            font_scale: self.font_scale,
        };

        match &self.preset {
            Some(name) => {
                let preset = resolve_preset(name)?;
                Ok(explicit.or(preset.theme_options()))
            }
            None => Ok(explicit),
        }
    }

    /// Resolve every layer into a validated theme.
    pub fn resolve(&self) -> Result<ThemeConfig> {
        compute_effective_config(&self.theme_options()?)
    }

    /// Resolve and apply to `host`. The host is untouched if resolution fails.
    pub fn apply<H: PlotHost>(&self, host: &mut H) -> Result<ThemeConfig> {
        let config = self.resolve()?;
        apply_theme(host, &config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_request_resolves_to_defaults() {
        let request = ThemeRequest::from_toml_str("").unwrap();
        assert_eq!(request, ThemeRequest::default());
        assert_eq!(request.resolve().unwrap(), ThemeConfig::default());
    }

    #[test]
    fn explicit_fields_override_preset() {
        let request = ThemeRequest::from_toml_str(
            r#"
            preset = "poster"
            font_scale = 1.2
            "#,
        )
        .unwrap();
        let config = request.resolve().unwrap();
        assert_eq!(config.font_scale, 1.2);
        assert_eq!(config.style_base, StyleBase::SeabornPaper);
    }

    #[test]
    fn preset_fills_unset_fields() {
        let request = ThemeRequest::from_toml_str(
            r#"
            preset = "minimal"
            color_cycle = ["coral"]
            "#,
        )
        .unwrap();
        let config = request.resolve().unwrap();
        assert_eq!(config.style_base, StyleBase::SeabornWhitegrid);
        assert_eq!(config.color_cycle, ["#FE615A"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ThemeRequest::from_toml_str("palette = \"primary\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unknown_names_fail_closed() {
        let request = ThemeRequest {
            preset: Some("keynote".into()),
            ..ThemeRequest::default()
        };
        assert!(matches!(request.resolve(), Err(Error::UnknownPreset { .. })));

        let request = ThemeRequest {
            style_base: Some("ggplot".into()),
            ..ThemeRequest::default()
        };
        assert!(matches!(request.resolve(), Err(Error::UnknownStyleBase { .. })));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "style_base = \"seaborn-v0_8-notebook\"").unwrap();
        writeln!(file, "font_scale = 2.0").unwrap();

        let request = ThemeRequest::from_file(file.path()).unwrap();
        let config = request.resolve().unwrap();
        assert_eq!(config.style_base, StyleBase::SeabornNotebook);
        assert_eq!(config.font_sizes.axes_title, 24.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = ThemeRequest::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
    }
}
