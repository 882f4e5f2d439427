//! Ready-made theme presets.
//!
//! Presets bundle a base style, an optional color cycle and a font scale for
//! common situations (slides, posters, print). The table order below is the
//! listing order and is kept stable.

use std::fmt;
use std::str::FromStr;

use crate::theme::{StyleBase, ThemeOptions};
use crate::{Error, Result};

/// A registered preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetName {
    Default,
    Presentation,
    Print,
    Colorblind,
    Minimal,
    Notebook,
    Poster,
}

// Rows are indexed by `PresetName` discriminant.
struct PresetEntry {
    key: &'static str,
    description: &'static str,
    style_base: StyleBase,
    color_cycle: Option<&'static [&'static str]>,
    font_scale: f64,
}

static PRESETS: [PresetEntry; 7] = [
    PresetEntry {
        key: "default",
        description: "Standard Oxford theme for academic papers",
        style_base: StyleBase::SeabornPaper,
        color_cycle: None,
        font_scale: 1.0,
    },
    PresetEntry {
        key: "presentation",
        description: "Larger fonts and elements for slides",
        style_base: StyleBase::SeabornPaper,
        color_cycle: None,
        font_scale: 1.4,
    },
    PresetEntry {
        key: "print",
        description: "High contrast for printed materials",
        style_base: StyleBase::SeabornPaper,
        color_cycle: Some(&["oxford_blue", "coral", "aqua", "orange", "vivid_green"]),
        font_scale: 1.0,
    },
    PresetEntry {
        key: "colorblind",
        description: "Colorblind-friendly palette",
        style_base: StyleBase::SeabornPaper,
        color_cycle: Some(&["oxford_blue", "orange", "aqua", "mauve", "vivid_green"]),
        font_scale: 1.0,
    },
    PresetEntry {
        key: "minimal",
        description: "Minimal styling with grid",
        style_base: StyleBase::SeabornWhitegrid,
        color_cycle: Some(&["oxford_blue", "royal_blue", "aqua", "cerulean_blue"]),
        font_scale: 1.0,
    },
    PresetEntry {
        key: "notebook",
        description: "Optimized for Jupyter notebooks",
        style_base: StyleBase::SeabornNotebook,
        color_cycle: None,
        font_scale: 1.1,
    },
    PresetEntry {
        key: "poster",
        description: "Extra large fonts for conference posters",
        style_base: StyleBase::SeabornPaper,
        color_cycle: None,
        font_scale: 1.8,
    },
];

impl PresetName {
    /// Every preset, in listing order.
    pub const ALL: [PresetName; 7] = [
        Self::Default,
        Self::Presentation,
        Self::Print,
        Self::Colorblind,
        Self::Minimal,
        Self::Notebook,
        Self::Poster,
    ];

    fn entry(self) -> &'static PresetEntry {
        &PRESETS[self as usize]
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        self.entry().key
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Look up a preset by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// An owned copy of the preset configuration.
    pub fn config(self) -> PresetConfig {
        let entry = self.entry();
        PresetConfig {
            name: self,
            description: entry.description,
            style_base: entry.style_base,
            color_cycle: entry
                .color_cycle
                .map(|colors| colors.iter().map(|c| c.to_string()).collect()),
            font_scale: entry.font_scale,
        }
    }

    /// Iterate over the canonical names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(PresetName::name)
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_preset(s, Self::names()))
    }
}

/// Configuration bundle of a preset. Editing it never affects the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetConfig {
    /// Which preset this came from.
    pub name: PresetName,
    /// One-line description.
    pub description: &'static str,
    /// Base style.
    pub style_base: StyleBase,
    /// Color names, or `None` for the default palette.
    pub color_cycle: Option<Vec<String>>,
    /// Font size multiplier, always positive.
    pub font_scale: f64,
}

impl PresetConfig {
    /// Theme options equivalent to this preset.
    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            style_base: Some(self.style_base),
            color_cycle: self.color_cycle.clone(),
            font_scale: Some(self.font_scale),
        }
    }
}

/// Resolve a preset name to a copy of its configuration.
///
/// # Errors
///
/// [`Error::UnknownPreset`] when the lowercased name is not registered.
pub fn resolve_preset(name: &str) -> Result<PresetConfig> {
    name.parse::<PresetName>().map(PresetName::config)
}

/// Name and description of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetSummary {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every preset, in table order.
pub fn list_presets() -> Vec<PresetSummary> {
    PRESETS
        .iter()
        .map(|entry| PresetSummary {
            name: entry.key,
            description: entry.description,
        })
        .collect()
}

/// Human-readable preset table, rendered through `Display`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetListing;

impl fmt::Display for PresetListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "Available Oxford Theme Presets:")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{:<15} {}", "Name", "Description")?;
        writeln!(f, "{}", "-".repeat(70))?;
        for preset in list_presets() {
            writeln!(f, "{:<15} {}", preset.name, preset.description)?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        write!(f, "Usage: apply_preset(host, \"preset_name\")")
    }
}
