//! Export geometry required by common journals.

use std::fmt;
use std::str::FromStr;

use oxford_theme_render::ExportFormat;

use crate::export::ExportOptions;
use crate::theme::FigureOptions;
use crate::{Error, Result};

/// A journal with a known figure specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Journal {
    Nature,
    NatureDouble,
    Plos,
    Bmj,
    Lancet,
}

impl Journal {
    /// Every journal, in table order.
    pub const ALL: [Journal; 5] = [
        Self::Nature,
        Self::NatureDouble,
        Self::Plos,
        Self::Bmj,
        Self::Lancet,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::NatureDouble => "nature_double",
            Self::Plos => "plos",
            Self::Bmj => "bmj",
            Self::Lancet => "lancet",
        }
    }

    /// Look up a journal by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|j| j.name() == name)
    }

    /// The journal's figure requirements.
    pub fn preset(self) -> JournalPreset {
        let (figsize, format) = match self {
            Self::Nature => ((3.5, 2.5), ExportFormat::Svg),
            Self::NatureDouble => ((7.0, 5.0), ExportFormat::Svg),
            Self::Plos => ((6.83, 5.0), ExportFormat::Tiff),
            Self::Bmj => ((3.27, 2.5), ExportFormat::Eps),
            Self::Lancet => ((3.27, 2.5), ExportFormat::Tiff),
        };
        JournalPreset {
            journal: self,
            figsize,
            dpi: 300,
            format,
        }
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Journal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
            .ok_or_else(|| Error::unknown_journal(s, Self::ALL.into_iter().map(Journal::name)))
    }
}

/// Figure size, resolution and file format required by a journal.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalPreset {
    /// The journal.
    pub journal: Journal,
    /// `(width, height)` in inches.
    pub figsize: (f64, f64),
    /// Resolution in dots per inch.
    pub dpi: u32,
    /// Required file format.
    pub format: ExportFormat,
}

impl JournalPreset {
    /// Figure options with this journal's size.
    pub fn figure_options(&self) -> FigureOptions {
        FigureOptions::from(self)
    }

    /// Export options with this journal's format and resolution.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::from(self)
    }
}

/// Resolve a journal name to its export specification.
///
/// # Errors
///
/// [`Error::UnknownJournal`] when the lowercased name is not in the table.
///
/// # Example
///
/// ```
/// use oxford_theme_style::journal::resolve_journal;
///
/// let nature = resolve_journal("Nature").unwrap();
/// assert_eq!(nature.figsize, (3.5, 2.5));
/// assert_eq!(nature.format.extension(), "svg");
/// ```
pub fn resolve_journal(name: &str) -> Result<JournalPreset> {
    let journal: Journal = name.parse()?;
    tracing::debug!(journal = journal.name(), "resolved journal preset");
    Ok(journal.preset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nature_requirements() {
        let preset = resolve_journal("nature").unwrap();
        assert_eq!(preset.figsize, (3.5, 2.5));
        assert_eq!(preset.dpi, 300);
        assert_eq!(preset.format, ExportFormat::Svg);
    }

    #[test]
    fn table_values() {
        let plos = resolve_journal("plos").unwrap();
        assert_eq!(plos.figsize, (6.83, 5.0));
        assert_eq!(plos.format, ExportFormat::Tiff);

        let bmj = resolve_journal("BMJ").unwrap();
        assert_eq!(bmj.format, ExportFormat::Eps);
        assert_eq!(resolve_journal("nature_double").unwrap().figsize, (7.0, 5.0));
    }

    #[test]
    fn every_preset_is_positive() {
        for journal in Journal::ALL {
            let preset = journal.preset();
            assert!(preset.figsize.0 > 0.0 && preset.figsize.1 > 0.0, "{journal}");
            assert!(preset.dpi > 0);
        }
    }

    #[test]
    fn unknown_journal_lists_names() {
        let err = resolve_journal("science").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Journal 'science' not found. Available: bmj, lancet, nature, nature_double, plos"
        );
    }

    #[test]
    fn helpers_carry_geometry_and_format() {
        let preset = resolve_journal("lancet").unwrap();
        let figure = preset.figure_options();
        assert_eq!(figure.size.as_tuple(), (3.27, 2.5));

        let export = preset.export_options();
        assert_eq!(export.format, ExportFormat::Tiff);
        assert_eq!(export.dpi, 300);
    }
}
