//! Host base styles the Oxford theme is layered on.

use std::fmt;
use std::str::FromStr;

use super::FontSizes;
use crate::{Error, Result};

/// A host base style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleBase {
    /// Publication-ready paper context.
    #[default]
    SeabornPaper,
    /// Notebook context, slightly larger text.
    SeabornNotebook,
    /// Default sizes with a background grid.
    SeabornWhitegrid,
}

impl StyleBase {
    /// Every supported base style.
    pub const ALL: [StyleBase; 3] = [
        Self::SeabornPaper,
        Self::SeabornNotebook,
        Self::SeabornWhitegrid,
    ];

    /// Host identifier of the style.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SeabornPaper => "seaborn-v0_8-paper",
            Self::SeabornNotebook => "seaborn-v0_8-notebook",
            Self::SeabornWhitegrid => "seaborn-v0_8-whitegrid",
        }
    }

    /// Font sizes in points the host uses under this style.
    ///
    /// Relative sizes are resolved against a 10pt base (`medium` = 10,
    /// `large` = 12).
    pub const fn base_font_sizes(self) -> FontSizes {
        match self {
            Self::SeabornPaper => FontSizes {
                font: 10.0,
                axes_label: 8.8,
                axes_title: 9.6,
                xtick_label: 8.0,
                ytick_label: 8.0,
                legend: 8.0,
                figure_title: 12.0,
            },
            Self::SeabornNotebook => FontSizes {
                font: 10.0,
                axes_label: 11.0,
                axes_title: 12.0,
                xtick_label: 10.0,
                ytick_label: 10.0,
                legend: 10.0,
                figure_title: 12.0,
            },
            Self::SeabornWhitegrid => FontSizes {
                font: 10.0,
                axes_label: 10.0,
                axes_title: 12.0,
                xtick_label: 10.0,
                ytick_label: 10.0,
                legend: 10.0,
                figure_title: 12.0,
            },
        }
    }

    /// Look up a style by its host identifier. Matching is exact apart from case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for StyleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            Error::unknown_style_base(s, Self::ALL.into_iter().map(StyleBase::name))
        })
    }
}
