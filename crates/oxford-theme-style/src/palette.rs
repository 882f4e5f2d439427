//! Curated color palettes.
//!
//! A palette is an ordered, non-empty list of registry colors. Order is the
//! default plotting order. Requests for more colors than a palette holds
//! wrap around to the start, so a 5-color palette asked for 7 colors yields
//! indices `[0, 1, 2, 3, 4, 0, 1]`.

use std::fmt;
use std::str::FromStr;

use crate::color::OxfordColor::{self, *};
use crate::{Error, Result};

const PRIMARY: &[OxfordColor] = &[
    OxfordBlue, Coral, Aqua, YellowOchre, Plum, SageGreen, Orange, SkyBlue, Pink, Viridian,
];

const PROFESSIONAL: &[OxfordColor] = &[OxfordBlue, AshGrey, Green, Sienna, RoyalBlue, Umber];

const VIBRANT: &[OxfordColor] = &[
    Coral, Aqua, Orange, Pink, VividGreen, CeruleanBlue, LemonYellow,
];

const PASTEL: &[OxfordColor] = &[
    SkyBlue, Peach, Lilac, SageGreen, PottersPink, Lavender, CoolGrey,
];

const DIVERGING: &[OxfordColor] = &[Coral, Peach, StoneGrey, SkyBlue, OxfordBlue];

const SEQUENTIAL_BLUE: &[OxfordColor] = &[SkyBlue, CeruleanBlue, RoyalBlue, OxfordBlue, Charcoal];

const HEALTH: &[OxfordColor] = &[OxfordPhc, Plum, Coral, Aqua, SageGreen];

const TRADITIONAL: &[OxfordColor] = &[OxfordBlue, Red, Green, Gold, Charcoal, StoneGrey];

const CONTEMPORARY: &[OxfordColor] = &[Mauve, Peach, Dusk, OceanGrey, Sienna, CoolGrey];

const CELEBRATORY: &[OxfordColor] = &[Pink, Orange, Coral, YellowOchre, VividGreen, SkyBlue];

const CORPORATE: &[OxfordColor] = &[OxfordBlue, RoyalBlue, Charcoal, AshGrey, StoneGrey, OffWhite];

const INNOVATIVE: &[OxfordColor] = &[Aqua, VividGreen, CeruleanBlue, LimeGreen, Viridian, SkyBlue];

// Brand, dark blues, mid blues, light blues, purples, neutral purples, greys,
// accent, backgrounds.
const PHC_THESIS: &[OxfordColor] = &[
    OxfordBlue,
    OxfordPhc,
    NavyBlue,
    DeepTeal,
    SlateBlue1,
    SlateBlue2,
    BrightBlue,
    Periwinkle,
    Cornflower,
    PowderBlue,
    ThesisPurple1,
    ThesisPurple2,
    Iris,
    Amethyst,
    Wisteria,
    SoftPurple,
    Lilac,
    Lavender,
    Heather,
    Plum,
    DustyMauve,
    GreyBlue,
    AshGrey,
    PaleGrey,
    GoldenYellow,
    White,
    Black,
];

/// The eight-color signature cycle, starting with Oxford Blue.
pub const OXFORD_SIGNATURE_CYCLE: [&str; 8] = [
    OxfordBlue.hex(),
    RoyalBlue.hex(),
    Aqua.hex(),
    Coral.hex(),
    VividGreen.hex(),
    Orange.hex(),
    Mauve.hex(),
    CeruleanBlue.hex(),
];

/// A registered palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Primary,
    Professional,
    Vibrant,
    Pastel,
    Diverging,
    SequentialBlue,
    Health,
    Traditional,
    Contemporary,
    Celebratory,
    Corporate,
    Innovative,
    PhcThesis,
}

impl PaletteName {
    /// Every palette, in registry order.
    pub const ALL: [PaletteName; 13] = [
        Self::Primary,
        Self::Professional,
        Self::Vibrant,
        Self::Pastel,
        Self::Diverging,
        Self::SequentialBlue,
        Self::Health,
        Self::Traditional,
        Self::Contemporary,
        Self::Celebratory,
        Self::Corporate,
        Self::Innovative,
        Self::PhcThesis,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Professional => "professional",
            Self::Vibrant => "vibrant",
            Self::Pastel => "pastel",
            Self::Diverging => "diverging",
            Self::SequentialBlue => "sequential_blue",
            Self::Health => "health",
            Self::Traditional => "traditional",
            Self::Contemporary => "contemporary",
            Self::Celebratory => "celebratory",
            Self::Corporate => "corporate",
            Self::Innovative => "innovative",
            Self::PhcThesis => "phc_thesis",
        }
    }

    /// What the palette is meant for.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Primary => "General purpose palette",
            Self::Professional => "Business/academic presentations",
            Self::Vibrant => "Eye-catching visualizations",
            Self::Pastel => "Softer visualizations",
            Self::Diverging => "Data with a meaningful center point",
            Self::SequentialBlue => "Continuous data",
            Self::Health => "PHC department specific",
            Self::Traditional => "Heritage and stability",
            Self::Contemporary => "Modern and clean",
            Self::Celebratory => "Festive and bright",
            Self::Corporate => "Professional",
            Self::Innovative => "Tech-focused",
            Self::PhcThesis => "Comprehensive thesis palette",
        }
    }

    /// The palette members in plotting order.
    pub const fn members(self) -> &'static [OxfordColor] {
        match self {
            Self::Primary => PRIMARY,
            Self::Professional => PROFESSIONAL,
            Self::Vibrant => VIBRANT,
            Self::Pastel => PASTEL,
            Self::Diverging => DIVERGING,
            Self::SequentialBlue => SEQUENTIAL_BLUE,
            Self::Health => HEALTH,
            Self::Traditional => TRADITIONAL,
            Self::Contemporary => CONTEMPORARY,
            Self::Celebratory => CELEBRATORY,
            Self::Corporate => CORPORATE,
            Self::Innovative => INNOVATIVE,
            Self::PhcThesis => PHC_THESIS,
        }
    }

    /// Number of distinct entries before the palette wraps.
    pub const fn len(self) -> usize {
        self.members().len()
    }

    /// Look up a palette by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Hex values of the palette, optionally cut or cycled to `count`.
    ///
    /// - `None` returns the whole palette.
    /// - `Some(n)` with `n <= len` returns the first `n` entries.
    /// - `Some(n)` with `n > len` repeats from the start (`i % len`).
    pub fn colors(self, count: Option<usize>) -> Vec<&'static str> {
        let members = self.members();
        let count = count.unwrap_or(members.len());
        (0..count).map(|i| members[i % members.len()].hex()).collect()
    }

    /// Iterate over the canonical names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(PaletteName::name)
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_palette(s, Self::names()))
    }
}

/// Resolve a palette name to a fresh list of hex values.
///
/// See [`PaletteName::colors`] for how `count` cuts or cycles the palette.
///
/// # Errors
///
/// [`Error::UnknownPalette`] when the lowercased name is not registered.
///
/// # Example
///
/// ```
/// use oxford_theme_style::palette::resolve_palette;
///
/// let full = resolve_palette("diverging", None).unwrap();
/// let cycled = resolve_palette("DIVERGING", Some(7)).unwrap();
/// assert_eq!(full.len(), 5);
/// assert_eq!(cycled[5], full[0]);
/// assert_eq!(cycled[6], full[1]);
/// ```
pub fn resolve_palette(name: &str, count: Option<usize>) -> Result<Vec<&'static str>> {
    let palette: PaletteName = name.parse()?;
    tracing::debug!(palette = palette.name(), ?count, "resolving palette");
    Ok(palette.colors(count))
}

/// Alias of [`resolve_palette`].
pub fn resolve_color_palette(name: &str, count: Option<usize>) -> Result<Vec<&'static str>> {
    resolve_palette(name, count)
}
