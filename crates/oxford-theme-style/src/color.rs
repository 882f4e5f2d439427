//! Official Oxford University brand colors.
//!
//! Every color has a canonical lowercase snake_case name and a `#RRGGBB`
//! value. Lookup by name is case-insensitive and exact: there is no partial
//! matching and no fuzzy suggestion.

use std::fmt;
use std::str::FromStr;

use oxford_theme_render::Color;

use crate::{Error, Result};

/// Section of the brand guidelines a color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    /// The signature Oxford Blue.
    Primary,
    /// Department accents.
    Department,
    /// Secondary brand colors.
    Secondary,
    /// Neutrals for text, rules and backgrounds.
    Neutral,
    /// Metallic print colors.
    Metallic,
    /// Colors from the PHC thesis palette sheets.
    Thesis,
}

macro_rules! color_table {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $hex:literal, $group:ident; )+) => {
        /// A named Oxford brand color.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum OxfordColor {
            $( $(#[$doc])* $variant, )+
        }

        impl OxfordColor {
            /// Every registered color, in brand-guideline order.
            pub const ALL: &'static [OxfordColor] = &[ $( Self::$variant, )+ ];

            /// Canonical lowercase name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Uppercase `#RRGGBB` value.
            pub const fn hex(self) -> &'static str {
                match self {
                    $( Self::$variant => $hex, )+
                }
            }

            /// Guideline section.
            pub const fn group(self) -> ColorGroup {
                match self {
                    $( Self::$variant => ColorGroup::$group, )+
                }
            }
        }
    };
}

color_table! {
    /// RGB(0,33,71), Pantone 282C.
    OxfordBlue => "oxford_blue", "#002147", Primary;
    /// Primary Care Health Sciences accent, RGB(138,23,81).
    OxfordPhc => "oxford_phc", "#8A1751", Department;
    /// Pantone 667C.
    Mauve => "mauve", "#776885", Secondary;
    /// Pantone 4051C.
    Peach => "peach", "#E08D79", Secondary;
    /// Pantone 2339C.
    PottersPink => "potters_pink", "#ED9390", Secondary;
    /// Pantone 6030C.
    Dusk => "dusk", "#C4A29E", Secondary;
    /// Pantone 524C.
    Lilac => "lilac", "#D1BDD5", Secondary;
    /// Pantone 4036C.
    Sienna => "sienna", "#994636", Secondary;
    /// Pantone 187C.
    Red => "red", "#BE0F34", Secondary;
    /// Pantone 2425C.
    Plum => "plum", "#7F055F", Secondary;
    /// Pantone 178C.
    Coral => "coral", "#FE615A", Secondary;
    /// Pantone 2635C.
    Lavender => "lavender", "#D4CDF4", Secondary;
    /// Pantone 1655C.
    Orange => "orange", "#FB5607", Secondary;
    /// Pantone 2385C.
    Pink => "pink", "#E6007E", Secondary;
    /// Pantone 5545C.
    Green => "green", "#426A5A", Secondary;
    /// Pantone 2211C.
    OceanGrey => "ocean_grey", "#789E9E", Secondary;
    /// Pantone 4016C.
    YellowOchre => "yellow_ochre", "#E2C044", Secondary;
    /// Pantone 7541C.
    CoolGrey => "cool_grey", "#E4F0EF", Secondary;
    /// Pantone 277C.
    SkyBlue => "sky_blue", "#B9D6F2", Secondary;
    /// Pantone 7494C.
    SageGreen => "sage_green", "#A0AF84", Secondary;
    /// Pantone 5473C.
    Viridian => "viridian", "#15616D", Secondary;
    /// Pantone 2126C.
    RoyalBlue => "royal_blue", "#1D42A6", Secondary;
    /// Pantone 7710C.
    Aqua => "aqua", "#00AAB4", Secondary;
    /// Pantone 3385C.
    VividGreen => "vivid_green", "#65E5AE", Secondary;
    /// Pantone 2292C.
    LimeGreen => "lime_green", "#95C11F", Secondary;
    /// Pantone 292C.
    CeruleanBlue => "cerulean_blue", "#49B6FF", Secondary;
    /// Pantone 3935C.
    LemonYellow => "lemon_yellow", "#F7EF66", Secondary;
    /// Pantone 419C.
    Charcoal => "charcoal", "#211D1C", Neutral;
    /// Pantone 6215C.
    AshGrey => "ash_grey", "#61615F", Neutral;
    /// Pantone 403C.
    Umber => "umber", "#89827A", Neutral;
    /// Pantone Cool Gray 1C.
    StoneGrey => "stone_grey", "#D9D8D6", Neutral;
    /// Pantone Warm Gray 1C.
    ShellGrey => "shell_grey", "#F1EEE9", Neutral;
    /// Pantone 663C.
    OffWhite => "off_white", "#F2F0F0", Neutral;
    /// Pantone 10122C.
    Gold => "gold", "#FFD700", Metallic;
    /// Pantone 10103C.
    Silver => "silver", "#C0C0C0", Metallic;
    White => "white", "#FFFFFF", Thesis;
    Black => "black", "#000000", Thesis;
    ThesisPurple1 => "thesis_purple_1", "#5F4D78", Thesis;
    BrightBlue => "bright_blue", "#54ABE7", Thesis;
    ThesisPurple2 => "thesis_purple_2", "#8A5C9B", Thesis;
    SlateBlue1 => "slate_blue_1", "#57779D", Thesis;
    SlateBlue2 => "slate_blue_2", "#57789E", Thesis;
    Periwinkle => "periwinkle", "#779ECD", Thesis;
    Iris => "iris", "#6D60B0", Thesis;
    DeepTeal => "deep_teal", "#14616E", Thesis;
    GoldenYellow => "golden_yellow", "#DFBF45", Thesis;
    DustyMauve => "dusty_mauve", "#786A83", Thesis;
    Wisteria => "wisteria", "#9391C8", Thesis;
    PowderBlue => "powder_blue", "#C9EEFE", Thesis;
    GreyBlue => "grey_blue", "#9FA7C3", Thesis;
    Amethyst => "amethyst", "#7E79BC", Thesis;
    NavyBlue => "navy_blue", "#06264B", Thesis;
    SoftPurple => "soft_purple", "#A585B2", Thesis;
    PaleGrey => "pale_grey", "#E4E7ED", Thesis;
    Heather => "heather", "#C5C0DF", Thesis;
    Cornflower => "cornflower", "#759ECC", Thesis;
}

impl OxfordColor {
    /// Look up a color by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// The color as an RGB value.
    pub fn color(self) -> Color {
        Color::from_hex(self.hex()).expect("registry hex values are well-formed")
    }

    /// Iterate over the canonical names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|c| c.name())
    }
}

impl fmt::Display for OxfordColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OxfordColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_color(s, Self::names()))
    }
}

/// Resolve a color name to its `#RRGGBB` value.
///
/// # Errors
///
/// [`Error::UnknownColor`] when the lowercased name is not registered.
///
/// # Example
///
/// ```
/// use oxford_theme_style::color::resolve_color;
///
/// assert_eq!(resolve_color("oxford_blue").unwrap(), "#002147");
/// assert_eq!(resolve_color("Coral").unwrap(), "#FE615A");
/// assert!(resolve_color("not_a_color").is_err());
/// ```
pub fn resolve_color(name: &str) -> Result<&'static str> {
    name.parse::<OxfordColor>().map(OxfordColor::hex)
}
