//! Program theme enumeration and its display palette.
//!
//! # Responsibility
//! - Define the closed set of academic/field categories a program belongs to.
//! - Map every theme to one fixed display color.
//!
//! # Invariants
//! - `Theme::ALL` lists every variant exactly once, in declaration order.
//! - The color table is total: each variant has exactly one entry.
//! - Wire and display form is the human label (`"Computer Science"`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Academic/field category attached to a program.
///
/// Declaration order is meaningful: theme groupings break count ties by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Physics,
    Engineering,
    #[default]
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Mathematics,
    Biology,
    Chemistry,
    Business,
    Arts,
    #[serde(rename = "Social Science")]
    SocialScience,
    Law,
    Medicine,
    Psychology,
    Other,
    Interdisciplinary,
}

/// RGB display color for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ThemeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ThemeColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const THEME_COUNT: usize = 14;

// Indexed by `Theme as usize`.
const THEME_COLORS: [ThemeColor; THEME_COUNT] = [
    ThemeColor::rgb(0x4a, 0x90, 0xe2), // Physics
    ThemeColor::rgb(0xf5, 0xa6, 0x23), // Engineering
    ThemeColor::rgb(0x50, 0xe3, 0xc2), // Computer Science
    ThemeColor::rgb(0x9b, 0x59, 0xb6), // Mathematics
    ThemeColor::rgb(0x7e, 0xd3, 0x21), // Biology
    ThemeColor::rgb(0x1a, 0xbc, 0x9c), // Chemistry
    ThemeColor::rgb(0x34, 0x49, 0x5e), // Business
    ThemeColor::rgb(0xe9, 0x1e, 0x63), // Arts
    ThemeColor::rgb(0xff, 0x98, 0x00), // Social Science
    ThemeColor::rgb(0x79, 0x55, 0x48), // Law
    ThemeColor::rgb(0xe7, 0x4c, 0x3c), // Medicine
    ThemeColor::rgb(0x8e, 0x44, 0xad), // Psychology
    ThemeColor::rgb(0x95, 0xa5, 0xa6), // Other
    ThemeColor::rgb(0x3f, 0x51, 0xb5), // Interdisciplinary
];

impl Theme {
    /// Every theme in declaration order.
    pub const ALL: [Theme; THEME_COUNT] = [
        Theme::Physics,
        Theme::Engineering,
        Theme::ComputerScience,
        Theme::Mathematics,
        Theme::Biology,
        Theme::Chemistry,
        Theme::Business,
        Theme::Arts,
        Theme::SocialScience,
        Theme::Law,
        Theme::Medicine,
        Theme::Psychology,
        Theme::Other,
        Theme::Interdisciplinary,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Physics => "Physics",
            Theme::Engineering => "Engineering",
            Theme::ComputerScience => "Computer Science",
            Theme::Mathematics => "Mathematics",
            Theme::Biology => "Biology",
            Theme::Chemistry => "Chemistry",
            Theme::Business => "Business",
            Theme::Arts => "Arts",
            Theme::SocialScience => "Social Science",
            Theme::Law => "Law",
            Theme::Medicine => "Medicine",
            Theme::Psychology => "Psychology",
            Theme::Other => "Other",
            Theme::Interdisciplinary => "Interdisciplinary",
        }
    }

    /// Parses a theme from its label. Returns `None` for unknown labels.
    pub fn from_label(value: &str) -> Option<Theme> {
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.label() == value)
    }

    /// Fixed display color for this theme.
    pub fn color(self) -> ThemeColor {
        THEME_COLORS[self as usize]
    }
}

/// Label that matches no theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl Display for UnknownTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme label `{}`", self.0)
    }
}

impl Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Theme::from_label(value).ok_or_else(|| UnknownTheme(value.to_string()))
    }
}
