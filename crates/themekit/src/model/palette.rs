//! Palette and shade identifiers
//!
//! Ids only. Resolving a palette/shade pair to an actual color is the
//! renderer's job.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Chromatic palette families usable for the semantic roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Palette {
    /// Full palette list, in hue order.
    pub fn all() -> &'static [Palette] {
        const PALETTES: [Palette; 17] = [
            Palette::Red,
            Palette::Orange,
            Palette::Amber,
            Palette::Yellow,
            Palette::Lime,
            Palette::Green,
            Palette::Emerald,
            Palette::Teal,
            Palette::Cyan,
            Palette::Sky,
            Palette::Blue,
            Palette::Indigo,
            Palette::Violet,
            Palette::Purple,
            Palette::Fuchsia,
            Palette::Pink,
            Palette::Rose,
        ];
        &PALETTES
    }

    /// Stable id for serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Gray families usable for the neutral slot
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralPalette {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

impl NeutralPalette {
    pub fn all() -> &'static [NeutralPalette] {
        const PALETTES: [NeutralPalette; 5] = [
            NeutralPalette::Slate,
            NeutralPalette::Gray,
            NeutralPalette::Zinc,
            NeutralPalette::Neutral,
            NeutralPalette::Stone,
        ];
        &PALETTES
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
        }
    }
}

impl Display for NeutralPalette {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A step on a palette's lightness scale, or pure white/black.
///
/// Semantic color shades only accept the numeric tones; override maps
/// accept all of them.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Shade {
    #[serde(rename = "50")]
    S50,
    #[serde(rename = "100")]
    S100,
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
    #[serde(rename = "950")]
    S950,
    #[serde(rename = "white")]
    White,
    #[serde(rename = "black")]
    Black,
}

impl Shade {
    /// The numeric tones, lightest first.
    pub fn tones() -> &'static [Shade] {
        const TONES: [Shade; 11] = [
            Shade::S50,
            Shade::S100,
            Shade::S200,
            Shade::S300,
            Shade::S400,
            Shade::S500,
            Shade::S600,
            Shade::S700,
            Shade::S800,
            Shade::S900,
            Shade::S950,
        ];
        &TONES
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Whether this is a numeric palette tone (not white/black)
    pub fn is_tone(self) -> bool {
        !matches!(self, Self::White | Self::Black)
    }
}

impl Display for Shade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
