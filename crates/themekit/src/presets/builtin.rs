//! Built-in seed presets.

use super::ThemePreset;
use crate::model::{ModeOverrides, NeutralPalette, Palette, SemanticMap, Shade, ThemeConfig};
use chrono::{DateTime, Utc};

#[derive(Clone, Copy)]
struct Seed {
    name: &'static str,
    primary: Palette,
    secondary: Palette,
    neutral: NeutralPalette,
    radius: f64,
    font: &'static str,
}

const SEEDS: [Seed; 5] = [
    Seed {
        name: "Default",
        primary: Palette::Green,
        secondary: Palette::Blue,
        neutral: NeutralPalette::Slate,
        radius: 0.25,
        font: "Public Sans",
    },
    Seed {
        name: "Ocean",
        primary: Palette::Sky,
        secondary: Palette::Indigo,
        neutral: NeutralPalette::Slate,
        radius: 0.5,
        font: "Inter",
    },
    Seed {
        name: "Forest",
        primary: Palette::Emerald,
        secondary: Palette::Lime,
        neutral: NeutralPalette::Stone,
        radius: 0.375,
        font: "Nunito",
    },
    Seed {
        name: "Sunset",
        primary: Palette::Orange,
        secondary: Palette::Rose,
        neutral: NeutralPalette::Neutral,
        radius: 0.75,
        font: "Poppins",
    },
    Seed {
        name: "Mono",
        primary: Palette::Violet,
        secondary: Palette::Fuchsia,
        neutral: NeutralPalette::Zinc,
        radius: 0.0,
        font: "Geist",
    },
];

/// The non-deletable seed presets, all stamped with `now`.
pub fn builtin_presets(now: DateTime<Utc>) -> Vec<ThemePreset> {
    SEEDS
        .iter()
        .map(|seed| ThemePreset {
            built_in: true,
            ..ThemePreset::new(seed.name, seed_config(*seed), now)
        })
        .collect()
}

fn seed_config(seed: Seed) -> ThemeConfig {
    let colors = SemanticMap {
        primary: seed.primary,
        secondary: seed.secondary,
        success: Palette::Green,
        info: Palette::Blue,
        warning: Palette::Yellow,
        error: Palette::Red,
    };

    ThemeConfig {
        dark_colors: colors.clone(),
        colors,
        color_shades: SemanticMap::splat(Shade::S500),
        dark_color_shades: SemanticMap::splat(Shade::S400),
        neutral: seed.neutral,
        dark_neutral: seed.neutral,
        radius: seed.radius,
        dark_radius: seed.radius,
        font: seed.font.to_string(),
        dark_font: seed.font.to_string(),
        light_overrides: ModeOverrides::light(),
        dark_overrides: ModeOverrides::dark(),
    }
}
