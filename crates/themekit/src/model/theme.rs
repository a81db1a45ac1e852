//! The dual-mode theme configuration

use super::keys::Mode;
use super::maps::{BackgroundOverrides, BorderOverrides, ModeOverrides, SemanticMap, TextOverrides};
use super::palette::{NeutralPalette, Palette, Shade};
use serde::{Deserialize, Serialize};

/// Font used when nothing else is configured
pub const DEFAULT_FONT: &str = "Public Sans";

/// Radius used by the canonical defaults, in rem
pub const DEFAULT_RADIUS: f64 = 0.25;

/// The edited value: every color, radius, font and override field, once
/// per mode.
///
/// Holds only owned data, so [`snapshot`](Self::snapshot) yields a value
/// that shares nothing with the original.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub colors: SemanticMap<Palette>,
    pub dark_colors: SemanticMap<Palette>,
    pub color_shades: SemanticMap<Shade>,
    pub dark_color_shades: SemanticMap<Shade>,
    pub neutral: NeutralPalette,
    pub dark_neutral: NeutralPalette,
    pub radius: f64,
    pub dark_radius: f64,
    pub font: String,
    pub dark_font: String,
    pub light_overrides: ModeOverrides,
    pub dark_overrides: ModeOverrides,
}

impl ThemeConfig {
    /// Structural clone for history entries and presets.
    pub fn snapshot(&self) -> ThemeConfig {
        ThemeConfig {
            colors: self.colors.clone(),
            dark_colors: self.dark_colors.clone(),
            color_shades: self.color_shades.clone(),
            dark_color_shades: self.dark_color_shades.clone(),
            neutral: self.neutral,
            dark_neutral: self.dark_neutral,
            radius: self.radius,
            dark_radius: self.dark_radius,
            font: self.font.clone(),
            dark_font: self.dark_font.clone(),
            light_overrides: self.light_overrides.clone(),
            dark_overrides: self.dark_overrides.clone(),
        }
    }

    // ========== Per-mode access ==========

    pub fn colors(&self, mode: Mode) -> &SemanticMap<Palette> {
        match mode {
            Mode::Light => &self.colors,
            Mode::Dark => &self.dark_colors,
        }
    }

    pub fn colors_mut(&mut self, mode: Mode) -> &mut SemanticMap<Palette> {
        match mode {
            Mode::Light => &mut self.colors,
            Mode::Dark => &mut self.dark_colors,
        }
    }

    pub fn color_shades(&self, mode: Mode) -> &SemanticMap<Shade> {
        match mode {
            Mode::Light => &self.color_shades,
            Mode::Dark => &self.dark_color_shades,
        }
    }

    pub fn color_shades_mut(&mut self, mode: Mode) -> &mut SemanticMap<Shade> {
        match mode {
            Mode::Light => &mut self.color_shades,
            Mode::Dark => &mut self.dark_color_shades,
        }
    }

    pub fn neutral(&self, mode: Mode) -> NeutralPalette {
        match mode {
            Mode::Light => self.neutral,
            Mode::Dark => self.dark_neutral,
        }
    }

    pub fn neutral_mut(&mut self, mode: Mode) -> &mut NeutralPalette {
        match mode {
            Mode::Light => &mut self.neutral,
            Mode::Dark => &mut self.dark_neutral,
        }
    }

    pub fn radius(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Light => self.radius,
            Mode::Dark => self.dark_radius,
        }
    }

    pub fn radius_mut(&mut self, mode: Mode) -> &mut f64 {
        match mode {
            Mode::Light => &mut self.radius,
            Mode::Dark => &mut self.dark_radius,
        }
    }

    pub fn font(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.font,
            Mode::Dark => &self.dark_font,
        }
    }

    pub fn font_mut(&mut self, mode: Mode) -> &mut String {
        match mode {
            Mode::Light => &mut self.font,
            Mode::Dark => &mut self.dark_font,
        }
    }

    pub fn overrides(&self, mode: Mode) -> &ModeOverrides {
        match mode {
            Mode::Light => &self.light_overrides,
            Mode::Dark => &self.dark_overrides,
        }
    }

    pub fn overrides_mut(&mut self, mode: Mode) -> &mut ModeOverrides {
        match mode {
            Mode::Light => &mut self.light_overrides,
            Mode::Dark => &mut self.dark_overrides,
        }
    }

    /// Serialized names of the top-level fields that differ from `other`.
    pub fn diff(&self, other: &ThemeConfig) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut check = |name: &'static str, differs: bool| {
            if differs {
                fields.push(name);
            }
        };
        check("colors", self.colors != other.colors);
        check("darkColors", self.dark_colors != other.dark_colors);
        check("colorShades", self.color_shades != other.color_shades);
        check("darkColorShades", self.dark_color_shades != other.dark_color_shades);
        check("neutral", self.neutral != other.neutral);
        check("darkNeutral", self.dark_neutral != other.dark_neutral);
        check("radius", self.radius != other.radius);
        check("darkRadius", self.dark_radius != other.dark_radius);
        check("font", self.font != other.font);
        check("darkFont", self.dark_font != other.dark_font);
        check("lightOverrides", self.light_overrides != other.light_overrides);
        check("darkOverrides", self.dark_overrides != other.dark_overrides);
        fields
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            dark_colors: default_colors(),
            color_shades: SemanticMap::splat(Shade::S500),
            dark_color_shades: SemanticMap::splat(Shade::S400),
            neutral: NeutralPalette::Slate,
            dark_neutral: NeutralPalette::Slate,
            radius: DEFAULT_RADIUS,
            dark_radius: DEFAULT_RADIUS,
            font: DEFAULT_FONT.to_string(),
            dark_font: DEFAULT_FONT.to_string(),
            light_overrides: ModeOverrides::light(),
            dark_overrides: ModeOverrides::dark(),
        }
    }
}

fn default_colors() -> SemanticMap<Palette> {
    SemanticMap {
        primary: Palette::Green,
        secondary: Palette::Blue,
        success: Palette::Green,
        info: Palette::Blue,
        warning: Palette::Yellow,
        error: Palette::Red,
    }
}

impl ModeOverrides {
    /// Canonical light-mode overrides
    pub fn light() -> Self {
        Self {
            text: TextOverrides {
                dimmed: Shade::S400,
                muted: Shade::S500,
                toned: Shade::S600,
                default: Shade::S700,
                highlighted: Shade::S900,
                inverted: Shade::White,
            },
            background: BackgroundOverrides {
                default: Shade::White,
                muted: Shade::S50,
                elevated: Shade::S100,
                accented: Shade::S200,
                inverted: Shade::S900,
            },
            border: BorderOverrides {
                default: Shade::S200,
                muted: Shade::S200,
                accented: Shade::S300,
                inverted: Shade::S900,
            },
        }
    }

    /// Canonical dark-mode overrides
    pub fn dark() -> Self {
        Self {
            text: TextOverrides {
                dimmed: Shade::S500,
                muted: Shade::S400,
                toned: Shade::S300,
                default: Shade::S200,
                highlighted: Shade::White,
                inverted: Shade::S900,
            },
            background: BackgroundOverrides {
                default: Shade::S900,
                muted: Shade::S800,
                elevated: Shade::S800,
                accented: Shade::S700,
                inverted: Shade::White,
            },
            border: BorderOverrides {
                default: Shade::S800,
                muted: Shade::S700,
                accented: Shade::S700,
                inverted: Shade::White,
            },
        }
    }
}
