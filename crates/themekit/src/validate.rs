//! Candidate validation
//!
//! Everything entering live state or a preset passes through a
//! [`ConfigValidator`]. Typed configs are converted back to JSON first so
//! there is a single trust path.

use crate::config::{EngineConfig, RadiusBounds};
use crate::error::ValidationError;
use crate::model::{
    Mode, ModeOverrides, NeutralPalette, Palette, SemanticMap, Shade, ThemeConfig,
};
use serde::Deserialize;
use serde_json::Value;

/// Accepts or rejects a candidate theme object.
pub trait ConfigValidator {
    /// Check `candidate` and return the normalized config on success.
    fn validate(&self, candidate: &Value) -> Result<ThemeConfig, ValidationError>;

    /// Validate an already-typed config.
    fn validate_config(&self, config: &ThemeConfig) -> Result<ThemeConfig, ValidationError> {
        let value = serde_json::to_value(config)?;
        self.validate(&value)
    }

    /// Range a radius must fall in. Setters clamp into it.
    fn radius_bounds(&self) -> RadiusBounds {
        RadiusBounds::default()
    }

    /// Whether `font` would pass validation for either mode.
    fn accepts_font(&self, font: &str) -> bool {
        !font.trim().is_empty()
    }
}

/// Wire shape accepted on input. Dark-mode fields and override maps may be
/// omitted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    colors: SemanticMap<Palette>,
    dark_colors: Option<SemanticMap<Palette>>,
    color_shades: SemanticMap<Shade>,
    dark_color_shades: Option<SemanticMap<Shade>>,
    neutral: NeutralPalette,
    dark_neutral: Option<NeutralPalette>,
    radius: f64,
    dark_radius: Option<f64>,
    font: String,
    dark_font: Option<String>,
    light_overrides: Option<ModeOverrides>,
    dark_overrides: Option<ModeOverrides>,
}

impl Candidate {
    /// Fill omitted dark-mode fields from their light counterparts.
    fn normalize(self) -> ThemeConfig {
        let light_overrides = self.light_overrides.unwrap_or_else(ModeOverrides::light);
        ThemeConfig {
            dark_colors: self.dark_colors.unwrap_or_else(|| self.colors.clone()),
            colors: self.colors,
            dark_color_shades: self
                .dark_color_shades
                .unwrap_or_else(|| self.color_shades.clone()),
            color_shades: self.color_shades,
            dark_neutral: self.dark_neutral.unwrap_or(self.neutral),
            neutral: self.neutral,
            dark_radius: self.dark_radius.unwrap_or(self.radius),
            radius: self.radius,
            dark_font: self.dark_font.unwrap_or_else(|| self.font.clone()),
            font: self.font,
            dark_overrides: self
                .dark_overrides
                .unwrap_or_else(|| light_overrides.clone()),
            light_overrides,
        }
    }
}

/// Default validator: structural shape plus range and membership checks.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    radius: RadiusBounds,
    /// Empty accepts any non-empty font.
    fonts: Vec<String>,
}

impl SchemaValidator {
    pub fn new(radius: RadiusBounds, fonts: Vec<String>) -> Self {
        Self { radius, fonts }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.radius, config.fonts.clone())
    }

    fn is_listed(&self, font: &str) -> bool {
        self.fonts.is_empty() || self.fonts.iter().any(|f| f == font)
    }

    fn check(&self, config: &ThemeConfig) -> Result<(), ValidationError> {
        for &mode in Mode::all() {
            let radius = config.radius(mode);
            if !self.radius.contains(radius) {
                return Err(ValidationError::RadiusOutOfBounds {
                    mode,
                    value: radius,
                    min: self.radius.min,
                    max: self.radius.max,
                });
            }

            let font = config.font(mode);
            if font.trim().is_empty() {
                return Err(ValidationError::EmptyFont { mode });
            }
            if !self.is_listed(font) {
                return Err(ValidationError::UnknownFont {
                    mode,
                    font: font.to_string(),
                });
            }

            if let Some((role, shade)) = config
                .color_shades(mode)
                .iter()
                .find(|(_, shade)| !shade.is_tone())
            {
                return Err(ValidationError::ShadeNotTone {
                    mode,
                    role,
                    shade: shade.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl ConfigValidator for SchemaValidator {
    fn validate(&self, candidate: &Value) -> Result<ThemeConfig, ValidationError> {
        if !candidate.is_object() {
            return Err(ValidationError::NotAnObject);
        }
        let parsed = Candidate::deserialize(candidate)?;
        let config = parsed.normalize();
        self.check(&config)?;
        Ok(config)
    }

    fn radius_bounds(&self) -> RadiusBounds {
        self.radius
    }

    fn accepts_font(&self, font: &str) -> bool {
        !font.trim().is_empty() && self.is_listed(font)
    }
}
