//! Engine settings (themekit.toml)

use crate::error::Result;
use crate::history::HistoryConfig;
use crate::model::DEFAULT_FONT;
use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Accepted font ids. Empty accepts any non-empty font.
    #[serde(default = "default_fonts")]
    pub fonts: Vec<String>,
    /// Seed the repository with the non-deletable built-in presets
    #[serde(default)]
    pub builtin_presets: bool,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub radius: RadiusBounds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fonts: default_fonts(),
            builtin_presets: false,
            history: HistoryConfig::default(),
            radius: RadiusBounds::default(),
        }
    }
}

impl EngineConfig {
    /// Parse from TOML source. Missing sections take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(src)?;
        tracing::debug!(
            "EngineConfig loaded: history capacity {}, radius [{}, {}], {} fonts",
            config.history.capacity,
            config.radius.min,
            config.radius.max,
            config.fonts.len()
        );
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Inclusive radius range, in rem
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RadiusBounds {
    #[serde(default = "default_radius_min")]
    pub min: f64,
    #[serde(default = "default_radius_max")]
    pub max: f64,
}

impl Default for RadiusBounds {
    fn default() -> Self {
        Self {
            min: default_radius_min(),
            max: default_radius_max(),
        }
    }
}

impl RadiusBounds {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Clamp into range. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

fn default_radius_min() -> f64 {
    0.0
}

fn default_radius_max() -> f64 {
    1.0
}

fn default_fonts() -> Vec<String> {
    [
        DEFAULT_FONT,
        "Inter",
        "Geist",
        "Roboto",
        "Poppins",
        "Outfit",
        "Raleway",
        "Nunito",
        "DM Sans",
        "Figtree",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}
