//! Subcommand implementations

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use themekit::{
    builtin_presets, Clock, ConfigValidator, EngineConfig, SchemaValidator, SystemClock,
    ThemeConfig, ThemeEngine,
};

fn read_candidate(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn validate_file(validator: &SchemaValidator, path: &Path) -> Result<ThemeConfig> {
    let candidate = read_candidate(path)?;
    validator
        .validate(&candidate)
        .with_context(|| format!("{} was rejected", path.display()))
}

/// Print the canonical default config
pub fn defaults() -> Result<String> {
    Ok(serde_json::to_string_pretty(ThemeEngine::new().config())?)
}

/// Validate a config file and return its normalized form
pub fn validate(config: &EngineConfig, path: &Path) -> Result<String> {
    let validator = SchemaValidator::from_config(config);
    let normalized = validate_file(&validator, path)?;
    tracing::info!("{} is a valid theme config", path.display());
    Ok(serde_json::to_string_pretty(&normalized)?)
}

/// List built-in presets
pub fn presets(json: bool) -> Result<String> {
    let presets = builtin_presets(SystemClock.now());
    if json {
        return Ok(serde_json::to_string_pretty(&presets)?);
    }
    let lines: Vec<String> = presets
        .iter()
        .map(|p| {
            format!(
                "{:<8} primary={} neutral={} radius={} font={}",
                p.name, p.config.colors.primary, p.config.neutral, p.config.radius, p.config.font
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// List top-level fields that differ between two config files
pub fn diff(config: &EngineConfig, a: &Path, b: &Path) -> Result<String> {
    let validator = SchemaValidator::from_config(config);
    let left = validate_file(&validator, a)?;
    let right = validate_file(&validator, b)?;

    let fields = left.diff(&right);
    if fields.is_empty() {
        return Ok("identical".to_string());
    }
    Ok(fields.join("\n"))
}
