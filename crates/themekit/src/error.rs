//! Error types

use crate::model::{Mode, SemanticRole};
use thiserror::Error;

/// Why a candidate config was refused
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("theme config must be an object")]
    NotAnObject,

    /// Missing key, wrong type, or an id outside its closed set
    #[error("invalid theme config: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("{mode} radius {value} is outside [{min}, {max}]")]
    RadiusOutOfBounds {
        mode: Mode,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{mode} font is empty")]
    EmptyFont { mode: Mode },

    #[error("{mode} font '{font}' is not available")]
    UnknownFont { mode: Mode, font: String },

    #[error("{mode} shade for {role} must be a palette tone, got '{shade}'")]
    ShadeNotTone {
        mode: Mode,
        role: SemanticRole,
        shade: String,
    },
}

/// Why a preset rename was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    #[error("preset name cannot be empty")]
    EmptyName,

    #[error("a preset named '{0}' already exists")]
    NameTaken(String),

    #[error("preset '{0}' not found")]
    NotFound(String),
}

/// Engine and configuration errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("preset '{0}' not found")]
    PresetNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("engine config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("engine config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
