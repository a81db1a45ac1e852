//! Closed key sets for addressing theme fields

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Light or dark mode. Every color, radius, font and override field exists
/// once per mode.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Both modes, light first.
    pub fn all() -> &'static [Mode] {
        const MODES: [Mode; 2] = [Mode::Light, Mode::Dark];
        &MODES
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggle(self) -> Mode {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// The six semantic color purposes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticRole {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Error,
}

impl SemanticRole {
    pub fn all() -> &'static [SemanticRole] {
        const ROLES: [SemanticRole; 6] = [
            SemanticRole::Primary,
            SemanticRole::Secondary,
            SemanticRole::Success,
            SemanticRole::Info,
            SemanticRole::Warning,
            SemanticRole::Error,
        ];
        &ROLES
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl Display for SemanticRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Which of the three override sub-maps a role belongs to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OverrideCategory {
    Text,
    Background,
    Border,
}

impl OverrideCategory {
    pub fn id(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Background => "background",
            Self::Border => "border",
        }
    }
}

/// Text color override keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Dimmed,
    Muted,
    Toned,
    Default,
    Highlighted,
    Inverted,
}

impl TextRole {
    pub fn all() -> &'static [TextRole] {
        const ROLES: [TextRole; 6] = [
            TextRole::Dimmed,
            TextRole::Muted,
            TextRole::Toned,
            TextRole::Default,
            TextRole::Highlighted,
            TextRole::Inverted,
        ];
        &ROLES
    }
}

/// Background color override keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundRole {
    Default,
    Muted,
    Elevated,
    Accented,
    Inverted,
}

impl BackgroundRole {
    pub fn all() -> &'static [BackgroundRole] {
        const ROLES: [BackgroundRole; 5] = [
            BackgroundRole::Default,
            BackgroundRole::Muted,
            BackgroundRole::Elevated,
            BackgroundRole::Accented,
            BackgroundRole::Inverted,
        ];
        &ROLES
    }
}

/// Border color override keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderRole {
    Default,
    Muted,
    Accented,
    Inverted,
}

impl BorderRole {
    pub fn all() -> &'static [BorderRole] {
        const ROLES: [BorderRole; 4] = [
            BorderRole::Default,
            BorderRole::Muted,
            BorderRole::Accented,
            BorderRole::Inverted,
        ];
        &ROLES
    }
}
