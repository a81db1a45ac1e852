//! Fixed-key role maps
//!
//! Each map is a plain struct with one field per role, so a map can never
//! be missing a key.

use super::keys::{BackgroundRole, BorderRole, SemanticRole, TextRole};
use super::palette::Shade;
use serde::{Deserialize, Serialize};

/// One value per semantic role
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticMap<T> {
    pub primary: T,
    pub secondary: T,
    pub success: T,
    pub info: T,
    pub warning: T,
    pub error: T,
}

impl<T> SemanticMap<T> {
    /// Get a value by role
    pub fn get(&self, role: SemanticRole) -> &T {
        match role {
            SemanticRole::Primary => &self.primary,
            SemanticRole::Secondary => &self.secondary,
            SemanticRole::Success => &self.success,
            SemanticRole::Info => &self.info,
            SemanticRole::Warning => &self.warning,
            SemanticRole::Error => &self.error,
        }
    }

    /// Replace the value for a role
    pub fn set(&mut self, role: SemanticRole, value: T) {
        match role {
            SemanticRole::Primary => self.primary = value,
            SemanticRole::Secondary => self.secondary = value,
            SemanticRole::Success => self.success = value,
            SemanticRole::Info => self.info = value,
            SemanticRole::Warning => self.warning = value,
            SemanticRole::Error => self.error = value,
        }
    }

    /// Iterate `(role, value)` pairs in role order
    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, &T)> {
        SemanticRole::all().iter().map(move |role| (*role, self.get(*role)))
    }
}

impl<T: Clone> SemanticMap<T> {
    /// A map with every role set to `value`
    pub fn splat(value: T) -> Self {
        Self {
            primary: value.clone(),
            secondary: value.clone(),
            success: value.clone(),
            info: value.clone(),
            warning: value.clone(),
            error: value,
        }
    }
}

/// Text color overrides
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOverrides {
    pub dimmed: Shade,
    pub muted: Shade,
    pub toned: Shade,
    pub default: Shade,
    pub highlighted: Shade,
    pub inverted: Shade,
}

impl TextOverrides {
    pub fn get(&self, role: TextRole) -> Shade {
        match role {
            TextRole::Dimmed => self.dimmed,
            TextRole::Muted => self.muted,
            TextRole::Toned => self.toned,
            TextRole::Default => self.default,
            TextRole::Highlighted => self.highlighted,
            TextRole::Inverted => self.inverted,
        }
    }

    pub fn set(&mut self, role: TextRole, shade: Shade) {
        match role {
            TextRole::Dimmed => self.dimmed = shade,
            TextRole::Muted => self.muted = shade,
            TextRole::Toned => self.toned = shade,
            TextRole::Default => self.default = shade,
            TextRole::Highlighted => self.highlighted = shade,
            TextRole::Inverted => self.inverted = shade,
        }
    }
}

/// Background color overrides
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundOverrides {
    pub default: Shade,
    pub muted: Shade,
    pub elevated: Shade,
    pub accented: Shade,
    pub inverted: Shade,
}

impl BackgroundOverrides {
    pub fn get(&self, role: BackgroundRole) -> Shade {
        match role {
            BackgroundRole::Default => self.default,
            BackgroundRole::Muted => self.muted,
            BackgroundRole::Elevated => self.elevated,
            BackgroundRole::Accented => self.accented,
            BackgroundRole::Inverted => self.inverted,
        }
    }

    pub fn set(&mut self, role: BackgroundRole, shade: Shade) {
        match role {
            BackgroundRole::Default => self.default = shade,
            BackgroundRole::Muted => self.muted = shade,
            BackgroundRole::Elevated => self.elevated = shade,
            BackgroundRole::Accented => self.accented = shade,
            BackgroundRole::Inverted => self.inverted = shade,
        }
    }
}

/// Border color overrides
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderOverrides {
    pub default: Shade,
    pub muted: Shade,
    pub accented: Shade,
    pub inverted: Shade,
}

impl BorderOverrides {
    pub fn get(&self, role: BorderRole) -> Shade {
        match role {
            BorderRole::Default => self.default,
            BorderRole::Muted => self.muted,
            BorderRole::Accented => self.accented,
            BorderRole::Inverted => self.inverted,
        }
    }

    pub fn set(&mut self, role: BorderRole, shade: Shade) {
        match role {
            BorderRole::Default => self.default = shade,
            BorderRole::Muted => self.muted = shade,
            BorderRole::Accented => self.accented = shade,
            BorderRole::Inverted => self.inverted = shade,
        }
    }
}

/// The three override sub-maps for one mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOverrides {
    pub text: TextOverrides,
    pub background: BackgroundOverrides,
    pub border: BorderOverrides,
}
