//! Named theme presets
//!
//! A [`PresetRepository`] is an ordered, name-unique list of
//! [`ThemePreset`]s. Each preset owns its own config snapshot; nothing in
//! the repository aliases live state.

mod builtin;

pub use builtin::builtin_presets;

use crate::error::{RenameError, ThemeError};
use crate::model::ThemeConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix used for duplicated preset names
pub const COPY_PREFIX: &str = "Copy of ";

/// A named config snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreset {
    pub name: String,
    pub config: ThemeConfig,
    /// Set once when the preset is first created
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
    /// Seed presets that cannot be deleted
    #[serde(default, skip_serializing_if = "is_false")]
    pub built_in: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ThemePreset {
    pub fn new(name: impl Into<String>, config: ThemeConfig, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            config,
            created_at: now,
            updated_at: now,
            built_in: false,
        }
    }
}

/// Ordered, name-unique collection of presets.
#[derive(Clone, Debug, Default)]
pub struct PresetRepository {
    presets: Vec<ThemePreset>,
}

impl PresetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with the built-in presets
    pub fn with_builtins(now: DateTime<Utc>) -> Self {
        Self {
            presets: builtin_presets(now),
        }
    }

    // ========== Lookup ==========

    /// All presets in insertion order
    pub fn list(&self) -> &[ThemePreset] {
        &self.presets
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ThemePreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.name == name)
    }

    // ========== Mutation ==========

    /// Store `config` under `name`.
    ///
    /// An existing preset keeps its position, `created_at` and built-in flag;
    /// only its config and `updated_at` change. Returns true if a new preset
    /// was inserted.
    pub fn save(&mut self, name: &str, config: ThemeConfig, now: DateTime<Utc>) -> bool {
        match self.position(name) {
            Some(idx) => {
                let preset = &mut self.presets[idx];
                preset.config = config;
                preset.updated_at = now;
                tracing::debug!("PresetRepository::save - updated '{}'", name);
                false
            }
            None => {
                self.presets.push(ThemePreset::new(name, config, now));
                tracing::debug!("PresetRepository::save - created '{}'", name);
                true
            }
        }
    }

    /// Remove a preset. Built-in presets and unknown names are left alone
    /// and return false.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(idx) = self.position(name) else {
            tracing::warn!("PresetRepository::delete - '{}' does not exist", name);
            return false;
        };
        if self.presets[idx].built_in {
            tracing::warn!("PresetRepository::delete - '{}' is built in", name);
            return false;
        }
        self.presets.remove(idx);
        tracing::debug!("PresetRepository::delete - removed '{}'", name);
        true
    }

    /// Copy `name` into a fresh preset and return the new name.
    ///
    /// The copy is named `"Copy of <name>"`, or `"Copy of <name> (n)"` with
    /// the smallest free `n >= 2`. Errors if `name` does not exist.
    pub fn duplicate(&mut self, name: &str, now: DateTime<Utc>) -> Result<String, ThemeError> {
        let source = self
            .get(name)
            .ok_or_else(|| ThemeError::PresetNotFound(name.to_string()))?;
        let config = source.config.snapshot();

        let target = self.copy_name(name);
        self.presets.push(ThemePreset::new(target.clone(), config, now));
        tracing::debug!("PresetRepository::duplicate - '{}' -> '{}'", name, target);
        Ok(target)
    }

    fn copy_name(&self, name: &str) -> String {
        let base = format!("{COPY_PREFIX}{name}");
        if !self.contains(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base} ({n})");
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Rename `old_name` to the trimmed `new_name`, keeping config and
    /// timestamps. Returns the name actually stored.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<String, RenameError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(RenameError::EmptyName);
        }
        let idx = self
            .position(old_name)
            .ok_or_else(|| RenameError::NotFound(old_name.to_string()))?;
        if new_name != old_name && self.contains(new_name) {
            return Err(RenameError::NameTaken(new_name.to_string()));
        }

        self.presets[idx].name = new_name.to_string();
        tracing::debug!("PresetRepository::rename - '{}' -> '{}'", old_name, new_name);
        Ok(new_name.to_string())
    }

    /// Append an already-built preset unless its name is taken.
    pub fn insert(&mut self, preset: ThemePreset) -> bool {
        if self.contains(&preset.name) {
            return false;
        }
        self.presets.push(preset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn save_inserts_then_overwrites_in_place() {
        let mut repo = PresetRepository::new();
        assert!(repo.save("A", ThemeConfig::default(), t(0)));
        assert!(repo.save("B", ThemeConfig::default(), t(1)));

        let mut changed = ThemeConfig::default();
        changed.radius = 0.75;
        assert!(!repo.save("A", changed, t(5)));

        assert_eq!(repo.names().collect::<Vec<_>>(), vec!["A", "B"]);
        let a = repo.get("A").unwrap();
        assert_eq!(a.config.radius, 0.75);
        assert_eq!(a.created_at, t(0));
        assert_eq!(a.updated_at, t(5));
    }

    #[test]
    fn copy_name_uses_smallest_free_suffix() {
        let mut repo = PresetRepository::new();
        repo.save("Original", ThemeConfig::default(), t(0));
        repo.save("Copy of Original", ThemeConfig::default(), t(0));
        repo.save("Copy of Original (3)", ThemeConfig::default(), t(0));

        assert_eq!(repo.duplicate("Original", t(1)).unwrap(), "Copy of Original (2)");
        assert_eq!(repo.duplicate("Original", t(1)).unwrap(), "Copy of Original (4)");
    }

    #[test]
    fn duplicate_of_missing_preset_errors() {
        let mut repo = PresetRepository::new();
        let err = repo.duplicate("Ghost", t(0)).unwrap_err();
        assert!(matches!(err, ThemeError::PresetNotFound(ref n) if n == "Ghost"));
        assert!(repo.is_empty());
    }

    #[test]
    fn rename_validates_and_trims() {
        let mut repo = PresetRepository::new();
        repo.save("A", ThemeConfig::default(), t(0));
        repo.save("B", ThemeConfig::default(), t(0));

        assert_eq!(repo.rename("A", "   "), Err(RenameError::EmptyName));
        assert_eq!(repo.rename("A", " B "), Err(RenameError::NameTaken("B".into())));
        assert_eq!(repo.rename("Z", "C"), Err(RenameError::NotFound("Z".into())));
        assert_eq!(repo.rename("A", "  A  "), Ok("A".to_string()));
        assert_eq!(repo.rename("A", " Alpha "), Ok("Alpha".to_string()));
        assert_eq!(repo.names().collect::<Vec<_>>(), vec!["Alpha", "B"]);
    }

    #[test]
    fn builtins_cannot_be_deleted() {
        let mut repo = PresetRepository::with_builtins(t(0));
        let first = repo.list()[0].name.clone();
        assert!(repo.list()[0].built_in);
        assert!(!repo.delete(&first));
        assert!(repo.contains(&first));
        assert!(!repo.delete("nope"));
    }

    #[test]
    fn saving_over_builtin_keeps_flag() {
        let mut repo = PresetRepository::with_builtins(t(0));
        let name = repo.list()[0].name.clone();
        repo.save(&name, ThemeConfig::default(), t(0) + Duration::hours(1));
        let preset = repo.get(&name).unwrap();
        assert!(preset.built_in);
        assert_eq!(preset.created_at, t(0));
    }

    #[test]
    fn preset_json_shape() {
        let preset = ThemePreset::new("A", ThemeConfig::default(), t(0));
        let value = serde_json::to_value(&preset).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("builtIn").is_none());

        let back: ThemePreset = serde_json::from_value(value).unwrap();
        assert_eq!(back, preset);
    }
}
