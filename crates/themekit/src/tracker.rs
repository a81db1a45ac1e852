//! Active preset tracking and dirty state

use crate::model::ThemeConfig;
use crate::presets::PresetRepository;

/// Remembers which preset was last saved or loaded.
///
/// Only the name is stored. Whether live state has diverged is computed on
/// demand from the live config and the repository, so it cannot drift.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivePresetTracker {
    active: Option<String>,
}

impl ActivePresetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    pub fn set(&mut self, name: impl Into<String>) {
        self.active = Some(name.into());
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Clear only if `name` is the active preset
    pub fn clear_if(&mut self, name: &str) -> bool {
        if self.is_active(name) {
            self.active = None;
            return true;
        }
        false
    }

    /// Follow a rename of the active preset
    pub fn renamed(&mut self, old_name: &str, new_name: &str) {
        if self.is_active(old_name) {
            self.active = Some(new_name.to_string());
        }
    }

    /// True iff a preset is active and `live` differs from its stored config.
    pub fn has_unsaved_changes(&self, live: &ThemeConfig, presets: &PresetRepository) -> bool {
        let Some(name) = self.name() else {
            return false;
        };
        match presets.get(name) {
            Some(preset) => preset.config != *live,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn nothing_active_is_never_dirty() {
        let tracker = ActivePresetTracker::new();
        let mut live = ThemeConfig::default();
        live.radius = 0.9;
        assert!(!tracker.has_unsaved_changes(&live, &PresetRepository::new()));
    }

    #[test]
    fn dirty_iff_live_differs_from_active_preset() {
        let mut repo = PresetRepository::new();
        let mut live = ThemeConfig::default();
        repo.save("A", live.snapshot(), Utc::now());

        let mut tracker = ActivePresetTracker::new();
        tracker.set("A");
        assert!(!tracker.has_unsaved_changes(&live, &repo));

        live.dark_font = "Inter".into();
        assert!(tracker.has_unsaved_changes(&live, &repo));
    }

    #[test]
    fn clear_if_and_renamed_only_touch_active_name() {
        let mut tracker = ActivePresetTracker::new();
        tracker.set("A");

        assert!(!tracker.clear_if("B"));
        tracker.renamed("B", "C");
        assert_eq!(tracker.name(), Some("A"));

        tracker.renamed("A", "Alpha");
        assert_eq!(tracker.name(), Some("Alpha"));
        assert!(tracker.clear_if("Alpha"));
        assert_eq!(tracker.name(), None);
    }
}
