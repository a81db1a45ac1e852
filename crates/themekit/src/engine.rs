//! Live theme state and its mutation entry points
//!
//! [`ThemeEngine`] is the only thing that writes the live [`ThemeConfig`].
//! Every addressable field has two setters:
//!
//! - `set_*_for_mode`: apply the change, then commit a snapshot to history.
//! - `set_*_visual_for_mode`: apply the change without touching history.
//!   Meant for continuous input such as slider drags; the caller issues the
//!   committing setter (or [`commit_visual`](ThemeEngine::commit_visual))
//!   once the interaction settles.
//!
//! The engine also owns the preset repository and the active-preset
//! tracker, since loading a preset writes live state.
//!
//! ```rust,ignore
//! let mut engine = ThemeEngine::new();
//! engine.set_radius_visual_for_mode(Mode::Light, 0.3);
//! engine.set_radius_visual_for_mode(Mode::Light, 0.4);
//! engine.set_radius_for_mode(Mode::Light, 0.5); // one history entry
//! engine.undo();
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::error::{RenameError, ThemeError, ValidationError};
use crate::history::HistoryLog;
use crate::model::{
    BackgroundRole, BorderRole, Mode, NeutralPalette, OverrideCategory, Palette, SemanticRole,
    Shade, TextRole, ThemeConfig,
};
use crate::presets::{PresetRepository, ThemePreset};
use crate::tracker::ActivePresetTracker;
use crate::validate::{ConfigValidator, SchemaValidator};
use serde_json::Value;
use std::fmt;
use tracing::{debug, trace, warn};

/// Owned theme state container: live config, history, presets.
pub struct ThemeEngine {
    live: ThemeConfig,
    history: HistoryLog<ThemeConfig>,
    presets: PresetRepository,
    active: ActivePresetTracker,
    validator: Box<dyn ConfigValidator>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("live", &self.live)
            .field("history", &self.history)
            .field("presets", &self.presets.len())
            .field("active", &self.active.name())
            .finish()
    }
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeEngine {
    /// Engine at the canonical defaults with default settings
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let clock = SystemClock;
        let presets = if config.builtin_presets {
            PresetRepository::with_builtins(clock.now())
        } else {
            PresetRepository::new()
        };
        let live = ThemeConfig::default();

        Self {
            history: HistoryLog::new(live.snapshot(), config.history),
            live,
            presets,
            active: ActivePresetTracker::new(),
            validator: Box::new(SchemaValidator::from_config(&config)),
            clock: Box::new(clock),
        }
    }

    /// Start from previously persisted state.
    ///
    /// A rejected candidate falls back to the canonical defaults. Either
    /// way history is seeded with the starting config.
    pub fn from_persisted(config: EngineConfig, candidate: &Value) -> Self {
        let mut engine = Self::with_config(config);
        match engine.validator.validate(candidate) {
            Ok(restored) => {
                engine.history.reset(restored.snapshot());
                engine.live = restored;
            }
            Err(err) => warn!("ThemeEngine::from_persisted - falling back to defaults: {err}"),
        }
        engine
    }

    /// Replace the validator used for all incoming configs.
    ///
    /// Radius clamping and font checks in the setters follow the new
    /// validator from here on, so edits made through them always pass it.
    pub fn with_validator(mut self, validator: impl ConfigValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Replace the time source used for preset timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ========== Read Access ==========

    /// The live config
    pub fn config(&self) -> &ThemeConfig {
        &self.live
    }

    pub fn history(&self) -> &HistoryLog<ThemeConfig> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn can_undo_all(&self) -> bool {
        self.history.can_undo_all()
    }

    // ========== Semantic Colors ==========

    pub fn set_color_for_mode(&mut self, mode: Mode, role: SemanticRole, palette: Palette) {
        self.live.colors_mut(mode).set(role, palette);
        self.commit(mode, "color");
    }

    pub fn set_color_visual_for_mode(&mut self, mode: Mode, role: SemanticRole, palette: Palette) {
        self.live.colors_mut(mode).set(role, palette);
        trace!("ThemeEngine - visual {mode} color {role} = {palette}");
    }

    /// Returns false and changes nothing unless `shade` is a palette tone
    pub fn set_color_shade_for_mode(
        &mut self,
        mode: Mode,
        role: SemanticRole,
        shade: Shade,
    ) -> bool {
        if !self.check_tone(role, shade) {
            return false;
        }
        self.live.color_shades_mut(mode).set(role, shade);
        self.commit(mode, "color shade");
        true
    }

    pub fn set_color_shade_visual_for_mode(
        &mut self,
        mode: Mode,
        role: SemanticRole,
        shade: Shade,
    ) -> bool {
        if !self.check_tone(role, shade) {
            return false;
        }
        self.live.color_shades_mut(mode).set(role, shade);
        trace!("ThemeEngine - visual {mode} color shade {role} = {shade}");
        true
    }

    fn check_tone(&self, role: SemanticRole, shade: Shade) -> bool {
        if !shade.is_tone() {
            warn!("ThemeEngine - {shade} is not a tone, {role} shade unchanged");
        }
        shade.is_tone()
    }

    // ========== Neutral ==========

    pub fn set_neutral_for_mode(&mut self, mode: Mode, neutral: NeutralPalette) {
        *self.live.neutral_mut(mode) = neutral;
        self.commit(mode, "neutral");
    }

    pub fn set_neutral_visual_for_mode(&mut self, mode: Mode, neutral: NeutralPalette) {
        *self.live.neutral_mut(mode) = neutral;
        trace!("ThemeEngine - visual {mode} neutral = {neutral}");
    }

    // ========== Radius ==========

    /// Set the radius, clamped into the validator's bounds
    pub fn set_radius_for_mode(&mut self, mode: Mode, radius: f64) {
        *self.live.radius_mut(mode) = self.validator.radius_bounds().clamp(radius);
        self.commit(mode, "radius");
    }

    pub fn set_radius_visual_for_mode(&mut self, mode: Mode, radius: f64) {
        let radius = self.validator.radius_bounds().clamp(radius);
        *self.live.radius_mut(mode) = radius;
        trace!("ThemeEngine - visual {mode} radius = {radius}");
    }

    // ========== Font ==========

    /// Returns false and changes nothing if the validator would reject
    /// `font` (blank, or not in the configured font list).
    pub fn set_font_for_mode(&mut self, mode: Mode, font: impl Into<String>) -> bool {
        let font = font.into();
        if !self.check_font(mode, &font) {
            return false;
        }
        *self.live.font_mut(mode) = font;
        self.commit(mode, "font");
        true
    }

    pub fn set_font_visual_for_mode(&mut self, mode: Mode, font: impl Into<String>) -> bool {
        let font = font.into();
        if !self.check_font(mode, &font) {
            return false;
        }
        *self.live.font_mut(mode) = font;
        trace!("ThemeEngine - visual {mode} font = {}", self.live.font(mode));
        true
    }

    fn check_font(&self, mode: Mode, font: &str) -> bool {
        let accepted = self.validator.accepts_font(font);
        if !accepted {
            warn!("ThemeEngine - font '{font}' refused, {mode} font unchanged");
        }
        accepted
    }

    // ========== Overrides ==========

    pub fn set_text_override_for_mode(&mut self, mode: Mode, role: TextRole, shade: Shade) {
        self.live.overrides_mut(mode).text.set(role, shade);
        self.commit(mode, OverrideCategory::Text.id());
    }

    pub fn set_text_override_visual_for_mode(&mut self, mode: Mode, role: TextRole, shade: Shade) {
        self.live.overrides_mut(mode).text.set(role, shade);
        trace!("ThemeEngine - visual {mode} text {role:?} = {shade}");
    }

    pub fn set_background_override_for_mode(
        &mut self,
        mode: Mode,
        role: BackgroundRole,
        shade: Shade,
    ) {
        self.live.overrides_mut(mode).background.set(role, shade);
        self.commit(mode, OverrideCategory::Background.id());
    }

    pub fn set_background_override_visual_for_mode(
        &mut self,
        mode: Mode,
        role: BackgroundRole,
        shade: Shade,
    ) {
        self.live.overrides_mut(mode).background.set(role, shade);
        trace!("ThemeEngine - visual {mode} background {role:?} = {shade}");
    }

    pub fn set_border_override_for_mode(&mut self, mode: Mode, role: BorderRole, shade: Shade) {
        self.live.overrides_mut(mode).border.set(role, shade);
        self.commit(mode, OverrideCategory::Border.id());
    }

    pub fn set_border_override_visual_for_mode(
        &mut self,
        mode: Mode,
        role: BorderRole,
        shade: Shade,
    ) {
        self.live.overrides_mut(mode).border.set(role, shade);
        trace!("ThemeEngine - visual {mode} border {role:?} = {shade}");
    }

    /// Commit whatever visual-only edits are pending as a single entry.
    ///
    /// Returns false (and commits nothing) if live state already matches the
    /// current history entry.
    pub fn commit_visual(&mut self) -> bool {
        if *self.history.current() == self.live {
            return false;
        }
        self.history.commit(self.live.snapshot());
        debug!(
            "ThemeEngine::commit_visual - history at {}/{}",
            self.history.index(),
            self.history.len()
        );
        true
    }

    fn commit(&mut self, mode: Mode, field: &str) {
        self.history.commit(self.live.snapshot());
        debug!(
            "ThemeEngine - {mode} {field} committed, history at {}/{}",
            self.history.index(),
            self.history.len()
        );
    }

    // ========== Whole-config Operations ==========

    /// Mirror another live surface: replace the live config without
    /// recording history. Rejected configs leave state untouched.
    pub fn sync_config(&mut self, config: &ThemeConfig) -> bool {
        match self.validator.validate_config(config) {
            Ok(valid) => {
                self.live = valid;
                trace!("ThemeEngine::sync_config - live config replaced");
                true
            }
            Err(err) => {
                warn!("ThemeEngine::sync_config - rejected: {err}");
                false
            }
        }
    }

    /// Validate `candidate` and, if accepted, make it the live config as a
    /// committing mutation. On rejection nothing changes.
    pub fn load_config(&mut self, candidate: &Value) -> Result<(), ValidationError> {
        let config = self.validator.validate(candidate).map_err(|err| {
            warn!("ThemeEngine::load_config - rejected: {err}");
            err
        })?;
        self.live = config;
        self.history.commit(self.live.snapshot());
        debug!("ThemeEngine::load_config - loaded");
        Ok(())
    }

    /// Back to the canonical defaults. Undoable; clears the active preset.
    pub fn reset_to_defaults(&mut self) {
        self.live = ThemeConfig::default();
        self.active.clear();
        self.history.commit(self.live.snapshot());
        debug!("ThemeEngine::reset_to_defaults");
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(entry) => {
                self.live = entry.snapshot();
                debug!("ThemeEngine::undo - now at {}", self.history.index());
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                self.live = entry.snapshot();
                debug!("ThemeEngine::redo - now at {}", self.history.index());
                true
            }
            None => false,
        }
    }

    /// Jump back to the history base (the start, or the last loaded preset)
    pub fn undo_all(&mut self) -> bool {
        match self.history.undo_all() {
            Some(entry) => {
                self.live = entry.snapshot();
                debug!("ThemeEngine::undo_all - now at {}", self.history.index());
                true
            }
            None => false,
        }
    }

    // ========== Presets ==========

    pub fn presets(&self) -> &[ThemePreset] {
        self.presets.list()
    }

    pub fn preset(&self, name: &str) -> Option<&ThemePreset> {
        self.presets.get(name)
    }

    /// Name of the last saved or loaded preset
    pub fn active_preset(&self) -> Option<&str> {
        self.active.name()
    }

    /// Whether live state differs from the active preset
    pub fn has_unsaved_changes(&self) -> bool {
        self.active.has_unsaved_changes(&self.live, &self.presets)
    }

    /// Save the live config under `name`, overwriting an existing preset of
    /// that name, and make it active.
    ///
    /// Returns false and stores nothing if the live config does not pass the
    /// validator, so every stored preset can be loaded back.
    pub fn save_preset(&mut self, name: &str) -> bool {
        let config = match self.validator.validate_config(&self.live) {
            Ok(config) => config,
            Err(err) => {
                warn!("ThemeEngine::save_preset - '{}' rejected: {err}", name);
                return false;
            }
        };
        let now = self.clock.now();
        self.presets.save(name, config, now);
        self.active.set(name);
        true
    }

    /// Delete a preset. Returns false for unknown or built-in presets.
    pub fn delete_preset(&mut self, name: &str) -> bool {
        if !self.presets.delete(name) {
            return false;
        }
        if self.active.clear_if(name) {
            debug!("ThemeEngine::delete_preset - '{}' was active", name);
        }
        true
    }

    /// Load a stored preset into live state as a committing mutation.
    ///
    /// Silently skipped (returns false) if the name is unknown or the stored
    /// config no longer validates.
    pub fn load_preset(&mut self, name: &str) -> bool {
        let Some(preset) = self.presets.get(name) else {
            warn!("ThemeEngine::load_preset - '{}' does not exist", name);
            return false;
        };
        match self.validator.validate_config(&preset.config) {
            Ok(config) => {
                self.apply_preset(name, config);
                true
            }
            Err(err) => {
                warn!("ThemeEngine::load_preset - '{}' rejected: {err}", name);
                false
            }
        }
    }

    /// Load a preset value that may not be in the repository.
    pub fn load_preset_direct(&mut self, preset: &ThemePreset) -> bool {
        match self.validator.validate_config(&preset.config) {
            Ok(config) => {
                self.apply_preset(&preset.name, config);
                true
            }
            Err(err) => {
                warn!(
                    "ThemeEngine::load_preset_direct - '{}' rejected: {err}",
                    preset.name
                );
                false
            }
        }
    }

    fn apply_preset(&mut self, name: &str, config: ThemeConfig) {
        self.live = config;
        self.history.commit(self.live.snapshot());
        self.history.mark_base();
        self.active.set(name);
        debug!("ThemeEngine - preset '{}' loaded", name);
    }

    /// Copy a preset under a fresh "Copy of ..." name and return that name.
    ///
    /// `name` must come from this engine's own preset list; an unknown name
    /// is an error.
    pub fn duplicate_preset(&mut self, name: &str) -> Result<String, ThemeError> {
        let now = self.clock.now();
        self.presets.duplicate(name, now)
    }

    /// Rename a preset. The active name follows the rename.
    pub fn rename_preset(&mut self, old_name: &str, new_name: &str) -> Result<String, RenameError> {
        let renamed = self.presets.rename(old_name, new_name)?;
        self.active.renamed(old_name, &renamed);
        Ok(renamed)
    }

    /// Admit presets read back from storage. Presets whose config fails
    /// validation or whose name is already taken are skipped. Returns the
    /// number admitted.
    pub fn restore_presets(&mut self, presets: Vec<ThemePreset>) -> usize {
        let mut admitted = 0;
        for mut preset in presets {
            match self.validator.validate_config(&preset.config) {
                Ok(config) => {
                    preset.config = config;
                    let name = preset.name.clone();
                    if self.presets.insert(preset) {
                        admitted += 1;
                    } else {
                        warn!("ThemeEngine::restore_presets - '{}' already exists", name);
                    }
                }
                Err(err) => {
                    warn!("ThemeEngine::restore_presets - '{}' rejected: {err}", preset.name);
                }
            }
        }
        debug!("ThemeEngine::restore_presets - admitted {}", admitted);
        admitted
    }
}
