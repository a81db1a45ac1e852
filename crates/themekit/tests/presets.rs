//! Integration tests for presets and unsaved-change tracking

use chrono::{DateTime, Duration, Utc};
use themekit::{
    EngineConfig, Mode, NeutralPalette, Palette, RenameError, SemanticRole, StepClock,
    ThemeConfig, ThemeEngine, ThemeError, ThemePreset,
};

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn engine() -> ThemeEngine {
    ThemeEngine::new().with_clock(StepClock::new(start(), Duration::seconds(1)))
}

#[test]
fn save_then_edit_marks_unsaved_changes() {
    let mut engine = engine();
    assert!(!engine.has_unsaved_changes());

    engine.save_preset("Test");
    assert_eq!(engine.active_preset(), Some("Test"));
    assert!(!engine.has_unsaved_changes());

    engine.set_color_for_mode(Mode::Light, SemanticRole::Primary, Palette::Rose);
    assert!(engine.has_unsaved_changes());
}

#[test]
fn visual_edit_also_marks_unsaved_changes() {
    let mut engine = engine();
    engine.save_preset("Test");
    engine.set_radius_visual_for_mode(Mode::Dark, 0.6);
    assert!(engine.has_unsaved_changes());
}

#[test]
fn resave_preserves_created_at_and_advances_updated_at() {
    let mut engine = engine();
    engine.save_preset("Test");
    let first = engine.preset("Test").unwrap().clone();
    assert_eq!(first.created_at, first.updated_at);

    engine.set_neutral_for_mode(Mode::Light, NeutralPalette::Gray);
    assert!(engine.has_unsaved_changes());
    engine.save_preset("Test");

    let second = engine.preset("Test").unwrap();
    assert!(!engine.has_unsaved_changes());
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.config.neutral, NeutralPalette::Gray);
    assert_eq!(engine.presets().len(), 1);
}

#[test]
fn saved_preset_is_independent_of_live_state() {
    let mut engine = engine();
    engine.save_preset("Snap");
    engine.set_font_visual_for_mode(Mode::Light, "Geist");
    assert_eq!(engine.preset("Snap").unwrap().config, ThemeConfig::default());
}

#[test]
fn duplicate_names_copies() {
    let mut engine = engine();
    engine.save_preset("Original");

    assert_eq!(engine.duplicate_preset("Original").unwrap(), "Copy of Original");
    assert_eq!(
        engine.duplicate_preset("Original").unwrap(),
        "Copy of Original (2)"
    );
    assert_eq!(
        engine.duplicate_preset("Original").unwrap(),
        "Copy of Original (3)"
    );

    let original = engine.preset("Original").unwrap();
    let copy = engine.preset("Copy of Original").unwrap();
    assert_eq!(copy.config, original.config);
    assert!(copy.created_at > original.created_at);
    assert_eq!(engine.active_preset(), Some("Original"));
}

#[test]
fn duplicate_of_unknown_preset_is_an_error() {
    let mut engine = engine();
    let err = engine.duplicate_preset("Nope").unwrap_err();
    assert!(matches!(err, ThemeError::PresetNotFound(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn rename_failures_are_reported() {
    let mut engine = engine();
    engine.save_preset("A");
    engine.save_preset("B");

    let missing = engine.rename_preset("Missing", "C").unwrap_err();
    assert_eq!(missing, RenameError::NotFound("Missing".into()));
    assert!(missing.to_string().contains("not found"));

    let taken = engine.rename_preset("A", "B").unwrap_err();
    assert_eq!(taken, RenameError::NameTaken("B".into()));

    assert_eq!(engine.rename_preset("A", "  "), Err(RenameError::EmptyName));
    assert!(engine.preset("A").is_some());
}

#[test]
fn renaming_active_preset_updates_active_name() {
    let mut engine = engine();
    engine.save_preset("Draft");
    let created = engine.preset("Draft").unwrap().created_at;

    assert_eq!(engine.rename_preset("Draft", "  Final  ").unwrap(), "Final");
    assert_eq!(engine.active_preset(), Some("Final"));
    assert!(!engine.has_unsaved_changes());
    assert_eq!(engine.preset("Final").unwrap().created_at, created);
    assert!(engine.preset("Draft").is_none());
}

#[test]
fn renaming_inactive_preset_keeps_active_name() {
    let mut engine = engine();
    engine.save_preset("Other");
    engine.save_preset("Active");
    engine.rename_preset("Other", "Renamed").unwrap();
    assert_eq!(engine.active_preset(), Some("Active"));
}

#[test]
fn deleting_active_preset_clears_active() {
    let mut engine = engine();
    engine.save_preset("Keep");
    engine.save_preset("Gone");

    assert!(engine.delete_preset("Keep"));
    assert_eq!(engine.active_preset(), Some("Gone"));

    assert!(engine.delete_preset("Gone"));
    assert_eq!(engine.active_preset(), None);
    assert!(!engine.has_unsaved_changes());
    assert!(!engine.delete_preset("Gone"));
}

#[test]
fn load_preset_commits_and_sets_base() {
    let mut engine = engine();
    engine.set_neutral_for_mode(Mode::Dark, NeutralPalette::Zinc);
    engine.save_preset("Zinc");
    engine.reset_to_defaults();

    assert!(engine.load_preset("Zinc"));
    assert_eq!(engine.active_preset(), Some("Zinc"));
    assert_eq!(engine.config().dark_neutral, NeutralPalette::Zinc);
    assert!(!engine.has_unsaved_changes());

    engine.set_radius_for_mode(Mode::Light, 0.5);
    engine.set_radius_for_mode(Mode::Light, 0.75);
    assert!(engine.undo_all());
    assert_eq!(engine.config().dark_neutral, NeutralPalette::Zinc);
    assert_eq!(engine.config().radius, ThemeConfig::default().radius);

    // The load itself is undoable
    assert!(engine.undo());
    assert_eq!(engine.config(), &ThemeConfig::default());
}

#[test]
fn loaded_config_is_independent_of_stored_preset() {
    let mut engine = engine();
    engine.save_preset("P");
    engine.load_preset("P");
    engine.set_font_visual_for_mode(Mode::Dark, "Inter");
    assert_eq!(engine.preset("P").unwrap().config.dark_font, ThemeConfig::default().dark_font);
}

#[test]
fn load_of_unknown_or_invalid_preset_is_skipped() {
    let mut engine = engine();
    engine.set_radius_for_mode(Mode::Light, 0.5);
    let before = engine.config().clone();
    let len = engine.history().len();

    assert!(!engine.load_preset("Nope"));

    let mut broken = ThemePreset::new("Broken", ThemeConfig::default(), start());
    broken.config.dark_radius = 42.0;
    assert!(!engine.load_preset_direct(&broken));

    assert_eq!(engine.config(), &before);
    assert_eq!(engine.history().len(), len);
    assert_eq!(engine.active_preset(), None);
}

#[test]
fn load_preset_direct_sets_active_name() {
    let mut engine = engine();
    let mut config = ThemeConfig::default();
    config.colors.warning = Palette::Amber;
    let preset = ThemePreset::new("Shared", config.clone(), start());

    assert!(engine.load_preset_direct(&preset));
    assert_eq!(engine.config(), &config);
    assert_eq!(engine.active_preset(), Some("Shared"));
    assert!(engine.can_undo());
}

#[test]
fn restore_presets_skips_invalid_and_duplicates() {
    let mut engine = engine();
    engine.save_preset("Existing");

    let good = ThemePreset::new("Good", ThemeConfig::default(), start());
    let mut bad = ThemePreset::new("Bad", ThemeConfig::default(), start());
    bad.config.font = String::new();
    let clash = ThemePreset::new("Existing", ThemeConfig::default(), start());

    assert_eq!(engine.restore_presets(vec![good, bad, clash]), 1);
    let names: Vec<&str> = engine.presets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Existing", "Good"]);
}

#[test]
fn builtin_presets_are_protected() {
    let mut engine = ThemeEngine::with_config(EngineConfig {
        builtin_presets: true,
        ..EngineConfig::default()
    });
    let name = engine.presets()[0].name.clone();

    assert!(engine.load_preset(&name));
    assert!(!engine.delete_preset(&name));
    assert!(engine.preset(&name).is_some());
    assert_eq!(engine.active_preset(), Some(name.as_str()));
}
