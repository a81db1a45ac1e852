//! Themekit Engine
//!
//! State management for a visual theme editor: a dual-mode theme config,
//! bounded undo/redo, and named presets with dirty tracking.
//!
//! # Overview
//!
//! - **Model**: [`ThemeConfig`] holds semantic colors, shades, neutral,
//!   radius, font and text/background/border overrides, once per [`Mode`].
//! - **Validation**: every config entering live state or a preset passes a
//!   [`ConfigValidator`], which also fills omitted dark-mode fields.
//! - **History**: [`HistoryLog`] is a bounded (50 by default), linear,
//!   branch-truncating undo/redo log with a base checkpoint for "undo all".
//! - **Engine**: [`ThemeEngine`] is the only writer of live state.
//! - **Presets**: [`PresetRepository`] plus [`ActivePresetTracker`] for
//!   "unsaved changes".
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use themekit::{Mode, SemanticRole, Palette, ThemeEngine};
//!
//! let mut engine = ThemeEngine::new();
//! engine.set_color_for_mode(Mode::Dark, SemanticRole::Primary, Palette::Violet);
//! engine.save_preset("Night");
//!
//! engine.set_radius_for_mode(Mode::Dark, 0.5);
//! assert!(engine.has_unsaved_changes());
//!
//! engine.undo();
//! assert!(!engine.has_unsaved_changes());
//! ```
//!
//! # Visual vs committing edits
//!
//! Each field has a committing setter (`set_radius_for_mode`) and a
//! visual-only one (`set_radius_visual_for_mode`). Drag handlers call the
//! visual variant on every tick and the committing variant once on release,
//! so a drag produces one history entry. Any debounce policy lives in the
//! caller.
//!
//! The engine does no I/O. Persistence, export and rendering read
//! [`ThemeEngine::config`] and [`ThemeEngine::presets`] and feed data back
//! through [`ThemeEngine::load_config`], [`ThemeEngine::from_persisted`] and
//! [`ThemeEngine::restore_presets`].

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod model;
pub mod presets;
pub mod tracker;
pub mod validate;

// Re-export commonly used types
pub use clock::{Clock, StepClock, SystemClock};
pub use config::{EngineConfig, RadiusBounds};
pub use engine::ThemeEngine;
pub use error::{RenameError, Result, ThemeError, ValidationError};
pub use history::{HistoryConfig, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use model::*;
pub use presets::{builtin_presets, PresetRepository, ThemePreset};
pub use tracker::ActivePresetTracker;
pub use validate::{ConfigValidator, SchemaValidator};
