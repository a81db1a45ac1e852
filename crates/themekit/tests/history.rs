//! Property tests for HistoryLog and engine history invariants.
//!
//! Validates:
//! - Length never exceeds the configured capacity.
//! - N commits followed by N undos (N below capacity) restore the start.
//! - Redo after undo restores exactly the undone value.
//! - undo_all is idempotent.

use proptest::prelude::*;
use themekit::{HistoryConfig, HistoryLog, Mode, ThemeConfig, ThemeEngine};

#[derive(Debug, Clone)]
enum Op {
    Commit(i64),
    Undo,
    Redo,
    UndoAll,
    MarkBase,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i64>().prop_map(Op::Commit),
        2 => Just(Op::Undo),
        2 => Just(Op::Redo),
        1 => Just(Op::UndoAll),
        1 => Just(Op::MarkBase),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn length_never_exceeds_capacity(
        capacity in 1usize..20,
        ops in prop::collection::vec(op_strategy(), 1..200)
    ) {
        let mut log = HistoryLog::new(0i64, HistoryConfig::new(capacity));
        for op in ops {
            match op {
                Op::Commit(v) => log.commit(v),
                Op::Undo => { log.undo(); }
                Op::Redo => { log.redo(); }
                Op::UndoAll => { log.undo_all(); }
                Op::MarkBase => log.mark_base(),
            }
            prop_assert!(log.len() <= capacity);
            prop_assert!(log.index() < log.len());
            prop_assert!(log.base_index() < log.len());
        }
    }

    #[test]
    fn n_commits_then_n_undos_restore_start(
        values in prop::collection::vec(any::<i64>(), 1..50)
    ) {
        let mut log = HistoryLog::with_default_config(-1i64);
        for v in &values {
            log.commit(*v);
        }
        for _ in &values {
            prop_assert!(log.undo().is_some());
        }
        prop_assert_eq!(*log.current(), -1);
        prop_assert!(!log.can_undo());
    }

    #[test]
    fn redo_restores_exactly_the_undone_value(
        values in prop::collection::vec(any::<i64>(), 2..40),
        steps in 1usize..10
    ) {
        let mut log = HistoryLog::with_default_config(0i64);
        for v in &values {
            log.commit(*v);
        }
        let steps = steps.min(values.len());
        let mut undone = Vec::new();
        for _ in 0..steps {
            undone.push(*log.current());
            log.undo();
        }
        for expected in undone.into_iter().rev() {
            prop_assert_eq!(log.redo().copied(), Some(expected));
        }
        prop_assert!(!log.can_redo());
    }

    #[test]
    fn undo_all_twice_equals_once(
        ops in prop::collection::vec(op_strategy(), 1..100)
    ) {
        let mut log = HistoryLog::with_default_config(0i64);
        for op in ops {
            match op {
                Op::Commit(v) => log.commit(v),
                Op::Undo => { log.undo(); }
                Op::Redo => { log.redo(); }
                Op::UndoAll => { log.undo_all(); }
                Op::MarkBase => log.mark_base(),
            }
        }
        log.undo_all();
        let (index, value) = (log.index(), *log.current());
        prop_assert!(log.undo_all().is_none());
        prop_assert_eq!(log.index(), index);
        prop_assert_eq!(*log.current(), value);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn engine_radius_edits_undo_to_start(
        radii in prop::collection::vec(0u8..=8, 1..49)
    ) {
        let mut engine = ThemeEngine::new();
        for r in &radii {
            engine.set_radius_for_mode(Mode::Dark, f64::from(*r) / 8.0);
        }
        for _ in &radii {
            prop_assert!(engine.undo());
        }
        prop_assert_eq!(engine.config(), &ThemeConfig::default());
    }
}
