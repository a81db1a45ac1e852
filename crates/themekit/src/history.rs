//! Bounded linear undo/redo log.
//!
//! [`HistoryLog`] keeps an ordered list of owned snapshots plus a cursor.
//! Committing while the cursor is not at the end truncates everything after
//! it (the redo branch is lost), and once the log grows past its capacity
//! the oldest entry is evicted.
//!
//! ```text
//! commit(s3)
//!   entries: [s0, s1, s2, s3]   index: 3   base: 0
//!
//! undo() x2
//!   entries: [s0, s1, s2, s3]   index: 1   base: 0
//!
//! commit(s4): new branch, s2/s3 dropped
//!   entries: [s0, s1, s4]       index: 2   base: 0
//! ```
//!
//! The base index is the floor used by [`undo_all`](HistoryLog::undo_all).
//! It starts at the seed entry and can be moved with
//! [`mark_base`](HistoryLog::mark_base).
//!
//! # Invariants
//!
//! 1. `entries` is never empty.
//! 2. `entries.len() <= config.capacity` after every operation.
//! 3. `index < entries.len()` and `base_index <= index` right after a commit.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Default number of retained entries, seed included
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Configuration for the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Maximum number of entries, including the current one.
    /// Values below 1 are treated as 1.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}

/// Bounded, branch-truncating undo/redo log of snapshots.
pub struct HistoryLog<T> {
    entries: VecDeque<T>,
    index: usize,
    base_index: usize,
    config: HistoryConfig,
}

impl<T> fmt::Debug for HistoryLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryLog")
            .field("len", &self.entries.len())
            .field("index", &self.index)
            .field("base_index", &self.base_index)
            .field("config", &self.config)
            .finish()
    }
}

impl<T> HistoryLog<T> {
    /// Create a log holding only `seed`, with index and base at 0.
    #[must_use]
    pub fn new(seed: T, config: HistoryConfig) -> Self {
        let mut entries = VecDeque::with_capacity(config.effective_capacity().min(64));
        entries.push_back(seed);
        Self {
            entries,
            index: 0,
            base_index: 0,
            config,
        }
    }

    #[must_use]
    pub fn with_default_config(seed: T) -> Self {
        Self::new(seed, HistoryConfig::default())
    }

    // ====================================================================
    // Core Operations
    // ====================================================================

    /// Append `snapshot` after the cursor, dropping any redo branch.
    ///
    /// Evicts the oldest entry when the capacity is exceeded.
    pub fn commit(&mut self, snapshot: T) {
        self.entries.truncate(self.index + 1);
        self.base_index = self.base_index.min(self.index);

        self.entries.push_back(snapshot);
        self.index = self.entries.len() - 1;

        while self.entries.len() > self.config.effective_capacity() {
            self.entries.pop_front();
            self.index -= 1;
            self.base_index = self.base_index.saturating_sub(1);
        }
    }

    /// Step back one entry. Returns the new current entry, or `None` if
    /// already at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Step forward one entry. Returns the new current entry, or `None` if
    /// there is nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    /// Jump to the base entry. Returns `None` if already there.
    pub fn undo_all(&mut self) -> Option<&T> {
        if !self.can_undo_all() {
            return None;
        }
        self.index = self.base_index.min(self.entries.len() - 1);
        self.entries.get(self.index)
    }

    // ====================================================================
    // Query
    // ====================================================================

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    #[must_use]
    pub fn can_undo_all(&self) -> bool {
        self.index != self.base_index
    }

    /// The entry under the cursor
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    /// Number of entries, including the current one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a log holds at least its seed entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn base_index(&self) -> usize {
        self.base_index
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Iterate entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    // ====================================================================
    // Maintenance
    // ====================================================================

    /// Make the current entry the floor for [`undo_all`](Self::undo_all).
    pub fn mark_base(&mut self) {
        self.base_index = self.index;
    }

    /// Drop every entry and start over from `seed`.
    pub fn reset(&mut self, seed: T) {
        self.entries.clear();
        self.entries.push_back(seed);
        self.index = 0;
        self.base_index = 0;
    }
}
