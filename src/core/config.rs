//! Engine configuration.
//!
//! Callers pick policy here rather than the engine hardcoding it. Currently
//! the only knob is how many undo snapshots are retained.

use serde::{Deserialize, Serialize};

/// Undo depth used when none is configured.
pub const DEFAULT_HISTORY_DEPTH: usize = 256;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum undo snapshots kept (`None` = unbounded).
    ///
    /// When full, the oldest snapshot is dropped, so undo can no longer
    /// reach the very start of a long attempt.
    pub history_depth: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_depth: Some(DEFAULT_HISTORY_DEPTH),
        }
    }
}

impl EngineConfig {
    /// Cap the undo stack at `depth` snapshots.
    #[must_use]
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = Some(depth);
        self
    }

    /// Keep every snapshot for the lifetime of an attempt.
    #[must_use]
    pub fn unbounded_history(mut self) -> Self {
        self.history_depth = None;
        self
    }
}
