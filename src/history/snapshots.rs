//! Undo snapshot stack.
//!
//! `History` is a persistent stack of pre-action states kept beside the
//! current `GameState` rather than inside it. Pushing and popping return a new
//! `History`; the original is untouched, so a rejected action can hand back
//! the very same history value it was given.
//!
//! Snapshots are `Arc<GameState>` values that are never mutated after they
//! are recorded, which makes sharing them with earlier histories safe.

use std::sync::Arc;

use im::Vector;
use tracing::debug;

use crate::core::{EngineConfig, GameState};

/// Bounded stack of undo snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    snapshots: Vector<Arc<GameState>>,

    /// Maximum retained snapshots (`None` = unbounded).
    depth: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl History {
    /// An empty history holding at most `depth` snapshots.
    #[must_use]
    pub fn new(depth: Option<usize>) -> Self {
        Self {
            snapshots: Vector::new(),
            depth,
        }
    }

    /// An empty history sized by the engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.history_depth)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// The snapshot undo would restore.
    #[must_use]
    pub fn peek(&self) -> Option<&Arc<GameState>> {
        self.snapshots.back()
    }

    /// A new history with `snapshot` on top.
    ///
    /// At capacity the oldest snapshot is evicted.
    #[must_use]
    pub fn pushed(&self, snapshot: Arc<GameState>) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push_back(snapshot);

        if let Some(depth) = self.depth {
            while snapshots.len() > depth {
                snapshots.pop_front();
                debug!(depth, "undo history full, evicted oldest snapshot");
            }
        }

        Self {
            snapshots,
            depth: self.depth,
        }
    }

    /// The top snapshot and the history below it, or `None` when empty.
    #[must_use]
    pub fn popped(&self) -> Option<(Arc<GameState>, Self)> {
        let mut snapshots = self.snapshots.clone();
        let top = snapshots.pop_back()?;
        Some((
            top,
            Self {
                snapshots,
                depth: self.depth,
            },
        ))
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<GameState>> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Position};

    fn state(turn: u32) -> Arc<GameState> {
        let mut state = GameState::new(
            "h",
            Arc::new(Grid::new(5, 5)),
            Position::new(0, 0),
            Position::new(4, 4),
            10,
        );
        state.turn_count = turn;
        Arc::new(state)
    }

    #[test]
    fn test_empty_history() {
        let history = History::new(Some(4));

        assert!(history.is_empty());
        assert!(history.peek().is_none());
        assert!(history.popped().is_none());
    }

    #[test]
    fn test_push_pop_lifo() {
        let history = History::new(None).pushed(state(0)).pushed(state(1));
        assert_eq!(history.len(), 2);

        let (top, rest) = history.popped().unwrap();
        assert_eq!(top.turn_count, 1);
        assert_eq!(rest.len(), 1);

        let (top, rest) = rest.popped().unwrap();
        assert_eq!(top.turn_count, 0);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_push_leaves_original_untouched() {
        let original = History::new(None).pushed(state(0));
        let extended = original.pushed(state(1));

        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_pop_returns_same_snapshot() {
        let snapshot = state(7);
        let history = History::new(None).pushed(Arc::clone(&snapshot));

        let (top, _) = history.popped().unwrap();
        assert!(Arc::ptr_eq(&top, &snapshot));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::new(Some(3));
        for turn in 0..5 {
            history = history.pushed(state(turn));
        }

        assert_eq!(history.len(), 3);
        let turns: Vec<u32> = history.iter().map(|s| s.turn_count).collect();
        assert_eq!(turns, vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_depth_keeps_nothing() {
        let history = History::new(Some(0)).pushed(state(0));
        assert!(history.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default().with_history_depth(2);
        assert_eq!(History::from_config(&config).depth(), Some(2));
        assert_eq!(History::default().depth(), EngineConfig::default().history_depth);
    }
}
