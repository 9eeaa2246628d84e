//! Player actions.
//!
//! The core accepts exactly three actions: move, wait and undo. Restarting a
//! level is not an action; callers rebuild a fresh state from the level
//! definition instead.

use serde::{Deserialize, Serialize};

use super::position::Direction;

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Step one cell. Costs 1 energy.
    Move(Direction),
    /// Stay in place. Costs 1 energy.
    Wait,
    /// Restore the state before the last accepted move/wait. Free.
    Undo,
}

impl Action {
    /// Does this action spend energy and advance the turn counter?
    #[must_use]
    pub const fn costs_energy(self) -> bool {
        matches!(self, Action::Move(_) | Action::Wait)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "move({direction})"),
            Action::Wait => f.write_str("wait"),
            Action::Undo => f.write_str("undo"),
        }
    }
}

/// An accepted action with the turn it produced.
///
/// Used for:
/// - The session's action log
/// - Replays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// `turn_count` after the action was applied.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, turn: u32) -> Self {
        Self { action, turn }
    }
}
