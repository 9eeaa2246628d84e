//! Turn pipeline: validate -> apply -> resolve.
//!
//! `process_turn` is the single entry point callers need for one action. It
//! never panics on bad input; rejected actions come back as
//! `TurnOutcome::Rejected` with the input state and history untouched.
//!
//! ```
//! use rust_grid_puzzle::core::{Action, Direction, Position, Status};
//! use rust_grid_puzzle::history::History;
//! use rust_grid_puzzle::level::{to_game_state, LevelData};
//! use rust_grid_puzzle::rules::{process_turn, TurnOutcome};
//! use std::sync::Arc;
//!
//! let level = LevelData::new("demo", 5, 5, Position::new(0, 0), Position::new(1, 0), 4);
//! let state = Arc::new(to_game_state(&level));
//!
//! let turn = process_turn(&state, &History::default(), Action::Move(Direction::Right));
//! assert_eq!(turn.outcome, TurnOutcome::Advanced);
//! assert_eq!(turn.state.status, Status::Won);
//! ```

use std::sync::Arc;

use tracing::debug;

use super::applicator::apply;
use super::resolver::resolve_turn;
use super::validator::{validate, Rejection};
use crate::core::{Action, Direction, GameState};
use crate::history::History;

/// What a submitted action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Refused; nothing changed.
    Rejected(Rejection),
    /// A move or wait was applied and resolved.
    Advanced,
    /// The previous snapshot was restored.
    Undone,
}

/// Result of one turn.
#[derive(Clone, Debug)]
pub struct Turn {
    pub state: Arc<GameState>,
    pub history: History,
    pub outcome: TurnOutcome,
}

impl Turn {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Rejected(_))
    }
}

/// Run one full turn.
///
/// Undo restores its snapshot verbatim; the resolver only runs after a
/// move or wait.
pub fn process_turn(state: &Arc<GameState>, history: &History, action: Action) -> Turn {
    if let Err(rejection) = validate(state, history, action) {
        return Turn {
            state: Arc::clone(state),
            history: history.clone(),
            outcome: TurnOutcome::Rejected(rejection),
        };
    }

    let applied = apply(state, history, action);

    let (state, outcome) = if action.costs_energy() {
        (resolve_turn(&applied.state), TurnOutcome::Advanced)
    } else {
        (applied.state, TurnOutcome::Undone)
    };

    debug!(
        %action,
        turn = state.turn_count,
        energy = state.energy,
        status = %state.status,
        "turn processed"
    );

    Turn {
        state,
        history: applied.history,
        outcome,
    }
}

/// Every action that currently validates.
///
/// Order: moves (up, down, left, right), then wait, then undo.
#[must_use]
pub fn legal_actions(state: &GameState, history: &History) -> Vec<Action> {
    Direction::ALL
        .into_iter()
        .map(Action::Move)
        .chain([Action::Wait, Action::Undo])
        .filter(|&action| validate(state, history, action).is_ok())
        .collect()
}
