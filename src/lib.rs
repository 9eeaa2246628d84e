//! # rust-grid-puzzle
//!
//! Deterministic rules engine for a turn-based grid puzzle. A player moves
//! across a tile grid on an energy budget, collecting keys and opening doors,
//! until they reach the goal (win) or touch a hazard or run dry (loss).
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same state and the same actions always produce
//!    the same result. There is no randomness and no I/O in the core.
//!
//! 2. **Immutable States**: every transition returns a new `Arc<GameState>`.
//!    A rejected action returns the input `Arc` itself, so callers detect
//!    no-ops with `Arc::ptr_eq`.
//!
//! 3. **Ordered Resolution**: hazards are resolved before the win check, so a
//!    hazard on the goal is a loss; reaching the goal with the last energy is
//!    a win.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`; the grid
//!   is shared behind an `Arc` by every state of an attempt.
//!
//! - **History Beside State**: undo snapshots live in a bounded `History`
//!   owned by the caller, not inside `GameState`.
//!
//! ## Modules
//!
//! - `core`: positions, grid, entities, state, actions, configuration
//! - `level`: level schema, validation, conversion to an initial state
//! - `rules`: validator, applicator, turn resolver, turn pipeline
//! - `history`: undo snapshot stack
//! - `session`: one level attempt (state + history + action log)
//! - `progress`: save data and the progress ledger
//! - `replay`: recorded action sequences and deterministic re-execution

pub mod core;
pub mod level;
pub mod rules;
pub mod history;
pub mod session;
pub mod progress;
pub mod replay;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Direction, EngineConfig, GameState, Grid, Hazard, HazardKind,
    Interactable, KeyColor, KeyItem, LossReason, Player, Position, Status, Tile, TileKind,
};

pub use crate::level::{parse_level, to_game_state, LevelData, LevelError};

pub use crate::rules::{
    apply, legal_actions, process_turn, resolve_turn, validate, Applied, Rejection, Turn,
    TurnOutcome,
};

pub use crate::history::History;

pub use crate::session::{Session, TurnReport};

pub use crate::progress::{
    get_completed_count, get_progress, is_unlocked, record_completion, LevelProgress, SaveData,
    Settings,
};

pub use crate::replay::{Replay, ReplayError};
