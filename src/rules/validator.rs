//! Action validator: is an action legal in a given state?
//!
//! Pure and advisory. A rejection carries the first failing check.
//!
//! ## Check order
//!
//! Every action on a finished attempt is rejected first. Then, for moves:
//! 1. energy
//! 2. bounds
//! 3. walkability
//! 4. any locked door without a matching key

use thiserror::Error;

use crate::core::{Action, Direction, GameState};
use crate::history::History;

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("game is not in progress")]
    NotPlaying,

    #[error("no energy")]
    NoEnergy,

    #[error("out of bounds")]
    OutOfBounds,

    #[error("not walkable")]
    NotWalkable,

    #[error("door is locked")]
    DoorLocked,

    #[error("nothing to undo")]
    NothingToUndo,
}

/// Check whether `action` may be applied to `state`.
///
/// `history` is only consulted for undo.
pub fn validate(state: &GameState, history: &History, action: Action) -> Result<(), Rejection> {
    if !state.is_playing() {
        return Err(Rejection::NotPlaying);
    }

    match action {
        Action::Move(direction) => validate_move(state, direction),
        Action::Wait => require_energy(state),
        Action::Undo => {
            if history.is_empty() {
                Err(Rejection::NothingToUndo)
            } else {
                Ok(())
            }
        }
    }
}

fn require_energy(state: &GameState) -> Result<(), Rejection> {
    if state.energy == 0 {
        Err(Rejection::NoEnergy)
    } else {
        Ok(())
    }
}

fn validate_move(state: &GameState, direction: Direction) -> Result<(), Rejection> {
    require_energy(state)?;

    let target = state.player.position.step(direction);
    if !state.grid.contains(target) {
        return Err(Rejection::OutOfBounds);
    }
    if !state.grid.is_walkable(target) {
        return Err(Rejection::NotWalkable);
    }
    if !state
        .locked_doors_at(target)
        .all(|door| state.player.has_key(&door.color))
    {
        return Err(Rejection::DoorLocked);
    }

    Ok(())
}
