//! Action applicator: state x valid action -> next state.
//!
//! `apply` re-validates. A rejected action returns clones of the input
//! `Arc`s, so `Arc::ptr_eq(&applied.state, &state)` identifies a no-op.
//!
//! Every effective move/wait records the pre-action state in the history.
//! Undo records nothing.

use std::sync::Arc;

use tracing::trace;

use super::validator::validate;
use crate::core::{Action, Direction, GameState, Interactable, KeyItem};
use crate::history::History;

/// The state and history after `apply`.
#[derive(Clone, Debug)]
pub struct Applied {
    pub state: Arc<GameState>,
    pub history: History,
}

impl Applied {
    fn unchanged(state: &Arc<GameState>, history: &History) -> Self {
        Self {
            state: Arc::clone(state),
            history: history.clone(),
        }
    }

    /// Did `apply` leave `before` untouched?
    #[must_use]
    pub fn is_noop(&self, before: &Arc<GameState>) -> bool {
        Arc::ptr_eq(&self.state, before)
    }
}

/// Apply `action` to `state`.
///
/// Invalid actions (including undo with an empty history) leave both
/// `state` and `history` unchanged.
pub fn apply(state: &Arc<GameState>, history: &History, action: Action) -> Applied {
    if let Err(rejection) = validate(state, history, action) {
        trace!(%action, %rejection, "action rejected");
        return Applied::unchanged(state, history);
    }

    match action {
        Action::Move(direction) => Applied {
            state: Arc::new(moved(state, direction)),
            history: history.pushed(Arc::clone(state)),
        },
        Action::Wait => Applied {
            state: Arc::new(waited(state)),
            history: history.pushed(Arc::clone(state)),
        },
        Action::Undo => match history.popped() {
            Some((snapshot, rest)) => Applied {
                state: snapshot,
                history: rest,
            },
            None => Applied::unchanged(state, history),
        },
    }
}

/// Spend one energy and advance the turn counter.
fn spend_turn(next: &mut GameState) {
    next.energy -= 1;
    next.turn_count += 1;
}

fn waited(state: &GameState) -> GameState {
    let mut next = state.clone();
    spend_turn(&mut next);
    next
}

fn moved(state: &GameState, direction: Direction) -> GameState {
    let mut next = state.clone();
    let target = next.player.position.step(direction);

    // Keys before doors.
    for item in next.interactables.iter_mut() {
        if let Interactable::Key(key) = item {
            if key.position == target && !key.collected {
                key.collected = true;
                next.player.inventory.push(KeyItem {
                    id: key.id.clone(),
                    color: key.color.clone(),
                });
            }
        }
    }

    for item in next.interactables.iter_mut() {
        if let Interactable::Door(door) = item {
            if door.position == target && door.locked && next.player.has_key(&door.color) {
                door.locked = false;
            }
        }
    }

    next.player.position = target;
    spend_turn(&mut next);
    next
}
