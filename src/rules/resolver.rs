//! Turn resolver: hazards first, then win/lose.
//!
//! Runs after an accepted move or wait. The two phases are strictly ordered,
//! so a hazard on the goal tile is always a loss.

use std::sync::Arc;

use tracing::debug;

use crate::core::{GameState, LossReason, Status};

/// Resolve the end of a turn.
///
/// Returns the input `Arc` when the status does not change.
#[must_use]
pub fn resolve_turn(state: &Arc<GameState>) -> Arc<GameState> {
    let next_status = resolve_hazards(state).or_else(|| evaluate_status(state));

    match next_status {
        Some(status) => {
            debug!(
                level_id = %state.level_id,
                turn = state.turn_count,
                %status,
                "attempt finished"
            );
            let mut next = GameState::clone(state);
            next.status = status;
            Arc::new(next)
        }
        None => Arc::clone(state),
    }
}

/// Phase 1: contact with any active hazard loses the attempt.
#[must_use]
pub fn resolve_hazards(state: &GameState) -> Option<Status> {
    if !state.is_playing() {
        return None;
    }
    state
        .active_hazard_at(state.player.position)
        .map(|hazard| {
            Status::Lost(LossReason::Hazard {
                hazard_id: hazard.id.clone(),
            })
        })
}

/// Phase 2: goal wins, otherwise empty energy loses.
#[must_use]
pub fn evaluate_status(state: &GameState) -> Option<Status> {
    if !state.is_playing() {
        return None;
    }
    if state.on_goal() {
        Some(Status::Won)
    } else if state.energy == 0 {
        Some(Status::Lost(LossReason::EnergyDepleted))
    } else {
        None
    }
}
