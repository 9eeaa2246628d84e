//! Level converter: `LevelData` -> initial `GameState`.
//!
//! The input is assumed to have passed `LevelData::validate`. The converter
//! performs no solvability analysis.

use std::sync::Arc;

use im::Vector;
use tracing::debug;

use super::data::{InteractableKind, LevelData};
use crate::core::{GameState, Grid, Hazard, Interactable, KeyColor};

/// Build the initial state for a level attempt.
///
/// - status `Playing`, turn 0, `energy == max_energy == level.energy`
/// - player at `player_start` with an empty inventory
/// - every hazard active, every key uncollected, every door locked
/// - tiles default to empty; `level.tiles` entries override single cells and
///   out-of-range entries are dropped
///
/// ```
/// use rust_grid_puzzle::core::{Position, Status};
/// use rust_grid_puzzle::level::{to_game_state, LevelData};
///
/// let level = LevelData::new("demo", 5, 5, Position::new(0, 0), Position::new(4, 4), 8);
/// let state = to_game_state(&level);
///
/// assert_eq!(state.status, Status::Playing);
/// assert_eq!(state.energy, 8);
/// assert_eq!(state.player.position, Position::new(0, 0));
/// ```
#[must_use]
pub fn to_game_state(level: &LevelData) -> GameState {
    let mut grid = Grid::new(level.width, level.height);
    let mut discarded = 0usize;
    for tile in &level.tiles {
        if !grid.set(tile.position(), tile.kind) {
            discarded += 1;
        }
    }
    if discarded > 0 {
        debug!(level_id = %level.id, discarded, "dropped out-of-range tile overrides");
    }

    let hazards: Vector<Hazard> = level
        .hazards
        .iter()
        .map(|spec| Hazard::new(spec.id.clone(), spec.position(), spec.kind))
        .collect();

    let interactables: Vector<Interactable> = level
        .interactables
        .iter()
        .map(|spec| {
            let color = KeyColor::new(spec.color.clone().unwrap_or_default());
            match spec.kind {
                InteractableKind::Key => Interactable::key(spec.id.clone(), spec.position(), color),
                InteractableKind::Door => Interactable::door(spec.id.clone(), spec.position(), color),
            }
        })
        .collect();

    let mut state = GameState::new(
        level.id.clone(),
        Arc::new(grid),
        level.player_start,
        level.goal,
        level.energy,
    );
    state.hazards = hazards;
    state.interactables = interactables;

    debug!(
        level_id = %state.level_id,
        width = level.width,
        height = level.height,
        hazards = state.hazards.len(),
        interactables = state.interactables.len(),
        energy = state.energy,
        "converted level"
    );

    state
}
