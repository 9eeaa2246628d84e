//! Game state: the aggregate root for one level attempt.
//!
//! ## Immutability
//!
//! A `GameState` is never edited once it has been handed out. Every transition
//! builds a new value and callers pass states around as `Arc<GameState>`, so an
//! unchanged result is detectable with `Arc::ptr_eq`.
//!
//! Cloning is cheap: the grid is shared behind an `Arc` and the entity lists
//! use `im` persistent vectors.
//!
//! ## Invariants
//!
//! - `energy <= max_energy`
//! - the player stands in bounds on a walkable tile
//! - `status` leaves `Playing` at most once (undo restores an earlier snapshot)
//! - doors never re-lock

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{Door, Hazard, Interactable, Player};
use super::grid::Grid;
use super::position::Position;

/// Why an attempt was lost.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    /// The player ended a turn on an active hazard.
    Hazard { hazard_id: String },
    /// Energy reached zero off the goal.
    EnergyDepleted,
}

/// Progress of an attempt. `Won` and `Lost` are terminal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost(LossReason),
}

impl Status {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Status::Playing)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_playing()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Playing => f.write_str("playing"),
            Status::Won => f.write_str("won"),
            Status::Lost(_) => f.write_str("lost"),
        }
    }
}

/// A broken state invariant. Indicates a programming error upstream.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("energy {energy} exceeds max energy {max_energy}")]
    EnergyOverflow { energy: u32, max_energy: u32 },

    #[error("player at {0} is outside the grid")]
    PlayerOutOfBounds(Position),

    #[error("player at {0} is standing on a wall")]
    PlayerInWall(Position),
}

/// Complete state of one level attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub level_id: String,

    pub status: Status,

    /// Accepted move/wait actions so far.
    pub turn_count: u32,

    /// Shared by every state of the attempt; never mutated.
    pub grid: Arc<Grid>,

    pub player: Player,

    pub hazards: Vector<Hazard>,

    pub interactables: Vector<Interactable>,

    pub goal: Position,

    pub energy: u32,

    pub max_energy: u32,
}

impl GameState {
    /// A fresh attempt: playing, turn 0, full energy, nothing on the grid.
    #[must_use]
    pub fn new(
        level_id: impl Into<String>,
        grid: Arc<Grid>,
        start: Position,
        goal: Position,
        energy: u32,
    ) -> Self {
        Self {
            level_id: level_id.into(),
            status: Status::Playing,
            turn_count: 0,
            grid,
            player: Player::new(start),
            hazards: Vector::new(),
            interactables: Vector::new(),
            goal,
            energy,
            max_energy: energy,
        }
    }

    /// Add a hazard.
    #[must_use]
    pub fn with_hazard(mut self, hazard: Hazard) -> Self {
        self.hazards.push_back(hazard);
        self
    }

    /// Add a key or door.
    #[must_use]
    pub fn with_interactable(mut self, interactable: Interactable) -> Self {
        self.interactables.push_back(interactable);
        self
    }

    // === Queries ===

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    /// Is the player standing on the goal?
    #[must_use]
    pub fn on_goal(&self) -> bool {
        self.player.position == self.goal
    }

    /// First active hazard at `position`.
    #[must_use]
    pub fn active_hazard_at(&self, position: Position) -> Option<&Hazard> {
        self.hazards.iter().find(|h| h.threatens(position))
    }

    /// All keys and doors at `position`.
    pub fn interactables_at(&self, position: Position) -> impl Iterator<Item = &Interactable> {
        self.interactables
            .iter()
            .filter(move |i| i.position() == position)
    }

    /// Every still-locked door at `position`.
    pub fn locked_doors_at(&self, position: Position) -> impl Iterator<Item = &Door> {
        self.interactables_at(position)
            .filter_map(Interactable::as_locked_door)
    }

    /// Number of keys held.
    #[must_use]
    pub fn keys_held(&self) -> usize {
        self.player.inventory.len()
    }

    /// Check the invariants every reachable state must satisfy.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.energy > self.max_energy {
            return Err(InvariantError::EnergyOverflow {
                energy: self.energy,
                max_energy: self.max_energy,
            });
        }

        let position = self.player.position;
        if !self.grid.contains(position) {
            return Err(InvariantError::PlayerOutOfBounds(position));
        }
        if !self.grid.is_walkable(position) {
            return Err(InvariantError::PlayerInWall(position));
        }

        Ok(())
    }
}
