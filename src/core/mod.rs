//! Core data model: positions, grid, entities, state, actions, configuration.
//!
//! These types carry no rules of their own. The `rules` module decides what
//! happens to them.

pub mod position;
pub mod grid;
pub mod entity;
pub mod action;
pub mod state;
pub mod config;

pub use position::{Direction, Position};
pub use grid::{Grid, GridShapeError, Tile, TileKind};
pub use entity::{Door, Hazard, HazardKind, Interactable, Key, KeyColor, KeyItem, Player};
pub use action::{Action, ActionRecord};
pub use state::{GameState, InvariantError, LossReason, Status};
pub use config::{EngineConfig, DEFAULT_HISTORY_DEPTH};
