//! Level definitions and conversion into an initial game state.
//!
//! - `LevelData`: the external schema, with structural validation
//! - `parse_level`: JSON parse + validate, for loaders
//! - `to_game_state`: the level converter

pub mod data;
pub mod error;
pub mod converter;

pub use data::{
    parse_level, HazardSpec, InteractableKind, InteractableSpec, LevelData, TileSpec,
    MAX_DIMENSION, MIN_DIMENSION,
};
pub use error::LevelError;
pub use converter::to_game_state;
