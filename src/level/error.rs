//! Level document errors.

use thiserror::Error;

use crate::core::Position;

/// Problems with a level definition. Raised at load time only.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level {level_id}: {field} is {value}, expected {min}..={max}")]
    DimensionOutOfRange {
        level_id: String,
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("level {level_id}: energy must be greater than zero")]
    NoEnergy { level_id: String },

    #[error("level {level_id}: {what} at {position} is outside the grid")]
    OutOfBounds {
        level_id: String,
        what: String,
        position: Position,
    },

    #[error("level {level_id}: {what} at {position} is on a wall")]
    OnWall {
        level_id: String,
        what: &'static str,
        position: Position,
    },

    #[error("level {level_id}: duplicate entity id {id:?}")]
    DuplicateId { level_id: String, id: String },

    #[error("level {level_id}: {id} has no colour")]
    MissingColor { level_id: String, id: String },
}
