//! History manager: undo snapshots stored beside the game state.

pub mod snapshots;

pub use snapshots::History;
