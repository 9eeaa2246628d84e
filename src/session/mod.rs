//! Caller-side session: current state, undo history and action log together.

pub mod manager;
pub mod report;

pub use manager::Session;
pub use report::TurnReport;
