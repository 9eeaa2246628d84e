//! Deterministic replays of accepted action sequences.

pub mod record;

pub use record::{Replay, ReplayError};
