//! Turn rules: validation, application, resolution.
//!
//! - `validate`: is the action legal here?
//! - `apply`: produce the next state (or the same one on rejection)
//! - `resolve_turn`: hazards, then win/lose
//! - `process_turn`: all three in order

pub mod validator;
pub mod applicator;
pub mod resolver;
pub mod engine;

pub use validator::{validate, Rejection};
pub use applicator::{apply, Applied};
pub use resolver::{evaluate_status, resolve_hazards, resolve_turn};
pub use engine::{legal_actions, process_turn, Turn, TurnOutcome};
