//! Recorded action sequences.
//!
//! A replay is the level id plus the actions still in effect at the time
//! it was taken. Because every transition is deterministic, running the
//! same actions from a freshly converted level reproduces the recorded
//! state exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{Action, EngineConfig};
use crate::level::LevelData;
use crate::rules::Rejection;
use crate::session::Session;

/// Replay could not be decoded or re-executed.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("replay encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("replay is for level {expected:?}, got {actual:?}")]
    LevelMismatch { expected: String, actual: String },

    #[error("replay action {index} ({action}) was rejected: {rejection}")]
    Rejected {
        index: usize,
        action: Action,
        rejection: Rejection,
    },
}

/// A level id and the actions to run from its initial state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub level_id: String,
    pub actions: Vec<Action>,
}

impl Replay {
    #[must_use]
    pub fn new(level_id: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            level_id: level_id.into(),
            actions,
        }
    }

    /// Capture the actions currently in effect in `session`.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            level_id: session.level().id.clone(),
            actions: session.log().map(|record| record.action).collect(),
        }
    }

    /// Compact binary form.
    pub fn encode(&self) -> Result<Vec<u8>, ReplayError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ReplayError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Re-run the actions from a fresh attempt at `level`.
    ///
    /// Fails on the first rejected action, since a recorded replay should
    /// only contain accepted ones.
    pub fn run(&self, level: &LevelData, config: EngineConfig) -> Result<Session, ReplayError> {
        if level.id != self.level_id {
            return Err(ReplayError::LevelMismatch {
                expected: self.level_id.clone(),
                actual: level.id.clone(),
            });
        }

        let mut session = Session::new(level.clone(), config);
        for (index, &action) in self.actions.iter().enumerate() {
            if let Err(rejection) = session.validate(action) {
                return Err(ReplayError::Rejected {
                    index,
                    action,
                    rejection,
                });
            }
            session.submit(action);
        }

        debug!(
            level_id = %self.level_id,
            actions = self.actions.len(),
            status = %session.status(),
            "replay finished"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position, Status};

    fn level() -> LevelData {
        LevelData::new("rp", 5, 5, Position::new(0, 0), Position::new(2, 1), 6)
            .with_key("k", 1, 0, "red")
    }

    #[test]
    fn test_from_session() {
        let mut session = Session::new(level(), EngineConfig::default());
        session.submit(Action::Move(Direction::Right));
        session.submit(Action::Wait);
        session.submit(Action::Undo);
        session.submit(Action::Move(Direction::Down));

        let replay = Replay::from_session(&session);

        assert_eq!(replay.level_id, "rp");
        assert_eq!(
            replay.actions,
            vec![Action::Move(Direction::Right), Action::Move(Direction::Down)]
        );
    }

    #[test]
    fn test_run_reproduces_state() {
        let mut session = Session::new(level(), EngineConfig::default());
        for action in [
            Action::Move(Direction::Right),
            Action::Wait,
            Action::Move(Direction::Right),
            Action::Move(Direction::Down),
        ] {
            session.submit(action);
        }
        assert_eq!(session.status(), &Status::Won);

        let replayed = Replay::from_session(&session)
            .run(&level(), EngineConfig::default())
            .unwrap();

        assert_eq!(**replayed.state(), **session.state());
    }

    #[test]
    fn test_binary_round_trip() {
        let replay = Replay::new("rp", vec![Action::Move(Direction::Left), Action::Wait, Action::Undo]);
        let bytes = replay.encode().unwrap();

        assert_eq!(Replay::decode(&bytes).unwrap(), replay);
    }

    #[test]
    fn test_level_mismatch() {
        let replay = Replay::new("other", vec![]);

        assert!(matches!(
            replay.run(&level(), EngineConfig::default()),
            Err(ReplayError::LevelMismatch { .. })
        ));
    }

    #[test]
    fn test_rejected_action() {
        let replay = Replay::new("rp", vec![Action::Wait, Action::Move(Direction::Up)]);

        match replay.run(&level(), EngineConfig::default()) {
            Err(ReplayError::Rejected { index, rejection, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(rejection, Rejection::OutOfBounds);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(Replay::decode(&[0xff]), Err(ReplayError::Encoding(_))));
    }
}
