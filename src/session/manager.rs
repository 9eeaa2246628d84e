//! Session: one level attempt as seen by the caller.
//!
//! The session owns the current state, the undo history, the log of
//! accepted actions, and the level definition used to (re)build the
//! state. Level selection is explicit: callers construct a new session when
//! switching levels.
//!
//! ```
//! use rust_grid_puzzle::core::{Action, Direction, EngineConfig, Position};
//! use rust_grid_puzzle::level::LevelData;
//! use rust_grid_puzzle::session::Session;
//!
//! let level = LevelData::new("demo", 5, 5, Position::new(0, 0), Position::new(4, 0), 10);
//! let mut session = Session::new(level, EngineConfig::default());
//!
//! session.submit(Action::Move(Direction::Right));
//! assert_eq!(session.state().turn_count, 1);
//!
//! session.undo();
//! assert_eq!(session.state().turn_count, 0);
//! ```

use std::sync::Arc;

use im::Vector;
use tracing::info;

use super::report::TurnReport;
use crate::core::{Action, ActionRecord, EngineConfig, GameState, Status};
use crate::history::History;
use crate::level::{to_game_state, LevelData};
use crate::rules::{legal_actions, process_turn, validate, Rejection, TurnOutcome};

/// A single level attempt.
#[derive(Clone, Debug)]
pub struct Session {
    level: Arc<LevelData>,
    config: EngineConfig,
    state: Arc<GameState>,
    history: History,

    /// Accepted move/wait actions still in effect (undo removes the last).
    log: Vector<ActionRecord>,
}

impl Session {
    /// Start an attempt at `level`.
    #[must_use]
    pub fn new(level: impl Into<Arc<LevelData>>, config: EngineConfig) -> Self {
        let level = level.into();
        let state = Arc::new(to_game_state(&level));
        Self {
            history: History::from_config(&config),
            level,
            config,
            state,
            log: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &Arc<GameState> {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn level(&self) -> &LevelData {
        &self.level
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.state.status
    }

    /// Accepted actions in the order they still apply.
    pub fn log(&self) -> impl Iterator<Item = &ActionRecord> {
        self.log.iter()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        validate(&self.state, &self.history, Action::Undo).is_ok()
    }

    // === Turns ===

    /// Check an action without applying it.
    pub fn validate(&self, action: Action) -> Result<(), Rejection> {
        validate(&self.state, &self.history, action)
    }

    /// Actions that would currently be accepted.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(&self.state, &self.history)
    }

    /// Run one full turn.
    pub fn submit(&mut self, action: Action) -> TurnReport {
        let status_before = self.state.status.clone();
        let turn = process_turn(&self.state, &self.history, action);

        match turn.outcome {
            TurnOutcome::Advanced => {
                self.log
                    .push_back(ActionRecord::new(action, turn.state.turn_count));
            }
            TurnOutcome::Undone => {
                self.log.pop_back();
            }
            TurnOutcome::Rejected(_) => {}
        }

        self.state = turn.state;
        self.history = turn.history;

        let status_changed = self.state.status != status_before;
        if status_changed {
            info!(
                level_id = %self.level.id,
                status = %self.state.status,
                turns = self.state.turn_count,
                energy = self.state.energy,
                "attempt status changed"
            );
        }

        TurnReport {
            outcome: turn.outcome,
            status: self.state.status.clone(),
            status_changed,
        }
    }

    /// Shorthand for `submit(Action::Undo)`.
    pub fn undo(&mut self) -> TurnReport {
        self.submit(Action::Undo)
    }

    /// Throw the attempt away and start again from the level definition.
    ///
    /// Clears history and log; this is not an undoable transition.
    pub fn restart(&mut self) {
        info!(level_id = %self.level.id, turns = self.state.turn_count, "restarting level");
        self.state = Arc::new(to_game_state(&self.level));
        self.history = History::from_config(&self.config);
        self.log = Vector::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, HazardKind, LossReason, Position, TileKind};

    fn level() -> LevelData {
        LevelData::new("s", 5, 5, Position::new(0, 0), Position::new(2, 0), 5)
            .with_tile(0, 1, TileKind::Wall)
            .with_hazard("h", 1, 1, HazardKind::Spike)
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(level(), EngineConfig::default());

        assert_eq!(session.status(), &Status::Playing);
        assert_eq!(session.state().energy, 5);
        assert!(session.history().is_empty());
        assert_eq!(session.log().count(), 0);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_submit_logs_accepted_actions() {
        let mut session = Session::new(level(), EngineConfig::default());

        let report = session.submit(Action::Move(Direction::Right));
        assert_eq!(report.outcome, TurnOutcome::Advanced);
        assert!(!report.status_changed);

        let log: Vec<_> = session.log().copied().collect();
        assert_eq!(log, vec![ActionRecord::new(Action::Move(Direction::Right), 1)]);
    }

    #[test]
    fn test_rejected_submit_changes_nothing() {
        let mut session = Session::new(level(), EngineConfig::default());
        let before = Arc::clone(session.state());

        let report = session.submit(Action::Move(Direction::Down));

        assert_eq!(report.outcome, TurnOutcome::Rejected(Rejection::NotWalkable));
        assert!(report.is_rejected());
        assert!(Arc::ptr_eq(session.state(), &before));
        assert_eq!(session.log().count(), 0);
    }

    #[test]
    fn test_undo_pops_log() {
        let mut session = Session::new(level(), EngineConfig::default());
        session.submit(Action::Wait);
        session.submit(Action::Move(Direction::Right));

        let report = session.undo();

        assert_eq!(report.outcome, TurnOutcome::Undone);
        assert_eq!(session.log().count(), 1);
        assert_eq!(session.state().turn_count, 1);
        assert_eq!(session.state().player.position, Position::new(0, 0));
    }

    #[test]
    fn test_win_report() {
        let mut session = Session::new(level(), EngineConfig::default());
        session.submit(Action::Move(Direction::Right));
        let report = session.submit(Action::Move(Direction::Right));

        assert!(report.just_won());
        assert_eq!(session.status(), &Status::Won);
        assert!(session.legal_actions().is_empty());
    }

    #[test]
    fn test_hazard_report() {
        let mut session = Session::new(level(), EngineConfig::default());
        session.submit(Action::Move(Direction::Right));
        let report = session.submit(Action::Move(Direction::Down));

        assert!(report.status_changed);
        assert!(!report.just_won());
        assert_eq!(
            report.status,
            Status::Lost(LossReason::Hazard {
                hazard_id: "h".to_string()
            })
        );
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = Session::new(level(), EngineConfig::default());
        session.submit(Action::Move(Direction::Right));
        session.submit(Action::Move(Direction::Down));
        assert!(session.status().is_terminal());

        session.restart();

        assert_eq!(session.status(), &Status::Playing);
        assert_eq!(session.state().turn_count, 0);
        assert_eq!(session.state().energy, 5);
        assert!(session.history().is_empty());
        assert_eq!(session.log().count(), 0);
    }

    #[test]
    fn test_history_cap_limits_undo() {
        let config = EngineConfig::default().with_history_depth(2);
        let mut session = Session::new(level(), config);

        for _ in 0..4 {
            session.submit(Action::Wait);
        }
        assert_eq!(session.history().len(), 2);

        assert!(!session.undo().is_rejected());
        assert!(!session.undo().is_rejected());
        assert!(session.undo().is_rejected());
        assert_eq!(session.state().turn_count, 2);
    }
}
