//! Per-turn report handed back to the presentation layer.

use crate::core::Status;
use crate::rules::TurnOutcome;

/// What one submitted action did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,

    /// Status after the turn.
    pub status: Status,

    /// True when this turn moved the status away from `Playing`.
    pub status_changed: bool,
}

impl TurnReport {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Rejected(_))
    }

    /// Did this turn win the level?
    #[must_use]
    pub fn just_won(&self) -> bool {
        self.status_changed && self.status == Status::Won
    }
}
