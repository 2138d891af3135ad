//! Append-only log of status transitions for one assignment.
//!
//! Timestamps are the caller's clock (simulation ms or wall-clock ms,
//! whichever drives the tick loop); use the helper methods for derived KPIs.

use serde::{Deserialize, Serialize};

use crate::status::DispatchStatus;

/// One recorded status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub at_ms: u64,
    pub status: DispatchStatus,
}

/// Append-only status history. Consecutive duplicate statuses are collapsed:
/// a tick that re-derives the same status records nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionLog {
    entries: Vec<Transition>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `status` at `at_ms`. Returns true if a new entry was appended,
    /// false if the status is unchanged from the latest entry.
    pub fn record(&mut self, at_ms: u64, status: DispatchStatus) -> bool {
        if self.entries.last().map(|t| t.status) == Some(status) {
            return false;
        }
        self.entries.push(Transition { at_ms, status });
        true
    }

    pub fn entries(&self) -> &[Transition] {
        &self.entries
    }

    pub fn current(&self) -> Option<Transition> {
        self.entries.last().copied()
    }

    /// Timestamp at which the assignment first reached `status` or any more
    /// advanced stage (a noisy run may skip straight past a stage).
    pub fn first_reached(&self, status: DispatchStatus) -> Option<u64> {
        self.entries
            .iter()
            .find(|t| t.status >= status)
            .map(|t| t.at_ms)
    }

    /// Time from assignment to leaving the settle window, if it happened.
    pub fn time_to_en_route(&self) -> Option<u64> {
        self.elapsed_until(DispatchStatus::EnRoute)
    }

    /// Time from assignment to arrival, if the unit arrived.
    pub fn time_to_arrival(&self) -> Option<u64> {
        self.elapsed_until(DispatchStatus::Arrived)
    }

    fn elapsed_until(&self, status: DispatchStatus) -> Option<u64> {
        let start = self.entries.first()?.at_ms;
        self.first_reached(status)
            .map(|at| at.saturating_sub(start))
    }
}
