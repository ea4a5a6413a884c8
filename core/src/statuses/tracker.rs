//! Status interval tracker
//!
//! Turns apply/remove signals for the analysed player (and the player's pets)
//! into per-status usage intervals.
//!
//! Preconditions: signals arrive in chronological order, and a removal always
//! belongs to the most recent open interval of its status. Neither is checked.

use buffline_types::{ActorId, Millis, StatusId};
use hashbrown::HashSet;

use crate::events::{SignalHandler, StatusSignal};
use crate::roster::Roster;

use super::StatusUsageLedger;

/// Applications whose start lies within this window of an existing interval's
/// start are treated as refreshes of that interval.
pub const STATUS_REAPPLY_THRESHOLD_MS: i64 = 2000;

#[derive(Debug, Clone)]
pub struct StatusTracker {
    roster: Roster,
    tracked_sources: HashSet<ActorId>,
    /// Subtracted from every raw timestamp before storing or comparing
    time_offset: Millis,
    reapply_threshold_ms: i64,
    ledger: StatusUsageLedger,
}

impl StatusTracker {
    /// Track statuses sourced from `player_id` or any actor it owns.
    pub fn new(roster: Roster, player_id: ActorId, time_offset: Millis) -> Self {
        let tracked_sources = roster.tracked_ids(player_id);
        tracing::debug!(
            player_id,
            tracked = tracked_sources.len(),
            time_offset,
            "Status tracker initialised"
        );
        Self {
            roster,
            tracked_sources,
            time_offset,
            reapply_threshold_ms: STATUS_REAPPLY_THRESHOLD_MS,
            ledger: StatusUsageLedger::new(),
        }
    }

    pub fn with_reapply_threshold(mut self, threshold_ms: i64) -> Self {
        self.reapply_threshold_ms = threshold_ms;
        self
    }

    pub fn reapply_threshold_ms(&self) -> i64 {
        self.reapply_threshold_ms
    }

    pub fn is_tracked_source(&self, source_id: ActorId) -> bool {
        self.tracked_sources.contains(&source_id)
    }

    pub fn ledger(&self) -> &StatusUsageLedger {
        &self.ledger
    }

    /// Raw timestamp minus the run offset, saturating at the i64 bounds
    fn normalize(&self, timestamp: Millis) -> Millis {
        timestamp.saturating_sub(self.time_offset)
    }

    fn accepts(&self, source_id: ActorId, target_id: ActorId) -> bool {
        self.is_tracked_source(source_id) && self.roster.is_eligible_target(target_id)
    }

    /// Record a status application. Returns true if a new interval was opened.
    pub fn record_apply(
        &mut self,
        status_id: StatusId,
        target_id: ActorId,
        source_id: ActorId,
        timestamp: Millis,
    ) -> bool {
        if !self.accepts(source_id, target_id) {
            return false;
        }

        let start = self.normalize(timestamp);
        if self
            .ledger
            .has_start_near(status_id, start, self.reapply_threshold_ms)
        {
            tracing::trace!(status_id, start, "Reapplication within threshold, ignored");
            return false;
        }

        self.ledger.push_open(status_id, start);
        true
    }

    /// Record a status removal. Returns true if it closed an open interval.
    pub fn record_remove(
        &mut self,
        status_id: StatusId,
        target_id: ActorId,
        source_id: ActorId,
        timestamp: Millis,
    ) -> bool {
        if !self.accepts(source_id, target_id) {
            return false;
        }

        let end = self.normalize(timestamp);
        let closed = self.ledger.close_last(status_id, end);
        if !closed {
            tracing::trace!(status_id, end, "Removal without open interval, ignored");
        }
        closed
    }
}

impl SignalHandler for StatusTracker {
    fn handle_signal(&mut self, signal: &StatusSignal) {
        match *signal {
            StatusSignal::StatusApplied {
                status_id,
                source_id,
                target_id,
                timestamp,
            } => {
                self.record_apply(status_id, target_id, source_id, timestamp);
            }
            StatusSignal::StatusRemoved {
                status_id,
                source_id,
                target_id,
                timestamp,
            } => {
                self.record_remove(status_id, target_id, source_id, timestamp);
            }
            StatusSignal::Complete => {}
        }
    }
}
