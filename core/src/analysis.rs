//! Per-run wiring of the status tracker and row builder.

use std::sync::Arc;

use buffline_types::{ActorId, Millis};

use crate::catalog::{ActionIndex, StatusCatalog};
use crate::config::TrackerConfig;
use crate::events::{SignalHandler, StatusSignal};
use crate::roster::Roster;
use crate::statuses::{RowBuildReport, RowBuilder, RowKeyTable, StatusTracker};
use crate::timeline::{CooldownRowProvider, CooldownRows, Timeline};

/// One analysis run for one player.
///
/// Feed signals in order; on [`StatusSignal::Complete`] the recorded
/// intervals are written to the timeline. Per-run state is dropped with the
/// analysis. The row-key table is shared and outlives it.
pub struct StatusAnalysis<C: StatusCatalog> {
    catalog: C,
    action_index: ActionIndex,
    row_keys: Arc<RowKeyTable>,
    tracker: StatusTracker,
    timeline: Timeline,
    cooldowns: Box<dyn CooldownRows + Send>,
    report: Option<RowBuildReport>,
}

impl<C: StatusCatalog> StatusAnalysis<C> {
    pub fn new(
        catalog: C,
        roster: Roster,
        player_id: ActorId,
        time_offset: Millis,
        row_keys: Arc<RowKeyTable>,
    ) -> Self {
        let action_index = ActionIndex::build(&catalog);
        tracing::debug!(indexed = action_index.len(), "Built status -> action index");

        Self {
            catalog,
            action_index,
            row_keys,
            tracker: StatusTracker::new(roster, player_id, time_offset),
            timeline: Timeline::new(),
            cooldowns: Box::new(CooldownRowProvider::new()),
            report: None,
        }
    }

    pub fn with_config(mut self, config: &TrackerConfig) -> Self {
        self.tracker = self.tracker.with_reapply_threshold(config.reapply_threshold_ms);
        self
    }

    /// Replace the default cooldown row provider
    pub fn with_cooldown_rows(mut self, cooldowns: Box<dyn CooldownRows + Send>) -> Self {
        self.cooldowns = cooldowns;
        self
    }

    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    pub fn is_complete(&self) -> bool {
        self.report.is_some()
    }

    /// Row build counts, available once the run is complete
    pub fn report(&self) -> Option<RowBuildReport> {
        self.report
    }

    /// Build rows from the recorded intervals. Runs at most once; later
    /// calls return the first report.
    pub fn complete(&mut self) -> RowBuildReport {
        if let Some(report) = self.report {
            return report;
        }

        let report = RowBuilder::new(&self.catalog, &self.action_index, &self.row_keys).build(
            self.tracker.ledger(),
            &mut self.timeline,
            self.cooldowns.as_mut(),
        );
        self.report = Some(report);
        report
    }
}

impl<C: StatusCatalog> SignalHandler for StatusAnalysis<C> {
    fn handle_signal(&mut self, signal: &StatusSignal) {
        if self.is_complete() {
            tracing::warn!(?signal, "Signal after completion, ignored");
            return;
        }
        match signal {
            StatusSignal::Complete => {
                self.complete();
            }
            _ => self.tracker.handle_signal(signal),
        }
    }
}
