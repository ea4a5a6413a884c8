//! Row builder
//!
//! Runs once after the event stream completes. Places every recorded status
//! on a row under its causing action's cooldown row (or the GCD row) and
//! emits one item per usage interval.

use buffline_types::{StatusId, StatusInfo};
use hashbrown::HashMap;
use serde::Serialize;

use crate::catalog::{ActionIndex, StatusCatalog};
use crate::timeline::{CooldownRows, RowId, SimpleRow, StatusItem, TimelineSink};

use super::{RowKeyTable, StatusUsageLedger};

/// Counts from one row-building pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RowBuildReport {
    pub rows_created: usize,
    pub items_emitted: usize,
    /// Statuses dropped because the catalog has no entry
    pub skipped_unknown_status: usize,
    /// Statuses dropped because no action is known to apply them
    pub skipped_no_action: usize,
}

pub struct RowBuilder<'a> {
    catalog: &'a dyn StatusCatalog,
    action_index: &'a ActionIndex,
    row_keys: &'a RowKeyTable,
    /// Row key -> created row
    rows: HashMap<StatusId, RowId>,
}

impl<'a> RowBuilder<'a> {
    pub fn new(
        catalog: &'a dyn StatusCatalog,
        action_index: &'a ActionIndex,
        row_keys: &'a RowKeyTable,
    ) -> Self {
        Self {
            catalog,
            action_index,
            row_keys,
            rows: HashMap::new(),
        }
    }

    /// Materialize rows and items for every status in the ledger.
    pub fn build(
        mut self,
        ledger: &StatusUsageLedger,
        sink: &mut dyn TimelineSink,
        cooldowns: &mut dyn CooldownRows,
    ) -> RowBuildReport {
        let catalog = self.catalog;
        let mut report = RowBuildReport::default();

        for (status_id, usages) in ledger.iter() {
            let Some(status) = catalog.status(status_id) else {
                tracing::debug!(status_id, "Status missing from catalog, dropping intervals");
                report.skipped_unknown_status += 1;
                continue;
            };

            let Some(row) = self.row_for_status(status, sink, cooldowns, &mut report) else {
                report.skipped_no_action += 1;
                continue;
            };

            let nominal_ms = status.nominal_duration_ms();
            for usage in usages {
                sink.add_item(
                    row,
                    StatusItem {
                        status_id: status.id,
                        status_name: status.name.clone(),
                        start: usage.start,
                        end: usage.end_or(nominal_ms),
                    },
                );
                report.items_emitted += 1;
            }
        }

        tracing::debug!(
            rows = report.rows_created,
            items = report.items_emitted,
            skipped_unknown = report.skipped_unknown_status,
            skipped_no_action = report.skipped_no_action,
            "Status rows built"
        );
        report
    }

    /// Existing row for the status's row key, or a new one under its parent.
    /// None when no action is known to apply the status.
    fn row_for_status(
        &mut self,
        status: &StatusInfo,
        sink: &mut dyn TimelineSink,
        cooldowns: &mut dyn CooldownRows,
        report: &mut RowBuildReport,
    ) -> Option<RowId> {
        let key = self.row_keys.row_key(status.id);
        if let Some(&row) = self.rows.get(&key) {
            return Some(row);
        }

        let action_index = self.action_index;
        let Some(action) = action_index.action_for(status.id) else {
            tracing::debug!(status_id = status.id, "No action applies status, dropping intervals");
            return None;
        };

        let parent = if action.on_gcd {
            cooldowns.gcd_row(sink)
        } else {
            cooldowns.action_row(sink, action)
        };
        let row = sink.add_row(parent, SimpleRow::collapsed(status.name.clone()));
        self.rows.insert(key, row);
        report.rows_created += 1;

        tracing::trace!(status_id = status.id, row_key = key, action_id = action.id, "Created status row");
        Some(row)
    }
}
