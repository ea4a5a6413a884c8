use serde::{Deserialize, Serialize};

use crate::{ActionId, StatusId};

/// Catalog entry for a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub id: StatusId,
    /// Stable catalog key (what `ActionInfo::statuses_applied` refers to)
    pub key: String,
    pub name: String,
    /// Nominal duration in seconds, if the status has one
    #[serde(default)]
    pub duration_secs: Option<f32>,
}

impl StatusInfo {
    /// Nominal duration in milliseconds, 0 when the status has none.
    pub fn nominal_duration_ms(&self) -> i64 {
        self.duration_secs
            .map(|secs| (secs as f64 * 1000.0).round() as i64)
            .unwrap_or(0)
    }
}

/// Catalog entry for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInfo {
    pub id: ActionId,
    pub name: String,
    /// Keys of the statuses this action applies, in catalog order
    #[serde(default)]
    pub statuses_applied: Vec<String>,
    #[serde(default)]
    pub on_gcd: bool,
}

/// One row-collapsing rule: `status_id` is drawn on the row of `row_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowKeyEntry {
    pub status_id: StatusId,
    pub row_key: StatusId,
}
