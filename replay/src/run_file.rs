//! Recorded run files and replaying them through the core.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use buffline_core::statuses::RowBuildReport;
use buffline_core::{
    Catalog, CatalogData, Roster, RowKeyTable, SignalHandler, StatusAnalysis, StatusSignal,
    Timeline, TrackerConfig,
};
use buffline_types::{Actor, ActorId, Millis, RowKeyEntry, StatusId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything needed to replay one pull.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub player_id: ActorId,
    #[serde(default)]
    pub time_offset: Millis,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub catalog: CatalogData,
    /// Merged over the config's row keys
    #[serde(default)]
    pub row_keys: Vec<RowKeyEntry>,
    #[serde(default)]
    pub events: Vec<RunEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEvent {
    StatusApply {
        status_id: StatusId,
        source_id: ActorId,
        target_id: ActorId,
        timestamp: Millis,
    },
    StatusRemove {
        status_id: StatusId,
        source_id: ActorId,
        target_id: ActorId,
        timestamp: Millis,
    },
    Complete,
}

impl From<RunEvent> for StatusSignal {
    fn from(event: RunEvent) -> Self {
        match event {
            RunEvent::StatusApply {
                status_id,
                source_id,
                target_id,
                timestamp,
            } => StatusSignal::StatusApplied {
                status_id,
                source_id,
                target_id,
                timestamp,
            },
            RunEvent::StatusRemove {
                status_id,
                source_id,
                target_id,
                timestamp,
            } => StatusSignal::StatusRemoved {
                status_id,
                source_id,
                target_id,
                timestamp,
            },
            RunEvent::Complete => StatusSignal::Complete,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid run file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] buffline_core::ConfigError),
    #[error("failed to serialize timeline: {0}")]
    Output(#[source] serde_json::Error),
}

pub fn load_run_file(path: &Path) -> Result<RunFile, ReplayError> {
    let contents = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Feed the run's events through a fresh analysis and return the timeline.
///
/// A run without a terminal `complete` event is completed at end of input.
pub fn replay(run: RunFile, config: &TrackerConfig) -> (Timeline, RowBuildReport) {
    let mut row_keys: RowKeyTable = config.row_key_table();
    row_keys.extend(run.row_keys);

    let mut analysis = StatusAnalysis::new(
        Catalog::from(run.catalog),
        Roster::new(run.actors),
        run.player_id,
        run.time_offset,
        Arc::new(row_keys),
    )
    .with_config(config);

    tracing::info!(
        player_id = run.player_id,
        events = run.events.len(),
        "Replaying run"
    );

    for event in run.events {
        analysis.handle_signal(&event.into());
    }

    if !analysis.is_complete() {
        tracing::warn!("Run file has no complete event, completing at end of input");
    }
    let report = analysis.complete();

    tracing::info!(
        rows = report.rows_created,
        items = report.items_emitted,
        "Replay finished"
    );
    (analysis.into_timeline(), report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_JSON: &str = r#"{
        "player_id": 1,
        "time_offset": 500,
        "actors": [
            {"id": 1, "player_controlled": true},
            {"id": 5, "owner": 1}
        ],
        "catalog": {
            "statuses": [
                {"id": 10, "key": "DEVOTION", "name": "Devotion", "duration_secs": 15.0},
                {"id": 11, "key": "DEVOTION_II", "name": "Devotion II", "duration_secs": 15.0}
            ],
            "actions": [
                {"id": 1, "name": "Aetherpact", "statuses_applied": ["DEVOTION", "DEVOTION_II"]}
            ]
        },
        "row_keys": [{"status_id": 11, "row_key": 10}],
        "events": [
            {"type": "status_apply", "status_id": 10, "source_id": 1, "target_id": 5, "timestamp": 1500},
            {"type": "status_apply", "status_id": 10, "source_id": 1, "target_id": 5, "timestamp": 2000},
            {"type": "status_remove", "status_id": 10, "source_id": 1, "target_id": 5, "timestamp": 5500},
            {"type": "status_apply", "status_id": 11, "source_id": 5, "target_id": 5, "timestamp": 8500},
            {"type": "complete"}
        ]
    }"#;

    fn run() -> RunFile {
        serde_json::from_str(RUN_JSON).unwrap()
    }

    #[test]
    fn test_parse_run_file() {
        let run = run();
        assert_eq!(run.player_id, 1);
        assert_eq!(run.actors[1].owner, Some(1));
        assert_eq!(run.events.len(), 5);
        assert_eq!(run.events[4], RunEvent::Complete);
        assert_eq!(
            StatusSignal::from(run.events[2]),
            StatusSignal::StatusRemoved {
                status_id: 10,
                source_id: 1,
                target_id: 5,
                timestamp: 5500,
            }
        );
    }

    #[test]
    fn test_replay_builds_collapsed_row() {
        let (timeline, report) = replay(run(), &TrackerConfig::default());

        assert_eq!(report.rows_created, 1);
        assert_eq!(report.items_emitted, 2);

        let row = timeline.find_row("Devotion").unwrap();
        let spans: Vec<_> = timeline.items(row).iter().map(|i| (i.start, i.end)).collect();
        assert_eq!(spans, vec![(1000, 5000), (8000, 23_000)]);
    }

    #[test]
    fn test_replay_without_complete_event() {
        let mut run = run();
        run.events.pop();
        let (timeline, report) = replay(run, &TrackerConfig::default());

        assert_eq!(report.items_emitted, 2);
        assert_eq!(timeline.item_count(), 2);
    }

    #[test]
    fn test_missing_run_file() {
        let err = load_run_file(Path::new("/nonexistent/run.json")).unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }
}
