//! Tracker configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! reapply_threshold_ms = 2000
//!
//! [[row_key]]
//! status_id = 1002
//! row_key = 1001
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use buffline_types::RowKeyEntry;
use serde::Deserialize;
use thiserror::Error;

use crate::statuses::{RowKeyTable, STATUS_REAPPLY_THRESHOLD_MS};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackerConfig {
    /// Reapplications starting within this many ms of an existing interval
    /// start are folded into it
    #[serde(default = "default_reapply_threshold_ms")]
    pub reapply_threshold_ms: i64,

    /// Row-collapsing rules
    #[serde(default, rename = "row_key")]
    pub row_keys: Vec<RowKeyEntry>,
}

fn default_reapply_threshold_ms() -> i64 {
    STATUS_REAPPLY_THRESHOLD_MS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reapply_threshold_ms: STATUS_REAPPLY_THRESHOLD_MS,
            row_keys: Vec::new(),
        }
    }
}

impl TrackerConfig {
    pub fn row_key_table(&self) -> RowKeyTable {
        self.row_keys.iter().copied().collect()
    }
}

/// Load a tracker config from a TOML file
pub fn load_config(path: &Path) -> Result<TrackerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Default config file location (`<config dir>/buffline/tracker.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("buffline").join("tracker.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
