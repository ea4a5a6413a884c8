//! Read-only action/status catalog.
//!
//! The core never decides which statuses exist. It asks a [`StatusCatalog`]
//! and treats a missing answer as "skip".

mod action_index;

pub use action_index::ActionIndex;

use buffline_types::{ActionId, ActionInfo, StatusId, StatusInfo};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Lookup surface the tracker and row builder consume.
pub trait StatusCatalog {
    fn status(&self, id: StatusId) -> Option<&StatusInfo>;

    fn status_by_key(&self, key: &str) -> Option<&StatusInfo>;

    /// All actions, in catalog order
    fn actions(&self) -> Box<dyn Iterator<Item = &ActionInfo> + '_>;

    fn action(&self, id: ActionId) -> Option<&ActionInfo> {
        self.actions().find(|a| a.id == id)
    }
}

/// Serialized catalog layout (lists of statuses and actions).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub statuses: Vec<StatusInfo>,
    #[serde(default)]
    pub actions: Vec<ActionInfo>,
}

/// In-memory catalog with indexed lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    statuses: HashMap<StatusId, StatusInfo>,
    key_index: HashMap<String, StatusId>,
    actions: Vec<ActionInfo>,
}

impl Catalog {
    pub fn new(statuses: Vec<StatusInfo>, actions: Vec<ActionInfo>) -> Self {
        let mut catalog = Self {
            statuses: HashMap::with_capacity(statuses.len()),
            key_index: HashMap::with_capacity(statuses.len()),
            actions,
        };
        for status in statuses {
            catalog.key_index.insert(status.key.clone(), status.id);
            catalog.statuses.insert(status.id, status);
        }
        catalog
    }

    pub fn status_count(&self) -> usize {
        self.statuses.len()
    }
}

impl From<CatalogData> for Catalog {
    fn from(data: CatalogData) -> Self {
        Self::new(data.statuses, data.actions)
    }
}

impl StatusCatalog for Catalog {
    fn status(&self, id: StatusId) -> Option<&StatusInfo> {
        self.statuses.get(&id)
    }

    fn status_by_key(&self, key: &str) -> Option<&StatusInfo> {
        self.key_index.get(key).and_then(|id| self.statuses.get(id))
    }

    fn actions(&self) -> Box<dyn Iterator<Item = &ActionInfo> + '_> {
        Box::new(self.actions.iter())
    }
}
