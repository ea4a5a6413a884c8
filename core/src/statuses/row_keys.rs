use buffline_types::{RowKeyEntry, StatusId};
use hashbrown::HashMap;

/// Collapses related status ids (e.g. stack-rank variants of one buff) onto
/// a shared row key.
///
/// Populated by whoever knows about the variants, then frozen behind an
/// `Arc` and read by every run. Unmapped statuses use their own id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowKeyTable {
    keys: HashMap<StatusId, StatusId>,
}

impl RowKeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, status_id: StatusId, row_key: StatusId) -> Option<StatusId> {
        self.keys.insert(status_id, row_key)
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = RowKeyEntry>) {
        for entry in entries {
            self.insert(entry.status_id, entry.row_key);
        }
    }

    pub fn row_key(&self, status_id: StatusId) -> StatusId {
        self.keys.get(&status_id).copied().unwrap_or(status_id)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<RowKeyEntry> for RowKeyTable {
    fn from_iter<T: IntoIterator<Item = RowKeyEntry>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
