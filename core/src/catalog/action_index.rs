//! Status -> causing action index.

use buffline_types::{ActionId, ActionInfo, StatusId};
use hashbrown::HashMap;

use super::StatusCatalog;

/// Maps each status to the single action understood to apply it.
///
/// Built once from the catalog before streaming starts. When more than one
/// action lists the same status, the last action in catalog order wins.
#[derive(Debug, Clone, Default)]
pub struct ActionIndex {
    actions: Vec<ActionInfo>,
    by_status: HashMap<StatusId, usize>,
}

impl ActionIndex {
    pub fn build(catalog: &dyn StatusCatalog) -> Self {
        let mut index = Self::default();

        for action in catalog.actions() {
            if action.statuses_applied.is_empty() {
                continue;
            }
            let slot = index.actions.len();
            index.actions.push(action.clone());

            for key in &action.statuses_applied {
                let Some(status) = catalog.status_by_key(key) else {
                    tracing::warn!(
                        action_id = action.id,
                        status_key = %key,
                        "Action applies a status missing from the catalog"
                    );
                    continue;
                };
                if let Some(prev) = index.by_status.insert(status.id, slot) {
                    tracing::debug!(
                        status_id = status.id,
                        previous_action = index.actions[prev].id,
                        action_id = action.id,
                        "Status applied by multiple actions, keeping the later one"
                    );
                }
            }
        }

        index
    }

    /// The action that applies `status_id`, if one is known
    pub fn action_for(&self, status_id: StatusId) -> Option<&ActionInfo> {
        self.by_status.get(&status_id).map(|&slot| &self.actions[slot])
    }

    pub fn action_id_for(&self, status_id: StatusId) -> Option<ActionId> {
        self.action_for(status_id).map(|a| a.id)
    }

    pub fn len(&self) -> usize {
        self.by_status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_status.is_empty()
    }
}
