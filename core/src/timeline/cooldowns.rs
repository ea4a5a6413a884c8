//! Parent row providers for status rows.

use buffline_types::{ActionId, ActionInfo};
use hashbrown::HashMap;

use super::{RowId, SimpleRow, TimelineSink};

pub const GCD_ROW_LABEL: &str = "Global Cooldown";

/// Supplies the parent rows status rows hang under.
pub trait CooldownRows {
    /// The single shared row for actions on the global cooldown
    fn gcd_row(&mut self, sink: &mut dyn TimelineSink) -> RowId;

    /// The dedicated row for `action`, created on first request
    fn action_row(&mut self, sink: &mut dyn TimelineSink, action: &ActionInfo) -> RowId;
}

/// Creates the GCD row and per-action rows lazily under the timeline root.
#[derive(Debug, Clone, Default)]
pub struct CooldownRowProvider {
    gcd: Option<RowId>,
    actions: HashMap<ActionId, RowId>,
}

impl CooldownRowProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_row_count(&self) -> usize {
        self.actions.len()
    }
}

impl CooldownRows for CooldownRowProvider {
    fn gcd_row(&mut self, sink: &mut dyn TimelineSink) -> RowId {
        *self.gcd.get_or_insert_with(|| {
            let root = sink.root();
            sink.add_row(root, SimpleRow::new(GCD_ROW_LABEL))
        })
    }

    fn action_row(&mut self, sink: &mut dyn TimelineSink, action: &ActionInfo) -> RowId {
        *self.actions.entry(action.id).or_insert_with(|| {
            let root = sink.root();
            sink.add_row(root, SimpleRow::new(action.name.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;

    fn action(id: ActionId, name: &str) -> ActionInfo {
        ActionInfo {
            id,
            name: name.to_string(),
            statuses_applied: vec![],
            on_gcd: false,
        }
    }

    #[test]
    fn test_gcd_row_created_once() {
        let mut timeline = Timeline::new();
        let mut provider = CooldownRowProvider::new();

        let first = provider.gcd_row(&mut timeline);
        let second = provider.gcd_row(&mut timeline);

        assert_eq!(first, second);
        assert_eq!(timeline.row_count(), 2);
        assert_eq!(timeline.row(first).unwrap().label, GCD_ROW_LABEL);
    }

    #[test]
    fn test_action_rows_per_action() {
        let mut timeline = Timeline::new();
        let mut provider = CooldownRowProvider::new();

        let a = provider.action_row(&mut timeline, &action(1, "Aetherpact"));
        let b = provider.action_row(&mut timeline, &action(2, "Summon Bahamut"));
        let a_again = provider.action_row(&mut timeline, &action(1, "Aetherpact"));

        assert_ne!(a, b);
        assert_eq!(a, a_again);
        assert_eq!(provider.action_row_count(), 2);
        assert_eq!(timeline.row(b).unwrap().label, "Summon Bahamut");
    }
}
