//! Timeline row/item model
//!
//! Rows form a tree rooted at [`Timeline::root`]. Each row carries display
//! items (status intervals). Rendering is someone else's problem; this module
//! only stores the tree and serializes it.

mod cooldowns;

pub use cooldowns::{CooldownRowProvider, CooldownRows, GCD_ROW_LABEL};

use buffline_types::{Millis, StatusId};
use serde::{Deserialize, Serialize};

/// Handle to a row inside a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(usize);

/// Row display properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleRow {
    pub label: String,
    /// Row starts visually collapsed
    #[serde(default)]
    pub hide_collapsed: bool,
}

impl SimpleRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hide_collapsed: false,
        }
    }

    pub fn collapsed(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hide_collapsed: true,
        }
    }
}

/// One finished status interval on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusItem {
    pub status_id: StatusId,
    pub status_name: String,
    pub start: Millis,
    pub end: Millis,
}

/// Where the row builder writes rows and items.
pub trait TimelineSink {
    fn root(&self) -> RowId;

    fn add_row(&mut self, parent: RowId, row: SimpleRow) -> RowId;

    fn add_item(&mut self, row: RowId, item: StatusItem);
}

#[derive(Debug, Clone)]
struct RowNode {
    row: SimpleRow,
    parent: Option<RowId>,
    children: Vec<RowId>,
    items: Vec<StatusItem>,
}

impl RowNode {
    fn new(row: SimpleRow, parent: Option<RowId>) -> Self {
        Self {
            row,
            parent,
            children: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// Arena-backed timeline tree.
#[derive(Debug, Clone)]
pub struct Timeline {
    nodes: Vec<RowNode>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            nodes: vec![RowNode::new(SimpleRow::new("Timeline"), None)],
        }
    }

    pub fn row(&self, id: RowId) -> Option<&SimpleRow> {
        self.nodes.get(id.0).map(|n| &n.row)
    }

    pub fn parent(&self, id: RowId) -> Option<RowId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: RowId) -> &[RowId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn items(&self, id: RowId) -> &[StatusItem] {
        self.nodes
            .get(id.0)
            .map(|n| n.items.as_slice())
            .unwrap_or(&[])
    }

    /// Number of rows, root included
    pub fn row_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn item_count(&self) -> usize {
        self.nodes.iter().map(|n| n.items.len()).sum()
    }

    /// First row with this label, in creation order
    pub fn find_row(&self, label: &str) -> Option<RowId> {
        self.nodes
            .iter()
            .position(|n| n.row.label == label)
            .map(RowId)
    }

    /// Owned tree snapshot for serialization.
    pub fn to_tree(&self) -> TimelineNode {
        self.node_tree(self.root())
    }

    fn node_tree(&self, id: RowId) -> TimelineNode {
        let node = &self.nodes[id.0];
        TimelineNode {
            label: node.row.label.clone(),
            hide_collapsed: node.row.hide_collapsed,
            items: node.items.clone(),
            children: node.children.iter().map(|&c| self.node_tree(c)).collect(),
        }
    }
}

impl TimelineSink for Timeline {
    fn root(&self) -> RowId {
        RowId(0)
    }

    fn add_row(&mut self, parent: RowId, row: SimpleRow) -> RowId {
        let parent = if parent.0 < self.nodes.len() {
            parent
        } else {
            tracing::error!(parent = parent.0, "BUG: unknown parent row, attaching to root");
            self.root()
        };
        let id = RowId(self.nodes.len());
        self.nodes.push(RowNode::new(row, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn add_item(&mut self, row: RowId, item: StatusItem) {
        let Some(node) = self.nodes.get_mut(row.0) else {
            tracing::error!(row = row.0, status_id = item.status_id, "BUG: item for unknown row");
            return;
        };
        node.items.push(item);
    }
}

/// Serializable timeline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineNode {
    pub label: String,
    pub hide_collapsed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<StatusItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TimelineNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status_id: StatusId, start: Millis, end: Millis) -> StatusItem {
        StatusItem {
            status_id,
            status_name: format!("status {status_id}"),
            start,
            end,
        }
    }

    #[test]
    fn test_rows_nest_under_parent() {
        let mut timeline = Timeline::new();
        let root = timeline.root();
        let gcd = timeline.add_row(root, SimpleRow::new("GCD"));
        let child = timeline.add_row(gcd, SimpleRow::collapsed("Devotion"));

        assert_eq!(timeline.row_count(), 3);
        assert_eq!(timeline.children(root), &[gcd]);
        assert_eq!(timeline.children(gcd), &[child]);
        assert_eq!(timeline.parent(child), Some(gcd));
        assert!(timeline.row(child).unwrap().hide_collapsed);
    }

    #[test]
    fn test_items_attach_to_row() {
        let mut timeline = Timeline::new();
        let row = timeline.add_row(timeline.root(), SimpleRow::new("Row"));
        timeline.add_item(row, item(10, 1000, 5000));
        timeline.add_item(row, item(10, 8000, 23000));

        assert_eq!(timeline.items(row).len(), 2);
        assert_eq!(timeline.item_count(), 2);
        assert_eq!(timeline.items(row)[1].start, 8000);
    }

    #[test]
    fn test_unknown_parent_falls_back_to_root() {
        let mut timeline = Timeline::new();
        let row = timeline.add_row(RowId(42), SimpleRow::new("Orphan"));
        assert_eq!(timeline.parent(row), Some(timeline.root()));
    }

    #[test]
    fn test_tree_serializes_nested() {
        let mut timeline = Timeline::new();
        let gcd = timeline.add_row(timeline.root(), SimpleRow::new("GCD"));
        let row = timeline.add_row(gcd, SimpleRow::collapsed("Devotion"));
        timeline.add_item(row, item(10, 0, 15000));

        let tree = timeline.to_tree();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].children[0].items.len(), 1);

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["children"][0]["label"], "GCD");
        assert_eq!(json["children"][0]["children"][0]["items"][0]["end"], 15000);
        assert!(json.get("items").is_none(), "empty item lists are omitted");
    }
}
