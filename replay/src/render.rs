//! Plain-text timeline listing.

use std::fmt::Write;

use buffline_core::Timeline;
use buffline_core::timeline::{RowId, TimelineSink};
use buffline_types::formatting::{format_span, format_timestamp};

/// Indented listing of every row and item, depth-first.
pub fn render_text(timeline: &Timeline) -> String {
    let mut out = String::new();
    for &child in timeline.children(timeline.root()) {
        render_row(timeline, child, 0, &mut out);
    }
    out
}

fn render_row(timeline: &Timeline, id: RowId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if let Some(row) = timeline.row(id) {
        let _ = writeln!(out, "{indent}{}", row.label);
    }
    for item in timeline.items(id) {
        let _ = writeln!(
            out,
            "{indent}  {} - {} ({}) {}",
            format_timestamp(item.start),
            format_timestamp(item.end),
            format_span(item.end.saturating_sub(item.start)),
            item.status_name
        );
    }
    for &child in timeline.children(id) {
        render_row(timeline, child, depth + 1, out);
    }
}
