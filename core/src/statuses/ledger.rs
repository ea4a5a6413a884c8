use buffline_types::{Millis, StatusId};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// One continuous period a status was considered active.
///
/// Timestamps are normalized. `end` is `None` while the interval is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageInterval {
    pub start: Millis,
    pub end: Option<Millis>,
}

impl UsageInterval {
    pub fn open(start: Millis) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// End to display, falling back to `start + nominal_ms` when no removal
    /// closed the interval.
    pub fn end_or(&self, nominal_ms: i64) -> Millis {
        self.end.unwrap_or(self.start.saturating_add(nominal_ms))
    }
}

/// Ordered usage intervals per status.
///
/// Statuses iterate in first-seen order; intervals within a status in
/// append (event) order. Only the last interval of a status can be open.
#[derive(Debug, Clone, Default)]
pub struct StatusUsageLedger {
    order: Vec<StatusId>,
    usages: HashMap<StatusId, Vec<UsageInterval>>,
}

impl StatusUsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intervals(&self, status_id: StatusId) -> &[UsageInterval] {
        self.usages
            .get(&status_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if any recorded start for this status lies within `threshold_ms`
    /// of `timestamp` (either side, inclusive). A negative threshold matches
    /// nothing.
    pub fn has_start_near(&self, status_id: StatusId, timestamp: Millis, threshold_ms: i64) -> bool {
        let Ok(threshold) = u64::try_from(threshold_ms) else {
            return false;
        };
        self.intervals(status_id)
            .iter()
            .any(|usage| timestamp.abs_diff(usage.start) <= threshold)
    }

    pub fn push_open(&mut self, status_id: StatusId, start: Millis) {
        let usages = self.usages.entry(status_id).or_insert_with(|| {
            self.order.push(status_id);
            Vec::new()
        });
        usages.push(UsageInterval::open(start));
    }

    /// Close the most recent interval of `status_id` if it is still open.
    /// Returns false when there was nothing to close.
    pub fn close_last(&mut self, status_id: StatusId, end: Millis) -> bool {
        match self.usages.get_mut(&status_id).and_then(|u| u.last_mut()) {
            Some(last) if last.is_open() => {
                last.end = Some(end);
                true
            }
            _ => false,
        }
    }

    /// `(status, intervals)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (StatusId, &[UsageInterval])> {
        self.order
            .iter()
            .map(|&id| (id, self.intervals(id)))
    }

    pub fn status_count(&self) -> usize {
        self.order.len()
    }

    pub fn interval_count(&self) -> usize {
        self.usages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_first_seen_order() {
        let mut ledger = StatusUsageLedger::new();
        ledger.push_open(30, 0);
        ledger.push_open(10, 100);
        ledger.push_open(30, 5000);

        let ids: Vec<StatusId> = ledger.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![30, 10]);
        assert_eq!(ledger.intervals(30).len(), 2);
        assert_eq!(ledger.interval_count(), 3);
    }

    #[test]
    fn test_close_last_only_touches_tail() {
        let mut ledger = StatusUsageLedger::new();
        ledger.push_open(10, 0);
        ledger.push_open(10, 5000);

        assert!(ledger.close_last(10, 6000));
        assert_eq!(ledger.intervals(10)[0].end, None);
        assert_eq!(ledger.intervals(10)[1].end, Some(6000));
        assert!(!ledger.close_last(10, 7000), "tail already closed");
        assert!(!ledger.close_last(99, 7000), "unknown status");
    }

    #[test]
    fn test_has_start_near_is_inclusive_both_sides() {
        let mut ledger = StatusUsageLedger::new();
        ledger.push_open(10, 5000);

        assert!(ledger.has_start_near(10, 7000, 2000));
        assert!(ledger.has_start_near(10, 3000, 2000));
        assert!(!ledger.has_start_near(10, 7001, 2000));
        assert!(!ledger.has_start_near(11, 5000, 2000));
    }

    #[test]
    fn test_end_or_fallback() {
        let open = UsageInterval::open(8000);
        assert_eq!(open.end_or(15_000), 23_000);
        let closed = UsageInterval { start: 1000, end: Some(5000) };
        assert_eq!(closed.end_or(15_000), 5000);
    }

    #[test]
    fn test_end_or_saturates() {
        let open = UsageInterval::open(i64::MAX - 10);
        assert_eq!(open.end_or(15_000), i64::MAX);
    }

    #[test]
    fn test_has_start_near_far_apart_extremes() {
        let mut ledger = StatusUsageLedger::new();
        ledger.push_open(10, i64::MIN + 10);

        assert!(!ledger.has_start_near(10, i64::MAX - 10, 2000));
        assert!(ledger.has_start_near(10, i64::MIN, 2000));
    }

    #[test]
    fn test_negative_threshold_matches_nothing() {
        let mut ledger = StatusUsageLedger::new();
        ledger.push_open(10, 5000);
        assert!(!ledger.has_start_near(10, 5000, -1));
    }
}
