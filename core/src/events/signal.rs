use buffline_types::{ActorId, Millis, StatusId};

/// Signals delivered by the event source, in chronological order.
///
/// Timestamps are raw (not yet offset-normalized). `Complete` is terminal:
/// the source never sends anything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSignal {
    StatusApplied {
        status_id: StatusId,
        source_id: ActorId,
        target_id: ActorId,
        timestamp: Millis,
    },
    StatusRemoved {
        status_id: StatusId,
        source_id: ActorId,
        target_id: ActorId,
        timestamp: Millis,
    },
    Complete,
}
