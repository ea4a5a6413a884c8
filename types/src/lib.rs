//! Shared types for buffline crates.
//!
//! Everything here is plain data: ids, roster actors and catalog records.
//! The crates that consume them own the behaviour.

pub mod formatting;

mod catalog;
mod roster;

pub use catalog::{ActionInfo, RowKeyEntry, StatusInfo};
pub use roster::Actor;

/// Game status (buff/debuff) identifier.
pub type StatusId = u64;

/// Game action (ability) identifier.
pub type ActionId = u64;

/// Actor identifier within a single pull.
pub type ActorId = i64;

/// Timestamp in milliseconds. Raw event timestamps and normalized
/// (offset-subtracted) timestamps share this type.
pub type Millis = i64;
