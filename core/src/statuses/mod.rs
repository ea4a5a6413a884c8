//! Status usage tracking
//!
//! ```text
//!   StatusApplied / StatusRemoved
//!              │
//!              ▼
//!      StatusTracker ──► StatusUsageLedger   (status -> [UsageInterval])
//!                                │
//!                           Complete
//!                                │
//!                                ▼
//!      RowBuilder ──► Timeline rows/items     (grouped by row key, under
//!                                              the causing action's row)
//! ```

mod ledger;
mod row_keys;
mod rows;
pub mod tracker;


pub use ledger::{StatusUsageLedger, UsageInterval};
pub use row_keys::RowKeyTable;
pub use rows::{RowBuildReport, RowBuilder};
pub use tracker::{STATUS_REAPPLY_THRESHOLD_MS, StatusTracker};
