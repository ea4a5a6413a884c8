pub mod analysis;
pub mod catalog;
pub mod config;
pub mod events;
pub mod roster;
pub mod statuses;
pub mod timeline;

// Re-exports for convenience
pub use analysis::StatusAnalysis;
pub use catalog::{ActionIndex, Catalog, CatalogData, StatusCatalog};
pub use config::{ConfigError, TrackerConfig, load_config};
pub use events::{SignalHandler, StatusSignal};
pub use roster::Roster;
pub use statuses::{RowKeyTable, StatusTracker, StatusUsageLedger, UsageInterval};
pub use timeline::{Timeline, TimelineNode, TimelineSink};
