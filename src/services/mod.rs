pub mod backup;
pub mod stats;

pub use backup::{ImportSummary, StorageUsage};
pub use stats::{BoardStats, BoardSummary, ColumnStat};
