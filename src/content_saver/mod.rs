//! Persistence of crawl output: tables, checkpoints and the run log

// Module declarations
pub mod checkpoint;
pub mod csv_tables;
pub mod run_log;

// Re-export public API from checkpoint module
pub use checkpoint::CheckpointStore;

// Re-export public API from csv_tables module
pub use csv_tables::{OutputTables, TableWriter};

// Re-export public API from run_log module
pub use run_log::{RunLog, latest_log_tail};
