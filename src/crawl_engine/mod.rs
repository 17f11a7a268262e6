//! Crawl Engine Module
//!
//! The traversal engine: state discovery, district pagination, child-list
//! collection with render stabilization, and the orchestrator tying them to
//! the checkpoint log and output tables.

// Sub-modules
pub mod cleanup;
pub mod collector;
pub mod context;
pub mod crawl_types;
pub mod execution;
pub mod orchestrator;
pub mod page_timeout;
pub mod paginator;
pub mod waiter;

// Re-exports for public API
pub use execution::crawl_impl;

pub use collector::{ChildCollection, collect_children};
pub use context::RunContext;
pub use crawl_types::{
    ChildKind, CrawlError, CrawlResult, District, Finding, FindingKind, Severity, State,
};
pub use orchestrator::{Orchestrator, RunSummary};
pub use paginator::{discover_states, paginate_districts};
pub use waiter::{StabilizationSettings, StabilizeOutcome, StabilizeReason, wait_for_stable};
