pub mod browser_setup;
pub mod config;
pub mod content_saver;
pub mod crawl_engine;
pub mod page_extractor;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::CrawlConfig;
pub use content_saver::{CheckpointStore, OutputTables, RunLog, latest_log_tail};
pub use crawl_engine::{
    ChildCollection, ChildKind, CrawlError, CrawlResult, District, Finding, FindingKind,
    Orchestrator, RunContext, RunSummary, Severity, State,
};
pub use page_extractor::{DetailPage, HttpFetch, Scroll};

/// Crawl the whole catalog described by `config` against the live site.
///
/// Already-checkpointed states are skipped, so calling this again after an
/// interruption resumes where the previous run stopped.
///
/// # Errors
///
/// Returns an error if the browser cannot be launched or a state fails
/// while `isolate_state_failures` is off.
pub async fn crawl(config: CrawlConfig) -> anyhow::Result<RunSummary> {
    crawl_engine::crawl_impl(config).await
}
