//! Core configuration types for a crawl run
//!
//! This module contains the main `CrawlConfig` struct that defines where the
//! catalog lives, how its pages are fetched and rendered, and where the run's
//! files are written.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct for a crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Directory receiving the CSV tables, checkpoint log and run log.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder).
    pub(crate) output_dir: PathBuf,

    /// Index page listing every state
    pub(crate) states_url: String,

    /// Base for resolving relative links found on listing pages
    pub(crate) base_url: String,

    /// Shared file name prefix, e.g. `IGOD` in `20250101_IGOD_blocks.csv`
    pub(crate) file_prefix: String,

    /// Date stamp grouping the files of one run (`%Y%m%d`)
    pub(crate) run_stamp: String,

    /// Rows served per listing page; a shorter page ends pagination
    pub(crate) page_size: usize,

    /// Pause between listing page fetches
    pub(crate) page_delay_ms: u64,

    /// Per-request deadline for HTTP fetches
    pub(crate) request_timeout_secs: u64,

    pub(crate) user_agent: String,
    pub(crate) accept_language: String,

    pub(crate) headless: bool,

    /// Optional Chrome profile directory; a per-process temp dir otherwise
    pub(crate) chrome_data_dir: Option<PathBuf>,

    /// Timeout in seconds for detail page navigation
    ///
    /// Default: 30 seconds
    pub(crate) page_load_timeout_secs: u64,

    /// How long to wait for the result-count banner of a detail page
    pub(crate) banner_timeout_ms: u64,

    /// Poll budget of the render waiter on the first child-list page
    pub(crate) first_page_max_polls: u32,

    /// Poll budget of the render waiter on later child-list pages
    pub(crate) next_page_max_polls: u32,

    pub(crate) poll_interval_ms: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) scroll_back_px: i64,

    /// Unchanged polls after which a detail page counts as fully rendered
    pub(crate) stagnation_limit: u32,

    /// Escalate warnings (count mismatches, render timeouts) into errors
    pub(crate) strict: bool,

    /// Keep going with the next state when one state fails
    ///
    /// The failed state is not checkpointed and is retried on the next run.
    pub(crate) isolate_state_failures: bool,
}
