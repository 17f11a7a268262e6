//! Getter methods for `CrawlConfig`
//!
//! This module provides the accessor methods for retrieving configuration
//! values from a `CrawlConfig` instance, plus the paths derived from them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::CrawlConfig;
use crate::crawl_engine::waiter::StabilizationSettings;

impl CrawlConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn states_url(&self) -> &str {
        &self.states_url
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    #[must_use]
    pub fn run_stamp(&self) -> &str {
        &self.run_stamp
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn accept_language(&self) -> &str {
        &self.accept_language
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }

    #[must_use]
    pub fn page_load_timeout_secs(&self) -> u64 {
        self.page_load_timeout_secs
    }

    #[must_use]
    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }

    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub fn isolate_state_failures(&self) -> bool {
        self.isolate_state_failures
    }

    /// Waiter settings for the first page (`first_page == true`) or a later
    /// page of a child list.
    #[must_use]
    pub fn stabilization(&self, first_page: bool) -> StabilizationSettings {
        StabilizationSettings {
            max_polls: if first_page {
                self.first_page_max_polls
            } else {
                self.next_page_max_polls
            },
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            scroll_back_px: self.scroll_back_px,
            stagnation_limit: self.stagnation_limit,
        }
    }

    fn run_file(&self, suffix: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}{suffix}", self.run_stamp, self.file_prefix))
    }

    /// `<stamp>_<prefix>_subdistricts.csv`
    #[must_use]
    pub fn subdistrict_csv_path(&self) -> PathBuf {
        self.run_file("_subdistricts.csv")
    }

    /// `<stamp>_<prefix>_blocks.csv`
    #[must_use]
    pub fn block_csv_path(&self) -> PathBuf {
        self.run_file("_blocks.csv")
    }

    /// Checkpoint log, one finished state per line
    #[must_use]
    pub fn progress_path(&self) -> PathBuf {
        self.run_file("_progress.txt")
    }

    /// Human-readable run log
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.run_file(".log")
    }
}
