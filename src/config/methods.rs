//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use std::path::PathBuf;

use super::builder::CrawlConfigBuilder;

impl<State> CrawlConfigBuilder<State> {
    /// Override the base used to absolutize relative links.
    ///
    /// Defaults to the origin of the states URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Pin the date stamp of the run files.
    ///
    /// A resumed run only sees the checkpoints written under the same stamp,
    /// so pinning it lets a crawl that crosses midnight keep its progress.
    ///
    /// ```rust
    /// # use district_scrape::config::CrawlConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = CrawlConfig::builder()
    ///     .output_dir("./data")
    ///     .states_url("https://igod.gov.in/sg/district/states")
    ///     .run_stamp("20250101")
    ///     .build()?;
    /// assert_eq!(config.run_stamp(), "20250101");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn run_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.run_stamp = Some(stamp.into());
        self
    }

    #[must_use]
    pub fn page_size(mut self, rows: usize) -> Self {
        self.page_size = rows;
        self
    }

    #[must_use]
    pub fn page_delay_ms(mut self, ms: u64) -> Self {
        self.page_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = value.into();
        self
    }

    /// Set browser headless mode (visible vs invisible browser window)
    ///
    /// Headed mode is only useful when watching the detail pages render while
    /// debugging selectors; it needs a display server.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chrome_data_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn banner_timeout_ms(mut self, ms: u64) -> Self {
        self.banner_timeout_ms = ms;
        self
    }

    /// Poll budgets of the render waiter for the first and for later pages
    /// of a child list.
    #[must_use]
    pub fn max_polls(mut self, first_page: u32, next_pages: u32) -> Self {
        self.first_page_max_polls = first_page;
        self.next_page_max_polls = next_pages;
        self
    }

    #[must_use]
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    #[must_use]
    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn scroll_back_px(mut self, px: i64) -> Self {
        self.scroll_back_px = px;
        self
    }

    #[must_use]
    pub fn stagnation_limit(mut self, polls: u32) -> Self {
        self.stagnation_limit = polls;
        self
    }

    /// Turn count mismatches and render timeouts into errors.
    ///
    /// Off by default: the crawl keeps whatever was rendered and logs a
    /// warning.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Continue with the next state after a fatal error instead of aborting
    /// the whole run.
    #[must_use]
    pub fn isolate_state_failures(mut self, isolate: bool) -> Self {
        self.isolate_state_failures = isolate;
        self
    }
}
