//! Type-safe builder for `CrawlConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the output directory and the states index URL are set before
//! building a `CrawlConfig`.

use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_BANNER_TIMEOUT_MS,
    DEFAULT_FILE_PREFIX, DEFAULT_FIRST_PAGE_MAX_POLLS, DEFAULT_NEXT_PAGE_MAX_POLLS,
    DEFAULT_PAGE_DELAY_MS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS, DEFAULT_PAGE_SIZE,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SCROLL_BACK_PX,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_STAGNATION_LIMIT, origin_of,
};
use anyhow::{Context, Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::CrawlConfig;

// Type states for the builder
pub struct WithOutputDir;
pub struct WithStatesUrl;
pub struct Complete;

pub struct CrawlConfigBuilder<State = ()> {
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) states_url: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) file_prefix: String,
    pub(crate) run_stamp: Option<String>,
    pub(crate) page_size: usize,
    pub(crate) page_delay_ms: u64,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
    pub(crate) accept_language: String,
    pub(crate) headless: bool,
    pub(crate) chrome_data_dir: Option<PathBuf>,
    pub(crate) page_load_timeout_secs: u64,
    pub(crate) banner_timeout_ms: u64,
    pub(crate) first_page_max_polls: u32,
    pub(crate) next_page_max_polls: u32,
    pub(crate) poll_interval_ms: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) scroll_back_px: i64,
    pub(crate) stagnation_limit: u32,
    pub(crate) strict: bool,
    pub(crate) isolate_state_failures: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CrawlConfigBuilder<()> {
    fn default() -> Self {
        Self {
            output_dir: None,
            states_url: None,
            base_url: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            run_stamp: None,
            page_size: DEFAULT_PAGE_SIZE,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: CHROME_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            headless: true,
            chrome_data_dir: None,
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            banner_timeout_ms: DEFAULT_BANNER_TIMEOUT_MS,
            first_page_max_polls: DEFAULT_FIRST_PAGE_MAX_POLLS,
            next_page_max_polls: DEFAULT_NEXT_PAGE_MAX_POLLS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            scroll_back_px: DEFAULT_SCROLL_BACK_PX,
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
            strict: false,
            isolate_state_failures: false,
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfig {
    /// Create a builder for configuring a `CrawlConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> CrawlConfigBuilder<()> {
        CrawlConfigBuilder::default()
    }
}

impl<State> CrawlConfigBuilder<State> {
    fn transition<Next>(self) -> CrawlConfigBuilder<Next> {
        CrawlConfigBuilder {
            output_dir: self.output_dir,
            states_url: self.states_url,
            base_url: self.base_url,
            file_prefix: self.file_prefix,
            run_stamp: self.run_stamp,
            page_size: self.page_size,
            page_delay_ms: self.page_delay_ms,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            accept_language: self.accept_language,
            headless: self.headless,
            chrome_data_dir: self.chrome_data_dir,
            page_load_timeout_secs: self.page_load_timeout_secs,
            banner_timeout_ms: self.banner_timeout_ms,
            first_page_max_polls: self.first_page_max_polls,
            next_page_max_polls: self.next_page_max_polls,
            poll_interval_ms: self.poll_interval_ms,
            settle_delay_ms: self.settle_delay_ms,
            scroll_back_px: self.scroll_back_px,
            stagnation_limit: self.stagnation_limit,
            strict: self.strict,
            isolate_state_failures: self.isolate_state_failures,
            _phantom: PhantomData,
        }
    }
}

impl CrawlConfigBuilder<()> {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> CrawlConfigBuilder<WithOutputDir> {
        self.output_dir = Some(dir.into());
        self.transition()
    }

    pub fn states_url(mut self, url: impl Into<String>) -> CrawlConfigBuilder<WithStatesUrl> {
        self.states_url = Some(url.into());
        self.transition()
    }
}

impl CrawlConfigBuilder<WithOutputDir> {
    pub fn states_url(mut self, url: impl Into<String>) -> CrawlConfigBuilder<Complete> {
        self.states_url = Some(url.into());
        self.transition()
    }
}

impl CrawlConfigBuilder<WithStatesUrl> {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> CrawlConfigBuilder<Complete> {
        self.output_dir = Some(dir.into());
        self.transition()
    }
}

impl CrawlConfigBuilder<Complete> {
    /// Validate the settings and produce the final config.
    ///
    /// # Errors
    ///
    /// Fails when the states URL does not parse, when the output directory
    /// cannot be made absolute, or when a size or poll setting is zero.
    pub fn build(self) -> Result<CrawlConfig> {
        let states_url = self
            .states_url
            .ok_or_else(|| anyhow!("states_url is required"))?;
        let output_dir = self
            .output_dir
            .ok_or_else(|| anyhow!("output_dir is required"))?;

        let base_url = match self.base_url {
            Some(base) => url::Url::parse(&base)
                .with_context(|| format!("Invalid base URL '{base}'"))?
                .to_string(),
            None => origin_of(&states_url)
                .ok_or_else(|| anyhow!("Invalid states URL '{states_url}'"))?
                .to_string(),
        };

        // Relative paths would shift with the working directory of whoever
        // resumes the run
        let output_dir = std::path::absolute(&output_dir).with_context(|| {
            format!("Failed to resolve output directory {}", output_dir.display())
        })?;

        if self.page_size == 0 {
            return Err(anyhow!("page_size must be at least 1"));
        }
        if self.first_page_max_polls == 0 || self.next_page_max_polls == 0 {
            return Err(anyhow!("poll budgets must be at least 1"));
        }
        if self.stagnation_limit == 0 {
            return Err(anyhow!("stagnation_limit must be at least 1"));
        }
        if self.file_prefix.trim().is_empty() {
            return Err(anyhow!("file_prefix must not be empty"));
        }

        let run_stamp = self
            .run_stamp
            .unwrap_or_else(|| chrono::Local::now().format("%Y%m%d").to_string());

        Ok(CrawlConfig {
            output_dir,
            states_url,
            base_url,
            file_prefix: self.file_prefix,
            run_stamp,
            page_size: self.page_size,
            page_delay_ms: self.page_delay_ms,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            accept_language: self.accept_language,
            headless: self.headless,
            chrome_data_dir: self.chrome_data_dir,
            page_load_timeout_secs: self.page_load_timeout_secs,
            banner_timeout_ms: self.banner_timeout_ms,
            first_page_max_polls: self.first_page_max_polls,
            next_page_max_polls: self.next_page_max_polls,
            poll_interval_ms: self.poll_interval_ms,
            settle_delay_ms: self.settle_delay_ms,
            scroll_back_px: self.scroll_back_px,
            stagnation_limit: self.stagnation_limit,
            strict: self.strict,
            isolate_state_failures: self.isolate_state_failures,
        })
    }
}
