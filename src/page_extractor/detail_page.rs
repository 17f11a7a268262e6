//! Browser collaborator for script-rendered detail pages
//!
//! Detail pages fill in their rows while the viewport scrolls, so they are
//! driven through a real browser page. The crawl engine depends only on the
//! five operations of [`DetailPage`]; [`ChromiumDetailPage`] implements them
//! on a `chromiumoxide` page.

use chromiumoxide::Page;
use log::trace;
use std::time::Duration;

use super::js_scripts::SCROLL_TO_BOTTOM_SCRIPT;
use crate::crawl_engine::crawl_types::{CrawlError, CrawlResult};
use crate::crawl_engine::page_timeout::with_page_timeout;

/// Scroll moves used to trigger lazy loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    /// Jump to the bottom of the document
    ToBottom,
    /// Move vertically by the given number of pixels (negative is up)
    By(i64),
}

/// One browser page under exclusive control of the caller.
///
/// Every method takes `&mut self`: navigation and scroll state belong to a
/// single unit of work at a time.
#[allow(async_fn_in_trait)]
pub trait DetailPage {
    /// Navigate to `url` and wait for the document to load.
    async fn navigate(&mut self, url: &str) -> CrawlResult<()>;

    /// Evaluate `function` (a JS function taking the element array) over every
    /// element matching `selector` and return its JSON result.
    async fn evaluate_over_elements(
        &mut self,
        selector: &str,
        function: &str,
    ) -> CrawlResult<serde_json::Value>;

    async fn scroll(&mut self, scroll: Scroll) -> CrawlResult<()>;

    async fn wait(&mut self, duration: Duration);

    /// Visible text of the first element matching `selector`, waiting up to
    /// `timeout` for it to appear. `Ok(None)` when it never does.
    async fn read_visible_text(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> CrawlResult<Option<String>>;
}

/// [`DetailPage`] backed by a `chromiumoxide` page
pub struct ChromiumDetailPage {
    page: Page,
    navigation_timeout_secs: u64,
}

impl ChromiumDetailPage {
    #[must_use]
    pub fn new(page: Page, navigation_timeout_secs: u64) -> Self {
        Self {
            page,
            navigation_timeout_secs,
        }
    }

    #[must_use]
    pub fn inner(&self) -> &Page {
        &self.page
    }
}

fn browser_err(e: impl std::fmt::Display) -> CrawlError {
    CrawlError::Browser(e.to_string())
}

impl DetailPage for ChromiumDetailPage {
    async fn navigate(&mut self, url: &str) -> CrawlResult<()> {
        let page = &self.page;
        with_page_timeout(
            async {
                page.goto(url).await.map_err(browser_err)?;
                Ok::<(), CrawlError>(())
            },
            self.navigation_timeout_secs,
            "Page navigation",
        )
        .await
    }

    async fn evaluate_over_elements(
        &mut self,
        selector: &str,
        function: &str,
    ) -> CrawlResult<serde_json::Value> {
        let selector_literal = serde_json::to_string(selector).map_err(browser_err)?;
        let script = format!(
            "(() => {{ const els = Array.from(document.querySelectorAll({selector_literal})); \
             return ({function})(els); }})()"
        );
        let result = self.page.evaluate(script.as_str()).await.map_err(browser_err)?;
        result
            .into_value::<serde_json::Value>()
            .map_err(|e| CrawlError::Browser(format!("Script returned no value: {e}")))
    }

    async fn scroll(&mut self, scroll: Scroll) -> CrawlResult<()> {
        let script = match scroll {
            Scroll::ToBottom => SCROLL_TO_BOTTOM_SCRIPT.to_string(),
            Scroll::By(dy) => format!("window.scrollBy(0, {dy})"),
        };
        self.page.evaluate(script.as_str()).await.map_err(browser_err)?;
        Ok(())
    }

    async fn wait(&mut self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn read_visible_text(
        &mut self,
        selector: &str,
        timeout: Duration,
    ) -> CrawlResult<Option<String>> {
        let poll_interval = Duration::from_millis(100);
        let page = &self.page;
        let lookup = async {
            loop {
                if let Ok(element) = page.find_element(selector).await {
                    match element.inner_text().await {
                        Ok(text) => return text,
                        Err(e) => trace!("inner_text failed for {selector}: {e}"),
                    }
                }
                tokio::time::sleep(poll_interval).await;
            }
        };
        Ok(tokio::time::timeout(timeout, lookup).await.ok().flatten())
    }
}
