//! Complete crawl execution against the live catalog
//!
//! Wires the real collaborators together: a `reqwest` fetcher for listing
//! pages and one Chromium page for detail pages. The browser is closed and
//! its temporary profile removed whether or not the run succeeds.

use anyhow::{Context, Result};
use log::{info, warn};

use super::cleanup::{CleanupResult, cleanup_browser_and_data};
use super::context::RunContext;
use super::orchestrator::{Orchestrator, RunSummary};
use crate::browser_setup::launch_browser;
use crate::config::CrawlConfig;
use crate::page_extractor::{ChromiumDetailPage, ReqwestFetcher};

/// Run a crawl to completion.
///
/// # Errors
///
/// Browser launch failures and the first fatal crawl error.
pub async fn crawl_impl(config: CrawlConfig) -> Result<RunSummary> {
    let mut ctx = RunContext::open(config.clone()).context("Failed to open run files")?;
    let fetcher = ReqwestFetcher::new(&config)?;

    let launched = launch_browser(
        config.headless(),
        config.chrome_data_dir().cloned(),
        config.user_agent(),
    )
    .await
    .context("Failed to launch browser")?;

    let result = match launched.browser.new_page("about:blank").await {
        Ok(page) => {
            let page = ChromiumDetailPage::new(page, config.page_load_timeout_secs());
            let mut orchestrator = Orchestrator::new(fetcher, page);
            orchestrator.run(&mut ctx).await.map_err(anyhow::Error::from)
        }
        Err(e) => Err(anyhow::Error::from(e).context("Failed to open browser page")),
    };

    // Close the browser before the handler loses its CDP connection
    match cleanup_browser_and_data(launched.browser, launched.temp_profile).await {
        Ok(CleanupResult::Success) => {}
        Ok(CleanupResult::PartialFailure(errors)) => {
            warn!("Cleanup completed with failures: {errors:?}");
        }
        Err(e) => warn!("Cleanup failed: {e}"),
    }

    info!("Aborting browser handler task");
    launched.handler_task.abort();
    if let Err(e) = launched.handler_task.await
        && !e.is_cancelled()
    {
        warn!("Handler task failed during abort: {e}");
    }

    result
}
