//! Browser and resource cleanup functionality
//!
//! This module handles cleanup tasks after a crawl run is complete.

use anyhow::Result;
use chromiumoxide::Browser;
use log::{debug, warn};
use std::path::PathBuf;

/// Result of cleanup operations
#[derive(Debug, Clone)]
pub enum CleanupResult {
    /// All cleanup operations succeeded
    Success,
    /// Some cleanup operations failed, with error details
    PartialFailure(Vec<String>),
}

/// Close the browser and remove its profile directory.
///
/// `chrome_data_dir` is only passed for profiles created by this process; a
/// caller-supplied profile is left in place.
pub async fn cleanup_browser_and_data(
    mut browser: Browser,
    chrome_data_dir: Option<PathBuf>,
) -> Result<CleanupResult> {
    let mut errors = Vec::new();

    debug!(target: "district_scrape::cleanup", "Closing browser");
    if let Err(e) = browser.close().await {
        warn!(target: "district_scrape::cleanup", "Failed to close browser: {e}");
        errors.push(format!("Browser close failed: {e}"));
    }

    // Wait for browser process to fully exit (prevents "not closed manually" warning)
    if let Err(e) = browser.wait().await {
        warn!(target: "district_scrape::cleanup", "Failed to wait for browser exit: {e}");
        errors.push(format!("Browser wait failed: {e}"));
    } else {
        debug!(target: "district_scrape::cleanup", "Browser process exited successfully");
    }

    if let Some(dir) = chrome_data_dir {
        debug!(target: "district_scrape::cleanup", "Removing Chrome data directory {}", dir.display());
        if let Err(e) = std::fs::remove_dir_all(&dir) {
            warn!(target: "district_scrape::cleanup", "Failed to clean up Chrome data directory: {e}");
            errors.push(format!("Directory cleanup failed: {e}"));
        }
    }

    if errors.is_empty() {
        Ok(CleanupResult::Success)
    } else {
        Ok(CleanupResult::PartialFailure(errors))
    }
}
