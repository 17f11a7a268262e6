//! Deadline wrapper for browser operations
//!
//! A detail page that never finishes loading would otherwise stall the whole
//! run, since only one page is crawled at a time.

use std::future::Future;
use std::time::Duration;

use super::crawl_types::{CrawlError, CrawlResult};

/// Run `operation`, failing with [`CrawlError::Timeout`] after `timeout_secs`.
///
/// `operation_name` only labels the error.
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> CrawlResult<T>
where
    F: Future<Output = CrawlResult<T>>,
{
    tokio::time::timeout(Duration::from_secs(timeout_secs), operation)
        .await
        .unwrap_or_else(|_| {
            Err(CrawlError::Timeout {
                operation: operation_name.to_string(),
                secs: timeout_secs,
            })
        })
}
