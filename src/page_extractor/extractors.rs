//! Readers for the rendered state of a detail page
//!
//! Thin functions over [`DetailPage`] that turn script results into row
//! counts, child names, the announced total and the pagination targets.

use log::{debug, trace};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

use super::detail_page::DetailPage;
use super::js_scripts::{
    BANNER_SELECTOR, COUNT_ELEMENTS_SCRIPT, ELEMENT_TEXTS_SCRIPT, FALLBACK_ITEM_SELECTOR,
    LINK_TARGETS_SCRIPT, PAGINATION_LINK_SELECTOR, ROW_TITLE_SELECTOR,
};
use crate::crawl_engine::crawl_types::{CrawlError, CrawlResult};
use crate::utils::{clean, first_integer};

#[derive(Debug, Deserialize)]
struct LinkTarget {
    href: String,
    text: String,
}

/// Number of rendered child rows. A failing script counts as zero rows.
pub async fn row_count<P: DetailPage>(page: &mut P) -> usize {
    match page
        .evaluate_over_elements(ROW_TITLE_SELECTOR, COUNT_ELEMENTS_SCRIPT)
        .await
    {
        Ok(value) => value.as_u64().map_or(0, |n| n as usize),
        Err(e) => {
            trace!("Row count unavailable, treating as 0: {e}");
            0
        }
    }
}

/// Total announced by the page banner, if any.
pub async fn expected_count<P: DetailPage>(page: &mut P, timeout: Duration) -> Option<usize> {
    match page.read_visible_text(BANNER_SELECTOR, timeout).await {
        Ok(Some(text)) => first_integer(&text),
        Ok(None) => None,
        Err(e) => {
            debug!("Banner unreadable: {e}");
            None
        }
    }
}

/// Cleaned child names currently rendered, in document order.
///
/// Falls back to plain list items when no row titles are present and drops
/// "Source: ..." attribution lines. Names are not deduplicated here.
pub async fn child_names<P: DetailPage>(page: &mut P) -> CrawlResult<Vec<String>> {
    let mut raw = texts(page, ROW_TITLE_SELECTOR).await?;
    if raw.is_empty() {
        raw = texts(page, FALLBACK_ITEM_SELECTOR).await?;
    }
    Ok(raw
        .iter()
        .map(|n| clean(n))
        .filter(|n| !n.is_empty() && !n.to_lowercase().starts_with("source:"))
        .collect())
}

/// Numeric pagination targets of the current page, deduplicated by href.
///
/// A page whose links cannot be read is treated as unpaginated.
pub async fn pagination_links<P: DetailPage>(page: &mut P) -> Vec<String> {
    let value = match page
        .evaluate_over_elements(PAGINATION_LINK_SELECTOR, LINK_TARGETS_SCRIPT)
        .await
    {
        Ok(value) => value,
        Err(e) => {
            debug!("Pagination links unreadable: {e}");
            return Vec::new();
        }
    };
    let links: Vec<LinkTarget> = match serde_json::from_value(value) {
        Ok(links) => links,
        Err(e) => {
            debug!("Unexpected pagination link shape: {e}");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| is_page_number(&link.text))
        .filter(|link| seen.insert(link.href.clone()))
        .map(|link| link.href)
        .collect()
}

fn is_page_number(label: &str) -> bool {
    let label = label.trim();
    !label.is_empty() && label.chars().all(|c| c.is_ascii_digit())
}

async fn texts<P: DetailPage>(page: &mut P, selector: &str) -> CrawlResult<Vec<String>> {
    let value = page
        .evaluate_over_elements(selector, ELEMENT_TEXTS_SCRIPT)
        .await?;
    serde_json::from_value(value)
        .map_err(|e| CrawlError::Browser(format!("Unexpected text list from '{selector}': {e}")))
}
