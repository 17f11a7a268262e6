//! State discovery and query-parameter pagination of district listings
//!
//! Listing pages are plain server-rendered HTML paged with `?page=N`. A page
//! holding fewer rows than the configured page size (or none) is the last.

use log::debug;
use std::collections::HashSet;
use url::Url;

use super::crawl_types::{CrawlError, CrawlResult, District, State};
use crate::config::CrawlConfig;
use crate::content_saver::RunLog;
use crate::page_extractor::{HttpFetch, parse_district_rows, parse_states};
use crate::utils::{dedup_key, with_page_param};

fn base_url(config: &CrawlConfig) -> CrawlResult<Url> {
    Url::parse(config.base_url())
        .map_err(|e| CrawlError::Config(format!("Invalid base URL '{}': {e}", config.base_url())))
}

/// Fetch the states index and list every state in document order.
///
/// # Errors
///
/// Fetch failures of the index page.
pub async fn discover_states<F: HttpFetch>(
    fetcher: &F,
    config: &CrawlConfig,
) -> CrawlResult<Vec<State>> {
    let base = base_url(config)?;
    let body = fetcher.get(config.states_url()).await?;
    let states = parse_states(&body, &base);
    debug!("Discovered {} states", states.len());
    Ok(states)
}

/// Walk `listing_url?page=1,2,...` and return the unique districts.
///
/// Districts are keyed by their normalized name; the first occurrence wins.
///
/// # Errors
///
/// Any fetch failure; pages already read are discarded.
pub async fn paginate_districts<F: HttpFetch>(
    fetcher: &F,
    listing_url: &str,
    config: &CrawlConfig,
    run_log: &mut RunLog,
) -> CrawlResult<Vec<District>> {
    let base = base_url(config)?;
    let mut districts = Vec::new();
    let mut seen = HashSet::new();
    let mut page_no = 1u32;

    loop {
        let body = fetcher.get(&with_page_param(listing_url, page_no)).await?;
        let rows = parse_district_rows(&body, &base);
        let row_count = rows.len();

        let mut added = 0usize;
        for district in rows {
            if seen.insert(dedup_key(&district.name)) {
                districts.push(district);
                added += 1;
            }
        }
        run_log.info(format!("    districts page {page_no}: +{added}"));

        if row_count == 0 || row_count < config.page_size() {
            break;
        }
        page_no += 1;
        tokio::time::sleep(config.page_delay()).await;
    }

    Ok(districts)
}
