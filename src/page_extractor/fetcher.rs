//! HTTP collaborator for listing and index pages
//!
//! The crawl engine only needs "GET this URL and give me the body of a
//! successful response". No retries happen here: any failure is fatal for
//! the state being crawled.

use log::debug;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::config::CrawlConfig;
use crate::crawl_engine::crawl_types::{CrawlError, CrawlResult};

/// Fetches raw HTML documents.
#[allow(async_fn_in_trait)]
pub trait HttpFetch {
    /// GET `url` and return the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success statuses.
    async fn get(&self, url: &str) -> CrawlResult<String>;
}

/// `reqwest`-backed fetcher carrying the configured headers and deadline
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build a client from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns `CrawlError::Config` when the header values are not valid
    /// header text or the TLS backend cannot be initialised.
    pub fn new(config: &CrawlConfig) -> CrawlResult<Self> {
        let mut headers = HeaderMap::new();
        let language = HeaderValue::from_str(config.accept_language())
            .map_err(|e| CrawlError::Config(format!("Invalid Accept-Language: {e}")))?;
        headers.insert(ACCEPT_LANGUAGE, language);

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CrawlError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str) -> CrawlResult<String> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CrawlError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| CrawlError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}
