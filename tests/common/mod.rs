//! Test utilities shared by the district_scrape test suite

use anyhow::Result;
use district_scrape::config::CrawlConfig;
use district_scrape::crawl_engine::{CrawlError, CrawlResult};
use district_scrape::page_extractor::js_scripts::{
    BANNER_SELECTOR, COUNT_ELEMENTS_SCRIPT, ELEMENT_TEXTS_SCRIPT, FALLBACK_ITEM_SELECTOR,
    LINK_TARGETS_SCRIPT, PAGINATION_LINK_SELECTOR, ROW_TITLE_SELECTOR,
};
use district_scrape::page_extractor::{DetailPage, HttpFetch, Scroll};
use mockito::{Mock, Server};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Origin used by the in-memory fixtures
#[allow(dead_code)]
pub const ORIGIN: &str = "https://catalog.test";

/// Poll interval of [`fast_config`]; the simulated DOM grows on waits of
/// exactly this length
#[allow(dead_code)]
pub const POLL_INTERVAL: Duration = Duration::from_millis(450);

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Wraps `body` in a minimal HTML document
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// States index page linking each `(name, href)`
#[allow(dead_code)]
pub fn states_page(states: &[(&str, &str)]) -> String {
    let items: String = states
        .iter()
        .map(|(name, href)| format!("<li><a href=\"{href}\">{name}</a></li>\n"))
        .collect();
    create_test_html(
        "States",
        &format!("<div class=\"cat-box state\"><ul>\n{items}</ul></div>"),
    )
}

/// One district row of a listing page
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct RowFixture {
    pub name: String,
    pub subdistricts_href: Option<String>,
    pub blocks_href: Option<String>,
    pub hidden: bool,
}

#[allow(dead_code)]
impl RowFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn subdistricts(mut self, href: &str) -> Self {
        self.subdistricts_href = Some(href.to_string());
        self
    }

    pub fn blocks(mut self, href: &str) -> Self {
        self.blocks_href = Some(href.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn render(&self) -> String {
        let style = if self.hidden {
            " style=\"display: none;\""
        } else {
            ""
        };
        let mut actions = String::new();
        if let Some(href) = &self.subdistricts_href {
            actions.push_str(&format!(
                "<a class=\"btn-detail\" href=\"{href}\">Sub Districts</a>"
            ));
        }
        if let Some(href) = &self.blocks_href {
            actions.push_str(&format!("<a class=\"btn-detail\" href=\"{href}\">Blocks</a>"));
        }
        format!(
            "<div class=\"search-row module\"{style}>\
             <a class=\"search-title\" href=\"#\">{}</a>\
             <div class=\"search-opts\">{actions}</div></div>\n",
            self.name
        )
    }
}

/// District listing page holding `rows`
#[allow(dead_code)]
pub fn listing_page(rows: &[RowFixture]) -> String {
    let body: String = rows.iter().map(RowFixture::render).collect();
    create_test_html("Districts", &format!("<div class=\"search-content\">{body}</div>"))
}

/// `count` plain rows named `<prefix> <n>` starting at `start`
#[allow(dead_code)]
pub fn numbered_rows(prefix: &str, start: usize, count: usize) -> Vec<RowFixture> {
    (start..start + count)
        .map(|n| RowFixture::new(&format!("{prefix} {n}")))
        .collect()
}

/// Sets up a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> Result<mockito::ServerGuard> {
    let server = Server::new_async().await;
    Ok(server)
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Config with test-friendly pacing: no listing delay, short banner wait.
#[allow(dead_code)]
pub fn fast_config(output_dir: &std::path::Path, states_url: &str) -> CrawlConfig {
    CrawlConfig::builder()
        .output_dir(output_dir)
        .states_url(states_url)
        .run_stamp("20250101")
        .file_prefix("TEST")
        .page_delay_ms(0)
        .banner_timeout_ms(10)
        .poll_interval_ms(POLL_INTERVAL.as_millis() as u64)
        .settle_delay_ms(150)
        .max_polls(40, 30)
        .build()
        .expect("test config is valid")
}

/// In-memory [`HttpFetch`] serving fixed bodies by exact URL
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeFetcher {
    bodies: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().expect("fetch log poisoned").clone()
    }
}

impl HttpFetch for FakeFetcher {
    async fn get(&self, url: &str) -> CrawlResult<String> {
        self.fetched
            .lock()
            .expect("fetch log poisoned")
            .push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| CrawlError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// One detail page of the simulated DOM
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct FakeDetail {
    pub titles: Vec<String>,
    pub fallback_items: Vec<String>,
    pub banner: Option<String>,
    /// `(href, label)` of the pagination bar
    pub links: Vec<(String, String)>,
    /// Rows rendered right after navigation
    pub initially_visible: usize,
    /// Rows appended by every poll interval wait
    pub growth_per_poll: usize,
}

#[allow(dead_code)]
impl FakeDetail {
    /// Fully rendered page with the given titles
    pub fn rendered(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            initially_visible: titles.len(),
            ..Self::default()
        }
    }

    /// Page that renders `titles` lazily, `per_poll` rows per poll interval
    pub fn lazy(titles: &[&str], initially: usize, per_poll: usize) -> Self {
        Self {
            initially_visible: initially,
            growth_per_poll: per_poll,
            ..Self::rendered(titles)
        }
    }

    pub fn banner(mut self, text: &str) -> Self {
        self.banner = Some(text.to_string());
        self
    }

    pub fn link(mut self, href: &str, label: &str) -> Self {
        self.links.push((href.to_string(), label.to_string()));
        self
    }

    pub fn fallback(mut self, items: &[&str]) -> Self {
        self.fallback_items = items.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// In-memory [`DetailPage`]: a set of detail pages keyed by URL whose rows
/// appear gradually as the caller waits.
#[derive(Debug, Default)]
pub struct SimulatedDom {
    pages: HashMap<String, FakeDetail>,
    current: Option<String>,
    visible: usize,
    pub navigations: Vec<String>,
    pub scrolls: Vec<Scroll>,
    pub waits: Vec<Duration>,
    pub count_reads: usize,
}

#[allow(dead_code)]
impl SimulatedDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, page: FakeDetail) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    fn page(&self) -> CrawlResult<&FakeDetail> {
        self.current
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .ok_or_else(|| CrawlError::Browser("no page loaded".to_string()))
    }
}

impl DetailPage for SimulatedDom {
    async fn navigate(&mut self, url: &str) -> CrawlResult<()> {
        self.navigations.push(url.to_string());
        let page = self
            .pages
            .get(url)
            .ok_or_else(|| CrawlError::Browser(format!("net::ERR_NAME_NOT_RESOLVED at {url}")))?;
        self.visible = page.initially_visible.min(page.titles.len());
        self.current = Some(url.to_string());
        Ok(())
    }

    async fn evaluate_over_elements(
        &mut self,
        selector: &str,
        function: &str,
    ) -> CrawlResult<serde_json::Value> {
        let visible = self.visible;
        if selector == ROW_TITLE_SELECTOR && function == COUNT_ELEMENTS_SCRIPT {
            self.count_reads += 1;
        }
        let page = self.page()?;
        match (selector, function) {
            (ROW_TITLE_SELECTOR, COUNT_ELEMENTS_SCRIPT) => Ok(json!(visible)),
            (ROW_TITLE_SELECTOR, ELEMENT_TEXTS_SCRIPT) => {
                let rendered = page.titles[..visible].to_vec();
                Ok(json!(rendered))
            }
            (FALLBACK_ITEM_SELECTOR, ELEMENT_TEXTS_SCRIPT) => Ok(json!(page.fallback_items)),
            (PAGINATION_LINK_SELECTOR, LINK_TARGETS_SCRIPT) => Ok(json!(
                page.links
                    .iter()
                    .map(|(href, text)| json!({ "href": href, "text": text }))
                    .collect::<Vec<_>>()
            )),
            _ => Err(CrawlError::Browser(format!(
                "unexpected script {function} over {selector}"
            ))),
        }
    }

    async fn scroll(&mut self, scroll: Scroll) -> CrawlResult<()> {
        self.scrolls.push(scroll);
        Ok(())
    }

    async fn wait(&mut self, duration: Duration) {
        self.waits.push(duration);
        if duration != POLL_INTERVAL {
            return;
        }
        if let Some(page) = self.current.as_ref().and_then(|url| self.pages.get(url)) {
            self.visible = (self.visible + page.growth_per_poll).min(page.titles.len());
        }
    }

    async fn read_visible_text(
        &mut self,
        selector: &str,
        _timeout: Duration,
    ) -> CrawlResult<Option<String>> {
        if selector != BANNER_SELECTOR {
            return Ok(None);
        }
        Ok(self.page().ok().and_then(|page| page.banner.clone()))
    }
}

/// Absolute URL on the fixture origin
#[allow(dead_code)]
pub fn fixture_url(path: &str) -> String {
    format!("{ORIGIN}{path}")
}
