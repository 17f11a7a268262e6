//! HTML parsing of the states index and the district listing pages
//!
//! Both page kinds are server-rendered, so they are parsed from the raw HTTP
//! body with `scraper` instead of going through the browser.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::crawl_engine::crawl_types::{District, State};
use crate::utils::{absolutize, clean};

// CSS Selectors for the catalog's listing markup.
// Hardcoded selectors should NEVER fail to parse - if they do, it's a compile-time bug.
static STATE_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.cat-box.state ul li a[href]")
        .expect("BUG: hardcoded CSS selector for state links is invalid")
});

static DISTRICT_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.search-result-row, .search-row, .search-row.module, .module.search-row")
        .expect("BUG: hardcoded CSS selector for district rows is invalid")
});

static ROW_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.search-title, div.search-title")
        .expect("BUG: hardcoded CSS selector for row titles is invalid")
});

static ROW_ACTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.search-opts a.btn-detail[href]")
        .expect("BUG: hardcoded CSS selector for row actions is invalid")
});

/// Read the state links of the states index page, in document order.
#[must_use]
pub fn parse_states(html: &str, base: &Url) -> Vec<State> {
    let document = Html::parse_document(html);
    document
        .select(&STATE_LINK_SELECTOR)
        .filter_map(|a| {
            let name = clean(&text_of(a));
            let listing_url = absolutize(base, a.value().attr("href")?)?;
            (!name.is_empty()).then_some(State { name, listing_url })
        })
        .collect()
}

/// Read the visible district rows of one listing page.
///
/// Rows hidden with an inline `display:none` and rows without a title are
/// skipped. No deduplication happens here.
#[must_use]
pub fn parse_district_rows(html: &str, base: &Url) -> Vec<District> {
    let document = Html::parse_document(html);
    document
        .select(&DISTRICT_ROW_SELECTOR)
        .filter(|row| !is_hidden(*row))
        .filter_map(|row| parse_row(row, base))
        .collect()
}

fn parse_row(row: ElementRef<'_>, base: &Url) -> Option<District> {
    let title = row.select(&ROW_TITLE_SELECTOR).next()?;
    let name = clean(&text_of(title));
    if name.is_empty() {
        return None;
    }

    let mut district = District {
        name,
        subdistrict_list_url: None,
        block_list_url: None,
    };

    for link in row.select(&ROW_ACTION_SELECTOR) {
        let Some(href) = link.value().attr("href").and_then(|h| absolutize(base, h)) else {
            continue;
        };
        match classify_action(&href, &clean(&text_of(link)).to_lowercase()) {
            Some(ActionLink::Subdistricts) => district.subdistrict_list_url = Some(href),
            Some(ActionLink::Blocks) => district.block_list_url = Some(href),
            None => {}
        }
    }

    Some(district)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionLink {
    Subdistricts,
    Blocks,
}

/// Subdistrict links are checked first: "sub district" also contains
/// "district" but "block" never matches a subdistrict link.
fn classify_action(href: &str, text_lower: &str) -> Option<ActionLink> {
    if href.contains("/sub_districts") || text_lower.contains("sub district") {
        Some(ActionLink::Subdistricts)
    } else if href.contains("/blocks") || text_lower.contains("block") {
        Some(ActionLink::Blocks)
    } else {
        None
    }
}

fn is_hidden(row: ElementRef<'_>) -> bool {
    row.value().attr("style").is_some_and(|style| {
        let compact: String = style
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        compact.contains("display:none")
    })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
