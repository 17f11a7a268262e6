//! Selectors and element-mapping scripts evaluated on detail pages
//!
//! Each script is the body of a function receiving the array of elements
//! matched by its selector (see [`DetailPage::evaluate_over_elements`]).
//!
//! [`DetailPage::evaluate_over_elements`]: super::detail_page::DetailPage::evaluate_over_elements

/// Titles of the rendered child rows
pub const ROW_TITLE_SELECTOR: &str = "div.search-content .search-row .search-title, \
     div.search-content .search-row.module .search-title, \
     div.search-content .module.search-row .search-title, \
     div.search-content .search-result-row .search-title";

/// Plain list items, used when a page renders no row titles
pub const FALLBACK_ITEM_SELECTOR: &str = "div.search-content ul>li";

/// Banner announcing the total number of children
pub const BANNER_SELECTOR: &str = "div.search-meta";

/// Links of the child-list pagination bar
pub const PAGINATION_LINK_SELECTOR: &str = "ul.pagination li a[href]";

/// Number of matched elements
pub const COUNT_ELEMENTS_SCRIPT: &str = "els => els.length";

/// Trimmed, non-empty text of each matched element
pub const ELEMENT_TEXTS_SCRIPT: &str =
    "els => els.map(e => (e.textContent || '').trim()).filter(Boolean)";

/// Absolute target and trimmed label of each matched link
pub const LINK_TARGETS_SCRIPT: &str =
    "els => els.map(e => ({ href: e.href, text: (e.textContent || '').trim() }))";

/// Scroll the window to the bottom of the document
pub const SCROLL_TO_BOTTOM_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight)";
