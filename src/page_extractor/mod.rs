//! Collaborators that read catalog pages
//!
//! Listing pages are fetched over HTTP and parsed with `scraper`; detail
//! pages are rendered in a browser and read through [`DetailPage`].

pub mod detail_page;
pub mod extractors;
pub mod fetcher;
pub mod js_scripts;
pub mod listing;

pub use detail_page::{ChromiumDetailPage, DetailPage, Scroll};
pub use extractors::{child_names, expected_count, pagination_links, row_count};
pub use fetcher::{HttpFetch, ReqwestFetcher};
pub use listing::{parse_district_rows, parse_states};
