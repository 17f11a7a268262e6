//! Shared configuration constants for district_scrape
//!
//! Default values used by the config builder and the crawl engine so the
//! numbers live in one place.

/// Rows per listing page served by the catalog.
///
/// A listing page holding fewer rows than this is the last page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Pause between consecutive listing page fetches (milliseconds)
pub const DEFAULT_PAGE_DELAY_MS: u64 = 100;

/// Per-request deadline for listing and index fetches (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Deadline for a detail page navigation (seconds)
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 30;

/// How long to wait for the result-count banner of a detail page (milliseconds)
pub const DEFAULT_BANNER_TIMEOUT_MS: u64 = 1500;

/// Poll budget for the first page of a child list
pub const DEFAULT_FIRST_PAGE_MAX_POLLS: u32 = 240;

/// Poll budget for every following page of a child list
pub const DEFAULT_NEXT_PAGE_MAX_POLLS: u32 = 200;

/// Wait between two row-count polls (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 450;

/// Short pause between the individual scroll moves of one poll (milliseconds)
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

/// Distance scrolled back up before returning to the bottom (pixels)
pub const DEFAULT_SCROLL_BACK_PX: i64 = 300;

/// Consecutive unchanged polls after which a page counts as fully rendered
pub const DEFAULT_STAGNATION_LIMIT: u32 = 5;

/// Lines returned by the run log tail
pub const DEFAULT_LOG_TAIL_LINES: usize = 40;

/// Prefix shared by every file of a run
pub const DEFAULT_FILE_PREFIX: &str = "IGOD";

/// States index of the public catalog
pub const DEFAULT_STATES_URL: &str = "https://igod.gov.in/sg/district/states";

/// Sent with every HTTP request
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Chrome user agent string used for HTTP requests and the browser
///
/// Kept in step with the current stable Chrome release.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
