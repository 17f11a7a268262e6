//! Core types for crawl operations.
//!
//! This module contains the error type, the severity-tagged findings that
//! non-fatal conditions produce, and the entities flowing through a crawl.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for crawl operations
///
/// Every variant is fatal for the state being crawled. Conditions that only
/// deserve a warning are reported as [`Finding`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Browser driver or page script failure
    #[error("Browser error: {0}")]
    Browser(String),

    /// Navigation did not finish within its deadline
    #[error("{operation} timeout after {secs} seconds")]
    Timeout { operation: String, secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A warning escalated by strict mode
    #[error("Escalated warning: {0}")]
    Escalated(String),
}

/// Convenience alias for Result with `CrawlError`
pub type CrawlResult<T> = Result<T, CrawlError>;

/// How a finding affects the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Recorded and logged, the crawl goes on
    Warning,
    /// The state could not be completed
    Fatal,
}

/// What a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    /// The poll budget ran out before the rendered rows settled
    StabilizationTimeout,
    /// Unique names found differ from the page banner's total
    CountMismatch,
    /// A district contributed no row to an output table
    MissingRows,
    /// A state aborted and was left for the next run
    StateFailed,
}

/// A non-fatal (or isolated fatal) condition observed during a crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn warning(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn fatal(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Fatal,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "WARN",
            Severity::Fatal => "FATAL",
        };
        write!(f, "[{tag}] {}", self.message)
    }
}

/// Top-level checkpoint unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub listing_url: String,
}

/// One district row of a state's listing
///
/// The owning state is supplied by traversal context, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub subdistrict_list_url: Option<String>,
    pub block_list_url: Option<String>,
}

/// The two child kinds a district is expanded into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    Subdistrict,
    Block,
}

impl ChildKind {
    /// Label used in log lines and as the CSV column name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Subdistrict => "subdistrict",
            Self::Block => "block",
        }
    }

    /// Detail-page URL of this kind for `district`
    #[must_use]
    pub fn url_of(self, district: &District) -> Option<&str> {
        match self {
            Self::Subdistrict => district.subdistrict_list_url.as_deref(),
            Self::Block => district.block_list_url.as_deref(),
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
