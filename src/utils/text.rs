//! Label normalization for scraped text
//!
//! Catalog pages pad names with runs of whitespace and non-breaking spaces,
//! and the same entity can appear with different casing on different pages.
//! [`clean`] produces the display form, [`dedup_key`] the comparison form.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static FIRST_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("BUG: hardcoded integer regex is invalid"));

/// Collapse whitespace runs (including `\u{a0}`) to one space and trim.
#[must_use]
pub fn clean(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '\u{a0}')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive key used only for equality checks, never for display.
#[must_use]
pub fn dedup_key(s: &str) -> String {
    clean(s).to_lowercase()
}

/// First run of ASCII digits in `text`, e.g. the total in "Showing 42 results".
#[must_use]
pub fn first_integer(text: &str) -> Option<usize> {
    FIRST_INTEGER
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Ordered set of display names keyed by [`dedup_key`].
///
/// First occurrence wins: a later name whose key was already seen is
/// dropped and the original spelling is kept.
#[derive(Debug, Default, Clone)]
pub struct UniqueNames {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw label. Returns `true` when it was new.
    pub fn insert(&mut self, raw: &str) -> bool {
        let name = clean(raw);
        if name.is_empty() {
            return false;
        }
        if self.seen.insert(dedup_key(&name)) {
            self.names.push(name);
            true
        } else {
            false
        }
    }

    /// Insert many labels, returning how many were new.
    pub fn extend<I, S>(&mut self, raw: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter().filter(|n| self.insert(n.as_ref())).count()
    }

    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.seen.contains(&dedup_key(raw))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Dedup a list of labels in first-seen order.
#[must_use]
pub fn dedup_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique = UniqueNames::new();
    unique.extend(raw);
    unique.into_vec()
}
