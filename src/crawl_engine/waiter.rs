//! Render stabilization for lazily loaded detail pages
//!
//! Detail pages append rows as the viewport nears the bottom. Instead of a
//! fixed sleep, the waiter polls the rendered row count, nudging the page
//! with scroll moves, until either the count reaches the total announced by
//! the page or it stops changing for `stagnation_limit` consecutive polls.
//! Running out of polls is not an error; the caller keeps what rendered.

use log::debug;
use std::time::Duration;

use super::crawl_types::CrawlResult;
use crate::page_extractor::{DetailPage, Scroll, row_count};

/// Poll budget and pacing of one stabilization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizationSettings {
    pub max_polls: u32,
    pub poll_interval: Duration,
    pub settle_delay: Duration,
    pub scroll_back_px: i64,
    pub stagnation_limit: u32,
}

/// Why the waiter returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizeReason {
    /// The rendered count reached the expected total
    Reached,
    /// The count did not change for `stagnation_limit` polls
    Stagnant,
    /// The poll budget ran out first
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizeOutcome {
    pub reason: StabilizeReason,
    /// Polls started, including the one that returned
    pub polls: u32,
    /// Last row count observed
    pub rows: usize,
}

impl StabilizeOutcome {
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.reason == StabilizeReason::Exhausted
    }
}

/// Poll `page` until its row count is stable.
///
/// # Errors
///
/// Only browser failures while scrolling; count reads that fail are treated
/// as zero rows.
pub async fn wait_for_stable<P: DetailPage>(
    page: &mut P,
    expected: Option<usize>,
    settings: &StabilizationSettings,
) -> CrawlResult<StabilizeOutcome> {
    let mut last_count: Option<usize> = None;
    let mut stagnation = 0u32;
    let mut rows = 0usize;

    for poll in 1..=settings.max_polls {
        rows = row_count(page).await;
        if expected.is_some_and(|total| rows >= total) {
            debug!("Rows settled at {rows} after {poll} polls (banner reached)");
            return Ok(StabilizeOutcome {
                reason: StabilizeReason::Reached,
                polls: poll,
                rows,
            });
        }

        page.scroll(Scroll::ToBottom).await?;
        page.wait(settings.settle_delay).await;
        page.scroll(Scroll::By(-settings.scroll_back_px)).await?;
        page.wait(settings.settle_delay).await;
        page.scroll(Scroll::ToBottom).await?;
        page.wait(settings.poll_interval).await;

        rows = row_count(page).await;
        if last_count == Some(rows) {
            stagnation += 1;
            if stagnation >= settings.stagnation_limit {
                debug!("Rows settled at {rows} after {poll} polls (no change)");
                return Ok(StabilizeOutcome {
                    reason: StabilizeReason::Stagnant,
                    polls: poll,
                    rows,
                });
            }
        } else {
            stagnation = 0;
        }
        last_count = Some(rows);
    }

    debug!(
        "Poll budget of {} exhausted with {rows} rows",
        settings.max_polls
    );
    Ok(StabilizeOutcome {
        reason: StabilizeReason::Exhausted,
        polls: settings.max_polls,
        rows,
    })
}
