//! Child-list collection for one district
//!
//! Gathers the unique subdistrict or block names of a district across the
//! detail page and every numbered page of its pagination bar.

use log::debug;

use super::crawl_types::{ChildKind, CrawlResult, Finding, FindingKind};
use super::waiter::{StabilizationSettings, wait_for_stable};
use crate::config::CrawlConfig;
use crate::content_saver::RunLog;
use crate::page_extractor::{DetailPage, child_names, expected_count, pagination_links};
use crate::utils::UniqueNames;

/// Result of collecting one child list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildCollection {
    /// Unique names in first-seen order
    pub names: Vec<String>,
    /// Total announced by the first page's banner
    pub expected: Option<usize>,
    /// Pages visited, the detail page included
    pub pages: usize,
    /// Warnings raised while collecting
    pub findings: Vec<Finding>,
}

/// Collect the children of kind `kind` listed at `detail_url`.
///
/// A missing URL yields an empty collection without touching the page.
///
/// # Errors
///
/// Navigation and browser failures. Count mismatches and render timeouts
/// are returned as findings instead.
pub async fn collect_children<P: DetailPage>(
    page: &mut P,
    detail_url: Option<&str>,
    kind: ChildKind,
    config: &CrawlConfig,
    run_log: &mut RunLog,
) -> CrawlResult<ChildCollection> {
    let Some(detail_url) = detail_url else {
        return Ok(ChildCollection::default());
    };
    let label = kind.label();
    let mut names = UniqueNames::new();
    let mut findings = Vec::new();

    page.navigate(detail_url).await?;
    let expected = expected_count(page, config.banner_timeout()).await;
    stabilize(page, expected, &config.stabilization(true), label, detail_url, &mut findings)
        .await?;
    names.extend(child_names(page).await?);
    debug!("{label} page 1 of {detail_url}: {} names", names.len());

    let targets: Vec<String> = pagination_links(page)
        .await
        .into_iter()
        .filter(|href| href != detail_url)
        .collect();

    for (index, href) in targets.iter().enumerate() {
        let page_no = index + 2;
        page.navigate(href).await?;
        let page_expected = expected_count(page, config.banner_timeout())
            .await
            .or(expected);
        stabilize(page, page_expected, &config.stabilization(false), label, href, &mut findings)
            .await?;
        let added = names.extend(child_names(page).await?);
        run_log.info(format!("      {label} page {page_no}: +{added}"));
    }

    if let Some(expected) = expected {
        if names.len() == expected {
            run_log.info(format!(
                "      [{label}] links found: {} (matches banner {expected})",
                names.len()
            ));
        } else {
            findings.push(Finding::warning(
                FindingKind::CountMismatch,
                format!(
                    "{} mismatch: expected {expected}, got {} ({detail_url})",
                    capitalize(label),
                    names.len()
                ),
            ));
        }
    }

    Ok(ChildCollection {
        names: names.into_vec(),
        expected,
        pages: targets.len() + 1,
        findings,
    })
}

async fn stabilize<P: DetailPage>(
    page: &mut P,
    expected: Option<usize>,
    settings: &StabilizationSettings,
    label: &str,
    url: &str,
    findings: &mut Vec<Finding>,
) -> CrawlResult<()> {
    let outcome = wait_for_stable(page, expected, settings).await?;
    if outcome.timed_out() {
        findings.push(Finding::warning(
            FindingKind::StabilizationTimeout,
            format!(
                "{label} rows still changing after {} polls ({} rendered) at {url}",
                outcome.polls, outcome.rows
            ),
        ));
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
