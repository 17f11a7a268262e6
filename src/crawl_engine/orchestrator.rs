//! Main crawl orchestration logic
//!
//! Walks states → districts → child lists, strictly one unit at a time:
//! - states already in the checkpoint set are skipped without any fetch
//! - each district gets one row-set per output table
//! - a state is checkpointed only after its rows are flushed to disk
//!
//! A state that fails part-way is not checkpointed and is crawled again from
//! scratch by the next run; rows it already wrote stay in the tables.

use log::debug;
use std::collections::HashSet;

use super::collector::{ChildCollection, collect_children};
use super::context::RunContext;
use super::crawl_types::{ChildKind, CrawlResult, District, Finding, FindingKind, Severity, State};
use super::paginator::{discover_states, paginate_districts};
use crate::page_extractor::{DetailPage, HttpFetch};
use crate::utils::dedup_key;

/// Counters of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub states_seen: usize,
    pub states_skipped: usize,
    pub states_completed: usize,
    pub states_failed: usize,
    pub subdistrict_rows: usize,
    pub block_rows: usize,
    pub warnings: usize,
}

#[derive(Debug, Default)]
struct KindTotals {
    found: usize,
    written: usize,
    districts: HashSet<String>,
}

/// Drives one crawl run over an HTTP fetcher and a single browser page
pub struct Orchestrator<F, P> {
    fetcher: F,
    page: P,
}

impl<F: HttpFetch, P: DetailPage> Orchestrator<F, P> {
    #[must_use]
    pub fn new(fetcher: F, page: P) -> Self {
        Self { fetcher, page }
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_parts(self) -> (F, P) {
        (self.fetcher, self.page)
    }

    /// Crawl every state not yet checkpointed.
    ///
    /// # Errors
    ///
    /// The first fatal error of a state, unless `isolate_state_failures` is
    /// set, in which case failed states are counted and skipped.
    pub async fn run(&mut self, ctx: &mut RunContext) -> CrawlResult<RunSummary> {
        let sub_path = ctx.tables.table(ChildKind::Subdistrict).path().display().to_string();
        let block_path = ctx.tables.table(ChildKind::Block).path().display().to_string();
        ctx.log.info(format!("[district_scrape] Writing: {sub_path} & {block_path}"));

        let states = discover_states(&self.fetcher, &ctx.config).await?;
        let mut summary = RunSummary {
            states_seen: states.len(),
            ..RunSummary::default()
        };

        for state in &states {
            if ctx.checkpoints.is_done(&state.name) {
                debug!("Skipping checkpointed state {}", state.name);
                summary.states_skipped += 1;
                continue;
            }

            match self.crawl_state(state, ctx).await {
                Ok(()) => summary.states_completed += 1,
                Err(e) if ctx.config.isolate_state_failures() => {
                    summary.states_failed += 1;
                    ctx.record(Finding::fatal(
                        FindingKind::StateFailed,
                        format!("{} failed, left for the next run: {e}", state.name),
                    ))?;
                }
                Err(e) => {
                    ctx.log.warn(format!("[ERROR] {} failed: {e}", state.name));
                    if let Err(flush_err) = ctx.tables.flush() {
                        ctx.log.warn(format!("[ERROR] flushing tables: {flush_err}"));
                    }
                    return Err(e);
                }
            }
        }

        ctx.tables.flush()?;
        summary.subdistrict_rows = ctx.tables.table(ChildKind::Subdistrict).rows_written();
        summary.block_rows = ctx.tables.table(ChildKind::Block).rows_written();
        summary.warnings = ctx
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count();
        ctx.log.info(format!(
            "Run finished: {} completed, {} skipped, {} failed, {} warnings",
            summary.states_completed,
            summary.states_skipped,
            summary.states_failed,
            summary.warnings
        ));
        Ok(summary)
    }

    async fn crawl_state(&mut self, state: &State, ctx: &mut RunContext) -> CrawlResult<()> {
        ctx.log.info(format!("== {} ==", state.name));
        let districts =
            paginate_districts(&self.fetcher, &state.listing_url, &ctx.config, &mut ctx.log)
                .await?;

        let mut subdistricts = KindTotals::default();
        let mut blocks = KindTotals::default();

        for district in &districts {
            let subs = self.collect(district, ChildKind::Subdistrict, ctx).await?;
            let blks = self.collect(district, ChildKind::Block, ctx).await?;

            for (kind, collection, totals) in [
                (ChildKind::Subdistrict, &subs, &mut subdistricts),
                (ChildKind::Block, &blks, &mut blocks),
            ] {
                let rows = ctx.tables.write_children(
                    kind,
                    &state.name,
                    &district.name,
                    &collection.names,
                )?;
                totals.found += collection.names.len();
                totals.written += rows;
                if rows > 0 {
                    totals.districts.insert(dedup_key(&district.name));
                }
            }
        }

        ctx.tables.flush()?;

        for (kind, totals) in [
            (ChildKind::Subdistrict, &subdistricts),
            (ChildKind::Block, &blocks),
        ] {
            let mut missing: Vec<&str> = districts
                .iter()
                .filter(|d| !totals.districts.contains(&dedup_key(&d.name)))
                .map(|d| d.name.as_str())
                .collect();
            if !missing.is_empty() {
                missing.sort_unstable();
                ctx.record(Finding::warning(
                    FindingKind::MissingRows,
                    format!("Missing in {} table: {}", kind.label(), missing.join(", ")),
                ))?;
            }
        }

        ctx.log.info(format!(
            "   -> subdistricts found: {}, written: {}",
            subdistricts.found, subdistricts.written
        ));
        ctx.log.info(format!(
            "   -> blocks found: {}, written: {}",
            blocks.found, blocks.written
        ));

        ctx.checkpoints.mark_done(&state.name)?;
        ctx.log.info(format!(
            "   -> finished {} ({} districts)",
            state.name,
            districts.len()
        ));
        Ok(())
    }

    async fn collect(
        &mut self,
        district: &District,
        kind: ChildKind,
        ctx: &mut RunContext,
    ) -> CrawlResult<ChildCollection> {
        let mut collection = collect_children(
            &mut self.page,
            kind.url_of(district),
            kind,
            &ctx.config,
            &mut ctx.log,
        )
        .await?;
        for finding in std::mem::take(&mut collection.findings) {
            ctx.record(finding)?;
        }
        Ok(collection)
    }
}
