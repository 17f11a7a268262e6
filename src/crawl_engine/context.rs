//! Per-run state threaded through the orchestrator
//!
//! `RunContext` owns everything a run mutates: the output tables, the
//! checkpoint set, the run log and the findings recorded so far. Nothing of
//! it lives in statics.

use super::crawl_types::{CrawlError, CrawlResult, Finding, Severity};
use crate::config::CrawlConfig;
use crate::content_saver::{CheckpointStore, OutputTables, RunLog};

#[derive(Debug)]
pub struct RunContext {
    pub(crate) config: CrawlConfig,
    pub(crate) tables: OutputTables,
    pub(crate) checkpoints: CheckpointStore,
    pub(crate) log: RunLog,
    pub(crate) findings: Vec<Finding>,
}

impl RunContext {
    /// Create the output directory, open the run's files and load the
    /// checkpoint set.
    ///
    /// # Errors
    ///
    /// I/O and CSV errors while opening the files.
    pub fn open(config: CrawlConfig) -> CrawlResult<Self> {
        std::fs::create_dir_all(config.output_dir())?;
        let log = RunLog::open(config.log_path())?;
        let tables = OutputTables::open(&config.subdistrict_csv_path(), &config.block_csv_path())?;
        let checkpoints = CheckpointStore::load(config.progress_path())?;
        Ok(Self {
            config,
            tables,
            checkpoints,
            log,
            findings: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    #[must_use]
    pub fn tables(&self) -> &OutputTables {
        &self.tables
    }

    #[must_use]
    pub fn checkpoints(&self) -> &CheckpointStore {
        &self.checkpoints
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn log_mut(&mut self) -> &mut RunLog {
        &mut self.log
    }

    /// Log and keep `finding`.
    ///
    /// # Errors
    ///
    /// `CrawlError::Escalated` for a warning when strict mode is on.
    pub fn record(&mut self, finding: Finding) -> CrawlResult<()> {
        self.log.warn(finding.to_string());
        let escalate = self.config.strict() && finding.severity == Severity::Warning;
        let message = finding.message.clone();
        self.findings.push(finding);
        if escalate {
            Err(CrawlError::Escalated(message))
        } else {
            Ok(())
        }
    }
}
