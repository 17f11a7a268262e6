//! The two append-only output tables
//!
//! Subdistrict and block rows are funneled through [`OutputTables`], the
//! single append point of a run. The header is written once, when the file
//! is new or empty; later runs of the same day append below it.

use log::debug;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::crawl_engine::crawl_types::{ChildKind, CrawlResult};

/// One CSV file with a fixed three-column header
#[derive(Debug)]
pub struct TableWriter {
    path: PathBuf,
    writer: csv::Writer<File>,
    rows_written: usize,
}

impl TableWriter {
    /// Open `path` for appending, writing `header` if the file is empty.
    ///
    /// # Errors
    ///
    /// I/O and CSV errors.
    pub fn open(path: impl Into<PathBuf>, header: [&str; 3]) -> CrawlResult<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let is_empty = file.metadata()?.len() == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_empty {
            debug!("Writing header to {}", path.display());
            writer.write_record(header)?;
            writer.flush()?;
        }
        Ok(Self {
            path,
            writer,
            rows_written: 0,
        })
    }

    /// # Errors
    ///
    /// CSV serialization or I/O errors.
    pub fn write_row(&mut self, state: &str, district: &str, child: &str) -> CrawlResult<()> {
        self.writer.write_record([state, district, child])?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush buffered rows and sync the file to disk.
    ///
    /// # Errors
    ///
    /// I/O errors.
    pub fn flush(&mut self) -> CrawlResult<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        Ok(())
    }

    /// Rows written through this writer since it was opened
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Subdistrict and block tables of one run
#[derive(Debug)]
pub struct OutputTables {
    subdistricts: TableWriter,
    blocks: TableWriter,
}

impl OutputTables {
    /// # Errors
    ///
    /// I/O and CSV errors while opening either file.
    pub fn open(subdistrict_path: &Path, block_path: &Path) -> CrawlResult<Self> {
        Ok(Self {
            subdistricts: TableWriter::open(
                subdistrict_path,
                ["state", "district", ChildKind::Subdistrict.label()],
            )?,
            blocks: TableWriter::open(block_path, ["state", "district", ChildKind::Block.label()])?,
        })
    }

    #[must_use]
    pub fn table(&self, kind: ChildKind) -> &TableWriter {
        match kind {
            ChildKind::Subdistrict => &self.subdistricts,
            ChildKind::Block => &self.blocks,
        }
    }

    fn table_mut(&mut self, kind: ChildKind) -> &mut TableWriter {
        match kind {
            ChildKind::Subdistrict => &mut self.subdistricts,
            ChildKind::Block => &mut self.blocks,
        }
    }

    /// Write the row-set of one district: one row per child, or a single row
    /// with an empty child field when there are none.
    ///
    /// Returns the number of rows written, always `max(1, children.len())`.
    ///
    /// # Errors
    ///
    /// CSV serialization or I/O errors.
    pub fn write_children(
        &mut self,
        kind: ChildKind,
        state: &str,
        district: &str,
        children: &[String],
    ) -> CrawlResult<usize> {
        let table = self.table_mut(kind);
        if children.is_empty() {
            table.write_row(state, district, "")?;
            return Ok(1);
        }
        for child in children {
            table.write_row(state, district, child)?;
        }
        Ok(children.len())
    }

    /// Flush and sync both tables.
    ///
    /// # Errors
    ///
    /// I/O errors.
    pub fn flush(&mut self) -> CrawlResult<()> {
        self.subdistricts.flush()?;
        self.blocks.flush()
    }
}
