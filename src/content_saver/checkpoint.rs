//! Append-only checkpoint log of completed states
//!
//! One state name per line. The file is read in full when a run starts and
//! only ever appended to afterwards, so a crash can at worst lose the line
//! being written, never an earlier one.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::crawl_engine::crawl_types::CrawlResult;

/// Set of states whose rows have been durably written
#[derive(Debug)]
pub struct CheckpointStore {
    path: PathBuf,
    done: HashSet<String>,
}

impl CheckpointStore {
    /// Load the checkpoint log at `path`; a missing file is an empty set.
    ///
    /// # Errors
    ///
    /// I/O errors other than the file not existing.
    pub fn load(path: impl Into<PathBuf>) -> CrawlResult<Self> {
        let path = path.into();
        let mut done = HashSet::new();
        match File::open(&path) {
            Ok(file) => {
                for line in BufReader::new(file).lines() {
                    let line = line?;
                    let name = line.trim();
                    if !name.is_empty() {
                        done.insert(name.to_string());
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(Self { path, done })
    }

    #[must_use]
    pub fn is_done(&self, state: &str) -> bool {
        self.done.contains(state.trim())
    }

    /// Append `state` to the log and sync it to disk.
    ///
    /// Must only be called once the state's rows are flushed.
    ///
    /// # Errors
    ///
    /// I/O errors while appending.
    pub fn mark_done(&mut self, state: &str) -> CrawlResult<()> {
        let state = state.trim();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{state}")?;
        file.sync_data()?;
        self.done.insert(state.to_string());
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.done.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
