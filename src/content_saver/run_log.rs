//! Human-readable run log
//!
//! Timestamped lines appended to `<stamp>_<prefix>.log`, mirrored to the
//! `log` facade. Each line is written straight through so a monitor tailing
//! the file sees progress as it happens.

use chrono::Local;
use log::{info, warn};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::crawl_engine::crawl_types::CrawlResult;

#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    /// # Errors
    ///
    /// I/O errors while opening the file.
    pub fn open(path: impl Into<PathBuf>) -> CrawlResult<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        info!("{message}");
        self.append(message);
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        warn!("{message}");
        self.append(message);
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // The log is diagnostic output; a failed write must not abort a crawl
    fn append(&mut self, message: &str) {
        let line = format!("[{}] {message}\n", Local::now().format("%H:%M:%S"));
        if let Err(e) = self.file.write_all(line.as_bytes()) {
            warn!("Failed to append to run log {}: {e}", self.path.display());
        }
    }
}

/// Last `lines` lines of the most recent run log in `dir`.
///
/// Run logs are named `<stamp>_<prefix>.log`; the date stamp sorts
/// lexicographically, so the greatest name is the most recent. Returns an
/// empty string when there is none.
///
/// # Errors
///
/// I/O errors while listing `dir` or reading the log.
pub fn latest_log_tail(dir: &Path, prefix: &str, lines: usize) -> CrawlResult<String> {
    let suffix = format!("_{prefix}.log");
    let latest = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(&suffix))
            .max(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let Some(name) = latest else {
        return Ok(String::new());
    };

    let content = std::fs::read_to_string(dir.join(name))?;
    let all: Vec<&str> = content.lines().collect();
    let start = all.len().saturating_sub(lines);
    let mut tail = all[start..].join("\n");
    if !tail.is_empty() {
        tail.push('\n');
    }
    Ok(tail)
}
