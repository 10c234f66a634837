//! JSONL audit log
//!
//! One serialized [`AuditEntry`] per line, appended after every mutation of
//! the record store. Lines go through the same helpers as the record file.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::file_io::{append_line, read_lines};

use super::entry::AuditEntry;

/// Appends to and reads back the audit log
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry` as one JSON line
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let json = serde_json::to_string(entry)?;
        append_line(&self.log_path, &json)
    }

    /// Every entry, oldest first; empty if nothing was logged yet
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        read_lines(&self.log_path)?
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    TrackerError::Json(format!("audit log line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn exists(&self) -> bool {
        self.log_path.is_file()
    }
}
