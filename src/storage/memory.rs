//! In-memory record store, mainly for tests

use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};

use super::RecordStore;

/// Record store that keeps its lines in memory
///
/// `None` means the store has never been written, mirroring a missing file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lines: RwLock<Option<Vec<String>>>,
}

impl MemoryStore {
    /// Create an empty, not-yet-existing store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds the given lines
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RwLock::new(Some(lines.into_iter().map(Into::into).collect())),
        }
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> TrackerError {
    TrackerError::Storage(format!("Failed to acquire lock: {}", e))
}

impl RecordStore for MemoryStore {
    fn exists(&self) -> bool {
        self.lines.read().map(|l| l.is_some()).unwrap_or(false)
    }

    fn read_lines(&self) -> TrackerResult<Vec<String>> {
        self.lines
            .read()
            .map_err(poisoned)?
            .clone()
            .ok_or_else(|| TrackerError::record_file_not_found(self.location()))
    }

    fn append_line(&self, line: &str) -> TrackerResult<()> {
        let mut lines = self.lines.write().map_err(poisoned)?;
        lines.get_or_insert_with(Vec::new).push(line.to_string());
        Ok(())
    }

    fn overwrite(&self, new_lines: &[String]) -> TrackerResult<()> {
        let mut lines = self.lines.write().map_err(poisoned)?;
        *lines = Some(new_lines.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
