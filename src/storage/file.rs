//! File-backed record store

use std::path::PathBuf;

use tracing::debug;

use crate::error::TrackerResult;

use super::file_io::{append_line, read_lines, write_lines_atomic};
use super::RecordStore;

/// Record store backed by a plain text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read_lines(&self) -> TrackerResult<Vec<String>> {
        let lines = read_lines(&self.path)?;
        debug!(path = %self.path.display(), lines = lines.len(), "read record file");
        Ok(lines)
    }

    fn append_line(&self, line: &str) -> TrackerResult<()> {
        debug!(path = %self.path.display(), "append record");
        append_line(&self.path, line)
    }

    fn overwrite(&self, lines: &[String]) -> TrackerResult<()> {
        debug!(path = %self.path.display(), lines = lines.len(), "rewrite record file");
        write_lines_atomic(&self.path, lines)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
