//! Storage layer for the expense tracker
//!
//! The record store is a sequence of lines: the budget first, then one line
//! per expense. [`RecordStore`] abstracts where those lines live so the
//! services can run against a file in production and memory in tests.

pub mod file;
pub mod file_io;
pub mod memory;
pub mod records;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Backend holding the raw record lines
pub trait RecordStore: Send + Sync {
    /// Whether the store has been created
    fn exists(&self) -> bool;

    /// Read every line; fails with a not-found error if the store doesn't exist
    fn read_lines(&self) -> TrackerResult<Vec<String>>;

    /// Append one line, creating the store if needed
    fn append_line(&self, line: &str) -> TrackerResult<()>;

    /// Replace the whole store with `lines`
    fn overwrite(&self, lines: &[String]) -> TrackerResult<()>;

    /// Where the records live, for messages
    fn location(&self) -> String;
}

/// The store object every service operates on
pub struct Storage {
    records: Box<dyn RecordStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// File-backed storage laid out according to the paths and settings
    pub fn new(paths: &TrackerPaths, settings: &Settings) -> Self {
        let record_file = paths.record_file(&settings.record_file_name);
        Self::open(record_file, paths, settings)
    }

    /// File-backed storage for an explicit record file
    pub fn open(record_file: PathBuf, paths: &TrackerPaths, settings: &Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            records: Box::new(FileStore::new(record_file)),
            audit,
        }
    }

    /// Storage over any backend, without audit logging
    pub fn with_backend(backend: impl RecordStore + 'static) -> Self {
        Self {
            records: Box::new(backend),
            audit: None,
        }
    }

    /// Empty in-memory storage
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryStore::new())
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Get the record backend
    pub fn records(&self) -> &dyn RecordStore {
        self.records.as_ref()
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an audit entry; a no-op when auditing is disabled
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}
