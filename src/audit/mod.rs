//! Audit logging for the expense tracker
//!
//! Every mutation of the record store (budget set, budget update, expense
//! append) is recorded in an append-only JSONL audit log.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::update(EntityType::Budget, &500.0, &650.0))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
