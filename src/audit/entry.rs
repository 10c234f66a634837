//! Audit entry data structures
//!
//! Defines the structure of audit log entries: what happened, to which kind
//! of record, and the values before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Store was reset to a fresh budget
    Set,
    /// Budget line was rewritten, expenses kept
    Update,
    /// Record was appended
    Append,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Set => write!(f, "SET"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Append => write!(f, "APPEND"),
        }
    }
}

/// Types of records that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Budget,
    Expense,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Expense => write!(f, "Expense"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of record affected
    pub entity_type: EntityType,

    /// Human-readable description of the record (e.g., expense name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the record before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the record after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a destructive budget set
    pub fn set<T: Serialize>(entity_type: EntityType, after: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Set,
            entity_type,
            entity_name: None,
            before: None,
            after: serde_json::to_value(after).ok(),
        }
    }

    /// Entry for an in-place update
    pub fn update<T: Serialize>(entity_type: EntityType, before: &T, after: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type,
            entity_name: None,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
        }
    }

    /// Entry for an appended record
    pub fn append<T: Serialize>(
        entity_type: EntityType,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Append,
            entity_type,
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        match (&self.before, &self.after) {
            (Some(before), Some(after)) => output.push_str(&format!(": {} -> {}", before, after)),
            (None, Some(after)) => output.push_str(&format!(": {}", after)),
            _ => {}
        }

        output
    }
}
