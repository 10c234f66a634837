//! Expense service
//!
//! Appends expenses to the record store and reads them back.

use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;
use crate::storage::records::{decode_expenses, encode_expense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append an expense to the store
    ///
    /// Duplicates are allowed. The store must already hold a budget line so
    /// that the budget stays the first record.
    pub fn add(&self, expense: &Expense) -> TrackerResult<()> {
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let records = self.storage.records();
        if !records.exists() {
            return Err(TrackerError::BudgetNotSet);
        }

        records.append_line(&encode_expense(expense))?;
        info!(name = %expense.name, category = %expense.category, amount = expense.amount, "expense added");

        self.storage.log(&AuditEntry::append(
            EntityType::Expense,
            Some(expense.name.clone()),
            expense,
        ))
    }

    /// List every expense in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        let lines = self.storage.records().read_lines()?;
        decode_expenses(&lines)
    }

    /// Number of non-empty lines after the budget, without decoding them
    ///
    /// Zero when the store doesn't exist yet. Malformed lines are counted.
    pub fn recorded_count(&self) -> TrackerResult<usize> {
        let records = self.storage.records();
        if !records.exists() {
            return Ok(0);
        }

        Ok(records
            .read_lines()?
            .iter()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .count())
    }
}
