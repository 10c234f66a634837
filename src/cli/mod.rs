//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service layer. Numbers arrive as text and are
//! parsed here; expense, summary and export commands refuse to run until a
//! budget is set.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;
pub use report::{handle_history_command, handle_summary_command};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::parse_amount;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Parse an amount typed by the user
pub(crate) fn parse_amount_arg(input: &str) -> TrackerResult<f64> {
    parse_amount(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Fail unless a budget has been set
pub(crate) fn require_budget(storage: &Storage) -> TrackerResult<()> {
    if BudgetService::new(storage).is_budget_set() {
        Ok(())
    } else {
        Err(TrackerError::BudgetNotSet)
    }
}

/// The date to compute against: the one given, or today on the local clock
pub(crate) fn resolve_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}
