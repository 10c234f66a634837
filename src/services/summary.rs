//! Spending summary and daily budget

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{days_left_in_month, Category, Expense};
use crate::storage::records::{decode_budget, decode_expenses};
use crate::storage::Storage;

/// Spending summary for the current record store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The monthly budget
    pub budget: f64,
    /// Amount spent per category; only categories with expenses appear
    pub by_category: BTreeMap<Category, f64>,
    /// Sum of every expense
    pub total_spent: f64,
    /// `budget - total_spent`
    pub remaining: f64,
    /// Number of expenses summarized
    pub expense_count: usize,
}

impl Summary {
    /// Build a summary from a budget and a list of expenses
    pub fn from_expenses(budget: f64, expenses: &[Expense]) -> Self {
        let mut by_category = BTreeMap::new();
        for expense in expenses {
            *by_category.entry(expense.category).or_insert(0.0) += expense.amount;
        }

        let total_spent: f64 = expenses.iter().map(|e| e.amount).sum();

        Self {
            budget,
            by_category,
            total_spent,
            remaining: budget - total_spent,
            expense_count: expenses.len(),
        }
    }

    /// Daily budget for the rest of the month containing `today`
    pub fn daily_budget(&self, today: NaiveDate) -> f64 {
        daily_budget(self.remaining, days_left_in_month(today))
    }
}

/// Spread the remaining budget over the days left
///
/// With no days left the remaining budget is returned unchanged.
pub fn daily_budget(remaining: f64, days_left: u32) -> f64 {
    if days_left == 0 {
        remaining
    } else {
        remaining / f64::from(days_left)
    }
}

/// Service computing spending summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Summarize spending against the budget
    pub fn summarize(&self) -> TrackerResult<Summary> {
        let (budget, expenses) = self.load()?;
        let summary = Summary::from_expenses(budget, &expenses);
        debug!(
            expenses = summary.expense_count,
            total = summary.total_spent,
            remaining = summary.remaining,
            "summarized expenses"
        );
        Ok(summary)
    }

    /// Remaining budget divided over the days left in the month of `today`
    pub fn daily_budget(&self, today: NaiveDate) -> TrackerResult<f64> {
        Ok(self.summarize()?.daily_budget(today))
    }

    /// Read the budget and every expense in one pass over the store
    pub(crate) fn load(&self) -> TrackerResult<(f64, Vec<Expense>)> {
        let records = self.storage.records();
        if !records.exists() {
            return Err(TrackerError::BudgetNotSet);
        }

        let lines = records.read_lines()?;
        let budget = lines
            .first()
            .and_then(|line| decode_budget(line))
            .ok_or(TrackerError::BudgetNotSet)?;

        Ok((budget, decode_expenses(&lines)?))
    }
}
