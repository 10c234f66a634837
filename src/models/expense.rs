//! Expense model
//!
//! An expense is a single purchase: what it was, which category it belongs
//! to, and how much it cost. Expenses are appended to the record store and
//! never modified afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;

/// A single recorded purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What was bought
    pub name: String,

    /// Spending category
    pub category: Category,

    /// Amount spent, always positive
    pub amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, category: Category, amount: f64) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
        }
    }

    /// Validate the expense
    ///
    /// Commas in the name are allowed here even though the record file does
    /// not escape them; such a line fails to decode on the next read.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if self.name.contains(['\n', '\r']) {
            return Err(ExpenseValidationError::MultilineName);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:.2}", self.name, self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    MultilineName,
    NonPositiveAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::MultilineName => write!(f, "Expense name must fit on a single line"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be a positive number (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("coffee", Category::Food, 3.5);
        assert_eq!(expense.name, "coffee");
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount, 3.5);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(
            Expense::new("  ", Category::Food, 1.0).validate(),
            Err(ExpenseValidationError::EmptyName)
        );
        assert_eq!(
            Expense::new("two\nlines", Category::Food, 1.0).validate(),
            Err(ExpenseValidationError::MultilineName)
        );
    }

    #[test]
    fn test_validate_amount() {
        assert!(Expense::new("refund", Category::Other, -5.0).validate().is_err());
        assert!(Expense::new("free", Category::Other, 0.0).validate().is_err());
        assert!(Expense::new("huge", Category::Other, f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("rent", Category::Home, 300.0);
        assert_eq!(expense.to_string(), "rent (Home): 300.00");
    }
}
