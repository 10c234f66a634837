//! Core data models for the expense tracker
//!
//! Expenses, their categories, money parsing/formatting and month arithmetic.

pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError};
pub use money::{format_money, parse_amount, MoneyParseError};
pub use period::{days_left_in_month, MonthPeriod};
