//! expense-tracker - Monthly budget and expense tracking
//!
//! This library provides the core functionality for a personal expense
//! tracker: a monthly budget, a list of categorized expenses, a spending
//! summary with a daily allowance for the rest of the month, and an export
//! to a spreadsheet with a pie chart of spending by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, amounts, months)
//! - `storage`: Line-oriented record store (budget line, then expenses)
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: Spreadsheet export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{BudgetService, ExpenseService, SummaryService};
//! use expense_tracker::models::{Category, Expense};
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! BudgetService::new(&storage).set_budget(500.0)?;
//! ExpenseService::new(&storage).add(&Expense::new("coffee", Category::Food, 3.5))?;
//! let summary = SummaryService::new(&storage).summarize()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
