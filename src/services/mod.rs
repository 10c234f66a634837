//! Service layer for the expense tracker
//!
//! The service layer provides the operations on top of the storage layer,
//! handling validation, audit logging and computed values.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use summary::{daily_budget, Summary, SummaryService};
