//! Display formatting for terminal output

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_category_list, format_expense_list};
pub use summary::format_summary;
