//! Export module for the expense tracker
//!
//! Exports expenses, the spending summary and a per-category pie chart to an
//! `.xlsx` workbook.

pub mod xlsx;

pub use xlsx::{build_workbook, export_to_spreadsheet, SheetLayout, CHART_TITLE, SHEET_NAME};
