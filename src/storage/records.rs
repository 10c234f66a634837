//! Record line format
//!
//! The record file is plain comma-separated text:
//!
//! ```text
//! Budget, 500
//! coffee, 3.5, Food
//! rent, 300, Home
//! ```
//!
//! Fields are split on every comma and trimmed. Nothing is quoted or escaped,
//! so a comma inside an expense name produces a line with too many fields.
//! Empty lines are skipped.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense};

/// Label in the first field of the budget line
pub const BUDGET_LABEL: &str = "Budget";

const EXPENSE_FIELDS: usize = 3;

/// Encode the budget line
pub fn encode_budget(budget: f64) -> String {
    format!("{}, {}", BUDGET_LABEL, budget)
}

/// Encode an expense line as `<name>, <amount>, <category>`
pub fn encode_expense(expense: &Expense) -> String {
    format!("{}, {}, {}", expense.name, expense.amount, expense.category)
}

fn field_reader(data: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(data)
}

/// Decode the budget line; `None` unless it is `Budget, <finite number>`
pub fn decode_budget(line: &str) -> Option<f64> {
    let record = field_reader(line.as_bytes()).records().next()?.ok()?;

    if record.len() != 2 || !record[0].eq_ignore_ascii_case(BUDGET_LABEL) {
        return None;
    }

    record[1].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decode every expense line of a store
///
/// `lines` is the full store content; the first line is the budget and is
/// skipped. Any malformed line aborts the whole read.
pub fn decode_expenses(lines: &[String]) -> TrackerResult<Vec<Expense>> {
    let body = lines
        .iter()
        .skip(1)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = field_reader(body.as_bytes());
    let mut expenses = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| TrackerError::Storage(format!("Failed to read records: {}", e)))?;

        // Reader positions are 1-based within the body; the budget is file line 1
        let line = record
            .position()
            .map(|p| p.line() as usize + 1)
            .unwrap_or_default();

        expenses.push(decode_expense_record(&record, line)?);
    }

    Ok(expenses)
}

fn decode_expense_record(record: &StringRecord, line: usize) -> TrackerResult<Expense> {
    if record.len() != EXPENSE_FIELDS {
        return Err(TrackerError::MalformedRecord {
            line,
            reason: format!(
                "expected {} fields, found {}",
                EXPENSE_FIELDS,
                record.len()
            ),
        });
    }

    let amount: f64 = record[1]
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| TrackerError::MalformedRecord {
            line,
            reason: format!("invalid amount '{}'", &record[1]),
        })?;

    let category: Category = record[2]
        .parse()
        .map_err(|e: crate::models::CategoryParseError| TrackerError::MalformedRecord {
            line,
            reason: e.to_string(),
        })?;

    Ok(Expense::new(&record[0], category, amount))
}
