//! Summary display formatting

use chrono::NaiveDate;

use super::report::{format_bar, format_percentage, separator};
use crate::models::{days_left_in_month, format_money, MonthPeriod};
use crate::services::Summary;

const BAR_WIDTH: usize = 20;

/// Format a spending summary for `today`
pub fn format_summary(summary: &Summary, today: NaiveDate, currency_symbol: &str) -> String {
    let money = |amount: f64| format_money(amount, currency_symbol);
    let days_left = days_left_in_month(today);

    let mut output = String::new();
    output.push_str(&format!(
        "Expense Summary for {}\n",
        MonthPeriod::containing(today)
    ));
    output.push_str(&separator(48));
    output.push('\n');
    output.push_str(&format!("{:<18}{:>14}\n", "Budget:", money(summary.budget)));
    output.push_str(&format!("{:<18}{:>14}\n", "Total Spent:", money(summary.total_spent)));
    output.push_str(&format!("{:<18}{:>14}\n", "Remaining Budget:", money(summary.remaining)));
    output.push_str(&format!(
        "{:<18}{:>14}  ({} days left)\n",
        "Daily Budget:",
        money(summary.daily_budget(today)),
        days_left
    ));

    output.push('\n');
    if summary.by_category.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    output.push_str("Expenses by Category:\n");
    let largest = summary.by_category.values().copied().fold(0.0, f64::max);
    for (category, amount) in &summary.by_category {
        let share = if summary.total_spent > 0.0 {
            amount / summary.total_spent * 100.0
        } else {
            0.0
        };
        // Icons are double-width, so pad the plain label instead
        output.push_str(&format!(
            "  {} {:<10}{:>12}  {} {}\n",
            category.icon(),
            category.label(),
            money(*amount),
            format_bar(*amount, largest, BAR_WIDTH),
            format_percentage(share)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_format_summary() {
        let expenses = vec![
            Expense::new("coffee", Category::Food, 3.5),
            Expense::new("rent", Category::Home, 300.0),
        ];
        let summary = Summary::from_expenses(500.0, &expenses);

        let output = format_summary(&summary, today(), "$");
        assert!(output.contains("2026-10"));
        assert!(output.contains("$303.50"));
        assert!(output.contains("$196.50"));
        assert!(output.contains("$15.12"));
        assert!(output.contains("13 days left"));
        assert!(output.contains("Food"));
        assert!(output.contains("$300.00"));
    }

    #[test]
    fn test_format_summary_without_expenses() {
        let summary = Summary::from_expenses(90.0, &[]);

        let output = format_summary(&summary, today(), "€");
        assert!(output.contains("€90.00"));
        assert!(output.contains("No expenses recorded."));
    }
}
