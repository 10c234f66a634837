//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_money, Category, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Expense Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the recorded expenses as a table
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        name: e.name.clone(),
        category: e.category.decorated(),
        amount: format_money(e.amount, currency_symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the category set, one per line
pub fn format_category_list() -> String {
    Category::all()
        .iter()
        .map(|c| format!("  {}", c.decorated()))
        .collect::<Vec<_>>()
        .join("\n")
}
