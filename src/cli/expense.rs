//! Expense CLI commands

use clap::Subcommand;

use super::{parse_amount_arg, require_budget};
use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::TrackerResult;
use crate::models::{format_money, Category, Expense};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What was bought
        name: String,
        /// Amount spent (e.g., "3.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category: Food, Home, Work, Going-out or Other
        #[arg(short, long)]
        category: Category,
    },

    /// List recorded expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    require_budget(storage)?;
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let expense = Expense::new(name, category, amount);
            service.add(&expense)?;

            println!(
                "Expense added: {} ({}) {}",
                expense.name,
                expense.category.decorated(),
                format_money(expense.amount, &settings.currency_symbol)
            );
        }
        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_expense_list(&expenses, &settings.currency_symbol));
        }
    }

    Ok(())
}
