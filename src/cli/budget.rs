//! Budget CLI commands

use clap::Subcommand;

use super::parse_amount_arg;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::format_money;
use crate::services::{BudgetService, ExpenseService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a new monthly budget, clearing all recorded expenses
    Set {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Change the budget and keep recorded expenses
    Update {
        /// Amount (e.g., "650" or "650.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the current budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = parse_amount_arg(&amount)?;
            let discarded = ExpenseService::new(storage).recorded_count()?;

            service.set_budget(budget)?;

            println!("Budget set to {}", format_money(budget, symbol));
            if discarded > 0 {
                println!(
                    "Cleared {} previously recorded expense(s). Use 'budget update' to keep expenses.",
                    discarded
                );
            }
        }
        BudgetCommands::Update { amount } => {
            let budget = parse_amount_arg(&amount)?;
            service.update_budget(budget)?;
            println!("Budget updated to {}", format_money(budget, symbol));
        }
        BudgetCommands::Show => {
            let budget = service.budget()?;
            println!("Monthly budget: {}", format_money(budget, symbol));
        }
    }

    Ok(())
}
