use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_summary_command,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::format_category_list;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Track a monthly budget and categorized expenses",
    long_about = "expense-tracker keeps a monthly budget and a list of expenses in a \
                  small text file. It shows what is left, how much you can spend per \
                  day for the rest of the month, and exports everything to a \
                  spreadsheet with a chart of spending by category."
)]
struct Cli {
    /// Record file to use instead of the one in the data directory
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget commands
    #[command(subcommand)]
    Budget(expense_tracker::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(expense_tracker::cli::ExpenseCommands),

    /// Show spending by category and the daily budget
    Summary {
        /// Compute as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export expenses and summary to a spreadsheet
    Export {
        /// Output file (.xlsx)
        output: PathBuf,
        /// Compute as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the expense categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Write default settings to the config directory
    Init,

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("EXPENSE_TRACKER_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = match cli.file {
        Some(file) => Storage::open(file, &paths, &settings),
        None => Storage::new(&paths, &settings),
    };
    tracing::debug!(records = %storage.records().location(), "storage opened");

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary { date, json }) => {
            handle_summary_command(&storage, &settings, date, json)?;
        }
        Some(Commands::Export { output, date }) => {
            handle_export_command(&storage, &settings, output, date)?;
        }
        Some(Commands::Categories) => {
            println!("Categories:");
            println!("{}", format_category_list());
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("expense-tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Record file:    {}", storage.records().location());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("expense-tracker - Monthly budget and expense tracking");
            println!();
            println!("Run 'expense-tracker --help' for usage information.");
            println!("Run 'expense-tracker budget set <amount>' to get started.");
        }
    }

    Ok(())
}
