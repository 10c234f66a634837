//! Summary and history CLI commands

use chrono::NaiveDate;
use serde::Serialize;

use super::{require_budget, resolve_today};
use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::{TrackerError, TrackerResult};
use crate::services::{Summary, SummaryService};
use crate::storage::Storage;

/// Summary plus the daily budget, as emitted by `summary --json`
#[derive(Serialize)]
struct SummaryReport<'a> {
    date: NaiveDate,
    #[serde(flatten)]
    summary: &'a Summary,
    daily_budget: f64,
}

/// Show the spending summary
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<NaiveDate>,
    json: bool,
) -> TrackerResult<()> {
    require_budget(storage)?;
    let today = resolve_today(date);
    let summary = SummaryService::new(storage).summarize()?;

    if json {
        let report = SummaryReport {
            date: today,
            summary: &summary,
            daily_budget: summary.daily_budget(today),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_summary(&summary, today, &settings.currency_symbol));
    }

    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history_command(storage: &Storage, count: usize) -> TrackerResult<()> {
    let logger = storage
        .audit()
        .ok_or_else(|| TrackerError::Config("Audit logging is disabled in settings".into()))?;

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
