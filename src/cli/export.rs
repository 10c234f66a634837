//! Spreadsheet export command

use std::path::PathBuf;

use chrono::NaiveDate;

use super::resolve_today;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::export::export_to_spreadsheet;
use crate::storage::Storage;

/// Export expenses and summary to an `.xlsx` file
///
/// The record file must exist; a missing one is reported as not found and
/// nothing is written.
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    output: PathBuf,
    date: Option<NaiveDate>,
) -> TrackerResult<()> {
    let output = if output.extension().is_none() {
        output.with_extension("xlsx")
    } else {
        output
    };

    let layout = export_to_spreadsheet(
        storage,
        &output,
        resolve_today(date),
        &settings.currency_symbol,
    )?;

    println!(
        "Exported {} expense(s) to: {}",
        layout.expense_rows,
        output.display()
    );

    Ok(())
}
