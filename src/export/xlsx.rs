//! Spreadsheet export
//!
//! Writes a workbook with a single `Expenses` sheet:
//!
//! ```text
//! row 0        Expense Name | Category | Amount
//! rows 1..=n   one row per expense
//! (blank)
//! Summary
//! Total Spent: $x.xx
//! Remaining Budget: $x.xx
//! Daily Budget: $x.xx
//! (blank)
//! (blank)
//! Category | Amount        <- chart source
//! one row per category
//! (blank)
//! pie chart
//! ```

use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::{Chart, ChartType, Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{format_money, Expense};
use crate::services::{Summary, SummaryService};
use crate::storage::Storage;

/// Name of the worksheet holding the export
pub const SHEET_NAME: &str = "Expenses";

/// Title of the pie chart
pub const CHART_TITLE: &str = "Expenses by Category";

/// Row positions (0-based) of each block on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Number of expense rows below the header
    pub expense_rows: u32,
    /// Row of the "Summary" label
    pub summary_row: u32,
    /// Header row of the category/amount table
    pub breakdown_header_row: u32,
    /// Number of category rows below the breakdown header
    pub breakdown_rows: u32,
    /// Row the chart is anchored at, if one is drawn
    pub chart_row: Option<u32>,
}

impl SheetLayout {
    pub fn new(expense_count: usize, category_count: usize) -> Self {
        let expense_rows = expense_count as u32;
        // header, expenses, one blank row
        let summary_row = expense_rows + 2;
        // label, three summary lines, two blank rows
        let breakdown_header_row = summary_row + 6;
        let breakdown_rows = category_count as u32;
        let chart_row = (breakdown_rows > 0).then_some(breakdown_header_row + breakdown_rows + 2);

        Self {
            expense_rows,
            summary_row,
            breakdown_header_row,
            breakdown_rows,
            chart_row,
        }
    }

    /// First and last row of the category table body
    pub fn breakdown_range(&self) -> Option<(u32, u32)> {
        (self.breakdown_rows > 0).then(|| {
            (
                self.breakdown_header_row + 1,
                self.breakdown_header_row + self.breakdown_rows,
            )
        })
    }
}

/// Export the record store to an `.xlsx` workbook at `path`
///
/// Fails without touching `path` if the record store does not exist or
/// cannot be read.
pub fn export_to_spreadsheet(
    storage: &Storage,
    path: &Path,
    today: NaiveDate,
    currency_symbol: &str,
) -> TrackerResult<SheetLayout> {
    let records = storage.records();
    if !records.exists() {
        return Err(TrackerError::record_file_not_found(records.location()));
    }

    let (budget, expenses) = SummaryService::new(storage).load()?;
    let summary = Summary::from_expenses(budget, &expenses);

    let mut workbook = build_workbook(&expenses, &summary, today, currency_symbol)?;
    workbook
        .save(path)
        .map_err(|e| TrackerError::Export(format!("Failed to save {}: {}", path.display(), e)))?;

    let layout = SheetLayout::new(expenses.len(), summary.by_category.len());
    info!(path = %path.display(), expenses = expenses.len(), "exported spreadsheet");
    Ok(layout)
}

/// Build the workbook in memory
pub fn build_workbook(
    expenses: &[Expense],
    summary: &Summary,
    today: NaiveDate,
    currency_symbol: &str,
) -> Result<Workbook, XlsxError> {
    let layout = SheetLayout::new(expenses.len(), summary.by_category.len());
    let bold = Format::new().set_bold();
    let amount_format = Format::new().set_num_format("0.00");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(0, 28.0)?;
    worksheet.set_column_width(1, 14.0)?;
    worksheet.set_column_width(2, 12.0)?;

    write_expense_table(worksheet, expenses, &bold, &amount_format)?;

    let row = layout.summary_row;
    worksheet.write_string_with_format(row, 0, "Summary", &bold)?;
    worksheet.write_string(
        row + 1,
        0,
        format!("Total Spent: {}", format_money(summary.total_spent, currency_symbol)),
    )?;
    worksheet.write_string(
        row + 2,
        0,
        format!(
            "Remaining Budget: {}",
            format_money(summary.remaining, currency_symbol)
        ),
    )?;
    worksheet.write_string(
        row + 3,
        0,
        format!(
            "Daily Budget: {}",
            format_money(summary.daily_budget(today), currency_symbol)
        ),
    )?;

    let header = layout.breakdown_header_row;
    worksheet.write_string_with_format(header, 0, "Category", &bold)?;
    worksheet.write_string_with_format(header, 1, "Amount", &bold)?;
    for (offset, (category, amount)) in summary.by_category.iter().enumerate() {
        let row = header + 1 + offset as u32;
        worksheet.write_string(row, 0, category.label())?;
        worksheet.write_number_with_format(row, 1, *amount, &amount_format)?;
    }

    if let (Some((first, last)), Some(chart_row)) = (layout.breakdown_range(), layout.chart_row) {
        let mut chart = Chart::new(ChartType::Pie);
        chart
            .add_series()
            .set_name((SHEET_NAME, header, 1))
            .set_categories((SHEET_NAME, first, 0, last, 0))
            .set_values((SHEET_NAME, first, 1, last, 1));
        chart.title().set_name(CHART_TITLE);

        worksheet.insert_chart(chart_row, 0, &chart)?;
    }

    Ok(workbook)
}

fn write_expense_table(
    worksheet: &mut Worksheet,
    expenses: &[Expense],
    bold: &Format,
    amount_format: &Format,
) -> Result<(), XlsxError> {
    worksheet.write_string_with_format(0, 0, "Expense Name", bold)?;
    worksheet.write_string_with_format(0, 1, "Category", bold)?;
    worksheet.write_string_with_format(0, 2, "Amount", bold)?;

    for (index, expense) in expenses.iter().enumerate() {
        let row = 1 + index as u32;
        worksheet.write_string(row, 0, expense.name.as_str())?;
        worksheet.write_string(row, 1, expense.category.label())?;
        worksheet.write_number_with_format(row, 2, expense.amount, amount_format)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::{BudgetService, ExpenseService};
    use crate::storage::{FileStore, MemoryStore};
    use calamine::{open_workbook, Data, Range, Reader, Xlsx};
    use std::fs::File;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_layout_positions() {
        let layout = SheetLayout::new(2, 2);

        assert_eq!(layout.expense_rows, 2);
        // header 0, expenses 1-2, blank 3
        assert_eq!(layout.summary_row, 4);
        // summary lines 5-7, blanks 8-9
        assert_eq!(layout.breakdown_header_row, 10);
        assert_eq!(layout.breakdown_range(), Some((11, 12)));
        assert_eq!(layout.chart_row, Some(14));
    }

    #[test]
    fn test_layout_without_expenses_has_no_chart() {
        let layout = SheetLayout::new(0, 0);

        assert_eq!(layout.summary_row, 2);
        assert_eq!(layout.breakdown_header_row, 8);
        assert_eq!(layout.breakdown_range(), None);
        assert_eq!(layout.chart_row, None);
    }

    fn cell(range: &Range<Data>, row: u32, col: u32) -> Option<&Data> {
        range.get_value((row, col))
    }

    fn text(range: &Range<Data>, row: u32, col: u32) -> String {
        cell(range, row, col).map(|d| d.to_string()).unwrap_or_default()
    }

    fn read_entry(path: &Path, name: &str) -> String {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut contents = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn test_export_writes_workbook() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_backend(FileStore::new(temp_dir.path().join("expenses.csv")));
        BudgetService::new(&storage).set_budget(500.0).unwrap();
        let expenses = ExpenseService::new(&storage);
        expenses.add(&Expense::new("coffee", Category::Food, 3.5)).unwrap();
        expenses.add(&Expense::new("rent", Category::Home, 300.0)).unwrap();

        let output = temp_dir.path().join("report.xlsx");
        let layout = export_to_spreadsheet(&storage, &output, today(), "$").unwrap();
        assert_eq!(layout, SheetLayout::new(2, 2));

        let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();

        assert_eq!(text(&range, 0, 0), "Expense Name");
        assert_eq!(text(&range, 0, 1), "Category");
        assert_eq!(text(&range, 0, 2), "Amount");
        assert_eq!(text(&range, 1, 0), "coffee");
        assert_eq!(text(&range, 1, 1), "Food");
        assert_eq!(cell(&range, 1, 2), Some(&Data::Float(3.5)));
        assert_eq!(text(&range, 2, 0), "rent");
        assert_eq!(text(&range, 2, 1), "Home");
        assert_eq!(cell(&range, 2, 2), Some(&Data::Float(300.0)));
        assert_eq!(text(&range, 3, 0), "");

        assert_eq!(text(&range, 4, 0), "Summary");
        assert_eq!(text(&range, 5, 0), "Total Spent: $303.50");
        assert_eq!(text(&range, 6, 0), "Remaining Budget: $196.50");
        assert_eq!(text(&range, 7, 0), "Daily Budget: $15.12");
        assert_eq!(text(&range, 8, 0), "");
        assert_eq!(text(&range, 9, 0), "");

        assert_eq!(text(&range, 10, 0), "Category");
        assert_eq!(text(&range, 10, 1), "Amount");
        assert_eq!(text(&range, 11, 0), "Food");
        assert_eq!(cell(&range, 11, 1), Some(&Data::Float(3.5)));
        assert_eq!(text(&range, 12, 0), "Home");
        assert_eq!(cell(&range, 12, 1), Some(&Data::Float(300.0)));

        let chart = read_entry(&output, "xl/charts/chart1.xml");
        assert!(chart.contains("<c:pieChart>"));
        assert!(chart.contains("Expenses!$A$12:$A$13"));
        assert!(chart.contains("Expenses!$B$12:$B$13"));
        assert!(chart.contains(CHART_TITLE));

        let drawing = read_entry(&output, "xl/drawings/drawing1.xml");
        assert!(drawing.contains("<xdr:col>0</xdr:col>"));
        assert!(drawing.contains("<xdr:row>14</xdr:row>"));
    }

    #[test]
    fn test_export_budget_only() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_backend(MemoryStore::with_lines(["Budget, 50"]));

        let output = temp_dir.path().join("empty.xlsx");
        let layout = export_to_spreadsheet(&storage, &output, today(), "$").unwrap();

        assert_eq!(layout.chart_row, None);

        let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(text(&range, 2, 0), "Summary");
        assert_eq!(text(&range, 3, 0), "Total Spent: $0.00");
        assert_eq!(text(&range, 8, 0), "Category");
        assert_eq!(text(&range, 9, 0), "");

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert!(archive.by_name("xl/charts/chart1.xml").is_err());
    }

    #[test]
    fn test_export_without_store_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_backend(FileStore::new(temp_dir.path().join("missing.csv")));

        let output = temp_dir.path().join("report.xlsx");
        let err = export_to_spreadsheet(&storage, &output, today(), "$").unwrap_err();

        assert!(err.is_not_found());
        assert!(!output.exists());
    }

    #[test]
    fn test_export_malformed_store_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_backend(MemoryStore::with_lines([
            "Budget, 50",
            "fish, chips, 9, Food",
        ]));

        let output = temp_dir.path().join("report.xlsx");
        let err = export_to_spreadsheet(&storage, &output, today(), "$").unwrap_err();

        assert!(matches!(err, TrackerError::MalformedRecord { line: 2, .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_build_workbook_in_memory() {
        let expenses = vec![
            Expense::new("lunch", Category::Food, 12.0),
            Expense::new("laptop bag", Category::Work, 45.0),
        ];
        let summary = Summary::from_expenses(200.0, &expenses);

        let mut workbook = build_workbook(&expenses, &summary, today(), "€").unwrap();
        let buffer = workbook.save_to_buffer().unwrap();

        let mut reader: Xlsx<_> = Xlsx::new(Cursor::new(buffer)).unwrap();
        let range = reader.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(text(&range, 2, 0), "laptop bag");
        assert_eq!(text(&range, 2, 1), "Work");
        assert_eq!(text(&range, 5, 0), "Total Spent: €57.00");
        assert_eq!(text(&range, 6, 0), "Remaining Budget: €143.00");
        assert_eq!(text(&range, 7, 0), "Daily Budget: €11.00");
        assert_eq!(text(&range, 11, 0), "Food");
        assert_eq!(text(&range, 12, 0), "Work");
        assert_eq!(cell(&range, 12, 1), Some(&Data::Float(45.0)));
    }
}
