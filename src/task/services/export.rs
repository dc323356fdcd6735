//! Tabular XLSX export of the task collection.

use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Worksheet name used for the exported table.
const SHEET_NAME: &str = "Tasks";

/// Column headers, in the fixed export order.
const COLUMN_HEADERS: [&str; 6] = [
    "Title",
    "Description",
    "Status",
    "Due Date",
    "Completed At",
    "Created At",
];

/// Timestamp rendering used for every date column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders tasks as an XLSX workbook with one header row and one row per
/// task, in input order.
///
/// Absent optional fields render as empty cells. An empty slice produces a
/// valid header-only workbook.
///
/// # Errors
///
/// Returns [`XlsxError`] when the workbook cannot be assembled or
/// serialized.
pub fn render_tasks_workbook(tasks: &[Task]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    worksheet.write_row_with_format(0, 0, COLUMN_HEADERS, &header_format)?;

    let mut row: u32 = 1;
    for task in tasks {
        worksheet.write_row(row, 0, task_cells(task))?;
        row += 1;
    }

    workbook.save_to_buffer()
}

/// Builds the cell values for one task row, in column order.
fn task_cells(task: &Task) -> [String; 6] {
    [
        task.title().to_owned(),
        task.description().unwrap_or_default().to_owned(),
        task.status().as_str().to_owned(),
        format_timestamp(task.due_date()),
        format_timestamp(task.completed_at()),
        format_timestamp(Some(task.created_at())),
    ]
}

/// Formats an optional timestamp, rendering absence as an empty string.
fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(String::new, |ts| ts.format(TIMESTAMP_FORMAT).to_string())
}
