//! Spreadsheet export of the dosage calendar.
//!
//! Produces an `.xlsx` file with a header row and one row per cycle day.
//! Hormone names render as a colored rich string; multi-line cells use
//! wrapped text. Any cell-write or save failure aborts the whole export,
//! so no partial file is ever handed on.

use crate::error::Result;
use crate::types::CalendarRow;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "Schedule";
const HEADERS: [&str; 5] = ["Day", "Date", "Hormones", "Amount", "Notes"];

// Fixed column widths: Hormones wide enough for "Testosterone" on one
// line, Date widened for the date string.
const HORMONES_COL_WIDTH: f64 = 15.0;
const DATE_COL_WIDTH: f64 = 40.0;
const DATA_ROW_HEIGHT: f64 = 50.0;

/// Write the calendar rows to a spreadsheet at `path`.
///
/// Row 1 holds the headers; rows 2..=29 hold one [`CalendarRow`] each,
/// in the order given.
pub fn write_schedule_sheet(path: &Path, rows: &[CalendarRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write(0, col as u16, *header)?;
    }

    worksheet.set_column_width(1, DATE_COL_WIDTH)?;
    worksheet.set_column_width(2, HORMONES_COL_WIDTH)?;

    let wrap = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    for (i, row) in rows.iter().enumerate() {
        let sheet_row = i as u32 + 1; // data starts under the header row

        worksheet.write(sheet_row, 0, row.day)?;
        worksheet.write(sheet_row, 1, row.date.format("%Y-%m-%d").to_string())?;

        // Hormone names, one per line, each in its assigned color
        let hormone_formats: Vec<Format> = row
            .hormones
            .iter()
            .map(|h| Format::new().set_font_color(Color::RGB(h.color)))
            .collect();
        let segments: Vec<(&Format, &str)> = vec![
            (&hormone_formats[0], "Estrogen\n"),
            (&hormone_formats[1], "Progesterone\n"),
            (&hormone_formats[2], "Testosterone"),
        ];
        worksheet.write_rich_string_with_format(sheet_row, 2, &segments, &wrap)?;

        // Empty dosage text means the day is outside the table: write it
        // plain and skip the wrap styling.
        if row.dosage_text.is_empty() {
            worksheet.write(sheet_row, 3, "")?;
        } else {
            worksheet.write_with_format(sheet_row, 3, &row.dosage_text, &wrap)?;
        }

        worksheet.write(sheet_row, 4, &row.notes)?;
        worksheet.set_row_height(sheet_row, DATA_ROW_HEIGHT)?;
    }

    workbook.save(path)?;
    tracing::info!("Spreadsheet generated successfully: {}", path.display());
    Ok(())
}
