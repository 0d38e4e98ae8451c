//! Word-processor export of the dosage calendar.
//!
//! Produces a `.docx` file with a title paragraph and one bordered table:
//! a header row plus 28 data rows. After saving, the file is checked to
//! exist, be non-empty, and reopen cleanly before the export counts as
//! complete; a corrupt or zero-byte document must never reach the mailer.

use crate::error::{Error, Result};
use crate::types::CalendarRow;
use docx_rs::{
    BorderType, Docx, Paragraph, Run, Table, TableBorder, TableBorderPosition, TableBorders,
    TableCell, TableRow,
};
use std::fs::File;
use std::path::{Path, PathBuf};

const TITLE: &str = "Hormone Tracking";
const HEADERS: [&str; 5] = ["Day", "Date", "Hormones", "Amount", "Notes"];

/// Write the calendar rows to a document at `path`.
///
/// A missing `.docx` extension is appended. Returns the path actually
/// written, which the caller hands to the mailer.
pub fn write_schedule_doc(path: &Path, rows: &[CalendarRow]) -> Result<PathBuf> {
    let path = ensure_docx_extension(path);

    let table = build_table(rows);

    let title = Paragraph::new()
        .add_run(Run::new().add_text(TITLE))
        .style("Title");

    let file = File::create(&path)?;
    Docx::new()
        .add_paragraph(title)
        .add_table(table)
        .build()
        .pack(file)
        .map_err(|e| Error::Doc(format!("failed to save document {:?}: {}", path, e)))?;

    verify_file_is_ready(&path)?;

    tracing::info!("Document generated successfully: {}", path.display());
    Ok(path)
}

fn ensure_docx_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "docx" => path.to_path_buf(),
        _ => path.with_extension("docx"),
    }
}

fn build_table(rows: &[CalendarRow]) -> Table {
    let header_row = TableRow::new(HEADERS.iter().map(|h| text_cell(h)).collect());

    let mut table_rows = vec![header_row];
    for row in rows {
        let mut hormone_cell = TableCell::new();
        for hormone in &row.hormones {
            hormone_cell = hormone_cell.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(format!("\u{20}\u{20}{}", hormone.name))),
            );
        }

        table_rows.push(TableRow::new(vec![
            text_cell(&row.day.to_string()),
            text_cell(&format!("\t{}", row.date.format("%Y-%m-%d"))),
            hormone_cell,
            multiline_cell(&row.dosage_text),
            text_cell(&row.notes),
        ]));
    }

    // Outer bottom border plus inner separators, dotted green between rows
    let borders = TableBorders::new()
        .set(
            TableBorder::new(TableBorderPosition::Bottom)
                .border_type(BorderType::Single)
                .size(2)
                .color("000000"),
        )
        .set(
            TableBorder::new(TableBorderPosition::InsideH)
                .border_type(BorderType::Dotted)
                .size(1)
                .color("008000"),
        )
        .set(
            TableBorder::new(TableBorderPosition::InsideV)
                .border_type(BorderType::Single)
                .size(1)
                .color("000000"),
        );

    Table::new(table_rows).set_borders(borders)
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

/// One paragraph per line so the amounts stack inside the cell the same
/// way the hormone names do.
fn multiline_cell(text: &str) -> TableCell {
    let mut cell = TableCell::new();
    for line in text.split('\n') {
        cell = cell.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }
    cell
}

/// Post-write integrity check: the saved file must exist, be non-empty,
/// and reopen without error.
fn verify_file_is_ready(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|_| {
        Error::Integrity(format!(
            "file {:?} does not exist, document saving failed",
            path
        ))
    })?;

    if metadata.len() == 0 {
        return Err(Error::Integrity(format!(
            "file {:?} is empty, document writing failed",
            path
        )));
    }

    File::open(path).map_err(|e| {
        Error::Integrity(format!(
            "file {:?} is still locked or not closed properly: {}",
            path, e
        ))
    })?;

    Ok(())
}
