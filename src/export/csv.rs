//! CSV Export functionality
//!
//! One header record (`Category`, the twelve month keys, `Annual Total`) and
//! one record per row in display order. Amounts are plain decimals; labels
//! are quoted only when they contain a delimiter, quote or newline.

use std::io::Write;

use crate::error::{SheetError, SheetResult};
use crate::models::{format_plain, BudgetState, Month};

/// Suggested file name for downloads
pub const CSV_FILE_NAME: &str = "personal-finance-sheet.csv";

/// MIME type of the export
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Render the sheet as CSV text
///
/// Records are separated by `\n`; there is no terminator after the last one.
pub fn to_csv(state: &BudgetState) -> SheetResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(Month::ALL.len() + 2);
    header.push("Category".to_string());
    header.extend(Month::ALL.iter().map(|m| m.key().to_string()));
    header.push("Annual Total".to_string());
    writer.write_record(&header)?;

    for row in state.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.label.clone());
        record.extend(row.values.iter().map(|(_, value)| format_plain(value)));
        record.push(format_plain(row.annual_total()));
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SheetError::Export(format!("Failed to finish CSV: {}", e)))?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| SheetError::Export(format!("CSV is not valid UTF-8: {}", e)))?;

    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}

/// Write the sheet as CSV to `writer`
pub fn export_csv<W: Write>(state: &BudgetState, writer: &mut W) -> SheetResult<()> {
    let text = to_csv(state)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| SheetError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| SheetError::Export(e.to_string()))
}
