//! Spreadsheet reader
//!
//! Loads the first worksheet via calamine and renders it as a plain-text
//! table, preserving row and column order.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::domain::models::UploadedFile;
use crate::error::{AppError, Result};
use crate::ports::extraction::DocumentReaderPort;

pub struct SheetReader;

/// Render a cell range as a width-aligned text table.
fn render_table(range: &Range<Data>) -> String {
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths = vec![0usize; range.width()];
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            if col + 1 < row.len() {
                out.push_str(cell);
                for _ in cell.chars().count()..widths[col] {
                    out.push(' ');
                }
                out.push_str("  ");
            } else {
                out.push_str(cell);
            }
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

impl DocumentReaderPort for SheetReader {
    fn read(&self, file: &UploadedFile) -> Result<String> {
        let cursor = Cursor::new(file.bytes.as_slice());
        let mut workbook = open_workbook_auto_from_rs(cursor)
            .map_err(|e| AppError::Extraction(format!("failed to open workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::Extraction("workbook has no worksheets".to_string()))?
            .map_err(|e| AppError::Extraction(format!("failed to read worksheet: {e}")))?;

        Ok(render_table(&range))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xlsx", "xls"]
    }

    fn name(&self) -> &str {
        "sheet"
    }
}
