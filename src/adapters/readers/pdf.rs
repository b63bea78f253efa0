//! PDF reader
//!
//! Extracts the text of every page via pdf-extract; page texts arrive
//! newline-separated in document order.

use crate::domain::models::UploadedFile;
use crate::error::{AppError, Result};
use crate::ports::extraction::DocumentReaderPort;

pub struct PdfReader;

impl DocumentReaderPort for PdfReader {
    fn read(&self, file: &UploadedFile) -> Result<String> {
        pdf_extract::extract_text_from_mem(&file.bytes)
            .map_err(|e| AppError::Extraction(format!("failed to parse PDF: {e}")))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }
}
