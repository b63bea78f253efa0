//! Word document reader
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`.
//! Paragraph texts are collected and newline-joined. Legacy binary .doc
//! files are not zip archives and fail with a recoverable extraction error.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::models::UploadedFile;
use crate::error::{AppError, Result};
use crate::ports::extraction::DocumentReaderPort;

pub struct WordReader;

/// Collect the text of every `w:p` paragraph in document order.
fn document_paragraphs(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| AppError::Extraction(format!("malformed document XML: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Extraction(format!("malformed document XML: {e}")));
            }
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

impl DocumentReaderPort for WordReader {
    fn read(&self, file: &UploadedFile) -> Result<String> {
        let cursor = Cursor::new(file.bytes.as_slice());
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| AppError::Extraction(format!("failed to open document archive: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| AppError::Extraction(format!("document body missing: {e}")))?
            .read_to_string(&mut xml)
            .map_err(|e| AppError::Extraction(format!("failed to read document body: {e}")))?;

        document_paragraphs(&xml)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["docx", "doc"]
    }

    fn name(&self) -> &str {
        "word"
    }
}
