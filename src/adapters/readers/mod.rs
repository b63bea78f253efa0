//! Document readers
//!
//! Implementations of the DocumentReaderPort trait, one per format family,
//! plus the registry that dispatches on file extension and aggregates
//! multi-file uploads into a single labeled blob.

pub mod image;
pub mod pdf;
pub mod sheet;
pub mod slides;
pub mod word;

pub use image::ImageReader;
pub use pdf::PdfReader;
pub use sheet::SheetReader;
pub use slides::SlidesReader;
pub use word::WordReader;

use crate::domain::models::{ExtractionDiagnostic, MaterialsContent, UploadedFile};
use crate::error::Result;
use crate::ports::extraction::DocumentReaderPort;

/// Dispatches uploaded files to format-specific readers and aggregates
/// their output. Files are processed strictly in upload order.
pub struct ReaderRegistry {
    readers: Vec<Box<dyn DocumentReaderPort>>,
}

impl ReaderRegistry {
    /// Registry over all supported format families.
    pub fn new() -> Self {
        Self::with_readers(vec![
            Box::new(PdfReader),
            Box::new(WordReader),
            Box::new(SlidesReader),
            Box::new(SheetReader),
            Box::new(ImageReader),
        ])
    }

    pub fn with_readers(readers: Vec<Box<dyn DocumentReaderPort>>) -> Self {
        Self { readers }
    }

    fn reader_for(&self, extension: &str) -> Option<&dyn DocumentReaderPort> {
        self.readers
            .iter()
            .find(|reader| reader.supports(extension))
            .map(|reader| reader.as_ref())
    }

    pub fn supports(&self, extension: &str) -> bool {
        self.reader_for(extension).is_some()
    }

    /// Extract plain text from a single file.
    ///
    /// Unsupported extensions yield an empty string rather than an error;
    /// the batch must not abort over one odd upload.
    pub fn extract(&self, file: &UploadedFile) -> Result<String> {
        let extension = file.extension();
        match self.reader_for(&extension) {
            Some(reader) => reader.read(file),
            None => {
                log::warn!(
                    "Skipping {}: unsupported file type {:?}",
                    file.filename,
                    extension
                );
                Ok(String::new())
            }
        }
    }

    /// Extract every file in upload order and concatenate the results.
    ///
    /// Non-empty text is appended under a `=== Content from {filename} ===`
    /// header. Files that fail or yield nothing are skipped; failures and
    /// unsupported types are recorded as diagnostics. Never errors.
    pub fn extract_all(&self, files: &[UploadedFile]) -> MaterialsContent {
        let mut content = MaterialsContent::default();

        for file in files {
            let extension = file.extension();
            if !self.supports(&extension) {
                log::warn!(
                    "Skipping {}: unsupported file type {:?}",
                    file.filename,
                    extension
                );
                content.diagnostics.push(ExtractionDiagnostic {
                    filename: file.filename.clone(),
                    message: format!("unsupported file type {extension:?}"),
                });
                continue;
            }

            match self.extract(file) {
                Ok(text) if !text.is_empty() => {
                    content
                        .text
                        .push_str(&format!("\n\n=== Content from {} ===\n", file.filename));
                    content.text.push_str(&text);
                }
                Ok(_) => {
                    log::debug!("No text extracted from {}", file.filename);
                }
                Err(err) => {
                    log::warn!("Error processing {}: {}", file.filename, err);
                    content.diagnostics.push(ExtractionDiagnostic {
                        filename: file.filename.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        content
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
