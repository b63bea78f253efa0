/// Document reader port trait
///
/// One implementation per format family (PDF, Word, slides, sheets,
/// images). Readers are synchronous: extraction is CPU-bound and files are
/// processed strictly in upload order.
use crate::domain::models::UploadedFile;
use crate::error::Result;

/// Port trait for format-specific text extraction
pub trait DocumentReaderPort: Send + Sync {
    /// Extract plain text from the file. Must not mutate the input buffer.
    fn read(&self, file: &UploadedFile) -> Result<String>;

    /// Lowercased extensions this reader handles.
    fn supported_extensions(&self) -> &[&str];

    /// Check whether this reader handles the given normalized extension.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions().contains(&extension)
    }

    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;
}
