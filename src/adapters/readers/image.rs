//! Image reader with OCR
//!
//! Decodes the image, normalizes it to 3-channel RGB, writes it to a scoped
//! temporary PNG, and runs tesseract over it. Unlike the other readers,
//! failures here never propagate: any problem yields a fixed placeholder
//! string, so the file still shows up in the aggregated materials.

use crate::domain::models::UploadedFile;
use crate::error::{AppError, Result};
use crate::ports::extraction::DocumentReaderPort;

/// Returned in place of recognized text when decoding or OCR fails.
pub const OCR_FAILURE_PLACEHOLDER: &str = "Error: Could not extract text from image.";

pub struct ImageReader;

impl ImageReader {
    fn recognize(&self, file: &UploadedFile) -> Result<String> {
        let decoded = image::load_from_memory(&file.bytes)
            .map_err(|e| AppError::Extraction(format!("failed to decode image: {e}")))?;
        let normalized = image::DynamicImage::ImageRgb8(decoded.to_rgb8());

        // Tesseract runs over a file on disk; the temp PNG is removed when
        // this scope exits, on success and failure alike.
        let temp = tempfile::Builder::new()
            .prefix("note-smart-ocr-")
            .suffix(".png")
            .tempfile()?;
        normalized
            .save_with_format(temp.path(), image::ImageFormat::Png)
            .map_err(|e| AppError::Extraction(format!("failed to write OCR input: {e}")))?;

        let ocr_input = rusty_tesseract::Image::from_path(temp.path())
            .map_err(|e| AppError::Extraction(format!("failed to load OCR input: {e}")))?;
        let args = rusty_tesseract::Args::default();
        rusty_tesseract::image_to_string(&ocr_input, &args)
            .map_err(|e| AppError::Extraction(format!("OCR failed: {e}")))
    }
}

impl DocumentReaderPort for ImageReader {
    fn read(&self, file: &UploadedFile) -> Result<String> {
        match self.recognize(file) {
            Ok(text) => Ok(text),
            Err(err) => {
                log::warn!("Image processing error for {}: {}", file.filename, err);
                Ok(OCR_FAILURE_PLACEHOLDER.to_string())
            }
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["png", "jpg", "jpeg"]
    }

    fn name(&self) -> &str {
        "image"
    }
}
