//! PowerPoint reader
//!
//! A .pptx file is a zip archive with one XML part per slide under
//! `ppt/slides/slideN.xml`. Slides are walked in numeric order; every
//! text-carrying paragraph (`a:p`) contributes its text plus a newline.
//! Shapes without text contribute nothing.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::models::UploadedFile;
use crate::error::{AppError, Result};
use crate::ports::extraction::DocumentReaderPort;

pub struct SlidesReader;

fn slide_number(part_name: &str) -> Option<u32> {
    part_name
        .strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Append each paragraph's text plus a trailing newline.
fn slide_text(xml: &str, out: &mut String) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"a:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"a:p" => {
                    if !current.is_empty() {
                        out.push_str(&current);
                        out.push('\n');
                        current.clear();
                    }
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| AppError::Extraction(format!("malformed slide XML: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(AppError::Extraction(format!("malformed slide XML: {e}"))),
            _ => {}
        }
    }

    Ok(())
}

impl DocumentReaderPort for SlidesReader {
    fn read(&self, file: &UploadedFile) -> Result<String> {
        let cursor = Cursor::new(file.bytes.as_slice());
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| AppError::Extraction(format!("failed to open slides archive: {e}")))?;

        let mut slides: Vec<(u32, String)> = archive
            .file_names()
            .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
            .collect();
        slides.sort_by_key(|(number, _)| *number);

        let mut content = String::new();
        for (_, part_name) in &slides {
            let mut xml = String::new();
            archive
                .by_name(part_name)
                .map_err(|e| AppError::Extraction(format!("slide part missing: {e}")))?
                .read_to_string(&mut xml)
                .map_err(|e| AppError::Extraction(format!("failed to read slide part: {e}")))?;
            slide_text(&xml, &mut content)?;
        }

        Ok(content)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pptx", "ppt"]
    }

    fn name(&self) -> &str {
        "slides"
    }
}
