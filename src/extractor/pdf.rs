use crate::error::{Result, ScrapeError};
use lopdf::Document;
use std::fs;
use std::io::BufReader;
use std::path::Path;

/// Extract text from a PDF file.
///
/// Pages are walked in document order and each page's text is recovered
/// independently, trimmed of trailing layout whitespace, and appended as
/// one block. Image-only pages contribute empty blocks; no OCR is
/// attempted.
pub fn extract_pdf(path: &Path) -> Result<String> {
    let file = fs::File::open(path)?;
    let document =
        Document::load_from(BufReader::new(file)).map_err(|e| ScrapeError::malformed(path, e))?;

    let mut pages = Vec::new();
    for (&number, _) in document.get_pages().iter() {
        let page_text = document
            .extract_text(&[number])
            .map_err(|e| ScrapeError::malformed(path, e))?;
        pages.push(page_text.trim_end().to_string());
    }

    Ok(pages.join("\n"))
}
