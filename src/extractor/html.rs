use crate::error::Result;
use scraper::Html;
use std::fs;
use std::path::Path;

/// Extract text from an HTML file.
///
/// The document is parsed into a DOM and every text node is emitted in
/// document order, one node per line. Markup is dropped; nothing else is
/// filtered or reflowed.
pub fn extract_html(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    let document = Html::parse_document(&contents);

    let segments: Vec<&str> = document.root_element().text().collect();
    Ok(segments.join("\n"))
}
