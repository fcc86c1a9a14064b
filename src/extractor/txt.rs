use crate::error::Result;
use std::fs;
use std::path::Path;

/// Extract text from a plain text file.
///
/// The contents are returned verbatim; no trimming, no added newline.
pub fn extract_txt(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(text)
}
