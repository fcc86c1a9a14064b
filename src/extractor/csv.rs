use crate::error::Result;
use std::fs;
use std::path::Path;

/// Extract text from a CSV file.
///
/// Lines are kept as-is apart from trailing whitespace, so the cell
/// structure (commas, quoting) passes through untouched. The result has
/// no trailing newline.
pub fn extract_csv(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().map(|line| line.trim_end()).collect();
    Ok(lines.join("\n"))
}
