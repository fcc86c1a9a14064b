//! Format dispatch and per-format text extraction.
//!
//! Each supported format has fundamentally different internal structure
//! (DOM tree, paragraph list, cell grid, byte stream, line list, page
//! stream), so dispatch selects one format-specialized routine rather than
//! forcing a shared parser abstraction. The only common contract is
//! "produce newline-joined flattened text".

mod csv;
mod docx;
mod html;
mod pdf;
mod txt;
mod xlsx;

pub use csv::extract_csv;
pub use docx::extract_docx;
pub use html::extract_html;
pub use pdf::extract_pdf;
pub use txt::extract_txt;
pub use xlsx::extract_xlsx;

use crate::error::{Result, ScrapeError};
use std::path::Path;

/// Extensions the dispatcher accepts, lowercased, with leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &[".html", ".htm", ".docx", ".xlsx", ".txt", ".csv", ".pdf"];

/// Supported document formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Html,
    Docx,
    Xlsx,
    Txt,
    Csv,
    Pdf,
}

impl FileFormat {
    /// Resolve a file path to its format by lowercased extension.
    ///
    /// This never touches the filesystem; an extension outside the closed
    /// set fails with `UnsupportedFormat` before any open attempt.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        match extension.as_str() {
            ".html" | ".htm" => Ok(FileFormat::Html),
            ".docx" => Ok(FileFormat::Docx),
            ".xlsx" => Ok(FileFormat::Xlsx),
            ".txt" => Ok(FileFormat::Txt),
            ".csv" => Ok(FileFormat::Csv),
            ".pdf" => Ok(FileFormat::Pdf),
            _ => Err(ScrapeError::UnsupportedFormat { extension }),
        }
    }

    /// Run the extraction routine for this format.
    pub fn extract(&self, path: &Path) -> Result<String> {
        match self {
            FileFormat::Html => extract_html(path),
            FileFormat::Docx => extract_docx(path),
            FileFormat::Xlsx => extract_xlsx(path),
            FileFormat::Txt => extract_txt(path),
            FileFormat::Csv => extract_csv(path),
            FileFormat::Pdf => extract_pdf(path),
        }
    }

    /// Human-readable format name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::Html => "html",
            FileFormat::Docx => "word",
            FileFormat::Xlsx => "excel",
            FileFormat::Txt => "text",
            FileFormat::Csv => "csv",
            FileFormat::Pdf => "pdf",
        }
    }
}
