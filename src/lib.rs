pub mod cli;
pub mod error;
pub mod extractor;
pub mod setup;
pub mod ui;

// Public API re-exports
pub use cli::Cli;
pub use error::{Result, ScrapeError, UserFriendlyError};
pub use extractor::{FileFormat, SUPPORTED_EXTENSIONS};
pub use setup::{Dependency, ProxySettings};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Extract flattened text from the file at `path`.
///
/// The extension selects the format routine; the routine reads the file
/// and returns newline-joined text. Errors propagate untouched: an
/// unsupported extension fails before any I/O, everything else surfaces
/// from the underlying open or parse attempt.
pub fn scrape_file(path: &Path) -> Result<String> {
    let format = FileFormat::from_path(path)?;
    format.extract(path)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_scrape_file_dispatches_by_extension() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "hello").unwrap();

        let text = scrape_file(file.path()).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_scrape_file_rejects_unsupported_extension() {
        let result = scrape_file(Path::new("/nonexistent/data.json"));
        assert!(matches!(
            result,
            Err(ScrapeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
