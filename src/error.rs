use crate::extractor::SUPPORTED_EXTENSIONS;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Unsupported file type: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {path}: {message}")]
    MalformedDocument { path: String, message: String },

    #[error("Failed to install dependency: {name}")]
    DependencyInstall { name: String },
}

impl ScrapeError {
    /// Attach the offending file path to a format-library parse error.
    pub fn malformed(path: &std::path::Path, error: impl std::fmt::Display) -> Self {
        ScrapeError::MalformedDocument {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ScrapeError {
    fn user_message(&self) -> String {
        match self {
            ScrapeError::UnsupportedFormat { extension } => {
                if extension.is_empty() {
                    "Unsupported file type: file has no extension".to_string()
                } else {
                    format!("Unsupported file type: {}", extension)
                }
            }
            ScrapeError::Io(source) => {
                format!("Could not read the file: {}", source)
            }
            ScrapeError::MalformedDocument { path, message } => {
                format!("Could not parse {}: {}", path, message)
            }
            ScrapeError::DependencyInstall { name } => {
                format!("Failed to install dependency: {}", name)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ScrapeError::UnsupportedFormat { .. } => Some(format!(
                "Supported file extensions are: {}",
                SUPPORTED_EXTENSIONS.join(", ")
            )),
            ScrapeError::Io(..) => Some(
                "Check that the file exists and that you have permission to read it.".to_string(),
            ),
            ScrapeError::MalformedDocument { .. } => Some(
                "The file may be corrupt or saved in a variant of the format this tool does not understand.".to_string(),
            ),
            ScrapeError::DependencyInstall { .. } => Some(
                "Check your network connection, or re-run the setup with a proxy address.".to_string(),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let error = ScrapeError::UnsupportedFormat {
            extension: ".json".to_string(),
        };
        assert!(error.user_message().contains(".json"));
        assert!(error.suggestion().unwrap().contains(".pdf"));
    }

    #[test]
    fn test_missing_extension_message() {
        let error = ScrapeError::UnsupportedFormat {
            extension: String::new(),
        };
        assert!(error.user_message().contains("no extension"));
    }

    #[test]
    fn test_malformed_carries_path() {
        let error = ScrapeError::malformed(std::path::Path::new("report.docx"), "bad zip");
        assert!(error.user_message().contains("report.docx"));
        assert!(error.user_message().contains("bad zip"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = ScrapeError::from(io_error);
        assert!(matches!(error, ScrapeError::Io(..)));
        assert!(error.suggestion().is_some());
    }
}
