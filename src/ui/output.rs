use crate::error::{ScrapeError, UserFriendlyError};
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");

/// Formats diagnostic messages for the terminal.
///
/// Everything here goes to stderr: stdout is reserved for the extracted
/// bytes, and mixing styled messages into it would corrupt the output
/// stream when it is piped to a file.
pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stderr().features().colors_supported(),
            OutputMode::Plain => false,
        };

        Self { mode, use_colors }
    }

    pub fn success(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", CHECKMARK, style(message).green());
        } else {
            eprintln!("SUCCESS: {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", CROSS, style(message).red().bold());
        } else {
            eprintln!("ERROR: {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", WARNING, style(message).yellow());
        } else {
            eprintln!("WARNING: {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", INFO, message);
        } else {
            eprintln!("INFO: {}", message);
        }
    }

    pub fn print_user_friendly_error(&self, error: &ScrapeError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!("{}{}", INFO, style(format!("Suggestion: {}", suggestion)).cyan());
            } else {
                eprintln!("SUGGESTION: {}", suggestion);
            }
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}
