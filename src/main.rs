use clap::Parser;
use std::io::Write;
use std::process;
use textscrape::{scrape_file, Cli, OutputFormatter, OutputMode, ScrapeError};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(OutputMode::Human);

    let text = match scrape_file(&cli.filepath) {
        Ok(text) => text,
        Err(error) => {
            formatter.print_user_friendly_error(&error);
            return exit_code_for(&error);
        }
    };

    // Raw bytes on stdout: no styling, no platform newline translation,
    // no trailing newline beyond what the document produced.
    if let Err(error) = std::io::stdout().write_all(text.as_bytes()) {
        formatter.error(&format!("Failed to write output: {}", error));
        return 1;
    }

    0
}

fn exit_code_for(error: &ScrapeError) -> i32 {
    match error {
        ScrapeError::UnsupportedFormat { .. } => 2,
        ScrapeError::Io(..) => 3,
        ScrapeError::MalformedDocument { .. } => 4,
        _ => 1,
    }
}
