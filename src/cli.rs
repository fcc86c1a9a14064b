use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textscrape")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract plain text from documents")]
#[command(
    long_about = "TextScrape reads a document, flattens it to plain text, and writes \
                  the result to standard output as UTF-8 bytes. The extraction routine \
                  is selected by file extension."
)]
#[command(after_help = "SUPPORTED FORMATS:\n  \
    .html .htm .docx .xlsx .txt .csv .pdf\n\n\
    EXAMPLES:\n  \
    textscrape report.pdf > report.txt\n  \
    textscrape notes.docx | grep -i deadline")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// The file to extract text from
    pub filepath: PathBuf,
}
