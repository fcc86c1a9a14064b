use crate::error::{Result, ScrapeError};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// Extract text from a DOCX file.
///
/// DOCX files are zip archives; the body lives in `word/document.xml`.
/// Each `w:p` paragraph becomes one output line, in document order, and an
/// empty paragraph yields an empty line. Text is taken from `w:t` runs
/// only, so formatting markup never leaks into the output.
pub fn extract_docx(path: &Path) -> Result<String> {
    let file = fs::File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| ScrapeError::malformed(path, e))?;
    let document = archive
        .by_name("word/document.xml")
        .map_err(|e| ScrapeError::malformed(path, e))?;

    let mut reader = Reader::from_reader(BufReader::new(document));
    let mut buf = Vec::with_capacity(1024);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                // Self-closing <w:p/> is an empty paragraph.
                if e.local_name().as_ref() == b"p" {
                    paragraphs.push(String::new());
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().map_err(|e| ScrapeError::malformed(path, e))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ScrapeError::malformed(path, e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}
