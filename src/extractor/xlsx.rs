use crate::error::{Result, ScrapeError};
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::path::Path;

/// Extract text from an XLSX file.
///
/// Rows of the first worksheet are walked top-to-bottom, cells
/// left-to-right. Each row becomes one tab-separated line. Numeric,
/// boolean and datetime cells are stringified through their canonical
/// display form; an error cell (e.g. a formula error) is treated as a
/// structural failure rather than silently skipped.
pub fn extract_xlsx(path: &Path) -> Result<String> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| from_xlsx_error(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScrapeError::malformed(path, "workbook contains no worksheets"))?
        .map_err(|e| from_xlsx_error(path, e))?;

    let mut lines = Vec::with_capacity(range.height());
    for row in range.rows() {
        let mut cells = Vec::with_capacity(row.len());
        for cell in row {
            cells.push(cell_text(path, cell)?);
        }
        lines.push(cells.join("\t"));
    }

    Ok(lines.join("\n"))
}

fn cell_text(path: &Path, cell: &Data) -> Result<String> {
    match cell {
        Data::Int(value) => Ok(value.to_string()),
        Data::Float(value) => Ok(value.to_string()),
        Data::String(value) => Ok(value.clone()),
        Data::Bool(value) => Ok(value.to_string()),
        Data::DateTime(value) => value
            .as_datetime()
            .map(|datetime| datetime.to_string())
            .ok_or_else(|| ScrapeError::malformed(path, "datetime cell out of range")),
        Data::DateTimeIso(value) => Ok(value.clone()),
        Data::DurationIso(value) => Ok(value.clone()),
        Data::Empty => Ok(String::new()),
        Data::Error(error) => Err(ScrapeError::malformed(
            path,
            format!("cell contains an error value: {:?}", error),
        )),
    }
}

fn from_xlsx_error(path: &Path, error: XlsxError) -> ScrapeError {
    match error {
        XlsxError::Io(source) => ScrapeError::Io(source),
        other => ScrapeError::malformed(path, other),
    }
}
