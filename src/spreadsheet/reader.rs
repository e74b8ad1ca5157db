//! International match sheet reader
//!
//! Reads the first worksheet of an `.xlsx`/`.xls`/`.ods` file whose header row
//! names the columns `match`, `location` and `date`.

use crate::constants::formats::MATCH_DATETIME;
use crate::constants::input_sheet::{DATE_COLUMN, LOCATION_COLUMN, MATCH_COLUMN, TEAM_SEPARATOR};
use crate::error::AppError;
use crate::models::InternationalMatch;
use calamine::{Data, DataType, Range, Reader, open_workbook_auto};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{debug, info, warn};

/// Column positions of the required headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    match_col: usize,
    location_col: usize,
    date_col: usize,
}

/// Reads international matches from a spreadsheet.
///
/// A path that is not an existing file is not an error: a notice is printed
/// and an empty list returned. Any malformed row aborts the whole read.
///
/// # Errors
/// * `AppError::SpreadsheetRead` - the file could not be opened as a workbook
/// * `AppError::MissingColumn` - a required header is absent
/// * `AppError::MalformedMatch` - a match cell is not `"<home> vs <away>"`
/// * `AppError::InvalidMatchDate` - a date cell does not read as `YYYY-MM-DD HH:MM:SS`
pub fn read_international_matches(
    path: impl AsRef<Path>,
) -> Result<Vec<InternationalMatch>, AppError> {
    let path = path.as_ref();
    if !path.is_file() {
        println!("File '{}' not found.", path.display());
        warn!("International match file not found: {}", path.display());
        return Ok(Vec::new());
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => {
            warn!("Workbook {} has no worksheets", path.display());
            return Ok(Vec::new());
        }
    };

    let matches = parse_range(&range)?;
    info!(
        "Loaded {} international matches from {}",
        matches.len(),
        path.display()
    );
    Ok(matches)
}

fn parse_range(range: &Range<Data>) -> Result<Vec<InternationalMatch>, AppError> {
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let mut rows = range
        .rows()
        .enumerate()
        .filter(|(_, cells)| !is_blank_row(cells))
        .map(|(offset, cells)| (first_row + offset + 1, cells));

    let Some((_, header)) = rows.next() else {
        debug!("International match sheet is empty");
        return Ok(Vec::new());
    };
    let layout = locate_columns(header)?;

    rows.map(|(row_number, cells)| parse_row(row_number, cells, layout))
        .collect()
}

fn is_blank_row(cells: &[Data]) -> bool {
    cells.iter().all(|cell| matches!(cell, Data::Empty))
}

fn locate_columns(header: &[Data]) -> Result<ColumnLayout, AppError> {
    let find = |name: &str| {
        header
            .iter()
            .position(|cell| matches!(cell, Data::String(title) if title == name))
            .ok_or_else(|| AppError::missing_column(name))
    };

    Ok(ColumnLayout {
        match_col: find(MATCH_COLUMN)?,
        location_col: find(LOCATION_COLUMN)?,
        date_col: find(DATE_COLUMN)?,
    })
}

fn parse_row(
    row_number: usize,
    cells: &[Data],
    layout: ColumnLayout,
) -> Result<InternationalMatch, AppError> {
    let empty = Data::Empty;
    let cell = |col: usize| cells.get(col).unwrap_or(&empty);

    let (home, away) = match cell(layout.match_col) {
        Data::String(text) => parse_match_teams(text)
            .ok_or_else(|| AppError::malformed_match(row_number, text.as_str()))?,
        other => return Err(AppError::malformed_match(row_number, other.to_string())),
    };

    let location = cell(layout.location_col).to_string();

    let date_text = date_cell_text(cell(layout.date_col));
    let starts_at = parse_match_date(&date_text)
        .ok_or_else(|| AppError::invalid_match_date(row_number, date_text.as_str()))?;

    Ok(InternationalMatch::at(home, away, location, starts_at))
}

/// Text form of a date cell before strict parsing.
///
/// Spreadsheet datetimes are rendered as `YYYY-MM-DD HH:MM:SS`; text cells are
/// used verbatim so a date without a time of day is rejected later.
fn date_cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(datetime) => datetime.format(MATCH_DATETIME).to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

/// Splits `"<home> vs <away>"` into its two team names.
///
/// Returns `None` unless the separator occurs exactly once.
pub fn parse_match_teams(text: &str) -> Option<(String, String)> {
    let mut parts = text.split(TEAM_SEPARATOR);
    let home = parts.next()?;
    let away = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((home.to_string(), away.to_string()))
}

/// Parses a match timestamp in the fixed `YYYY-MM-DD HH:MM:SS` form.
pub fn parse_match_date(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, MATCH_DATETIME).ok()
}
