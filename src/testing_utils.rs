use crate::constants::input_sheet::{DATE_COLUMN, LOCATION_COLUMN, MATCH_COLUMN};
use crate::error::AppError;
use crate::models::InternationalMatch;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Value written to the date column of a test international match sheet
#[derive(Debug, Clone)]
pub enum DateCell {
    /// Stored as a text cell, exactly as given
    Text(String),
    /// Stored as a spreadsheet datetime
    DateTime(NaiveDateTime),
}

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Parses a `YYYY-MM-DD` date, panicking on bad input
    pub fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .unwrap_or_else(|e| panic!("invalid test date '{text}': {e}"))
    }

    pub fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    /// International match kicking off at midnight
    pub fn international(home: &str, away: &str, location: &str, date: &str) -> InternationalMatch {
        InternationalMatch::new(home, away, location, Self::date(date), NaiveTime::MIN)
    }

    /// Writes an international match sheet with text date cells.
    ///
    /// Each row is `(match, location, date)` and is written verbatim.
    pub fn write_international_sheet(
        path: &Path,
        rows: &[(&str, &str, &str)],
    ) -> Result<(), AppError> {
        let rows: Vec<(String, String, DateCell)> = rows
            .iter()
            .map(|(matchup, location, date)| {
                (
                    matchup.to_string(),
                    location.to_string(),
                    DateCell::Text(date.to_string()),
                )
            })
            .collect();
        Self::write_international_sheet_cells(path, &rows)
    }

    /// Writes an international match sheet with mixed date cell types.
    pub fn write_international_sheet_cells(
        path: &Path,
        rows: &[(String, String, DateCell)],
    ) -> Result<(), AppError> {
        let mut workbook = Workbook::new();
        let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, MATCH_COLUMN)?;
        worksheet.write_string(0, 1, LOCATION_COLUMN)?;
        worksheet.write_string(0, 2, DATE_COLUMN)?;

        for (index, (matchup, location, date)) in rows.iter().enumerate() {
            let row = (index + 1) as u32;
            worksheet.write_string(row, 0, matchup)?;
            worksheet.write_string(row, 1, location)?;
            match date {
                DateCell::Text(text) => {
                    worksheet.write_string(row, 2, text)?;
                }
                DateCell::DateTime(datetime) => {
                    worksheet.write_datetime_with_format(row, 2, datetime, &datetime_format)?;
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
