//! Schedule workbook writer

use crate::constants::output_sheet::{
    DATE_COLUMN, DATE_COLUMN_WIDTH, DATE_NUM_FORMAT, HEADERS, SHEET_NAME,
};
use crate::error::AppError;
use crate::models::Schedule;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Writes a schedule as a single-sheet workbook.
///
/// Layout: a header row `Home Team | Away Team | Date`, then one fixture per
/// row with the date stored as an Excel date formatted `yyyy-mm-dd` in a
/// column of width 12. An existing file at `path` is overwritten.
pub fn write_schedule(path: impl AsRef<Path>, schedule: &Schedule) -> Result<(), AppError> {
    let path = path.as_ref();
    schedule_workbook(schedule)?.save(path)?;
    info!("Wrote {} fixtures to {}", schedule.len(), path.display());
    Ok(())
}

fn schedule_workbook(schedule: &Schedule) -> Result<Workbook, AppError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let date_format = Format::new().set_num_format(DATE_NUM_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *title, &header_format)?;
    }
    worksheet.set_column_width(DATE_COLUMN, DATE_COLUMN_WIDTH)?;
    worksheet.set_column_format(DATE_COLUMN, &date_format)?;

    for (index, fixture) in schedule.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &fixture.home)?;
        worksheet.write_string(row, 1, &fixture.away)?;
        worksheet.write_datetime_with_format(row, DATE_COLUMN, &fixture.date, &date_format)?;
    }

    Ok(workbook)
}

/// Saves a schedule workbook into a temporary file inside `dir`.
fn stage_schedule(dir: &Path, schedule: &Schedule) -> Result<NamedTempFile, AppError> {
    let mut staged = NamedTempFile::new_in(dir)?;
    schedule_workbook(schedule)?.save_to_writer(staged.as_file_mut())?;
    Ok(staged)
}

/// Writes the before and after schedules into `output_dir`.
///
/// The directory is created if missing. Both workbooks are staged as
/// temporary files and moved into place only once both saved; if either
/// step fails neither file is left behind. Returns the two written paths.
pub fn write_schedule_outputs(
    output_dir: impl AsRef<Path>,
    initial_file: &str,
    updated_file: &str,
    initial: &Schedule,
    updated: &Schedule,
) -> Result<(PathBuf, PathBuf), AppError> {
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let initial_path = output_dir.join(initial_file);
    let updated_path = output_dir.join(updated_file);

    let staged_initial = stage_schedule(output_dir, initial)?;
    let staged_updated = stage_schedule(output_dir, updated)?;

    staged_initial
        .persist(&initial_path)
        .map_err(|e| AppError::Io(e.error))?;
    if let Err(e) = staged_updated.persist(&updated_path) {
        if let Err(cleanup) = fs::remove_file(&initial_path) {
            warn!(
                "Failed to remove {} after incomplete write: {cleanup}",
                initial_path.display()
            );
        }
        return Err(AppError::Io(e.error));
    }

    info!(
        "Wrote {} and {} fixtures to {} and {}",
        initial.len(),
        updated.len(),
        initial_path.display(),
        updated_path.display()
    );
    Ok((initial_path, updated_path))
}
