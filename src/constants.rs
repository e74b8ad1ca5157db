//! Application-wide constants
//!
//! File names, sheet layout and date formats shared by the reader, the
//! writer and the console report.

/// Application name used for the config directory and log file
pub const APP_NAME: &str = "fixture_planner";

/// Default log file name
pub const LOG_FILE_NAME: &str = "fixture_planner.log";

/// Default output directory for the generated workbooks
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Default file name for the schedule before conflict resolution
pub const DEFAULT_INITIAL_SCHEDULE_FILE: &str = "initial_schedule.xlsx";

/// Default file name for the schedule after conflict resolution
pub const DEFAULT_UPDATED_SCHEDULE_FILE: &str = "updated_schedule.xlsx";

/// Environment variable names that override config file values
pub mod env {
    pub const LOG_FILE: &str = "FIXTURE_PLANNER_LOG_FILE";
    pub const OUTPUT_DIR: &str = "FIXTURE_PLANNER_OUTPUT_DIR";
    pub const SEED: &str = "FIXTURE_PLANNER_SEED";
}

/// Date formats
pub mod formats {
    /// Start date as typed by the user
    pub const START_DATE: &str = "%Y-%m-%d";

    /// Date column in the international match sheet, after conversion to text
    pub const MATCH_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

    /// Dates in console output
    pub const DISPLAY_DATE: &str = "%Y-%m-%d";
}

/// International match sheet layout
pub mod input_sheet {
    pub const MATCH_COLUMN: &str = "match";
    pub const LOCATION_COLUMN: &str = "location";
    pub const DATE_COLUMN: &str = "date";

    /// Separator between home and away team in the match column
    pub const TEAM_SEPARATOR: &str = " vs ";
}

/// Generated schedule workbook layout
pub mod output_sheet {
    pub const SHEET_NAME: &str = "Sheet1";
    pub const HEADERS: [&str; 3] = ["Home Team", "Away Team", "Date"];
    pub const DATE_COLUMN: u16 = 2;
    pub const DATE_COLUMN_WIDTH: f64 = 12.0;
    pub const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";
}
