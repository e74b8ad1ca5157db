use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Failed to read spreadsheet: {0}")]
    SpreadsheetRead(#[from] calamine::Error),

    #[error("Failed to write spreadsheet: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    // Planner input errors
    #[error("Invalid team count '{0}': expected a non-negative whole number")]
    InvalidTeamCount(String),

    #[error("Team '{0}' was entered more than once")]
    DuplicateTeam(String),

    // International match sheet errors
    #[error("International match sheet has no '{column}' column")]
    MissingColumn { column: String },

    #[error("Row {row}: match '{value}' is not in '<home> vs <away>' form")]
    MalformedMatch { row: usize, value: String },

    #[error("Row {row}: date '{value}' does not match YYYY-MM-DD HH:MM:SS")]
    InvalidMatchDate { row: usize, value: String },

    #[error("Date arithmetic overflowed past {0}")]
    DateOverflow(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid team count error from the raw input
    pub fn invalid_team_count(input: impl Into<String>) -> Self {
        Self::InvalidTeamCount(input.into())
    }

    /// Create a duplicate team error
    pub fn duplicate_team(team: impl Into<String>) -> Self {
        Self::DuplicateTeam(team.into())
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a malformed match error for a spreadsheet row (1-based)
    pub fn malformed_match(row: usize, value: impl Into<String>) -> Self {
        Self::MalformedMatch {
            row,
            value: value.into(),
        }
    }

    /// Create an invalid match date error for a spreadsheet row (1-based)
    pub fn invalid_match_date(row: usize, value: impl Into<String>) -> Self {
        Self::InvalidMatchDate {
            row,
            value: value.into(),
        }
    }

    /// Create a date overflow error
    pub fn date_overflow(from: impl std::fmt::Display) -> Self {
        Self::DateOverflow(from.to_string())
    }

    /// Check if the error came from the contents of the international match sheet
    pub fn is_input_data_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingColumn { .. }
                | AppError::MalformedMatch { .. }
                | AppError::InvalidMatchDate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Output directory cannot be empty");
        assert_eq!(
            error.to_string(),
            "Configuration error: Output directory cannot be empty"
        );
    }

    #[test]
    fn test_datetime_parse_error_helper() {
        let error = AppError::datetime_parse_error("bad start date");
        assert_eq!(error.to_string(), "Date/time parsing error: bad start date");
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("no permission");
        assert_eq!(error.to_string(), "Log setup error: no permission");
    }

    #[test]
    fn test_invalid_team_count_helper() {
        let error = AppError::invalid_team_count("four");
        assert_eq!(
            error.to_string(),
            "Invalid team count 'four': expected a non-negative whole number"
        );
    }

    #[test]
    fn test_duplicate_team_helper() {
        let error = AppError::duplicate_team("HIFK");
        assert_eq!(error.to_string(), "Team 'HIFK' was entered more than once");
    }

    #[test]
    fn test_missing_column_helper() {
        let error = AppError::missing_column("date");
        match &error {
            AppError::MissingColumn { column } => assert_eq!(column, "date"),
            _ => panic!("Expected MissingColumn error"),
        }
        assert_eq!(
            error.to_string(),
            "International match sheet has no 'date' column"
        );
    }

    #[test]
    fn test_malformed_match_helper() {
        let error = AppError::malformed_match(3, "Finland - Sweden");
        assert_eq!(
            error.to_string(),
            "Row 3: match 'Finland - Sweden' is not in '<home> vs <away>' form"
        );
    }

    #[test]
    fn test_invalid_match_date_helper() {
        let error = AppError::invalid_match_date(7, "2024-03-01");
        match &error {
            AppError::InvalidMatchDate { row, value } => {
                assert_eq!(*row, 7);
                assert_eq!(value, "2024-03-01");
            }
            _ => panic!("Expected InvalidMatchDate error"),
        }
    }

    #[test]
    fn test_date_overflow_helper() {
        let error = AppError::date_overflow("+262142-12-31");
        assert!(error.to_string().contains("+262142-12-31"));
    }

    #[test]
    fn test_is_input_data_error() {
        assert!(AppError::missing_column("match").is_input_data_error());
        assert!(AppError::malformed_match(2, "x").is_input_data_error());
        assert!(AppError::invalid_match_date(2, "x").is_input_data_error());

        assert!(!AppError::config_error("x").is_input_data_error());
        assert!(!AppError::invalid_team_count("x").is_input_data_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<toml::Value>("output_dir = ").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
        assert!(app_error.to_string().contains("TOML deserialization error"));
    }
}
