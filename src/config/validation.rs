use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Output directory cannot be empty
/// - Schedule file names cannot be empty, must end in `.xlsx` and must differ
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    output_dir: &str,
    initial_schedule_file: &str,
    updated_schedule_file: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    for (label, file_name) in [
        ("Initial schedule", initial_schedule_file),
        ("Updated schedule", updated_schedule_file),
    ] {
        if file_name.trim().is_empty() {
            return Err(AppError::config_error(format!(
                "{label} file name cannot be empty"
            )));
        }
        if !file_name.to_ascii_lowercase().ends_with(".xlsx") {
            return Err(AppError::config_error(format!(
                "{label} file name '{file_name}' must end with .xlsx"
            )));
        }
    }

    if initial_schedule_file == updated_schedule_file {
        return Err(AppError::config_error(
            "Initial and updated schedule files must have different names",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL: &str = "initial_schedule.xlsx";
    const UPDATED: &str = "updated_schedule.xlsx";

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(".", INITIAL, UPDATED, &None).is_ok());
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let error = validate_config("  ", INITIAL, UPDATED, &None).unwrap_err();
        assert!(error.to_string().contains("Output directory cannot be empty"));
    }

    #[test]
    fn test_file_names_must_be_xlsx() {
        let error = validate_config(".", "initial.csv", UPDATED, &None).unwrap_err();
        assert!(error.to_string().contains("must end with .xlsx"));
        assert!(validate_config(".", "Initial.XLSX", UPDATED, &None).is_ok());
    }

    #[test]
    fn test_file_names_must_differ() {
        let error = validate_config(".", INITIAL, INITIAL, &None).unwrap_err();
        assert!(error.to_string().contains("different names"));
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let error = validate_config(".", INITIAL, UPDATED, &Some(String::new())).unwrap_err();
        assert!(error.to_string().contains("Log file path cannot be empty"));
    }

    #[test]
    fn test_log_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("nested").join("planner.log");

        validate_config(
            ".",
            INITIAL,
            UPDATED,
            &Some(log_path.to_string_lossy().to_string()),
        )
        .unwrap();

        assert!(dir.path().join("nested").exists());
    }
}
