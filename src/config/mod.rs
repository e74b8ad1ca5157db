use crate::constants::{
    DEFAULT_INITIAL_SCHEDULE_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_UPDATED_SCHEDULE_FILE, LOG_FILE_NAME,
    env,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Directory where the schedule workbooks are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// File name of the schedule before conflict resolution.
    #[serde(default = "default_initial_schedule_file")]
    pub initial_schedule_file: String,
    /// File name of the schedule after conflict resolution.
    #[serde(default = "default_updated_schedule_file")]
    pub updated_schedule_file: String,
    /// Fixed shuffle seed. Leave unset for a different schedule on every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_initial_schedule_file() -> String {
    DEFAULT_INITIAL_SCHEDULE_FILE.to_string()
}

fn default_updated_schedule_file() -> String {
    DEFAULT_UPDATED_SCHEDULE_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            output_dir: default_output_dir(),
            initial_schedule_file: default_initial_schedule_file(),
            updated_schedule_file: default_updated_schedule_file(),
            seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists; nothing is written.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `FIXTURE_PLANNER_LOG_FILE` - Override log file path
    /// - `FIXTURE_PLANNER_OUTPUT_DIR` - Override output directory
    /// - `FIXTURE_PLANNER_SEED` - Override shuffle seed
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(output_dir) = std::env::var(env::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Some(seed) = std::env::var(env::SEED)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            self.seed = Some(seed);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.output_dir,
            &self.initial_schedule_file,
            &self.updated_schedule_file,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Output Directory:");
            println!("{}", config.output_dir);
            println!("────────────────────────────────────");
            println!("Schedule Files:");
            println!("{}", config.initial_schedule_file);
            println!("{}", config.updated_schedule_file);
            println!("────────────────────────────────────");
            println!("Shuffle Seed:");
            match config.seed {
                Some(seed) => println!("{seed}"),
                None => println!("(Random on every run)"),
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
