use crate::cli::Args;
use crate::config::Config;
use crate::constants::{APP_NAME, LOG_FILE_NAME};
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = format!("{APP_NAME}=info")
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Resolves the log directory and file name from the CLI flag, the config,
/// or the default location, in that order of precedence.
pub fn resolve_log_location(args: &Args, config: Option<&Config>) -> (String, String) {
    let config_log_path = config.and_then(|config| config.log_file_path.as_ref());
    match args.log_file.as_ref().or(config_log_path) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging configuration for the application.
///
/// - Interactive mode: logs only to file, so prompts stay readable
/// - Non-interactive with --debug: logs to both stdout and file
/// - Otherwise: logs only to file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config = Config::load().ok();
    let (log_dir, log_file_name) = resolve_log_location(args, config.as_ref());

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive all logging for buffered lines to be flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();
    let to_stdout = args.debug && crate::cli::is_noninteractive_mode(args);

    if to_stdout {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(!args.plain)
                    .with_filter(env_filter()?),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(env_filter()?),
            )
            .init();
    } else {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(env_filter()?),
            )
            .init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_location_prefers_cli_flag() {
        let args = Args {
            log_file: Some("/tmp/cli/planner.log".to_string()),
            ..Args::default()
        };
        let config = Config {
            log_file_path: Some("/tmp/config/other.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&args, Some(&config));

        assert_eq!(dir, "/tmp/cli");
        assert_eq!(file, "planner.log");
    }

    #[test]
    fn test_log_location_from_config() {
        let config = Config {
            log_file_path: Some("/var/log/fixtures/run.log".to_string()),
            ..Config::default()
        };

        let (dir, file) = resolve_log_location(&Args::default(), Some(&config));

        assert_eq!(dir, "/var/log/fixtures");
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_current_directory() {
        let args = Args {
            log_file: Some("planner.log".to_string()),
            ..Args::default()
        };

        let (dir, file) = resolve_log_location(&args, None);

        assert_eq!(dir, ".");
        assert_eq!(file, "planner.log");
    }

    #[test]
    fn test_default_log_location() {
        let (dir, file) = resolve_log_location(&Args::default(), None);

        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, "fixture_planner.log");
    }
}
