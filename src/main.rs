// src/main.rs
use clap::Parser;
use fixture_planner::app;
use fixture_planner::cli::{Args, is_noninteractive_mode};
use fixture_planner::commands;
use fixture_planner::config::Config;
use fixture_planner::error::AppError;
use fixture_planner::logging::setup_logging;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    let (log_file_path, _guard) = setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command();
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path || args.new_output_dir.is_some()
    {
        return commands::handle_config_update_command(&args);
    }

    // Load config first to fail early if there's an issue
    let config = Config::load()?;

    if is_noninteractive_mode(&args) {
        commands::handle_plan_command(&args, &config)
    } else {
        app::run_interactive(&args, &config)
    }
}
