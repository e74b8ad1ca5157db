use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::planner::{FixturePlan, PlannerConfig, parse_start_date, plan_fixtures};
use crate::report::ConsoleReport;
use crate::spreadsheet::write_schedule_outputs;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if args.teams.is_empty() && (args.start_date.is_some() || args.international_file.is_some())
    {
        return Err(AppError::config_error(
            "--start-date and --international-file require teams given with --team",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Handles configuration update commands (--set-log-file, --clear-log-file, --set-output-dir).
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().unwrap_or_default();
    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save()?;
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    if let Some(output_dir) = &args.new_output_dir {
        config.output_dir = output_dir.clone();
    }
}

/// Builds a planner configuration from command line flags.
///
/// Command line values take precedence over the config file.
pub fn planner_config_from_args(args: &Args, config: &Config) -> Result<PlannerConfig, AppError> {
    let start_date = args
        .start_date
        .as_deref()
        .ok_or_else(|| AppError::config_error("--start-date is required when teams are given"))
        .and_then(parse_start_date)?;

    Ok(PlannerConfig {
        teams: args.teams.iter().map(|team| team.trim().to_string()).collect(),
        start_date,
        international_file: args
            .international_file
            .as_ref()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from),
        seed: args.seed.or(config.seed),
    })
}

/// Outcome of one planning run.
#[derive(Debug)]
pub struct PlanOutcome {
    pub plan: FixturePlan,
    /// Paths of the initial and updated workbooks, when they were written
    pub written: Option<(PathBuf, PathBuf)>,
}

/// Runs the planner, prints the report and writes the workbooks.
///
/// Workbooks are written only when an international match file was given,
/// and only after planning succeeded, so a failed run leaves no files behind.
pub fn execute_plan<W: Write>(
    planner_config: &PlannerConfig,
    output_dir: &str,
    config: &Config,
    report: ConsoleReport,
    out: &mut W,
) -> Result<PlanOutcome, AppError> {
    let plan = match plan_fixtures(planner_config) {
        Ok(plan) => plan,
        Err(e) if e.is_input_data_error() => {
            let sheet = planner_config
                .international_file
                .as_deref()
                .unwrap_or_else(|| Path::new(""));
            error!("Rejected international match sheet {}: {e}", sheet.display());
            report.write_sheet_rejected(out, sheet, &e)?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };
    report.write_plan(out, &plan)?;

    let written = match &plan.updated {
        Some(updated) => {
            let paths = write_schedule_outputs(
                output_dir,
                &config.initial_schedule_file,
                &config.updated_schedule_file,
                &plan.initial,
                updated,
            )?;
            report.write_saved_files(out, &paths.0, &paths.1)?;
            Some(paths)
        }
        None => None,
    };

    info!(
        "Planned {} fixtures with {} conflicts resolved",
        plan.initial.len(),
        plan.conflicts.len()
    );

    Ok(PlanOutcome { plan, written })
}

/// Handles planning when teams are given on the command line.
pub fn handle_plan_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let planner_config = planner_config_from_args(args, config)?;
    let output_dir = args.output_dir.as_deref().unwrap_or(&config.output_dir);
    let mut out = stdout().lock();

    execute_plan(
        &planner_config,
        output_dir,
        config,
        ConsoleReport::new(args.plain),
        &mut out,
    )?;

    Ok(())
}
