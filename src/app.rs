use crate::cli::Args;
use crate::commands::execute_plan;
use crate::config::Config;
use crate::config::user_prompts::collect_planner_config;
use crate::error::AppError;
use crate::report::ConsoleReport;
use std::io::{stdin, stdout};

/// Run the interactive application flow.
///
/// - Prompts for team count, team names, start date and international file
/// - Plans the season and prints the schedules
/// - Writes the workbooks when an international file was given
pub fn run_interactive(args: &Args, config: &Config) -> Result<(), AppError> {
    let mut input = stdin().lock();
    let mut out = stdout().lock();

    let seed = args.seed.or(config.seed);
    let planner_config = collect_planner_config(&mut input, &mut out, seed)?;
    let output_dir = args.output_dir.as_deref().unwrap_or(&config.output_dir);

    execute_plan(
        &planner_config,
        output_dir,
        config,
        ConsoleReport::new(args.plain),
        &mut out,
    )?;

    Ok(())
}
