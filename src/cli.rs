use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run without prompting.
/// Non-interactive mode is used when any of these conditions are met:
/// - teams are given on the command line
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    !args.teams.is_empty() || is_config_command(args)
}

/// True when the arguments request a configuration command instead of planning.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.new_output_dir.is_some()
}

/// League Fixture Planner
///
/// Generates a double round-robin schedule where every team hosts every other
/// team once, one fixture per day from the start date in random order.
/// Fixtures that fall on the same day as an international match of one of
/// their teams are moved one day later.
///
/// Without --team the planner asks for the teams, start date and international
/// match file interactively. When an international match file is given, the
/// schedules before and after rescheduling are saved as Excel workbooks.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League team. Repeat the flag or separate names with commas.
    #[arg(short = 't', long = "team", value_delimiter = ',', help_heading = "Planning")]
    pub teams: Vec<String>,

    /// Date of the first fixture in YYYY-MM-DD format.
    #[arg(short = 's', long = "start-date", help_heading = "Planning")]
    pub start_date: Option<String>,

    /// Spreadsheet with international matches (columns: match, location, date).
    #[arg(short = 'i', long = "international-file", help_heading = "Planning")]
    pub international_file: Option<String>,

    /// Seed for the fixture shuffle. The same seed and teams give the same schedule.
    #[arg(long = "seed", help_heading = "Planning")]
    pub seed: Option<u64>,

    /// Directory for the generated workbooks. Overrides the configured directory.
    #[arg(short = 'o', long = "output-dir", help_heading = "Output")]
    pub output_dir: Option<String>,

    /// Print the schedule without colours.
    #[arg(short = 'p', long = "plain", help_heading = "Output")]
    pub plain: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Update the default output directory in config.
    #[arg(long = "set-output-dir", help_heading = "Configuration")]
    pub new_output_dir: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print log messages to the terminal (non-interactive mode only).
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
