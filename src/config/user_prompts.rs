//! Interactive prompts for planner input
//!
//! Collects team count, team names, start date and the optional international
//! match file, in that order. Every prompt reads from any `BufRead` and writes
//! to any `Write`, so the whole exchange can be scripted in tests.

use crate::error::AppError;
use crate::planner::{PlannerConfig, parse_start_date};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prints `prompt` and returns the next input line, trimmed.
///
/// # Errors
/// * `AppError::Io` - reading failed or input ended before an answer was given
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input ended while waiting for: {}", prompt.trim()),
        )
        .into());
    }
    Ok(line.trim().to_string())
}

/// Parses a team count typed by the user.
pub fn parse_team_count(text: &str) -> Result<usize, AppError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| AppError::invalid_team_count(text.trim()))
}

pub fn prompt_for_team_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, AppError> {
    let answer = prompt_line(input, output, "Enter the number of teams: ")?;
    parse_team_count(&answer)
}

pub fn prompt_for_team_names<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> Result<Vec<String>, AppError> {
    (1..=count)
        .map(|number| prompt_line(input, output, &format!("Enter the name of Team {number}: ")))
        .collect()
}

pub fn prompt_for_start_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<chrono::NaiveDate, AppError> {
    let answer = prompt_line(
        input,
        output,
        "Enter the start date for fixtures (YYYY-MM-DD): ",
    )?;
    parse_start_date(&answer)
}

/// Asks for the international match file; a blank answer means none.
pub fn prompt_for_international_file<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<PathBuf>, AppError> {
    let answer = prompt_line(
        input,
        output,
        "\nEnter the filename with international matches (or leave blank): ",
    )?;
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

/// Runs the full prompt sequence and builds a planner configuration.
pub fn collect_planner_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    seed: Option<u64>,
) -> Result<PlannerConfig, AppError> {
    let count = prompt_for_team_count(input, output)?;
    let teams = prompt_for_team_names(input, output, count)?;
    let start_date = prompt_for_start_date(input, output)?;
    let international_file = prompt_for_international_file(input, output)?;

    Ok(PlannerConfig {
        teams,
        start_date,
        international_file,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn test_collect_planner_config() {
        let mut input = Cursor::new("3\nTappara\nIlves \n Lukko\n2024-09-10\ninternationals.xlsx\n");
        let mut output = Vec::new();

        let config = collect_planner_config(&mut input, &mut output, Some(4)).unwrap();

        assert_eq!(config.teams, vec!["Tappara", "Ilves", "Lukko"]);
        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(2024, 9, 10).unwrap()
        );
        assert_eq!(
            config.international_file,
            Some(PathBuf::from("internationals.xlsx"))
        );
        assert_eq!(config.seed, Some(4));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.starts_with("Enter the number of teams: "));
        assert!(transcript.contains("Enter the name of Team 3: "));
        assert!(transcript.contains("Enter the start date for fixtures (YYYY-MM-DD): "));
        assert!(transcript.contains("Enter the filename with international matches (or leave blank): "));
    }

    #[test]
    fn test_blank_international_file_is_none() {
        let mut input = Cursor::new("2\nA\nB\n2024-01-01\n\n");
        let mut output = Vec::new();

        let config = collect_planner_config(&mut input, &mut output, None).unwrap();

        assert_eq!(config.international_file, None);
    }

    #[test]
    fn test_zero_teams_skips_name_prompts() {
        let mut input = Cursor::new("0\n2024-01-01\n\n");
        let mut output = Vec::new();

        let config = collect_planner_config(&mut input, &mut output, None).unwrap();

        assert!(config.teams.is_empty());
        assert!(!String::from_utf8(output).unwrap().contains("Enter the name"));
    }

    #[test]
    fn test_non_numeric_team_count_aborts() {
        let mut input = Cursor::new("four\n");
        let mut output = Vec::new();

        let error = collect_planner_config(&mut input, &mut output, None).unwrap_err();

        assert!(matches!(error, AppError::InvalidTeamCount(ref raw) if raw == "four"));
    }

    #[test]
    fn test_negative_team_count_is_invalid() {
        assert!(matches!(
            parse_team_count("-1"),
            Err(AppError::InvalidTeamCount(_))
        ));
        assert_eq!(parse_team_count(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_malformed_start_date_aborts() {
        let mut input = Cursor::new("2\nA\nB\n10.01.2024\n");
        let mut output = Vec::new();

        let error = collect_planner_config(&mut input, &mut output, None).unwrap_err();

        assert!(matches!(error, AppError::DateTimeParse(_)));
    }

    #[test]
    fn test_input_ending_early_is_an_error() {
        let mut input = Cursor::new("3\nA\n");
        let mut output = Vec::new();

        let error = collect_planner_config(&mut input, &mut output, None).unwrap_err();

        match error {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
