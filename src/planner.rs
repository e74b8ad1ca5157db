//! Fixture planning pipeline: generate, read international dates, resolve.
//!
//! [`plan_fixtures`] performs no prompting and no output; the interactive
//! shell and command handlers build a [`PlannerConfig`] and render the
//! returned [`FixturePlan`].

use crate::constants::formats::START_DATE;
use crate::error::AppError;
use crate::models::{Conflict, InternationalMatch, Schedule};
use crate::schedule::{find_clashes, generate_schedule, resolve_conflicts, schedule_rng};
use crate::spreadsheet::read_international_matches;
use chrono::NaiveDate;
use rand::Rng;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

/// Everything needed to plan one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// League teams in entry order
    pub teams: Vec<String>,
    /// Date of the first fixture
    pub start_date: NaiveDate,
    /// International match sheet, `None` when the user left it blank
    pub international_file: Option<PathBuf>,
    /// Fixed shuffle seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl PlannerConfig {
    pub fn new(teams: Vec<String>, start_date: NaiveDate) -> Self {
        Self {
            teams,
            start_date,
            international_file: None,
            seed: None,
        }
    }

    pub fn with_international_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.international_file = Some(path.into());
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects team lists that name the same team twice.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for team in &self.teams {
            if !seen.insert(team.as_str()) {
                return Err(AppError::duplicate_team(team.as_str()));
            }
        }
        Ok(())
    }
}

/// Parses a start date typed as `YYYY-MM-DD`.
pub fn parse_start_date(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text.trim(), START_DATE).map_err(|e| {
        AppError::datetime_parse_error(format!(
            "Invalid start date '{}', expected YYYY-MM-DD: {e}",
            text.trim()
        ))
    })
}

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePlan {
    /// Schedule as generated, before any rescheduling
    pub initial: Schedule,
    /// Schedule after conflict resolution; `None` when no international file was given
    pub updated: Option<Schedule>,
    pub conflicts: Vec<Conflict>,
    pub international_matches: Vec<InternationalMatch>,
    /// Fixtures in `updated` that still clash after the single resolution pass
    pub unresolved: Vec<usize>,
}

impl FixturePlan {
    /// The schedule to publish: the updated one if resolution ran, else the initial one.
    pub fn final_schedule(&self) -> &Schedule {
        self.updated.as_ref().unwrap_or(&self.initial)
    }
}

/// Runs the planning pipeline with a random source built from `config.seed`.
pub fn plan_fixtures(config: &PlannerConfig) -> Result<FixturePlan, AppError> {
    let mut rng = schedule_rng(config.seed);
    plan_fixtures_with_rng(config, &mut rng)
}

/// Runs the planning pipeline with a caller-supplied random source.
///
/// Reads the international file only when one is configured; a configured
/// path that does not exist counts as an empty international calendar.
pub fn plan_fixtures_with_rng<R>(
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<FixturePlan, AppError>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let initial = generate_schedule(&config.teams, config.start_date, rng)?;

    let Some(path) = &config.international_file else {
        info!("No international match file given, skipping conflict resolution");
        return Ok(FixturePlan {
            initial,
            updated: None,
            conflicts: Vec::new(),
            international_matches: Vec::new(),
            unresolved: Vec::new(),
        });
    };

    let international_matches = read_international_matches(path)?;

    let mut updated = initial.clone();
    let conflicts = resolve_conflicts(&mut updated, &config.teams, &international_matches)?;
    let unresolved = find_clashes(&updated, &international_matches);

    Ok(FixturePlan {
        initial,
        updated: Some(updated),
        conflicts,
        international_matches,
        unresolved,
    })
}
