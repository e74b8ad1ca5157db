//! Rescheduling league fixtures around international match dates
//!
//! Resolution is a single pass: a clashing fixture moves forward exactly one
//! day and the new date is not checked again. [`find_clashes`] reports what
//! is left over so callers can warn about it.

use crate::error::AppError;
use crate::models::{Conflict, InternationalMatch, Schedule};
use tracing::{info, warn};

/// Moves every fixture that clashes with an international match one day forward.
///
/// A fixture clashes when an international match on the same calendar date
/// involves its home team or its away team, and that team is one of `teams`.
/// The first clashing international match wins and the rest are not consulted.
/// A fixture is moved at most once per call.
///
/// Returns one [`Conflict`] per moved fixture, in schedule order.
///
/// # Errors
/// * `AppError::DateOverflow` - a fixture on chrono's maximum date would need moving
pub fn resolve_conflicts(
    schedule: &mut Schedule,
    teams: &[String],
    internationals: &[InternationalMatch],
) -> Result<Vec<Conflict>, AppError> {
    let mut conflicts = Vec::new();

    for index in 0..schedule.len() {
        let fixture = &schedule[index];
        let home_known = teams.contains(&fixture.home);
        let away_known = teams.contains(&fixture.away);
        if !home_known && !away_known {
            continue;
        }

        let clash = internationals.iter().find(|international| {
            let home_involved = home_known && international.involves(&fixture.home);
            let away_involved = away_known && international.involves(&fixture.away);
            (home_involved || away_involved) && international.date == fixture.date
        });

        let Some(international) = clash else {
            continue;
        };

        let original_date = fixture.date;
        let new_date = original_date
            .succ_opt()
            .ok_or_else(|| AppError::date_overflow(original_date))?;

        let conflict = Conflict {
            index,
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            original_date,
            new_date,
            international: international.clone(),
        };
        schedule.reschedule(index, new_date);

        info!(
            "Rescheduled {} vs {} from {} to {} (international: {} vs {} in {})",
            conflict.home,
            conflict.away,
            original_date,
            new_date,
            international.home,
            international.away,
            international.location
        );
        conflicts.push(conflict);
    }

    if !conflicts.is_empty() {
        info!("Resolved {} fixture conflicts", conflicts.len());
    }

    Ok(conflicts)
}

/// Indices of fixtures that share a calendar date with an international
/// match involving either of their teams. Does not modify the schedule.
pub fn find_clashes(schedule: &Schedule, internationals: &[InternationalMatch]) -> Vec<usize> {
    let clashes: Vec<usize> = schedule
        .iter()
        .enumerate()
        .filter(|(_, fixture)| {
            internationals.iter().any(|international| {
                international.date == fixture.date
                    && (international.involves(&fixture.home)
                        || international.involves(&fixture.away))
            })
        })
        .map(|(index, _)| index)
        .collect();

    if !clashes.is_empty() {
        warn!(
            "{} fixtures still clash with international matches after rescheduling",
            clashes.len()
        );
    }

    clashes
}
