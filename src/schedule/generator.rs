//! Double round-robin fixture generation

use crate::error::AppError;
use crate::models::{Fixture, Schedule};
use chrono::{Days, NaiveDate};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Creates the random source for shuffling fixtures.
///
/// A fixed seed makes the shuffle reproducible; without one the generator is
/// seeded from the operating system and every run differs.
pub fn schedule_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => {
            debug!("Seeding fixture shuffle with {seed}");
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_os_rng(),
    }
}

/// Every ordered pair of distinct teams, in permutation order.
///
/// Each team is paired once as home against every other team, so both
/// (A, B) and (B, A) are present and no team meets itself.
pub fn ordered_pairings(teams: &[String]) -> Vec<(String, String)> {
    let mut pairings = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1));
    for (home_index, home) in teams.iter().enumerate() {
        for (away_index, away) in teams.iter().enumerate() {
            if home_index != away_index {
                pairings.push((home.clone(), away.clone()));
            }
        }
    }
    pairings
}

/// Generates a shuffled double round-robin schedule.
///
/// Produces `n * (n - 1)` fixtures for `n` teams. After shuffling, fixture `i`
/// is dated `start_date + i` days, so dates form one contiguous run.
/// Fewer than two teams yield an empty schedule.
///
/// # Errors
/// * `AppError::DateOverflow` - the run of dates would pass chrono's maximum date
pub fn generate_schedule<R>(
    teams: &[String],
    start_date: NaiveDate,
    rng: &mut R,
) -> Result<Schedule, AppError>
where
    R: Rng + ?Sized,
{
    let mut pairings = ordered_pairings(teams);
    pairings.shuffle(rng);

    let fixtures = pairings
        .into_iter()
        .enumerate()
        .map(|(offset, (home, away))| {
            let date = start_date
                .checked_add_days(Days::new(offset as u64))
                .ok_or_else(|| AppError::date_overflow(start_date))?;
            Ok(Fixture::new(home, away, date))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    info!(
        "Generated {} fixtures for {} teams starting {}",
        fixtures.len(),
        teams.len(),
        start_date
    );

    Ok(Schedule::new(fixtures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_ordered_pairings_cover_both_orientations() {
        let pairings = ordered_pairings(&teams(&["A", "B", "C"]));

        assert_eq!(
            pairings,
            vec![
                ("A".to_string(), "B".to_string()),
                ("A".to_string(), "C".to_string()),
                ("B".to_string(), "A".to_string()),
                ("B".to_string(), "C".to_string()),
                ("C".to_string(), "A".to_string()),
                ("C".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_fixture_count_is_n_times_n_minus_one() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in 2..=8 {
            let names: Vec<String> = (0..n).map(|i| format!("Team {i}")).collect();
            let schedule = generate_schedule(&names, date("2024-01-01"), &mut rng).unwrap();
            assert_eq!(schedule.len(), n * (n - 1), "wrong fixture count for {n} teams");
        }
    }

    #[test]
    fn test_every_ordered_pair_appears_exactly_once() {
        let names = teams(&["Tappara", "Ilves", "Lukko", "Kärpät", "HIFK"]);
        let mut rng = SmallRng::seed_from_u64(7);
        let schedule = generate_schedule(&names, date("2024-09-10"), &mut rng).unwrap();

        let pairs: HashSet<(String, String)> = schedule
            .iter()
            .map(|fixture| (fixture.home.clone(), fixture.away.clone()))
            .collect();

        assert_eq!(pairs.len(), schedule.len());
        for home in &names {
            for away in &names {
                if home != away {
                    assert!(pairs.contains(&(home.clone(), away.clone())));
                }
            }
        }
        assert!(schedule.iter().all(|fixture| fixture.home != fixture.away));
    }

    #[test]
    fn test_dates_are_contiguous_from_start() {
        let names = teams(&["A", "B", "C", "D"]);
        let start = date("2024-02-27");
        let mut rng = SmallRng::seed_from_u64(1);
        let schedule = generate_schedule(&names, start, &mut rng).unwrap();

        for (offset, fixture) in schedule.iter().enumerate() {
            assert_eq!(fixture.date, start + Days::new(offset as u64));
        }
        // Crosses the leap day without gaps
        assert_eq!(schedule[2].date, date("2024-02-29"));
    }

    #[test]
    fn test_zero_and_one_team_yield_empty_schedule() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(
            generate_schedule(&[], date("2024-01-01"), &mut rng)
                .unwrap()
                .is_empty()
        );
        assert!(
            generate_schedule(&teams(&["Solo"]), date("2024-01-01"), &mut rng)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_same_seed_reproduces_schedule() {
        let names = teams(&["A", "B", "C", "D", "E"]);
        let first = generate_schedule(&names, date("2024-01-01"), &mut schedule_rng(Some(99)))
            .unwrap();
        let second = generate_schedule(&names, date("2024-01-01"), &mut schedule_rng(Some(99)))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        // 30 fixtures have 30! orderings, a repeat is practically impossible
        let names = teams(&["A", "B", "C", "D", "E", "F"]);
        let first =
            generate_schedule(&names, date("2024-01-01"), &mut schedule_rng(None)).unwrap();
        let second =
            generate_schedule(&names, date("2024-01-01"), &mut schedule_rng(None)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_date_overflow_is_an_error() {
        let names = teams(&["A", "B"]);
        let mut rng = SmallRng::seed_from_u64(0);
        let result = generate_schedule(&names, NaiveDate::MAX, &mut rng);
        assert!(matches!(result, Err(AppError::DateOverflow(_))));
    }
}
