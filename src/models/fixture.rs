use super::international::InternationalMatch;
use crate::constants::formats::DISPLAY_DATE;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// One generated league match between two teams on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub date: NaiveDate,
}

impl Fixture {
    pub fn new(home: impl Into<String>, away: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            date,
        }
    }

    /// Returns true if `team` plays in this fixture, home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} on {}",
            self.home,
            self.away,
            self.date.format(DISPLAY_DATE)
        )
    }
}

/// Ordered sequence of fixtures.
///
/// Conflict resolution mutates entries in place through [`Schedule::reschedule`],
/// so indices stay stable for the lifetime of the schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
}

impl Schedule {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.fixtures.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Fixture> {
        self.fixtures.get(index)
    }

    /// Overwrites the date of the fixture at `index`, leaving the teams untouched.
    ///
    /// Returns the previous date, or `None` if the index is out of range.
    pub fn reschedule(&mut self, index: usize, new_date: NaiveDate) -> Option<NaiveDate> {
        self.fixtures
            .get_mut(index)
            .map(|fixture| std::mem::replace(&mut fixture.date, new_date))
    }
}

impl Index<usize> for Schedule {
    type Output = Fixture;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fixtures[index]
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.iter()
    }
}

/// A fixture that was moved because one of its teams had an international match that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Position of the fixture in the schedule
    pub index: usize,
    pub home: String,
    pub away: String,
    pub original_date: NaiveDate,
    pub new_date: NaiveDate,
    /// The international match that triggered the move
    pub international: InternationalMatch,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conflict: {} vs {} on {} already scheduled. Rescheduled to {}.",
            self.home,
            self.away,
            self.original_date.format(DISPLAY_DATE),
            self.new_date.format(DISPLAY_DATE)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_fixture_display() {
        let fixture = Fixture::new("Tappara", "Ilves", date("2024-01-05"));
        assert_eq!(fixture.to_string(), "Tappara vs Ilves on 2024-01-05");
    }

    #[test]
    fn test_fixture_involves() {
        let fixture = Fixture::new("Tappara", "Ilves", date("2024-01-05"));
        assert!(fixture.involves("Tappara"));
        assert!(fixture.involves("Ilves"));
        assert!(!fixture.involves("Lukko"));
        assert!(!fixture.involves("tappara"));
    }

    #[test]
    fn test_reschedule_overwrites_date_only() {
        let mut schedule = Schedule::new(vec![
            Fixture::new("A", "B", date("2024-01-01")),
            Fixture::new("B", "A", date("2024-01-02")),
        ]);

        let previous = schedule.reschedule(1, date("2024-01-03"));

        assert_eq!(previous, Some(date("2024-01-02")));
        assert_eq!(schedule[1], Fixture::new("B", "A", date("2024-01-03")));
        assert_eq!(schedule[0].date, date("2024-01-01"));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_reschedule_out_of_range() {
        let mut schedule = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.reschedule(0, date("2024-01-01")), None);
    }

    #[test]
    fn test_conflict_display_matches_console_notice() {
        let conflict = Conflict {
            index: 0,
            home: "A".to_string(),
            away: "B".to_string(),
            original_date: date("2024-03-01"),
            new_date: date("2024-03-02"),
            international: InternationalMatch::new(
                "A",
                "C",
                "Helsinki",
                date("2024-03-01"),
                NaiveTime::MIN,
            ),
        };

        assert_eq!(
            conflict.to_string(),
            "Conflict: A vs B on 2024-03-01 already scheduled. Rescheduled to 2024-03-02."
        );
    }
}
