use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A match from the external international calendar.
///
/// Teams need not be part of the league. Only the calendar date takes part in
/// conflict detection; the kickoff time is kept as read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternationalMatch {
    pub home: String,
    pub away: String,
    pub location: String,
    pub date: NaiveDate,
    pub kickoff: NaiveTime,
}

impl InternationalMatch {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        location: impl Into<String>,
        date: NaiveDate,
        kickoff: NaiveTime,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            location: location.into(),
            date,
            kickoff,
        }
    }

    /// Builds a match from a full timestamp, splitting it into date and kickoff.
    pub fn at(
        home: impl Into<String>,
        away: impl Into<String>,
        location: impl Into<String>,
        starts_at: NaiveDateTime,
    ) -> Self {
        Self::new(home, away, location, starts_at.date(), starts_at.time())
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.kickoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_splits_timestamp() {
        let starts_at =
            NaiveDateTime::parse_from_str("2024-03-01 19:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let international = InternationalMatch::at("Finland", "Sweden", "Tampere", starts_at);

        assert_eq!(
            international.date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            international.kickoff,
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
        assert_eq!(international.starts_at(), starts_at);
    }

    #[test]
    fn test_involves() {
        let international = InternationalMatch::new(
            "Finland",
            "Sweden",
            "Tampere",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveTime::MIN,
        );
        assert!(international.involves("Finland"));
        assert!(international.involves("Sweden"));
        assert!(!international.involves("Tampere"));
    }
}
