pub mod reader;
pub mod writer;

pub use reader::{parse_match_date, parse_match_teams, read_international_matches};
pub use writer::{write_schedule, write_schedule_outputs};
