//! League Fixture Planner Library
//!
//! Generates double round-robin league schedules and moves fixtures that
//! clash with international match dates read from a spreadsheet.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fixture_planner::error::AppError;
//! use fixture_planner::planner::{PlannerConfig, plan_fixtures};
//!
//! fn main() -> Result<(), AppError> {
//!     let teams = vec!["Tappara".to_string(), "Ilves".to_string(), "Lukko".to_string()];
//!     let start = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
//!
//!     let config = PlannerConfig::new(teams, start)
//!         .with_international_file("internationals.xlsx")
//!         .with_seed(Some(2024));
//!     let plan = plan_fixtures(&config)?;
//!
//!     for conflict in &plan.conflicts {
//!         println!("{conflict}");
//!     }
//!     for fixture in plan.final_schedule() {
//!         println!("{fixture}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod planner;
pub mod report;
pub mod schedule;
pub mod spreadsheet;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{Conflict, Fixture, InternationalMatch, Schedule};
pub use planner::{FixturePlan, PlannerConfig, plan_fixtures};
pub use schedule::{generate_schedule, resolve_conflicts};
pub use spreadsheet::{read_international_matches, write_schedule};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
