pub mod generator;
pub mod resolver;

pub use generator::{generate_schedule, ordered_pairings, schedule_rng};
pub use resolver::{find_clashes, resolve_conflicts};
