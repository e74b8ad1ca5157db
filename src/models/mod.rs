pub mod fixture;
pub mod international;

pub use fixture::{Conflict, Fixture, Schedule};
pub use international::InternationalMatch;
