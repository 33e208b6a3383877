//! Time source for date constraints.

use chrono::{DateTime, Utc};

/// Where date constraints read "now" from.
///
/// `System` reads the wall clock on every check. `Fixed` pins "now" so
/// boundary behaviour can be tested exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }
}
