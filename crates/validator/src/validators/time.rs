//! Date/time validators relative to "now".
//!
//! All three read the current instant from a [`Clock`], so a test can pin
//! it with `Clock::Fixed` and probe the boundary to the second.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::foundation::{Clock, Validate, ValidationError};

// ============================================================================
// IN FUTURE
// ============================================================================

/// Validates that a moment is strictly after now.
///
/// A value equal to now fails.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use shortlink_validator::foundation::{Clock, Validate};
/// use shortlink_validator::validators::InFuture;
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let v = InFuture::new(Clock::Fixed(now));
/// assert!(v.validate(&now).is_err());
/// assert!(v.validate(&(now + TimeDelta::seconds(1))).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InFuture {
    clock: Clock,
}

impl InFuture {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Validate for InFuture {
    type Input = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        let now = self.clock.now();
        if *input > now {
            Ok(())
        } else {
            Err(ValidationError::new("in_future", "Date must be in the future")
                .with_param("now", now.to_rfc3339()))
        }
    }
}

#[must_use]
pub fn in_future(clock: Clock) -> InFuture {
    InFuture::new(clock)
}

// ============================================================================
// NOT IN FUTURE
// ============================================================================

/// Validates that a moment is not after now. Now itself passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotInFuture {
    clock: Clock,
}

impl NotInFuture {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Validate for NotInFuture {
    type Input = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        let now = self.clock.now();
        if *input <= now {
            Ok(())
        } else {
            Err(
                ValidationError::new("not_in_future", "Date cannot be in the future")
                    .with_param("now", now.to_rfc3339()),
            )
        }
    }
}

#[must_use]
pub fn not_in_future(clock: Clock) -> NotInFuture {
    NotInFuture::new(clock)
}

// ============================================================================
// NOT AFTER
// ============================================================================

/// How far ahead of now a [`NotAfter`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    /// Calendar years; Feb 29 clamps to Feb 28 in a non-leap target year.
    Years(u32),
    Delta(TimeDelta),
}

impl Horizon {
    fn limit_from(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Horizon::Years(years) => now.checked_add_months(Months::new(years.saturating_mul(12))),
            Horizon::Delta(delta) => now.checked_add_signed(delta),
        }
    }

    fn describe(self) -> String {
        match self {
            Horizon::Years(1) => "1 year".to_owned(),
            Horizon::Years(years) => format!("{years} years"),
            Horizon::Delta(delta) => format!("{} days", delta.num_days()),
        }
    }
}

/// Validates that a moment is no later than now plus a horizon.
///
/// The limit itself passes. A horizon too large to represent accepts
/// everything.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shortlink_validator::foundation::{Clock, Validate};
/// use shortlink_validator::validators::{Horizon, NotAfter};
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let v = NotAfter::new(Horizon::Years(10), Clock::Fixed(now));
/// assert!(v.validate(&Utc.with_ymd_and_hms(2035, 1, 1, 0, 0, 0).unwrap()).is_ok());
/// assert!(v.validate(&Utc.with_ymd_and_hms(2035, 1, 1, 0, 0, 1).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAfter {
    horizon: Horizon,
    clock: Clock,
}

impl NotAfter {
    #[must_use]
    pub fn new(horizon: Horizon, clock: Clock) -> Self {
        Self { horizon, clock }
    }

    #[must_use]
    pub fn years(years: u32, clock: Clock) -> Self {
        Self::new(Horizon::Years(years), clock)
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }
}

impl Validate for NotAfter {
    type Input = DateTime<Utc>;

    fn validate(&self, input: &DateTime<Utc>) -> Result<(), ValidationError> {
        let Some(limit) = self.horizon.limit_from(self.clock.now()) else {
            return Ok(());
        };
        if *input <= limit {
            Ok(())
        } else {
            let horizon = self.horizon.describe();
            Err(ValidationError::new(
                "not_after",
                format!("Date cannot be more than {horizon} in the future"),
            )
            .with_param("limit", limit.to_rfc3339()))
        }
    }
}

#[must_use]
pub fn not_after_years(years: u32, clock: Clock) -> NotAfter {
    NotAfter::years(years, clock)
}
