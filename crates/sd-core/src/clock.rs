//! Clock abstraction.
//!
//! "Now" is the only I/O the library performs. It is read through the
//! [`Clock`] trait so callers and tests can pin the current moment.

use chrono::{DateTime, Utc};

/// A source of the current instant.
pub trait Clock {
    /// Return the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Create a clock that always reports `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
