//! `TimeUnit` — the units accepted by `DateTimeValue` arithmetic.

/// A unit of time.
///
/// Units from [`TimeUnit::Days`] upward are *calendar* units: adding them
/// moves the wall-clock date and lets the calendar normalise the result.
/// Units below a day are *fixed-duration* units: adding them moves the
/// instant by an exact number of (sub)seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar years (12 months).
    Years,
    /// Calendar months.
    Months,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar days.
    Days,
    /// Hours (3600 s).
    Hours,
    /// Minutes (60 s).
    Minutes,
    /// Seconds.
    Seconds,
    /// Milliseconds.
    Milliseconds,
    /// Microseconds.
    Microseconds,
    /// Nanoseconds.
    Nanoseconds,
}

impl TimeUnit {
    /// Return `true` for units added with calendar arithmetic.
    pub fn is_calendar(&self) -> bool {
        matches!(
            self,
            TimeUnit::Years | TimeUnit::Months | TimeUnit::Weeks | TimeUnit::Days
        )
    }

    /// Length of one unit in nanoseconds, for fixed-duration units.
    ///
    /// Returns `None` for calendar units, which have no fixed length.
    pub fn nanos(&self) -> Option<i64> {
        match self {
            TimeUnit::Hours => Some(3_600_000_000_000),
            TimeUnit::Minutes => Some(60_000_000_000),
            TimeUnit::Seconds => Some(1_000_000_000),
            TimeUnit::Milliseconds => Some(1_000_000),
            TimeUnit::Microseconds => Some(1_000),
            TimeUnit::Nanoseconds => Some(1),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Years => write!(f, "Year(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Hours => write!(f, "Hour(s)"),
            TimeUnit::Minutes => write!(f, "Minute(s)"),
            TimeUnit::Seconds => write!(f, "Second(s)"),
            TimeUnit::Milliseconds => write!(f, "Millisecond(s)"),
            TimeUnit::Microseconds => write!(f, "Microsecond(s)"),
            TimeUnit::Nanoseconds => write!(f, "Nanosecond(s)"),
        }
    }
}
