//! # sd-time
//!
//! The sharpdate value type and everything around it: constructor
//! dispatch, calendar and fixed-duration arithmetic, time zones, and the
//! custom format engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar and fixed-duration arithmetic on `DateTimeValue`.
pub mod arithmetic;

/// Wall-clock field normalisation.
pub mod civil;

/// `DateTimeValue` and its constructors.
pub mod date_time;

/// Custom format patterns.
pub mod format;

/// `Month` — month of the year.
pub mod month;

/// `Period` — an amount of a `TimeUnit`.
pub mod period;

/// `TimeUnit` — calendar and fixed-duration units.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

/// `Zone` — time-zone descriptor.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date_time::{ConstructorArgs, DateTimeValue, DEFAULT_PATTERN};
pub use format::Pattern;
pub use month::Month;
pub use period::Period;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
pub use zone::Zone;
