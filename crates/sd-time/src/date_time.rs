//! `DateTimeValue` — the date/time value type.
//!
//! A value is in one of two forms:
//!
//! * **field form** (`year != 0`): the public calendar fields are the
//!   source of truth. Unset fields default to the first valid value of their
//!   unit (month and day to 1, the time fields to 0) when the value is
//!   resolved, and the fields are interpreted in `timezone` (UTC if unset).
//! * **instant form**: `instant` is the source of truth. Every constructor
//!   and every arithmetic operation returns a value in this form.
//!
//! A value with neither (the [`Default`]) resolves to 0001-01-01 00:00:00
//! UTC.
//!
//! ```
//! use sd_time::DateTimeValue;
//!
//! let d = DateTimeValue::construct((2018, 12, 28, 23, 55, 59));
//! assert_eq!(d.add_days(3).format("dd-MM-yyyy HH:mm:ss"), "31-12-2018 23:55:59");
//!
//! let literal = DateTimeValue { year: 2018, month: 12, ..Default::default() };
//! assert_eq!(literal.format("MM-yyyy"), "12-2018");
//! ```

use chrono::{DateTime, Datelike, FixedOffset};
use sd_core::errors::{Error, OrFatal, Result};
use sd_core::{ensure, Clock, SystemClock};

use crate::civil::CivilFields;
use crate::format::{Moment, Pattern};
use crate::weekday::Weekday;
use crate::zone::Zone;

/// Pattern used by the [`Display`](std::fmt::Display) impl.
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss zzz";

/// A date and time of day, optionally anchored to a time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeValue {
    /// Year. A non-zero year puts the value in field form.
    pub year: i32,
    /// Month (1–12, 0 = unset). Out-of-range values roll over into
    /// adjacent years.
    pub month: i32,
    /// Day of month (0 = unset).
    pub day: i32,
    /// Hour of day (0–23).
    pub hour: i32,
    /// Minute (0–59).
    pub minute: i32,
    /// Second (0–59).
    pub second: i32,
    /// Sub-second part, in nanoseconds.
    pub subsecond: i32,
    /// Zone the value is expressed in.
    pub timezone: Option<Zone>,
    /// Absolute instant; the source of truth when `year == 0`.
    pub instant: Option<DateTime<FixedOffset>>,
}

// ── Constructor arguments ─────────────────────────────────────────────────────

mod sealed {
    pub trait Sealed {}
}

/// Positional constructor arguments:
/// `(year, month, day, [hour, [minute, [second, [subsecond]]]])`.
///
/// Implemented for tuples of three to seven `i32`. Any other shape is
/// rejected at compile time:
///
/// ```compile_fail
/// use sd_time::DateTimeValue;
/// let _ = DateTimeValue::construct(("2018",));
/// ```
///
/// ```compile_fail
/// use sd_time::DateTimeValue;
/// let _ = DateTimeValue::construct((2018, 12));
/// ```
pub trait ConstructorArgs: sealed::Sealed {
    /// Convert into wall-clock fields.
    fn into_fields(self) -> CivilFields;
}

fn fields(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    subsecond: i32,
) -> CivilFields {
    CivilFields {
        year: year.into(),
        month: month.into(),
        day: day.into(),
        hour: hour.into(),
        minute: minute.into(),
        second: second.into(),
        nanosecond: subsecond.into(),
    }
}

impl sealed::Sealed for (i32, i32, i32) {}
impl ConstructorArgs for (i32, i32, i32) {
    fn into_fields(self) -> CivilFields {
        let (y, mo, d) = self;
        fields(y, mo, d, 0, 0, 0, 0)
    }
}

impl sealed::Sealed for (i32, i32, i32, i32) {}
impl ConstructorArgs for (i32, i32, i32, i32) {
    fn into_fields(self) -> CivilFields {
        let (y, mo, d, h) = self;
        fields(y, mo, d, h, 0, 0, 0)
    }
}

impl sealed::Sealed for (i32, i32, i32, i32, i32) {}
impl ConstructorArgs for (i32, i32, i32, i32, i32) {
    fn into_fields(self) -> CivilFields {
        let (y, mo, d, h, mi) = self;
        fields(y, mo, d, h, mi, 0, 0)
    }
}

impl sealed::Sealed for (i32, i32, i32, i32, i32, i32) {}
impl ConstructorArgs for (i32, i32, i32, i32, i32, i32) {
    fn into_fields(self) -> CivilFields {
        let (y, mo, d, h, mi, s) = self;
        fields(y, mo, d, h, mi, s, 0)
    }
}

impl sealed::Sealed for (i32, i32, i32, i32, i32, i32, i32) {}
impl ConstructorArgs for (i32, i32, i32, i32, i32, i32, i32) {
    fn into_fields(self) -> CivilFields {
        let (y, mo, d, h, mi, s, ns) = self;
        fields(y, mo, d, h, mi, s, ns)
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

impl DateTimeValue {
    /// Build a UTC value from positional arguments.
    ///
    /// Month and the time fields are not validated: they are normalised, so
    /// month 13 is January of the next year and day 32 of December is
    /// January 1.
    ///
    /// # Panics
    /// If the normalised date falls outside the host calendar's range.
    #[track_caller]
    pub fn construct(args: impl ConstructorArgs) -> Self {
        Self::from_fields(args.into_fields(), Zone::Utc).or_fatal("DateTimeValue::construct")
    }

    /// Build a UTC value at midnight of the given date.
    #[track_caller]
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self::construct((year, month, day))
    }

    /// Build a UTC value from a runtime-sized argument list laid out like
    /// [`ConstructorArgs`].
    ///
    /// # Panics
    /// Unless `args` holds 3 to 7 values. A wrong arity is a programmer
    /// error and stops the operation.
    #[track_caller]
    pub fn from_slice(args: &[i32]) -> Self {
        Self::try_from_slice(args).or_fatal("DateTimeValue::from_slice")
    }

    /// Fallible form of [`DateTimeValue::from_slice`].
    ///
    /// # Errors
    /// [`Error::Arity`] unless `args` holds 3 to 7 values;
    /// [`Error::OutOfRange`] if the date is not representable.
    pub fn try_from_slice(args: &[i32]) -> Result<Self> {
        ensure!(
            (3..=7).contains(&args.len()),
            Error::Arity { count: args.len() }
        );
        let at = |i: usize| args.get(i).copied().unwrap_or(0);
        let parts = fields(at(0), at(1), at(2), at(3), at(4), at(5), at(6));
        Self::from_fields(parts, Zone::Utc)
    }

    /// The current moment from the system clock, in the host's local zone.
    pub fn now() -> Self {
        Self::now_with(&SystemClock, Zone::Local)
    }

    /// The current moment from the system clock, in UTC.
    pub fn now_utc() -> Self {
        Self::now_with(&SystemClock, Zone::Utc)
    }

    /// The current moment from `clock`, expressed in `zone`.
    pub fn now_with(clock: &dyn Clock, zone: Zone) -> Self {
        Self::from_instant(zone.at(&clock.now().naive_utc()), zone)
    }

    /// Wrap an instant, remembering `zone` for later arithmetic.
    pub fn from_instant(instant: DateTime<FixedOffset>, zone: Zone) -> Self {
        Self {
            timezone: Some(zone),
            instant: Some(zone.at(&instant.naive_utc())),
            ..Self::default()
        }
    }

    pub(crate) fn from_fields(fields: CivilFields, zone: Zone) -> Result<Self> {
        let local = fields.normalize()?;
        Ok(Self::from_instant(zone.from_local(&local)?, zone))
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────────

impl DateTimeValue {
    /// Return `true` if the calendar fields are the source of truth.
    pub fn is_field_form(&self) -> bool {
        self.year != 0
    }

    /// The zone the value is expressed in.
    ///
    /// Falls back to the instant's own offset, then to UTC.
    pub fn zone(&self) -> Zone {
        match (self.timezone, self.instant) {
            (Some(zone), _) => zone,
            (None, Some(instant)) if !self.is_field_form() => Zone::Fixed(*instant.offset()),
            _ => Zone::Utc,
        }
    }

    /// The fields of a field-form value with unset units defaulted.
    fn defaulted_fields(&self) -> CivilFields {
        let or_one = |v: i32| if v == 0 { 1 } else { v };
        fields(
            self.year,
            or_one(self.month),
            or_one(self.day),
            self.hour,
            self.minute,
            self.second,
            self.subsecond,
        )
    }

    /// Resolve the value to an instant in [`DateTimeValue::zone`].
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if field-form fields normalise outside the
    /// host calendar's range.
    pub fn try_to_instant(&self) -> Result<DateTime<FixedOffset>> {
        let zone = self.zone();
        if self.is_field_form() {
            return zone.from_local(&self.defaulted_fields().normalize()?);
        }
        match self.instant {
            Some(instant) => Ok(zone.at(&instant.naive_utc())),
            None => zone.from_local(&CivilFields::ZERO.normalize()?),
        }
    }

    /// Resolve the value to an instant.
    ///
    /// # Panics
    /// See [`DateTimeValue::try_to_instant`].
    #[track_caller]
    pub fn to_instant(&self) -> DateTime<FixedOffset> {
        self.try_to_instant().or_fatal("DateTimeValue::to_instant")
    }

    /// Seconds since 1970-01-01 00:00:00 UTC.
    #[track_caller]
    pub fn unix_timestamp(&self) -> i64 {
        self.to_instant().timestamp()
    }

    /// Day of the week in the value's zone.
    #[track_caller]
    pub fn weekday(&self) -> Weekday {
        self.to_instant().weekday().into()
    }

    /// The same instant expressed in another zone.
    #[track_caller]
    pub fn in_zone(self, zone: Zone) -> Self {
        Self::from_instant(self.to_instant(), zone)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

impl DateTimeValue {
    /// Render the value with a custom pattern (see [`crate::format`]).
    ///
    /// Characters that are not pattern tokens are copied through.
    ///
    /// # Panics
    /// See [`DateTimeValue::try_to_instant`].
    #[track_caller]
    pub fn format(&self, pattern: &str) -> String {
        self.try_format(pattern).or_fatal("DateTimeValue::format")
    }

    /// Fallible form of [`DateTimeValue::format`].
    ///
    /// # Errors
    /// See [`DateTimeValue::try_to_instant`].
    pub fn try_format(&self, pattern: &str) -> Result<String> {
        self.try_format_with(&Pattern::parse(pattern))
    }

    /// Render with an already compiled [`Pattern`].
    ///
    /// # Errors
    /// See [`DateTimeValue::try_to_instant`].
    pub fn try_format_with(&self, pattern: &Pattern) -> Result<String> {
        let instant = self.try_to_instant()?;
        Ok(pattern.render(&Moment::new(&instant, &self.zone())))
    }
}

impl std::fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(DEFAULT_PATTERN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};
    use sd_core::FixedClock;

    #[test]
    fn construct_all_arities() {
        let fmt = "yyyy-MM-dd HH:mm:ss";
        let three = DateTimeValue::construct((2018, 12, 31));
        let four = DateTimeValue::construct((2018, 12, 31, 23));
        let five = DateTimeValue::construct((2018, 12, 31, 23, 55));
        let six = DateTimeValue::construct((2018, 12, 31, 23, 55, 59));
        assert_eq!(three.format(fmt), "2018-12-31 00:00:00");
        assert_eq!(four.format(fmt), "2018-12-31 23:00:00");
        assert_eq!(five.format(fmt), "2018-12-31 23:55:00");
        assert_eq!(six.format(fmt), "2018-12-31 23:55:59");
        assert_eq!(
            DateTimeValue::construct((2018, 12, 31, 23, 55, 59, 123_456_789)).format("ss.ff"),
            "59.123456"
        );
    }

    #[test]
    fn constructed_values_are_instant_form_in_utc() {
        let d = DateTimeValue::new(2018, 5, 3);
        assert!(!d.is_field_form());
        assert_eq!(d.timezone, Some(Zone::Utc));
        assert_eq!(d.to_instant(), Utc.with_ymd_and_hms(2018, 5, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn month_passthrough_rolls_over() {
        assert_eq!(DateTimeValue::new(2018, 13, 1).format("yyyy-MM-dd"), "2019-01-01");
        assert_eq!(DateTimeValue::new(2018, 0, 1).format("yyyy-MM-dd"), "2017-12-01");
    }

    #[test]
    fn slice_arity() {
        assert_eq!(
            DateTimeValue::from_slice(&[2018, 12, 31, 23]),
            DateTimeValue::construct((2018, 12, 31, 23))
        );
        assert_eq!(
            DateTimeValue::try_from_slice(&[2018]),
            Err(Error::Arity { count: 1 })
        );
        assert_eq!(
            DateTimeValue::try_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Err(Error::Arity { count: 8 })
        );
    }

    #[test]
    #[should_panic(expected = "invalid constructor arguments")]
    fn slice_wrong_arity_is_fatal() {
        let _ = DateTimeValue::from_slice(&[2018]);
    }

    #[test]
    fn field_form_defaults_are_not_persisted() {
        let d = DateTimeValue {
            year: 2018,
            ..Default::default()
        };
        assert_eq!(d.format("yyyy-MM-dd HH:mm"), "2018-01-01 00:00");
        assert_eq!(d.month, 0);
        assert_eq!(d.day, 0);
    }

    #[test]
    fn field_form_honours_timezone() {
        let zone = Zone::fixed(2 * 3600).unwrap();
        let d = DateTimeValue {
            year: 2018,
            month: 5,
            day: 3,
            hour: 12,
            timezone: Some(zone),
            ..Default::default()
        };
        assert_eq!(d.to_instant().naive_utc().hour(), 10);
        assert_eq!(d.format("HH zzz"), "12 +02:00");
    }

    #[test]
    fn zero_value() {
        let empty = DateTimeValue::default();
        assert_eq!(empty.format("yyyy-MM-dd HH:mm:ss Z"), "0001-01-01 00:00:00 UTC");
    }

    #[test]
    fn bare_instant_uses_its_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let instant = offset.with_ymd_and_hms(2018, 5, 3, 8, 15, 0).unwrap();
        let d = DateTimeValue {
            instant: Some(instant),
            ..Default::default()
        };
        assert_eq!(d.zone(), Zone::Fixed(offset));
        assert_eq!(d.format("HH:mm zzz Z"), "08:15 +05:30 +0530");
    }

    #[test]
    fn now_with_fixed_clock() {
        let t = Utc.with_ymd_and_hms(2018, 5, 3, 23, 55, 59).unwrap();
        let clock = FixedClock::new(t);
        let d = DateTimeValue::now_with(&clock, Zone::Utc);
        assert_eq!(d.to_instant(), t);
        assert_eq!(d.unix_timestamp(), t.timestamp());
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn in_zone_keeps_instant() {
        let d = DateTimeValue::construct((2018, 1, 15, 12, 0));
        let rome = d.in_zone(Zone::named("Europe/Rome").unwrap());
        assert_eq!(rome.to_instant(), d.to_instant());
        assert_eq!(rome.format("HH:mm Z"), "13:00 CET");
    }

    #[test]
    fn display_uses_default_pattern() {
        let d = DateTimeValue::construct((2018, 5, 3, 23, 55, 59));
        assert_eq!(d.to_string(), "2018-05-03 23:55:59 +00:00");
    }

    #[test]
    #[should_panic(expected = "DateTimeValue::format: date/time out of range")]
    fn display_out_of_range_is_fatal() {
        let d = DateTimeValue {
            year: i32::MAX,
            ..Default::default()
        };
        let _ = d.to_string();
    }
}
