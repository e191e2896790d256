//! Arithmetic on [`DateTimeValue`].
//!
//! Year, month, week, and day deltas use *calendar* arithmetic: they are
//! added to the wall-clock fields in the value's zone, and the result is
//! normalised (January 31 plus one month is March 3, or March 2 in a leap
//! year). Hour and smaller deltas use *fixed-duration* arithmetic: they
//! move the instant by an exact number of nanoseconds.
//!
//! Every operation returns a new instant-form value; the receiver is left
//! untouched. A field-form receiver is resolved first.

use chrono::TimeDelta;
use sd_core::errors::{Error, OrFatal, Result};

use crate::civil::CivilFields;
use crate::date_time::DateTimeValue;
use crate::period::Period;
use crate::time_unit::TimeUnit;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

// ── Calendar arithmetic ───────────────────────────────────────────────────────

impl DateTimeValue {
    /// Add years, then months, then days.
    ///
    /// # Panics
    /// If the result leaves the host calendar's range.
    #[track_caller]
    pub fn add(self, years: i32, months: i32, days: i32) -> Self {
        self.shift_calendar(years.into(), months.into(), days.into())
            .or_fatal("DateTimeValue::add")
    }

    /// Add calendar years.
    #[track_caller]
    pub fn add_years(self, years: i32) -> Self {
        self.add(years, 0, 0)
    }

    /// Add calendar months.
    #[track_caller]
    pub fn add_months(self, months: i32) -> Self {
        self.add(0, months, 0)
    }

    /// Add calendar days.
    #[track_caller]
    pub fn add_days(self, days: i32) -> Self {
        self.add(0, 0, days)
    }

    /// Subtract years, months, and days: `add` with every delta negated.
    #[track_caller]
    pub fn subtract(self, years: i32, months: i32, days: i32) -> Self {
        self.shift_calendar(-i64::from(years), -i64::from(months), -i64::from(days))
            .or_fatal("DateTimeValue::subtract")
    }

    fn shift_calendar(self, years: i64, months: i64, days: i64) -> Result<Self> {
        let zone = self.zone();
        let local = self.try_to_instant()?.naive_local();
        let fields = CivilFields::from_naive(&local);
        let shifted = |base: i64, delta: i64, unit: &str| {
            base.checked_add(delta)
                .ok_or_else(|| Error::out_of_range(format!("{delta} {unit}")))
        };
        Self::from_fields(
            CivilFields {
                year: shifted(fields.year, years, "years")?,
                month: shifted(fields.month, months, "months")?,
                day: shifted(fields.day, days, "days")?,
                ..fields
            },
            zone,
        )
    }
}

// ── Fixed-duration arithmetic ─────────────────────────────────────────────────

impl DateTimeValue {
    /// Add `hours * 3600 + minutes * 60 + seconds` seconds.
    ///
    /// # Panics
    /// If the result leaves the host calendar's range.
    #[track_caller]
    pub fn add_time(self, hours: i64, minutes: i64, seconds: i64) -> Self {
        self.shift_nanos(hms_nanos(hours, minutes, seconds))
            .or_fatal("DateTimeValue::add_time")
    }

    /// `add_time` with the duration negated.
    #[track_caller]
    pub fn subtract_time(self, hours: i64, minutes: i64, seconds: i64) -> Self {
        self.shift_nanos(-hms_nanos(hours, minutes, seconds))
            .or_fatal("DateTimeValue::subtract_time")
    }

    /// Add exact hours.
    #[track_caller]
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_unit(hours, TimeUnit::Hours)
    }

    /// Add exact minutes.
    #[track_caller]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_unit(minutes, TimeUnit::Minutes)
    }

    /// Add exact seconds.
    #[track_caller]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_unit(seconds, TimeUnit::Seconds)
    }

    /// Add exact milliseconds.
    #[track_caller]
    pub fn add_milliseconds(self, milliseconds: i64) -> Self {
        self.add_unit(milliseconds, TimeUnit::Milliseconds)
    }

    /// Add exact microseconds.
    #[track_caller]
    pub fn add_microseconds(self, microseconds: i64) -> Self {
        self.add_unit(microseconds, TimeUnit::Microseconds)
    }

    /// Add exact nanoseconds.
    #[track_caller]
    pub fn add_nanoseconds(self, nanoseconds: i64) -> Self {
        self.add_unit(nanoseconds, TimeUnit::Nanoseconds)
    }

    fn shift_nanos(self, nanos: i128) -> Result<Self> {
        let zone = self.zone();
        let overflow = || Error::out_of_range(format!("shift by {nanos}ns"));
        let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND)).map_err(|_| overflow())?;
        // rem_euclid keeps the sub-second part in 0..1e9.
        let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        let delta = TimeDelta::new(secs, subsec).ok_or_else(overflow)?;
        let utc = self
            .try_to_instant()?
            .naive_utc()
            .checked_add_signed(delta)
            .ok_or_else(overflow)?;
        Ok(Self::from_instant(zone.at(&utc), zone))
    }
}

fn hms_nanos(hours: i64, minutes: i64, seconds: i64) -> i128 {
    (i128::from(hours) * 3600 + i128::from(minutes) * 60 + i128::from(seconds)) * NANOS_PER_SECOND
}

// ── Unit / period dispatch ────────────────────────────────────────────────────

impl DateTimeValue {
    /// Add `amount` of `unit`, choosing calendar or fixed-duration
    /// arithmetic by unit.
    ///
    /// # Panics
    /// If the result leaves the host calendar's range.
    #[track_caller]
    pub fn add_unit(self, amount: i64, unit: TimeUnit) -> Self {
        self.try_add_unit(amount, unit).or_fatal("DateTimeValue::add_unit")
    }

    /// Fallible form of [`DateTimeValue::add_unit`].
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if the result is not representable.
    pub fn try_add_unit(self, amount: i64, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Years => self.shift_calendar(amount, 0, 0),
            TimeUnit::Months => self.shift_calendar(0, amount, 0),
            TimeUnit::Weeks => {
                let days = amount
                    .checked_mul(7)
                    .ok_or_else(|| Error::out_of_range(format!("{amount} weeks")))?;
                self.shift_calendar(0, 0, days)
            }
            TimeUnit::Days => self.shift_calendar(0, 0, amount),
            _ => {
                let unit_nanos = unit.nanos().unwrap_or(1);
                self.shift_nanos(i128::from(amount) * i128::from(unit_nanos))
            }
        }
    }

    /// Add a [`Period`].
    #[track_caller]
    pub fn add_period(self, period: Period) -> Self {
        self.add_unit(period.length, period.unit)
    }
}

impl std::ops::Add<Period> for DateTimeValue {
    type Output = Self;
    fn add(self, rhs: Period) -> Self {
        self.add_period(rhs)
    }
}

impl std::ops::Sub<Period> for DateTimeValue {
    type Output = Self;
    fn sub(self, rhs: Period) -> Self {
        self.add_period(-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    const FMT: &str = "dd-MM-yyyy HH:mm:ss";

    #[test]
    fn calendar_overflow_normalises() {
        let jan31 = DateTimeValue::new(2018, 1, 31);
        assert_eq!(jan31.add_months(1).format(FMT), "03-03-2018 00:00:00");
        assert_eq!(DateTimeValue::new(2020, 1, 31).add_months(1).format(FMT), "02-03-2020 00:00:00");
        assert_eq!(DateTimeValue::new(2020, 2, 29).add_years(1).format(FMT), "01-03-2021 00:00:00");
    }

    #[test]
    fn calendar_keeps_time_of_day() {
        let d = DateTimeValue::construct((2018, 12, 28, 23, 55, 59, 5));
        let next = d.add_days(1);
        assert_eq!(next.format("dd HH:mm:ss"), "29 23:55:59");
        assert_eq!(next.to_instant().timestamp_subsec_nanos(), 5);
    }

    #[test]
    fn subtract_negates() {
        let d = DateTimeValue::construct((2018, 5, 3, 22, 50, 50));
        assert_eq!(d.subtract(3, 1, 2), d.add(-3, -1, -2));
    }

    #[test]
    fn duration_crosses_year_boundary() {
        let d = DateTimeValue::construct((2018, 12, 31, 23, 59, 59));
        assert_eq!(d.add_seconds(1).format(FMT), "01-01-2019 00:00:00");
        assert_eq!(d.add_time(0, 0, 1), d.add_seconds(1));
        assert_eq!(d.add_hours(-24).format(FMT), "30-12-2018 23:59:59");
    }

    #[test]
    fn duration_vs_calendar_across_dst() {
        // Rome springs forward on 2018-03-25.
        let rome = Zone::named("Europe/Rome").unwrap();
        let d = DateTimeValue::construct((2018, 3, 24, 12, 0)).in_zone(rome);
        assert_eq!(d.format("HH:mm"), "13:00");
        assert_eq!(d.add_days(1).format("dd HH:mm Z"), "25 13:00 CEST");
        assert_eq!(d.add_hours(24).format("dd HH:mm Z"), "25 14:00 CEST");
    }

    #[test]
    fn sub_second_units() {
        let d = DateTimeValue::construct((2018, 5, 3, 23, 55, 59, 0));
        assert_eq!(d.add_milliseconds(10).format("ss.f"), "59.010");
        assert_eq!(d.add_microseconds(11).format("ss.ff"), "59.000011");
        assert_eq!(d.add_nanoseconds(-1).format("ss.ff"), "58.999999");
    }

    #[test]
    fn unit_dispatch_and_periods() {
        let d = DateTimeValue::new(2018, 2, 1);
        assert_eq!(d.add_unit(2, TimeUnit::Weeks), d.add_days(14));
        assert_eq!(d + Period::new(3, TimeUnit::Months), d.add_months(3));
        assert_eq!(d - Period::new(90, TimeUnit::Minutes), d.add_minutes(-90));
        assert!(d.try_add_unit(i64::MAX, TimeUnit::Weeks).is_err());
        assert!(d.try_add_unit(i64::MAX, TimeUnit::Hours).is_err());
    }

    #[test]
    fn calendar_overflow_is_an_error() {
        let d = DateTimeValue::new(2018, 2, 1);
        for unit in [TimeUnit::Years, TimeUnit::Months, TimeUnit::Days] {
            assert!(matches!(
                d.try_add_unit(i64::MAX, unit),
                Err(Error::OutOfRange(_))
            ));
            assert!(matches!(
                d.try_add_unit(i64::MIN, unit),
                Err(Error::OutOfRange(_))
            ));
        }
    }

    #[test]
    fn field_form_receiver_is_resolved_first() {
        let d = DateTimeValue {
            year: 2018,
            month: 2,
            ..Default::default()
        };
        let later = d.add_months(3);
        assert_eq!(later.format("dd-MM-yyyy"), "01-05-2018");
        assert!(!later.is_field_form());
        assert_eq!(d.month, 2);
    }
}
