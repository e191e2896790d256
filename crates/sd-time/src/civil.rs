//! Wall-clock field normalisation on the proleptic Gregorian calendar.
//!
//! Fields may be out of range in either direction. Carries flow from the
//! smallest unit upwards (nanosecond → second → minute → hour → day) and
//! from month into year; the resulting day count is then laid out from the
//! first of the normalised month, so February 30 becomes March 2 (or March
//! 1 in a leap year) and month 13 becomes January of the following year.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use sd_core::errors::{Error, Result};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Wall-clock fields, any of which may be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CivilFields {
    /// Year (proleptic Gregorian, astronomical numbering).
    pub year: i64,
    /// Month, nominally 1–12.
    pub month: i64,
    /// Day of month, nominally 1–31.
    pub day: i64,
    /// Hour, nominally 0–23.
    pub hour: i64,
    /// Minute, nominally 0–59.
    pub minute: i64,
    /// Second, nominally 0–59.
    pub second: i64,
    /// Nanosecond, nominally 0–999 999 999.
    pub nanosecond: i64,
}

impl CivilFields {
    /// January 1 of year 1 at midnight: the value an empty
    /// [`DateTimeValue`](crate::DateTimeValue) resolves to.
    pub const ZERO: CivilFields = CivilFields {
        year: 1,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    /// Decompose a wall-clock date-time into fields.
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            year: dt.year().into(),
            month: dt.month().into(),
            day: dt.day().into(),
            hour: dt.hour().into(),
            minute: dt.minute().into(),
            second: dt.second().into(),
            nanosecond: dt.nanosecond().into(),
        }
    }

    /// Normalise the fields into a valid wall-clock date-time.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] when the normalised date falls outside
    /// the range the host calendar can represent.
    pub fn normalize(self) -> Result<NaiveDateTime> {
        if !(1..=12).contains(&self.month) {
            tracing::debug!(
                year = self.year,
                month = self.month,
                "month outside 1..=12, rolling over into adjacent years"
            );
        }
        let (year, month0) = carry(self.year, self.month - 1, 12);
        let (second, nanosecond) = carry(self.second, self.nanosecond, NANOS_PER_SECOND);
        let (minute, second) = carry(self.minute, second, 60);
        let (hour, minute) = carry(self.hour, minute, 60);
        let (day, hour) = carry(self.day, hour, 24);

        let year = i32::try_from(year).map_err(|_| Error::out_of_range(format!("year {year}")))?;
        // month0 is in 0..12 after the carry.
        let first = NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)
            .ok_or_else(|| Error::out_of_range(format!("year {year}")))?;
        let date = TimeDelta::try_days(day - 1)
            .and_then(|offset| first.checked_add_signed(offset))
            .ok_or_else(|| {
                Error::out_of_range(format!("day {day} of {year}-{:02}", month0 + 1))
            })?;
        let time = NaiveTime::from_hms_nano_opt(
            hour as u32,
            minute as u32,
            second as u32,
            nanosecond as u32,
        )
        .ok_or_else(|| Error::out_of_range(format!("time {hour}:{minute}:{second}")))?;
        Ok(NaiveDateTime::new(date, time))
    }
}

/// Move whole multiples of `base` from `lo` into `hi`, leaving `lo` in
/// `0..base`.
fn carry(hi: i64, lo: i64, base: i64) -> (i64, i64) {
    (hi + lo.div_euclid(base), lo.rem_euclid(base))
}
