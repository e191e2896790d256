//! Token rendering.

use std::fmt::Write;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};

use super::token::Token;
use crate::month::Month;
use crate::weekday::Weekday;
use crate::zone::{offset_parts, Zone};

/// A resolved moment: the wall-clock reading, its UTC offset, and the
/// zone abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    local: NaiveDateTime,
    offset: FixedOffset,
    abbreviation: String,
}

impl Moment {
    /// Capture `instant` as seen in `zone`.
    pub fn new(instant: &DateTime<FixedOffset>, zone: &Zone) -> Self {
        let utc = instant.naive_utc();
        let local = zone.at(&utc);
        Self {
            local: local.naive_local(),
            offset: *local.offset(),
            abbreviation: zone.abbreviation_at(&utc),
        }
    }

    pub(crate) fn write_token(&self, out: &mut String, token: Token) {
        let t = &self.local;
        // Leap-second readings carry nanosecond >= 1e9.
        let nanos = t.nanosecond().min(999_999_999);
        let hour12 = match t.hour() % 12 {
            0 => 12,
            h => h,
        };
        let (sign, off_h, off_m) = offset_parts(self.offset);
        // Writing into a String cannot fail.
        let _ = match token {
            Token::WeekdayName => out.write_str(Weekday::from(t.weekday()).long_name()),
            Token::WeekdayAbbrev => out.write_str(Weekday::from(t.weekday()).short_name()),
            Token::DayPadded => write!(out, "{:02}", t.day()),
            Token::Day => write!(out, "{}", t.day()),
            Token::MonthName => out.write_str(month_name(t.month(), Month::long_name)),
            Token::MonthAbbrev => out.write_str(month_name(t.month(), Month::short_name)),
            Token::MonthPadded => write!(out, "{:02}", t.month()),
            Token::Month => write!(out, "{}", t.month()),
            Token::Year if t.year() < 0 => write!(out, "-{:04}", t.year().unsigned_abs()),
            Token::Year => write!(out, "{:04}", t.year()),
            Token::YearShort => write!(out, "{:02}", t.year().rem_euclid(100)),
            Token::Hour24Padded => write!(out, "{:02}", t.hour()),
            Token::Hour12Padded => write!(out, "{hour12:02}"),
            Token::Hour12 => write!(out, "{hour12}"),
            Token::MinutePadded => write!(out, "{:02}", t.minute()),
            Token::Minute => write!(out, "{}", t.minute()),
            Token::SecondPadded => write!(out, "{:02}", t.second()),
            Token::Second => write!(out, "{}", t.second()),
            Token::Millis => write!(out, "{:03}", nanos / 1_000_000),
            Token::Micros => write!(out, "{:06}", nanos / 1_000),
            Token::MeridianUpper => out.write_str(if t.hour() < 12 { "AM" } else { "PM" }),
            Token::MeridianLower => out.write_str(if t.hour() < 12 { "am" } else { "pm" }),
            Token::ZoneAbbrev => out.write_str(&self.abbreviation),
            Token::OffsetHours => write!(out, "{sign}{off_h:02}"),
            Token::OffsetHoursMinutes => write!(out, "{sign}{off_h:02}:{off_m:02}"),
        };
    }
}

fn month_name(number: u32, name: fn(&Month) -> &'static str) -> &'static str {
    Month::from_number(number).map_or("", |m| name(&m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Pattern;
    use chrono::TimeZone;

    fn moment(h: u32, zone: Zone) -> Moment {
        let instant = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2006, 1, 2, h, 4, 5)
            .unwrap();
        Moment::new(&instant, &zone)
    }

    fn render(pattern: &str, m: &Moment) -> String {
        Pattern::parse(pattern).render(m)
    }

    #[test]
    fn reference_date() {
        let m = moment(15, Zone::Utc);
        assert_eq!(render("dddd ddd dd d", &m), "Monday Mon 02 2");
        assert_eq!(render("MMMM MMM MM M", &m), "January Jan 01 1");
        assert_eq!(render("yyyy yy", &m), "2006 06");
        assert_eq!(render("HH hh h mm m ss s", &m), "15 03 3 04 4 05 5");
        assert_eq!(render("TT tt Z zz zzz", &m), "PM pm UTC +00 +00:00");
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(render("hh h TT", &moment(0, Zone::Utc)), "12 12 AM");
        assert_eq!(render("hh h tt", &moment(12, Zone::Utc)), "12 12 pm");
        assert_eq!(render("hh h tt", &moment(9, Zone::Utc)), "09 9 am");
    }

    #[test]
    fn negative_offsets() {
        let zone = Zone::fixed(-(7 * 3600)).unwrap();
        let m = moment(15, zone);
        assert_eq!(render("HH Z zz zzz", &m), "08 -0700 -07 -07:00");
    }

    #[test]
    fn unknown_letters_pass_through() {
        let m = moment(15, Zone::Utc);
        assert_eq!(render("DD YY T z Q", &m), "DD YY T z Q");
        assert_eq!(render("yyy", &m), "06y");
    }
}
