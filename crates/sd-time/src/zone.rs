//! `Zone` — the time-zone descriptor carried by a `DateTimeValue`.
//!
//! A zone turns a UTC reading into a local offset (and abbreviation), and
//! resolves a local wall-clock reading back into an instant.

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use sd_core::errors::{Error, Result};

/// A time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Coordinated Universal Time.
    Utc,
    /// The host's local zone.
    Local,
    /// A fixed offset from UTC with no name.
    Fixed(FixedOffset),
    /// A zone from the IANA tz database.
    Named(Tz),
}

impl Zone {
    /// Look up a zone by IANA name, e.g. `"Europe/Rome"`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownZone`] if the tz database has no such zone.
    pub fn named(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| Error::UnknownZone(name.to_owned()))
    }

    /// A fixed zone `seconds` east of UTC.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] unless `|seconds| < 86_400`.
    pub fn fixed(seconds: i32) -> Result<Self> {
        FixedOffset::east_opt(seconds)
            .map(Zone::Fixed)
            .ok_or_else(|| Error::out_of_range(format!("UTC offset of {seconds}s")))
    }

    /// The offset in effect at the given UTC reading.
    pub fn offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Local => Local.offset_from_utc_datetime(utc),
            Zone::Fixed(offset) => *offset,
            Zone::Named(tz) => tz.offset_from_utc_datetime(utc).fix(),
        }
    }

    /// Express the UTC reading `utc` in this zone.
    pub fn at(&self, utc: &NaiveDateTime) -> DateTime<FixedOffset> {
        self.offset_at(utc).from_utc_datetime(utc)
    }

    /// Resolve a wall-clock reading in this zone to an instant.
    ///
    /// A reading inside a DST fold resolves to the earlier instant. A
    /// reading inside a DST gap is interpreted with the offset in effect
    /// one day before it.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the instant is not representable.
    pub fn from_local(&self, local: &NaiveDateTime) -> Result<DateTime<FixedOffset>> {
        let offset = match self {
            Zone::Utc => Utc.fix(),
            Zone::Fixed(offset) => *offset,
            Zone::Local => self.pick(local, Local.offset_from_local_datetime(local)),
            Zone::Named(tz) => {
                self.pick(local, tz.offset_from_local_datetime(local).map(|o| o.fix()))
            }
        };
        let utc = local
            .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
            .ok_or_else(|| Error::out_of_range(format!("{local} in {self}")))?;
        Ok(offset.from_utc_datetime(&utc))
    }

    fn pick(&self, local: &NaiveDateTime, candidates: LocalResult<FixedOffset>) -> FixedOffset {
        match candidates {
            LocalResult::Single(offset) => offset,
            LocalResult::Ambiguous(earliest, latest) => {
                tracing::debug!(
                    %local, zone = %self, %earliest, %latest,
                    "ambiguous local time, taking earliest"
                );
                earliest
            }
            LocalResult::None => {
                let before = local.checked_sub_signed(TimeDelta::days(1)).unwrap_or(*local);
                // `offset_at` wants a UTC reading; a day clear of the
                // transition, the local reading's own offset converts it.
                let guess = self.offset_at(&before);
                let before_utc = before
                    .checked_sub_signed(TimeDelta::seconds(guess.local_minus_utc().into()))
                    .unwrap_or(before);
                let offset = self.offset_at(&before_utc);
                tracing::debug!(%local, zone = %self, %offset, "local time falls in a gap");
                offset
            }
        }
    }

    /// The abbreviation rendered for the `Z` pattern token at the given
    /// UTC reading.
    ///
    /// Unnamed offsets render numerically as `±hhmm`.
    pub fn abbreviation_at(&self, utc: &NaiveDateTime) -> String {
        match self {
            Zone::Utc => "UTC".to_owned(),
            Zone::Named(tz) => tz.offset_from_utc_datetime(utc).to_string(),
            Zone::Local => match self.offset_at(utc) {
                offset if offset.local_minus_utc() == 0 => "UTC".to_owned(),
                offset => numeric(offset),
            },
            Zone::Fixed(offset) => numeric(*offset),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Utc => f.write_str("UTC"),
            Zone::Local => f.write_str("Local"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Split an offset into sign, hours, and minutes.
pub(crate) fn offset_parts(offset: FixedOffset) -> (char, i32, i32) {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.abs();
    (sign, abs / 3600, abs % 3600 / 60)
}

fn numeric(offset: FixedOffset) -> String {
    let (sign, hours, minutes) = offset_parts(offset);
    format!("{sign}{hours:02}{minutes:02}")
}
