//! Error types for sharpdate.
//!
//! Two tiers exist. Ordinary failures (an unknown zone name, a date that
//! leaves the representable range) are values of [`Error`] and travel with
//! `?`. Programmer errors at the public construction surface are fatal:
//! they go through [`OrFatal::or_fatal`], which logs and then panics.

use thiserror::Error;

/// The error type used throughout sharpdate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor received an argument list of the wrong length.
    #[error("invalid constructor arguments: expected 3 to 7 integer values, got {count}")]
    Arity {
        /// Number of arguments actually supplied.
        count: usize,
    },

    /// A date, time, or duration fell outside the range the host calendar
    /// can represent.
    #[error("date/time out of range: {0}")]
    OutOfRange(String),

    /// A time zone name that the tz database does not know.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
}

impl Error {
    /// Shorthand for [`Error::OutOfRange`].
    pub fn out_of_range(what: impl Into<String>) -> Self {
        Error::OutOfRange(what.into())
    }
}

/// Shorthand `Result` type used throughout sharpdate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error if `$cond` is false.
///
/// # Example
/// ```
/// use sd_core::{ensure, errors::{Error, Result}};
/// fn arity(n: usize) -> Result<usize> {
///     ensure!((3..=7).contains(&n), Error::Arity { count: n });
///     Ok(n)
/// }
/// assert!(arity(3).is_ok());
/// assert_eq!(arity(1), Err(Error::Arity { count: 1 }));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

/// Escalate a [`Result`] into a fail-fast panic.
///
/// Used where the public contract has no error path: the error is logged
/// through `tracing` and the operation stops.
pub trait OrFatal<T> {
    /// Unwrap the value, or log `context` with the error and panic.
    fn or_fatal(self, context: &str) -> T;
}

impl<T> OrFatal<T> for Result<T> {
    #[track_caller]
    fn or_fatal(self, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, context, "fatal date/time error");
                panic!("{context}: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message() {
        let err = Error::Arity { count: 1 };
        assert_eq!(
            err.to_string(),
            "invalid constructor arguments: expected 3 to 7 integer values, got 1"
        );
    }

    #[test]
    fn or_fatal_passes_ok_through() {
        let r: Result<i32> = Ok(7);
        assert_eq!(r.or_fatal("unused"), 7);
    }

    #[test_log::test]
    #[should_panic(expected = "construct: date/time out of range: year 400000")]
    fn or_fatal_panics_on_err() {
        let r: Result<i32> = Err(Error::out_of_range("year 400000"));
        r.or_fatal("construct");
    }
}
