//! `Period` — an amount of a [`TimeUnit`], usable with `+` and `-` on
//! [`DateTimeValue`](crate::DateTimeValue).

use crate::time_unit::TimeUnit;

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i64,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i64, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Negate the period (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Mul<i64> for Period {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Period {
            length: self.length * rhs,
            unit: self.unit,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Years => "Y",
            TimeUnit::Months => "M",
            TimeUnit::Weeks => "W",
            TimeUnit::Days => "D",
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "min",
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Microseconds => "us",
            TimeUnit::Nanoseconds => "ns",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Period::new(3, TimeUnit::Months).to_string(), "3M");
        assert_eq!(Period::new(-90, TimeUnit::Minutes).to_string(), "-90min");
        assert_eq!(format!("{:?}", Period::new(1, TimeUnit::Years)), "Period(1Y)");
    }

    #[test]
    fn negate_and_scale() {
        let p = Period::new(2, TimeUnit::Weeks);
        assert_eq!(-p, Period::new(-2, TimeUnit::Weeks));
        assert_eq!(p * 3, Period::new(6, TimeUnit::Weeks));
    }
}
