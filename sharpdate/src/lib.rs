//! # sharpdate
//!
//! Date/time values with .NET-style construction, arithmetic, and custom
//! format patterns, on top of `chrono`.
//!
//! This crate is a **façade** that re-exports the public items of the
//! `sd-*` workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use sharpdate::DateTimeValue;
//!
//! let d = DateTimeValue::construct((2018, 5, 3, 23, 55, 59, 0));
//! assert_eq!(d.add_milliseconds(10).format("dd-MM-yyyy HH:mm:ss.f"), "03-05-2018 23:55:59.010");
//! assert_eq!(DateTimeValue::new(2015, 4, 1).add(3, 1, 2).format("dd MMMM yyyy"), "03 May 2018");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors and the clock abstraction.
pub use sd_core as core;

/// The value type, arithmetic, zones, and format engine.
pub use sd_time as time;

pub use sd_core::{Clock, Error, FixedClock, Result, SystemClock};
pub use sd_time::{DateTimeValue, Month, Pattern, Period, TimeUnit, Weekday, Zone};
