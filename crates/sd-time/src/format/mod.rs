//! Custom format patterns.
//!
//! A pattern is free text in which the following tokens are replaced
//! (matching is case-sensitive, and within a letter family the longest
//! token wins, so `dddd` is never read as `dd` + `dd`):
//!
//! | Token  | Renders                                   | Example   |
//! |--------|-------------------------------------------|-----------|
//! | `dddd` | weekday name                              | `Monday`  |
//! | `ddd`  | abbreviated weekday name                  | `Mon`     |
//! | `dd`   | day of month, two digits                  | `02`      |
//! | `d`    | day of month                              | `2`       |
//! | `MMMM` | month name                                | `January` |
//! | `MMM`  | abbreviated month name                    | `Jan`     |
//! | `MM`   | month number, two digits                  | `01`      |
//! | `M`    | month number                              | `1`       |
//! | `yyyy` | year, at least four digits                | `2006`    |
//! | `yy`   | year modulo 100, two digits               | `06`      |
//! | `HH`   | hour 00–23                                | `15`      |
//! | `hh`   | hour 01–12, two digits                    | `03`      |
//! | `h`    | hour 1–12                                 | `3`       |
//! | `mm`   | minute, two digits                        | `04`      |
//! | `m`    | minute                                    | `4`       |
//! | `ss`   | second, two digits                        | `05`      |
//! | `s`    | second                                    | `5`       |
//! | `f`    | milliseconds, three digits                | `000`     |
//! | `ff`   | microseconds, six digits                  | `000011`  |
//! | `TT`   | meridian, upper case                      | `PM`      |
//! | `tt`   | meridian, lower case                      | `pm`      |
//! | `Z`    | zone abbreviation                         | `MST`     |
//! | `zz`   | UTC offset, signed hours                  | `-07`     |
//! | `zzz`  | UTC offset, signed hours and minutes      | `-07:00`  |
//!
//! Anything else, including unrecognised letters, is copied through
//! unchanged. Rendering has no error path.

mod pattern;
mod render;
mod token;

pub use pattern::{Item, Pattern};
pub use render::Moment;
pub use token::Token;
