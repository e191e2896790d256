//! # sd-core
//!
//! Core definitions shared by the sharpdate crates: the error enum and the
//! `ensure!` macro, the fail-fast escalation trait, and the [`Clock`] seam
//! through which "now" is read.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Source of the current instant.
pub mod clock;

/// Error types, the `ensure!` macro, and [`OrFatal`].
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Error, OrFatal, Result};
