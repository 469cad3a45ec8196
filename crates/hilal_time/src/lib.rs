//! Time primitives for crescent-visibility computations.
//!
//! This crate provides:
//! - [`Instant`]: an immutable UTC point in time (Unix-epoch milliseconds)
//! - Julian Date ↔ [`Instant`] conversion
//! - [`CivilDate`]: a proleptic Gregorian calendar date with day arithmetic
//!
//! All conversions are exact inverses to within one millisecond; no leap
//! seconds or ΔT corrections are applied, matching the accuracy class of the
//! low-precision ephemeris built on top of this crate.

pub mod instant;
pub mod julian;

pub use instant::Instant;
pub use julian::{
    CivilDate, J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
};
