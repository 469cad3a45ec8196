//! UTC instant with millisecond precision.
//!
//! [`Instant`] is the canonical time representation used throughout the
//! engine. It stores milliseconds since the Unix epoch and converts to and
//! from Julian Date with `JD = millis / 86 400 000 + 2 440 587.5`; the two
//! conversions round-trip any instant to within one millisecond.

use crate::julian::{CivilDate, MILLIS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};

/// A UTC point in time, milliseconds since 1970-01-01T00:00:00Z. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    millis: i64,
}

impl Instant {
    /// Create from milliseconds since the Unix epoch.
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the Unix epoch.
    pub const fn unix_millis(&self) -> i64 {
        self.millis
    }

    /// Create from a UTC calendar date and time of day.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let jd_midnight = calendar_to_jd(year, month, day);
        let day_millis =
            hour as f64 * 3_600_000.0 + minute as f64 * 60_000.0 + second * 1000.0;
        let base = ((jd_midnight - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64;
        Self {
            millis: base + day_millis.round() as i64,
        }
    }

    /// Julian Date of this instant.
    pub fn to_julian_date(&self) -> f64 {
        self.millis as f64 / MILLIS_PER_DAY as f64 + UNIX_EPOCH_JD
    }

    /// Instant from a Julian Date, rounded to the nearest millisecond.
    pub fn from_julian_date(jd: f64) -> Self {
        Self {
            millis: ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY as f64).round() as i64,
        }
    }

    /// UTC calendar date containing this instant.
    pub fn civil_date(&self) -> CivilDate {
        CivilDate::from_jd(self.to_julian_date())
    }

    /// This instant shifted by a signed number of milliseconds.
    pub const fn plus_millis(&self, millis: i64) -> Self {
        Self {
            millis: self.millis + millis,
        }
    }

    /// This instant shifted by a fractional number of days.
    pub fn plus_days(&self, days: f64) -> Self {
        self.plus_millis((days * MILLIS_PER_DAY as f64).round() as i64)
    }

    /// Signed difference `self − other` in days.
    pub fn days_since(&self, other: Instant) -> f64 {
        (self.millis - other.millis) as f64 / MILLIS_PER_DAY as f64
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let date = self.civil_date();
        let day_ms = self.millis.rem_euclid(MILLIS_PER_DAY);
        let hour = day_ms / 3_600_000;
        let minute = (day_ms % 3_600_000) / 60_000;
        let second = (day_ms % 60_000) / 1000;
        let ms = day_ms % 1000;
        if ms == 0 {
            write!(f, "{date}T{hour:02}:{minute:02}:{second:02}Z")
        } else {
            write!(f, "{date}T{hour:02}:{minute:02}:{second:02}.{ms:03}Z")
        }
    }
}
