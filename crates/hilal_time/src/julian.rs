//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! Integer Julian Day Number arithmetic uses the Fliegel–Van Flandern
//! algorithm, valid for all Gregorian dates of interest here. A Julian Day
//! Number labels the day starting at 12:00 UT, so the Julian Date at 0h UT
//! of a calendar date is `JDN − 0.5`.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UT).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds per day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Julian Day Number of a Gregorian calendar date (Fliegel–Van Flandern).
fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Gregorian calendar date from a Julian Day Number.
fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = (e - (153 * m + 2) / 5 + 1) as u32;
    let month = (m + 3 - 12 * (m / 10)) as u32;
    let year = (100 * b + d - 4800 + m / 10) as i32;
    (year, month, day)
}

/// Julian Date at 0h UT of a Gregorian calendar date.
pub fn calendar_to_jd(year: i32, month: u32, day: u32) -> f64 {
    calendar_to_jdn(year, month, day) as f64 - 0.5
}

/// Gregorian calendar date containing a Julian Date.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, u32) {
    let jdn = (jd + 0.5).floor() as i64;
    jdn_to_calendar(jdn)
}

/// A proleptic Gregorian calendar date (UTC), time-of-day discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Calendar date containing the given Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day) = jd_to_calendar(jd);
        Self { year, month, day }
    }

    /// Julian Date at 0h UT of this date.
    pub fn jd_at_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day)
    }

    /// This date shifted by a whole number of days (negative allowed).
    pub fn plus_days(&self, days: i64) -> Self {
        let jdn = calendar_to_jdn(self.year, self.month, self.day) + days;
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
