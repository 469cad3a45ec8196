//! Types for hour-angle and sunset calculations.

use hilal_time::Instant;

/// Target solar altitude for sunset in degrees: 34′ of horizontal
/// refraction plus 16′ of solar semidiameter below the geometric horizon.
pub const SUNSET_TARGET_ALTITUDE_DEG: f64 = -0.833;

/// Bound on the hourly forward search in [`crate::first_sunset_after`].
pub const SUNSET_SEARCH_MAX_STEPS: u32 = 48;

/// Result of solving the hour-angle equation for a target altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngleResult {
    /// The body crosses the target altitude at this hour angle (degrees,
    /// positive; the crossing occurs symmetrically before and after transit).
    Angle(f64),
    /// The body never rises to the target altitude at this latitude
    /// (cos H > 1; polar-night side of the circumpolar condition).
    NeverRises,
    /// The body never descends to the target altitude
    /// (cos H < -1; midnight-sun side).
    NeverSets,
}

/// Result of a sunset computation for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunsetResult {
    /// The Sun sets at this instant.
    Event(Instant),
    /// Polar night: the Sun stays below the sunset altitude all day.
    NeverRises,
    /// Midnight sun: the Sun stays above the sunset altitude all day.
    NeverSets,
}

/// Result of the bounded first-sunset-after search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunsetSearch {
    /// First sunset strictly after the reference instant.
    Found(Instant),
    /// No sunset within the bounded search window (polar conditions).
    NotFound,
}

impl SunsetSearch {
    /// The found sunset instant, if any.
    pub fn instant(&self) -> Option<Instant> {
        match self {
            Self::Found(t) => Some(*t),
            Self::NotFound => None,
        }
    }
}
