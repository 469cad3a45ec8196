//! Low-precision solar and lunar equatorial positions.
//!
//! Solar model: NOAA-style truncated series with mean longitude, mean
//! anomaly, equation of center, and mean obliquity as polynomials in Julian
//! centuries since J2000.0.
//!
//! Lunar model: single-term truncated series with mean longitude and mean
//! anomaly linear in days since J2000.0, one periodic correction each for
//! ecliptic longitude and latitude.
//!
//! Accuracy: arcminute level for the Sun, a few tenths of a degree for the
//! Moon. Adequate for crescent-visibility classification, not for
//! ephemeris-grade work; a full ephemeris can replace these functions
//! without changing their signatures.

use hilal_time::{Instant, J2000_JD};

/// Apparent equatorial position of a body, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    /// Right ascension in degrees, [0, 360) not enforced (atan2 range).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

/// Clamp an inverse-sine argument against floating-point rounding.
///
/// Arguments here are bounded by construction (products of sines and
/// cosines); only rounding can push them past ±1.
fn asin_clamped_deg(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Geocentric solar RA/Dec at an instant.
pub fn solar_position(instant: Instant) -> EquatorialCoordinates {
    let jd = instant.to_julian_date();
    let t = (jd - J2000_JD) / 36_525.0;

    // Mean longitude and mean anomaly of the Sun (degrees)
    let l0 = (280.46646 + 36_000.76983 * t).rem_euclid(360.0);
    let m = (357.52911 + 35_999.05029 * t).to_radians();

    // Equation of center
    let c = (1.914602 - t * (0.004817 + 0.000014 * t)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_long = (l0 + c).to_radians();

    // Mean obliquity of the ecliptic
    let epsilon = (23.439291 - 0.0130042 * t).to_radians();

    let ra_deg = (epsilon.cos() * true_long.sin())
        .atan2(true_long.cos())
        .to_degrees();
    let dec_deg = asin_clamped_deg(epsilon.sin() * true_long.sin());

    EquatorialCoordinates { ra_deg, dec_deg }
}

/// Geocentric lunar RA/Dec at an instant.
pub fn lunar_position(instant: Instant) -> EquatorialCoordinates {
    let jd = instant.to_julian_date();
    let d = jd - J2000_JD;
    let t = d / 36_525.0;

    // Mean longitude and mean anomaly of the Moon (degrees)
    let l = (218.316 + 13.176396 * d).rem_euclid(360.0);
    let m = (134.963 + 13.064993 * d).rem_euclid(360.0).to_radians();

    // One periodic term each for ecliptic longitude and latitude
    let lambda = (l + 6.289 * m.sin()).to_radians();
    let beta = (5.128 * m.sin()).to_radians();

    let epsilon = (23.439 - 0.000_000_4 * t).to_radians();

    let ra_deg = (lambda.sin() * epsilon.cos() - beta.tan() * epsilon.sin())
        .atan2(lambda.cos())
        .to_degrees();
    let dec_deg = asin_clamped_deg(
        beta.sin() * epsilon.cos() + beta.cos() * epsilon.sin() * lambda.sin(),
    );

    EquatorialCoordinates { ra_deg, dec_deg }
}
