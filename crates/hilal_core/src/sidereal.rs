//! Greenwich Mean Sidereal Time.
//!
//! Needed to convert a body's RA/Dec into an hour angle for an observer at
//! an arbitrary instant. Uses the single linear Earth-rotation term
//! referenced to J2000.0; the omitted polynomial corrections are far below
//! the arcminute accuracy of the position models.

use hilal_time::J2000_JD;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// `GMST = 280.46061837 + 360.98564736629 × (JD − J2000)`
pub fn gmst_deg(jd: f64) -> f64 {
    (280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD)).rem_euclid(360.0)
}

/// Local sidereal time from GMST and observer east longitude, degrees [0, 360).
pub fn local_sidereal_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000() {
        // GMST at J2000.0 is ~280.46 deg
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.46).abs() < 0.01, "gmst = {g}");
    }

    #[test]
    fn gmst_advances_past_360_per_day() {
        // Sidereal day is shorter than a solar day: ~360.9856 deg/day
        let g0 = gmst_deg(J2000_JD);
        let g1 = gmst_deg(J2000_JD + 1.0);
        let advance = (g1 - g0).rem_euclid(360.0);
        assert!((advance - 0.9856).abs() < 0.001, "advance = {advance}");
    }

    #[test]
    fn lst_wraps() {
        assert!((local_sidereal_deg(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((local_sidereal_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }
}
