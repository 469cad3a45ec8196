//! Hour-angle geometry, sunset solving, and angular separation.
//!
//! Standard spherical-astronomy formulas relating latitude, declination,
//! hour angle, and altitude. The hour-angle solver detects the circumpolar
//! condition (inverse-cosine argument outside [-1, 1]) and reports it as an
//! explicit result variant instead of a NaN.

use hilal_time::{CivilDate, Instant};

use crate::ephemeris::{EquatorialCoordinates, solar_position};
use crate::error::CoreError;
use crate::horizon_types::{
    HourAngleResult, SUNSET_SEARCH_MAX_STEPS, SUNSET_TARGET_ALTITUDE_DEG, SunsetResult,
    SunsetSearch,
};
use crate::observer::GeoLocation;
use crate::sidereal::{gmst_deg, local_sidereal_deg};

/// Step size of the first-sunset-after search: one hour in milliseconds.
const SEARCH_STEP_MILLIS: i64 = 3_600_000;

/// Rounding tolerance for inverse-trigonometric arguments.
const DOMAIN_TOLERANCE: f64 = 1.0e-9;

/// Inverse cosine with an explicit domain check.
///
/// Arguments within rounding tolerance of ±1 are clamped; anything further
/// out (or NaN) is rejected rather than allowed to propagate as NaN.
fn checked_acos_deg(x: f64, context: &'static str) -> Result<f64, CoreError> {
    if !x.is_finite() || x.abs() > 1.0 + DOMAIN_TOLERANCE {
        return Err(CoreError::Domain(context));
    }
    Ok(x.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Solve the hour angle at which a body reaches a target altitude.
///
/// `cos H = (sin h0 − sin φ sin δ) / (cos φ cos δ)`
///
/// Returns the hour angle in degrees (positive), or the circumpolar
/// variant when the equation has no solution.
pub fn hour_angle(
    latitude_deg: f64,
    declination_deg: f64,
    target_altitude_deg: f64,
) -> HourAngleResult {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h0 = target_altitude_deg.to_radians();

    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    if cos_h > 1.0 {
        return HourAngleResult::NeverRises;
    }
    if cos_h < -1.0 {
        return HourAngleResult::NeverSets;
    }
    HourAngleResult::Angle(cos_h.acos().to_degrees())
}

/// Altitude of a body at a given hour angle, degrees. Always well-defined.
///
/// `sin h = sin φ sin δ + cos φ cos δ cos H`
pub fn altitude_deg(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h = hour_angle_deg.to_radians();
    let sin_alt = phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos();
    // Bounded by construction; clamp absorbs rounding only
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Altitude of a body above an observer's horizon at an instant, degrees.
///
/// The hour angle is taken from local sidereal time: `H = LST − RA`.
pub fn body_altitude_deg(
    coords: &EquatorialCoordinates,
    instant: Instant,
    location: &GeoLocation,
) -> f64 {
    let lst = local_sidereal_deg(gmst_deg(instant.to_julian_date()), location.longitude_deg());
    let mut ha = (lst - coords.ra_deg).rem_euclid(360.0);
    if ha > 180.0 {
        ha -= 360.0;
    }
    altitude_deg(location.latitude_deg(), coords.dec_deg, ha)
}

/// Sunset instant on a given UTC calendar date for an observer.
///
/// Evaluates the solar position at approximate local solar noon
/// (`JD_0h + 0.5 − λ/360`), solves the hour angle for the sunset target
/// altitude of −0.833°, and offsets noon by `H/15` hours.
pub fn sunset_instant(date: CivilDate, location: &GeoLocation) -> SunsetResult {
    let noon_jd = date.jd_at_midnight() + 0.5 - location.longitude_deg() / 360.0;
    let noon = Instant::from_julian_date(noon_jd);

    let sun = solar_position(noon);
    match hour_angle(
        location.latitude_deg(),
        sun.dec_deg,
        SUNSET_TARGET_ALTITUDE_DEG,
    ) {
        HourAngleResult::Angle(h_deg) => {
            // H degrees of diurnal rotation → H/15 hours → H/360 days
            SunsetResult::Event(noon.plus_days(h_deg / 360.0))
        }
        HourAngleResult::NeverRises => SunsetResult::NeverRises,
        HourAngleResult::NeverSets => SunsetResult::NeverSets,
    }
}

/// First sunset strictly after a reference instant.
///
/// Steps forward in fixed one-hour increments, bounded at
/// [`SUNSET_SEARCH_MAX_STEPS`], computing the sunset of each probed
/// calendar date. Returns [`SunsetSearch::NotFound`] when the bound is
/// exhausted (polar conditions); never loops unboundedly.
pub fn first_sunset_after(reference: Instant, location: &GeoLocation) -> SunsetSearch {
    let mut last_date: Option<CivilDate> = None;
    for step in 0..SUNSET_SEARCH_MAX_STEPS {
        let probe = reference.plus_millis(step as i64 * SEARCH_STEP_MILLIS);
        let date = probe.civil_date();
        if last_date == Some(date) {
            continue;
        }
        last_date = Some(date);
        if let SunsetResult::Event(sunset) = sunset_instant(date, location) {
            if sunset > reference {
                return SunsetSearch::Found(sunset);
            }
        }
    }
    SunsetSearch::NotFound
}

/// Angular separation between two equatorial positions, degrees [0, 180].
///
/// Spherical law of cosines; symmetric in its two arguments.
pub fn elongation_deg(
    a: &EquatorialCoordinates,
    b: &EquatorialCoordinates,
) -> Result<f64, CoreError> {
    let dec_a = a.dec_deg.to_radians();
    let dec_b = b.dec_deg.to_radians();
    let dra = (a.ra_deg - b.ra_deg).to_radians();
    let cos_sep = dec_a.sin() * dec_b.sin() + dec_a.cos() * dec_b.cos() * dra.cos();
    checked_acos_deg(cos_sep, "angular separation")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greenwich() -> GeoLocation {
        GeoLocation::new("Greenwich", 51.4769, 0.0).unwrap()
    }

    #[test]
    fn hour_angle_equator_equinox() {
        // φ=0, δ=0, h0=-0.833: cos H = sin(-0.833°) → H ≈ 90.83°
        match hour_angle(0.0, 0.0, SUNSET_TARGET_ALTITUDE_DEG) {
            HourAngleResult::Angle(h) => {
                assert!((h - 90.833).abs() < 0.01, "H = {h}")
            }
            other => panic!("expected angle, got {other:?}"),
        }
    }

    #[test]
    fn hour_angle_polar_night() {
        // Tromsø latitude, winter-solstice solar declination
        assert_eq!(
            hour_angle(70.0, -23.44, SUNSET_TARGET_ALTITUDE_DEG),
            HourAngleResult::NeverRises
        );
    }

    #[test]
    fn hour_angle_midnight_sun() {
        assert_eq!(
            hour_angle(70.0, 23.44, SUNSET_TARGET_ALTITUDE_DEG),
            HourAngleResult::NeverSets
        );
    }

    #[test]
    fn altitude_at_transit() {
        // At H=0 the altitude is 90 − |φ − δ|
        let alt = altitude_deg(40.0, 10.0, 0.0);
        assert!((alt - 60.0).abs() < 1e-9, "alt = {alt}");
    }

    #[test]
    fn altitude_at_antitransit() {
        // At H=180 the altitude is |φ + δ| − 90
        let alt = altitude_deg(40.0, 10.0, 180.0);
        assert!((alt - (-40.0)).abs() < 1e-9, "alt = {alt}");
    }

    #[test]
    fn sunset_near_six_pm_at_equator_equinox() {
        let loc = GeoLocation::new("equator", 0.0, 0.0).unwrap();
        let date = CivilDate::new(2000, 3, 20);
        match sunset_instant(date, &loc) {
            SunsetResult::Event(t) => {
                let hours = (t.to_julian_date() - date.jd_at_midnight()) * 24.0;
                assert!(
                    (17.5..18.5).contains(&hours),
                    "sunset at {hours:.2}h UT: {t}"
                );
            }
            other => panic!("expected event, got {other:?}"),
        }
    }

    #[test]
    fn sunset_polar_summer_none() {
        let loc = GeoLocation::new("Alert", 82.5, -62.3).unwrap();
        assert_eq!(
            sunset_instant(CivilDate::new(2024, 6, 21), &loc),
            SunsetResult::NeverSets
        );
    }

    #[test]
    fn sunset_polar_winter_none() {
        let loc = GeoLocation::new("Alert", 82.5, -62.3).unwrap();
        assert_eq!(
            sunset_instant(CivilDate::new(2024, 12, 21), &loc),
            SunsetResult::NeverRises
        );
    }

    #[test]
    fn first_sunset_is_strictly_later() {
        let reference = Instant::from_calendar(2024, 4, 8, 20, 0, 0.0);
        match first_sunset_after(reference, &greenwich()) {
            SunsetSearch::Found(t) => {
                assert!(t > reference);
                // Next sunset is within ~28 hours at mid latitudes
                assert!(t.days_since(reference) < 1.2, "found {t}");
            }
            SunsetSearch::NotFound => panic!("mid-latitude sunset must exist"),
        }
    }

    #[test]
    fn first_sunset_bounded_at_pole() {
        let loc = GeoLocation::new("Alert", 82.5, -62.3).unwrap();
        let reference = Instant::from_calendar(2024, 6, 10, 0, 0, 0.0);
        assert_eq!(first_sunset_after(reference, &loc), SunsetSearch::NotFound);
    }

    #[test]
    fn elongation_symmetric_and_bounded() {
        let a = EquatorialCoordinates {
            ra_deg: 10.0,
            dec_deg: 5.0,
        };
        let b = EquatorialCoordinates {
            ra_deg: 200.0,
            dec_deg: -15.0,
        };
        let ab = elongation_deg(&a, &b).unwrap();
        let ba = elongation_deg(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
        assert!((0.0..=180.0).contains(&ab), "elongation = {ab}");
    }

    #[test]
    fn elongation_identical_positions_zero() {
        let a = EquatorialCoordinates {
            ra_deg: 123.4,
            dec_deg: -7.8,
        };
        let e = elongation_deg(&a, &a).unwrap();
        assert!(e.abs() < 1e-6, "elongation = {e}");
    }

    #[test]
    fn elongation_antipodal_positions() {
        let a = EquatorialCoordinates {
            ra_deg: 0.0,
            dec_deg: 0.0,
        };
        let b = EquatorialCoordinates {
            ra_deg: 180.0,
            dec_deg: 0.0,
        };
        let e = elongation_deg(&a, &b).unwrap();
        assert!((e - 180.0).abs() < 1e-9, "elongation = {e}");
    }

    #[test]
    fn elongation_rejects_corrupt_coordinates() {
        let a = EquatorialCoordinates {
            ra_deg: f64::NAN,
            dec_deg: 0.0,
        };
        let b = EquatorialCoordinates {
            ra_deg: 0.0,
            dec_deg: 0.0,
        };
        assert_eq!(
            elongation_deg(&a, &b),
            Err(CoreError::Domain("angular separation"))
        );
    }

    #[test]
    fn moon_below_horizon_at_new_moon_midnight() {
        // Near conjunction the Moon tracks the Sun, so at local midnight
        // both are well below a mid-latitude horizon.
        let loc = greenwich();
        let midnight = Instant::from_calendar(2024, 4, 9, 0, 0, 0.0);
        let moon = crate::ephemeris::lunar_position(midnight);
        let alt = body_altitude_deg(&moon, midnight, &loc);
        assert!(alt < 0.0, "moon altitude at midnight = {alt}");
    }
}
