//! Crescent visibility classification at local sunset.
//!
//! Two independently documented criteria:
//!
//! - **Odeh q-test**: arc of vision (topocentric Moon−Sun altitude
//!   difference) against a fitted cubic in the crescent width derived from
//!   the illuminated fraction.
//! - **Elongation/altitude thresholds**: fixed cutoffs on Sun–Moon
//!   elongation and lunar altitude.
//!
//! Both are deterministic pure functions of `(instant, location)` and are
//! not numerically equivalent near category boundaries; the caller selects
//! one via [`ClassifierStrategy`].

use hilal_core::{
    GeoLocation, SunsetSearch, body_altitude_deg, elongation_deg, first_sunset_after,
    lunar_position, solar_position,
};
use hilal_time::Instant;

use crate::error::SearchError;
use crate::visibility_types::{
    ClassifierStrategy, LocationOutcome, VisibilityCategory, VisibilityResult,
};

/// Odeh q thresholds, highest category first.
const Q_EASILY_VISIBLE: f64 = 0.216;
const Q_VISIBLE: f64 = -0.014;
const Q_OPTICAL_AID: f64 = -0.16;

/// Crescent width in arcminutes from the Sun–Moon elongation.
///
/// Illuminated fraction `k = (1 − cos ε) / 2`, scaled to a nominal
/// 60-arcminute full disc.
pub fn crescent_width_arcmin(elongation_deg: f64) -> f64 {
    (1.0 - elongation_deg.to_radians().cos()) / 2.0 * 60.0
}

/// The Odeh test statistic `q = ARCV − fW(W)`.
///
/// `fW(W) = −0.1018 W³ + 0.7319 W² − 6.3226 W + 7.1651`
pub fn odeh_q(arcv_deg: f64, width_arcmin: f64) -> f64 {
    let w = width_arcmin;
    let fw = -0.1018 * w * w * w + 0.7319 * w * w - 6.3226 * w + 7.1651;
    arcv_deg - fw
}

/// Category from the Odeh q statistic.
pub fn q_category(q: f64) -> VisibilityCategory {
    if q > Q_EASILY_VISIBLE {
        VisibilityCategory::EasilyVisible
    } else if q > Q_VISIBLE {
        VisibilityCategory::Visible
    } else if q > Q_OPTICAL_AID {
        VisibilityCategory::OpticalAidOnly
    } else {
        VisibilityCategory::NotVisible
    }
}

/// Category from fixed elongation and lunar-altitude cutoffs.
pub fn threshold_category(elongation_deg: f64, moon_altitude_deg: f64) -> VisibilityCategory {
    if elongation_deg > 14.0 && moon_altitude_deg > 8.0 {
        VisibilityCategory::EasilyVisible
    } else if elongation_deg > 11.0 && moon_altitude_deg > 5.0 {
        VisibilityCategory::Visible
    } else if elongation_deg > 8.0 && moon_altitude_deg > 2.0 {
        VisibilityCategory::OpticalAidOnly
    } else {
        VisibilityCategory::NotVisible
    }
}

/// Classify crescent visibility for an observer at an instant
/// (normally the observer's local sunset).
pub fn classify_at(
    instant: Instant,
    location: &GeoLocation,
    strategy: ClassifierStrategy,
) -> Result<VisibilityCategory, SearchError> {
    let sun = solar_position(instant);
    let moon = lunar_position(instant);
    let elongation = elongation_deg(&sun, &moon)?;
    let moon_alt = body_altitude_deg(&moon, instant, location);

    let category = match strategy {
        ClassifierStrategy::OdehQ => {
            let sun_alt = body_altitude_deg(&sun, instant, location);
            let arcv = moon_alt - sun_alt;
            q_category(odeh_q(arcv, crescent_width_arcmin(elongation)))
        }
        ClassifierStrategy::ElongationAltitude => threshold_category(elongation, moon_alt),
    };
    Ok(category)
}

/// Evaluate one observer location for a conjunction.
///
/// Finds the location's first sunset after the conjunction and classifies
/// visibility there. A location with no sunset in the bounded window is
/// reported as [`LocationOutcome::Unknown`], never as not visible.
pub fn evaluate_location(
    location: &GeoLocation,
    conjunction: Instant,
    strategy: ClassifierStrategy,
) -> Result<LocationOutcome, SearchError> {
    match first_sunset_after(conjunction, location) {
        SunsetSearch::Found(sunset) => {
            let category = classify_at(sunset, location, strategy)?;
            Ok(LocationOutcome::Sighting(VisibilityResult {
                location: location.clone(),
                sunset,
                category,
            }))
        }
        SunsetSearch::NotFound => Ok(LocationOutcome::Unknown {
            location: location.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_extremes() {
        assert!(crescent_width_arcmin(0.0).abs() < 1e-12);
        assert!((crescent_width_arcmin(180.0) - 60.0).abs() < 1e-9);
        assert!((crescent_width_arcmin(90.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn q_thresholds_exclusive() {
        assert_eq!(q_category(0.217), VisibilityCategory::EasilyVisible);
        assert_eq!(q_category(0.216), VisibilityCategory::Visible);
        assert_eq!(q_category(-0.014), VisibilityCategory::OpticalAidOnly);
        assert_eq!(q_category(-0.16), VisibilityCategory::NotVisible);
        assert_eq!(q_category(-5.0), VisibilityCategory::NotVisible);
    }

    #[test]
    fn odeh_category_monotonic_in_arcv() {
        // Holding W fixed, increasing ARCV never lowers the category
        for &w in &[0.1, 0.5, 1.0, 2.0, 3.0] {
            let mut prev = VisibilityCategory::NotVisible;
            let mut arcv = -10.0;
            while arcv <= 20.0 {
                let cat = q_category(odeh_q(arcv, w));
                assert!(cat >= prev, "W={w}, ARCV={arcv}: {cat:?} < {prev:?}");
                prev = cat;
                arcv += 0.05;
            }
        }
    }

    #[test]
    fn sunset_minutes_after_conjunction_not_visible() {
        // 2024-04-08 conjunction; Greenwich sunset follows within the hour,
        // so the crescent is degrees-thin and hugging the Sun.
        let conjunction = Instant::from_calendar(2024, 4, 8, 18, 30, 0.0);
        let loc = GeoLocation::new("Greenwich", 51.4769, 0.0).unwrap();
        for strategy in [ClassifierStrategy::OdehQ, ClassifierStrategy::ElongationAltitude] {
            let outcome = evaluate_location(&loc, conjunction, strategy).unwrap();
            let result = outcome.sighting().expect("mid-latitude sunset exists");
            assert_eq!(
                result.category,
                VisibilityCategory::NotVisible,
                "strategy {strategy:?}"
            );
            assert!(!result.visible());
        }
    }

    #[test]
    fn three_day_crescent_visible() {
        // Three days past conjunction the crescent is wide and high at
        // sunset; both criteria must agree it is sightable.
        let conjunction = Instant::from_calendar(2024, 4, 8, 18, 30, 0.0);
        let evening = conjunction.plus_days(3.0);
        let loc = GeoLocation::new("Greenwich", 51.4769, 0.0).unwrap();
        for strategy in [ClassifierStrategy::OdehQ, ClassifierStrategy::ElongationAltitude] {
            let outcome = evaluate_location(&loc, evening, strategy).unwrap();
            let result = outcome.sighting().expect("mid-latitude sunset exists");
            assert!(
                result.visible(),
                "strategy {strategy:?} gave {:?}",
                result.category
            );
        }
    }

    #[test]
    fn polar_location_reports_unknown() {
        // Midnight sun in June: no sunset, so visibility is unknowable
        let conjunction = Instant::from_calendar(2024, 6, 6, 12, 0, 0.0);
        let loc = GeoLocation::new("Alert", 82.5, -62.3).unwrap();
        let outcome =
            evaluate_location(&loc, conjunction, ClassifierStrategy::OdehQ).unwrap();
        assert_eq!(
            outcome,
            LocationOutcome::Unknown {
                location: loc.clone()
            }
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let conjunction = Instant::from_calendar(2024, 4, 8, 18, 30, 0.0);
        let loc = GeoLocation::new("Dearborn", 42.3223, -83.1763).unwrap();
        let a = evaluate_location(&loc, conjunction, ClassifierStrategy::OdehQ).unwrap();
        let b = evaluate_location(&loc, conjunction, ClassifierStrategy::OdehQ).unwrap();
        assert_eq!(a, b);
    }
}
