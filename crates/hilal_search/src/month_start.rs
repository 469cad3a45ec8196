//! Month-start determination from an ordered set of location outcomes.
//!
//! Aggregates per-location visibility results into a single "the month
//! starts on date X" decision under the configured jurisprudence mode.
//! Input order is semantically meaningful: the first visible result in
//! input order is the accepted (Global) or base (HorizonSharing) sighting,
//! an explicit order-dependent tie-break rather than a geographic "best"
//! selection. Evaluations themselves may be produced in any order (they
//! are pure); the caller supplies a stable ordering for aggregation.

use hilal_core::{GeoLocation, body_altitude_deg, lunar_position};
use hilal_time::{CivilDate, Instant};

use crate::error::SearchError;
use crate::hijri::month_following;
use crate::month_start_types::{
    FiqhMode, HORIZON_SHARING_MAX_ALTITUDE_DEG, HORIZON_SHARING_MAX_LONGITUDE_DEG,
    MonthStartDecision,
};
use crate::visibility_types::{LocationOutcome, VisibilityResult};

/// Index and result of the first visible sighting in input order.
fn first_visible(outcomes: &[LocationOutcome]) -> Option<(usize, &VisibilityResult)> {
    outcomes
        .iter()
        .enumerate()
        .find_map(|(i, o)| o.sighting().filter(|r| r.visible()).map(|r| (i, r)))
}

/// 30-day-completion fallback: two calendar days after the first
/// sunset-bearing outcome's sunset (the outgoing month runs to 30 days).
fn completion_fallback(outcomes: &[LocationOutcome]) -> Result<CivilDate, SearchError> {
    outcomes
        .iter()
        .find_map(|o| o.sighting())
        .map(|r| r.sunset.civil_date().plus_days(2))
        .ok_or(SearchError::NoUsableSunset)
}

/// Shortest-arc absolute longitude difference in degrees, [0, 180].
fn longitude_gap_deg(a: &GeoLocation, b: &GeoLocation) -> f64 {
    let mut d = (a.longitude_deg() - b.longitude_deg()).rem_euclid(360.0);
    if d > 180.0 {
        d = 360.0 - d;
    }
    d
}

/// Whether any other sighting shares the base location's horizon.
///
/// Horizon sharing is tested at the base's sunset instant for every
/// candidate (a simultaneous-instant comparison, not each location's own
/// sunset): longitudes within 15° and lunar altitudes within 2°.
fn has_horizon_sharer(
    outcomes: &[LocationOutcome],
    base_index: usize,
    base: &VisibilityResult,
) -> bool {
    let moon = lunar_position(base.sunset);
    let base_alt = body_altitude_deg(&moon, base.sunset, &base.location);

    outcomes.iter().enumerate().any(|(i, o)| {
        if i == base_index {
            return false;
        }
        let Some(candidate) = o.sighting() else {
            // Unknown locations never corroborate a sighting
            return false;
        };
        if longitude_gap_deg(&candidate.location, &base.location)
            > HORIZON_SHARING_MAX_LONGITUDE_DEG
        {
            return false;
        }
        let alt = body_altitude_deg(&moon, base.sunset, &candidate.location);
        (alt - base_alt).abs() <= HORIZON_SHARING_MAX_ALTITUDE_DEG
    })
}

/// Decide when the Hijri month beginning at `conjunction` starts.
///
/// `outcomes` must hold one entry per observer location, each already
/// evaluated at that location's first sunset after the conjunction, in the
/// caller's stable order. Single pass, fully deterministic.
pub fn decide_month_start(
    conjunction: Instant,
    outcomes: &[LocationOutcome],
    fiqh_mode: FiqhMode,
) -> Result<MonthStartDecision, SearchError> {
    if outcomes.is_empty() {
        return Err(SearchError::EmptyLocationSet);
    }

    let predicted_start = match fiqh_mode {
        FiqhMode::Global => match first_visible(outcomes) {
            Some((_, first)) => first.sunset.civil_date().plus_days(1),
            None => completion_fallback(outcomes)?,
        },
        FiqhMode::HorizonSharing => match first_visible(outcomes) {
            Some((base_index, base)) if has_horizon_sharer(outcomes, base_index, base) => {
                base.sunset.civil_date().plus_days(1)
            }
            _ => completion_fallback(outcomes)?,
        },
    };

    Ok(MonthStartDecision {
        hijri_month: month_following(conjunction),
        conjunction,
        fiqh_mode,
        predicted_start,
    })
}
