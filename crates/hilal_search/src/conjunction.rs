//! Solar-lunar conjunction instants by synodic-month stepping.
//!
//! Steps a fixed mean synodic month from a reference conjunction epoch.
//! Real new moons deviate from the mean period by several hours
//! (anomalistic variation); this is a documented accuracy limitation of
//! the engine, not corrected here.

use hilal_time::Instant;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588861;

/// Reference conjunction epoch: the new moon of 2000-Jan-06, JD 2451550.1.
pub const REF_CONJUNCTION_JD: f64 = 2_451_550.1;

/// Conjunction nearest to a reference instant.
///
/// `k = round((JD(reference) − JD(epoch)) / synodic)`; the result may lie
/// up to half a synodic month before or after the reference. Callers that
/// need a strictly future conjunction should use [`next_conjunction`].
pub fn nearest_conjunction(reference: Instant) -> Instant {
    let k = ((reference.to_julian_date() - REF_CONJUNCTION_JD) / SYNODIC_MONTH_DAYS).round();
    Instant::from_julian_date(REF_CONJUNCTION_JD + k * SYNODIC_MONTH_DAYS)
}

/// First conjunction strictly after a reference instant.
pub fn next_conjunction(reference: Instant) -> Instant {
    let nearest = nearest_conjunction(reference);
    if nearest <= reference {
        nearest.plus_days(SYNODIC_MONTH_DAYS)
    } else {
        nearest
    }
}
