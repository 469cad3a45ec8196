//! Crescent (hilal) visibility search and Hijri month-start determination.
//!
//! This crate provides:
//! - Nearest/next solar-lunar conjunction by synodic-month stepping
//! - Per-location crescent visibility classification at local sunset,
//!   under two selectable criteria (Odeh q-test, elongation/altitude)
//! - Hijri month naming anchored to the 1 Muharram 1440 AH conjunction
//! - The month-start decision engine under two jurisprudence modes
//!   (global sighting, horizon sharing)

pub mod conjunction;
pub mod error;
pub mod hijri;
pub mod month_start;
pub mod month_start_types;
pub mod visibility;
pub mod visibility_types;

pub use conjunction::{
    REF_CONJUNCTION_JD, SYNODIC_MONTH_DAYS, nearest_conjunction, next_conjunction,
};
pub use error::SearchError;
pub use hijri::{HIJRI_EPOCH_MILLIS, HijriMonth, month_following};
pub use month_start::decide_month_start;
pub use month_start_types::{
    FiqhMode, HORIZON_SHARING_MAX_ALTITUDE_DEG, HORIZON_SHARING_MAX_LONGITUDE_DEG,
    MonthStartDecision,
};
pub use visibility::{
    classify_at, crescent_width_arcmin, evaluate_location, odeh_q, q_category,
    threshold_category,
};
pub use visibility_types::{
    ClassifierStrategy, LocationOutcome, VisibilityCategory, VisibilityResult,
};
