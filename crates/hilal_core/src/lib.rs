//! Low-precision solar/lunar positions and observer horizon geometry.
//!
//! This crate provides:
//! - Truncated-series equatorial positions for the Sun and Moon
//! - Greenwich/local sidereal time for hour-angle work
//! - The spherical hour-angle and altitude formulas, with explicit
//!   detection of the circumpolar (no-event) condition
//! - A sunset-time solver and a bounded first-sunset-after search
//! - Sun–Moon angular separation (elongation)
//!
//! Accuracy: the position models are deliberately low precision
//! (arcminute-level); they may be replaced by a full ephemeris without
//! changing any signature in this crate.

pub mod ephemeris;
pub mod error;
pub mod horizon;
pub mod horizon_types;
pub mod observer;
pub mod sidereal;

pub use ephemeris::{EquatorialCoordinates, lunar_position, solar_position};
pub use error::CoreError;
pub use horizon::{
    altitude_deg, body_altitude_deg, elongation_deg, first_sunset_after, hour_angle,
    sunset_instant,
};
pub use horizon_types::{
    HourAngleResult, SUNSET_SEARCH_MAX_STEPS, SUNSET_TARGET_ALTITUDE_DEG, SunsetResult,
    SunsetSearch,
};
pub use observer::GeoLocation;
pub use sidereal::{gmst_deg, local_sidereal_deg};
