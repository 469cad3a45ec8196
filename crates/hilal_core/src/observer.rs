//! Observer locations on Earth's surface.

use crate::error::CoreError;

/// A named geographic observer location.
///
/// Coordinates are validated at construction: latitude must lie in
/// [-90, 90] and longitude in [-180, 180], both finite. Out-of-range
/// values are rejected, never clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(
        name: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, CoreError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(CoreError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(CoreError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Geodetic longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:+.4}, {:+.4})",
            self.name, self.latitude_deg, self.longitude_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location() {
        let loc = GeoLocation::new("Dearborn", 42.3223, -83.1763).unwrap();
        assert_eq!(loc.name(), "Dearborn");
        assert!((loc.latitude_rad() - 42.3223_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - (-83.1763_f64).to_radians()).abs() < 1e-15);
    }

    #[test]
    fn poles_and_date_line_accepted() {
        assert!(GeoLocation::new("north pole", 90.0, 0.0).is_ok());
        assert!(GeoLocation::new("south pole", -90.0, 0.0).is_ok());
        assert!(GeoLocation::new("date line", 0.0, 180.0).is_ok());
        assert!(GeoLocation::new("date line w", 0.0, -180.0).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(
            GeoLocation::new("bad", 90.001, 0.0),
            Err(CoreError::InvalidLocation("latitude outside [-90, 90]"))
        );
        assert_eq!(
            GeoLocation::new("bad", 0.0, 180.5),
            Err(CoreError::InvalidLocation("longitude outside [-180, 180]"))
        );
    }

    #[test]
    fn non_finite_rejected() {
        assert!(GeoLocation::new("nan", f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new("inf", 0.0, f64::INFINITY).is_err());
    }
}
