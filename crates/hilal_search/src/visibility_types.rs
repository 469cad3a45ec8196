//! Types for crescent visibility classification.

use hilal_core::GeoLocation;
use hilal_time::Instant;

/// Crescent visibility category, ordered by ease of sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisibilityCategory {
    /// Crescent not visible by any means.
    NotVisible = 0,
    /// Visible with optical aid only.
    OpticalAidOnly = 1,
    /// Visible to the naked eye under good conditions.
    Visible = 2,
    /// Easily visible to the naked eye.
    EasilyVisible = 3,
}

impl VisibilityCategory {
    /// Whether the crescent can be sighted at all (with or without aid).
    pub fn is_visible(self) -> bool {
        self > Self::NotVisible
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NotVisible => "Not Visible",
            Self::OpticalAidOnly => "Optical Aid",
            Self::Visible => "Visible",
            Self::EasilyVisible => "Easily Visible",
        }
    }
}

impl std::fmt::Display for VisibilityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Selectable crescent visibility criterion.
///
/// The two criteria are independently documented and are not numerically
/// equivalent near category boundaries; callers must choose explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierStrategy {
    /// Odeh q-test: fitted cubic in crescent width against arc of vision.
    OdehQ,
    /// Fixed elongation and lunar-altitude thresholds.
    ElongationAltitude,
}

/// Visibility assessment for one location, evaluated at its local sunset.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityResult {
    pub location: GeoLocation,
    /// The location's first sunset after the conjunction.
    pub sunset: Instant,
    pub category: VisibilityCategory,
}

impl VisibilityResult {
    /// Whether the crescent is sightable here (category above NotVisible).
    pub fn visible(&self) -> bool {
        self.category.is_visible()
    }
}

/// Outcome of evaluating one observer location.
///
/// Absence of a sunset is not evidence against visibility, so polar
/// locations are reported as `Unknown` rather than `NotVisible`.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    /// The location had a sunset and was classified there.
    Sighting(VisibilityResult),
    /// No sunset within the bounded search window; cannot evaluate.
    Unknown { location: GeoLocation },
}

impl LocationOutcome {
    pub fn location(&self) -> &GeoLocation {
        match self {
            Self::Sighting(r) => &r.location,
            Self::Unknown { location } => location,
        }
    }

    /// The classified result, if this location could be evaluated.
    pub fn sighting(&self) -> Option<&VisibilityResult> {
        match self {
            Self::Sighting(r) => Some(r),
            Self::Unknown { .. } => None,
        }
    }
}
