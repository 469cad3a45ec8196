//! Error types for visibility search and month-start decisions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hilal_core::CoreError;

/// Errors from visibility evaluation or month-start aggregation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from position/geometry calculations.
    Core(CoreError),
    /// Month-start decision requested over an empty set of locations.
    EmptyLocationSet,
    /// No evaluated location carries a sunset instant to anchor the
    /// 30-day-completion fallback on (all locations polar).
    NoUsableSunset,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core(e) => write!(f, "core error: {e}"),
            Self::EmptyLocationSet => write!(f, "no observer locations supplied"),
            Self::NoUsableSunset => {
                write!(f, "no location with a sunset to anchor the fallback date")
            }
        }
    }
}

impl Error for SearchError {}

impl From<CoreError> for SearchError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}
