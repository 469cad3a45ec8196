//! Error types for position and geometry calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from observer geometry and coordinate handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// Latitude or longitude outside its valid range (never clamped).
    InvalidLocation(&'static str),
    /// Inverse-trigonometric argument outside [-1, 1] beyond rounding
    /// tolerance (degenerate or corrupt input coordinates).
    Domain(&'static str),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Domain(msg) => write!(f, "domain error: {msg}"),
        }
    }
}

impl Error for CoreError {}
