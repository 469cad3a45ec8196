//! Types for the month-start decision engine.

use hilal_time::{CivilDate, Instant};

use crate::hijri::HijriMonth;

/// Maximum longitude difference for two locations to share a horizon.
pub const HORIZON_SHARING_MAX_LONGITUDE_DEG: f64 = 15.0;

/// Maximum lunar-altitude difference (at the base location's sunset
/// instant) for two locations to share a horizon.
pub const HORIZON_SHARING_MAX_ALTITUDE_DEG: f64 = 2.0;

/// Jurisprudence mode for accepting a sighting. Supplied by the caller;
/// never read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiqhMode {
    /// A single accepted sighting anywhere starts the month everywhere.
    Global,
    /// A sighting counts only if at least one other location shares the
    /// base location's horizon (the doctrinally stricter policy).
    HorizonSharing,
}

impl FiqhMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::HorizonSharing => "horizon-sharing",
        }
    }
}

impl std::fmt::Display for FiqhMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The terminal output of the engine: when the next Hijri month begins.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStartDecision {
    /// Name of the month that begins at this conjunction.
    pub hijri_month: HijriMonth,
    /// The conjunction the decision was evaluated for.
    pub conjunction: Instant,
    /// The jurisprudence mode the decision was made under.
    pub fiqh_mode: FiqhMode,
    /// Predicted first calendar day of the month (time-of-day discarded).
    pub predicted_start: CivilDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names() {
        assert_eq!(FiqhMode::Global.to_string(), "global");
        assert_eq!(FiqhMode::HorizonSharing.to_string(), "horizon-sharing");
    }
}
