//! Hijri month naming from conjunction instants.
//!
//! Anchored to the conjunction preceding 1 Muharram 1440 AH
//! (2018-09-11T00:00:00Z): whole synodic months elapsed since the epoch
//! select a position in the fixed 12-month cycle, and the month that
//! *begins* at a conjunction is the one after that position.

use hilal_time::Instant;

use crate::conjunction::SYNODIC_MONTH_DAYS;

/// 1 Muharram 1440 AH epoch, Unix milliseconds (2018-09-11T00:00:00Z).
pub const HIJRI_EPOCH_MILLIS: i64 = 1_536_624_000_000;

/// The twelve Hijri months in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlAkhirah,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhulQadah,
    DhulHijjah,
}

impl HijriMonth {
    /// All months in calendar order, Muharram first.
    pub const ALL: [HijriMonth; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlUla,
        Self::JumadaAlAkhirah,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhulQadah,
        Self::DhulHijjah,
    ];

    /// Month at a cyclic index (0 = Muharram; any value, reduced mod 12).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Zero-based position in the calendar cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Conventional transliterated name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi al-Awwal",
            Self::RabiAlThani => "Rabi al-Thani",
            Self::JumadaAlUla => "Jumada al-Ula",
            Self::JumadaAlAkhirah => "Jumada al-Akhirah",
            Self::Rajab => "Rajab",
            Self::Shaban => "Sha'ban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhulQadah => "Dhul Qa'dah",
            Self::DhulHijjah => "Dhul Hijjah",
        }
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the Hijri month that begins at a conjunction.
///
/// `monthsSince = floor(days since epoch / synodic)`; the floor keeps the
/// cyclic index correct for conjunctions before the epoch as well.
pub fn month_following(conjunction: Instant) -> HijriMonth {
    let epoch = Instant::from_unix_millis(HIJRI_EPOCH_MILLIS);
    let diff_days = conjunction.days_since(epoch);
    let months_since = (diff_days / SYNODIC_MONTH_DAYS).floor() as i64;
    let index = months_since.rem_euclid(12) as usize;
    HijriMonth::from_index(index + 1)
}
