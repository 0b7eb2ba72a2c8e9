//! The running luck score and its end-of-game bands.
//!
//! The score is an `i64` so any `i32` starting value plus every delta a
//! session can apply stays exact; past the `i64` bounds it saturates. At the end of a playthrough
//! it falls into one of three bands: above 50 is lucky, 20 through 50 is
//! ordinary, below 20 is unlucky.

use serde::{Deserialize, Serialize};

use lk_core::Resolution;

/// A running luck tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LuckScore(i64);

impl LuckScore {
    /// Create a score.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The current value.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Add a resolved outcome's signed delta. Returns the new value.
    pub fn apply(&mut self, resolution: &Resolution) -> i64 {
        self.0 = self.0.saturating_add(i64::from(resolution.signed_delta()));
        self.0
    }

    /// The band this score falls into.
    pub fn band(self) -> LuckBand {
        LuckBand::classify(self.0)
    }
}

impl std::fmt::Display for LuckScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// End-of-game classification of a luck score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckBand {
    /// Above 50.
    Lucky,
    /// 20 through 50 inclusive.
    Ordinary,
    /// Below 20.
    Unlucky,
}

impl LuckBand {
    /// All bands from best to worst.
    pub const ALL: [LuckBand; 3] = [LuckBand::Lucky, LuckBand::Ordinary, LuckBand::Unlucky];

    /// Classify a score.
    pub fn classify(score: i64) -> Self {
        match score {
            51.. => Self::Lucky,
            20..=50 => Self::Ordinary,
            _ => Self::Unlucky,
        }
    }

    /// The end-screen message for this band.
    pub fn message(self) -> &'static str {
        match self {
            Self::Lucky => "It's your lucky day!",
            Self::Ordinary => "It's just like any other day.",
            Self::Unlucky => "Uh oh, a black cat may be around the corner!",
        }
    }
}

impl std::fmt::Display for LuckBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lucky => write!(f, "Lucky"),
            Self::Ordinary => write!(f, "Ordinary"),
            Self::Unlucky => write!(f, "Unlucky"),
        }
    }
}
