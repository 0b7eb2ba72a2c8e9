//! Configuration for a game session.

use std::ops::RangeInclusive;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible games. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Fixed starting luck. `None` draws from `luck_range`.
    pub initial_luck: Option<i32>,
    luck_range: RangeInclusive<i32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_luck: None,
            luck_range: 5..=20,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start every playthrough with this luck score instead of a random one.
    pub fn with_initial_luck(mut self, luck: i32) -> Self {
        self.initial_luck = Some(luck);
        self
    }

    /// Set the range fresh luck scores are drawn from. Bounds are swapped
    /// if given in reverse.
    pub fn with_luck_range(mut self, low: i32, high: i32) -> Self {
        self.luck_range = low.min(high)..=low.max(high);
        self
    }

    /// Range a fresh luck score is drawn from, low bound first.
    pub fn luck_range(&self) -> RangeInclusive<i32> {
        let (low, high) = (*self.luck_range.start(), *self.luck_range.end());
        low.min(high)..=low.max(high)
    }
}
