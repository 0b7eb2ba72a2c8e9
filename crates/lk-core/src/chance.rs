//! Sources of randomness for tree building, path selection, and outcomes.
//!
//! Every random draw in the core goes through [`Chance`], so callers can
//! swap a seeded [`StdRng`] for a [`ScriptedChance`] and get fully
//! deterministic playthroughs.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform coin flips and integer rolls.
pub trait Chance {
    /// Flip a fair coin. `true` means "left" for path selection and
    /// "positive" for outcome resolution.
    fn flip(&mut self) -> bool;

    /// Roll an integer uniformly within `range` (inclusive).
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl Chance for StdRng {
    fn flip(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.random_range(range)
    }
}

impl<C: Chance + ?Sized> Chance for &mut C {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }

    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        (**self).roll(range)
    }
}

/// A deterministic [`Chance`] that replays queued values.
///
/// Once a queue runs dry the fallback is used: `fallback_flip` for flips,
/// and `fallback_roll` (or the low end of the range) for rolls. Rolls are
/// always clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChance {
    flips: VecDeque<bool>,
    rolls: VecDeque<i32>,
    fallback_flip: bool,
    fallback_roll: Option<i32>,
}

impl ScriptedChance {
    /// Create a source with empty queues that flips `false` and rolls the
    /// minimum of every range.
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every flip returns `flip` and every roll returns `roll`.
    pub fn always(flip: bool, roll: i32) -> Self {
        Self {
            fallback_flip: flip,
            fallback_roll: Some(roll),
            ..Self::default()
        }
    }

    /// Queue flips to be returned in order.
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    /// Queue rolls to be returned in order.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Set the flip returned once the flip queue is empty.
    pub fn with_fallback_flip(mut self, flip: bool) -> Self {
        self.fallback_flip = flip;
        self
    }

    /// Set the roll returned once the roll queue is empty.
    pub fn with_fallback_roll(mut self, roll: i32) -> Self {
        self.fallback_roll = Some(roll);
        self
    }

    /// Number of queued flips not yet consumed.
    pub fn pending_flips(&self) -> usize {
        self.flips.len()
    }
}

impl Chance for ScriptedChance {
    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(self.fallback_flip)
    }

    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (lo, hi) = (*range.start(), *range.end());
        self.rolls
            .pop_front()
            .or(self.fallback_roll)
            .unwrap_or(lo)
            .clamp(lo, hi)
    }
}
