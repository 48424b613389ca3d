//! Dice - Injectable randomness for defend and dodge checks

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of inclusive integer rolls
pub trait Dice {
    /// Roll an integer in `low..=high`
    fn roll(&mut self, low: i32, high: i32) -> i32;
}

/// Dice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<ChaCha8Rng> {
    /// Deterministic dice for reproducible encounters
    pub fn seeded(seed: u64) -> Self {
        RngDice::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngDice::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Scripted dice for tests
///
/// Rolls are consumed in order; once exhausted the fallback value repeats.
/// Every value is clamped into the requested range so a loaded roll can
/// never produce a result the real dice could not.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    rolls: VecDeque<i32>,
    fallback: i32,
}

impl LoadedDice {
    /// Always roll `value`
    pub fn always(value: i32) -> Self {
        LoadedDice {
            rolls: VecDeque::new(),
            fallback: value,
        }
    }

    /// Roll each value of `rolls` once, then `fallback` forever
    pub fn sequence(rolls: impl IntoIterator<Item = i32>, fallback: i32) -> Self {
        LoadedDice {
            rolls: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Dice that never beat zero (every check fails)
    pub fn failing() -> Self {
        Self::always(i32::MIN)
    }

    /// Dice that always roll the top of the range (every check with room succeeds)
    pub fn succeeding() -> Self {
        Self::always(i32::MAX)
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        let value = self.rolls.pop_front().unwrap_or(self.fallback);
        value.clamp(low, high.max(low))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = RngDice::seeded(42);
        let mut b = RngDice::seeded(42);
        let rolls_a: Vec<i32> = (0..20).map(|_| a.roll(-10, 15)).collect();
        let rolls_b: Vec<i32> = (0..20).map(|_| b.roll(-10, 15)).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|r| (-10..=15).contains(r)));
    }

    #[test]
    fn test_degenerate_range() {
        let mut dice = RngDice::seeded(1);
        assert_eq!(dice.roll(0, 0), 0);
    }

    #[test]
    fn test_loaded_sequence_then_fallback() {
        let mut dice = LoadedDice::sequence([3, -2], 1);
        assert_eq!(dice.roll(-5, 5), 3);
        assert_eq!(dice.roll(-5, 5), -2);
        assert_eq!(dice.roll(-5, 5), 1);
        assert_eq!(dice.roll(-5, 5), 1);
    }

    #[test]
    fn test_loaded_rolls_are_clamped() {
        let mut dice = LoadedDice::succeeding();
        assert_eq!(dice.roll(-4, 6), 6);
        assert_eq!(dice.roll(0, 0), 0);

        let mut dice = LoadedDice::failing();
        assert_eq!(dice.roll(-4, 6), -4);
    }
}
