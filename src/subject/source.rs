//! # State sources for business events.
//!
//! A [`StateSource`] produces the next state whenever
//! [`Publisher::trigger_business_event`](crate::Publisher::trigger_business_event) runs.
//!
//! - [`RandomSource`] draws uniformly from the configured range (production default)
//! - [`ScriptedSource`] replays a fixed sequence (deterministic drivers, tests)

use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Producer of new publisher states.
///
/// Implementations should return a value inside `range`. The publisher clamps
/// anything outside of it.
pub trait StateSource {
    /// Returns the next state.
    fn next_state(&mut self, range: &RangeInclusive<u8>) -> u8;
}

/// Uniform random draw over the closed range.
#[derive(Clone, Debug)]
pub struct RandomSource<R = ThreadRng> {
    rng: R,
}

impl Default for RandomSource {
    /// Uses the thread-local generator from [`rand::rng`].
    fn default() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an explicit generator (e.g. a seeded `StdRng`).
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> StateSource for RandomSource<R> {
    fn next_state(&mut self, range: &RangeInclusive<u8>) -> u8 {
        if range.is_empty() {
            return *range.start();
        }
        self.rng.random_range(range.clone())
    }
}

/// Replays a fixed sequence of states, wrapping around at the end.
///
/// An empty script always yields the lower bound of the range.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `script` in order.
    pub fn new(script: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl StateSource for ScriptedSource {
    fn next_state(&mut self, range: &RangeInclusive<u8>) -> u8 {
        if self.script.is_empty() {
            return *range.start();
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scripted_wraps_around() {
        let mut src = ScriptedSource::new([1, 0, 7]);
        let range = 0..=10;
        let drawn: Vec<u8> = (0..5).map(|_| src.next_state(&range)).collect();
        assert_eq!(drawn, vec![1, 0, 7, 1, 0]);
    }

    #[test]
    fn test_empty_script_yields_lower_bound() {
        let mut src = ScriptedSource::default();
        assert_eq!(src.next_state(&(4..=9)), 4);
    }

    #[test]
    fn test_random_hits_both_bounds() {
        let mut src = RandomSource::from_rng(StdRng::seed_from_u64(42));
        let range = 0..=10;
        let mut seen = [false; 11];
        for _ in 0..2_000 {
            let v = src.next_state(&range);
            assert!(range.contains(&v), "{v} outside {range:?}");
            seen[v as usize] = true;
        }
        assert!(seen[0], "lower bound never drawn");
        assert!(seen[10], "upper bound never drawn");
    }

    #[test]
    fn test_random_single_value_range() {
        let mut src = RandomSource::from_rng(StdRng::seed_from_u64(7));
        assert_eq!(src.next_state(&(6..=6)), 6);
    }
}
