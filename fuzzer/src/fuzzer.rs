//! Signal fuzzer
//!
//! Emulates a glitching digital line: the output holds a level for a random
//! number of steps, then flips and draws a new hold length.
//!
//! # Transition rule
//!
//! Each [`SignalFuzzer::congest`] call:
//! 1. decrements the remaining run length,
//! 2. on reaching zero, inverts the level and redraws the run length from
//!    `[1, max_run - 1]`,
//! 3. returns the current level.
//!
//! The generator never terminates and never fails. It is not internally
//! synchronized; wrap it in a lock if several threads must drive one line.

use tracing::{debug, trace};

use crate::config::{FuzzerConfig, DEFAULT_MAX_RUN};
use crate::error::FuzzerError;
use crate::rng::RngManager;

/// Pseudo-random bouncing boolean signal
///
/// # Example
/// ```
/// use logic_fuzzer::SignalFuzzer;
///
/// let mut a = SignalFuzzer::new(42);
/// let mut b = SignalFuzzer::new(42);
/// for _ in 0..100 {
///     assert_eq!(a.congest(), b.congest());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SignalFuzzer {
    /// Steps left before the next flip; in `[1, max_run - 1]` between calls
    run_length: u32,
    /// Currently emitted level
    value: bool,
    /// Exclusive upper bound on run lengths
    max_run: u32,
    rng: RngManager,
    steps: u64,
    toggles: u64,
}

impl SignalFuzzer {
    /// Create a fuzzer with the default `max_run`
    ///
    /// Every seed is valid. The line starts low.
    pub fn new(seed: u32) -> Self {
        Self::build(seed, DEFAULT_MAX_RUN)
    }

    /// Create a fuzzer from a config, rejecting a `max_run` below 2
    ///
    /// # Example
    /// ```
    /// use logic_fuzzer::{FuzzerConfig, FuzzerError, SignalFuzzer};
    ///
    /// let fuzzer = SignalFuzzer::from_config(&FuzzerConfig::new(7).with_max_run(4)).unwrap();
    /// assert_eq!(fuzzer.max_run(), 4);
    ///
    /// let err = SignalFuzzer::from_config(&FuzzerConfig::new(7).with_max_run(1)).unwrap_err();
    /// assert_eq!(err, FuzzerError::InvalidMaxRun { max_run: 1 });
    /// ```
    pub fn from_config(config: &FuzzerConfig) -> Result<Self, FuzzerError> {
        config.validate()?;
        Ok(Self::build(config.seed, config.max_run))
    }

    fn build(seed: u32, max_run: u32) -> Self {
        let mut rng = RngManager::from_seed32(seed);
        let run_length = rng.range(1, max_run);

        debug!(seed, max_run, run_length, "signal fuzzer created");

        Self {
            run_length,
            value: false,
            max_run,
            rng,
            steps: 0,
            toggles: 0,
        }
    }

    /// Advance one step and return the line level
    pub fn congest(&mut self) -> bool {
        debug_assert!(self.run_length >= 1, "run length exhausted between steps");

        self.steps = self.steps.wrapping_add(1);
        self.run_length -= 1;

        if self.run_length == 0 {
            self.value = !self.value;
            self.run_length = self.rng.range(1, self.max_run);
            self.toggles = self.toggles.wrapping_add(1);

            trace!(
                step = self.steps,
                value = self.value,
                run_length = self.run_length,
                "signal toggled"
            );
        }

        self.value
    }

    /// Same step as [`congest`](Self::congest), as a 0/1 bit
    pub fn congest_bit(&mut self) -> u8 {
        u8::from(self.congest())
    }

    /// Level returned by the most recent step (low before the first)
    pub fn value(&self) -> bool {
        self.value
    }

    /// Steps remaining before the next flip
    pub fn run_length(&self) -> u32 {
        self.run_length
    }

    pub fn max_run(&self) -> u32 {
        self.max_run
    }

    /// Total number of steps taken
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Total number of flips so far
    pub fn toggles(&self) -> u64 {
        self.toggles
    }
}

impl Default for SignalFuzzer {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Infinite stream of line levels. `next` never returns `None`.
impl Iterator for SignalFuzzer {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.congest())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for SignalFuzzer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fuzzer = SignalFuzzer::new(42);
        assert!(!fuzzer.value());
        assert!((1..DEFAULT_MAX_RUN).contains(&fuzzer.run_length()));
        assert_eq!(fuzzer.steps(), 0);
        assert_eq!(fuzzer.toggles(), 0);
    }

    #[test]
    fn test_flip_happens_exactly_when_counter_runs_out() {
        let mut fuzzer = SignalFuzzer::new(5);

        for _ in 0..500 {
            let before_value = fuzzer.value();
            let before_run = fuzzer.run_length();

            let out = fuzzer.congest();

            if before_run == 1 {
                assert_eq!(out, !before_value, "must flip when counter hits zero");
            } else {
                assert_eq!(out, before_value, "must hold while counter is positive");
                assert_eq!(fuzzer.run_length(), before_run - 1);
            }
            assert!((1..DEFAULT_MAX_RUN).contains(&fuzzer.run_length()));
        }
    }

    #[test]
    fn test_min_max_run_toggles_every_step() {
        let mut fuzzer = SignalFuzzer::from_config(&FuzzerConfig::new(3).with_max_run(2)).unwrap();

        let outputs: Vec<bool> = (0..10).map(|_| fuzzer.congest()).collect();
        assert_eq!(
            outputs,
            vec![true, false, true, false, true, false, true, false, true, false]
        );
        assert_eq!(fuzzer.toggles(), 10);
    }

    #[test]
    fn test_accessors_do_not_advance() {
        let mut fuzzer = SignalFuzzer::new(9);
        fuzzer.congest();
        let snapshot = (fuzzer.value(), fuzzer.run_length(), fuzzer.steps());

        let _ = fuzzer.value();
        let _ = fuzzer.run_length();
        let _ = fuzzer.toggles();

        assert_eq!(
            snapshot,
            (fuzzer.value(), fuzzer.run_length(), fuzzer.steps())
        );
    }

    #[test]
    fn test_congest_bit_matches_congest() {
        let mut bools = SignalFuzzer::new(11);
        let mut bits = SignalFuzzer::new(11);

        for _ in 0..200 {
            assert_eq!(u8::from(bools.congest()), bits.congest_bit());
        }
    }

    #[test]
    fn test_default_is_seed_zero() {
        let a: Vec<bool> = SignalFuzzer::default().take(64).collect();
        let b: Vec<bool> = SignalFuzzer::new(0).take(64).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_forks_identical_stream() {
        let mut original = SignalFuzzer::new(77);
        for _ in 0..13 {
            original.congest();
        }

        let fork: Vec<bool> = original.clone().take(100).collect();
        let rest: Vec<bool> = original.take(100).collect();
        assert_eq!(fork, rest);
    }
}
