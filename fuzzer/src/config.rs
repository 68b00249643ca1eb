//! Fuzzer configuration
//!
//! The seed is the only knob most callers need. `max_run` exists for
//! harnesses that want tighter or looser bounce windows than the default.

use serde::{Deserialize, Serialize};

use crate::error::FuzzerError;

/// Default upper bound on run lengths. Runs are drawn from `[1, 15]`.
pub const DEFAULT_MAX_RUN: u32 = 16;

/// Smallest `max_run` that leaves a non-empty draw range.
pub const MIN_MAX_RUN: u32 = 2;

/// Configuration for a single [`SignalFuzzer`](crate::SignalFuzzer)
///
/// # Example
/// ```
/// use logic_fuzzer::{FuzzerConfig, DEFAULT_MAX_RUN};
///
/// let config: FuzzerConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.max_run, DEFAULT_MAX_RUN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzerConfig {
    /// Seed for the fuzzer's private RNG
    pub seed: u32,

    /// Exclusive upper bound on run lengths
    pub max_run: u32,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_run: DEFAULT_MAX_RUN,
        }
    }
}

impl FuzzerConfig {
    /// Config with the given seed and the default `max_run`
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Replace `max_run`
    pub fn with_max_run(mut self, max_run: u32) -> Self {
        self.max_run = max_run;
        self
    }

    /// Check that run lengths can actually be drawn
    pub fn validate(&self) -> Result<(), FuzzerError> {
        if self.max_run < MIN_MAX_RUN {
            return Err(FuzzerError::InvalidMaxRun {
                max_run: self.max_run,
            });
        }
        Ok(())
    }
}
