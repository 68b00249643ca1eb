//! Error types
//!
//! Stepping a fuzzer can never fail. The only fallible path is building one
//! from a user-supplied [`FuzzerConfig`](crate::FuzzerConfig).

use thiserror::Error;

/// Errors that can occur when validating a fuzzer configuration
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FuzzerError {
    #[error("max_run must be at least 2 so run lengths can be drawn from [1, max_run - 1], got {max_run}")]
    InvalidMaxRun { max_run: u32 },
}
