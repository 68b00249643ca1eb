//! Logic Fuzzer
//!
//! Pseudo-random boolean signal generator that emulates a bouncing or
//! glitching digital line, for use as test-harness or simulation stimulus.
//!
//! # Architecture
//!
//! - **fuzzer**: [`SignalFuzzer`], the run-length/toggle state machine
//! - **config**: [`FuzzerConfig`], seed and run-length bound
//! - **rng**: Deterministic, per-instance random number generation
//! - **error**: [`FuzzerError`], config validation failures
//!
//! # Critical Invariants
//!
//! 1. Same seed → same waveform
//! 2. Every run of equal outputs is between 1 and `max_run - 1` steps long
//! 3. Fuzzers never share RNG state

pub mod config;
pub mod error;
pub mod fuzzer;
pub mod rng;

pub use config::{FuzzerConfig, DEFAULT_MAX_RUN, MIN_MAX_RUN};
pub use error::FuzzerError;
pub use fuzzer::SignalFuzzer;
pub use rng::RngManager;
