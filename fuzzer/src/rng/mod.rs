//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, reproducible run-length draws.
//! Every fuzzer owns its own generator; there is no shared global state.

mod xorshift;

pub use xorshift::RngManager;
