//! Deterministic random number generation
//!
//! Xoshiro256** bit generation seeded through SplitMix64 expansion.
//! CRITICAL: All randomness handed out by the pools MUST go through this
//! module.

mod seed;
mod xoshiro;

pub use seed::{expand_seed, normalize_seed, SplitMix64};
pub use xoshiro::Xoshiro256StarStar;
