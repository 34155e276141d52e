//! RNG Pool Core - Rust Engine
//!
//! Deterministic, seedable random number generation behind opaque integer
//! handles, with transparent pool growth when capacity runs out.
//!
//! # Architecture
//!
//! - **rng**: Xoshiro256** bit generation, SplitMix64 seed expansion, and
//!   the derived draw operations (u64, f64 in [0,1), unbiased u32 ranges)
//! - **pool**: fixed-capacity slot pools and the growable pool registry
//! - **ffi**: PyO3 boundary (feature-gated)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same draw sequence, always (deterministic replay)
//! 2. Generator state is never all zero and is mutated in place only
//! 3. Draw operations are total: stale handles and degenerate ranges
//!    produce documented safe defaults, never errors

// Module declarations
pub mod pool;
pub mod rng;

// Re-exports for convenience
pub use pool::{
    GeneratorId, GeneratorPool, Handle, InProcessLoader, PoolLoader, PoolRegistry, RegistryConfig,
    RegistryError, POOL_CAPACITY,
};
pub use rng::{expand_seed, normalize_seed, SplitMix64, Xoshiro256StarStar};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn rng_pool_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::pool::PyRngPool>()?;
    Ok(())
}
