//! PyO3 wrapper for the pool registry
//!
//! This module provides the Python interface to the Rust pool registry.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use tokio::runtime::{Builder, Runtime};

use super::types::{pack_id, parse_registry_config, unpack_id};
use crate::pool::{PoolRegistry, RegistryConfig};
use crate::rng::normalize_seed;

/// Python wrapper for the Rust pool registry
///
/// This class is the main entry point for Python code to create seeded
/// generators and draw from them through opaque integer handles.
///
/// # Example (from Python)
///
/// ```python
/// from rng_pool._core import RngPool
///
/// pool = RngPool()
/// handle = pool.create_sync(12345)
///
/// word = pool.draw_u64(handle)
/// unit = pool.draw_f64(handle)          # [0.0, 1.0)
/// dice = pool.draw_range(handle, 1, 6)  # inclusive bounds
///
/// pool.release(handle)                  # idempotent
/// ```
#[pyclass(name = "RngPool")]
pub struct PyRngPool {
    inner: PoolRegistry,
    /// Current-thread runtime bridging Python's synchronous calls onto the
    /// async expansion path
    runtime: Runtime,
}

impl PyRngPool {
    fn build(config: RegistryConfig) -> PyResult<Self> {
        let inner = PoolRegistry::with_config(config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Failed to create pool registry: {}",
                e
            ))
        })?;
        let runtime = Builder::new_current_thread().build().map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to start async runtime: {}",
                e
            ))
        })?;
        Ok(PyRngPool { inner, runtime })
    }
}

#[pymethods]
impl PyRngPool {
    /// Create a registry with one eagerly provisioned pool
    #[new]
    fn new() -> PyResult<Self> {
        Self::build(RegistryConfig::default())
    }

    /// Create a registry from a configuration dict
    ///
    /// # Arguments
    ///
    /// * `config` - Dictionary; currently `{"initial_pools": n}` with a
    ///   default of 1
    ///
    /// # Errors
    ///
    /// Raises ValueError if values are out of range or of the wrong type
    #[staticmethod]
    fn with_config(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        Self::build(parse_registry_config(config)?)
    }

    /// Create a registry from a JSON configuration string
    ///
    /// # Errors
    ///
    /// Raises ValueError on malformed JSON, unknown fields, or invalid
    /// values
    #[staticmethod]
    fn from_json(config_json: &str) -> PyResult<Self> {
        let config = RegistryConfig::from_json(config_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Self::build(config)
    }

    /// Allocate a generator without suspending
    ///
    /// Negative seeds are normalized two's-complement to the unsigned
    /// 64-bit domain before expansion.
    ///
    /// # Returns
    ///
    /// Packed handle (integer) for use with the draw and release methods
    ///
    /// # Errors
    ///
    /// Raises RuntimeError when every existing pool is full; recover by
    /// calling `create`, which may grow the registry
    fn create_sync(&mut self, seed: i64) -> PyResult<i64> {
        self.inner
            .create_sync(normalize_seed(seed))
            .map(pack_id)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// Allocate a generator, growing the registry if every pool is full
    ///
    /// # Returns
    ///
    /// Packed handle (integer) for use with the draw and release methods
    ///
    /// # Errors
    ///
    /// Raises RuntimeError only when a new pool cannot be instantiated
    fn create(&mut self, seed: i64) -> PyResult<i64> {
        let seed = normalize_seed(seed);
        self.runtime
            .block_on(self.inner.create_async(seed))
            .map(pack_id)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// Draw a 64-bit integer; stale or garbage handles yield 0
    fn draw_u64(&mut self, handle: i64) -> u64 {
        self.inner.draw_u64(unpack_id(handle))
    }

    /// Draw a float in [0.0, 1.0); stale or garbage handles yield 0.0
    fn draw_f64(&mut self, handle: i64) -> f64 {
        self.inner.draw_f64(unpack_id(handle))
    }

    /// Draw an integer in [min, max] inclusive
    ///
    /// An inverted range (`min > max`) and stale or garbage handles yield
    /// `min`; neither raises
    fn draw_range(&mut self, handle: i64, min: u32, max: u32) -> u32 {
        self.inner.draw_range(unpack_id(handle), min, max)
    }

    /// Release a generator's slot; idempotent, callable any number of times
    fn release(&mut self, handle: i64) {
        self.inner.release(unpack_id(handle));
    }

    /// Number of pools currently registered
    fn pool_count(&self) -> usize {
        self.inner.pool_count()
    }

    /// Total occupied slots across all pools
    fn occupied(&self) -> usize {
        self.inner.occupied()
    }
}
