//! Growable registry of slot pools
//!
//! The registry owns an append-only, ordered sequence of pools. Creation
//! scans pools in the order they were created, so early pools fill (and
//! refill after releases) before later ones, which keeps slot reuse
//! deterministic. When every pool is full, synchronous creation reports
//! `NoCapacity`; asynchronous creation instantiates one more pool through
//! the [`PoolLoader`] seam, the sole suspension point in the system.
//!
//! Duplicate expansion is prevented structurally: `create_async` holds the
//! exclusive borrow of the registry across the loader await, so only one
//! pool creation can ever be in flight.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::slots::{GeneratorPool, Handle};

/// Errors surfaced by registry construction and creation
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Config parsing or validation failed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Every existing pool is full; recoverable by switching to async
    /// creation, which may instantiate a new pool
    #[error("no free slot in any of {pools} pool(s)")]
    NoCapacity { pools: usize },

    /// Async pool instantiation failed; fatal, never retried by the core
    #[error("failed to instantiate new pool: {0}")]
    Instantiation(String),
}

/// Registry-level generator identity: issuing pool plus slot handle
///
/// Returned by creation and consumed by draws and release. Draws against an
/// id whose pool index or handle no longer names an occupied slot return
/// the documented safe defaults, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorId {
    pool_index: usize,
    handle: Handle,
}

impl GeneratorId {
    /// Assemble an id from its parts (FFI boundary; forged ids are safe,
    /// they draw defaults)
    pub fn new(pool_index: usize, handle: Handle) -> Self {
        Self { pool_index, handle }
    }

    /// Index of the issuing pool in creation order
    pub fn pool_index(&self) -> usize {
        self.pool_index
    }

    /// Slot handle within the issuing pool
    pub fn handle(&self) -> Handle {
        self.handle
    }
}

/// Registry construction parameters
///
/// # Example
/// ```
/// use rng_pool_core_rs::RegistryConfig;
///
/// let config = RegistryConfig::from_json(r#"{"initial_pools": 2}"#).unwrap();
/// assert_eq!(config.initial_pools, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Pools to provision eagerly at construction (must be at least 1;
    /// more than 1 avoids first-expansion latency for known-large workloads)
    pub initial_pools: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { initial_pools: 1 }
    }
}

impl RegistryConfig {
    /// Parse a config from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(json).map_err(|e| RegistryError::InvalidConfig(e.to_string()))
    }

    fn validate(&self) -> Result<(), RegistryError> {
        if self.initial_pools == 0 {
            return Err(RegistryError::InvalidConfig(
                "initial_pools must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Instantiates new pools during async expansion
///
/// Abstracts "load and initialize a new isolated execution unit". Awaiting
/// the loader is the only caller-visible suspension point in the core;
/// everything else is synchronous.
#[async_trait]
pub trait PoolLoader: Send + Sync {
    /// Produce a ready-to-use empty pool, or the fatal instantiation error
    async fn load_pool(&self) -> Result<GeneratorPool, RegistryError>;
}

/// Default loader: constructs pools in-process with no actual loading step
pub struct InProcessLoader;

#[async_trait]
impl PoolLoader for InProcessLoader {
    async fn load_pool(&self) -> Result<GeneratorPool, RegistryError> {
        Ok(GeneratorPool::new())
    }
}

/// Ordered, growable collection of slot pools
///
/// One pool is provisioned eagerly at construction; additional pools appear
/// only through async expansion and are never removed: capacity once
/// allocated is retained for reuse.
///
/// # Example
/// ```
/// use rng_pool_core_rs::PoolRegistry;
///
/// let mut registry = PoolRegistry::new();
/// let id = registry.create_sync(12345).unwrap();
/// let word = registry.draw_u64(id);
/// let ratio = registry.draw_f64(id);
/// let pick = registry.draw_range(id, 1, 10);
/// registry.release(id);
/// ```
pub struct PoolRegistry {
    pools: Vec<GeneratorPool>,
    loader: Box<dyn PoolLoader>,
}

impl PoolRegistry {
    /// Create a registry with one eagerly provisioned pool and the
    /// in-process loader
    pub fn new() -> Self {
        Self {
            pools: vec![GeneratorPool::new()],
            loader: Box::new(InProcessLoader),
        }
    }

    /// Create a registry from a config, using the in-process loader
    pub fn with_config(config: RegistryConfig) -> Result<Self, RegistryError> {
        Self::with_loader(config, Box::new(InProcessLoader))
    }

    /// Create a registry from a config and a custom pool loader
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidConfig` when the config fails
    /// validation.
    pub fn with_loader(
        config: RegistryConfig,
        loader: Box<dyn PoolLoader>,
    ) -> Result<Self, RegistryError> {
        config.validate()?;
        let pools = (0..config.initial_pools)
            .map(|_| GeneratorPool::new())
            .collect();
        Ok(Self { pools, loader })
    }

    /// Allocate a generator without suspending
    ///
    /// Scans existing pools in creation order and allocates into the first
    /// free slot found. Never creates a new pool: when every pool is full
    /// the caller gets `NoCapacity` and may recover by calling
    /// [`create_async`](Self::create_async) instead.
    pub fn create_sync(&mut self, seed: u64) -> Result<GeneratorId, RegistryError> {
        self.try_allocate(seed).ok_or(RegistryError::NoCapacity {
            pools: self.pools.len(),
        })
    }

    /// Allocate a generator, expanding the registry if necessary
    ///
    /// Performs the same in-order scan as [`create_sync`](Self::create_sync);
    /// when every pool is full it awaits the loader for one new pool,
    /// appends it, and allocates into it. Suspends at most once. Fails only
    /// when the new pool cannot be instantiated, which is fatal and not
    /// retried.
    pub async fn create_async(&mut self, seed: u64) -> Result<GeneratorId, RegistryError> {
        if let Some(id) = self.try_allocate(seed) {
            return Ok(id);
        }

        debug!(pools = self.pools.len(), "all pools full, instantiating expansion pool");
        let pool = self.loader.load_pool().await?;
        info!(pool = %pool.id(), index = self.pools.len(), "expansion pool instantiated");

        let pool_index = self.pools.len();
        self.pools.push(pool);
        let handle = self.pools[pool_index].allocate(seed);
        if !handle.is_valid() {
            return Err(RegistryError::Instantiation(
                "freshly instantiated pool has no free slot".to_string(),
            ));
        }
        Ok(GeneratorId { pool_index, handle })
    }

    /// Draw a u64 from the generator named by `id` (safe default `0`)
    pub fn draw_u64(&mut self, id: GeneratorId) -> u64 {
        self.pools
            .get_mut(id.pool_index)
            .map_or(0, |pool| pool.draw_u64(id.handle))
    }

    /// Draw an f64 in [0.0, 1.0) from the generator named by `id`
    /// (safe default `0.0`)
    pub fn draw_f64(&mut self, id: GeneratorId) -> f64 {
        self.pools
            .get_mut(id.pool_index)
            .map_or(0.0, |pool| pool.draw_f64(id.handle))
    }

    /// Draw a u32 in [min, max] from the generator named by `id`
    /// (safe default `min`)
    pub fn draw_range(&mut self, id: GeneratorId, min: u32, max: u32) -> u32 {
        self.pools
            .get_mut(id.pool_index)
            .map_or(min, |pool| pool.draw_range(id.handle, min, max))
    }

    /// Release the generator named by `id`; idempotent, never fails
    pub fn release(&mut self, id: GeneratorId) {
        if let Some(pool) = self.pools.get_mut(id.pool_index) {
            pool.release(id.handle);
        }
    }

    /// Number of pools currently registered
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Total occupied slots across all pools
    pub fn occupied(&self) -> usize {
        self.pools.iter().map(GeneratorPool::occupied).sum()
    }

    fn try_allocate(&mut self, seed: u64) -> Option<GeneratorId> {
        for (pool_index, pool) in self.pools.iter_mut().enumerate() {
            let handle = pool.allocate(seed);
            if handle.is_valid() {
                return Some(GeneratorId { pool_index, handle });
            }
        }
        None
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RegistryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_initial_pools_rejected() {
        let config = RegistryConfig { initial_pools: 0 };
        assert!(matches!(
            PoolRegistry::with_config(config),
            Err(RegistryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(matches!(
            RegistryConfig::from_json(r#"{"pool_size": 64}"#),
            Err(RegistryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_new_registry_has_one_eager_pool() {
        let registry = PoolRegistry::new();
        assert_eq!(registry.pool_count(), 1);
        assert_eq!(registry.occupied(), 0);
    }
}
