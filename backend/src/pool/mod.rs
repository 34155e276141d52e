//! Slot pools and the growable pool registry
//!
//! `slots` owns the fixed-capacity handle/slot mechanics; `registry` layers
//! the ordered multi-pool scan and async expansion on top.

mod registry;
mod slots;

pub use registry::{
    GeneratorId, InProcessLoader, PoolLoader, PoolRegistry, RegistryConfig, RegistryError,
};
pub use slots::{GeneratorPool, Handle, POOL_CAPACITY};
