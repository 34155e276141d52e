//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the pool registry to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Integers and floats at the boundary; handles are
//!    packed into a single int
//! 3. **Total draws**: Stale or garbage handles produce safe defaults,
//!    matching the core's contract
//! 4. **Safe errors**: Capacity and instantiation failures become Python
//!    exceptions

pub mod pool;
pub mod types;
