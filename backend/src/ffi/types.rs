//! Type conversion utilities for the FFI boundary
//!
//! Packs registry-level generator ids into single integers for Python, and
//! parses construction config out of Python dicts.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::pool::{GeneratorId, Handle, RegistryConfig};

/// Extract a field with a default value if missing.
///
/// # Arguments
/// * `dict` - Python dictionary to extract from
/// * `key` - Field name to extract
/// * `default` - Default value to use if field is missing
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

/// Convert a Python dict to RegistryConfig
///
/// # Errors
///
/// Returns PyValueError if:
/// - Type conversions fail
/// - Values out of valid range
pub fn parse_registry_config(py_config: &Bound<'_, PyDict>) -> PyResult<RegistryConfig> {
    let initial_pools: usize = extract_with_default(py_config, "initial_pools", 1)?;

    if initial_pools == 0 {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "initial_pools must be at least 1",
        ));
    }

    Ok(RegistryConfig { initial_pools })
}

/// Pack a generator id into the single integer handed to Python
///
/// Layout: pool index in the upper 32 bits, slot handle in the lower 32.
/// Only valid ids (non-negative handles) are ever packed.
pub fn pack_id(id: GeneratorId) -> i64 {
    ((id.pool_index() as i64) << 32) | i64::from(id.handle().raw())
}

/// Recover a generator id from its packed integer form
///
/// Total: garbage input (negative values, unknown pool indices) unpacks to
/// an id whose draws produce the core's safe defaults.
pub fn unpack_id(packed: i64) -> GeneratorId {
    let pool_index = (packed >> 32) as usize;
    let handle = Handle::from_raw((packed & 0xFFFF_FFFF) as i32);
    GeneratorId::new(pool_index, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_round_trip() {
        let id = GeneratorId::new(3, Handle::from_raw(200));
        assert_eq!(unpack_id(pack_id(id)), id);

        let first = GeneratorId::new(0, Handle::from_raw(0));
        assert_eq!(pack_id(first), 0);
        assert_eq!(unpack_id(0), first);
    }

    #[test]
    fn test_unpack_garbage_yields_safe_id() {
        let id = unpack_id(-1);
        assert!(!id.handle().is_valid());
    }
}
