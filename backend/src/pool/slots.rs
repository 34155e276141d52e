//! Fixed-capacity slot pool for generator instances
//!
//! A pool owns 256 reusable slots. Each slot is either empty or holds one
//! generator state. Allocation hands out the index of the first empty slot
//! as an opaque handle; release marks the slot empty again so it can serve
//! a different seed later. The pool never resizes; growing capacity is the
//! registry's job.

use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

use crate::rng::Xoshiro256StarStar;

/// Number of generator slots in every pool, fixed at creation.
pub const POOL_CAPACITY: usize = 256;

/// Opaque handle identifying a slot within the pool that issued it
///
/// Non-negative values index a slot; [`Handle::INVALID`] (−1) is the
/// "no slot available" sentinel. A handle is meaningful only in its issuing
/// pool: presenting it to a different pool is a caller contract violation
/// and yields that pool's safe defaults, never an error.
///
/// # Example
/// ```
/// use rng_pool_core_rs::Handle;
///
/// assert!(!Handle::INVALID.is_valid());
/// assert_eq!(Handle::INVALID.raw(), -1);
/// assert!(Handle::from_raw(3).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(i32);

impl Handle {
    /// Sentinel for "no slot available"
    pub const INVALID: Handle = Handle(-1);

    /// Reconstruct a handle from its raw integer form (FFI boundary)
    pub fn from_raw(raw: i32) -> Handle {
        Handle(raw)
    }

    /// Raw integer form of this handle (FFI boundary)
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Whether this handle can possibly name an occupied slot
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }

    /// Slot index named by this handle, if non-negative
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    fn from_index(index: usize) -> Handle {
        Handle(index as i32)
    }
}

/// Fixed-capacity pool of generator slots
///
/// Owns every generator state it stores. Slots are scanned in index order,
/// so released slots are reused lowest-index-first, which keeps handle
/// assignment deterministic across identical operation sequences.
///
/// # Example
/// ```
/// use rng_pool_core_rs::GeneratorPool;
///
/// let mut pool = GeneratorPool::new();
/// let handle = pool.allocate(12345);
/// assert!(handle.is_valid());
///
/// let word = pool.draw_u64(handle);
/// pool.release(handle);
/// assert_eq!(pool.draw_u64(handle), 0); // stale handle: safe default
/// ```
#[derive(Debug)]
pub struct GeneratorPool {
    /// Diagnostic identity; registry position remains authoritative
    id: Uuid,
    /// One optional generator per slot, always POOL_CAPACITY long
    slots: Vec<Option<Xoshiro256StarStar>>,
}

impl GeneratorPool {
    /// Create an empty pool with all 256 slots free
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            slots: vec![None; POOL_CAPACITY],
        }
    }

    /// Diagnostic pool identity (appears in tracing output)
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Allocate the first empty slot, seeding a fresh generator into it
    ///
    /// Returns the slot's handle, or [`Handle::INVALID`] when every slot is
    /// occupied. All-or-nothing: on failure the pool is unchanged.
    pub fn allocate(&mut self, seed: u64) -> Handle {
        match self.slots.iter().position(|slot| slot.is_none()) {
            Some(index) => {
                self.slots[index] = Some(Xoshiro256StarStar::new(seed));
                trace!(pool = %self.id, slot = index, "allocated generator slot");
                Handle::from_index(index)
            }
            None => Handle::INVALID,
        }
    }

    /// Release the slot named by `handle`
    ///
    /// Idempotent: out-of-range handles and already-empty slots are silently
    /// ignored, so releasing twice never fails.
    pub fn release(&mut self, handle: Handle) {
        if let Some(slot) = handle.index().and_then(|i| self.slots.get_mut(i)) {
            if slot.take().is_some() {
                trace!(pool = %self.id, slot = handle.raw(), "released generator slot");
            }
        }
    }

    /// Draw a u64 from the generator in `handle`'s slot
    ///
    /// Stale, released, or out-of-range handles yield `0` without side
    /// effects.
    pub fn draw_u64(&mut self, handle: Handle) -> u64 {
        self.slot_mut(handle).map_or(0, Xoshiro256StarStar::next_u64)
    }

    /// Draw an f64 in [0.0, 1.0) from the generator in `handle`'s slot
    ///
    /// Stale, released, or out-of-range handles yield `0.0` without side
    /// effects.
    pub fn draw_f64(&mut self, handle: Handle) -> f64 {
        self.slot_mut(handle).map_or(0.0, Xoshiro256StarStar::next_f64)
    }

    /// Draw a u32 in [min, max] from the generator in `handle`'s slot
    ///
    /// Stale, released, or out-of-range handles yield `min` without side
    /// effects, matching the safe default of an inverted range.
    pub fn draw_range(&mut self, handle: Handle, min: u32, max: u32) -> u32 {
        self.slot_mut(handle)
            .map_or(min, |rng| rng.next_range(min, max))
    }

    fn slot_mut(&mut self, handle: Handle) -> Option<&mut Xoshiro256StarStar> {
        handle
            .index()
            .and_then(|i| self.slots.get_mut(i))
            .and_then(|slot| slot.as_mut())
    }
}

impl Default for GeneratorPool {
    fn default() -> Self {
        Self::new()
    }
}
