//! Xoshiro256** random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes. It is NOT cryptographically secure: the state
//! can be recovered from observed output.
//!
//! # Algorithm
//!
//! Xoshiro256** keeps 256 bits of state in four 64-bit words and scrambles
//! the second word through `rotl(s1 * 5, 7) * 9` to form each output. It
//! passes TestU01's BigCrush statistical tests.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact draw sequences)
//! - Testing (verify behavior)
//! - Replaying a run from a snapshotted state

use serde::{Deserialize, Serialize};

use super::seed::expand_seed;

/// Deterministic random number generator using Xoshiro256**
///
/// The state is mutated in place on every draw and is never all zero
/// (guaranteed by seed expansion). The struct is `Clone` for explicit
/// snapshots but deliberately not `Copy`: a generator has one owner and
/// its state never duplicates implicitly.
///
/// # Example
/// ```
/// use rng_pool_core_rs::Xoshiro256StarStar;
///
/// let mut rng = Xoshiro256StarStar::new(12345);
/// let word = rng.next_u64();
/// let unit = rng.next_f64();          // [0.0, 1.0)
/// let dice = rng.next_range(1, 6);    // [1, 6] inclusive
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xoshiro256StarStar {
    /// Internal state (four 64-bit words, never all zero)
    s: [u64; 4],
}

impl Xoshiro256StarStar {
    /// Create a new generator from a 64-bit seed
    ///
    /// The seed is expanded through SplitMix64 into the initial state, so
    /// every seed is valid, including 0 and `u64::MAX`.
    ///
    /// # Example
    /// ```
    /// use rng_pool_core_rs::Xoshiro256StarStar;
    ///
    /// let rng = Xoshiro256StarStar::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            s: expand_seed(seed),
        }
    }

    /// Generate the next random u64 value
    ///
    /// Advances the internal state and returns one 64-bit word. Total over
    /// any non-all-zero state, O(1), no error conditions.
    ///
    /// # Example
    /// ```
    /// use rng_pool_core_rs::Xoshiro256StarStar;
    ///
    /// let mut rng = Xoshiro256StarStar::new(12345);
    /// let value = rng.next_u64();
    /// ```
    pub fn next_u64(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);

        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a random f64 in [0.0, 1.0)
    ///
    /// Takes the high 53 bits of a fresh word and scales by 2^-53, so the
    /// result is never exactly 1.0 and may be exactly 0.0.
    ///
    /// # Example
    /// ```
    /// use rng_pool_core_rs::Xoshiro256StarStar;
    ///
    /// let mut rng = Xoshiro256StarStar::new(12345);
    /// let unit = rng.next_f64();
    /// assert!(unit >= 0.0 && unit < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Generate a random u32 in [min, max], inclusive on both ends
    ///
    /// Uniform for every span via Lemire's multiply-shift rejection on the
    /// upper 32 bits of each generated word, so no outcome is
    /// over-represented regardless of the span's relationship to powers of
    /// two.
    ///
    /// Degenerate inputs consume no generator output: `min == max` returns
    /// `min` with the sequence unaffected, and an inverted range
    /// (`min > max`) returns `min` as the documented safe default rather
    /// than signaling an error.
    ///
    /// # Example
    /// ```
    /// use rng_pool_core_rs::Xoshiro256StarStar;
    ///
    /// let mut rng = Xoshiro256StarStar::new(12345);
    /// let v = rng.next_range(10, 20);
    /// assert!(v >= 10 && v <= 20);
    /// assert_eq!(rng.next_range(7, 7), 7);
    /// ```
    pub fn next_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min;
        if span == u32::MAX {
            // Full u32 domain: the bound 2^32 is not representable, and a
            // truncated word is already uniform over it.
            return (self.next_u64() >> 32) as u32;
        }
        min + self.bounded(span + 1)
    }

    /// Uniform value in [0, bound) via multiply-shift rejection
    fn bounded(&mut self, bound: u32) -> u32 {
        let mut x = (self.next_u64() >> 32) as u32;
        let mut m = u64::from(x) * u64::from(bound);
        let mut low = m as u32;
        if low < bound {
            // Reject the low fringe that maps unevenly onto [0, bound).
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                x = (self.next_u64() >> 32) as u32;
                m = u64::from(x) * u64::from(bound);
                low = m as u32;
            }
        }
        (m >> 32) as u32
    }

    /// Get the current generator state (for in-process snapshot/replay)
    ///
    /// # Example
    /// ```
    /// use rng_pool_core_rs::Xoshiro256StarStar;
    ///
    /// let rng = Xoshiro256StarStar::new(12345);
    /// let snapshot = rng.state();
    /// assert_ne!(snapshot, [0; 4]);
    /// ```
    pub fn state(&self) -> [u64; 4] {
        self.s
    }
}
