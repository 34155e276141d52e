//! Tests for seed expansion and normalization

use rng_pool_core_rs::{expand_seed, normalize_seed, Xoshiro256StarStar};

#[test]
fn test_expansion_deterministic() {
    for seed in [0u64, 1, 42, 12345, u64::MAX] {
        assert_eq!(
            expand_seed(seed),
            expand_seed(seed),
            "Expansion of seed {} not deterministic",
            seed
        );
    }
}

#[test]
fn test_extreme_seeds_produce_working_generators() {
    // Seed 0 and the maximum representable value are both valid.
    for seed in [0u64, u64::MAX] {
        let state = expand_seed(seed);
        assert_ne!(state, [0; 4], "Seed {} expanded to the forbidden zero state", seed);

        let mut rng = Xoshiro256StarStar::new(seed);
        let values: Vec<u64> = (0..10).map(|_| rng.next_u64()).collect();
        let unique = values.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique >= 9, "Seed {} produced a degenerate sequence", seed);
    }
}

#[test]
fn test_nearby_seeds_expand_to_unrelated_states() {
    let states: Vec<[u64; 4]> = (0u64..100).map(expand_seed).collect();

    for (i, a) in states.iter().enumerate() {
        for b in &states[i + 1..] {
            assert_ne!(a, b, "Two seeds in 0..100 expanded to the same state");
        }
    }

    // No shared words either: adjacent seeds must not leak words into each
    // other's states.
    let words: std::collections::HashSet<u64> = states.iter().flatten().copied().collect();
    assert_eq!(words.len(), 400, "Expanded states share 64-bit words");
}

#[test]
fn test_normalization_is_twos_complement() {
    assert_eq!(normalize_seed(0), 0);
    assert_eq!(normalize_seed(1), 1);
    assert_eq!(normalize_seed(-1), u64::MAX);
    assert_eq!(normalize_seed(-2), u64::MAX - 1);
    assert_eq!(normalize_seed(i64::MIN), 1u64 << 63);
}

#[test]
fn test_normalized_seed_changes_effective_sequence() {
    // -1 normalizes to u64::MAX, so it must match that generator exactly
    // and differ from seed 1.
    let mut from_negative = Xoshiro256StarStar::new(normalize_seed(-1));
    let mut from_max = Xoshiro256StarStar::new(u64::MAX);
    let mut from_one = Xoshiro256StarStar::new(1);

    let a = from_negative.next_u64();
    assert_eq!(a, from_max.next_u64());
    assert_ne!(a, from_one.next_u64());
}
