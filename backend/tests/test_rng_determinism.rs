//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use std::collections::HashSet;

use rng_pool_core_rs::Xoshiro256StarStar;

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = Xoshiro256StarStar::new(12345);
    let mut rng2 = Xoshiro256StarStar::new(12345);

    for i in 0..1000 {
        let val1 = rng1.next_u64();
        let val2 = rng2.next_u64();
        assert_eq!(
            val1, val2,
            "Determinism broken at iteration {}: {} != {}",
            i, val1, val2
        );
    }
}

#[test]
fn test_mixed_operation_sequence_deterministic() {
    let mut rng1 = Xoshiro256StarStar::new(424242);
    let mut rng2 = Xoshiro256StarStar::new(424242);

    // Fixed operation mix; both generators must match element-for-element.
    for _ in 0..50 {
        assert_eq!(rng1.next_u64(), rng2.next_u64());
        assert_eq!(rng1.next_f64(), rng2.next_f64());
        assert_eq!(rng1.next_range(0, 1000), rng2.next_range(0, 1000));
        assert_eq!(rng1.next_u64(), rng2.next_u64());
        assert_eq!(rng1.next_f64(), rng2.next_f64());
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let mut rng1 = Xoshiro256StarStar::new(12345);
    let mut rng2 = Xoshiro256StarStar::new(54321);

    assert_ne!(
        rng1.next_u64(),
        rng2.next_u64(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_interleaved_generators_are_independent() {
    // Drain each generator separately...
    let mut solo_a = Xoshiro256StarStar::new(1);
    let mut solo_b = Xoshiro256StarStar::new(2);
    let expected_a: Vec<u64> = (0..100).map(|_| solo_a.next_u64()).collect();
    let expected_b: Vec<u64> = (0..100).map(|_| solo_b.next_u64()).collect();

    // ...then interleave draws from fresh instances with the same seeds.
    let mut rng_a = Xoshiro256StarStar::new(1);
    let mut rng_b = Xoshiro256StarStar::new(2);
    for i in 0..100 {
        assert_eq!(rng_a.next_u64(), expected_a[i], "Generator A perturbed at draw {}", i);
        assert_eq!(rng_b.next_u64(), expected_b[i], "Generator B perturbed at draw {}", i);
    }
}

#[test]
fn test_draws_unique_at_scale() {
    let mut rng = Xoshiro256StarStar::new(987654321);
    let mut seen = HashSet::new();

    // Birthday-bound sanity check: 10,000 draws from a 64-bit generator
    // should never collide.
    for i in 0..10_000 {
        assert!(
            seen.insert(rng.next_u64()),
            "Duplicate u64 after {} draws",
            i
        );
    }
}

#[test]
fn test_serialized_snapshot_replays_identically() {
    let mut rng = Xoshiro256StarStar::new(5555);
    for _ in 0..10 {
        rng.next_u64();
    }

    let snapshot = serde_json::to_string(&rng).expect("serialize generator");
    let mut replay: Xoshiro256StarStar = serde_json::from_str(&snapshot).expect("deserialize generator");

    for _ in 0..100 {
        assert_eq!(
            rng.next_u64(),
            replay.next_u64(),
            "Replayed generator diverged from original"
        );
    }
}

#[test]
fn test_produces_diverse_values() {
    let mut rng = Xoshiro256StarStar::new(12345);
    let values: HashSet<u64> = (0..100).map(|_| rng.next_u64()).collect();

    assert!(
        values.len() > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        values.len()
    );
}
