//! Stress tests that push the heap with large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use array_min_heap::{BinaryHeap, HeapError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Test massive numbers of inserts and pops
#[test]
fn test_massive_operations() {
    let mut heap = BinaryHeap::new();

    for i in 0..10_000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }

    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(HeapError::Empty));
}

/// Test alternating insert and pop
#[test]
fn test_alternating_ops() {
    let mut heap = BinaryHeap::new();

    // Two in, one out: the minimum climbs by one each round
    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop(), Ok(i));
    }

    assert_eq!(heap.len(), 2_000);
    let rest = heap.into_sorted_vec();
    assert_eq!(rest, (2_000..4_000).collect::<Vec<_>>());
}

/// Bulk construction from a shuffled range
#[test]
fn test_large_shuffled_bulk_construction() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<u32> = (0..50_000).collect();
    values.shuffle(&mut rng);

    let heap = BinaryHeap::from_vec(values);
    assert_eq!(heap.peek(), Ok(&0));
    assert_eq!(heap.kth_smallest(1_000), Ok(999));
    assert_eq!(heap.into_sorted_vec(), (0..50_000).collect::<Vec<_>>());
}

/// Random values with many duplicates, checked against a sorted reference
#[test]
fn test_random_with_duplicates() {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<i32> = (0..20_000).map(|_| rng.gen_range(-50..50)).collect();

    let mut heap = BinaryHeap::new();
    heap.extend(values.iter().copied());

    let mut expected = values;
    expected.sort();
    assert_eq!(heap.into_sorted_vec(), expected);
}

/// Push into a heap that was drained back to empty
#[test]
fn test_refill_after_drain() {
    let mut heap = BinaryHeap::from_vec((0..1_000).rev().collect());

    for round in 0..5 {
        while heap.pop().is_ok() {}
        assert!(heap.is_empty());

        for i in (0..1_000).rev() {
            heap.push(i + round);
        }
        assert_eq!(heap.peek(), Ok(&round));
    }
}
