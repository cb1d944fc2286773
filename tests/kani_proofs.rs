//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[allow(unused_imports)]
use array_min_heap::{BinaryHeap, HeapError};

/// Proof that push always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_push_increments_len() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new();
    heap.push(kani::any());
    let initial_len = heap.len();

    heap.push(kani::any());

    assert!(heap.len() == initial_len + 1);
}

/// Proof that pop on an empty heap fails without changing it
#[cfg(kani)]
#[kani::proof]
fn verify_pop_empty_is_error() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new();

    assert!(heap.pop() == Err(HeapError::Empty));
    assert!(heap.peek() == Err(HeapError::Empty));
    assert!(heap.is_empty());
}

/// Proof that peek returns the minimum of three pushed values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_peek_is_minimum() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();

    heap.push(a);
    heap.push(b);
    heap.push(c);

    let min = a.min(b).min(c);
    assert!(heap.peek() == Ok(&min));
}

/// Proof that bulk construction over four values pops in ascending order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_bulk_construction_pops_ascending() {
    let values: [u8; 4] = kani::any();
    let mut heap = BinaryHeap::from_vec(values.to_vec());

    let mut last = heap.pop().unwrap();
    while let Ok(next) = heap.pop() {
        assert!(last <= next);
        last = next;
    }
    assert!(heap.is_empty());
}
