//! Array-backed binary min-heap
//!
//! This crate provides [`BinaryHeap`], a min-heap that stores its elements as
//! an implicit complete binary tree inside a single `Vec`, and a small set of
//! formatting helpers for inspecting the layout.
//!
//! # Features
//!
//! - **push / pop**: O(log n) percolate-up and percolate-down
//! - **peek / top**: O(1) read-only access to the minimum
//! - **Bulk construction**: O(n) heapify from any unordered `Vec` or iterator
//! - **Content export**: independent copy of the level-order array
//! - **k-th smallest**: non-destructive query on a cloned heap
//!
//! Unlike `std::collections::BinaryHeap`, this is a min-heap and empty-heap
//! access is reported as [`HeapError::Empty`] rather than `None`.
//!
//! # Example
//!
//! ```rust
//! use array_min_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Ok(&3));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.contents(), vec![5, 7]);
//! ```

pub mod binary;
pub mod display;
pub mod error;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use error::HeapError;
