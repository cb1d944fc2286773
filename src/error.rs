//! Error type for heap operations
//!
//! Only two things can go wrong: asking an empty heap for its minimum, and
//! asking for a k-th smallest element that does not exist.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek`, `top` or `pop` was called on a heap with no elements
    Empty,
    /// `kth_smallest` was asked for a rank outside `1..=len`
    RankOutOfRange {
        /// The requested 1-based rank
        k: usize,
        /// Number of elements in the heap at the time of the query
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "no elements in heap"),
            HeapError::RankOutOfRange { k, len } => {
                write!(f, "rank {} is out of range for a heap of {} elements", k, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}
