//! Array-backed binary min-heap
//!
//! The heap is a complete binary tree stored level by level in a `Vec`:
//! the root lives at index 0 and the node at index `i` has its children at
//! `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`. No node is ever
//! allocated separately.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `push`           | O(log n)   |
//! | `pop`            | O(log n)   |
//! | `peek` / `top`   | O(1)       |
//! | `from_vec`       | O(n)       |
//! | `kth_smallest`   | O(n + k log n) |
//!
//! # Example
//!
//! ```rust
//! use array_min_heap::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.top(), Ok(&2));
//!
//! heap.push(0);
//! assert_eq!(heap.into_sorted_vec(), vec![0, 2, 3, 5, 8, 9]);
//!
//! let mut empty: BinaryHeap<i32> = BinaryHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::Empty));
//! ```

use log::trace;

use crate::error::HeapError;

/// A binary min-heap over naturally ordered elements
///
/// The smallest element is always at the root and is what [`peek`](Self::peek)
/// returns and [`pop`](Self::pop) removes. Equal elements are allowed; the
/// order in which they come out is unspecified.
///
/// There is deliberately no way to get a mutable reference into the heap:
/// changing an element in place could silently break the heap property.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T: Ord> {
    /// Heap nodes in level order
    data: Vec<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Builds a heap from an unordered vector in linear time
    ///
    /// The vector is reused as the backing storage, then every internal node
    /// is sifted down starting from the last one and working back to the root.
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self { data: items };
        heap.heapify();
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the smallest element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Same as [`peek`](Self::peek)
    pub fn top(&self) -> Result<&T, HeapError> {
        self.peek()
    }

    /// Removes and returns the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements. The heap is
    /// left untouched in that case.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }

    /// Read-only view of the backing storage in level order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a copy of the backing storage in level order
    ///
    /// The copy is independent of the heap: changing one never affects the
    /// other.
    pub fn contents(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Returns the k-th smallest element (1-based) without modifying the heap
    ///
    /// Works on a clone: pops `k - 1` elements from it and reads the new
    /// minimum.
    ///
    /// # Errors
    /// Returns [`HeapError::RankOutOfRange`] if `k` is 0 or larger than the
    /// number of elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use array_min_heap::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from_vec(vec![7, 2, 9, 4, 1, 6, 3]);
    /// assert_eq!(heap.kth_smallest(3), Ok(3));
    /// assert_eq!(heap.len(), 7);
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Result<T, HeapError>
    where
        T: Clone,
    {
        let len = self.data.len();
        if k == 0 || k > len {
            return Err(HeapError::RankOutOfRange { k, len });
        }

        trace!("kth_smallest: k={} over {} elements", k, len);
        let mut scratch = self.clone();
        for _ in 1..k {
            scratch.pop()?;
        }
        scratch.peek().cloned()
    }

    /// Consumes the heap and returns the backing storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap property over the whole array
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Restores the heap property over unordered storage
    fn heapify(&mut self) {
        let len = self.data.len();
        trace!("heapify: {} elements", len);
        // Inclusive range over usize: empty storage just visits index 0
        for index in (0..=len / 2).rev() {
            self.sift_down(index);
        }
        debug_assert!(self.is_heap());
    }

    /// Moves the element at `index` towards the root while it is smaller
    /// than its parent
    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = parent_of(index) {
            if self.data[index] >= self.data[parent] {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` towards the leaves while one of its
    /// children is smaller
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.smaller_child(index) {
            if self.data[child] >= self.data[index] {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }

    /// Index of the smaller existing child of `index`, if it has any
    ///
    /// Left wins a tie: the right child is only picked when strictly smaller.
    fn smaller_child(&self, index: usize) -> Option<usize> {
        let (left, right) = children_of(index);
        let len = self.data.len();
        if left >= len {
            None
        } else if right < len && self.data[right] < self.data[left] {
            Some(right)
        } else {
            Some(left)
        }
    }
}

/// Parent slot of `index`; the root has none
#[inline]
fn parent_of(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

/// Left and right child slots of `index`, whether or not they exist
#[inline]
fn children_of(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
