//! Human-readable dumps of a heap's array layout
//!
//! Nothing here touches heap state; every function reads the level-order
//! slice exposed by [`BinaryHeap::as_slice`].

use std::fmt;
use std::io::{self, Write};

use crate::binary::BinaryHeap;

/// Elements in level order, each followed by a single space
impl<T: Ord + fmt::Display> fmt::Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.as_slice() {
            write!(f, "{} ", item)?;
        }
        Ok(())
    }
}

/// Writes one line per element with its array index
///
/// ```rust
/// use array_min_heap::{display::write_array, BinaryHeap};
///
/// let heap = BinaryHeap::from_vec(vec![2, 1]);
/// let mut out = Vec::new();
/// write_array(&heap, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "  [x] Heap element [0]. key=1\n  [x] Heap element [1]. key=2\n"
/// );
/// ```
pub fn write_array<T, W>(heap: &BinaryHeap<T>, out: &mut W) -> io::Result<()>
where
    T: Ord + fmt::Display,
    W: Write,
{
    for (index, item) in heap.as_slice().iter().enumerate() {
        writeln!(out, "  [x] Heap element [{}]. key={}", index, item)?;
    }
    Ok(())
}

/// Writes the tree one level per line
///
/// Level `n` holds indices `2^(n-1) - 1 ..= 2^n - 2`. A new level header is
/// started right after the last slot of a level, so a completely full tree
/// ends with an empty header line.
pub fn write_pretty<T, W>(heap: &BinaryHeap<T>, out: &mut W) -> io::Result<()>
where
    T: Ord + fmt::Display,
    W: Write,
{
    let mut level: u32 = 1;
    write!(out, "   [x] Level #{} -    ", level)?;
    for (index, item) in heap.as_slice().iter().enumerate() {
        write!(out, "{} ", item)?;
        if is_level_end(index) {
            level += 1;
            write!(out, "\n   [x] Level #{} -    ", level)?;
        }
    }
    writeln!(out)
}

/// Array dump to stdout
pub fn print_array<T: Ord + fmt::Display>(heap: &BinaryHeap<T>) -> io::Result<()> {
    write_array(heap, &mut io::stdout().lock())
}

/// Level-order dump to stdout
pub fn print_pretty<T: Ord + fmt::Display>(heap: &BinaryHeap<T>) -> io::Result<()> {
    write_pretty(heap, &mut io::stdout().lock())
}

/// True when `index` is the rightmost slot of its level (0, 2, 6, 14, ...)
fn is_level_end(index: usize) -> bool {
    (index + 2).is_power_of_two()
}
