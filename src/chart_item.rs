//! Chart items: a category label plus the positions it covers.

use core::fmt;

use crate::bits::{next_set_bit, span_count, test_bit};

/// An item in a parse chart.
///
/// `vec` has bit `i` set iff the item covers sentence position `i`; a
/// discontinuous item has several runs of set bits. Items order by label,
/// then by vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartItem {
    pub label: u32,
    pub vec: u64,
}

impl ChartItem {
    #[inline]
    pub const fn new(label: u32, vec: u64) -> Self {
        Self { label, vec }
    }

    /// Number of contiguous spans the item covers.
    #[inline]
    pub fn fan_out(&self) -> u32 {
        span_count(self.vec)
    }

    /// Position of the first word the item covers, if any.
    #[inline]
    pub fn start(&self) -> Option<u32> {
        next_set_bit(self.vec, 0)
    }
}

/// Prints the label followed by the vector from position 0 upward,
/// stopping at the last covered position: an item labeled 3 covering
/// positions 1 and 2 prints `3[011]`.
impl fmt::Display for ChartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.label)?;
        let top = u64::BITS - self.vec.leading_zeros();
        for pos in 0..top {
            f.write_str(if test_bit(self.vec, pos) { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}
