//! Iteration over contiguous runs of set bits.
//!
//! A bit vector describing a discontinuous constituent is a union of
//! spans; each span is a maximal run of consecutive set bits. Runs are
//! found by alternating [`next_set_bit`] and [`next_unset_bit`], so the
//! cost is O(1) per span rather than per bit.

use core::iter::FusedIterator;

use crate::bits::{next_set_bit, next_unset_bit};
use crate::word::BitWord;

/// Iterator over half-open `(start, end)` runs of set bits, ascending.
///
/// Created by [`spans`]. A run that reaches the top bit ends at
/// `W::WIDTH`.
///
/// # Example
/// ```rust
/// use bitscan::spans;
///
/// let runs: Vec<(u32, u32)> = spans(0b1110_0110u32).collect();
/// assert_eq!(runs, vec![(1, 3), (5, 8)]);
/// ```
#[derive(Clone, Debug)]
pub struct Spans<W: BitWord> {
    vec: W,
    /// Next position to search from
    pos: u32,
}

impl<W: BitWord> Iterator for Spans<W> {
    type Item = (u32, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let Some(start) = next_set_bit(self.vec, self.pos) else {
            self.pos = W::WIDTH;
            return None;
        };
        let end = next_unset_bit(self.vec, start);
        self.pos = end;
        Some((start, end))
    }
}

impl<W: BitWord> FusedIterator for Spans<W> {}

/// Iterate over the runs of set bits in `vec`.
#[inline]
pub fn spans<W: BitWord>(vec: W) -> Spans<W> {
    Spans { vec, pos: 0 }
}

/// Number of runs of set bits (the fan-out of a constituent).
#[inline]
pub fn span_count<W: BitWord>(vec: W) -> u32 {
    spans(vec).count() as u32
}
