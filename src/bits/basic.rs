//! Basic single-word bit queries.

use crate::bits::popcount;
use crate::word::BitWord;

/// Check if a bit is set in the word.
///
/// # Arguments
/// * `vec` - Bit vector
/// * `pos` - Bit index; positions at or past the width read as unset
///
/// # Returns
/// `true` if bit is set, `false` otherwise
///
/// # Performance
/// O(1) - single shift and AND
#[inline]
pub fn test_bit<W: BitWord>(vec: W, pos: u32) -> bool {
    vec.bit(pos)
}

/// Number of set bits (1s) in the word.
///
/// # Performance
/// O(1) - uses CPU POPCNT instruction
#[inline]
pub fn bit_count<W: BitWord>(vec: W) -> u32 {
    popcount(vec)
}
