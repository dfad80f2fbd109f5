//! CPU intrinsic operations for fast bit manipulation.

use crate::word::BitWord;

/// Count trailing zeros (find first set bit from right).
///
/// Uses CPU TZCNT instruction for O(1) performance.
///
/// # Arguments
/// * `word` - Word of any width
///
/// # Returns
/// Number of trailing zeros (0-WIDTH). The zero word yields `WIDTH`.
///
/// # Performance
/// O(1) - single CPU instruction (TZCNT)
#[inline]
pub fn trailing_zeros<W: BitWord>(word: W) -> u32 {
    word.trailing_zeros()
}

/// Count trailing ones (find first unset bit from right).
///
/// # Returns
/// Number of trailing ones (0-WIDTH). The all-ones word yields `WIDTH`.
///
/// # Performance
/// O(1) - TZCNT of the complement
#[inline]
pub fn trailing_ones<W: BitWord>(word: W) -> u32 {
    word.trailing_ones()
}

/// Count set bits in a word.
///
/// Uses CPU POPCNT instruction for O(1) performance.
///
/// # Returns
/// Number of set bits (0-WIDTH)
///
/// # Performance
/// O(1) - single CPU instruction (POPCNT)
#[inline]
pub fn popcount<W: BitWord>(word: W) -> u32 {
    word.count_ones()
}
