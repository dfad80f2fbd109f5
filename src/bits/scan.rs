//! Search operations for finding the next set or unset bit in a word.

use crate::bits::trailing_zeros;
use crate::constants::{Word, NOT_FOUND, WORD_BITS};
use crate::word::BitWord;

/// Find the lowest set bit at or after `pos`.
///
/// The word is scanned through its unsigned view, so a negative `vec`
/// (top bit set) behaves like the same bit pattern in a `u32`.
///
/// # Arguments
/// * `vec` - Bit vector
/// * `pos` - Starting index, inclusive (0-31)
///
/// # Returns
/// Index of the next set bit, or [`NOT_FOUND`] (`-1`) if every bit at or
/// above `pos` is zero
///
/// # Performance
/// O(1) - one shift plus TZCNT
///
/// # Examples
/// ```
/// use bitscan::next_set;
///
/// assert_eq!(next_set(0b0000_1000, 0), 3);
/// assert_eq!(next_set(0b0000_1000, 4), -1);
/// ```
#[inline]
pub fn next_set(vec: Word, pos: Word) -> Word {
    debug_assert!((0..WORD_BITS).contains(&pos), "pos out of bounds");
    match next_set_bit(vec, pos as u32) {
        Some(idx) => idx as Word,
        None => NOT_FOUND,
    }
}

/// Find the lowest unset bit at or after `pos`.
///
/// There is always an answer: bits above the word's width count as
/// zero, so when every bit from `pos` to 31 is set the result is 32.
///
/// # Arguments
/// * `vec` - Bit vector
/// * `pos` - Starting index, inclusive (0-31)
///
/// # Returns
/// Index of the next unset bit, in `pos..=32`
///
/// # Performance
/// O(1) - shift, NOT, TZCNT
///
/// # Examples
/// ```
/// use bitscan::next_unset;
///
/// assert_eq!(next_unset(0b1111_0111, 0), 3);
/// assert_eq!(next_unset(-1, 0), 32);
/// ```
#[inline]
pub fn next_unset(vec: Word, pos: Word) -> Word {
    debug_assert!((0..WORD_BITS).contains(&pos), "pos out of bounds");
    next_unset_bit(vec, pos as u32) as Word
}

/// Find the lowest set bit at or after `pos` in a word of any width.
///
/// # Arguments
/// * `vec` - Bit vector
/// * `pos` - Starting index, inclusive; any value is accepted
///
/// # Returns
/// Index of the next set bit, or `None` if there is none. Always `None`
/// when `pos >= W::WIDTH`.
///
/// # Performance
/// O(1) - uses CPU intrinsics (TZCNT) for fast bit scanning
#[inline]
pub fn next_set_bit<W: BitWord>(vec: W, pos: u32) -> Option<u32> {
    let shifted = vec.shr_logical(pos);
    if shifted.is_zero() {
        return None;
    }
    Some(pos + trailing_zeros(shifted))
}

/// Find the lowest unset bit at or after `pos` in a word of any width.
///
/// The word is zero-extended past its width: the result is at most
/// `max(pos, W::WIDTH)`, and equals `pos` whenever `pos >= W::WIDTH`.
///
/// # Performance
/// O(1) - uses CPU intrinsics (TZCNT) for fast bit scanning
#[inline]
pub fn next_unset_bit<W: BitWord>(vec: W, pos: u32) -> u32 {
    // TZCNT of zero is WIDTH, which covers an all-ones tail
    pos + trailing_zeros(vec.shr_logical(pos).complement())
}
