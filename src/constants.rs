//! Core constants and type definitions for bitscan.

/// Native word of the sentinel API.
///
/// Bit vectors handed to [`next_set`](crate::next_set) and
/// [`next_unset`](crate::next_unset) are stored in this signed type and
/// scanned through its unsigned view.
pub type Word = i32;

/// Number of bits in a [`Word`].
pub const WORD_BITS: i32 = Word::BITS as i32;

/// Sentinel returned by [`next_set`](crate::next_set) when no set bit
/// exists at or after the starting position.
pub const NOT_FOUND: Word = -1;

/// Maximum number of components in one yield-function argument.
///
/// Each argument is packed into a `u32`.
pub const ARG_BITS: usize = u32::BITS as usize;

/// Maximum number of arguments in a yield function.
///
/// Argument lengths are stored as `u16`, one per argument.
pub const LENGTH_BITS: usize = u16::BITS as usize;

// A valid index never collides with the sentinel.
const _: () = assert!(NOT_FOUND < 0);
const _: () = assert!(WORD_BITS == 32);
const _: () = assert!(ARG_BITS <= u16::MAX as usize);
