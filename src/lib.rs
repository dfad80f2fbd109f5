//! # bitscan
//!
//! Bit-vector scanning for span bookkeeping in chart parsers.
//!
//! ## Features
//! - O(1) next set / next unset bit over any primitive integer word
//! - `-1` sentinel API over the native 32-bit word
//! - O(1)-per-span iteration over runs of set bits
//! - Linear-time yield-function composition check for LCFRS chart items
//! - no_std compatible (requires alloc)
//!
//! ```rust
//! use bitscan::{next_set, next_unset};
//!
//! assert_eq!(next_set(0b0110_0000, 0), 5);
//! assert_eq!(next_unset(0b0110_0000, 5), 7);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bits;
mod chart_item;
mod constants;
mod word;
mod yield_fn;

pub use bits::{
    bit_count, next_set, next_set_bit, next_unset, next_unset_bit, popcount, span_count, spans,
    test_bit, trailing_ones, trailing_zeros, Spans,
};
pub use chart_item::ChartItem;
pub use constants::{Word, ARG_BITS, LENGTH_BITS, NOT_FOUND, WORD_BITS};
pub use word::BitWord;
pub use yield_fn::{YieldFunction, YieldFunctionError};
