//! Bit-vector scanning over fixed-width words.
//!
//! Two layers are provided:
//! - the sentinel API ([`next_set`], [`next_unset`]) over the native
//!   32-bit [`Word`](crate::Word), returning `-1` when nothing is found;
//! - the width-generic API ([`next_set_bit`], [`next_unset_bit`], [`spans`])
//!   over any [`BitWord`](crate::BitWord).

mod basic;
mod intrinsics;
mod scan;
mod spans;

// Re-export all public functions
pub use basic::{bit_count, test_bit};
pub use intrinsics::{popcount, trailing_ones, trailing_zeros};
pub use scan::{next_set, next_set_bit, next_unset, next_unset_bit};
pub use spans::{span_count, spans, Spans};
