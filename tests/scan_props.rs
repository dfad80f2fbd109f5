//! Property-based tests for the bit scanners.
//!
//! Every scanner result is checked against a naive bit-by-bit walk.

use bitscan::{
    next_set, next_set_bit, next_unset, next_unset_bit, span_count, spans, test_bit, NOT_FOUND,
    WORD_BITS,
};
use proptest::prelude::*;

fn bit(vec: i32, pos: i32) -> bool {
    pos < WORD_BITS && ((vec as u32) >> pos) & 1 != 0
}

fn naive_next_set(vec: i32, pos: i32) -> i32 {
    (pos..WORD_BITS).find(|&i| bit(vec, i)).unwrap_or(NOT_FOUND)
}

fn naive_next_unset(vec: i32, pos: i32) -> i32 {
    (pos..=WORD_BITS).find(|&i| !bit(vec, i)).unwrap()
}

proptest! {
    #[test]
    fn prop_next_set_matches_naive(vec in any::<i32>(), pos in 0..WORD_BITS) {
        prop_assert_eq!(next_set(vec, pos), naive_next_set(vec, pos));
    }

    #[test]
    fn prop_next_set_finds_lowest(vec in any::<i32>(), pos in 0..WORD_BITS) {
        let found = next_set(vec, pos);
        if found != NOT_FOUND {
            prop_assert!(bit(vec, found), "bit at result must be set");
            for i in pos..found {
                prop_assert!(!bit(vec, i), "bits before result must be clear");
            }
            // Searching again from the result finds it again
            prop_assert_eq!(next_set(vec, found), found);
        } else {
            prop_assert_eq!((vec as u32) >> pos, 0);
        }
    }

    #[test]
    fn prop_next_unset_finds_lowest(vec in any::<i32>(), pos in 0..WORD_BITS) {
        let found = next_unset(vec, pos);
        prop_assert!(found >= pos && found <= WORD_BITS);
        prop_assert!(!bit(vec, found), "bit at result must be clear");
        for i in pos..found {
            prop_assert!(bit(vec, i), "bits before result must be set");
        }
        prop_assert_eq!(found, naive_next_unset(vec, pos));
    }

    #[test]
    fn prop_signed_and_unsigned_agree(vec in any::<u64>(), pos in 0u32..64) {
        prop_assert_eq!(next_set_bit(vec, pos), next_set_bit(vec as i64, pos));
        prop_assert_eq!(next_unset_bit(vec, pos), next_unset_bit(vec as i64, pos));
    }

    #[test]
    fn prop_generic_matches_sentinel(vec in any::<i32>(), pos in 0..WORD_BITS) {
        let generic = next_set_bit(vec, pos as u32).map_or(NOT_FOUND, |i| i as i32);
        prop_assert_eq!(generic, next_set(vec, pos));
        prop_assert_eq!(next_unset_bit(vec, pos as u32) as i32, next_unset(vec, pos));
    }

    #[test]
    fn prop_spans_cover_set_bits(vec in any::<u64>()) {
        let runs: Vec<(u32, u32)> = spans(vec).collect();

        let mut rebuilt = 0u64;
        for &(start, end) in &runs {
            prop_assert!(start < end && end <= 64);
            for i in start..end {
                rebuilt |= 1 << i;
            }
            // Runs are maximal
            prop_assert!(!test_bit(vec, end));
            if start > 0 {
                prop_assert!(!test_bit(vec, start - 1));
            }
        }
        prop_assert_eq!(rebuilt, vec);

        for pair in runs.windows(2) {
            prop_assert!(pair[0].1 < pair[1].0, "runs must be ascending and separated");
        }
        prop_assert_eq!(span_count(vec) as usize, runs.len());
    }
}

#[test]
fn test_concrete_cases() {
    assert_eq!(next_set(0b0000_1000, 0), 3);
    assert_eq!(next_set(0b0000_1000, 4), -1);
    assert_eq!(next_set(0, 0), -1);
    assert_eq!(next_unset(0b1111_0111, 0), 3);
    assert_eq!(next_unset(0xFFFF_FFFFu32 as i32, 0), 32);
    assert_eq!(next_unset(0, 5), 5);
}
