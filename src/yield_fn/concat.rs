//! Linear-time composition check for two children's bit vectors.
//!
//! Instead of materializing the parent's spans, both vectors are walked in
//! step with the yield function. Each component consumes exactly one span
//! of the child it names; the spans must appear in the order the
//! components list them, with adjacent components of one argument abutting
//! and the last component of an argument followed by a gap.

use crate::bits::{next_set_bit, next_unset_bit, test_bit};
use crate::chart_item::ChartItem;
use crate::word::BitWord;
use crate::yield_fn::YieldFunction;

/// Consume one span of `own`, starting at `*own_pos`.
///
/// On success `*own_pos` moves to the start of `own`'s next span.
#[inline]
fn consume_span<W: BitWord>(
    own: W,
    own_pos: &mut Option<u32>,
    other: W,
    other_pos: Option<u32>,
    last: bool,
) -> Result<(), &'static str> {
    let Some(start) = *own_pos else {
        return Err("child has no spans left");
    };
    if matches!(other_pos, Some(other_start) if other_start <= start) {
        return Err("other child's span should come first");
    }

    let end = next_unset_bit(own, start);
    if matches!(other_pos, Some(other_start) if other_start < end) {
        return Err("spans overlap");
    }

    if last {
        if test_bit(other, end) {
            return Err("argument is not followed by a gap");
        }
    } else if !test_bit(other, end) {
        return Err("gap inside argument");
    }

    *own_pos = next_set_bit(own, end);
    Ok(())
}

impl YieldFunction {
    /// Check whether `lvec` and `rvec` compose under this yield function.
    ///
    /// `lvec` holds the left child's positions and `rvec` the right
    /// child's. The check succeeds iff, reading positions left to right,
    /// the children's spans occur exactly in the order the components
    /// name them, each argument is contiguous, arguments are separated by
    /// gaps, and no span of either child is left over.
    ///
    /// # Performance
    /// O(number of components) - one TZCNT per span boundary
    ///
    /// # Example
    /// ```rust
    /// use bitscan::YieldFunction;
    ///
    /// // VP -> V NP with a discontinuous VP: (V NP, V)
    /// let yf = YieldFunction::new(&[&[0u8, 1][..], &[0][..]]).unwrap();
    /// assert!(yf.concat(0b1_0001u32, 0b0_0110u32)); // V NP NP _ V
    /// assert!(!yf.concat(0b0_0011u32, 0b0_1100u32));
    /// ```
    pub fn concat<W: BitWord>(&self, lvec: W, rvec: W) -> bool {
        let mut lpos = next_set_bit(lvec, 0);
        let mut rpos = next_set_bit(rvec, 0);

        for (x, (&arg, &len)) in self.args.iter().zip(&self.lengths).enumerate() {
            let last = len as u32 - 1;
            for n in 0..len as u32 {
                let step = if test_bit(arg, n) {
                    consume_span(rvec, &mut rpos, lvec, lpos, n == last)
                } else {
                    consume_span(lvec, &mut lpos, rvec, rpos, n == last)
                };
                if let Err(reason) = step {
                    log::trace!("concat rejected at argument {}, component {}: {}", x, n, reason);
                    return false;
                }
            }
        }

        if lpos.is_some() || rpos.is_some() {
            log::trace!("concat rejected: spans left over");
            return false;
        }

        true
    }

    /// Combine two chart items into an item labeled `lhs`.
    ///
    /// Returns `None` if the items overlap or their spans do not compose
    /// under this yield function.
    #[inline]
    pub fn compose(&self, lhs: u32, left: &ChartItem, right: &ChartItem) -> Option<ChartItem> {
        if left.vec & right.vec != 0 || !self.concat(left.vec, right.vec) {
            return None;
        }
        Some(ChartItem::new(lhs, left.vec ^ right.vec))
    }
}
