//! Yield functions of binarized LCFRS rules and the composition check.
//!
//! A yield function says how the spans of a rule's two children are
//! interleaved to form the spans of its parent. It is a sequence of
//! arguments, one per parent span; each argument is a sequence of
//! components, `0` for a span of the left child and `1` for a span of
//! the right child.
//!
//! # Encoding
//! Argument `x` is packed into `args[x]` (bit `n` = component `n`) and
//! its component count is kept in `lengths[x]`.
//!
//! ```text
//! ((0, 1), (1, 0, 1))  =>  args = [0b10, 0b101], lengths = [2, 3]
//! ```

mod concat;
mod error;

use alloc::vec::Vec;

use crate::constants::{ARG_BITS, LENGTH_BITS};

pub use error::YieldFunctionError;

/// Packed yield function of a binary rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct YieldFunction {
    args: Vec<u32>,
    lengths: Vec<u16>,
}

fn invalid(err: YieldFunctionError) -> YieldFunctionError {
    log::debug!("invalid yield function: {}", err);
    err
}

impl YieldFunction {
    /// Encode a yield function given as rows of `0`/`1` components.
    ///
    /// # Errors
    /// Fails if there are more than 16 arguments, an argument is empty or
    /// has more than 32 components, or a component is not `0` or `1`.
    ///
    /// # Example
    /// ```rust
    /// use bitscan::YieldFunction;
    ///
    /// let yf = YieldFunction::new(&[&[0u8, 1][..], &[1, 0, 1][..]]).unwrap();
    /// assert_eq!(yf.args(), &[0b10, 0b101]);
    /// assert_eq!(yf.lengths(), &[2, 3]);
    /// ```
    pub fn new<A: AsRef<[u8]>>(components: &[A]) -> Result<Self, YieldFunctionError> {
        if components.len() > LENGTH_BITS {
            return Err(invalid(YieldFunctionError::ArityTooHigh {
                arity: components.len(),
            }));
        }

        let mut args = Vec::with_capacity(components.len());
        let mut lengths = Vec::with_capacity(components.len());

        for (index, arg) in components.iter().enumerate() {
            let arg = arg.as_ref();
            if arg.is_empty() {
                return Err(invalid(YieldFunctionError::EmptyArgument { index }));
            }
            if arg.len() > ARG_BITS {
                return Err(invalid(YieldFunctionError::ArgumentTooLong {
                    index,
                    len: arg.len(),
                }));
            }

            let mut packed = 0u32;
            for (component, &value) in arg.iter().enumerate() {
                match value {
                    0 => {}
                    1 => packed |= 1 << component,
                    _ => {
                        return Err(invalid(YieldFunctionError::NonBinaryComponent {
                            index,
                            component,
                            value,
                        }))
                    }
                }
            }

            args.push(packed);
            lengths.push(arg.len() as u16);
        }

        Ok(Self { args, lengths })
    }

    /// Build from the packed form, validating it.
    ///
    /// # Errors
    /// Fails on mismatched lengths, the same limits as [`new`](Self::new),
    /// or bits set in `args[x]` at or past `lengths[x]`.
    pub fn from_raw(args: Vec<u32>, lengths: Vec<u16>) -> Result<Self, YieldFunctionError> {
        if args.len() != lengths.len() {
            return Err(invalid(YieldFunctionError::LengthMismatch {
                args: args.len(),
                lengths: lengths.len(),
            }));
        }
        if args.len() > LENGTH_BITS {
            return Err(invalid(YieldFunctionError::ArityTooHigh { arity: args.len() }));
        }

        for (index, (&arg, &len)) in args.iter().zip(&lengths).enumerate() {
            let len = len as usize;
            if len == 0 {
                return Err(invalid(YieldFunctionError::EmptyArgument { index }));
            }
            if len > ARG_BITS {
                return Err(invalid(YieldFunctionError::ArgumentTooLong { index, len }));
            }
            if len < ARG_BITS && arg >> len != 0 {
                return Err(invalid(YieldFunctionError::StrayBits { index }));
            }
        }

        Ok(Self { args, lengths })
    }

    /// Number of arguments (the fan-out of the rule's parent).
    #[inline]
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn args(&self) -> &[u32] {
        &self.args
    }

    #[inline]
    pub fn lengths(&self) -> &[u16] {
        &self.lengths
    }

    /// Component `n` of argument `x`: `0` (left) or `1` (right).
    ///
    /// Returns `None` if either index is out of range.
    #[inline]
    pub fn component(&self, x: usize, n: usize) -> Option<u8> {
        let len = *self.lengths.get(x)? as usize;
        if n >= len {
            return None;
        }
        Some(((self.args[x] >> n) & 1) as u8)
    }

    /// Decode back into rows of `0`/`1` components.
    pub fn to_components(&self) -> Vec<Vec<u8>> {
        self.args
            .iter()
            .zip(&self.lengths)
            .map(|(&arg, &len)| (0..len).map(|n| ((arg >> n) & 1) as u8).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_packs_components() {
        let yf = YieldFunction::new(&[vec![0u8, 1], vec![1, 0, 1]]).unwrap();
        assert_eq!(yf.arity(), 2);
        assert_eq!(yf.args(), &[0b10, 0b101]);
        assert_eq!(yf.lengths(), &[2, 3]);
    }

    #[test]
    fn test_to_components_inverts_new() {
        let rows = vec![vec![0u8, 1, 0], vec![1], vec![0, 0, 1, 1]];
        let yf = YieldFunction::new(&rows).unwrap();
        assert_eq!(yf.to_components(), rows);
    }

    #[test]
    fn test_component() {
        let yf = YieldFunction::new(&[vec![0u8, 1], vec![1]]).unwrap();
        assert_eq!(yf.component(0, 0), Some(0));
        assert_eq!(yf.component(0, 1), Some(1));
        assert_eq!(yf.component(1, 0), Some(1));
        assert_eq!(yf.component(0, 2), None);
        assert_eq!(yf.component(2, 0), None);
    }

    #[test]
    fn test_new_rejects_high_arity() {
        let rows = vec![vec![0u8]; LENGTH_BITS + 1];
        assert_eq!(
            YieldFunction::new(&rows),
            Err(YieldFunctionError::ArityTooHigh { arity: 17 })
        );

        let rows = vec![vec![0u8]; LENGTH_BITS];
        assert!(YieldFunction::new(&rows).is_ok());
    }

    #[test]
    fn test_new_rejects_long_argument() {
        let rows = vec![vec![0u8], vec![1u8; ARG_BITS + 1]];
        assert_eq!(
            YieldFunction::new(&rows),
            Err(YieldFunctionError::ArgumentTooLong { index: 1, len: 33 })
        );

        let rows = vec![vec![1u8; ARG_BITS]];
        let yf = YieldFunction::new(&rows).unwrap();
        assert_eq!(yf.args(), &[u32::MAX]);
    }

    #[test]
    fn test_new_rejects_empty_argument() {
        let rows: Vec<Vec<u8>> = vec![vec![0], vec![]];
        assert_eq!(
            YieldFunction::new(&rows),
            Err(YieldFunctionError::EmptyArgument { index: 1 })
        );
    }

    #[test]
    fn test_new_rejects_non_binary() {
        assert_eq!(
            YieldFunction::new(&[vec![0u8, 2]]),
            Err(YieldFunctionError::NonBinaryComponent {
                index: 0,
                component: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_from_raw() {
        let yf = YieldFunction::from_raw(vec![0b10, 0b101], vec![2, 3]).unwrap();
        assert_eq!(yf, YieldFunction::new(&[vec![0u8, 1], vec![1, 0, 1]]).unwrap());

        assert_eq!(
            YieldFunction::from_raw(vec![0b10], vec![2, 3]),
            Err(YieldFunctionError::LengthMismatch {
                args: 1,
                lengths: 2
            })
        );
        assert_eq!(
            YieldFunction::from_raw(vec![0b110], vec![2]),
            Err(YieldFunctionError::StrayBits { index: 0 })
        );
        assert_eq!(
            YieldFunction::from_raw(vec![0], vec![0]),
            Err(YieldFunctionError::EmptyArgument { index: 0 })
        );
        assert_eq!(
            YieldFunction::from_raw(vec![0], vec![33]),
            Err(YieldFunctionError::ArgumentTooLong { index: 0, len: 33 })
        );
        assert!(YieldFunction::from_raw(vec![u32::MAX], vec![32]).is_ok());
    }
}
