use crate::constants::{ARG_BITS, LENGTH_BITS};

/// Reasons a yield function cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldFunctionError {
    /// More arguments than lengths can be stored for.
    ArityTooHigh { arity: usize },
    /// An argument with no components.
    EmptyArgument { index: usize },
    /// An argument with more components than fit in its word.
    ArgumentTooLong { index: usize, len: usize },
    /// A component other than 0 (left child) or 1 (right child).
    NonBinaryComponent {
        index: usize,
        component: usize,
        value: u8,
    },
    /// Packed form with a different number of args and lengths.
    LengthMismatch { args: usize, lengths: usize },
    /// Packed argument with bits set past its declared length.
    StrayBits { index: usize },
}

impl core::fmt::Display for YieldFunctionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::ArityTooHigh { arity } => {
                write!(f, "arity {} too high (max {})", arity, LENGTH_BITS)
            }
            Self::EmptyArgument { index } => write!(f, "argument {} is empty", index),
            Self::ArgumentTooLong { index, len } => write!(
                f,
                "argument {} has {} components (max {})",
                index, len, ARG_BITS
            ),
            Self::NonBinaryComponent {
                index,
                component,
                value,
            } => write!(
                f,
                "non-binary element {} at argument {}, component {}",
                value, index, component
            ),
            Self::LengthMismatch { args, lengths } => {
                write!(f, "{} args but {} lengths", args, lengths)
            }
            Self::StrayBits { index } => {
                write!(f, "argument {} has bits set past its length", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for YieldFunctionError {}
