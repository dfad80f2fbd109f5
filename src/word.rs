//! Trait for fixed-width bit-vector words (i8..i128, u8..u128, isize, usize).

/// A primitive integer interpreted as a bit vector.
///
/// Bit 0 is the least significant bit. Signed types are always handled
/// through their unsigned counterpart, so a negative word (top bit set)
/// scans exactly like the unsigned word with the same bit pattern.
///
/// Every operation is total: positions at or beyond [`WIDTH`](Self::WIDTH)
/// read as zero, as if the word were zero-extended forever.
pub trait BitWord: Copy + Eq + Sized {
    /// Number of bits in the word.
    const WIDTH: u32;

    /// The all-zero word.
    const ZERO: Self;

    /// Logical (unsigned) right shift.
    ///
    /// # Returns
    /// The word shifted right by `pos` with zero fill, or [`ZERO`](Self::ZERO)
    /// when `pos >= WIDTH`.
    ///
    /// # Performance
    /// O(1) - single shift in native register size
    fn shr_logical(self, pos: u32) -> Self;

    /// Bitwise complement.
    fn complement(self) -> Self;

    /// Number of trailing zero bits; `WIDTH` for the zero word.
    ///
    /// # Performance
    /// O(1) - single CPU instruction (TZCNT)
    fn trailing_zeros(self) -> u32;

    /// Number of trailing one bits; `WIDTH` for the all-ones word.
    fn trailing_ones(self) -> u32;

    /// Number of set bits.
    ///
    /// # Performance
    /// O(1) - single CPU instruction (POPCNT)
    fn count_ones(self) -> u32;

    /// Whether no bit is set.
    #[inline(always)]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Whether bit `pos` is set. Always `false` for `pos >= WIDTH`.
    fn bit(self, pos: u32) -> bool;
}

macro_rules! impl_bit_word {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl BitWord for $ty {
                const WIDTH: u32 = <$ty>::BITS;
                const ZERO: Self = 0;

                #[inline(always)]
                fn shr_logical(self, pos: u32) -> Self {
                    match (self as $unsigned).checked_shr(pos) {
                        Some(shifted) => shifted as $ty,
                        None => 0,
                    }
                }

                #[inline(always)]
                fn complement(self) -> Self {
                    !self
                }

                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    (self as $unsigned).trailing_zeros()
                }

                #[inline(always)]
                fn trailing_ones(self) -> u32 {
                    (self as $unsigned).trailing_ones()
                }

                #[inline(always)]
                fn count_ones(self) -> u32 {
                    (self as $unsigned).count_ones()
                }

                #[inline(always)]
                fn bit(self, pos: u32) -> bool {
                    self.shr_logical(pos) & 1 != 0
                }
            }
        )*
    };
}

impl_bit_word! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}
