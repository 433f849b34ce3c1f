// ============================================================================
// Floating-Point Storage Interface
// Capability contract a storage type must satisfy to back a TaggedFloat
// ============================================================================

use crate::numeric::{FloatSign, RoundingRule};
use num_traits::float::{FloatConst, TotalOrder};
use num_traits::{Float, FromPrimitive, PrimInt, Unsigned};
use std::fmt::{Debug, Display};

/// Binary floating-point capability set.
///
/// Arithmetic, classification, constants and conversions come from the
/// `num-traits` contracts. This trait adds the IEEE-754 field access that
/// `num-traits` does not cover. Implemented for `f32` and `f64` in
/// `crate::storage`.
///
/// # Semantics
/// - Arithmetic operators follow IEEE-754 (NaN propagation, signed zeros).
/// - `%` is the truncating remainder (same sign as the dividend).
/// - `exponent()` is `i32::MIN` for zeros and `i32::MAX` for infinities and NaNs.
/// - `significand_width()` is `-1` for zeros, infinities and NaNs.
pub trait FloatStorage:
    Float
    + FloatConst
    + FromPrimitive
    + TotalOrder
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Unsigned integer wide enough to hold the significand field.
    type RawSignificand: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static;

    /// Width of the biased exponent field in bits.
    const EXPONENT_BIT_COUNT: u32;
    /// Width of the stored (fractional) significand field in bits.
    const SIGNIFICAND_BIT_COUNT: u32;

    /// Quiet bit clear, highest payload bit set.
    const SIGNALING_NAN: Self;
    /// Smallest positive subnormal.
    const LEAST_NONZERO_MAGNITUDE: Self;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Exact conversion from an integer given as sign and magnitude.
    ///
    /// Returns `None` when the integer is not exactly representable.
    fn from_magnitude_exactly(negative: bool, magnitude: u128) -> Option<Self> {
        let significant_bits = if magnitude == 0 {
            0
        } else {
            u128::BITS - magnitude.leading_zeros() - magnitude.trailing_zeros()
        };
        if significant_bits > Self::SIGNIFICAND_BIT_COUNT + 1 {
            return None;
        }
        let value = Self::from_u128(magnitude)?;
        Some(if negative { -value } else { value })
    }

    /// Assemble a value from its IEEE-754 fields. Bits above each field's
    /// width are ignored.
    fn from_bit_patterns(
        sign: FloatSign,
        exponent_bit_pattern: u32,
        significand_bit_pattern: Self::RawSignificand,
    ) -> Self;

    /// `(sign == Minus ? -1 : 1) * significand * 2^exponent`.
    fn from_sign_exponent_significand(sign: FloatSign, exponent: i32, significand: Self) -> Self;

    // ========================================================================
    // Rounding and classification
    // ========================================================================

    /// Round to an integral value using `rule`.
    fn rounded(self, rule: RoundingRule) -> Self;

    fn is_signaling_nan(self) -> bool;

    /// Whether this is the canonical encoding of its value.
    fn is_canonical(self) -> bool;

    // ========================================================================
    // Decomposition
    // ========================================================================

    /// The sign bit, including for zeros and NaNs.
    #[inline]
    fn sign(self) -> FloatSign {
        if Float::is_sign_negative(self) {
            FloatSign::Minus
        } else {
            FloatSign::Plus
        }
    }

    fn exponent(self) -> i32;
    /// Significand in `[1, 2)` for finite nonzero values.
    fn significand(self) -> Self;
    fn exponent_bit_pattern(self) -> u32;
    fn significand_bit_pattern(self) -> Self::RawSignificand;
    fn significand_width(self) -> i32;
    /// Power of two with the same sign and exponent (`NaN` when not finite).
    fn binade(self) -> Self;
    /// Unit in the last place (`NaN` when not finite).
    fn ulp(self) -> Self;

    // ========================================================================
    // Arithmetic and position
    // ========================================================================

    /// IEEE-754 remainder: `self - q * other` where `q` is `self / other`
    /// rounded to nearest, ties to even.
    fn remainder(self, other: Self) -> Self;

    /// Least representable value that compares greater than `self`.
    fn next_up(self) -> Self;

    /// Greatest representable value that compares less than `self`.
    fn next_down(self) -> Self;
}

/// Integer source accepted by exact floating-point construction.
pub trait BinaryInteger: Copy + Debug {
    /// Split into `(is_negative, magnitude)`.
    fn sign_and_magnitude(self) -> (bool, u128);
}
