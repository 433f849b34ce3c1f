// ============================================================================
// Tagged Unsigned Integer
// Fixed-width unsigned storage carrying a compile-time unit tag
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::reporting::{FullWidth, QuotientAndRemainder, ReportingOverflow};
use crate::domain::unit_name;
use crate::interfaces::{FloatStorage, FullWidthStorage, UnsignedStorage, Words};
use num_traits::{Bounded, Float, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

/// Unsigned fixed-width integer of storage `S` tagged with unit `U`.
///
/// Layout is exactly that of `S`. Arithmetic forwards to `S`, so the plain
/// operators keep the storage overflow contract (a panic whenever overflow
/// checks are on) and the `*_reporting_overflow` methods never fail.
///
/// # Example
/// ```rust
/// use tagged_numeric::declare_units;
/// use tagged_numeric::numeric::TaggedUnsigned;
///
/// declare_units!(Meters);
/// type Distance = TaggedUnsigned<u8, Meters>;
///
/// let sum = Distance::new(200).adding_reporting_overflow(Distance::new(100));
/// assert_eq!(sum.partial_value, Distance::new(44));
/// assert!(sum.overflow);
/// ```
#[repr(transparent)]
pub struct TaggedUnsigned<S, U> {
    content: S,
    _unit: PhantomData<fn() -> U>,
}

impl<S: UnsignedStorage, U> TaggedUnsigned<S, U> {
    /// Width of the storage in bits.
    pub const BIT_WIDTH: u32 = S::BIT_WIDTH;

    // ========================================================================
    // Construction
    // ========================================================================

    #[inline]
    pub const fn new(content: S) -> Self {
        Self {
            content,
            _unit: PhantomData,
        }
    }

    #[inline]
    pub const fn from_storage(content: S) -> Self {
        Self::new(content)
    }

    /// Convert a float, truncating toward zero.
    ///
    /// # Panics
    /// If `source` is NaN, infinite, or out of range after truncation.
    pub fn from_float<F: FloatStorage>(source: F) -> Self {
        match Self::try_from_float(source) {
            Ok(value) => value,
            Err(err) => panic!(
                "{} cannot be converted to a {}-bit unsigned value: {}",
                source,
                S::BIT_WIDTH,
                err
            ),
        }
    }

    /// Convert a float, truncating toward zero.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN and infinities
    /// - `Overflow` if the truncated value is negative or too large
    pub fn try_from_float<F: FloatStorage>(source: F) -> NumericResult<Self> {
        if !Float::is_finite(source) {
            tracing::trace!(%source, unit = unit_name::<U>(), "non-finite float source");
            return Err(NumericError::InvalidInput);
        }
        num_traits::cast::<F, S>(source)
            .map(Self::new)
            .ok_or_else(|| {
                tracing::trace!(%source, bit_width = S::BIT_WIDTH, "float source out of range");
                NumericError::Overflow
            })
    }

    /// Keep the low `BIT_WIDTH` bits of `bits`.
    #[inline]
    pub fn from_truncating_bits(bits: u128) -> Self {
        Self::new(S::from_truncating_bits(bits))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::zero())
    }

    #[inline]
    pub fn min_value() -> Self {
        Self::new(<S as Bounded>::min_value())
    }

    #[inline]
    pub fn max_value() -> Self {
        Self::new(<S as Bounded>::max_value())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn get(self) -> S {
        self.content
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.content
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        Zero::is_zero(&self.content)
    }

    // ========================================================================
    // Overflow-reporting Arithmetic
    // ========================================================================

    #[inline]
    pub fn adding_reporting_overflow(self, rhs: Self) -> ReportingOverflow<Self> {
        let (partial, overflow) = self.content.overflowing_add(&rhs.content);
        ReportingOverflow::new(Self::new(partial), overflow)
    }

    #[inline]
    pub fn subtracting_reporting_overflow(self, rhs: Self) -> ReportingOverflow<Self> {
        let (partial, overflow) = self.content.overflowing_sub(&rhs.content);
        ReportingOverflow::new(Self::new(partial), overflow)
    }

    #[inline]
    pub fn multiplied_reporting_overflow(self, rhs: Self) -> ReportingOverflow<Self> {
        let (partial, overflow) = self.content.overflowing_mul(&rhs.content);
        ReportingOverflow::new(Self::new(partial), overflow)
    }

    /// Division by zero reports `(self, true)`.
    #[inline]
    pub fn divided_reporting_overflow(self, rhs: Self) -> ReportingOverflow<Self> {
        match self.content.checked_div(&rhs.content) {
            Some(quotient) => ReportingOverflow::new(Self::new(quotient), false),
            None => ReportingOverflow::new(self, true),
        }
    }

    /// Division by zero reports `(self, true)`.
    #[inline]
    pub fn remainder_reporting_overflow(self, rhs: Self) -> ReportingOverflow<Self> {
        match self.content.checked_rem(&rhs.content) {
            Some(remainder) => ReportingOverflow::new(Self::new(remainder), false),
            None => ReportingOverflow::new(self, true),
        }
    }

    // ========================================================================
    // Bits
    // ========================================================================

    #[inline]
    pub fn nonzero_bit_count(self) -> u32 {
        self.content.count_ones()
    }

    #[inline]
    pub fn leading_zero_bit_count(self) -> u32 {
        self.content.leading_zeros()
    }

    #[inline]
    pub fn trailing_zero_bit_count(self) -> u32 {
        self.content.trailing_zeros()
    }

    #[inline]
    pub fn byte_swapped(self) -> Self {
        Self::new(self.content.swap_bytes())
    }

    // ========================================================================
    // Byte Order
    // ========================================================================

    /// Big-endian representation (a no-op on big-endian targets).
    #[inline]
    pub fn to_be(self) -> Self {
        Self::new(self.content.to_be())
    }

    /// Little-endian representation (a no-op on little-endian targets).
    #[inline]
    pub fn to_le(self) -> Self {
        Self::new(self.content.to_le())
    }

    /// Reinterpret a big-endian value in native byte order.
    #[inline]
    pub fn from_be(value: Self) -> Self {
        Self::new(S::from_be(value.content))
    }

    /// Reinterpret a little-endian value in native byte order.
    #[inline]
    pub fn from_le(value: Self) -> Self {
        Self::new(S::from_le(value.content))
    }

    /// Machine words, least significant first.
    #[inline]
    pub fn words(self) -> Words {
        self.content.words()
    }

    /// The value as plain storage (unsigned values are their own magnitude).
    #[inline]
    pub fn magnitude(self) -> S {
        self.content
    }
}

impl<S: FullWidthStorage, U> TaggedUnsigned<S, U> {
    /// Double-width product; the low half is returned as plain storage.
    #[inline]
    pub fn multiplied_full_width(self, other: Self) -> FullWidth<Self, S> {
        let (high, low) = self.content.multiplied_full_width(other.content);
        FullWidth::new(Self::new(high), low)
    }

    /// Divide a double-width value by `self`.
    ///
    /// # Panics
    /// If `self` is zero or the quotient does not fit in `S`.
    pub fn dividing_full_width(self, dividend: FullWidth<Self, S>) -> QuotientAndRemainder<Self> {
        match self.checked_dividing_full_width(dividend) {
            Ok(result) => result,
            Err(err) => panic!("full-width division of {:?} failed: {}", self, err),
        }
    }

    /// Divide a double-width value by `self`, reporting failures.
    ///
    /// # Errors
    /// - `DivisionByZero` if `self` is zero
    /// - `Overflow` if the quotient does not fit in `S`
    pub fn checked_dividing_full_width(
        self,
        dividend: FullWidth<Self, S>,
    ) -> NumericResult<QuotientAndRemainder<Self>> {
        let (quotient, remainder) = self
            .content
            .dividing_full_width((dividend.high.content, dividend.low))
            .inspect_err(|err| {
                tracing::trace!(
                    divisor = %self.content,
                    high = %dividend.high.content,
                    low = %dividend.low,
                    %err,
                    "full-width division rejected"
                );
            })?;
        Ok(QuotientAndRemainder {
            quotient: Self::new(quotient),
            remainder: Self::new(remainder),
        })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<S: Copy, U> Clone for TaggedUnsigned<S, U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, U> Copy for TaggedUnsigned<S, U> {}

impl<S: UnsignedStorage, U> Default for TaggedUnsigned<S, U> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: UnsignedStorage, U> PartialEq for TaggedUnsigned<S, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl<S: UnsignedStorage, U> Eq for TaggedUnsigned<S, U> {}

impl<S: UnsignedStorage, U> PartialOrd for TaggedUnsigned<S, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: UnsignedStorage, U> Ord for TaggedUnsigned<S, U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.content.cmp(&other.content)
    }
}

impl<S: UnsignedStorage, U> Hash for TaggedUnsigned<S, U> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

impl<S: UnsignedStorage, U> From<S> for TaggedUnsigned<S, U> {
    #[inline]
    fn from(content: S) -> Self {
        Self::new(content)
    }
}

impl<S: UnsignedStorage, U> Not for TaggedUnsigned<S, U> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self::new(!self.content)
    }
}

macro_rules! impl_unsigned_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<S: UnsignedStorage, U> $trait_name for TaggedUnsigned<S, U> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.content $op rhs.content)
            }
        }

        impl<S: UnsignedStorage, U> $assign_trait for TaggedUnsigned<S, U> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_unsigned_op!(Add, add, AddAssign, add_assign, +);
impl_unsigned_op!(Sub, sub, SubAssign, sub_assign, -);
impl_unsigned_op!(Mul, mul, MulAssign, mul_assign, *);
impl_unsigned_op!(Div, div, DivAssign, div_assign, /);
impl_unsigned_op!(Rem, rem, RemAssign, rem_assign, %);
impl_unsigned_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_unsigned_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_unsigned_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

macro_rules! impl_unsigned_shift {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<S: UnsignedStorage, U> $trait_name<u32> for TaggedUnsigned<S, U> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: u32) -> Self::Output {
                Self::new(self.content $op rhs)
            }
        }

        impl<S: UnsignedStorage, U> $assign_trait<u32> for TaggedUnsigned<S, U> {
            #[inline]
            fn $assign_method(&mut self, rhs: u32) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_unsigned_shift!(Shl, shl, ShlAssign, shl_assign, <<);
impl_unsigned_shift!(Shr, shr, ShrAssign, shr_assign, >>);

// ============================================================================
// Display and Debug
// ============================================================================

impl<S: UnsignedStorage, U> fmt::Debug for TaggedUnsigned<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaggedUnsigned({:?}, unit: {})", self.content, unit_name::<U>())
    }
}

impl<S: UnsignedStorage, U> fmt::Display for TaggedUnsigned<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content, f)
    }
}

// ============================================================================
// Tests
// ============================================================================
