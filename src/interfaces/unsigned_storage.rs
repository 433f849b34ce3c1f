// ============================================================================
// Unsigned Storage Interface
// Capability contract a storage type must satisfy to back a TaggedUnsigned
// ============================================================================

use crate::numeric::NumericResult;
use num_traits::ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub};
use num_traits::{CheckedDiv, CheckedRem, PrimInt, Unsigned};
use smallvec::SmallVec;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Shl, Shr};

/// Machine words of an integer, least significant first.
///
/// Inline for every storage up to 128 bits on 64-bit targets.
pub type Words = SmallVec<[usize; 2]>;

/// Unsigned fixed-width integer capability set.
///
/// The operators follow the storage's own overflow contract; for the native
/// primitives that means a panic whenever overflow checks are enabled and a
/// panic on division by zero.
pub trait UnsignedStorage:
    PrimInt
    + Unsigned
    + OverflowingAdd
    + OverflowingSub
    + OverflowingMul
    + CheckedDiv
    + CheckedRem
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    const BIT_WIDTH: u32;

    /// Keep the low `BIT_WIDTH` bits of `bits`.
    fn from_truncating_bits(bits: u128) -> Self;

    /// Machine words, least significant first.
    fn words(self) -> Words;
}

/// Double-width multiply and divide.
pub trait FullWidthStorage: UnsignedStorage {
    /// Full product as `(high, low)`.
    fn multiplied_full_width(self, other: Self) -> (Self, Self);

    /// Divide the double-width `(high, low)` by `self`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `self` is zero
    /// - `Overflow` if the quotient does not fit in `Self`
    fn dividing_full_width(self, dividend: (Self, Self)) -> NumericResult<(Self, Self)>;
}
