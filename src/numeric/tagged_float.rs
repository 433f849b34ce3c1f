// ============================================================================
// Tagged Floating-Point Value
// Binary floating-point storage carrying a compile-time unit tag
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::ieee::{FloatSign, RoundingRule};
use crate::domain::unit_name;
use crate::interfaces::{BinaryInteger, FloatStorage};
use num_traits::float::TotalOrder;
use num_traits::{AsPrimitive, Float, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::num::FpCategory;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Floating-point value of storage `S` tagged with unit `U`.
///
/// The tag exists only in the type: the layout is exactly that of `S`, and
/// every operation forwards to `S` unchanged. Two values can only be combined
/// when both `S` and `U` agree.
///
/// # Example
/// ```rust
/// use tagged_numeric::declare_units;
/// use tagged_numeric::numeric::TaggedFloat;
///
/// declare_units!(Celsius);
/// type Temperature = TaggedFloat<f64, Celsius>;
///
/// let hot = Temperature::new(1.0) / Temperature::new(0.0);
/// assert!(hot.is_infinite());
/// assert_eq!(format!("{:?}", Temperature::new(21.5)), "TaggedFloat(21.5, unit: Celsius)");
/// ```
#[repr(transparent)]
pub struct TaggedFloat<S, U> {
    content: S,
    _unit: PhantomData<fn() -> U>,
}

impl<S: FloatStorage, U> TaggedFloat<S, U> {
    /// Width of the exponent field of `S`.
    pub const EXPONENT_BIT_COUNT: u32 = S::EXPONENT_BIT_COUNT;

    /// Width of the stored significand field of `S`.
    pub const SIGNIFICAND_BIT_COUNT: u32 = S::SIGNIFICAND_BIT_COUNT;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Tag a storage value.
    #[inline]
    pub const fn new(content: S) -> Self {
        Self {
            content,
            _unit: PhantomData,
        }
    }

    /// Tag a storage value. Same as [`TaggedFloat::new`].
    #[inline]
    pub const fn from_storage(content: S) -> Self {
        Self::new(content)
    }

    /// Convert from `f32` with an `as` cast (rounds when narrowing).
    #[inline]
    pub fn from_f32(value: f32) -> Self
    where
        f32: AsPrimitive<S>,
    {
        Self::new(value.as_())
    }

    /// Convert from `f64` with an `as` cast (rounds when narrowing).
    #[inline]
    pub fn from_f64(value: f64) -> Self
    where
        f64: AsPrimitive<S>,
    {
        Self::new(value.as_())
    }

    /// Convert from `i64`, rounding to nearest when not representable.
    #[inline]
    pub fn from_i64(value: i64) -> Self
    where
        i64: AsPrimitive<S>,
    {
        Self::new(value.as_())
    }

    /// Convert from `u64`, rounding to nearest when not representable.
    #[inline]
    pub fn from_u64(value: u64) -> Self
    where
        u64: AsPrimitive<S>,
    {
        Self::new(value.as_())
    }

    /// Convert from `isize`, rounding to nearest when not representable.
    #[inline]
    pub fn from_isize(value: isize) -> Self
    where
        isize: AsPrimitive<S>,
    {
        Self::new(value.as_())
    }

    /// Convert from `usize`, rounding to nearest when not representable.
    #[inline]
    pub fn from_usize(value: usize) -> Self
    where
        usize: AsPrimitive<S>,
    {
        Self::new(value.as_())
    }

    /// Exact conversion from any primitive integer.
    ///
    /// Returns `None` exactly when the storage cannot represent `source`
    /// without rounding.
    ///
    /// # Example
    /// ```rust
    /// use tagged_numeric::numeric::TaggedFloat;
    ///
    /// assert!(TaggedFloat::<f32, ()>::exactly(16_777_216u32).is_some());
    /// assert!(TaggedFloat::<f32, ()>::exactly(16_777_217u32).is_none());
    /// ```
    #[inline]
    pub fn exactly<T: BinaryInteger>(source: T) -> Option<Self> {
        let (negative, magnitude) = source.sign_and_magnitude();
        S::from_magnitude_exactly(negative, magnitude).map(Self::new)
    }

    /// Exact conversion reporting why it failed.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if the integer is not exactly representable.
    pub fn try_exactly<T: BinaryInteger>(source: T) -> NumericResult<Self> {
        Self::exactly(source).ok_or_else(|| {
            tracing::trace!(?source, unit = unit_name::<U>(), "integer not exactly representable");
            NumericError::PrecisionLoss
        })
    }

    /// Assemble a value from raw IEEE-754 fields.
    #[inline]
    pub fn from_bit_patterns(
        sign: FloatSign,
        exponent_bit_pattern: u32,
        significand_bit_pattern: S::RawSignificand,
    ) -> Self {
        Self::new(S::from_bit_patterns(
            sign,
            exponent_bit_pattern,
            significand_bit_pattern,
        ))
    }

    /// `(sign == Minus ? -1 : 1) * significand * 2^exponent`.
    #[inline]
    pub fn from_sign_exponent_significand(
        sign: FloatSign,
        exponent: i32,
        significand: Self,
    ) -> Self {
        Self::new(S::from_sign_exponent_significand(
            sign,
            exponent,
            significand.content,
        ))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The untagged storage value.
    #[inline]
    pub fn get(self) -> S {
        self.content
    }

    /// Consume the wrapper and return the storage value.
    #[inline]
    pub fn into_inner(self) -> S {
        self.content
    }

    // ========================================================================
    // Special Values
    // ========================================================================

    /// Positive zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(S::zero())
    }

    /// A quiet NaN.
    #[inline]
    pub fn nan() -> Self {
        Self::new(S::nan())
    }

    /// A signaling NaN.
    #[inline]
    pub fn signaling_nan() -> Self {
        Self::new(S::SIGNALING_NAN)
    }

    /// Positive infinity.
    #[inline]
    pub fn infinity() -> Self {
        Self::new(S::infinity())
    }

    /// Largest finite value.
    #[inline]
    pub fn greatest_finite_magnitude() -> Self {
        Self::new(<S as Float>::max_value())
    }

    /// The storage's closest approximation of π.
    #[inline]
    pub fn pi() -> Self {
        Self::new(S::PI())
    }

    /// Smallest positive normal value.
    #[inline]
    pub fn least_normal_magnitude() -> Self {
        Self::new(S::min_positive_value())
    }

    /// Smallest positive subnormal value.
    #[inline]
    pub fn least_nonzero_magnitude() -> Self {
        Self::new(S::LEAST_NONZERO_MAGNITUDE)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round in place to an integral value.
    #[inline]
    pub fn round(&mut self, rule: RoundingRule) {
        self.content = self.content.rounded(rule);
    }

    /// Integral value chosen by `rule`.
    #[inline]
    pub fn rounded(self, rule: RoundingRule) -> Self {
        Self::new(self.content.rounded(rule))
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Finite, nonzero and not subnormal.
    #[inline]
    pub fn is_normal(self) -> bool {
        Float::is_normal(self.content)
    }

    /// Neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        Float::is_finite(self.content)
    }

    /// Either signed zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        Zero::is_zero(&self.content)
    }

    /// Nonzero with magnitude below `least_normal_magnitude`.
    #[inline]
    pub fn is_subnormal(self) -> bool {
        Float::classify(self.content) == FpCategory::Subnormal
    }

    /// Either signed infinity.
    #[inline]
    pub fn is_infinite(self) -> bool {
        Float::is_infinite(self.content)
    }

    /// Quiet or signaling NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        Float::is_nan(self.content)
    }

    /// NaN with the quiet bit clear.
    #[inline]
    pub fn is_signaling_nan(self) -> bool {
        self.content.is_signaling_nan()
    }

    /// Whether this is the canonical encoding of its value.
    #[inline]
    pub fn is_canonical(self) -> bool {
        self.content.is_canonical()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// IEEE equality: NaN is unequal to everything, `-0 == +0`.
    #[inline]
    pub fn is_equal(self, other: Self) -> bool {
        self.content == other.content
    }

    /// IEEE less-than; false whenever either side is NaN.
    #[inline]
    pub fn is_less(self, other: Self) -> bool {
        self.content < other.content
    }

    /// IEEE less-or-equal; false whenever either side is NaN.
    #[inline]
    pub fn is_less_or_equal(self, other: Self) -> bool {
        self.content <= other.content
    }

    /// IEEE-754 totalOrder: orders NaNs and signed zeros too.
    #[inline]
    pub fn total_order(&self, other: &Self) -> Ordering {
        TotalOrder::total_cmp(&self.content, &other.content)
    }

    /// The totalOrder predicate: `self` orders before or equal to `other`.
    ///
    /// `-0` is below `+0`, and positive NaNs are above positive infinity.
    #[inline]
    pub fn is_totally_ordered_below(self, other: Self) -> bool {
        self.total_order(&other) != Ordering::Greater
    }

    /// Smaller operand; a NaN operand yields the other one.
    #[inline]
    pub fn minimum(self, other: Self) -> Self {
        Self::new(Float::min(self.content, other.content))
    }

    /// Larger operand; a NaN operand yields the other one.
    #[inline]
    pub fn maximum(self, other: Self) -> Self {
        Self::new(Float::max(self.content, other.content))
    }

    // ========================================================================
    // Decomposition
    // ========================================================================

    /// The sign bit, including for zeros and NaNs.
    #[inline]
    pub fn sign(self) -> FloatSign {
        self.content.sign()
    }

    /// Unbiased exponent: `i32::MIN` for zeros, `i32::MAX` when not finite.
    #[inline]
    pub fn exponent(self) -> i32 {
        self.content.exponent()
    }

    /// Significand in `[1, 2)` for finite nonzero values.
    #[inline]
    pub fn significand(self) -> Self {
        Self::new(self.content.significand())
    }

    /// Raw biased exponent field.
    #[inline]
    pub fn exponent_bit_pattern(self) -> u32 {
        self.content.exponent_bit_pattern()
    }

    /// Raw stored significand field.
    #[inline]
    pub fn significand_bit_pattern(self) -> S::RawSignificand {
        self.content.significand_bit_pattern()
    }

    /// Number of fractional significand bits in use; `-1` for zero, infinity and NaN.
    #[inline]
    pub fn significand_width(self) -> i32 {
        self.content.significand_width()
    }

    /// Signed power of two with the same exponent.
    #[inline]
    pub fn binade(self) -> Self {
        Self::new(self.content.binade())
    }

    /// Unit in the last place.
    #[inline]
    pub fn ulp(self) -> Self {
        Self::new(self.content.ulp())
    }

    /// Absolute value as plain storage.
    #[inline]
    pub fn magnitude(self) -> S {
        Float::abs(self.content)
    }

    // ========================================================================
    // In-place Arithmetic
    // ========================================================================

    /// Replace `self` with the IEEE remainder of `self / other`.
    #[inline]
    pub fn form_remainder(&mut self, other: Self) {
        self.content = self.content.remainder(other.content);
    }

    /// Replace `self` with the truncating remainder of `self / other`.
    #[inline]
    pub fn form_truncating_remainder(&mut self, other: Self) {
        self.content = self.content % other.content;
    }

    /// Replace `self` with its square root.
    #[inline]
    pub fn form_square_root(&mut self) {
        self.content = Float::sqrt(self.content);
    }

    /// `self += lhs * rhs` with a single rounding.
    #[inline]
    pub fn add_product(&mut self, lhs: Self, rhs: Self) {
        self.content = Float::mul_add(lhs.content, rhs.content, self.content);
    }

    #[inline]
    pub fn remainder(mut self, other: Self) -> Self {
        self.form_remainder(other);
        self
    }

    #[inline]
    pub fn truncating_remainder(mut self, other: Self) -> Self {
        self.form_truncating_remainder(other);
        self
    }

    #[inline]
    pub fn square_root(mut self) -> Self {
        self.form_square_root();
        self
    }

    #[inline]
    pub fn adding_product(mut self, lhs: Self, rhs: Self) -> Self {
        self.add_product(lhs, rhs);
        self
    }

    // ========================================================================
    // Sequence Position
    // ========================================================================

    /// `other - self` as plain storage; a distance carries no unit.
    #[inline]
    pub fn distance_to(self, other: Self) -> S {
        other.content - self.content
    }

    /// `self + n`.
    #[inline]
    pub fn advanced_by(self, n: S) -> Self {
        Self::new(self.content + n)
    }

    /// Least value that compares greater than `self`.
    #[inline]
    pub fn next_up(self) -> Self {
        Self::new(self.content.next_up())
    }

    /// Greatest value that compares less than `self`.
    #[inline]
    pub fn next_down(self) -> Self {
        Self::new(self.content.next_down())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<S: Copy, U> Clone for TaggedFloat<S, U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, U> Copy for TaggedFloat<S, U> {}

impl<S: FloatStorage, U> Default for TaggedFloat<S, U> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: FloatStorage, U> PartialEq for TaggedFloat<S, U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl<S: FloatStorage, U> PartialOrd for TaggedFloat<S, U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.content.partial_cmp(&other.content)
    }
}

impl<S: FloatStorage, U> Neg for TaggedFloat<S, U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.content)
    }
}

macro_rules! impl_float_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<S: FloatStorage, U> $trait_name for TaggedFloat<S, U> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.content $op rhs.content)
            }
        }

        impl<S: FloatStorage, U> $assign_trait for TaggedFloat<S, U> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_float_op!(Add, add, AddAssign, add_assign, +);
impl_float_op!(Sub, sub, SubAssign, sub_assign, -);
impl_float_op!(Mul, mul, MulAssign, mul_assign, *);
impl_float_op!(Div, div, DivAssign, div_assign, /);
impl_float_op!(Rem, rem, RemAssign, rem_assign, %);

impl<S: FloatStorage, U> Sum for TaggedFloat<S, U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_lossless {
    ($($source:ty),*) => {
        $(
            impl<S, U> From<$source> for TaggedFloat<S, U>
            where
                S: FloatStorage + From<$source>,
            {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::new(value.into())
                }
            }
        )*
    };
}

impl_from_lossless!(i8, u8, i16, u16, i32, u32, f32);

// ============================================================================
// Display and Debug
// ============================================================================

impl<S: FloatStorage, U> fmt::Debug for TaggedFloat<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaggedFloat({:?}, unit: {})", self.content, unit_name::<U>())
    }
}

impl<S: FloatStorage, U> fmt::Display for TaggedFloat<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content, f)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declare_units;

    declare_units!(Celsius, Meters);

    type Temp = TaggedFloat<f64, Celsius>;
    type Length32 = TaggedFloat<f32, Meters>;

    #[test]
    fn test_layout_matches_storage() {
        assert_eq!(std::mem::size_of::<Temp>(), std::mem::size_of::<f64>());
        assert_eq!(std::mem::size_of::<Length32>(), std::mem::size_of::<f32>());
        assert_eq!(std::mem::align_of::<Temp>(), std::mem::align_of::<f64>());
    }

    #[test]
    fn test_integer_construction() {
        assert_eq!(Temp::from(-7i8).get(), -7.0);
        assert_eq!(Temp::from(u32::MAX).get(), u32::MAX as f64);
        assert_eq!(Length32::from(u16::MAX).get(), 65535.0);
        assert_eq!(Temp::from_i64(i64::MIN).get(), -9.223372036854775808e18);
        assert_eq!(Temp::from_u64(1 << 53).get(), 9_007_199_254_740_992.0);
        assert_eq!(Temp::from_usize(42).get(), 42.0);
        assert_eq!(Temp::from_isize(-42).get(), -42.0);
    }

    #[test]
    fn test_float_construction() {
        assert_eq!(Temp::from(0.1f32).get(), 0.1f32 as f64);
        assert_eq!(Length32::from_f64(0.1).get(), 0.1f32);
        assert_eq!(Length32::from_f64(1e300).get(), f32::INFINITY);
        assert_eq!(Temp::from_f32(2.5).get(), 2.5);
    }

    #[test]
    fn test_exactly() {
        assert_eq!(Length32::exactly(16_777_216i64).map(Length32::get), Some(16_777_216.0));
        assert_eq!(Length32::exactly(16_777_217i64), None);
        assert_eq!(Length32::exactly(-16_777_217i32), None);
        assert_eq!(Temp::exactly(u64::MAX), None);
        assert_eq!(Temp::exactly(1u64 << 63).map(Temp::get), Some(9.223372036854775808e18));
        assert_eq!(Temp::exactly(0u8), Some(Temp::zero()));
    }

    #[test]
    fn test_try_exactly() {
        assert_eq!(Length32::try_exactly(16_777_217u32), Err(NumericError::PrecisionLoss));
        assert_eq!(Length32::try_exactly(3u8).map(Length32::get), Ok(3.0));
    }

    #[test]
    fn test_arithmetic_forwarding() {
        let a = Temp::new(1.5);
        let b = Temp::new(-0.25);
        assert_eq!((a + b).get(), 1.25);
        assert_eq!((a - b).get(), 1.75);
        assert_eq!((a * b).get(), -0.375);
        assert_eq!((a / b).get(), -6.0);
        assert_eq!((Temp::new(7.5) % Temp::new(2.0)).get(), 1.5);
        assert_eq!((-a).get(), -1.5);
    }

    #[test]
    fn test_compound_assignment() {
        let mut t = Temp::new(10.0);
        t += Temp::new(2.0);
        assert_eq!(t.get(), 12.0);
        t -= Temp::new(4.0);
        assert_eq!(t.get(), 8.0);
        t *= Temp::new(0.5);
        assert_eq!(t.get(), 4.0);
        t /= Temp::new(8.0);
        assert_eq!(t.get(), 0.5);
        t %= Temp::new(0.3);
        assert_eq!(t.get(), 0.5 % 0.3);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        let result = Temp::new(1.0) / Temp::new(0.0);
        assert!(result.is_infinite());
        assert!(!result.is_nan());
        assert_eq!(result.sign(), FloatSign::Plus);
        assert_eq!(result, Temp::infinity());
    }

    #[test]
    fn test_nan_never_equals_itself() {
        let nan = Temp::nan();
        assert!(!nan.is_equal(nan));
        assert!(!nan.is_less(nan));
        assert!(!nan.is_less_or_equal(nan));
        assert_ne!(nan, nan);
        assert_eq!(nan.partial_cmp(&Temp::new(0.0)), None);
    }

    #[test]
    fn test_signed_zero_comparison() {
        let positive = Temp::new(0.0);
        let negative = Temp::new(-0.0);
        assert!(positive.is_equal(negative));
        assert_eq!(negative.sign(), FloatSign::Minus);
        assert_eq!(negative.total_order(&positive), Ordering::Less);
    }

    #[test]
    fn test_totally_ordered_below() {
        let negative_zero = Temp::new(-0.0);
        let positive_zero = Temp::new(0.0);
        assert!(negative_zero.is_totally_ordered_below(positive_zero));
        assert!(!positive_zero.is_totally_ordered_below(negative_zero));
        assert!(positive_zero.is_totally_ordered_below(positive_zero));

        // Positive NaN sorts above infinity, negative NaN below negative infinity
        assert!(Temp::infinity().is_totally_ordered_below(Temp::nan()));
        assert!(!Temp::nan().is_totally_ordered_below(Temp::infinity()));
        assert!((-Temp::nan()).is_totally_ordered_below(-Temp::infinity()));
        assert!(Temp::new(1.0).is_totally_ordered_below(Temp::new(2.0)));
    }

    #[test]
    fn test_special_values() {
        assert!(Temp::nan().is_nan());
        assert!(!Temp::nan().is_signaling_nan());
        assert!(Temp::signaling_nan().is_signaling_nan());
        assert_eq!(Temp::greatest_finite_magnitude().get(), f64::MAX);
        assert_eq!(Temp::pi().get(), std::f64::consts::PI);
        assert_eq!(Temp::least_normal_magnitude().get(), f64::MIN_POSITIVE);
        assert!(Temp::least_nonzero_magnitude().is_subnormal());
        assert_eq!(Length32::least_nonzero_magnitude().get(), f32::from_bits(1));
        assert!(Temp::zero().is_zero());
    }

    #[test]
    fn test_classification() {
        assert!(Temp::new(1.0).is_normal());
        assert!(Temp::new(1.0).is_finite());
        assert!(Temp::new(1.0).is_canonical());
        assert!(!Temp::infinity().is_finite());
        assert!(Temp::new(1e-310).is_subnormal());
        assert!(!Temp::new(1e-310).is_normal());
    }

    #[test]
    fn test_round_in_place() {
        let mut t = Temp::new(-2.5);
        t.round(RoundingRule::ToNearestOrEven);
        assert_eq!(t.get(), -2.0);

        let mut t = Temp::new(-2.5);
        t.round(RoundingRule::ToNearestOrAwayFromZero);
        assert_eq!(t.get(), -3.0);

        assert_eq!(Temp::new(2.7).rounded(RoundingRule::TowardZero).get(), 2.0);
        assert_eq!(Temp::new(2.2).rounded(RoundingRule::Up).get(), 3.0);
        assert_eq!(Temp::new(2.7).rounded(RoundingRule::Down).get(), 2.0);
    }

    #[test]
    fn test_decomposition() {
        let t = Temp::new(-12.0);
        assert_eq!(t.sign(), FloatSign::Minus);
        assert_eq!(t.exponent(), 3);
        assert_eq!(t.significand(), Temp::new(1.5));
        assert_eq!(t.exponent_bit_pattern(), 1026);
        assert_eq!(t.significand_bit_pattern(), 1 << 51);
        assert_eq!(t.significand_width(), 1);
        assert_eq!(t.binade(), Temp::new(-8.0));
        assert_eq!(t.magnitude(), 12.0);
        assert_eq!(Temp::new(1.0).ulp().get(), f64::EPSILON);
        assert_eq!(Temp::EXPONENT_BIT_COUNT, 11);
        assert_eq!(Temp::SIGNIFICAND_BIT_COUNT, 52);
        assert_eq!(Length32::SIGNIFICAND_BIT_COUNT, 23);
    }

    #[test]
    fn test_recomposition() {
        let t = Temp::new(-0.3);
        let rebuilt = Temp::from_sign_exponent_significand(t.sign(), t.exponent(), t.significand());
        assert_eq!(rebuilt.get().to_bits(), t.get().to_bits());

        let from_fields = Temp::from_bit_patterns(
            t.sign(),
            t.exponent_bit_pattern(),
            t.significand_bit_pattern(),
        );
        assert_eq!(from_fields.get().to_bits(), t.get().to_bits());
    }

    #[test]
    fn test_negative_significand_flips_sign() {
        let value = Temp::from_sign_exponent_significand(FloatSign::Minus, 2, Temp::new(-1.5));
        assert_eq!(value.get(), 6.0);
    }

    #[test]
    fn test_in_place_operations() {
        let mut t = Temp::new(5.0);
        t.form_remainder(Temp::new(3.0));
        assert_eq!(t.get(), -1.0);

        let mut t = Temp::new(5.0);
        t.form_truncating_remainder(Temp::new(3.0));
        assert_eq!(t.get(), 2.0);

        let mut t = Temp::new(16.0);
        t.form_square_root();
        assert_eq!(t.get(), 4.0);

        let mut t = Temp::new(1.0);
        t.add_product(Temp::new(2.0), Temp::new(3.0));
        assert_eq!(t.get(), 7.0);

        assert!(Temp::new(-1.0).square_root().is_nan());
        assert_eq!(Temp::new(-5.0).remainder(Temp::new(3.0)).get(), 1.0);
        assert_eq!(Temp::new(-5.0).truncating_remainder(Temp::new(3.0)).get(), -2.0);
        assert_eq!(Temp::new(0.5).adding_product(Temp::new(0.5), Temp::new(2.0)).get(), 1.5);
    }

    #[test]
    fn test_sequence_position() {
        let a = Temp::new(1.0);
        let b = Temp::new(3.5);
        let distance: f64 = a.distance_to(b);
        assert_eq!(distance, 2.5);
        assert_eq!(a.advanced_by(distance), b);
        assert_eq!(a.next_up().get(), 1.0 + f64::EPSILON);
        assert_eq!(a.next_up().next_down(), a);
        assert_eq!(Temp::new(0.0).next_up(), Temp::least_nonzero_magnitude());
    }

    #[test]
    fn test_min_max_and_sum() {
        let a = Temp::new(1.0);
        let b = Temp::new(2.0);
        assert_eq!(a.minimum(b), a);
        assert_eq!(a.maximum(b), b);
        assert_eq!(a.minimum(Temp::nan()), a);

        let total: Temp = [1.0, 2.0, 3.5].into_iter().map(Temp::new).sum();
        assert_eq!(total.get(), 6.5);
        assert_eq!(Temp::default(), Temp::zero());
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", Temp::new(1.0)), "TaggedFloat(1.0, unit: Celsius)");
        assert_eq!(format!("{:?}", Length32::new(-0.5)), "TaggedFloat(-0.5, unit: Meters)");
        assert_eq!(Temp::new(21.5).to_string(), "21.5");
        assert_eq!(format!("{:.2}", Temp::pi()), "3.14");
    }
}
