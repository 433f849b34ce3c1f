// ============================================================================
// Native Unsigned Storage
// UnsignedStorage and FullWidthStorage for u8..u128/usize
// ============================================================================

use crate::interfaces::{FullWidthStorage, UnsignedStorage, Words};
use crate::numeric::{NumericError, NumericResult};

macro_rules! impl_unsigned_storage {
    ($($t:ty),* $(,)?) => {
        $(
            impl UnsignedStorage for $t {
                const BIT_WIDTH: u32 = <$t>::BITS;

                #[inline]
                fn from_truncating_bits(bits: u128) -> Self {
                    bits as $t
                }

                fn words(self) -> Words {
                    let count = <$t>::BITS.div_ceil(usize::BITS);
                    let mut rest = self as u128;
                    let mut words = Words::new();
                    for _ in 0..count {
                        words.push(rest as usize);
                        rest >>= usize::BITS;
                    }
                    words
                }
            }
        )*
    };
}

impl_unsigned_storage!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_full_width {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl FullWidthStorage for $t {
                #[inline]
                fn multiplied_full_width(self, other: Self) -> (Self, Self) {
                    let product = (self as $wide) * (other as $wide);
                    ((product >> <$t>::BITS) as $t, product as $t)
                }

                fn dividing_full_width(
                    self,
                    dividend: (Self, Self),
                ) -> NumericResult<(Self, Self)> {
                    let (high, low) = dividend;
                    if self == 0 {
                        return Err(NumericError::DivisionByZero);
                    }
                    // The quotient fits exactly when the high half is below the divisor.
                    if high >= self {
                        return Err(NumericError::Overflow);
                    }
                    let wide = ((high as $wide) << <$t>::BITS) | (low as $wide);
                    let divisor = self as $wide;
                    Ok(((wide / divisor) as $t, (wide % divisor) as $t))
                }
            }
        )*
    };
}

impl_full_width!(
    u8 => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
    usize => u128,
);

const LOW_HALF: u128 = u64::MAX as u128;

// No wider primitive: multiply on 64-bit halves, divide one bit at a time.
impl FullWidthStorage for u128 {
    fn multiplied_full_width(self, other: Self) -> (Self, Self) {
        let (a_high, a_low) = (self >> 64, self & LOW_HALF);
        let (b_high, b_low) = (other >> 64, other & LOW_HALF);

        let low_low = a_low * b_low;
        let high_low = a_high * b_low;
        let low_high = a_low * b_high;
        let high_high = a_high * b_high;

        // Cannot overflow: at most 2 * (2^64 - 1) + (2^64 - 1)^2.
        let middle = (low_low >> 64) + (high_low & LOW_HALF) + low_high;
        let high = high_high + (high_low >> 64) + (middle >> 64);
        let low = (middle << 64) | (low_low & LOW_HALF);
        (high, low)
    }

    fn dividing_full_width(self, dividend: (Self, Self)) -> NumericResult<(Self, Self)> {
        let (high, low) = dividend;
        if self == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if high >= self {
            return Err(NumericError::Overflow);
        }
        // Invariant: remainder < self before each shift.
        let mut remainder = high;
        let mut quotient = 0u128;
        for bit in (0..u128::BITS).rev() {
            let carry = remainder >> 127;
            remainder = (remainder << 1) | ((low >> bit) & 1);
            quotient <<= 1;
            if carry == 1 || remainder >= self {
                remainder = remainder.wrapping_sub(self);
                quotient |= 1;
            }
        }
        Ok((quotient, remainder))
    }
}
