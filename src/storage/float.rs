// ============================================================================
// Native Floating-Point Storage
// FloatStorage for f32 and f64, plus BinaryInteger for the integer primitives
// ============================================================================
//
// Arithmetic, classification, constants and ordering come from num-traits.
// The IEEE-754 operations neither std nor num-traits expose (field assembly,
// exponent/significand decomposition, scaling by 2^n, IEEE remainder) are
// computed on the bit representation here.

use crate::interfaces::{BinaryInteger, FloatStorage};
use crate::numeric::{FloatSign, RoundingRule};

macro_rules! impl_float_storage {
    (
        $t:ident,
        $bits:ident,
        exponent_bits: $exp_bits:expr,
        significand_bits: $sig_bits:expr,
        signaling_nan: $signaling:expr $(,)?
    ) => {
        impl FloatStorage for $t {
            type RawSignificand = $bits;

            const EXPONENT_BIT_COUNT: u32 = $exp_bits;
            const SIGNIFICAND_BIT_COUNT: u32 = $sig_bits;

            const SIGNALING_NAN: Self = <$t>::from_bits($signaling);
            const LEAST_NONZERO_MAGNITUDE: Self = <$t>::from_bits(1);

            #[inline]
            fn from_bit_patterns(
                sign: FloatSign,
                exponent_bit_pattern: u32,
                significand_bit_pattern: $bits,
            ) -> Self {
                let sign_bit: $bits = match sign {
                    FloatSign::Plus => 0,
                    FloatSign::Minus => 1 << ($bits::BITS - 1),
                };
                let exponent_mask: u32 = (1 << $exp_bits) - 1;
                let significand_mask: $bits = (1 << $sig_bits) - 1;
                let exponent = ((exponent_bit_pattern & exponent_mask) as $bits) << $sig_bits;
                <$t>::from_bits(sign_bit | exponent | (significand_bit_pattern & significand_mask))
            }

            fn from_sign_exponent_significand(
                sign: FloatSign,
                exponent: i32,
                significand: Self,
            ) -> Self {
                let signed = match sign {
                    FloatSign::Plus => significand,
                    FloatSign::Minus => -significand,
                };
                scale_by_power_of_two(signed, exponent)
            }

            #[inline]
            fn rounded(self, rule: RoundingRule) -> Self {
                match rule {
                    RoundingRule::ToNearestOrAwayFromZero => <$t>::round(self),
                    RoundingRule::ToNearestOrEven => <$t>::round_ties_even(self),
                    RoundingRule::Up => <$t>::ceil(self),
                    RoundingRule::Down => <$t>::floor(self),
                    RoundingRule::TowardZero => <$t>::trunc(self),
                    RoundingRule::AwayFromZero => {
                        if <$t>::is_sign_negative(self) {
                            <$t>::floor(self)
                        } else {
                            <$t>::ceil(self)
                        }
                    },
                }
            }

            #[inline]
            fn is_signaling_nan(self) -> bool {
                let quiet_bit: $bits = 1 << ($sig_bits - 1);
                <$t>::is_nan(self) && self.to_bits() & quiet_bit == 0
            }

            #[inline]
            fn is_canonical(self) -> bool {
                // Binary32 and binary64 have a single encoding per value.
                true
            }

            fn exponent(self) -> i32 {
                if !<$t>::is_finite(self) {
                    return i32::MAX;
                }
                if self == 0.0 {
                    return i32::MIN;
                }
                let bias: i32 = (1 << ($exp_bits - 1)) - 1;
                let biased = FloatStorage::exponent_bit_pattern(self) as i32;
                if biased != 0 {
                    return biased - bias;
                }
                let significand = FloatStorage::significand_bit_pattern(self);
                let highest_bit = ($bits::BITS - 1 - significand.leading_zeros()) as i32;
                1 - bias - $sig_bits as i32 + highest_bit
            }

            fn significand(self) -> Self {
                if <$t>::is_nan(self) {
                    return self;
                }
                let bias: u32 = (1 << ($exp_bits - 1)) - 1;
                let pattern = FloatStorage::significand_bit_pattern(self);
                if <$t>::is_normal(self) {
                    return Self::from_bit_patterns(FloatSign::Plus, bias, pattern);
                }
                if <$t>::is_subnormal(self) {
                    let highest_bit = $bits::BITS - 1 - pattern.leading_zeros();
                    let shift = $sig_bits - highest_bit;
                    return Self::from_bit_patterns(FloatSign::Plus, bias, pattern << shift);
                }
                // Zero or infinity keep their exponent field.
                Self::from_bit_patterns(
                    FloatSign::Plus,
                    FloatStorage::exponent_bit_pattern(self),
                    0,
                )
            }

            #[inline]
            fn exponent_bit_pattern(self) -> u32 {
                let exponent_mask: $bits = (1 << $exp_bits) - 1;
                ((self.to_bits() >> $sig_bits) & exponent_mask) as u32
            }

            #[inline]
            fn significand_bit_pattern(self) -> $bits {
                let significand_mask: $bits = (1 << $sig_bits) - 1;
                self.to_bits() & significand_mask
            }

            fn significand_width(self) -> i32 {
                let pattern = FloatStorage::significand_bit_pattern(self);
                let trailing = pattern.trailing_zeros() as i32;
                if <$t>::is_normal(self) {
                    if pattern == 0 {
                        return 0;
                    }
                    return $sig_bits as i32 - trailing;
                }
                if <$t>::is_subnormal(self) {
                    let leading =
                        pattern.leading_zeros() as i32 - ($bits::BITS as i32 - $sig_bits as i32);
                    return $sig_bits as i32 - (trailing + leading + 1);
                }
                -1
            }

            fn binade(self) -> Self {
                if !<$t>::is_finite(self) {
                    return <$t>::NAN;
                }
                let sign = FloatStorage::sign(self);
                let biased = FloatStorage::exponent_bit_pattern(self);
                if biased != 0 {
                    return Self::from_bit_patterns(sign, biased, 0);
                }
                let pattern = FloatStorage::significand_bit_pattern(self);
                if pattern == 0 {
                    return self;
                }
                let highest_bit = $bits::BITS - 1 - pattern.leading_zeros();
                Self::from_bit_patterns(sign, 0, 1 << highest_bit)
            }

            fn ulp(self) -> Self {
                if !<$t>::is_finite(self) {
                    return <$t>::NAN;
                }
                let biased = FloatStorage::exponent_bit_pattern(self);
                if biased > $sig_bits {
                    return Self::from_bit_patterns(FloatSign::Plus, biased - $sig_bits, 0);
                }
                if biased >= 1 {
                    return Self::from_bit_patterns(FloatSign::Plus, 0, 1 << (biased - 1));
                }
                <$t>::from_bits(1)
            }

            fn remainder(self, other: Self) -> Self {
                ieee_remainder(self, other)
            }

            #[inline]
            fn next_up(self) -> Self {
                <$t>::next_up(self)
            }

            #[inline]
            fn next_down(self) -> Self {
                <$t>::next_down(self)
            }
        }

        /// `x * 2^n` without intermediate overflow, rounding once at the end.
        fn scale_by_power_of_two(x: $t, n: i32) -> $t {
            let bias: i32 = (1 << ($exp_bits - 1)) - 1;
            let min_exponent = 1 - bias;
            let precision = $sig_bits as i32 + 1;
            // 2^bias, and 2^(min_exponent + precision) for the subnormal side.
            let up = <$t>::from_bits(((bias + bias) as $bits) << $sig_bits);
            let down =
                <$t>::MIN_POSITIVE * <$t>::from_bits(((bias + precision) as $bits) << $sig_bits);

            let mut y = x;
            let mut n = n;
            if n > bias {
                y *= up;
                n -= bias;
                if n > bias {
                    y *= up;
                    n -= bias;
                    if n > bias {
                        n = bias;
                    }
                }
            } else if n < min_exponent {
                y *= down;
                n += -min_exponent - precision;
                if n < min_exponent {
                    y *= down;
                    n += -min_exponent - precision;
                    if n < min_exponent {
                        n = min_exponent;
                    }
                }
            }
            y * <$t>::from_bits(((bias + n) as $bits) << $sig_bits)
        }

        fn ieee_remainder(x: $t, y: $t) -> $t {
            if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
                return <$t>::NAN;
            }
            if y.is_infinite() {
                return x;
            }
            let negative = x.is_sign_negative();
            let mut x = x.abs();
            let y = y.abs();
            if x == y {
                return if negative { -0.0 } else { 0.0 };
            }
            // Reduce to x < 2y; the truncating remainder is exact.
            if y <= <$t>::MAX / 2.0 {
                x %= y + y;
            }
            if y < <$t>::MIN_POSITIVE * 2.0 {
                if x + x > y {
                    x -= y;
                    if x + x >= y {
                        x -= y;
                    }
                }
            } else {
                let half = 0.5 * y;
                if x > half {
                    x -= y;
                    if x >= half {
                        x -= y;
                    }
                }
            }
            if negative {
                -x
            } else {
                x
            }
        }
    };
}

mod binary32 {
    use super::*;

    impl_float_storage!(
        f32,
        u32,
        exponent_bits: 8,
        significand_bits: 23,
        signaling_nan: 0x7fa0_0000,
    );
}

mod binary64 {
    use super::*;

    impl_float_storage!(
        f64,
        u64,
        exponent_bits: 11,
        significand_bits: 52,
        signaling_nan: 0x7ff4_0000_0000_0000,
    );
}

macro_rules! impl_binary_integer {
    (unsigned: $($u:ty),*; signed: $($i:ty),*) => {
        $(
            impl BinaryInteger for $u {
                #[inline]
                fn sign_and_magnitude(self) -> (bool, u128) {
                    (false, self as u128)
                }
            }
        )*
        $(
            impl BinaryInteger for $i {
                #[inline]
                fn sign_and_magnitude(self) -> (bool, u128) {
                    (self < 0, self.unsigned_abs() as u128)
                }
            }
        )*
    };
}

impl_binary_integer!(
    unsigned: u8, u16, u32, u64, u128, usize;
    signed: i8, i16, i32, i64, i128, isize
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_widths() {
        assert_eq!(<f32 as FloatStorage>::EXPONENT_BIT_COUNT, 8);
        assert_eq!(<f32 as FloatStorage>::SIGNIFICAND_BIT_COUNT, 23);
        assert_eq!(<f64 as FloatStorage>::EXPONENT_BIT_COUNT, 11);
        assert_eq!(<f64 as FloatStorage>::SIGNIFICAND_BIT_COUNT, 52);
    }

    #[test]
    fn test_signaling_nan_constant() {
        assert!(FloatStorage::is_signaling_nan(<f64 as FloatStorage>::SIGNALING_NAN));
        assert!(FloatStorage::is_signaling_nan(<f32 as FloatStorage>::SIGNALING_NAN));
        assert!(!FloatStorage::is_signaling_nan(f64::NAN));
        assert!(!FloatStorage::is_signaling_nan(1.0f64));
    }

    #[test]
    fn test_bit_pattern_assembly() {
        let one = <f64 as FloatStorage>::from_bit_patterns(FloatSign::Plus, 1023, 0);
        assert_eq!(one, 1.0);

        let minus_one_and_half =
            <f64 as FloatStorage>::from_bit_patterns(FloatSign::Minus, 1023, 1 << 51);
        assert_eq!(minus_one_and_half, -1.5);

        // Out-of-field bits are masked away
        let masked = <f32 as FloatStorage>::from_bit_patterns(FloatSign::Plus, 127 | 0x100, 0);
        assert_eq!(masked, 1.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(FloatStorage::exponent(1.0f64), 0);
        assert_eq!(FloatStorage::exponent(8.0f64), 3);
        assert_eq!(FloatStorage::exponent(0.75f64), -1);
        assert_eq!(FloatStorage::exponent(f64::from_bits(1)), -1074);
        assert_eq!(FloatStorage::exponent(f32::from_bits(1)), -149);
        assert_eq!(FloatStorage::exponent(0.0f64), i32::MIN);
        assert_eq!(FloatStorage::exponent(f64::INFINITY), i32::MAX);
        assert_eq!(FloatStorage::exponent(f64::NAN), i32::MAX);
    }

    #[test]
    fn test_significand() {
        assert_eq!(FloatStorage::significand(12.0f64), 1.5);
        assert_eq!(FloatStorage::significand(-12.0f64), 1.5);
        assert_eq!(FloatStorage::significand(f64::from_bits(1)), 1.0);
        assert_eq!(FloatStorage::significand(f64::from_bits(3)), 1.5);
        assert_eq!(FloatStorage::significand(0.0f64), 0.0);
        assert_eq!(FloatStorage::significand(f64::NEG_INFINITY), f64::INFINITY);
        assert!(FloatStorage::significand(f64::NAN).is_nan());
    }

    #[test]
    fn test_decomposition_recomposes() {
        for value in [1.0f64, -3.75, 1e-310, 6.02e23, f64::MAX, f64::MIN_POSITIVE] {
            let rebuilt = <f64 as FloatStorage>::from_sign_exponent_significand(
                FloatStorage::sign(value),
                FloatStorage::exponent(value),
                FloatStorage::significand(value),
            );
            assert_eq!(rebuilt.to_bits(), value.to_bits(), "value {value:e}");
        }
    }

    #[test]
    fn test_scaling_extremes() {
        assert_eq!(scale_check(1.0, 1023), f64::from_bits(0x7fe0_0000_0000_0000));
        assert_eq!(scale_check(1.0, 1024), f64::INFINITY);
        assert_eq!(scale_check(1.0, -1074), f64::from_bits(1));
        assert_eq!(scale_check(1.0, -1075), 0.0);
        assert_eq!(scale_check(f64::from_bits(1), 1074), 1.0);
        assert_eq!(scale_check(1.0, i32::MAX), f64::INFINITY);
        assert_eq!(scale_check(1.0, i32::MIN), 0.0);
    }

    fn scale_check(value: f64, exponent: i32) -> f64 {
        <f64 as FloatStorage>::from_sign_exponent_significand(FloatSign::Plus, exponent, value)
    }

    #[test]
    fn test_significand_width() {
        assert_eq!(FloatStorage::significand_width(1.0f64), 0);
        assert_eq!(FloatStorage::significand_width(1.5f64), 1);
        assert_eq!(FloatStorage::significand_width(1.25f64), 2);
        assert_eq!(FloatStorage::significand_width(f64::from_bits(1)), 0);
        assert_eq!(FloatStorage::significand_width(f64::from_bits(3)), 1);
        assert_eq!(FloatStorage::significand_width(0.0f64), -1);
        assert_eq!(FloatStorage::significand_width(f64::INFINITY), -1);
    }

    #[test]
    fn test_binade_and_ulp() {
        assert_eq!(FloatStorage::binade(12.0f64), 8.0);
        assert_eq!(FloatStorage::binade(-0.3f64), -0.25);
        assert_eq!(FloatStorage::binade(f64::from_bits(3)), f64::from_bits(2));
        assert!(FloatStorage::binade(f64::INFINITY).is_nan());

        assert_eq!(FloatStorage::ulp(1.0f64), f64::EPSILON);
        assert_eq!(FloatStorage::ulp(1.0f32), f32::EPSILON);
        assert_eq!(FloatStorage::ulp(0.0f64), f64::from_bits(1));
        assert_eq!(FloatStorage::ulp(f64::MIN_POSITIVE), f64::from_bits(1));
        assert!(FloatStorage::ulp(f64::NAN).is_nan());
    }

    #[test]
    fn test_ieee_remainder() {
        assert_eq!(FloatStorage::remainder(5.0f64, 2.0), 1.0);
        assert_eq!(FloatStorage::remainder(3.0f64, 2.0), -1.0);
        assert_eq!(FloatStorage::remainder(7.0f64, 2.0), -1.0);
        assert_eq!(FloatStorage::remainder(-7.0f64, 2.0), 1.0);
        assert_eq!(FloatStorage::remainder(8.5f64, -3.0), -0.5);
        assert!(FloatStorage::remainder(4.0f64, 2.0).is_sign_positive());
        assert!(FloatStorage::remainder(-4.0f64, 2.0).is_sign_negative());
        assert!(FloatStorage::remainder(1.0f64, 0.0).is_nan());
        assert!(FloatStorage::remainder(f64::INFINITY, 1.0).is_nan());
        assert_eq!(FloatStorage::remainder(1.5f64, f64::INFINITY), 1.5);
    }

    #[test]
    fn test_ieee_remainder_subnormal_divisor() {
        let ulps = |n: u64| f64::from_bits(n);
        // 7 / 2 ties to 4 (even), so the remainder is 7 - 8 ulps
        assert_eq!(FloatStorage::remainder(ulps(7), ulps(2)), -ulps(1));
        // 5 / 3 rounds to 2
        assert_eq!(FloatStorage::remainder(ulps(5), ulps(3)), -ulps(1));
        assert_eq!(FloatStorage::remainder(ulps(4), ulps(3)), ulps(1));
        assert_eq!(FloatStorage::remainder(-ulps(7), ulps(2)), ulps(1));
        assert_eq!(
            FloatStorage::remainder(f32::from_bits(9), f32::from_bits(4)),
            f32::from_bits(1)
        );
    }

    #[test]
    fn test_exact_integer_conversion() {
        assert_eq!(
            <f32 as FloatStorage>::from_magnitude_exactly(false, 16_777_216),
            Some(16_777_216.0)
        );
        assert_eq!(<f32 as FloatStorage>::from_magnitude_exactly(false, 16_777_217), None);
        assert_eq!(
            <f32 as FloatStorage>::from_magnitude_exactly(true, 1 << 100),
            Some(-(2f32.powi(100)))
        );
        assert_eq!(<f64 as FloatStorage>::from_magnitude_exactly(false, u64::MAX as u128), None);
        assert_eq!(<f64 as FloatStorage>::from_magnitude_exactly(false, 0), Some(0.0));
    }

    #[test]
    fn test_rounding_rules() {
        let cases: [(RoundingRule, f64, f64); 7] = [
            (RoundingRule::ToNearestOrAwayFromZero, 2.5, 3.0),
            (RoundingRule::ToNearestOrEven, 2.5, 2.0),
            (RoundingRule::Up, 2.1, 3.0),
            (RoundingRule::Down, -2.1, -3.0),
            (RoundingRule::TowardZero, -2.9, -2.0),
            (RoundingRule::AwayFromZero, -2.1, -3.0),
            (RoundingRule::AwayFromZero, 2.1, 3.0),
        ];
        for (rule, input, expected) in cases {
            assert_eq!(FloatStorage::rounded(input, rule), expected, "{rule:?} {input}");
        }
    }

    #[test]
    fn test_binary_integer_magnitude() {
        assert_eq!((-5i8).sign_and_magnitude(), (true, 5));
        assert_eq!(i128::MIN.sign_and_magnitude(), (true, 1 << 127));
        assert_eq!(u128::MAX.sign_and_magnitude(), (false, u128::MAX));
    }
}
