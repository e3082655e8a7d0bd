//! Decomposition of an `f64` into its IEEE-754 fields.

/// Number of explicitly stored mantissa bits.
pub const MANTISSA_BITS: u32 = 52;

/// Number of exponent bits.
pub const EXPONENT_BITS: u32 = 11;

/// The exponent bias.
pub const BIAS: i32 = (1 << (EXPONENT_BITS - 1)) - 1;

/// The biased exponent field of infinities and NaNs.
const SPECIAL_EXPONENT: u32 = (1 << EXPONENT_BITS) - 1;

/// The kind of value an `f64` bit pattern encodes.
///
/// Zeros, infinities and NaNs carry their sign separately, in [FloatBits::sign].
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

/// The raw fields of an `f64`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct FloatBits {
    /// `true` if the sign bit is set (the value is negative, or `-0.0`, or a negative NaN).
    pub sign: bool,
    /// The biased exponent field, in `0 .. 2^11`.
    pub exponent: u32,
    /// The stored mantissa field, in `0 .. 2^52`.
    pub mantissa: u64,
}

impl FloatBits {
    /// Splits `num` into sign, biased exponent and mantissa.
    #[inline]
    pub const fn new(num: f64) -> Self {
        let bits = num.to_bits();
        FloatBits {
            sign: bits >> (MANTISSA_BITS + EXPONENT_BITS) != 0,
            exponent: (bits >> MANTISSA_BITS) as u32 & SPECIAL_EXPONENT,
            mantissa: bits & ((1 << MANTISSA_BITS) - 1),
        }
    }

    #[inline]
    pub const fn classify(&self) -> FloatClass {
        match (self.exponent, self.mantissa) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (SPECIAL_EXPONENT, 0) => FloatClass::Infinite,
            (SPECIAL_EXPONENT, _) => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }

    /// The integer significand, including the implicit leading bit for normal values.
    #[inline]
    pub const fn significand(&self) -> u64 {
        if self.exponent == 0 {
            self.mantissa
        } else {
            self.mantissa | (1 << MANTISSA_BITS)
        }
    }

    /// The binary exponent `e` such that the magnitude is `self.significand() * 2^e`.
    ///
    /// Subnormals share the exponent of the smallest normal numbers.
    #[inline]
    pub const fn binary_exponent(&self) -> i32 {
        let biased = if self.exponent == 0 { 1 } else { self.exponent as i32 };
        biased - BIAS - MANTISSA_BITS as i32
    }

    /// Checks whether the significand is even, in which case this value wins ties against its
    /// neighbours under "round to nearest, ties to even".
    #[inline]
    pub const fn is_even(&self) -> bool {
        self.significand() % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classes() {
        assert_eq!(FloatBits::new(0.0).classify(), FloatClass::Zero);
        assert_eq!(FloatBits::new(-0.0).classify(), FloatClass::Zero);
        assert_eq!(FloatBits::new(5e-324).classify(), FloatClass::Subnormal);
        assert_eq!(FloatBits::new(f64::MIN_POSITIVE / 2.0).classify(), FloatClass::Subnormal);
        assert_eq!(FloatBits::new(f64::MIN_POSITIVE).classify(), FloatClass::Normal);
        assert_eq!(FloatBits::new(1.0).classify(), FloatClass::Normal);
        assert_eq!(FloatBits::new(f64::MAX).classify(), FloatClass::Normal);
        assert_eq!(FloatBits::new(f64::INFINITY).classify(), FloatClass::Infinite);
        assert_eq!(FloatBits::new(f64::NEG_INFINITY).classify(), FloatClass::Infinite);
        assert_eq!(FloatBits::new(f64::NAN).classify(), FloatClass::Nan);
    }

    #[test]
    fn signs() {
        assert!(!FloatBits::new(0.0).sign);
        assert!(FloatBits::new(-0.0).sign);
        assert!(FloatBits::new(f64::NEG_INFINITY).sign);
        assert!(!FloatBits::new(1.5).sign);
        assert!(FloatBits::new(-1.5).sign);
    }

    #[test]
    fn extremes() {
        let min = FloatBits::new(5e-324);
        assert_eq!((min.significand(), min.binary_exponent()), (1, -1074));

        let min_normal = FloatBits::new(f64::MIN_POSITIVE);
        assert_eq!(min_normal.exponent, 1);
        assert_eq!((min_normal.significand(), min_normal.binary_exponent()), (1 << 52, -1074));

        let max = FloatBits::new(f64::MAX);
        assert_eq!((max.significand(), max.binary_exponent()), ((1 << 53) - 1, 971));

        let one = FloatBits::new(1.0);
        assert_eq!((one.exponent, one.mantissa), (1023, 0));
        assert_eq!((one.significand(), one.binary_exponent()), (1 << 52, -52));
        assert!(one.is_even());
        assert!(!FloatBits::new(1.0 + f64::EPSILON).is_even());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100_000))]

        #[test]
        fn reconstructs(float in f64::MIN .. f64::MAX) {
            prop_assume!(float != 0.0);
            let bits = FloatBits::new(float);
            let refloat = (bits.significand() as f64 * 2f64.powi(bits.binary_exponent()))
                .copysign(if bits.sign { -1.0 } else { 1.0 });
            prop_assert_eq!(refloat, float);
        }
    }
}
