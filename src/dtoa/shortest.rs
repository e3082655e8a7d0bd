//! The shortest decimal that parses back to a given `f64`.

use crate::dtoa::float::{FloatBits, FloatClass, MANTISSA_BITS};
use crate::dtoa::fmt;
use crate::dtoa::interval::DecimalInterval;

/// A decimal representation `mantissa * 10^exponent` of the **absolute value** of a finite `f64`.
///
/// As produced by [Decimal::shortest], `mantissa` has no trailing zeros (unless it is zero) and at
/// most 17 digits.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decimal {
    pub mantissa: u64,
    pub exponent: i32,
}

/// `5e-324`, the smallest subnormal.
const MIN_SUBNORMAL: Decimal = Decimal { mantissa: 5, exponent: -324 };

/// `1.7976931348623157e308`, the largest finite value.
const MAX_FINITE: Decimal = Decimal { mantissa: 17976931348623157, exponent: 292 };

/// Decides whether a trimmed candidate must be rounded up to the next decimal.
///
/// `removed` is the most significant of the digits trimmed off, and `tail_zero` says whether all
/// the digits below it were zero, i.e. whether the exact value was `candidate.5000…`. Such a tie
/// rounds to the even candidate. `at_excluded_lower` is set when the candidate sits on the lower
/// bound of the interval but that bound does not round back to the input, so the candidate must
/// move up regardless of the digits.
#[inline]
fn round_up(candidate: u64, removed: u64, tail_zero: bool, at_excluded_lower: bool) -> bool {
    let is_tie = tail_zero && removed == 5;
    if is_tie {
        return at_excluded_lower || candidate % 2 == 1
    }
    at_excluded_lower || removed >= 5
}

impl Decimal {
    /// Finds the shortest decimal that parses back to `bits`, or the closest one to the exact
    /// value among those of that length.
    ///
    /// `bits` must be finite; zeros map to `0e0`. For infinities and NaNs the result is
    /// unspecified; this is only checked in debug builds.
    pub fn shortest(bits: &FloatBits) -> Self {
        debug_assert!(!matches!(bits.classify(), FloatClass::Infinite | FloatClass::Nan));

        match (bits.exponent, bits.mantissa) {
            (0, 0) => Decimal { mantissa: 0, exponent: 0 },
            (0, 1) => MIN_SUBNORMAL,
            (0x7fe, 0x000f_ffff_ffff_ffff) => MAX_FINITE,
            _ => match Self::small_integer(bits) {
                Some(decimal) => decimal,
                None => Self::from_interval(&DecimalInterval::new(bits)).remove_trailing_zeros(),
            },
        }
    }

    /// Short-circuits integers in `[1, 2^53)`: the value itself has no fractional digits, so it is
    /// already the shortest decimal once trailing zeros are dropped.
    #[inline]
    fn small_integer(bits: &FloatBits) -> Option<Self> {
        if bits.classify() != FloatClass::Normal {
            return None
        }
        let neg_exp = -bits.binary_exponent();
        if !(0 ..= MANTISSA_BITS as i32).contains(&neg_exp) {
            return None
        }
        let significand = bits.significand();
        let fraction = significand & ((1 << neg_exp) - 1);
        if fraction != 0 {
            return None
        }
        Some(Decimal { mantissa: significand >> neg_exp, exponent: 0 }.remove_trailing_zeros())
    }

    /// Trims digits off the interval while its bounds still differ in the remaining prefix.
    fn from_interval(interval: &DecimalInterval) -> Self {
        let DecimalInterval { mut lower, mut value, mut upper, .. } = *interval;
        let mut removed_count = 0;

        let mantissa = if interval.lower_exact || interval.value_exact {
            // Either bound may be hit exactly, or the value may be an exact tie: track whether
            // the digits removed so far were all zeros.
            let mut lower_exact = interval.lower_exact;
            let mut tail_zero = interval.value_exact;
            let mut removed = 0;
            while upper / 10 > lower / 10 {
                lower_exact &= lower % 10 == 0;
                tail_zero &= removed == 0;
                removed = value % 10;
                lower /= 10;
                value /= 10;
                upper /= 10;
                removed_count += 1;
            }
            if lower_exact {
                // The lower bound is a valid output and has more zeros to give.
                while lower % 10 == 0 {
                    tail_zero &= removed == 0;
                    removed = value % 10;
                    lower /= 10;
                    value /= 10;
                    removed_count += 1;
                }
            }
            let at_excluded_lower = value == lower && !(interval.inclusive && lower_exact);
            value + round_up(value, removed, tail_zero, at_excluded_lower) as u64
        } else {
            // Neither tie can happen: only the first removed digit decides the rounding.
            let mut removed = 0;
            while upper / 10 > lower / 10 {
                removed = value % 10;
                lower /= 10;
                value /= 10;
                upper /= 10;
                removed_count += 1;
            }
            value + (value == lower || removed >= 5) as u64
        };

        Decimal { mantissa, exponent: interval.exponent + removed_count }
    }

    /// Shortens `self` by removing trailing zeros from `self.mantissa` while possible, and
    /// incrementing `self.exponent` by the same amount.
    pub const fn remove_trailing_zeros(mut self) -> Self {
        // Multiplying by the inverse of 5 modulo 2^64 divides exactly by 5 when possible; the
        // rotation then divides by 2 and pushes an odd quotient's low bit to the top.
        const INV5: u64 = 0xcccc_cccc_cccc_cccd;
        const BOUND: u64 = u64::MAX / 10 + 1;
        if self.mantissa == 0 {
            return self
        }
        loop {
            let q = self.mantissa.wrapping_mul(INV5).rotate_right(1);
            if q >= BOUND {
                return self
            }
            self.exponent += 1;
            self.mantissa = q;
        }
    }

    /// Number of digits of the mantissa.
    #[inline]
    pub fn digit_count(&self) -> usize {
        fmt::len_u64(self.mantissa)
    }

    /// The decimal exponent of the leading digit, so that the value is in
    /// `[10^e, 10^(e + 1))`.
    #[inline]
    pub fn scientific_exponent(&self) -> i32 {
        self.exponent + self.digit_count() as i32 - 1
    }
}
