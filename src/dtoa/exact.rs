//! The exact decimal expansion of an `f64`, and rounding it to a given digit position.
//!
//! Every finite `f64` is `m * 2^e`, which is a terminating decimal: `m * 2^e` itself when `e >= 0`,
//! and `m * 5^-e * 10^e` otherwise. The integer part is expanded with [Big], nine digits at a
//! time, and trailing zeros are folded into the exponent.

use crate::dtoa::bignum::Big;
use crate::dtoa::float::FloatBits;

/// Most significant digits any `f64` can have: the exact value of the largest subnormal,
/// `(2^52 - 1) * 2^-1074`, has 767 of them.
pub const MAX_EXACT_DIGITS: usize = 767;

const CHUNK: u32 = 1_000_000_000;
const CHUNK_DIGITS: usize = 9;
const CAPACITY: usize = MAX_EXACT_DIGITS.next_multiple_of(CHUNK_DIGITS);

/// An exact decimal `digits * 10^exponent`, with the ASCII `digits` free of trailing zeros. Zero
/// has no digits.
#[derive(Clone)]
pub struct ExactDecimal {
    buf: [u8; CAPACITY],
    start: usize,
    end: usize,
    exponent: i32,
}

impl ExactDecimal {
    /// Expands the magnitude of a finite `bits`.
    pub fn new(bits: &FloatBits) -> Self {
        let mut exact = ExactDecimal { buf: [b'0'; CAPACITY], start: CAPACITY, end: CAPACITY, exponent: 0 };

        let significand = bits.significand();
        if significand == 0 {
            return exact
        }

        let mut big = Big::from_u64(significand);
        let binary_exponent = bits.binary_exponent();
        if binary_exponent >= 0 {
            big.mul_pow2(binary_exponent as usize);
        } else {
            big.mul_pow5(-binary_exponent as usize);
            exact.exponent = binary_exponent;
        }

        while !big.is_zero() {
            let mut chunk = big.div_rem_small(CHUNK);
            for digit in exact.buf[exact.start - CHUNK_DIGITS .. exact.start].iter_mut().rev() {
                *digit = b'0' + (chunk % 10) as u8;
                chunk /= 10;
            }
            exact.start -= CHUNK_DIGITS;
        }

        // The last chunk is zero padded on the left.
        while exact.buf[exact.start] == b'0' {
            exact.start += 1;
        }
        exact.strip_trailing_zeros();
        exact
    }

    /// The significant digits, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.buf[self.start .. self.end]
    }

    /// The power of 10 of the last digit.
    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.start == self.end
    }

    /// The power of 10 of the first digit. Zero is given exponent 0.
    #[inline]
    pub fn scientific_exponent(&self) -> i32 {
        if self.is_zero() {
            return 0
        }
        self.exponent + (self.end - self.start) as i32 - 1
    }

    fn strip_trailing_zeros(&mut self) {
        while self.end > self.start && self.buf[self.end - 1] == b'0' {
            self.end -= 1;
            self.exponent += 1;
        }
        if self.is_zero() {
            self.exponent = 0;
        }
    }

    /// Rounds to the `keep` most significant digits, ties to even. A `keep` of zero or less rounds
    /// at a position above the first digit, which gives either zero or a single `1` there.
    pub fn round_to_digits(&mut self, keep: i32) {
        let len = (self.end - self.start) as i32;
        if keep >= len {
            return
        }

        // `keep` digits remain, so the last one sits `len - keep` places higher.
        let exponent = self.exponent + len - keep;

        if keep < 0 {
            self.end = self.start;
            self.exponent = 0;
            return
        }

        let first_dropped = self.buf[self.start + keep as usize];
        let rest_nonzero = keep + 1 < len;
        let kept_odd = keep > 0 && (self.buf[self.start + keep as usize - 1] - b'0') % 2 == 1;
        let round_up = match first_dropped {
            b'0' ..= b'4' => false,
            b'5' => rest_nonzero || kept_odd,
            _ => true,
        };

        self.end = self.start + keep as usize;
        self.exponent = exponent;
        if round_up {
            self.increment();
        }
        self.strip_trailing_zeros();
    }

    /// Rounds at the digit of weight `10^position`, e.g. `-2` keeps two fractional digits.
    pub fn round_to_position(&mut self, position: i32) {
        if self.is_zero() {
            return
        }
        let keep = self.scientific_exponent() - position + 1;
        self.round_to_digits(keep);
    }

    /// Adds one unit in the last kept place. With nothing kept, that place is just above the
    /// first digit.
    fn increment(&mut self) {
        for digit in self.buf[self.start .. self.end].iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return
            }
        }
        // All nines, or no digits: the carry becomes a new leading `1`. The zeros after it are
        // stripped by the caller.
        debug_assert!(self.start > 0);
        self.start -= 1;
        self.buf[self.start] = b'1';
    }
}

impl core::fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let digits = core::str::from_utf8(self.digits()).unwrap_or("?");
        write!(f, "{}e{}", if digits.is_empty() { "0" } else { digits }, self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn exact(num: f64) -> ExactDecimal {
        ExactDecimal::new(&FloatBits::new(num))
    }

    fn show(exact: &ExactDecimal) -> String {
        format!("{exact:?}")
    }

    /// Reassembles `std`'s `{:.p$e}` output as `digits e exponent-of-last-digit`, without trailing
    /// zeros, for comparison with [show].
    fn std_scientific(num: f64, precision: usize) -> String {
        let std = format!("{:.precision$e}", num.abs());
        let (mant, exp) = std.split_once('e').unwrap();
        let exp: i32 = exp.parse().unwrap();
        let digits: String = mant.chars().filter(|c| *c != '.').collect();
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            return "0e0".to_string()
        }
        format!("{trimmed}e{}", exp - trimmed.len() as i32 + 1)
    }

    #[test]
    fn expansions() {
        assert_eq!(show(&exact(0.0)), "0e0");
        assert_eq!(show(&exact(-0.0)), "0e0");
        assert_eq!(show(&exact(1.0)), "1e0");
        assert_eq!(show(&exact(1200.0)), "12e2");
        assert_eq!(show(&exact(0.5)), "5e-1");
        assert_eq!(show(&exact(0.1)), "1000000000000000055511151231257827021181583404541015625e-55");
        assert_eq!(show(&exact(2f64.powi(70))), "1180591620717411303424e0");
        assert_eq!(show(&exact(1e23)), "99999999999999991611392e0");
    }

    #[test]
    fn extremes() {
        let min = exact(5e-324);
        assert_eq!(min.digits().len(), 751);
        assert_eq!(min.scientific_exponent(), -324);
        assert!(min.digits().starts_with(b"49406564584124654417656879286822137236505980"));

        let max_subnormal = exact(f64::MIN_POSITIVE - 5e-324);
        assert_eq!(max_subnormal.digits().len(), MAX_EXACT_DIGITS);

        let max = exact(f64::MAX);
        assert_eq!(max.scientific_exponent(), 308);
        assert_eq!(max.exponent(), 0);
        assert!(max.digits().starts_with(b"17976931348623157081452742373170435679"));
    }

    #[test]
    fn rounding() {
        let rounded = |num: f64, keep: i32| {
            let mut exact = exact(num);
            exact.round_to_digits(keep);
            show(&exact)
        };
        assert_eq!(rounded(3.14159, 3), "314e-2");
        assert_eq!(rounded(3.14159, 100), show(&exact(3.14159)));
        assert_eq!(rounded(1299.0, 3), "13e2");
        assert_eq!(rounded(9999.0, 2), "1e4");
        assert_eq!(rounded(9.5, 1), "1e1");

        // Ties to even.
        assert_eq!(rounded(0.125, 2), "12e-2");
        assert_eq!(rounded(0.375, 2), "38e-2");
        assert_eq!(rounded(2.5, 1), "2e0");
        assert_eq!(rounded(3.5, 1), "4e0");
        assert_eq!(rounded(2.5000000000000004, 1), "3e0");

        // At or above the first digit.
        assert_eq!(rounded(0.5, 0), "0e0");
        assert_eq!(rounded(0.51, 0), "1e0");
        assert_eq!(rounded(0.7, 0), "1e0");
        assert_eq!(rounded(0.3, 0), "0e0");
        assert_eq!(rounded(7.0, -1), "0e0");
    }

    #[test]
    fn positions() {
        let rounded = |num: f64, position: i32| {
            let mut exact = exact(num);
            exact.round_to_position(position);
            show(&exact)
        };
        assert_eq!(rounded(0.1, -10), "1e-1");
        assert_eq!(rounded(123.456, -2), "12346e-2");
        assert_eq!(rounded(123.456, 0), "123e0");
        assert_eq!(rounded(123.456, 2), "1e2");
        assert_eq!(rounded(0.0001, -3), "0e0");
        assert_eq!(rounded(0.0005, -3), "1e-3");
        assert_eq!(rounded(0.00015, -4), "1e-4");
        assert_eq!(rounded(0.0, -4), "0e0");
        assert_eq!(rounded(f64::MAX, 300), "179769313e300");
        assert_eq!(rounded(f64::MAX, 307), "18e307");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20_000))]

        #[test]
        fn matches_std_scientific(bits in 0u64 .. 0x7ff0_0000_0000_0000, precision in 0usize .. 40) {
            let num = f64::from_bits(bits);
            let mut exact = exact(num);
            if !exact.is_zero() {
                exact.round_to_digits(precision as i32 + 1);
            }
            prop_assert_eq!(show(&exact), std_scientific(num, precision));
        }

        #[test]
        fn full_expansion_reparses(bits in 1u64 .. 0x7ff0_0000_0000_0000) {
            let num = f64::from_bits(bits);
            let exact = exact(num);
            let str = core::str::from_utf8(exact.digits()).unwrap();
            let reparsed: f64 = format!("{str}e{}", exact.exponent()).parse().unwrap();
            prop_assert_eq!(reparsed, num);
            prop_assert_ne!(exact.digits().last(), Some(&b'0'));
        }
    }
}
