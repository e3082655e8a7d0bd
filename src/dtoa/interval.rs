//! The interval of decimals that round back to a given `f64`, scaled to a common power of 10.

use crate::dtoa::common::{
    log10_pow2, log10_pow5, multiple_of_power_of_2, multiple_of_power_of_5, pow5bits,
};
use crate::dtoa::float::{FloatBits, FloatClass};
use crate::dtoa::table::{compute_inv_pow5, compute_pow5, POW5_BITCOUNT, POW5_INV_BITCOUNT};
use crate::dtoa::wide::mul_shift_64;

/// The rounding interval of a finite, nonzero `f64` `v`, expressed as three integers sharing the
/// decimal exponent `exponent`:
///
/// - `lower * 10^exponent` is the midpoint between `v` and its predecessor, rounded down;
/// - `value * 10^exponent` is `v` itself, rounded down;
/// - `upper * 10^exponent` is the midpoint between `v` and its successor, rounded down, and moved
///   one step inside when the bound is exact but excluded.
///
/// Every decimal strictly between the two midpoints parses back to `v`. A decimal equal to a
/// midpoint parses back to `v` only when `v` has an even significand (ties to even), which is
/// what `inclusive` records.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct DecimalInterval {
    pub lower: u64,
    pub value: u64,
    pub upper: u64,
    pub exponent: i32,
    /// Whether the exact midpoints belong to the interval.
    pub inclusive: bool,
    /// Whether `lower` is the exact lower midpoint. Only tracked for inclusive intervals, since an
    /// excluded lower bound can never be chosen.
    pub lower_exact: bool,
    /// Whether `value` is the exact value of `v`. May be `false` for exact values far from the
    /// origin, where no shortest candidate can land on a tie.
    pub value_exact: bool,
}

impl DecimalInterval {
    /// Computes the interval of a **normal** or **subnormal** `bits`.
    ///
    /// For zeros, infinities and NaNs the result is unspecified; this is only checked in debug
    /// builds.
    pub fn new(bits: &FloatBits) -> Self {
        debug_assert!(matches!(bits.classify(), FloatClass::Normal | FloatClass::Subnormal));

        // Two extra bits of exponent keep the half-ULP bounds integral.
        let e2 = bits.binary_exponent() - 2;
        let m2 = bits.significand();
        let inclusive = bits.is_even();

        let mv = 4 * m2;
        // The gap to the predecessor is half the gap to the successor when the significand is a
        // power of 2, except at the bottom of the normal range where subnormals continue evenly.
        let mm_shift = (bits.mantissa != 0 || bits.exponent <= 1) as u64;

        let mut lower_exact = false;
        let mut value_exact = false;

        if e2 >= 0 {
            // Scale down by 2^e2 / 10^q using 5^-q.
            let q = log10_pow2(e2) - (e2 > 3) as u32;
            let k = POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
            let j = (-e2 + q as i32 + k) as u32;
            let mul = compute_inv_pow5(q);

            let value = mul_shift_64(mv, &mul, j);
            let mut upper = mul_shift_64(mv + 2, &mul, j);
            let lower = mul_shift_64(mv - 1 - mm_shift, &mul, j);

            // Only for small `q` can one of the three scaled values be exact; at most one of
            // them is a multiple of 5.
            if q <= 21 {
                if mv % 5 == 0 {
                    value_exact = multiple_of_power_of_5(mv, q);
                } else if inclusive {
                    lower_exact = multiple_of_power_of_5(mv - 1 - mm_shift, q);
                } else {
                    upper -= multiple_of_power_of_5(mv + 2, q) as u64;
                }
            }

            DecimalInterval {
                lower,
                value,
                upper,
                exponent: q as i32,
                inclusive,
                lower_exact,
                value_exact,
            }
        } else {
            // Scale up by 5^(-e2 - q), leaving 10^(e2 + q) as the decimal exponent.
            let q = log10_pow5(-e2) - (-e2 > 1) as u32;
            let i = -e2 - q as i32;
            let k = pow5bits(i) - POW5_BITCOUNT;
            let j = (q as i32 - k) as u32;
            let mul = compute_pow5(i as u32);

            let value = mul_shift_64(mv, &mul, j);
            let mut upper = mul_shift_64(mv + 2, &mul, j);
            let lower = mul_shift_64(mv - 1 - mm_shift, &mul, j);

            if q <= 1 {
                // The three values are exact iff they have at least `q` trailing zero bits. `mv`
                // has at least two; `mv + 2` has one; `mv - 1 - mm_shift` has one iff `mm_shift`.
                value_exact = true;
                if inclusive {
                    lower_exact = mm_shift == 1;
                } else {
                    upper -= 1;
                }
            } else if q < 63 {
                value_exact = multiple_of_power_of_2(mv, q);
            }

            DecimalInterval {
                lower,
                value,
                upper,
                exponent: q as i32 + e2,
                inclusive,
                lower_exact,
                value_exact,
            }
        }
    }
}
