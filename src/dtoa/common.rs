//! Integer approximations of logarithms and divisibility helpers shared by the shortest and exact
//! conversions.

/// Exponents accepted by [pow5bits].
pub const POW5BITS_BOUNDS: core::ops::RangeInclusive<i32> = 0 ..= 3528;

/// Exponents accepted by [log10_pow2].
pub const LOG10_POW2_BOUNDS: core::ops::RangeInclusive<i32> = 0 ..= 1650;

/// Exponents accepted by [log10_pow5].
pub const LOG10_POW5_BOUNDS: core::ops::RangeInclusive<i32> = 0 ..= 2620;

/// Returns the bit length of `5^e`, i.e. `ceil(log2(5^e))`, except that `pow5bits(0) == 1`.
///
/// Uses a fixed-point approximation of `log2(5)` that is exact in [POW5BITS_BOUNDS].
#[inline]
pub const fn pow5bits(e: i32) -> i32 {
    debug_assert!(*POW5BITS_BOUNDS.start() <= e && e <= *POW5BITS_BOUNDS.end());
    (((e as u32 * 1217359) >> 19) + 1) as i32
}

/// Returns `floor(log10(2^e))`. Exact in [LOG10_POW2_BOUNDS].
#[inline]
pub const fn log10_pow2(e: i32) -> u32 {
    debug_assert!(*LOG10_POW2_BOUNDS.start() <= e && e <= *LOG10_POW2_BOUNDS.end());
    (e as u32 * 78913) >> 18
}

/// Returns `floor(log10(5^e))`. Exact in [LOG10_POW5_BOUNDS].
#[inline]
pub const fn log10_pow5(e: i32) -> u32 {
    debug_assert!(*LOG10_POW5_BOUNDS.start() <= e && e <= *LOG10_POW5_BOUNDS.end());
    (e as u32 * 732923) >> 20
}

/// Number of times `5` divides `value`. `value` must be nonzero.
#[inline]
pub const fn pow5_factor(mut value: u64) -> u32 {
    debug_assert!(value != 0);
    let mut count = 0;
    while value % 5 == 0 {
        value /= 5;
        count += 1;
    }
    count
}

/// Checks whether `value` is divisible by `5^p`.
#[inline]
pub const fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    pow5_factor(value) >= p
}

/// Checks whether `value` is divisible by `2^p`, for `p < 64`.
#[inline]
pub const fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    debug_assert!(p < 64);
    value & ((1u64 << p) - 1) == 0
}
