//! 64×64→128 bit multiplication and 128 bit shifts, the only arithmetic wider than a machine word.

/// Computes the full product `a * b`, returned as `(low, high)` 64-bit words.
#[inline]
pub const fn umul128(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;
    (product as u64, (product >> 64) as u64)
}

/// Computes `(high:low) >> dist`, truncated to its low 64 bits.
///
/// `dist` must be less than 64; this is only checked in debug builds.
#[inline]
pub const fn shiftright128(low: u64, high: u64, dist: u32) -> u64 {
    debug_assert!(dist < 64);
    let value = (high as u128) << 64 | low as u128;
    (value >> dist) as u64
}

/// Computes `(m * mul) >> j`, where `mul` is a 128-bit multiplier given as `(low, high)` and
/// `64 <= j < 128`. The low 64 bits of the 192-bit product never reach the result except through
/// their carry, so only three words are accumulated.
#[inline]
pub const fn mul_shift_64(m: u64, mul: &(u64, u64), j: u32) -> u64 {
    debug_assert!(64 <= j && j < 128);
    let (_, high0) = umul128(m, mul.0);
    let (low1, mut high1) = umul128(m, mul.1);
    let sum = high0.wrapping_add(low1);
    if sum < high0 {
        high1 += 1;
    }
    shiftright128(sum, high1, j - 64)
}
