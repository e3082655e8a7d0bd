//! Multipliers for scaling a binary significand by a power of 5.
//!
//! A full table of 128-bit multipliers for every exponent would need 618 entries. Instead only
//! every 26th power is stored ([POW5_SPLIT2], [POW5_INV_SPLIT2]); the powers in between are
//! derived by one more multiplication with an exact small power ([POW5_TABLE]) and a shift. The
//! shift drops bits, so the derived value can fall short of the true truncation by a small amount;
//! [POW5_OFFSETS] and [POW5_INV_OFFSETS] record, per exponent, how much to add back. All five
//! tables are checked bit for bit against exact big integer arithmetic in the tests below.

use crate::dtoa::common::pow5bits;
use crate::dtoa::wide::{shiftright128, umul128};

/// Bit length of the `5^i` multipliers: `5^i` is stored as `floor(5^i / 2^(pow5bits(i) - 121))`.
pub const POW5_BITCOUNT: i32 = 121;

/// Bit length of the `5^-i` multipliers: `5^-i` is stored as
/// `floor(2^(pow5bits(i) - 1 + 122) / 5^i) + 1`.
pub const POW5_INV_BITCOUNT: i32 = 122;

/// Largest `i` for which [compute_pow5] is defined.
pub const POW5_MAX: u32 = 325;

/// Largest `i` for which [compute_inv_pow5] is defined.
pub const POW5_INV_MAX: u32 = 291;

/// `5^i` for `i` in `0 .. 26`, exact.
pub static POW5_TABLE: [u64; 26] = [
    1,
    5,
    25,
    125,
    625,
    3125,
    15625,
    78125,
    390625,
    1953125,
    9765625,
    48828125,
    244140625,
    1220703125,
    6103515625,
    30517578125,
    152587890625,
    762939453125,
    3814697265625,
    19073486328125,
    95367431640625,
    476837158203125,
    2384185791015625,
    11920928955078125,
    59604644775390625,
    298023223876953125,
];

/// `5^(26 * k)` as `(low, high)` 128-bit multipliers.
pub static POW5_SPLIT2: [(u64, u64); 13] = [
    (0, 72057594037927936),
    (10376293541461622784, 93132257461547851),
    (15052517733678820785, 120370621524202240),
    (6258995034005762182, 77787690973264271),
    (14893927168346708332, 100538234169297439),
    (4272820386026678563, 129942622070561240),
    (7330497575943398595, 83973451344588609),
    (18377130505971182927, 108533142064701048),
    (10038208235822497557, 140275798336537794),
    (7017903361312433648, 90651109995611182),
    (6366496589810271835, 117163813585596168),
    (9264989777501460624, 75715339914673581),
    (17074144231291089770, 97859783203563123),
];

/// Bit `i % 26` of entry `i / 26` is set when the derived `5^i` multiplier needs `+1`.
pub static POW5_OFFSETS: [u32; 13] = [
    0x00000000, 0x00000000, 0x00000000, 0x033c55be, 0x03db77d8, 0x0265ffb2, 0x00000800, 0x01a8ff56,
    0x00000000, 0x0037a200, 0x00004000, 0x03fffffc, 0x00003ffe,
];

/// `5^-(26 * k)` as `(low, high)` 128-bit multipliers.
pub static POW5_INV_SPLIT2: [(u64, u64); 13] = [
    (1, 288230376151711744),
    (7661987648932456967, 223007451985306231),
    (12652048002903177473, 172543658669764094),
    (5522544058086115566, 266998379490113760),
    (3181575136763469022, 206579990246952687),
    (4551508647133041040, 159833525776178802),
    (1116074521063664381, 247330401473104534),
    (17400360011128145022, 191362629322552438),
    (9297997190148906106, 148059663038321393),
    (11720143854957885429, 229111231347799689),
    (15401709288678291155, 177266229209635622),
    (3003071137298187333, 274306203439684434),
    (17516772882021341108, 212234145163966538),
];

/// Two bits per exponent, 16 exponents per entry: the correction (0 to 3) to add to the derived
/// `5^-i` multiplier, on top of the `+1` of the definition.
pub static POW5_INV_OFFSETS: [u32; 20] = [
    0x51505404, 0x55054514, 0x45555545, 0x05511411, 0x00505010, 0x00000004, 0x00000000, 0x00000000,
    0x55555040, 0x00505051, 0x00050040, 0x55554000, 0x51659559, 0x00001000, 0x15000010, 0x55455555,
    0x41404051, 0x00001010, 0x00000014, 0x00000000,
];

/// The 128-bit product `m * mul` shifted right by `delta`, as `(low, high)`, before correction.
#[inline]
fn mul_shift_128(m: u64, mul: (u64, u64), delta: u32) -> (u64, u64) {
    let (low1, mut high1) = umul128(m, mul.1);
    let (low0, high0) = umul128(m, mul.0);
    let sum = high0.wrapping_add(low1);
    if sum < high0 {
        high1 += 1;
    }
    // high1 | sum | low0
    (shiftright128(low0, sum, delta), shiftright128(sum, high1, delta))
}

/// Derives the multiplier for `5^i` without the correction bit.
#[inline]
fn derive_pow5(i: u32) -> (u64, u64) {
    let base = i / POW5_TABLE.len() as u32;
    let base2 = base * POW5_TABLE.len() as u32;
    let offset = i - base2;
    let mul = POW5_SPLIT2[base as usize];
    if offset == 0 {
        return mul
    }
    let m = POW5_TABLE[offset as usize];
    let delta = pow5bits(i as i32) - pow5bits(base2 as i32);
    mul_shift_128(m, mul, delta as u32)
}

/// Derives the multiplier for `5^-i` without the `+1` and the correction bits.
#[inline]
fn derive_inv_pow5(i: u32) -> (u64, u64) {
    let base = (i + POW5_TABLE.len() as u32 - 1) / POW5_TABLE.len() as u32;
    let base2 = base * POW5_TABLE.len() as u32;
    let offset = base2 - i;
    let mul = POW5_INV_SPLIT2[base as usize]; // 5^-base2
    if offset == 0 {
        return mul
    }
    let m = POW5_TABLE[offset as usize]; // 5^-base2 * 5^offset = 5^-i
    let delta = pow5bits(base2 as i32) - pow5bits(i as i32);
    mul_shift_128(m, (mul.0 - 1, mul.1), delta as u32)
}

/// Returns the [POW5_BITCOUNT]-bit multiplier for `5^i`, as `(low, high)`. `i <= POW5_MAX`.
#[inline]
pub fn compute_pow5(i: u32) -> (u64, u64) {
    debug_assert!(i <= POW5_MAX);
    let (low, high) = derive_pow5(i);
    if i % POW5_TABLE.len() as u32 == 0 {
        return (low, high)
    }
    let base = i as usize / POW5_TABLE.len();
    let correction = (POW5_OFFSETS[base] >> (i as usize % POW5_TABLE.len())) & 1;
    (low + correction as u64, high)
}

/// Returns the [POW5_INV_BITCOUNT]-bit multiplier for `5^-i`, as `(low, high)`.
/// `i <= POW5_INV_MAX`.
#[inline]
pub fn compute_inv_pow5(i: u32) -> (u64, u64) {
    debug_assert!(i <= POW5_INV_MAX);
    let (low, high) = derive_inv_pow5(i);
    if i % POW5_TABLE.len() as u32 == 0 {
        return (low, high)
    }
    let correction = (POW5_INV_OFFSETS[i as usize / 16] >> ((i % 16) << 1)) & 3;
    (low + 1 + correction as u64, high)
}
