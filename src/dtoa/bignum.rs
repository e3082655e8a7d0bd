//! A fixed-capacity unsigned big integer, just large enough to hold the exact decimal significand of
//! any finite `f64`.
//!
//! The largest value ever built is `(2^53 - 1) * 5^1074 < 2^2547` (the exact digits of the
//! smallest subnormals), which needs 80 limbs of 32 bits. Nothing here allocates.

use core::cmp::Ordering;

/// Number of 32-bit limbs.
pub const LIMBS: usize = 80;

/// The largest power of 5 that fits in a limb.
const POW5_LIMB: u32 = 1220703125; // 5^13
const POW5_LIMB_EXP: usize = 13;

/// Little-endian limbs; `base[size..]` is always zero.
#[derive(Debug)]
#[derive(Clone, Copy)]
pub struct Big {
    size: usize,
    base: [u32; LIMBS],
}

impl Big {
    pub const fn from_u64(mut v: u64) -> Self {
        let mut base = [0; LIMBS];
        let mut size = 0;
        while v > 0 {
            base[size] = v as u32;
            v >>= 32;
            size += 1;
        }
        Big { size, base }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.size == 0
    }

    /// Number of significant bits; zero has none.
    pub fn bit_length(&self) -> usize {
        match self.size {
            0 => 0,
            n => n * 32 - self.base[n - 1].leading_zeros() as usize,
        }
    }

    pub fn mul_small(&mut self, other: u32) -> &mut Self {
        let mut carry = 0u64;
        for limb in &mut self.base[.. self.size] {
            let v = *limb as u64 * other as u64 + carry;
            *limb = v as u32;
            carry = v >> 32;
        }
        if carry > 0 {
            debug_assert!(self.size < LIMBS, "bignum overflow");
            self.base[self.size] = carry as u32;
            self.size += 1;
        }
        self
    }

    pub fn mul_pow2(&mut self, bits: usize) -> &mut Self {
        if self.is_zero() {
            return self
        }
        let limbs = bits / 32;
        let bits = (bits % 32) as u32;
        debug_assert!(self.bit_length() + limbs * 32 + bits as usize <= LIMBS * 32, "bignum overflow");

        if limbs > 0 {
            self.base.copy_within(.. self.size, limbs);
            self.base[.. limbs].fill(0);
            self.size += limbs;
        }
        if bits > 0 {
            let mut carry = 0;
            for limb in &mut self.base[limbs .. self.size] {
                let v = *limb;
                *limb = v << bits | carry;
                carry = v >> (32 - bits);
            }
            if carry > 0 {
                self.base[self.size] = carry;
                self.size += 1;
            }
        }
        self
    }

    pub fn mul_pow5(&mut self, mut e: usize) -> &mut Self {
        while e >= POW5_LIMB_EXP {
            self.mul_small(POW5_LIMB);
            e -= POW5_LIMB_EXP;
        }
        self.mul_small(5u32.pow(e as u32))
    }

    /// Divides in place by `other`, returning the remainder.
    pub fn div_rem_small(&mut self, other: u32) -> u32 {
        debug_assert!(other != 0);
        let mut rem = 0u64;
        for limb in self.base[.. self.size].iter_mut().rev() {
            let v = rem << 32 | *limb as u64;
            *limb = (v / other as u64) as u32;
            rem = v % other as u64;
        }
        while self.size > 0 && self.base[self.size - 1] == 0 {
            self.size -= 1;
        }
        rem as u32
    }
}

impl PartialEq for Big {
    fn eq(&self, other: &Self) -> bool {
        self.base[.. self.size] == other.base[.. other.size]
    }
}

impl Eq for Big {}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Big {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size.cmp(&other.size)
            .then_with(|| self.base[.. self.size].iter().rev().cmp(other.base[.. other.size].iter().rev()))
    }
}

#[cfg(test)]
impl Big {
    pub fn from_u128(v: u128) -> Self {
        let mut big = Big::from_u64((v >> 64) as u64);
        big.mul_pow2(64);
        let low = Big::from_u64(v as u64);
        for i in 0 .. low.size {
            big.base[i] = low.base[i];
        }
        big.size = big.size.max(low.size);
        big
    }

    pub fn pow2(e: usize) -> Self {
        let mut big = Big::from_u64(1);
        big.mul_pow2(e);
        big
    }

    pub fn pow5(e: usize) -> Self {
        let mut big = Big::from_u64(1);
        big.mul_pow5(e);
        big
    }

    /// The low 128 bits of `self >> shift`.
    pub fn low_u128_after_shift(&self, shift: usize) -> u128 {
        let mut out = 0u128;
        for bit in (0 .. 128).rev() {
            let src = shift + bit;
            let limb = src / 32;
            let set = limb < self.size && self.base[limb] >> (src % 32) & 1 == 1;
            out = out << 1 | set as u128;
        }
        out
    }
}
