//! Routines for printing integers as ASCII digits.

const DIGITS_LUT: &[u8; 200] =
    b"00010203040506070809\
      10111213141516171819\
      20212223242526272829\
      30313233343536373839\
      40414243444546474849\
      50515253545556575859\
      60616263646566676869\
      70717273747576777879\
      80818283848586878889\
      90919293949596979899";

/// Writes the two digits of `lo - 100 * hi` at `buf[offset..offset + 2]`.
#[inline]
fn write_lut(buf: &mut [u8; 20], offset: usize, lo: u64, hi: u64) {
    let index = (lo * 2 - hi * 200) as usize;
    buf[offset .. offset + 2].copy_from_slice(&DIGITS_LUT[index .. index + 2]);
}

/// Number of digits of `x`. Invariant: `x` has at most 17 digits.
#[inline]
pub fn len_u64(x: u64) -> usize {
    debug_assert!(x < 10u64.pow(17));
    // Most mantissas have 16 or 17 digits, so count down from the top.
    let mut len = 17;
    let mut bound = 10_000_000_000_000_000;
    while len > 1 && x < bound {
        len -= 1;
        bound /= 10;
    }
    len
}

/// Writes the 8 digits of `group < 10^8` at `buf[offset..offset + 8]`, two at a time.
#[inline]
fn write_group(buf: &mut [u8; 20], offset: usize, group: u64) {
    // Multiply-shifts standing in for the divisions by 100, 10^4 and 10^6.
    let hundreds = (group * 1374389535) >> 37;
    let ten_thousands = (group * 3518437209) >> 45;
    let millions = (group * 1125899907) >> 50;

    write_lut(buf, offset + 6, group, hundreds);
    write_lut(buf, offset + 4, hundreds, ten_thousands);
    write_lut(buf, offset + 2, ten_thousands, millions);
    write_lut(buf, offset, millions, 0);
}

/// Prints the low `out.len()` digits of `x` into `out`, zero padded on the left. Invariant: `x`
/// has at most 17 digits and `out` holds at most 17 bytes.
#[inline]
pub fn print_u64_known_len(x: u64, out: &mut [u8]) {
    debug_assert!(x < 10u64.pow(17));
    debug_assert!(out.len() <= 17);

    const GROUP: u64 = 100_000_000;
    let mut digits = [b'0'; 20];
    write_group(&mut digits, 12, x % GROUP);
    write_group(&mut digits, 4, x / GROUP % GROUP);
    digits[3] = b'0' + (x / (GROUP * GROUP)) as u8;

    out.copy_from_slice(&digits[20 - out.len() ..]);
}

/// Prints `x` into the front of `out`, returning the number of bytes written. `out` must hold at
/// least [len_u64]`(x)` bytes.
#[inline]
pub fn print_u64(x: u64, out: &mut [u8]) -> usize {
    let len = len_u64(x);
    print_u64_known_len(x, &mut out[.. len]);
    len
}
