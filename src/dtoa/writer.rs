//! Rendered output as a short list of parts, measured before anything is copied.

use crate::dtoa::fmt;
use crate::error::{Error, Result};

/// One piece of rendered output.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum Part<'a> {
    /// Given number of zero digits.
    Zero(usize),
    /// A single byte, such as the decimal point or the exponent marker.
    Byte(u8),
    /// A number up to 5 digits, with no leading zeros.
    Num(u16),
    /// A verbatim copy of given bytes.
    Copy(&'a [u8]),
}

impl Part<'_> {
    /// Returns the exact byte length of the part.
    #[inline]
    pub fn len(&self) -> usize {
        match *self {
            Part::Zero(n) => n,
            Part::Byte(_) => 1,
            Part::Num(v) => fmt::len_u64(v as u64),
            Part::Copy(bytes) => bytes.len(),
        }
    }

    /// Writes the part to the front of `out`, which must hold at least [Self::len] bytes, and
    /// returns its length.
    fn write(&self, out: &mut [u8]) -> usize {
        let len = self.len();
        let out = &mut out[.. len];
        match *self {
            Part::Zero(_) => out.fill(b'0'),
            Part::Byte(byte) => out[0] = byte,
            Part::Num(v) => fmt::print_u64_known_len(v as u64, out),
            Part::Copy(bytes) => out.copy_from_slice(bytes),
        }
        len
    }
}

/// Upper bound on the parts of one rendering: `d . ddd 000 E - 00 ddd`.
pub const MAX_PARTS: usize = 8;

/// A sign followed by up to [MAX_PARTS] parts.
#[derive(Debug)]
#[derive(Clone, Copy)]
pub struct Formatted<'a> {
    /// `""`, `"-"`, `"+"` or `" "`.
    pub sign: &'static str,
    parts: [Part<'a>; MAX_PARTS],
    count: usize,
}

impl<'a> Formatted<'a> {
    pub const fn new(sign: &'static str) -> Self {
        Formatted { sign, parts: [Part::Zero(0); MAX_PARTS], count: 0 }
    }

    /// Appends a part. Empty parts are dropped.
    #[inline]
    pub fn push(&mut self, part: Part<'a>) {
        if part.len() == 0 {
            return
        }
        debug_assert!(self.count < MAX_PARTS, "too many parts");
        self.parts[self.count] = part;
        self.count += 1;
    }

    pub fn parts(&self) -> &[Part<'a>] {
        &self.parts[.. self.count]
    }

    /// Returns the exact byte length of the whole output.
    pub fn len(&self) -> usize {
        self.sign.len() + self.parts().iter().map(Part::len).sum::<usize>()
    }

    /// Writes everything to the front of `out` and returns the number of bytes written. If `out`
    /// is too short, nothing is written.
    pub fn write(&self, out: &mut [u8]) -> Result<usize> {
        let required = self.len();
        if out.len() < required {
            crate::rejected!(required, available = out.len(), "output buffer too small");
            return Err(Error::BufferTooSmall { required, available: out.len() })
        }

        out[.. self.sign.len()].copy_from_slice(self.sign.as_bytes());
        let mut written = self.sign.len();
        for part in self.parts() {
            written += part.write(&mut out[written ..]);
        }
        debug_assert_eq!(written, required);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_lengths() {
        assert_eq!(Part::Zero(7).len(), 7);
        assert_eq!(Part::Byte(b'.').len(), 1);
        assert_eq!(Part::Num(0).len(), 1);
        assert_eq!(Part::Num(9).len(), 1);
        assert_eq!(Part::Num(10).len(), 2);
        assert_eq!(Part::Num(324).len(), 3);
        assert_eq!(Part::Num(u16::MAX).len(), 5);
        assert_eq!(Part::Copy(b"1234").len(), 4);
    }

    #[test]
    fn write_all() {
        let mut formatted = Formatted::new("-");
        formatted.push(Part::Copy(b"1"));
        formatted.push(Part::Byte(b'.'));
        formatted.push(Part::Copy(b"25"));
        formatted.push(Part::Zero(0));
        formatted.push(Part::Zero(2));
        formatted.push(Part::Byte(b'E'));
        formatted.push(Part::Num(307));
        assert_eq!(formatted.parts().len(), 6);
        assert_eq!(formatted.len(), 11);

        let mut buf = [b'#'; 16];
        assert_eq!(formatted.write(&mut buf), Ok(11));
        assert_eq!(&buf, b"-1.2500E307#####");
    }

    #[test]
    fn too_small() {
        let mut formatted = Formatted::new("");
        formatted.push(Part::Copy(b"12345"));

        let mut buf = [b'#'; 4];
        assert_eq!(formatted.write(&mut buf), Err(Error::BufferTooSmall { required: 5, available: 4 }));
        assert_eq!(&buf, b"####");

        let mut buf = [b'#'; 5];
        assert_eq!(formatted.write(&mut buf), Ok(5));
        assert_eq!(&buf, b"12345");
    }

    #[test]
    fn empty() {
        let formatted = Formatted::new("");
        assert_eq!(formatted.len(), 0);
        assert_eq!(formatted.write(&mut []), Ok(0));
    }
}
