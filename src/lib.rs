//! Conversion of `f64` values to decimal text, after [Ryū](https://github.com/ulfjack/ryu).
//!
//! Four layouts are available, selected by [FormatSpec::mode]:
//!
//! * [Mode::Shortest] prints the fewest digits that parse back to the same value;
//! * [Mode::Fixed] prints a given number of digits after the decimal point;
//! * [Mode::Scientific] prints `d.ddd` with a given number of digits after the point, then an
//!   exponent;
//! * [Mode::General] prints a given number of significant digits, in plain or exponential
//!   notation depending on the magnitude.
//!
//! The last three round the exact binary value, half to even, so their output is the same as
//! `std`'s `{:.p}` and `{:.pe}`.
//!
//! Nothing here allocates. Output goes either to a caller-provided slice ([write] and friends),
//! which is never partially written, or to a [Buffer] that is large enough for any valid request.
//!
//! ## Example
//!
//! ```
//! let mut buffer = ryufmt::Buffer::new();
//! assert_eq!(buffer.format(1.5e300), "1.5E300");
//! assert_eq!(buffer.format_fixed(3.14159, 2), Ok("3.14"));
//! assert_eq!(buffer.format_scientific(3.14159, 10), Ok("3.1415900000E0"));
//! assert_eq!(buffer.format_general(0.0001234, 3), Ok("0.000123"));
//! ```

#![cfg_attr(not(test), no_std)]

/// Reports a rejected request as a `debug` event, when the `tracing` feature is on.
macro_rules! rejected {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
pub(crate) use rejected;

mod dtoa;
mod error;

pub use dtoa::float::{FloatBits, FloatClass};
pub use dtoa::format::{
    fixed_max_len, general_max_len, max_len, scientific_max_len, FormatSpec, Mode, SignDisplay,
    BUFFER_LEN, DEFAULT_PRECISION, MAX_EXPONENT_DIGITS, MAX_PRECISION, SHORTEST_MAX_LEN,
};
pub use dtoa::shortest::Decimal;
pub use error::{Error, Result};

/// Writes `value` laid out according to `spec` to the front of `out`, and returns the number of
/// bytes written.
///
/// [max_len] bytes are always enough. On error nothing is written.
///
/// ## Example
///
/// ```
/// use ryufmt::{Error, FormatSpec};
///
/// let mut buf = [0u8; 8];
/// assert_eq!(ryufmt::write(-0.25, &FormatSpec::fixed(3), &mut buf), Ok(6));
/// assert_eq!(&buf[.. 6], b"-0.250");
/// assert_eq!(
///     ryufmt::write(1e100, &FormatSpec::fixed(0), &mut buf),
///     Err(Error::BufferTooSmall { required: 101, available: 8 }),
/// );
/// ```
pub fn write(value: f64, spec: &FormatSpec, out: &mut [u8]) -> Result<usize> {
    spec.validate()?;
    dtoa::render(value, spec, |formatted| formatted.write(out))
}

/// [write] with [FormatSpec::shortest]. [SHORTEST_MAX_LEN] bytes are always enough.
pub fn write_shortest(value: f64, out: &mut [u8]) -> Result<usize> {
    write(value, &FormatSpec::shortest(), out)
}

/// [write] with [FormatSpec::fixed]. [fixed_max_len] bytes are always enough.
pub fn write_fixed(value: f64, precision: usize, out: &mut [u8]) -> Result<usize> {
    write(value, &FormatSpec::fixed(precision), out)
}

/// [write] with [FormatSpec::scientific]. [scientific_max_len] bytes are always enough.
pub fn write_scientific(value: f64, precision: usize, out: &mut [u8]) -> Result<usize> {
    write(value, &FormatSpec::scientific(precision), out)
}

/// [write] with [FormatSpec::general]. [general_max_len] bytes are always enough.
pub fn write_general(value: f64, precision: usize, out: &mut [u8]) -> Result<usize> {
    write(value, &FormatSpec::general(precision), out)
}

/// The shortest decimal `mantissa * 10^exponent` that parses back to `|value|`, or `None` if
/// `value` is infinite or NaN. Zeros give a zero mantissa and exponent.
///
/// ```
/// use ryufmt::Decimal;
///
/// assert_eq!(ryufmt::to_decimal(-0.3), Some(Decimal { mantissa: 3, exponent: -1 }));
/// assert_eq!(ryufmt::to_decimal(f64::NAN), None);
/// ```
pub fn to_decimal(value: f64) -> Option<Decimal> {
    let bits = FloatBits::new(value);
    match bits.classify() {
        FloatClass::Infinite | FloatClass::Nan => None,
        FloatClass::Zero | FloatClass::Subnormal | FloatClass::Normal => Some(Decimal::shortest(&bits)),
    }
}

/// Safe API for formatting floating point numbers to text.
///
/// The buffer holds [BUFFER_LEN] bytes, enough for any valid [FormatSpec], so only an invalid
/// request can fail.
///
/// ## Example
///
/// ```
/// let mut buffer = ryufmt::Buffer::new();
/// let printed = buffer.format(1.234);
/// assert_eq!(printed, "1.234");
/// ```
#[derive(Clone, Copy)]
pub struct Buffer {
    bytes: [u8; BUFFER_LEN],
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Zero-fills [BUFFER_LEN] bytes. In a hot loop, create one buffer and reuse it.
    #[inline]
    pub fn new() -> Self {
        Buffer { bytes: [0; BUFFER_LEN] }
    }

    /// Prints `num` with [FormatSpec::shortest] into this buffer, and returns a reference to its
    /// string representation within the buffer.
    ///
    /// This function formats NaN as the string `"NaN"`, positive infinity as `"inf"`, and negative
    /// infinity as `"-inf"`, to match [std::fmt].
    pub fn format(&mut self, num: f64) -> &str {
        let spec = FormatSpec::shortest();
        let len = dtoa::render(num, &spec, |formatted| {
            debug_assert!(formatted.len() <= SHORTEST_MAX_LEN);
            match formatted.write(&mut self.bytes) {
                Ok(len) => len,
                // Unreachable: shortest output never exceeds SHORTEST_MAX_LEN < BUFFER_LEN.
                Err(err) => {
                    debug_assert!(false, "shortest output overflowed the buffer: {err}");
                    0
                }
            }
        });
        self.as_str(len)
    }

    /// Prints `num` rounded to `precision` digits after the decimal point.
    pub fn format_fixed(&mut self, num: f64, precision: usize) -> Result<&str> {
        self.format_with(num, &FormatSpec::fixed(precision))
    }

    /// Prints `num` in scientific notation, rounded to `precision` digits after the decimal point.
    pub fn format_scientific(&mut self, num: f64, precision: usize) -> Result<&str> {
        self.format_with(num, &FormatSpec::scientific(precision))
    }

    /// Prints `num` rounded to `precision` significant digits, without trailing zeros.
    pub fn format_general(&mut self, num: f64, precision: usize) -> Result<&str> {
        self.format_with(num, &FormatSpec::general(precision))
    }

    /// Prints `num` laid out according to `spec`. Fails only if `spec` is invalid.
    pub fn format_with(&mut self, num: f64, spec: &FormatSpec) -> Result<&str> {
        let len = write(num, spec, &mut self.bytes)?;
        Ok(self.as_str(len))
    }

    #[inline]
    fn as_str(&self, len: usize) -> &str {
        debug_assert!(self.bytes[.. len].is_ascii());
        // SAFETY: everything the renderer writes is ASCII: digits, signs, `.`, the special
        // values, and an exponent marker checked by `FormatSpec::validate`.
        unsafe { core::str::from_utf8_unchecked(&self.bytes[.. len]) }
    }
}
