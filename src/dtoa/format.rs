//! Output layouts, and the buffer sizes they need.

use crate::error::{Error, Result};

/// Largest accepted precision for [Mode::Fixed], [Mode::Scientific] and [Mode::General]. Beyond
/// 1074 fractional digits every `f64` is printed exactly, so larger values only add zeros.
pub const MAX_PRECISION: usize = 1100;

/// Largest accepted [FormatSpec::min_exponent_digits].
pub const MAX_EXPONENT_DIGITS: u8 = 4;

/// Precision used by the non-shortest modes when none is given, as in `printf`.
pub const DEFAULT_PRECISION: usize = 6;

/// Longest output of [Mode::Shortest]: a sign, 17 digits, a decimal point, the exponent marker,
/// its sign and up to [MAX_EXPONENT_DIGITS] exponent digits.
pub const SHORTEST_MAX_LEN: usize = 1 + 17 + 1 + 1 + 1 + MAX_EXPONENT_DIGITS as usize;

/// Digits in the integer part of `f64::MAX`.
const MAX_INTEGER_DIGITS: usize = 309;

/// Longest output of [Mode::Fixed] with `precision` fractional digits.
pub const fn fixed_max_len(precision: usize) -> usize {
    1 + MAX_INTEGER_DIGITS + (precision > 0) as usize + precision
}

/// Longest output of [Mode::Scientific] with `precision` digits after the point.
pub const fn scientific_max_len(precision: usize) -> usize {
    1 + 1 + (precision > 0) as usize + precision + 1 + 1 + MAX_EXPONENT_DIGITS as usize
}

/// Longest output of [Mode::General] with `precision` significant digits.
pub const fn general_max_len(precision: usize) -> usize {
    let digits = if precision > PLAIN_MAX_EXPONENT as usize + 1 {
        precision
    } else {
        PLAIN_MAX_EXPONENT as usize + 1
    };
    1 + digits + 7
}

/// Longest output of `spec` for any `f64`. Only meaningful for a valid `spec`.
pub const fn max_len(spec: &FormatSpec) -> usize {
    match spec.mode {
        Mode::Shortest => SHORTEST_MAX_LEN,
        Mode::Fixed => fixed_max_len(spec.precision_or_default()),
        Mode::Scientific => scientific_max_len(spec.precision_or_default()),
        Mode::General => general_max_len(spec.precision_or_default()),
    }
}

/// A buffer of this many bytes holds the output of any valid [FormatSpec].
pub const BUFFER_LEN: usize = {
    let fixed = fixed_max_len(MAX_PRECISION);
    let scientific = scientific_max_len(MAX_PRECISION);
    let general = general_max_len(MAX_PRECISION);
    let mut len = SHORTEST_MAX_LEN;
    if fixed > len { len = fixed }
    if scientific > len { len = scientific }
    if general > len { len = general }
    len
};

/// Shortest and General print in plain notation when the leading digit's power of 10 lies in
/// `PLAIN_MIN_EXPONENT ..= PLAIN_MAX_EXPONENT`, and in exponential notation otherwise.
pub const PLAIN_MIN_EXPONENT: i32 = -5;
pub const PLAIN_MAX_EXPONENT: i32 = 15;

/// A printable ASCII byte that cannot be confused with the digits, signs or decimal point around
/// it.
const fn is_exponent_char(byte: u8) -> bool {
    byte.is_ascii_graphic() && !matches!(byte, b'0' ..= b'9' | b'+' | b'-' | b'.')
}

/// How digits are chosen and laid out.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(Default)]
pub enum Mode {
    /// The fewest digits that parse back to the same value; plain or exponential by magnitude.
    #[default]
    Shortest,
    /// The exact value rounded to `precision` digits after the decimal point.
    Fixed,
    /// The exact value rounded to `precision` digits after the point of `d.ddd`, then an
    /// exponent.
    Scientific,
    /// The exact value rounded to `precision` significant digits; plain or exponential by
    /// magnitude.
    General,
}

/// Which signs are printed.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
#[derive(Default)]
pub enum SignDisplay {
    /// `-` for negative values (including `-0.0` and `-inf`), nothing otherwise.
    #[default]
    Negative,
    /// `-` or `+`.
    Always,
    /// `-` or a space.
    Space,
}

impl SignDisplay {
    pub(crate) const fn prefix(self, negative: bool) -> &'static str {
        match (self, negative) {
            (_, true) => "-",
            (SignDisplay::Negative, false) => "",
            (SignDisplay::Always, false) => "+",
            (SignDisplay::Space, false) => " ",
        }
    }
}

/// The layout requested for one conversion.
///
/// ## Example
///
/// ```
/// use ryufmt::{FormatSpec, SignDisplay};
///
/// let spec = FormatSpec::scientific(3)
///     .with_sign(SignDisplay::Always)
///     .with_exponent_char(b'e')
///     .with_explicit_exponent_sign(true)
///     .with_min_exponent_digits(2);
/// let mut buf = [0u8; 16];
/// let n = ryufmt::write(1234.5, &spec, &mut buf).unwrap();
/// assert_eq!(&buf[.. n], b"+1.234e+03");
/// ```
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct FormatSpec {
    pub mode: Mode,
    /// Digits after the point for Fixed and Scientific, significant digits for General. `None`
    /// means [DEFAULT_PRECISION]. Ignored by Shortest.
    pub precision: Option<usize>,
    pub sign: SignDisplay,
    /// The exponent marker, `E` by default.
    pub exponent_char: u8,
    /// Print `+` before non-negative exponents.
    pub explicit_exponent_sign: bool,
    /// Pad the exponent with leading zeros to at least this many digits.
    pub min_exponent_digits: u8,
    /// Uppercase the exponent marker and the special values (`NAN`, `INF`).
    pub uppercase: bool,
    /// In Shortest mode, print plain integral values with a `.0`, as `ryu` and `std` do.
    pub force_decimal_point: bool,
    /// In Fixed, Scientific and General modes, drop trailing fractional zeros, and the decimal
    /// point if nothing follows it.
    pub trim_trailing_zeros: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::shortest()
    }
}

impl FormatSpec {
    pub const fn shortest() -> Self {
        FormatSpec {
            mode: Mode::Shortest,
            precision: None,
            sign: SignDisplay::Negative,
            exponent_char: b'E',
            explicit_exponent_sign: false,
            min_exponent_digits: 1,
            uppercase: false,
            force_decimal_point: false,
            trim_trailing_zeros: false,
        }
    }

    pub const fn fixed(precision: usize) -> Self {
        FormatSpec { mode: Mode::Fixed, precision: Some(precision), ..Self::shortest() }
    }

    pub const fn scientific(precision: usize) -> Self {
        FormatSpec { mode: Mode::Scientific, precision: Some(precision), ..Self::shortest() }
    }

    /// General notation trims trailing zeros by default, as `printf("%g")` does.
    pub const fn general(precision: usize) -> Self {
        FormatSpec {
            mode: Mode::General,
            precision: Some(precision),
            trim_trailing_zeros: true,
            ..Self::shortest()
        }
    }

    pub const fn with_precision(self, precision: usize) -> Self {
        FormatSpec { precision: Some(precision), ..self }
    }

    pub const fn with_sign(self, sign: SignDisplay) -> Self {
        FormatSpec { sign, ..self }
    }

    pub const fn with_exponent_char(self, exponent_char: u8) -> Self {
        FormatSpec { exponent_char, ..self }
    }

    pub const fn with_explicit_exponent_sign(self, explicit_exponent_sign: bool) -> Self {
        FormatSpec { explicit_exponent_sign, ..self }
    }

    pub const fn with_min_exponent_digits(self, min_exponent_digits: u8) -> Self {
        FormatSpec { min_exponent_digits, ..self }
    }

    pub const fn with_uppercase(self, uppercase: bool) -> Self {
        FormatSpec { uppercase, ..self }
    }

    pub const fn with_force_decimal_point(self, force_decimal_point: bool) -> Self {
        FormatSpec { force_decimal_point, ..self }
    }

    pub const fn with_trim_trailing_zeros(self, trim_trailing_zeros: bool) -> Self {
        FormatSpec { trim_trailing_zeros, ..self }
    }

    /// The precision in effect, with `None` replaced by [DEFAULT_PRECISION].
    #[inline]
    pub const fn precision_or_default(&self) -> usize {
        match self.precision {
            Some(precision) => precision,
            None => DEFAULT_PRECISION,
        }
    }

    /// The exponent marker as printed.
    #[inline]
    pub(crate) const fn exponent_marker(&self) -> u8 {
        if self.uppercase {
            self.exponent_char.to_ascii_uppercase()
        } else {
            self.exponent_char
        }
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.mode != Mode::Shortest {
            let precision = self.precision_or_default();
            if precision > MAX_PRECISION {
                crate::rejected!(precision, max = MAX_PRECISION, "precision out of range");
                return Err(Error::InvalidPrecision { precision, max: MAX_PRECISION })
            }
        }
        if !(1 ..= MAX_EXPONENT_DIGITS).contains(&self.min_exponent_digits) {
            crate::rejected!(digits = self.min_exponent_digits, "exponent width out of range");
            return Err(Error::InvalidExponentWidth {
                digits: self.min_exponent_digits,
                max: MAX_EXPONENT_DIGITS,
            })
        }
        if !is_exponent_char(self.exponent_char) {
            crate::rejected!(byte = self.exponent_char, "invalid exponent marker");
            return Err(Error::InvalidExponentChar { byte: self.exponent_char })
        }
        Ok(())
    }
}
