//! Turning digits into parts according to a [FormatSpec].

use crate::dtoa::exact::ExactDecimal;
use crate::dtoa::float::{FloatBits, FloatClass};
use crate::dtoa::fmt;
use crate::dtoa::format::{FormatSpec, Mode, PLAIN_MAX_EXPONENT, PLAIN_MIN_EXPONENT};
use crate::dtoa::shortest::Decimal;
use crate::dtoa::writer::{Formatted, Part};

/// Plain notation of `digits * 10^exponent`, with at least `min_frac` digits after the decimal
/// point. Empty `digits` stand for zero.
fn plain<'a>(digits: &'a [u8], exponent: i32, min_frac: usize, force_point: bool, out: &mut Formatted<'a>) {
    let frac = if digits.is_empty() {
        // 0
        out.push(Part::Byte(b'0'));
        0
    } else {
        let leading = exponent + digits.len() as i32 - 1;
        if leading < 0 {
            // 1234e-6 -> 0.001234
            out.push(Part::Copy(b"0."));
            out.push(Part::Zero((-leading - 1) as usize));
            out.push(Part::Copy(digits));
            -exponent as usize
        } else if exponent < 0 {
            // 1234e-2 -> 12.34
            let (int, frac) = digits.split_at(leading as usize + 1);
            out.push(Part::Copy(int));
            out.push(Part::Byte(b'.'));
            out.push(Part::Copy(frac));
            frac.len()
        } else {
            // 1234e2 -> 123400
            out.push(Part::Copy(digits));
            out.push(Part::Zero(exponent as usize));
            0
        }
    };

    if frac > 0 {
        out.push(Part::Zero(min_frac.saturating_sub(frac)));
    } else if min_frac > 0 {
        out.push(Part::Byte(b'.'));
        out.push(Part::Zero(min_frac));
    } else if force_point {
        out.push(Part::Copy(b".0"));
    }
}

/// Exponential notation `d.ddd E x` where `d` is the first of `digits` and `x` is its power of
/// 10, with at least `min_frac` digits after the decimal point.
fn exponential<'a>(digits: &'a [u8], leading: i32, min_frac: usize, spec: &FormatSpec, out: &mut Formatted<'a>) {
    let (first, rest) = if digits.is_empty() { (&b"0"[..], &[][..]) } else { digits.split_at(1) };
    out.push(Part::Copy(first));
    if !rest.is_empty() || min_frac > 0 {
        out.push(Part::Byte(b'.'));
        out.push(Part::Copy(rest));
        out.push(Part::Zero(min_frac.saturating_sub(rest.len())));
    }

    out.push(Part::Byte(spec.exponent_marker()));
    if leading < 0 {
        out.push(Part::Byte(b'-'));
    } else if spec.explicit_exponent_sign {
        out.push(Part::Byte(b'+'));
    }
    // |leading| <= 324
    let magnitude = leading.unsigned_abs() as u16;
    let width = fmt::len_u64(magnitude as u64);
    out.push(Part::Zero((spec.min_exponent_digits as usize).saturating_sub(width)));
    out.push(Part::Num(magnitude));
}

/// Whether a value whose first digit has power of 10 `leading` is printed in plain notation by
/// the self-selecting modes.
#[inline]
fn is_plain(leading: i32) -> bool {
    (PLAIN_MIN_EXPONENT ..= PLAIN_MAX_EXPONENT).contains(&leading)
}

/// Renders `num` according to `spec` and hands the result to `write`. The digits live on this
/// function's stack, so they are only borrowed for the duration of the call.
///
/// `spec` must be valid (see [FormatSpec::validate]); this is only checked in debug builds.
pub fn render<R>(num: f64, spec: &FormatSpec, write: impl FnOnce(&Formatted<'_>) -> R) -> R {
    debug_assert!(spec.validate().is_ok());

    let bits = FloatBits::new(num);
    let sign = spec.sign.prefix(bits.sign);

    match bits.classify() {
        FloatClass::Nan => {
            let mut out = Formatted::new("");
            out.push(Part::Copy(if spec.uppercase { b"NAN" } else { b"NaN" }));
            return write(&out)
        }
        FloatClass::Infinite => {
            let mut out = Formatted::new(sign);
            out.push(Part::Copy(if spec.uppercase { b"INF" } else { b"inf" }));
            return write(&out)
        }
        FloatClass::Zero | FloatClass::Subnormal | FloatClass::Normal => {}
    }

    let trim = spec.trim_trailing_zeros;
    let precision = spec.precision_or_default();

    match spec.mode {
        Mode::Shortest => {
            let mut out = Formatted::new(sign);
            let decimal = Decimal::shortest(&bits);
            let mut buf = [0u8; 17];
            let digits = match decimal.mantissa {
                0 => &buf[.. 0],
                mantissa => {
                    let len = fmt::print_u64(mantissa, &mut buf);
                    &buf[.. len]
                }
            };
            let leading = decimal.scientific_exponent();
            if digits.is_empty() || is_plain(leading) {
                plain(digits, decimal.exponent, 0, spec.force_decimal_point, &mut out);
            } else {
                exponential(digits, leading, 0, spec, &mut out);
            }
            write(&out)
        }
        Mode::Fixed => {
            let mut out = Formatted::new(sign);
            let mut exact = ExactDecimal::new(&bits);
            exact.round_to_position(-(precision as i32));
            let min_frac = if trim { 0 } else { precision };
            plain(exact.digits(), exact.exponent(), min_frac, false, &mut out);
            write(&out)
        }
        Mode::Scientific => {
            let mut out = Formatted::new(sign);
            let mut exact = ExactDecimal::new(&bits);
            if !exact.is_zero() {
                exact.round_to_digits(precision as i32 + 1);
            }
            let min_frac = if trim { 0 } else { precision };
            exponential(exact.digits(), exact.scientific_exponent(), min_frac, spec, &mut out);
            write(&out)
        }
        Mode::General => {
            let mut out = Formatted::new(sign);
            let significant = precision.max(1) as i32;
            let mut exact = ExactDecimal::new(&bits);
            if !exact.is_zero() {
                exact.round_to_digits(significant);
            }
            let leading = exact.scientific_exponent();
            if is_plain(leading) {
                let min_frac = if trim { 0 } else { (significant - 1 - leading).max(0) as usize };
                plain(exact.digits(), exact.exponent(), min_frac, false, &mut out);
            } else {
                let min_frac = if trim { 0 } else { significant as usize - 1 };
                exponential(exact.digits(), leading, min_frac, spec, &mut out);
            }
            write(&out)
        }
    }
}
