/// Ways a conversion request can be rejected.
///
/// All of them are detected before any byte is written to the output.
#[derive(thiserror::Error, Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum Error {
    #[error("output needs {required} bytes but the buffer holds {available}")]
    BufferTooSmall { required: usize, available: usize },
    #[error("precision {precision} is above the maximum of {max}")]
    InvalidPrecision { precision: usize, max: usize },
    #[error("minimum exponent width {digits} is outside 1..={max}")]
    InvalidExponentWidth { digits: u8, max: u8 },
    #[error("exponent marker {byte:#04x} is not a printable ASCII character outside digits, signs and `.`")]
    InvalidExponentChar { byte: u8 },
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::BufferTooSmall { required: 25, available: 8 }.to_string(),
            "output needs 25 bytes but the buffer holds 8",
        );
        assert_eq!(
            Error::InvalidPrecision { precision: 5000, max: 1100 }.to_string(),
            "precision 5000 is above the maximum of 1100",
        );
        assert_eq!(
            Error::InvalidExponentWidth { digits: 0, max: 4 }.to_string(),
            "minimum exponent width 0 is outside 1..=4",
        );
        assert_eq!(Error::InvalidExponentChar { byte: b'\n' }.to_string(), "exponent marker 0x0a is not a printable ASCII character outside digits, signs and `.`");
    }
}
