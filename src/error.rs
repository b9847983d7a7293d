use core::fmt;

/// Failures of the arithmetic core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// empty string, or a character outside `0-9a-fA-F`
    InvalidFormat,
    /// an argument outside the domain of the operation
    InvalidArgument,
    /// the divisor (or modulus) normalizes to zero
    DivisionByZero,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidFormat => "invalid hexadecimal number",
            Error::InvalidArgument => "invalid argument",
            Error::DivisionByZero => "division by zero",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
