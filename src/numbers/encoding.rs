//! Hexadecimal, the canonical external representation.
//!
//! Most significant byte first, uppercase, two characters per digit.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use super::BigNumber;
use crate::{Digit, Error, Result};

fn nibble(c: u8) -> Result<Digit> {
    (c as char).to_digit(16).map(|n| n as Digit).ok_or(Error::InvalidFormat)
}

impl BigNumber {
    /// Parses unsigned hexadecimal without prefix.
    ///
    /// Characters are paired from the right; an odd leftover leftmost
    /// character forms a digit of its own. The result has
    /// `ceil(s.len() / 2)` digits, leading zeros included.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidFormat);
        }

        let digits = s.as_bytes()
            .rchunks(2)
            .map(|pair| pair.iter().try_fold(0, |digit: Digit, &c| -> Result<Digit> { Ok((digit << 4) | nibble(c)?) }))
            .collect::<Result<Vec<Digit>>>()?;

        Ok(Self::from_vec(digits))
    }

    /// Uppercase hex of the normalized value; zero is `"00"`.
    pub fn to_hex(&self) -> String {
        alloc::format!("{:X}", self)
    }
}

impl FromStr for BigNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::UpperHex for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.significant_digits().iter().rev().try_for_each(|digit| write!(f, "{:02X}", digit))
    }
}

impl fmt::LowerHex for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.significant_digits().iter().rev().try_for_each(|digit| write!(f, "{:02x}", digit))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

#[cfg(not(feature = "hex-debug"))]
impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({:X})", self)
    }
}

#[cfg(feature = "hex-debug")]
impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        write!(f, "BigNumber({})", delog::hex_str!(bytes.as_slice(), 4))
    }
}
