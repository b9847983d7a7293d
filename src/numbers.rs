//! The [`BigNumber`] representation.
//!
//! Internal representation is little-endian: index 0 holds the least
//! significant digit. A number always owns at least one digit.

use alloc::{vec, vec::Vec};

use rand_core::RngCore;
use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::{Digit, Error, Result};

mod encoding;
mod trait_implementations;

/// Arbitrary-precision unsigned integer in base 256.
///
/// Values constructed with a requested minimum width keep that width
/// (it determines where [subtraction][core::ops::Sub] wraps around),
/// results of arithmetic are always normalized.
///
/// Comparison and equality only look at the significant digits, so
/// `zero(1) == zero(4)`.
#[derive(Clone)]
pub struct BigNumber(pub(crate) Vec<Digit>);

/// A little-endian digit slice, viewed as a number.
///
/// Slices of digits compare lexicographically starting at index 0,
/// which is the least significant place for us. This view orders them
/// as numbers instead, ignoring most-significant zero digits.
#[derive(RefCast)]
#[repr(transparent)]
pub(crate) struct Digits(pub(crate) [Digit]);

impl Digits {
    pub(crate) fn new(digits: &[Digit]) -> &Self {
        Digits::ref_cast(digits)
    }

    /// The digits up to and including the most significant non-zero one.
    ///
    /// Empty if zero.
    pub(crate) fn significant(&self) -> &[Digit] {
        let len = self.0.iter().rposition(|&digit| digit != 0).map_or(0, |i| i + 1);
        &self.0[..len]
    }
}

/// The digits up to and including the most significant non-zero one (empty if zero).
#[inline]
pub(crate) fn significant(digits: &[Digit]) -> &[Digit] {
    Digits::new(digits).significant()
}

// c'tors and such
impl BigNumber {
    /// Zero, with at least `width` digits.
    pub fn zero(width: usize) -> Self {
        Self(vec![0; width.max(1)])
    }

    /// One, with at least `width` digits.
    pub fn one(width: usize) -> Self {
        let mut one = Self::zero(width);
        one.0[0] = 1;
        one
    }

    /// From little-endian digits, zero-extended to at least `width` digits.
    ///
    /// Fails if this would produce a number without digits.
    pub fn from_digits(digits: &[Digit], width: usize) -> Result<Self> {
        if digits.is_empty() && width == 0 {
            return Err(Error::InvalidArgument);
        }
        let mut number = digits.to_vec();
        if number.len() < width {
            number.resize(width, 0);
        }
        Ok(Self(number))
    }

    /// From big-endian bytes, as used by RSA (the empty slice is zero).
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut digits: Vec<Digit> = bytes.iter().rev().copied().collect();
        if digits.is_empty() {
            digits.push(0);
        }
        Self(digits)
    }

    /// The normalized value as big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.significant_digits().iter().rev().copied().collect()
    }

    /// Uniformly random number with `width` digits (at least one).
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, width: usize) -> Self {
        let mut number = Self::zero(width);
        rng.fill_bytes(&mut number.0);
        number
    }

    /// Digits from a sequence the caller knows to be non-empty.
    pub(crate) fn from_vec(digits: Vec<Digit>) -> Self {
        debug_assert!(!digits.is_empty());
        Self(digits)
    }
}

impl BigNumber {
    /// All stored digits, little-endian, including most-significant zeros.
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    /// Number of stored digits.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Number of significant digits; zero has one.
    pub fn len(&self) -> usize {
        self.significant_digits().len()
    }

    /// The normalized digits, little-endian; zero is `[0]`.
    pub fn significant_digits(&self) -> &[Digit] {
        let digits = significant(&self.0);
        if digits.is_empty() {
            &self.0[..1]
        } else {
            digits
        }
    }

    pub fn leading_digit(&self) -> Digit {
        self.significant_digits()[self.len() - 1]
    }

    pub fn is_zero(&self) -> bool {
        significant(&self.0).is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.significant_digits() == [1]
    }

    /// Drop most-significant zero digits, down to a single digit.
    pub fn normalize(&mut self) {
        let len = self.len();
        self.0.truncate(len);
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

/// Keeps the digits (and hence the invariant "at least one digit"), sets them to zero.
impl Zeroize for BigNumber {
    fn zeroize(&mut self) {
        self.0.as_mut_slice().zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn len() {
        let x = BigNumber(vec![0, 1, 0, 2, 0, 0]);
        assert_eq!(x.len(), 4);
        assert_eq!(x.width(), 6);

        let x = BigNumber::zero(3);
        assert_eq!(x.len(), 1);
        assert_eq!(x.width(), 3);
        assert!(x.is_zero());
    }

    #[test]
    fn requested_width() {
        assert_eq!(BigNumber::zero(0).width(), 1);
        assert_eq!(BigNumber::one(4).digits(), &[1, 0, 0, 0]);
        assert!(BigNumber::one(4).is_one());
        assert_eq!(BigNumber::from_digits(&[1, 2], 4).unwrap().digits(), &[1, 2, 0, 0]);
        assert_eq!(BigNumber::from_digits(&[1, 2, 3], 1).unwrap().width(), 3);
        assert_eq!(BigNumber::from_digits(&[], 2).unwrap(), BigNumber::zero(1));
        assert_eq!(BigNumber::from_digits(&[], 0).unwrap_err(), Error::InvalidArgument);
    }

    #[test]
    fn normalize() {
        let mut x = BigNumber(vec![7, 0, 0]);
        x.normalize();
        assert_eq!(x.digits(), &[7]);

        let x = BigNumber::zero(5).normalized();
        assert_eq!(x.digits(), &[0]);
        assert_eq!(x.leading_digit(), 0);
    }

    #[test]
    fn bytes() {
        let x = BigNumber::from_be_bytes(&hex!("00 01 02 03"));
        assert_eq!(x.digits(), &[3, 2, 1, 0]);
        assert_eq!(x.to_be_bytes(), hex!("01 02 03"));
        assert_eq!(x.leading_digit(), 1);

        assert!(BigNumber::from_be_bytes(&[]).is_zero());
        assert_eq!(BigNumber::zero(3).to_be_bytes(), hex!("00"));
    }

    #[test]
    fn random() {
        let mut rng = StdRng::seed_from_u64(42);
        let x = BigNumber::random(&mut rng, 32);
        assert_eq!(x.width(), 32);
        assert_ne!(x, BigNumber::random(&mut rng, 32));
    }

    #[test]
    fn zeroize_keeps_a_digit() {
        let mut x = BigNumber::from_be_bytes(&hex!("DEADBEEF"));
        x.zeroize();
        assert!(x.is_zero());
        assert_eq!(x.width(), 4);
    }
}
