#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! Arbitrary-precision unsigned integers in base 256, and the modular
//! exponentiation built on them that textbook RSA needs.
//!
//! ```
//! use rsa_bignum::BigNumber;
//!
//! let x = BigNumber::from_hex("42").unwrap();
//! let y = x.powmod(&BigNumber::from_hex("05").unwrap(), &BigNumber::from_hex("0100000000").unwrap()).unwrap();
//! assert_eq!(y.to_hex(), "4AA51420");
//! ```
//!
//! Numbers are little-endian vectors of [`Digit`]s. Multiplication switches
//! from schoolbook to Karatsuba, and division from binary long division to
//! Newton-Raphson reciprocals, once both operands are large enough; the
//! thresholds live in [`Config`].

extern crate alloc;

mod arithmetic;
pub use arithmetic::{Config, Divisor, Reciprocal};
pub mod digit;
pub use digit::{Digit, DoubleDigit};
mod error;
pub use error::{Error, Result};
pub mod key;
pub use key::{PrivateKey, PublicKey};
mod numbers;
pub use numbers::BigNumber;

#[cfg(test)]
mod fixtures;
