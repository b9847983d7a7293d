//! Arithmetic on [`BigNumber`]s.
//!
//! Multiplication and division each come in two flavours, a quadratic
//! schoolbook algorithm and an asymptotically faster one (Karatsuba,
//! resp. Newton-Raphson reciprocals). Which one the operators pick is
//! decided by digit-count thresholds, see [`Config`].
//!
//! All operations return normalized results and leave their operands alone.

use crate::{BigNumber, Digit, Result};

pub use divide::{Divisor, Reciprocal};

/// Implements the by-value variants of a binary operator in terms of `&BigNumber op &BigNumber`.
macro_rules! forward_binop {
    (impl $Op:ident, $op:ident) => {
        impl core::ops::$Op<BigNumber> for BigNumber {
            type Output = BigNumber;
            fn $op(self, other: BigNumber) -> BigNumber {
                core::ops::$Op::$op(&self, &other)
            }
        }

        impl core::ops::$Op<&BigNumber> for BigNumber {
            type Output = BigNumber;
            fn $op(self, other: &BigNumber) -> BigNumber {
                core::ops::$Op::$op(&self, other)
            }
        }

        impl core::ops::$Op<BigNumber> for &BigNumber {
            type Output = BigNumber;
            fn $op(self, other: BigNumber) -> BigNumber {
                core::ops::$Op::$op(self, &other)
            }
        }
    };
}

/// Implements `x op= &y` and `x op= y` as `x = &x op &y`.
macro_rules! forward_assign_op {
    (impl $OpAssign:ident, $op_assign:ident, $Op:ident, $op:ident) => {
        impl core::ops::$OpAssign<&BigNumber> for BigNumber {
            fn $op_assign(&mut self, other: &BigNumber) {
                *self = core::ops::$Op::$op(&*self, other);
            }
        }

        impl core::ops::$OpAssign<BigNumber> for BigNumber {
            fn $op_assign(&mut self, other: BigNumber) {
                *self = core::ops::$Op::$op(&*self, &other);
            }
        }
    };
}

mod shift;
mod add;
mod subtract;
mod multiply;
mod divide;

/// Algorithm selection.
///
/// The thresholds are counted in significant digits. They are tuning knobs,
/// not part of the semantics: both algorithms of a pair compute the same result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Karatsuba is used once *both* factors have more digits than this.
    pub karatsuba_threshold: usize,
    /// Newton-Raphson division is used once *both* dividend and divisor
    /// have more digits than this.
    pub newton_threshold: usize,
}

impl Config {
    pub const DEFAULT: Self = Self { karatsuba_threshold: 64, newton_threshold: 256 };

    /// Always the quadratic algorithms.
    pub const SCHOOLBOOK: Self = Self { karatsuba_threshold: usize::MAX, newton_threshold: usize::MAX };

    /// Always the fast algorithms.
    pub const FAST: Self = Self { karatsuba_threshold: 0, newton_threshold: 0 };

    pub(crate) fn use_karatsuba(&self, a: usize, b: usize) -> bool {
        a > self.karatsuba_threshold && b > self.karatsuba_threshold
    }

    pub(crate) fn use_newton(&self, dividend: usize, divisor: usize) -> bool {
        dividend > self.newton_threshold && divisor > self.newton_threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ## Modular exponentiation
impl BigNumber {
    /// $\text{self}^{\text{exponent}}\text{ mod modulus}$.
    ///
    /// Fails if the modulus is zero. Note that `x.powmod(0, m)` is one, even for `m = 1`.
    pub fn powmod(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        self.powmod_with(exponent, modulus, &Config::DEFAULT)
    }

    pub fn powmod_with(&self, exponent: &Self, modulus: &Self, config: &Config) -> Result<Self> {
        let mut modulus = Divisor::with_config(modulus, *config)?;
        Ok(modulus.power(self, exponent))
    }
}

impl Divisor {
    /// Right-to-left binary exponentiation, reducing modulo the divisor.
    ///
    /// The reciprocal (if any) is shared by all reductions.
    pub fn power(&mut self, base: &BigNumber, exponent: &BigNumber) -> BigNumber {
        tracing::debug!(
            modulus = self.divisor().len(),
            exponent = exponent.len(),
            "powmod"
        );
        let config = *self.config();
        let mut result = BigNumber::one(1);
        let mut multiplier = base.clone();

        for &digit in exponent.significant_digits() {
            for bit in 0..Digit::BITS {
                let mask: Digit = 1 << bit;
                if digit & mask != 0 {
                    result = self.reduce(&result.mul_with(&multiplier, &config));
                }
                multiplier = self.reduce(&multiplier.mul_with(&multiplier, &config));
            }
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    fn hex(s: &str) -> BigNumber {
        BigNumber::from_hex(s).unwrap()
    }

    #[test]
    fn scenarios() {
        assert_eq!((hex("1234") + hex("5678")).to_hex(), "68AC");
        assert_eq!((hex("5678") - hex("4321")).to_hex(), "1357");
        assert_eq!((hex("4321") - hex("5678")).to_hex(), "ECA9");
        assert_eq!((hex("1234") * hex("5678")).to_hex(), "06260060");
        assert_eq!((hex("06260060") / hex("1234")).to_hex(), "5678");
        assert_eq!((hex("06260060") % hex("1234")).to_hex(), "00");
        assert_eq!(hex("42").powmod(&hex("5"), &hex("100000000")).unwrap().to_hex(), "4AA51420");
        assert_eq!((hex("FFFFFF") * hex("FFFFFF")).to_hex(), "FFFFFE000001");
    }

    #[test]
    fn powmod_edge_cases() {
        let x = hex("DEADBEEF");
        let m = hex("1234567");

        assert_eq!(x.powmod(&BigNumber::zero(3), &m).unwrap(), BigNumber::one(1));
        assert_eq!(x.powmod(&BigNumber::one(1), &m).unwrap(), &x % &m);
        assert_eq!(x.powmod(&hex("2"), &m).unwrap(), (&x * &x) % &m);
        assert_eq!(x.powmod(&hex("5"), &BigNumber::one(1)).unwrap(), BigNumber::zero(1));
        assert_eq!(x.powmod(&hex("5"), &BigNumber::zero(2)), Err(Error::DivisionByZero));
    }

    #[test]
    fn powmod_wide_exponent() {
        // trailing (most significant) zero digits of the exponent don't count
        let exponent = BigNumber::from_digits(&[5], 16).unwrap();
        assert_eq!(hex("42").powmod(&exponent, &hex("100000000")).unwrap().to_hex(), "4AA51420");
    }

    #[test]
    fn fermat() {
        // 2^127 - 1 is prime
        let p = hex("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
        let p_minus_one = &p - &BigNumber::one(1);
        let p_minus_two = &p_minus_one - &BigNumber::one(1);

        for config in [Config::DEFAULT, Config::SCHOOLBOOK, Config::FAST] {
            let a = hex("1234567890ABCDEF");
            assert!(a.powmod_with(&p_minus_one, &p, &config).unwrap().is_one());

            // 1/3 = 0x5555...
            let third = hex("3").powmod_with(&p_minus_two, &p, &config).unwrap();
            assert_eq!(third.to_hex(), "55555555555555555555555555555555");
        }
    }

    #[test]
    fn config() {
        assert_eq!(Config::default(), Config::DEFAULT);
        assert!(!Config::DEFAULT.use_karatsuba(64, 65));
        assert!(Config::DEFAULT.use_karatsuba(65, 65));
        assert!(!Config::DEFAULT.use_newton(1000, 256));
        assert!(Config::FAST.use_newton(1, 1));
        assert!(!Config::SCHOOLBOOK.use_karatsuba(usize::MAX, usize::MAX));
    }
}
