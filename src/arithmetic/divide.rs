use alloc::{vec, vec::Vec};
use core::ops::{Div, Rem};

use super::Config;
use crate::{BigNumber, Digit, Error, Result};
use crate::digit::div_digits;

/// Binary long division of normalized operands, by doubling the divisor.
///
/// Collects $d, 2d, 4d, \ldots, 2^k d$ until the last multiple reaches the
/// remainder, then takes them away again from the largest down, one quotient
/// bit per multiple.
///
/// Never call with a zero divisor: the doubling would not terminate.
fn long_division(dividend: &BigNumber, divisor: &BigNumber) -> (BigNumber, BigNumber) {
    debug_assert!(!divisor.is_zero());

    let mut remainder = dividend.clone().normalized();
    let mut multiples: Vec<BigNumber> = vec![divisor.clone().normalized()];

    loop {
        let last = &multiples[multiples.len() - 1];
        if *last >= remainder {
            break;
        }
        let doubled = last + last;
        multiples.push(doubled);
    }

    let mut quotient = BigNumber::zero(1);
    for multiple in multiples.iter().rev() {
        quotient = &quotient + &quotient;
        if remainder >= *multiple {
            remainder = &remainder - multiple;
            quotient.0[0] |= 1;
        }
    }

    (quotient, remainder)
}

/// Fixed-point approximation of $1/d$ for a non-zero divisor $d$.
///
/// Represents $\text{inverse} / 256^{\text{precision}}$. It always stays *below*
/// $1/d$ (Newton's method converges to $1/d$ from below when started there,
/// and truncation only lowers it), so quotient estimates never overshoot.
///
/// This is the cache that makes repeated divisions by the same divisor cheap:
/// the approximation only ever gets refined, never reset.
///
/// Refinement works at a bounded precision. The exact Newton iterate doubles its
/// digit count on every step, while early steps gain only bits of accuracy, so
/// each step is truncated to a working precision that grows from the current one
/// up to `limit` fractional digits. The limit covers dividends of twice the
/// divisor's length, and is raised when a longer dividend shows up.
#[derive(Clone, Debug)]
pub struct Reciprocal {
    divisor: BigNumber,
    inverse: BigNumber,
    precision: usize,
    working: usize,
    limit: usize,
    config: Config,
}

impl Reciprocal {
    pub fn new(divisor: &BigNumber) -> Result<Self> {
        Self::with_config(divisor, Config::DEFAULT)
    }

    /// The config is used for the multiplications.
    pub fn with_config(divisor: &BigNumber, config: Config) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::from_normalized(divisor.clone().normalized(), config))
    }

    /// First guess from the leading digit:
    /// $d < (\text{msb} + 1) \cdot 256^{n-1}$, hence $1/d > (256 / (\text{msb} + 1)) / 256^n$.
    fn from_normalized(divisor: BigNumber, config: Config) -> Self {
        let len = divisor.len();
        let (inverse, precision) = match divisor.leading_digit().checked_add(1) {
            Some(msb) => (div_digits(1, 0, msb).0, len),
            // 256 does not fit a digit, settle for 255 / 256^(n + 1)
            None => (Digit::MAX, len + 1),
        };

        Self {
            inverse: BigNumber::from(inverse),
            precision,
            working: precision,
            limit: 2 * len + 2,
            divisor,
            config,
        }
    }

    pub fn divisor(&self) -> &BigNumber {
        &self.divisor
    }

    pub fn inverse(&self) -> &BigNumber {
        &self.inverse
    }

    /// Number of fractional digits of the inverse.
    ///
    /// Not monotone: stripping low zero digits after a refinement can lower it.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Precision the last refinement worked at; never decreases.
    pub fn working_precision(&self) -> usize {
        self.working
    }

    /// One Newton step $x \leftarrow 2x - dx^2$.
    ///
    /// Computed exactly at twice the precision, then truncated to the next working
    /// precision. Low zero digits of the new inverse carry no information and are
    /// dropped.
    pub fn refine(&mut self) {
        let doubled = &(&self.inverse + &self.inverse) << self.precision;
        let squared = self.inverse.mul_with(&self.inverse, &self.config);
        let correction = self.divisor.mul_with(&squared, &self.config);
        let exact = &doubled - &correction;
        let exact_precision = 2 * self.precision;

        if self.working < self.limit {
            self.working = (2 * self.working + 1)
                .saturating_sub(self.divisor.len())
                .max(self.working + 1)
                .min(self.limit);
        }
        let precision = self.working;

        let inverse = if exact_precision >= precision {
            &exact >> (exact_precision - precision)
        } else {
            &exact << (precision - exact_precision)
        };

        let zeros = inverse.significant_digits()
            .iter()
            .take_while(|&&digit| digit == 0)
            .count()
            .min(precision);

        self.inverse = &inverse >> zeros;
        self.precision = precision - zeros;
        tracing::debug!(precision = self.precision, inverse = self.inverse.len(), "refined reciprocal");
    }

    /// Quotient and remainder, refining until the estimate is exact.
    pub fn div_rem(&mut self, dividend: &BigNumber) -> (BigNumber, BigNumber) {
        let dividend = dividend.clone().normalized();
        if self.divisor.is_one() {
            return (dividend, BigNumber::zero(1));
        }
        self.limit = self.limit.max(dividend.len() + 2);

        let one = BigNumber::one(1);
        loop {
            let mut quotient = &dividend.mul_with(&self.inverse, &self.config) >> self.precision;
            let mut product = self.divisor.mul_with(&quotient, &self.config);

            while product > dividend {
                quotient = &quotient - &one;
                product = &product - &self.divisor;
            }

            let mut remainder = &dividend - &product;
            if remainder >= self.divisor {
                quotient = &quotient + &one;
                remainder = &remainder - &self.divisor;
            }

            if remainder < self.divisor {
                return (quotient, remainder);
            }
            self.refine();
        }
    }
}

/// A non-zero divisor, ready for repeated division.
///
/// Dispatches to schoolbook or Newton-Raphson division as configured;
/// the [`Reciprocal`] is only computed once the latter is first needed,
/// and then kept.
#[derive(Clone, Debug)]
pub struct Divisor {
    divisor: BigNumber,
    config: Config,
    reciprocal: Option<Reciprocal>,
}

impl Divisor {
    pub fn new(divisor: &BigNumber) -> Result<Self> {
        Self::with_config(divisor, Config::DEFAULT)
    }

    pub fn with_config(divisor: &BigNumber, config: Config) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self { divisor: divisor.clone().normalized(), config, reciprocal: None })
    }

    pub fn divisor(&self) -> &BigNumber {
        &self.divisor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reciprocal(&self) -> Option<&Reciprocal> {
        self.reciprocal.as_ref()
    }

    pub fn div_rem(&mut self, dividend: &BigNumber) -> (BigNumber, BigNumber) {
        if self.config.use_newton(dividend.len(), self.divisor.len()) {
            tracing::trace!(dividend = dividend.len(), divisor = self.divisor.len(), "newton");
            let (divisor, config) = (&self.divisor, self.config);
            self.reciprocal
                .get_or_insert_with(|| Reciprocal::from_normalized(divisor.clone(), config))
                .div_rem(dividend)
        } else {
            long_division(dividend, &self.divisor)
        }
    }

    /// The remainder of [`Self::div_rem`].
    pub fn reduce(&mut self, dividend: &BigNumber) -> BigNumber {
        self.div_rem(dividend).1
    }
}

impl BigNumber {
    /// Quotient and remainder; fails if the divisor is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.div_rem_with(divisor, &Config::DEFAULT)
    }

    pub fn div_rem_with(&self, divisor: &Self, config: &Config) -> Result<(Self, Self)> {
        Ok(Divisor::with_config(divisor, *config)?.div_rem(self))
    }

    /// Binary long division, regardless of size.
    pub fn schoolbook_div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(long_division(self, divisor))
    }

    /// Newton-Raphson division, regardless of size.
    pub fn newton_div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        Ok(Reciprocal::new(divisor)?.div_rem(self))
    }
}

impl Div for &BigNumber {
    type Output = BigNumber;

    /// Panics on division by zero, like the primitive integers.
    fn div(self, divisor: Self) -> Self::Output {
        match self.div_rem(divisor) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Rem for &BigNumber {
    type Output = BigNumber;

    /// Panics on division by zero, like the primitive integers.
    fn rem(self, divisor: Self) -> Self::Output {
        match self.div_rem(divisor) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);
forward_assign_op!(impl DivAssign, div_assign, Div, div);
forward_assign_op!(impl RemAssign, rem_assign, Rem, rem);
