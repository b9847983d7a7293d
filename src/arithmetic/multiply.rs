use alloc::{vec, vec::Vec};
use core::ops::Mul;

use super::{add::add_digits, Config};
use crate::{BigNumber, Digit, DoubleDigit};
use crate::digit::{mac, split};
use crate::numbers::significant;

/// Operand-scanning schoolbook multiplication on little-endian digit slices.
///
/// The product has room for `a.len() + b.len()` digits, and is normalized.
pub(crate) fn schoolbook(a: &[Digit], b: &[Digit]) -> BigNumber {
    let mut product: Vec<Digit> = vec![0; (a.len() + b.len()).max(1)];

    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            product[i + j] = mac(x, y, product[i + j], &mut carry);
        }
        // the previous rows never reached this far
        product[i + b.len()] = carry;
    }

    BigNumber::from_vec(product).normalized()
}

/// Karatsuba multiplication on little-endian digit slices.
///
/// Splitting both factors at `s`, half the longer length, as $a = a_1 256^s + a_0$
/// and $b = b_1 256^s + b_0$, the product is
/// $$a_1 b_1 256^{2s} + \left((a_0 + a_1)(b_0 + b_1) - a_1 b_1 - a_0 b_0\right) 256^s + a_0 b_0,$$
/// which needs three half-size products instead of four.
///
/// Recurses all the way down to single digits; it is the caller's job to pick
/// [`schoolbook`] for short factors.
pub(crate) fn karatsuba(a: &[Digit], b: &[Digit]) -> BigNumber {
    let a = significant(a);
    let b = significant(b);

    if a.is_empty() || b.is_empty() {
        return BigNumber::zero(1);
    }

    if a.len() == 1 && b.len() == 1 {
        let (hi, lo) = split(a[0] as DoubleDigit * b[0] as DoubleDigit);
        return BigNumber::from_vec(vec![lo, hi]).normalized();
    }

    let s = a.len().max(b.len()) / 2;
    let (a_lo, a_hi) = a.split_at(s.min(a.len()));
    let (b_lo, b_hi) = b.split_at(s.min(b.len()));

    let high = karatsuba(a_hi, b_hi);
    let low = karatsuba(a_lo, b_lo);

    // the sums may keep the longer factor's length, but their values are smaller, so this terminates
    let a_sum = add_digits(a_lo, a_hi);
    let b_sum = add_digits(b_lo, b_hi);
    let cross = &karatsuba(a_sum.digits(), b_sum.digits()) - &(&high + &low);

    &(&(&high << (2 * s)) + &(&cross << s)) + &low
}

impl BigNumber {
    /// Schoolbook multiplication, regardless of size.
    pub fn schoolbook_mul(&self, factor: &Self) -> Self {
        schoolbook(self.significant_digits(), factor.significant_digits())
    }

    /// Karatsuba multiplication, regardless of size.
    pub fn karatsuba_mul(&self, factor: &Self) -> Self {
        karatsuba(self.digits(), factor.digits())
    }

    /// Multiplication, choosing the algorithm as configured.
    pub fn mul_with(&self, factor: &Self, config: &Config) -> Self {
        let a = self.significant_digits();
        let b = factor.significant_digits();

        if config.use_karatsuba(a.len(), b.len()) {
            tracing::trace!(a = a.len(), b = b.len(), "karatsuba");
            karatsuba(a, b)
        } else {
            schoolbook(a, b)
        }
    }
}

impl Mul for &BigNumber {
    type Output = BigNumber;

    fn mul(self, factor: Self) -> Self::Output {
        self.mul_with(factor, &Config::DEFAULT)
    }
}

forward_binop!(impl Mul, mul);
forward_assign_op!(impl MulAssign, mul_assign, Mul, mul);
