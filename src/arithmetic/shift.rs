use alloc::vec;
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::BigNumber;

impl Shl<usize> for &BigNumber {
    type Output = BigNumber;

    /// Multiplies by $256^k$: `k` zero digits are prepended at the low end.
    ///
    /// Note that "left" means "higher number", and that shifts count digits, not bits.
    fn shl(self, digits: usize) -> Self::Output {
        let mut shifted = vec![0; digits];
        shifted.extend_from_slice(self.significant_digits());
        BigNumber::from_vec(shifted).normalized()
    }
}

impl Shr<usize> for &BigNumber {
    type Output = BigNumber;

    /// Divides by $256^k$: the `k` least significant digits are dropped.
    ///
    /// Note that "right" means "lower number".
    fn shr(self, digits: usize) -> Self::Output {
        if digits >= self.width() {
            return BigNumber::zero(1);
        }
        BigNumber::from_vec(self.digits()[digits..].to_vec()).normalized()
    }
}

impl Shl<usize> for BigNumber {
    type Output = BigNumber;

    fn shl(self, digits: usize) -> Self::Output {
        &self << digits
    }
}

impl Shr<usize> for BigNumber {
    type Output = BigNumber;

    fn shr(self, digits: usize) -> Self::Output {
        &self >> digits
    }
}

impl ShlAssign<usize> for BigNumber {
    fn shl_assign(&mut self, digits: usize) {
        *self = &*self << digits;
    }
}

impl ShrAssign<usize> for BigNumber {
    fn shr_assign(&mut self, digits: usize) {
        *self = &*self >> digits;
    }
}
