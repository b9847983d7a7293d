use alloc::vec::Vec;
use core::ops::Sub;

use crate::{BigNumber, Digit};
use crate::digit::sbb;

/// `a - b` modulo $256^w$, with `w = max(a.len(), b.len())`, on little-endian digit slices.
///
/// Returns the normalized difference and the final borrow. A non-zero borrow
/// means `a < b`, and the difference wrapped around.
pub(crate) fn sub_digits(a: &[Digit], b: &[Digit]) -> (BigNumber, Digit) {
    let width = a.len().max(b.len()).max(1);
    let mut borrow = 0;

    let difference: Vec<Digit> = (0..width)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            sbb(x, y, &mut borrow)
        })
        .collect();

    (BigNumber::from_vec(difference).normalized(), borrow)
}

impl BigNumber {
    /// Subtraction in $\mathbb{Z}/256^w$, where `w` is the larger of the two (stored) widths.
    ///
    /// This is what `-` does; e.g., `zero(4) - one(1)` is `FFFFFFFF`.
    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        sub_digits(self.digits(), subtrahend.digits()).0
    }

    /// `None` if `subtrahend > self`.
    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        let (difference, borrow) = sub_digits(self.digits(), subtrahend.digits());
        (borrow == 0).then(|| difference)
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    fn sub(self, subtrahend: Self) -> Self::Output {
        self.wrapping_sub(subtrahend)
    }
}

forward_binop!(impl Sub, sub);
forward_assign_op!(impl SubAssign, sub_assign, Sub, sub);
