use alloc::vec::Vec;
use core::ops::Add;

use crate::{BigNumber, Digit};
use crate::digit::adc;

/// `a + b` on little-endian digit slices (an empty slice is zero).
///
/// The sum has room for `max(a.len(), b.len()) + 1` digits, the last one
/// catching the final carry, and is normalized.
pub(crate) fn add_digits(a: &[Digit], b: &[Digit]) -> BigNumber {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;

    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        sum.push(adc(x, y, &mut carry));
    }
    sum.push(carry);

    BigNumber::from_vec(sum).normalized()
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, summand: Self) -> Self::Output {
        add_digits(self.digits(), summand.digits())
    }
}

forward_binop!(impl Add, add);
forward_assign_op!(impl AddAssign, add_assign, Add, add);
