use core::{cmp::Ordering, hash::{Hash, Hasher}};

use super::{BigNumber, Digits};
use crate::Digit;

/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
///
/// More significant digits decide first; most-significant zero digits don't count.
impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        let m = self.significant();
        let n = other.significant();
        match m.len().cmp(&n.len()) {
            Ordering::Equal => {}
            not_equal => return not_equal,
        }

        for (a, b) in m.iter().rev().zip(n.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => (),
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Digits {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Digits {}

// Comparisons are pure reads: neither operand gets normalized.
impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        Digits::new(&self.0).cmp(Digits::new(&other.0))
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        Digits::new(&self.0) == Digits::new(&other.0)
    }
}

impl Eq for BigNumber {}

/// Consistent with `Eq`: only the significant digits are hashed.
impl Hash for BigNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_digits().hash(state);
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero(1)
    }
}

impl AsRef<[Digit]> for BigNumber {
    fn as_ref(&self) -> &[Digit] {
        &self.0
    }
}

impl From<Digit> for BigNumber {
    fn from(digit: Digit) -> Self {
        Self::from_vec(alloc::vec![digit])
    }
}

impl From<u64> for BigNumber {
    fn from(unsigned: u64) -> Self {
        Self::from_vec(unsigned.to_le_bytes().to_vec()).normalized()
    }
}
