//! Place values of a [`BigNumber`][crate::BigNumber] and the carry-safe
//! operations on them.
//!
//! Every elementary operation widens to a [`DoubleDigit`] (the accumulator),
//! so that `digit * digit + digit + digit` never overflows:
//! $255 \cdot 255 + 255 + 255 = 2^{16} - 1$.

/// A base-256 place value.
pub type Digit = u8;

/// Unsigned type with twice as many bits as [`Digit`].
pub type DoubleDigit = u16;

/// Splits an accumulator into its `(high, low)` digits.
#[inline]
pub fn split(accumulator: DoubleDigit) -> (Digit, Digit) {
    ((accumulator >> Digit::BITS) as Digit, accumulator as Digit)
}

/// Add with carry: returns the low digit of `a + b + carry`, leaves the high digit in `carry`.
#[inline]
pub fn adc(a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    let (hi, lo) = split(a as DoubleDigit + b as DoubleDigit + *carry as DoubleDigit);
    *carry = hi;
    lo
}

/// Subtract with borrow.
///
/// Computes `x - y` modulo $2^{16}$ with `x = a` and `y = b + borrow`,
/// returning the low digit. The borrow out is 1 iff `x < y`.
#[inline]
pub fn sbb(a: Digit, b: Digit, borrow: &mut Digit) -> Digit {
    let x = a as DoubleDigit;
    let y = b as DoubleDigit + *borrow as DoubleDigit;
    *borrow = (x < y) as Digit;
    x.wrapping_sub(y) as Digit
}

/// Multiply-accumulate: returns the low digit of `a * b + c + carry`,
/// leaves the high digit in `carry`.
#[inline]
pub fn mac(a: Digit, b: Digit, c: Digit, carry: &mut Digit) -> Digit {
    let (hi, lo) = split(a as DoubleDigit * b as DoubleDigit + c as DoubleDigit + *carry as DoubleDigit);
    *carry = hi;
    lo
}

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder.
///
/// Note: the caller must ensure that the quotient fits into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    let x = ((hi as DoubleDigit) << Digit::BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    debug_assert!(q <= Digit::MAX as _);
    let r = x % divisor;

    (q as Digit, r as Digit)
}
