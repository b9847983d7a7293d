//! Known-answer RSA keys and vectors, shared by the tests.
//!
//! The toy key is the textbook $p = 61$, $q = 53$ example. The other one uses
//! the Mersenne primes $p = 2^{89} - 1$ and $q = 2^{107} - 1$ with $e = 65537$;
//! its vectors were cross-checked against Python's `pow`.

use crate::BigNumber;

use hex_literal::hex;

pub const TOY_N: &str = "0CA1";
pub const TOY_E: &str = "11";
pub const TOY_D: &str = "0AC1";
pub const TOY_MESSAGE: &str = "41";
pub const TOY_CIPHERTEXT: &str = "0AE6";

pub const N: &str = "FFFFFFFFFFFFFFFFFFFFFF7FFFE0000000000000000000001";
pub const E: &str = "010001";
pub const D: &str = "2781D87E2781D87E2781D856A59F79E0861F79E0861F79E09";

/// `b"yamnord, digit by digit"`
pub const MESSAGE: &[u8] = &hex!("79616D6E6F72642C206469676974206279206469676974");
pub const CIPHERTEXT: &str = "C1AEAD9B495F87511B1AC1ED3457662F3A6C5587BCC36D174";
pub const SIGNATURE: &str = "4440E544BA748F2A4C9E6274D84E548BE862F7784CA3F4CD4";

pub fn hex(s: &str) -> BigNumber {
    BigNumber::from_hex(s).unwrap()
}
