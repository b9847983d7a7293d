//! Textbook RSA keys.
//!
//! Only the raw primitives of [RFC 8017][rfc8017] are implemented: messages
//! are integers below the modulus, and chunking and padding are up to the
//! caller. With `n` of `k` significant bytes, [`PublicKey::chunk_len`] is the
//! size of the fixed-width chunks a ciphertext is made of.
//!
//! [rfc8017]: https://tools.ietf.org/html/rfc8017#section-5

use zeroize::Zeroize;

use crate::{BigNumber, Config, Divisor, Error, Result};

/// RSA public key $(n, e)$.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    n: BigNumber,
    e: BigNumber,
}

impl PublicKey {
    pub fn new(n: BigNumber, e: BigNumber) -> Result<Self> {
        let n = n.normalized();
        if n.is_zero() || n.is_one() {
            return Err(Error::InvalidArgument);
        }
        Ok(Self { n, e: e.normalized() })
    }

    pub fn from_hex(n: &str, e: &str) -> Result<Self> {
        Self::new(BigNumber::from_hex(n)?, BigNumber::from_hex(e)?)
    }

    pub fn modulus(&self) -> &BigNumber {
        &self.n
    }

    pub fn exponent(&self) -> &BigNumber {
        &self.e
    }

    /// Number of bytes of a ciphertext chunk, the significant byte length of `n`.
    pub fn chunk_len(&self) -> usize {
        self.n.len()
    }

    /// [RSAEP][rsaep]
    ///
    /// [rsaep]: https://tools.ietf.org/html/rfc8017#section-5.1.1
    pub fn encryption_primitive(&self, message: &BigNumber) -> Result<BigNumber> {
        self.encryption_primitive_with(message, &Config::DEFAULT)
    }

    pub fn encryption_primitive_with(&self, message: &BigNumber, config: &Config) -> Result<BigNumber> {
        // 1.
        if *message >= self.n {
            return Err(Error::InvalidArgument);
        }
        // 2.
        Ok(Divisor::with_config(&self.n, *config)?.power(message, &self.e))
    }

    /// [RSAVP1][rsavp]
    ///
    /// [rsavp]: https://tools.ietf.org/html/rfc8017#section-5.2.2
    pub fn verification_primitive(&self, signature: &BigNumber) -> Result<BigNumber> {
        self.encryption_primitive(signature)
    }
}

/// RSA private key, the public key plus the private exponent $d$.
///
/// The private exponent is zeroized on drop.
#[derive(Clone)]
pub struct PrivateKey {
    public_key: PublicKey,
    d: BigNumber,
}

impl PrivateKey {
    pub fn new(public_key: PublicKey, d: BigNumber) -> Self {
        Self { public_key, d: d.normalized() }
    }

    pub fn from_hex(n: &str, e: &str, d: &str) -> Result<Self> {
        Ok(Self::new(PublicKey::from_hex(n, e)?, BigNumber::from_hex(d)?))
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// [RSADP][rsadp]
    ///
    /// [rsadp]: https://tools.ietf.org/html/rfc8017#section-5.1.2
    pub fn decryption_primitive(&self, ciphertext: &BigNumber) -> Result<BigNumber> {
        self.decryption_primitive_with(ciphertext, &Config::DEFAULT)
    }

    pub fn decryption_primitive_with(&self, ciphertext: &BigNumber, config: &Config) -> Result<BigNumber> {
        let n = self.public_key.modulus();
        // 1.
        if ciphertext >= n {
            return Err(Error::InvalidArgument);
        }
        // 2.b
        Ok(Divisor::with_config(n, *config)?.power(ciphertext, &self.d))
    }

    /// [RSASP1][rsasp]
    ///
    /// [rsasp]: https://tools.ietf.org/html/rfc8017#section-5.2.1
    pub fn signature_primitive(&self, message: &BigNumber) -> Result<BigNumber> {
        self.decryption_primitive(message)
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}
