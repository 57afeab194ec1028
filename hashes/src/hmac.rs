//! HMAC (RFC 2104) over any hash function of this crate.

use crate::{HashAlgorithm, HashContext, HashFunction, context};
use bignum::{Error, Result};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Largest block size of the supported hash functions (the SHAKE128 rate).
pub const MAX_BLOCK_SIZE: usize = 168;

/// Largest default digest size of the supported hash functions.
pub const MAX_DIGEST_SIZE: usize = 64;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Key block padded to `block_size`, with keys longer than a block replaced
/// by their digest.
fn key_block(
    key: &[u8],
    block_size: usize,
    digest_size: usize,
    hash: impl FnOnce(&[u8], &mut [u8]) -> Result<()>,
) -> Result<Zeroizing<[u8; MAX_BLOCK_SIZE]>> {
    if block_size > MAX_BLOCK_SIZE || digest_size > block_size {
        return Err(Error::UnsupportedAlgorithm);
    }

    let mut block = Zeroizing::new([0u8; MAX_BLOCK_SIZE]);
    if key.len() > block_size {
        hash(key, &mut block[..digest_size])?;
    } else {
        block[..key.len()].copy_from_slice(key);
    }
    Ok(block)
}

/// Key block XORed with a pad byte.
fn padded(block: &[u8; MAX_BLOCK_SIZE], pad: u8) -> Zeroizing<[u8; MAX_BLOCK_SIZE]> {
    let mut out = Zeroizing::new([0u8; MAX_BLOCK_SIZE]);
    for (o, k) in out.iter_mut().zip(block.iter()) {
        *o = k ^ pad;
    }
    out
}

/// Compare a computed tag with an expected one in constant time.
fn check_tag(computed: &[u8], expected: &[u8]) -> Result<()> {
    if computed.len() != expected.len() {
        return Err(Error::InvalidLength);
    }
    if bool::from(computed.ct_eq(expected)) {
        Ok(())
    } else {
        log::debug!("HMAC tag mismatch");
        Err(Error::VerificationFailed)
    }
}

/// HMAC keyed with a fixed hash function.
///
/// ```
/// use hashes::{Hmac, HashFunction, Sha3_256};
///
/// let mut mac = Hmac::<Sha3_256>::new(b"key")?;
/// mac.update(b"message");
/// let mut tag = [0u8; 32];
/// mac.clone().finalize_into(&mut tag)?;
/// mac.verify(&tag)?;
/// # Ok::<(), hashes::Error>(())
/// ```
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
    inner: H,
    outer: H,
}

impl<H: HashFunction> Hmac<H> {
    /// Key a new HMAC instance. Keys of any length are accepted.
    pub fn new(key: &[u8]) -> Result<Self> {
        let block = key_block(key, H::BLOCK_SIZE, H::DIGEST_SIZE, H::digest)?;

        let mut inner = H::new();
        inner.update(&padded(&block, IPAD)[..H::BLOCK_SIZE]);
        let mut outer = H::new();
        outer.update(&padded(&block, OPAD)[..H::BLOCK_SIZE]);

        Ok(Self { inner, outer })
    }

    /// Authenticate `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Write the tag into the first `H::DIGEST_SIZE` bytes of `out`.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<()> {
        let mut inner = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
        self.inner.finalize_into(&mut inner[..])?;

        let mut outer = self.outer;
        outer.update(&inner[..H::DIGEST_SIZE]);
        outer.finalize_into(out)
    }

    /// Check `tag` in constant time.
    ///
    /// Fails with [`Error::InvalidLength`] if `tag` is not `H::DIGEST_SIZE`
    /// bytes long and with [`Error::VerificationFailed`] on a mismatch.
    pub fn verify(self, tag: &[u8]) -> Result<()> {
        let mut computed = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
        self.finalize_into(&mut computed[..])?;
        check_tag(&computed[..H::DIGEST_SIZE], tag)
    }
}

/// HMAC with the hash algorithm chosen at runtime.
///
/// Like [`HashContext`], the context is single-use: after
/// [`finalize`](Self::finalize) or [`verify`](Self::verify) every call
/// fails with [`Error::InvalidState`].
#[derive(Clone, Debug)]
pub struct HmacContext {
    inner: HashContext,
    outer: HashContext,
}

impl HmacContext {
    /// Key a new context.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] for the extendable-output
    /// functions and for algorithms whose backend is not compiled in.
    pub fn new(algorithm: HashAlgorithm, key: &[u8]) -> Result<Self> {
        if algorithm.is_xof() {
            return Err(Error::UnsupportedAlgorithm);
        }

        let block_size = algorithm.block_size();
        let block = key_block(key, block_size, algorithm.digest_size(), |key, out| {
            context::digest(algorithm, key, out).map(|_| ())
        })?;

        let mut inner = HashContext::new(algorithm)?;
        inner.update(&padded(&block, IPAD)[..block_size])?;
        let mut outer = HashContext::new(algorithm)?;
        outer.update(&padded(&block, OPAD)[..block_size])?;

        Ok(Self { inner, outer })
    }

    /// Hash algorithm of this context.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.inner.algorithm()
    }

    /// Tag size in bytes.
    pub fn digest_size(&self) -> usize {
        self.inner.digest_size()
    }

    /// Has this context been finalized?
    pub fn is_finalized(&self) -> bool {
        self.outer.is_finalized()
    }

    /// Authenticate `data`.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    /// Write the tag into the front of `out`, returning its length.
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.is_finalized() {
            return Err(Error::InvalidState);
        }
        if out.len() < self.digest_size() {
            return Err(Error::InvalidLength);
        }

        let mut inner = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
        let len = self.inner.finalize(&mut inner[..])?;
        self.outer.update(&inner[..len])?;
        self.outer.finalize(out)
    }

    /// Check `tag` in constant time, finalizing the context.
    ///
    /// Fails with [`Error::InvalidLength`] if `tag` is not
    /// [`digest_size`](Self::digest_size) bytes long and with
    /// [`Error::VerificationFailed`] on a mismatch.
    pub fn verify(&mut self, tag: &[u8]) -> Result<()> {
        let mut computed = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
        let len = self.finalize(&mut computed[..])?;
        check_tag(&computed[..len], tag)
    }
}

#[cfg(test)]
mod tests {
    use super::{Hmac, HmacContext};
    use crate::{HashAlgorithm, Sha3_256};
    use bignum::Error;
    use hex_literal::hex;

    #[test]
    fn generic_and_runtime_agree() {
        let key = [0x42u8; 200];
        let mut generic = Hmac::<Sha3_256>::new(&key).unwrap();
        generic.update(b"payload");
        let mut a = [0u8; 32];
        generic.finalize_into(&mut a).unwrap();

        let mut runtime = HmacContext::new(HashAlgorithm::Sha3_256, &key).unwrap();
        runtime.update(b"pay").unwrap();
        runtime.update(b"load").unwrap();
        let mut b = [0u8; 32];
        assert_eq!(runtime.finalize(&mut b), Ok(32));
        assert_eq!(a, b);
    }

    /// NIST CSRC HMAC example, SHA3-256 with a 32-byte key
    #[test]
    fn sha3_256_example() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let mut mac = HmacContext::new(HashAlgorithm::Sha3_256, &key).unwrap();
        mac.update(b"Sample message for keylen<blocklen").unwrap();
        mac.verify(&hex!(
            "4fe8e202c4f058e8dddc23d8c34e467343e23555e24fc2f025d598f558f67205"
        ))
        .unwrap();
    }

    #[test]
    fn state_machine() {
        let mut mac = HmacContext::new(HashAlgorithm::Sha3_224, b"k").unwrap();
        let mut tag = [0u8; 28];
        assert_eq!(mac.finalize(&mut tag[..27]), Err(Error::InvalidLength));
        assert_eq!(mac.finalize(&mut tag), Ok(28));
        assert_eq!(mac.update(b"late"), Err(Error::InvalidState));
        assert_eq!(mac.finalize(&mut tag), Err(Error::InvalidState));
        assert_eq!(mac.verify(&tag), Err(Error::InvalidState));
    }

    #[test]
    fn rejects_xof() {
        assert_eq!(
            HmacContext::new(HashAlgorithm::Shake128, b"k").unwrap_err(),
            Error::UnsupportedAlgorithm
        );
    }

    #[test]
    fn tag_mismatch() {
        let mac = Hmac::<Sha3_256>::new(b"k").unwrap();
        let mut tag = [0u8; 32];
        mac.clone().finalize_into(&mut tag).unwrap();
        tag[5] ^= 1;
        assert_eq!(mac.clone().verify(&tag), Err(Error::VerificationFailed));
        assert_eq!(mac.verify(&tag[..31]), Err(Error::InvalidLength));
    }
}
