//! Deterministic nonces as described in [RFC 6979 § 3.2], generic over the
//! hash algorithms of the `hashes` crate.
//!
//! [RFC 6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3

use crate::signature::MAX_SCALAR_BYTES;
use bignum::{Result, Uint};
use hashes::{HashAlgorithm, HmacContext, MAX_DIGEST_SIZE};
use primefield::{Fp, FpCtx};
use subtle::ConstantTimeLess;
use zeroize::Zeroizing;

/// HMAC_DRBG with `K` and `V` as wide as the digest.
struct HmacDrbg {
    algorithm: HashAlgorithm,
    len: usize,
    k: Zeroizing<[u8; MAX_DIGEST_SIZE]>,
    v: Zeroizing<[u8; MAX_DIGEST_SIZE]>,
}

impl HmacDrbg {
    /// Instantiate with `entropy_input` (the secret key) and `nonce` (the
    /// message hash), running both update rounds of step d. through g.
    fn new(algorithm: HashAlgorithm, entropy_input: &[u8], nonce: &[u8]) -> Result<Self> {
        let len = algorithm.digest_size();
        let mut drbg = Self {
            algorithm,
            len,
            k: Zeroizing::new([0x00; MAX_DIGEST_SIZE]),
            v: Zeroizing::new([0x01; MAX_DIGEST_SIZE]),
        };

        for sep in [0x00u8, 0x01] {
            drbg.rekey(&[&[sep], entropy_input, nonce])?;
            drbg.next_v()?;
        }
        Ok(drbg)
    }

    /// `K = HMAC_K(V ‖ data…)`
    fn rekey(&mut self, data: &[&[u8]]) -> Result<()> {
        let mut mac = HmacContext::new(self.algorithm, &self.k[..self.len])?;
        mac.update(&self.v[..self.len])?;
        for chunk in data {
            mac.update(chunk)?;
        }
        mac.finalize(&mut self.k[..])?;
        Ok(())
    }

    /// `V = HMAC_K(V)`
    fn next_v(&mut self) -> Result<()> {
        let mut mac = HmacContext::new(self.algorithm, &self.k[..self.len])?;
        mac.update(&self.v[..self.len])?;
        let mut v = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
        mac.finalize(&mut v[..])?;
        self.v.copy_from_slice(&v[..]);
        Ok(())
    }

    /// Fill `out` with successive values of `V`.
    fn fill_bytes(&mut self, out: &mut [u8]) -> Result<()> {
        for chunk in out.chunks_mut(self.len) {
            self.next_v()?;
            chunk.copy_from_slice(&self.v[..chunk.len()]);
        }
        Ok(())
    }

    /// Step h.3: `K = HMAC_K(V ‖ 0x00)`, `V = HMAC_K(V)`.
    fn reseed(&mut self) -> Result<()> {
        self.rekey(&[&[0x00]])?;
        self.next_v()
    }
}

/// Source of deterministic nonces in `[1, q)` for one signature.
///
/// Each call to [`NonceGenerator::next_nonce`] after the first performs the
/// update of step h.3 before drawing again, which is also how a rejected
/// `r = 0` or `s = 0` is retried.
pub(crate) struct NonceGenerator<'f, const LIMBS: usize> {
    drbg: HmacDrbg,
    scalars: &'f FpCtx<LIMBS>,
    started: bool,
}

impl<'f, const LIMBS: usize> NonceGenerator<'f, LIMBS> {
    /// `x` is `int2octets(d)` and `h1` is `bits2octets(H)`, both as wide as
    /// the group order.
    pub(crate) fn new(
        algorithm: HashAlgorithm,
        scalars: &'f FpCtx<LIMBS>,
        x: &[u8],
        h1: &[u8],
    ) -> Result<Self> {
        Ok(Self {
            drbg: HmacDrbg::new(algorithm, x, h1)?,
            scalars,
            started: false,
        })
    }

    pub(crate) fn next_nonce(&mut self) -> Result<Fp<'f, LIMBS>> {
        let q = self.scalars.modulus();
        let rolen = self.scalars.bytes();
        let mut t = Zeroizing::new([0u8; MAX_SCALAR_BYTES]);

        loop {
            if self.started {
                self.drbg.reseed()?;
            }
            self.started = true;

            self.drbg.fill_bytes(&mut t[..rolen])?;
            let k = Zeroizing::new(bits2int(&t[..rolen], self.scalars.bits())?);
            if bool::from(!k.is_zero() & k.ct_lt(q)) {
                return Fp::from_uint(self.scalars, &k);
            }
        }
    }
}

/// Leftmost `qbits` bits of `bytes` as an integer.
pub(crate) fn bits2int<const LIMBS: usize>(bytes: &[u8], qbits: u32) -> Result<Uint<LIMBS>> {
    let qbytes = qbits.div_ceil(8) as usize;
    let bytes = &bytes[..bytes.len().min(qbytes)];
    let n = Uint::from_be_slice(bytes)?;
    let blen = 8 * bytes.len() as u32;
    Ok(match blen > qbits {
        true => n.shr(blen - qbits),
        false => n,
    })
}
