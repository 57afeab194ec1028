//! Secret keys and signature generation.

use crate::{
    ContextState, Signature, SignatureAlgorithm, VerifyingKey,
    rfc6979::NonceGenerator,
    scheme::{self, check_parameters},
    signature::{MAX_SCALAR_BYTES, signature_len},
};
use bignum::{Error, Result, Uint};
use core::fmt;
use curves::Curve;
use hashes::{HashAlgorithm, HashContext, MAX_DIGEST_SIZE};
use primefield::{ByteOrder, Fp};
use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret key: a scalar `d ∈ [1, q)` together with its public key `dG`.
///
/// The scalar is zeroized when the key is dropped.
#[derive(Clone)]
pub struct SigningKey<'c, const LIMBS: usize> {
    secret: Fp<'c, LIMBS>,
    verifying_key: VerifyingKey<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> SigningKey<'c, LIMBS> {
    /// Create a key from the secret scalar `d`.
    ///
    /// Fails with [`Error::InvalidScalar`] unless `1 ≤ d < q`.
    pub fn new(curve: &'c Curve<LIMBS>, d: &Uint<LIMBS>) -> Result<Self> {
        let secret = Fp::from_uint(curve.scalars(), d).map_err(|_| Error::InvalidScalar)?;
        if bool::from(secret.is_zero()) {
            return Err(Error::InvalidScalar);
        }
        Self::from_scalar(curve, secret)
    }

    /// Generate a fresh key.
    ///
    /// Only cryptographic generators are accepted; a failing generator
    /// yields [`Error::RngUnavailable`].
    pub fn generate<R: TryCryptoRng + ?Sized>(
        curve: &'c Curve<LIMBS>,
        rng: &mut R,
    ) -> Result<Self> {
        let secret = Fp::random_nonzero(curve.scalars(), rng)?;
        log::debug!("generated signing key on {:?}", curve.name());
        Self::from_scalar(curve, secret)
    }

    fn from_scalar(curve: &'c Curve<LIMBS>, secret: Fp<'c, LIMBS>) -> Result<Self> {
        let point = curve.generator().mul_scalar(&secret)?;
        Ok(Self {
            secret,
            verifying_key: VerifyingKey::from_point(point)?,
        })
    }

    /// Decode the secret scalar from exactly [`Curve::scalar_bytes`] bytes.
    pub fn from_bytes(curve: &'c Curve<LIMBS>, bytes: &[u8], order: ByteOrder) -> Result<Self> {
        if bytes.len() != curve.scalar_bytes() {
            return Err(Error::InvalidLength);
        }
        let d = Zeroizing::new(order.decode::<LIMBS>(bytes)?);
        Self::new(curve, &d)
    }

    /// Encode the secret scalar into the front of `out`, returning the
    /// number of bytes written.
    ///
    /// # ⚠️ Warning
    ///
    /// This is key material.
    pub fn to_bytes(&self, order: ByteOrder, out: &mut [u8]) -> Result<usize> {
        let len = self.curve().scalar_bytes();
        let out = out.get_mut(..len).ok_or(Error::InvalidLength)?;
        self.secret.write_bytes(out, order)?;
        Ok(len)
    }

    /// Curve of this key.
    pub fn curve(&self) -> &'c Curve<LIMBS> {
        self.verifying_key.curve()
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<'c, LIMBS> {
        &self.verifying_key
    }

    /// Sign an already computed message digest.
    pub(crate) fn sign_digest<R: TryCryptoRng + ?Sized>(
        &self,
        algorithm: SignatureAlgorithm,
        hash: HashAlgorithm,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Signature<LIMBS>> {
        let curve = self.curve();
        let scalars = curve.scalars();
        let d = &self.secret;
        let random_nonce = || Fp::random_nonzero(scalars, rng);

        let (first, second) = match algorithm {
            SignatureAlgorithm::Ecdsa => scheme::ecdsa_sign(curve, d, digest, random_nonce)?,
            SignatureAlgorithm::Bign => scheme::bign_sign(curve, d, hash, digest, random_nonce)?,
            SignatureAlgorithm::Decdsa => {
                let e = scheme::ecdsa_digest_scalar(scalars, digest)?;
                let mut nonces = self.deterministic_nonces(hash, &e)?;
                scheme::ecdsa_sign(curve, d, digest, || nonces.next_nonce())?
            }
            SignatureAlgorithm::Dbign => {
                let h = scheme::bign_digest_scalar(scalars, digest)?;
                let mut nonces = self.deterministic_nonces(hash, &h)?;
                scheme::bign_sign(curve, d, hash, digest, || nonces.next_nonce())?
            }
        };

        Ok(Signature::new(algorithm, curve, first, second))
    }

    /// RFC 6979 nonces keyed with `int2octets(d)` and `int2octets(h)`.
    fn deterministic_nonces(
        &self,
        hash: HashAlgorithm,
        h: &Fp<'c, LIMBS>,
    ) -> Result<NonceGenerator<'c, LIMBS>> {
        let scalars = self.curve().scalars();
        let n = scalars.bytes();

        let mut x = Zeroizing::new([0u8; MAX_SCALAR_BYTES]);
        let x = x.get_mut(..n).ok_or(Error::CapacityExceeded)?;
        self.secret.write_bytes(x, ByteOrder::BigEndian)?;
        let mut h1 = [0u8; MAX_SCALAR_BYTES];
        h.write_bytes(&mut h1[..n], ByteOrder::BigEndian)?;

        NonceGenerator::new(hash, scalars, x, &h1[..n])
    }
}

impl<const LIMBS: usize> Drop for SigningKey<'_, LIMBS> {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl<const LIMBS: usize> ZeroizeOnDrop for SigningKey<'_, LIMBS> {}

impl<const LIMBS: usize> ConstantTimeEq for SigningKey<'_, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret.ct_eq(&other.secret)
    }
}

/// Constant-time comparison
impl<const LIMBS: usize> PartialEq for SigningKey<'_, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for SigningKey<'_, LIMBS> {}

impl<const LIMBS: usize> fmt::Debug for SigningKey<'_, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Incremental signature generation.
///
/// ```
/// use ecsig::{
///     ByteOrder, Curve, CurveName, HashAlgorithm, SecureRng, SignContext,
///     SignatureAlgorithm, SigningKey,
/// };
///
/// let curve = Curve::<4>::named(CurveName::Bign256v1)?;
/// let mut rng = SecureRng::new();
/// let key = SigningKey::generate(&curve, &mut rng)?;
///
/// let mut ctx = SignContext::new(SignatureAlgorithm::Bign, HashAlgorithm::Sha3_256)?;
/// ctx.sign_init(&key)?;
/// ctx.sign_update(b"hello ")?;
/// ctx.sign_update(b"world")?;
/// let mut signature = [0u8; 48];
/// assert_eq!(ctx.sign_finalize(&mut rng, &mut signature)?, 48);
/// # Ok::<(), ecsig::Error>(())
/// ```
#[derive(Debug)]
pub struct SignContext<'k, 'c, const LIMBS: usize> {
    algorithm: SignatureAlgorithm,
    hasher: HashContext,
    key: Option<&'k SigningKey<'c, LIMBS>>,
    state: ContextState,
}

impl<'k, 'c, const LIMBS: usize> SignContext<'k, 'c, LIMBS> {
    /// Create a context for `algorithm` hashing messages with `hash`.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] for extendable-output
    /// functions and for hash backends that are not compiled in.
    pub fn new(algorithm: SignatureAlgorithm, hash: HashAlgorithm) -> Result<Self> {
        if hash.is_xof() {
            return Err(Error::UnsupportedAlgorithm);
        }
        Ok(Self {
            algorithm,
            hasher: HashContext::new(hash)?,
            key: None,
            state: ContextState::Uninitialized,
        })
    }

    /// Scheme of this context.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Length of the signature [`sign_finalize`](Self::sign_finalize) will
    /// write, once a key is bound.
    pub fn signature_len(&self) -> Option<usize> {
        let algorithm = self.algorithm;
        self.key
            .map(|key| signature_len(algorithm, key.curve().scalar_bytes()))
    }

    /// Bind the signing key.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] for twisted Edwards
    /// curves and, for BIGN, for a hash whose digest is not as wide as the
    /// group order.
    pub fn sign_init(&mut self, key: &'k SigningKey<'c, LIMBS>) -> Result<()> {
        self.state.check_uninitialized()?;
        check_parameters(self.algorithm, self.hasher.algorithm(), key.curve())?;

        self.key = Some(key);
        self.state = ContextState::Initialized;
        log::trace!(
            "{} signing initialized with {}",
            self.algorithm,
            self.hasher.algorithm()
        );
        Ok(())
    }

    /// Absorb a chunk of the message.
    pub fn sign_update(&mut self, data: &[u8]) -> Result<()> {
        self.state.check_active()?;
        self.hasher.update(data)?;
        self.state = ContextState::Updating;
        Ok(())
    }

    /// Write the signature into the front of `out`, returning its length.
    ///
    /// Random-nonce schemes draw from `rng`; the deterministic schemes
    /// ignore it. A short `out` fails with [`Error::InvalidLength`] and
    /// leaves the context usable; any other failure finalizes it.
    pub fn sign_finalize<R: TryCryptoRng + ?Sized>(
        &mut self,
        rng: &mut R,
        out: &mut [u8],
    ) -> Result<usize> {
        self.state.check_active()?;
        let key = self.key.ok_or(Error::NotInitialized)?;
        let len = signature_len(self.algorithm, key.curve().scalar_bytes());
        let out = out.get_mut(..len).ok_or(Error::InvalidLength)?;
        self.state = ContextState::Finalized;

        let mut digest = [0u8; MAX_DIGEST_SIZE];
        let digest_len = self.hasher.finalize(&mut digest)?;
        let signature = key.sign_digest(
            self.algorithm,
            self.hasher.algorithm(),
            &digest[..digest_len],
            rng,
        )?;
        signature.to_bytes(out)
    }
}

/// Sign `msg` in one call, writing the signature into the front of `out`.
pub fn sign<R: TryCryptoRng + ?Sized, const LIMBS: usize>(
    algorithm: SignatureAlgorithm,
    hash: HashAlgorithm,
    key: &SigningKey<'_, LIMBS>,
    msg: &[u8],
    rng: &mut R,
    out: &mut [u8],
) -> Result<usize> {
    let mut ctx = SignContext::new(algorithm, hash)?;
    ctx.sign_init(key)?;
    ctx.sign_update(msg)?;
    ctx.sign_finalize(rng, out)
}
