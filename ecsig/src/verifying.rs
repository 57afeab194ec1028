//! Public keys and signature verification.

use crate::{
    ContextState, Signature, SignatureAlgorithm,
    scheme::{self, check_parameters},
};
use bignum::{Error, Result};
use curves::{Curve, Point, PointEncoding};
use hashes::{HashAlgorithm, HashContext, MAX_DIGEST_SIZE};
use primefield::ByteOrder;

/// Public key: a validated point of the prime order subgroup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyingKey<'c, const LIMBS: usize> {
    point: Point<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> VerifyingKey<'c, LIMBS> {
    /// Fails with [`Error::InvalidPoint`] for the identity, points off the
    /// curve and points outside the subgroup generated by `G`.
    pub fn from_point(point: Point<'c, LIMBS>) -> Result<Self> {
        let valid = !point.is_identity() & point.is_on_curve() & point.is_in_subgroup();
        match bool::from(valid) {
            true => Ok(Self { point }),
            false => Err(Error::InvalidPoint),
        }
    }

    /// Decode an uncompressed `x ‖ y` public key.
    ///
    /// Fails with [`Error::InvalidLength`] if `bytes` is not exactly two
    /// coordinates long.
    pub fn from_bytes(curve: &'c Curve<LIMBS>, bytes: &[u8], order: ByteOrder) -> Result<Self> {
        if bytes.len() != curve.encoded_len(PointEncoding::Uncompressed) {
            return Err(Error::InvalidLength);
        }
        Self::from_point(Point::from_bytes(curve, bytes, order)?)
    }

    /// Encode as uncompressed `x ‖ y` into the front of `out`, returning the
    /// number of bytes written.
    pub fn to_bytes(&self, order: ByteOrder, out: &mut [u8]) -> Result<usize> {
        self.point.to_bytes(PointEncoding::Uncompressed, order, out)
    }

    /// Curve of this key.
    pub fn curve(&self) -> &'c Curve<LIMBS> {
        self.point.curve()
    }

    /// Borrow the public point.
    pub fn as_point(&self) -> &Point<'c, LIMBS> {
        &self.point
    }

    /// Check a signature over an already computed message digest.
    pub(crate) fn verify_digest(
        &self,
        signature: &Signature<LIMBS>,
        hash: HashAlgorithm,
        digest: &[u8],
    ) -> Result<()> {
        let (first, second) = (signature.first(), signature.second());
        if signature.algorithm().is_bign() {
            scheme::bign_verify(&self.point, hash, digest, first, second)
        } else {
            scheme::ecdsa_verify(&self.point, digest, first, second)
        }
    }
}

impl<'c, const LIMBS: usize> AsRef<Point<'c, LIMBS>> for VerifyingKey<'c, LIMBS> {
    fn as_ref(&self) -> &Point<'c, LIMBS> {
        &self.point
    }
}

/// Incremental signature verification.
///
/// ```
/// use ecsig::{
///     ByteOrder, Curve, CurveName, HashAlgorithm, SignatureAlgorithm, SigningKey,
///     VerifyContext,
/// };
/// # use ecsig::{bignum::Uint, sign};
///
/// let curve = Curve::<4>::named(CurveName::Secp256r1)?;
/// # let key = SigningKey::new(&curve, &Uint::from_u64(7))?;
/// # let mut signature = [0u8; 64];
/// # sign(
/// #     SignatureAlgorithm::Decdsa,
/// #     HashAlgorithm::Sha3_256,
/// #     &key,
/// #     b"hello world",
/// #     &mut ecsig::SecureRng::new(),
/// #     &mut signature,
/// # )?;
/// let public_key = key.verifying_key();
///
/// let mut ctx = VerifyContext::new(SignatureAlgorithm::Decdsa, HashAlgorithm::Sha3_256)?;
/// ctx.verify_init(public_key, &signature)?;
/// ctx.verify_update(b"hello ")?;
/// ctx.verify_update(b"world")?;
/// ctx.verify_finalize()?;
/// # Ok::<(), ecsig::Error>(())
/// ```
#[derive(Debug)]
pub struct VerifyContext<'k, 'c, const LIMBS: usize> {
    algorithm: SignatureAlgorithm,
    hasher: HashContext,
    pending: Option<(&'k VerifyingKey<'c, LIMBS>, Signature<LIMBS>)>,
    state: ContextState,
}

impl<'k, 'c, const LIMBS: usize> VerifyContext<'k, 'c, LIMBS> {
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
            pending: None,
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

    /// Bind the public key and the signature to check.
    ///
    /// Only the length of `signature` is checked here; components out of
    /// range make [`verify_finalize`](Self::verify_finalize) fail with
    /// [`Error::VerificationFailed`].
    pub fn verify_init(
        &mut self,
        key: &'k VerifyingKey<'c, LIMBS>,
        signature: &[u8],
    ) -> Result<()> {
        self.state.check_uninitialized()?;
        check_parameters(self.algorithm, self.hasher.algorithm(), key.curve())?;
        let signature = Signature::split(self.algorithm, key.curve(), signature)?;

        self.pending = Some((key, signature));
        self.state = ContextState::Initialized;
        log::trace!(
            "{} verification initialized with {}",
            self.algorithm,
            self.hasher.algorithm()
        );
        Ok(())
    }

    /// Absorb a chunk of the message.
    pub fn verify_update(&mut self, data: &[u8]) -> Result<()> {
        self.state.check_active()?;
        self.hasher.update(data)?;
        self.state = ContextState::Updating;
        Ok(())
    }

    /// Check the signature against the absorbed message.
    ///
    /// Fails with [`Error::VerificationFailed`] if the signature does not
    /// match. The context is finalized whatever the outcome.
    pub fn verify_finalize(&mut self) -> Result<()> {
        self.state.check_active()?;
        let (key, signature) = self.pending.take().ok_or(Error::NotInitialized)?;
        self.state = ContextState::Finalized;

        let mut digest = [0u8; MAX_DIGEST_SIZE];
        let len = self.hasher.finalize(&mut digest)?;
        key.verify_digest(&signature, self.hasher.algorithm(), &digest[..len])
    }
}

/// Verify `signature` over `msg` in one call.
pub fn verify<const LIMBS: usize>(
    algorithm: SignatureAlgorithm,
    hash: HashAlgorithm,
    key: &VerifyingKey<'_, LIMBS>,
    msg: &[u8],
    signature: &[u8],
) -> Result<()> {
    let mut ctx = VerifyContext::new(algorithm, hash)?;
    ctx.verify_init(key, signature)?;
    ctx.verify_update(msg)?;
    ctx.verify_finalize()
}
