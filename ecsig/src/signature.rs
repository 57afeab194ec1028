//! Fixed-length signature encodings.
//!
//! ECDSA signatures are `r ‖ s`, both big-endian and as wide as the group
//! order. BIGN signatures are `S0 ‖ S1`: `S0` is the `l`-bit truncated hash
//! and `S1` the `2l`-bit scalar, both little-endian, where `2l` is the bit
//! width of the group order rounded up to whole bytes.

use crate::SignatureAlgorithm;
use bignum::{Error, Result, Uint};
use core::fmt;
use curves::Curve;
use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

/// Widest scalar or coordinate the signature schemes handle, in bytes.
pub const MAX_SCALAR_BYTES: usize = 72;

/// Decoded signature: two integers tagged with their scheme.
///
/// For ECDSA these are `(r, s)`, for BIGN `(s0, s1)`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature<const LIMBS: usize> {
    algorithm: SignatureAlgorithm,
    scalar_bytes: usize,
    first: Uint<LIMBS>,
    second: Uint<LIMBS>,
}

impl<const LIMBS: usize> Signature<LIMBS> {
    pub(crate) fn new(
        algorithm: SignatureAlgorithm,
        curve: &Curve<LIMBS>,
        first: Uint<LIMBS>,
        second: Uint<LIMBS>,
    ) -> Self {
        Self {
            algorithm,
            scalar_bytes: curve.scalar_bytes(),
            first,
            second,
        }
    }

    /// Parse a signature, rejecting out-of-range components.
    ///
    /// Fails with [`Error::InvalidLength`] if `bytes` is not
    /// [`signature_len`] bytes long and with
    /// [`Error::InvalidSignature`] if `r` or `s` is outside `[1, q)` (ECDSA)
    /// or `S1 ≥ q` (BIGN).
    pub fn from_bytes(
        algorithm: SignatureAlgorithm,
        curve: &Curve<LIMBS>,
        bytes: &[u8],
    ) -> Result<Self> {
        let sig = Self::split(algorithm, curve, bytes)?;
        match bool::from(sig.in_range(curve.order())) {
            true => Ok(sig),
            false => Err(Error::InvalidSignature),
        }
    }

    /// Split `bytes` into its two components, checking only the length.
    pub(crate) fn split(
        algorithm: SignatureAlgorithm,
        curve: &Curve<LIMBS>,
        bytes: &[u8],
    ) -> Result<Self> {
        let n = curve.scalar_bytes();
        if n > MAX_SCALAR_BYTES {
            return Err(Error::CapacityExceeded);
        }
        if bytes.len() != signature_len(algorithm, n) {
            return Err(Error::InvalidLength);
        }

        let (first, second) = if algorithm.is_bign() {
            let (s0, s1) = bytes.split_at(bign_half(n));
            (Uint::from_le_slice(s0)?, Uint::from_le_slice(s1)?)
        } else {
            let (r, s) = bytes.split_at(n);
            (Uint::from_be_slice(r)?, Uint::from_be_slice(s)?)
        };

        Ok(Self {
            algorithm,
            scalar_bytes: n,
            first,
            second,
        })
    }

    /// Are both components within the ranges the scheme allows?
    pub(crate) fn in_range(&self, q: &Uint<LIMBS>) -> Choice {
        let second = self.second.ct_lt(q);
        if self.algorithm.is_bign() {
            second
        } else {
            second & !self.second.is_zero() & self.first.ct_lt(q) & !self.first.is_zero()
        }
    }

    /// Scheme this signature belongs to.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// `r` for ECDSA, `s0` for BIGN.
    pub fn first(&self) -> &Uint<LIMBS> {
        &self.first
    }

    /// `s` for ECDSA, `s1` for BIGN.
    pub fn second(&self) -> &Uint<LIMBS> {
        &self.second
    }

    /// Length of the encoded signature.
    pub fn encoded_len(&self) -> usize {
        signature_len(self.algorithm, self.scalar_bytes)
    }

    /// Encode into the front of `out`, returning the number of bytes written.
    pub fn to_bytes(&self, out: &mut [u8]) -> Result<usize> {
        let len = self.encoded_len();
        let out = out.get_mut(..len).ok_or(Error::InvalidLength)?;

        if self.algorithm.is_bign() {
            let (s0, s1) = out.split_at_mut(bign_half(self.scalar_bytes));
            self.first.write_le_bytes(s0)?;
            self.second.write_le_bytes(s1)?;
        } else {
            let (r, s) = out.split_at_mut(self.scalar_bytes);
            self.first.write_be_bytes(r)?;
            self.second.write_be_bytes(s)?;
        }

        Ok(len)
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Signature<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(u8::from(self.algorithm == other.algorithm))
            & self.first.ct_eq(&other.first)
            & self.second.ct_eq(&other.second)
    }
}

impl<const LIMBS: usize> fmt::Debug for Signature<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("algorithm", &self.algorithm)
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Length of `S0` for a group order of `scalar_bytes` bytes.
pub(crate) fn bign_half(scalar_bytes: usize) -> usize {
    scalar_bytes.div_ceil(2)
}

/// Length of an encoded signature over a group order of `scalar_bytes` bytes.
pub fn signature_len(algorithm: SignatureAlgorithm, scalar_bytes: usize) -> usize {
    if algorithm.is_bign() {
        bign_half(scalar_bytes) + scalar_bytes
    } else {
        2 * scalar_bytes
    }
}
