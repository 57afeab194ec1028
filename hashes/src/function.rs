//! The hash function contract.

use crate::HashAlgorithm;
use bignum::{Error, Result};

/// Incremental hash function with a fixed block and digest size.
///
/// Finalization consumes the hasher, so a finalized state can never be
/// updated again. [`HashContext`](crate::HashContext) provides the same
/// contract with runtime algorithm selection and runtime state checks.
pub trait HashFunction: Clone {
    /// Algorithm identifier.
    const ALGORITHM: HashAlgorithm;

    /// Block size in bytes.
    const BLOCK_SIZE: usize = Self::ALGORITHM.block_size();

    /// Digest size in bytes.
    const DIGEST_SIZE: usize = Self::ALGORITHM.digest_size();

    /// Create a hasher in its initial state.
    fn new() -> Self;

    /// Absorb `data`.
    fn update(&mut self, data: &[u8]);

    /// Write the digest into the first [`Self::DIGEST_SIZE`] bytes of `out`.
    ///
    /// Fails with [`Error::InvalidLength`] if `out` is shorter than the
    /// digest.
    fn finalize_into(self, out: &mut [u8]) -> Result<()>;

    /// Hash `data` in one call.
    fn digest(data: &[u8], out: &mut [u8]) -> Result<()> {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize_into(out)
    }
}

/// Check that `out` can hold a digest of `len` bytes and return the prefix
/// to write.
pub(crate) fn digest_output(out: &mut [u8], len: usize) -> Result<&mut [u8]> {
    out.get_mut(..len).ok_or(Error::InvalidLength)
}
