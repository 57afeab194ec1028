//! Runtime-selected hash contexts.

use crate::{
    HashAlgorithm, HashFunction,
    sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256},
};
use bignum::{Error, Result};

#[cfg(feature = "belt-hash")]
use crate::adapter::BeltHash;
#[cfg(feature = "sha2")]
use crate::adapter::{Sha224, Sha256, Sha384, Sha512};

/// Hasher state of one of the supported algorithms.
#[derive(Clone)]
enum State {
    #[cfg(feature = "sha2")]
    Sha224(Sha224),
    #[cfg(feature = "sha2")]
    Sha256(Sha256),
    #[cfg(feature = "sha2")]
    Sha384(Sha384),
    #[cfg(feature = "sha2")]
    Sha512(Sha512),
    Sha3_224(Sha3_224),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
    Sha3_512(Sha3_512),
    Shake128(Shake128),
    Shake256(Shake256),
    #[cfg(feature = "belt-hash")]
    BeltHash(BeltHash),
}

/// Dispatch `$body` over the hasher held in a [`State`].
macro_rules! with_state {
    ($state:expr, $h:ident => $body:expr) => {
        match $state {
            #[cfg(feature = "sha2")]
            State::Sha224($h) => $body,
            #[cfg(feature = "sha2")]
            State::Sha256($h) => $body,
            #[cfg(feature = "sha2")]
            State::Sha384($h) => $body,
            #[cfg(feature = "sha2")]
            State::Sha512($h) => $body,
            State::Sha3_224($h) => $body,
            State::Sha3_256($h) => $body,
            State::Sha3_384($h) => $body,
            State::Sha3_512($h) => $body,
            State::Shake128($h) => $body,
            State::Shake256($h) => $body,
            #[cfg(feature = "belt-hash")]
            State::BeltHash($h) => $body,
        }
    };
}

impl State {
    fn new(algorithm: HashAlgorithm) -> Result<Self> {
        Ok(match algorithm {
            #[cfg(feature = "sha2")]
            HashAlgorithm::Sha224 => State::Sha224(Sha224::new()),
            #[cfg(feature = "sha2")]
            HashAlgorithm::Sha256 => State::Sha256(Sha256::new()),
            #[cfg(feature = "sha2")]
            HashAlgorithm::Sha384 => State::Sha384(Sha384::new()),
            #[cfg(feature = "sha2")]
            HashAlgorithm::Sha512 => State::Sha512(Sha512::new()),
            HashAlgorithm::Sha3_224 => State::Sha3_224(Sha3_224::new()),
            HashAlgorithm::Sha3_256 => State::Sha3_256(Sha3_256::new()),
            HashAlgorithm::Sha3_384 => State::Sha3_384(Sha3_384::new()),
            HashAlgorithm::Sha3_512 => State::Sha3_512(Sha3_512::new()),
            HashAlgorithm::Shake128 => State::Shake128(Shake128::new()),
            HashAlgorithm::Shake256 => State::Shake256(Shake256::new()),
            #[cfg(feature = "belt-hash")]
            HashAlgorithm::BeltHash => State::BeltHash(BeltHash::new()),
            #[allow(unreachable_patterns)]
            _ => return Err(Error::UnsupportedAlgorithm),
        })
    }

    fn update(&mut self, data: &[u8]) {
        with_state!(self, h => h.update(data))
    }

    /// Write exactly `out.len()` bytes of output.
    fn finalize(self, out: &mut [u8]) -> Result<()> {
        match self {
            State::Shake128(h) => h.finalize_xof(out),
            State::Shake256(h) => h.finalize_xof(out),
            other => with_state!(other, h => h.finalize_into(out))?,
        }
        Ok(())
    }
}

/// Hash context with the algorithm chosen at runtime.
///
/// A context goes through `new → update* → finalize` exactly once; using it
/// after [`HashContext::finalize`] fails with [`Error::InvalidState`].
#[derive(Clone)]
pub struct HashContext {
    algorithm: HashAlgorithm,
    output_len: usize,
    state: Option<State>,
}

impl HashContext {
    /// Start hashing with `algorithm`, producing its default digest size.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] if the algorithm's backend
    /// is not compiled in.
    pub fn new(algorithm: HashAlgorithm) -> Result<Self> {
        Self::with_output_len(algorithm, algorithm.digest_size())
    }

    /// Start an extendable-output function producing `output_len` bytes.
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] for fixed-length
    /// algorithms and with [`Error::InvalidLength`] for an empty output.
    pub fn new_xof(algorithm: HashAlgorithm, output_len: usize) -> Result<Self> {
        if !algorithm.is_xof() {
            return Err(Error::UnsupportedAlgorithm);
        }
        if output_len == 0 {
            return Err(Error::InvalidLength);
        }
        Self::with_output_len(algorithm, output_len)
    }

    fn with_output_len(algorithm: HashAlgorithm, output_len: usize) -> Result<Self> {
        let state = State::new(algorithm)?;
        log::trace!("{algorithm} context initialized, {output_len}-byte output");
        Ok(Self {
            algorithm,
            output_len,
            state: Some(state),
        })
    }

    /// Algorithm of this context.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Number of bytes [`HashContext::finalize`] writes.
    pub fn digest_size(&self) -> usize {
        self.output_len
    }

    /// Block size of the underlying algorithm.
    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Has this context been finalized?
    pub fn is_finalized(&self) -> bool {
        self.state.is_none()
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        let state = self.state.as_mut().ok_or(Error::InvalidState)?;
        state.update(data);
        Ok(())
    }

    /// Write the digest into the front of `out`, returning its length.
    ///
    /// A short `out` fails with [`Error::InvalidLength`] and leaves the
    /// context usable.
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.state.is_none() {
            return Err(Error::InvalidState);
        }
        let out = out.get_mut(..self.output_len).ok_or(Error::InvalidLength)?;
        let state = self.state.take().ok_or(Error::InvalidState)?;
        state.finalize(out)?;
        log::trace!("{} context finalized", self.algorithm);
        Ok(self.output_len)
    }
}

impl core::fmt::Debug for HashContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashContext")
            .field("algorithm", &self.algorithm)
            .field("output_len", &self.output_len)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}

/// Hash `data` with `algorithm` in one call, returning the digest length.
pub fn digest(algorithm: HashAlgorithm, data: &[u8], out: &mut [u8]) -> Result<usize> {
    let mut ctx = HashContext::new(algorithm)?;
    ctx.update(data)?;
    ctx.finalize(out)
}
