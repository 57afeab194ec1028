//! SHA-3 and SHAKE over the native Keccak sponge.

use crate::{
    HashAlgorithm, HashFunction,
    function::digest_output,
    keccak::{KeccakSponge, SHA3_SUFFIX, SHAKE_SUFFIX},
};
use bignum::Result;
use zeroize::Zeroize;

macro_rules! impl_sha3 {
    ($name:ident, $algorithm:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name(KeccakSponge);

        impl HashFunction for $name {
            const ALGORITHM: HashAlgorithm = $algorithm;

            fn new() -> Self {
                Self(KeccakSponge::new(Self::BLOCK_SIZE, SHA3_SUFFIX))
            }

            fn update(&mut self, data: &[u8]) {
                self.0.absorb_unchecked(data);
            }

            fn finalize_into(mut self, out: &mut [u8]) -> Result<()> {
                self.0.squeeze(digest_output(out, Self::DIGEST_SIZE)?);
                self.0.zeroize();
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }
    };
}

macro_rules! impl_shake {
    ($name:ident, $algorithm:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// As a [`HashFunction`] it produces its default output length;
        /// [`finalize_xof`](Self::finalize_xof) produces any length.
        #[derive(Clone)]
        pub struct $name(KeccakSponge);

        impl $name {
            /// Fill all of `out` with output.
            pub fn finalize_xof(mut self, out: &mut [u8]) {
                self.0.squeeze(out);
                self.0.zeroize();
            }
        }

        impl HashFunction for $name {
            const ALGORITHM: HashAlgorithm = $algorithm;

            fn new() -> Self {
                Self(KeccakSponge::new(Self::BLOCK_SIZE, SHAKE_SUFFIX))
            }

            fn update(&mut self, data: &[u8]) {
                self.0.absorb_unchecked(data);
            }

            fn finalize_into(self, out: &mut [u8]) -> Result<()> {
                self.finalize_xof(digest_output(out, Self::DIGEST_SIZE)?);
                Ok(())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }
    };
}

impl_sha3!(Sha3_224, HashAlgorithm::Sha3_224, "SHA3-224 hasher.");
impl_sha3!(Sha3_256, HashAlgorithm::Sha3_256, "SHA3-256 hasher.");
impl_sha3!(Sha3_384, HashAlgorithm::Sha3_384, "SHA3-384 hasher.");
impl_sha3!(Sha3_512, HashAlgorithm::Sha3_512, "SHA3-512 hasher.");
impl_shake!(Shake128, HashAlgorithm::Shake128, "SHAKE128 extendable-output function.");
impl_shake!(Shake256, HashAlgorithm::Shake256, "SHAKE256 extendable-output function.");
