//! [`HashFunction`] adapters over `digest::Digest` implementations.

use crate::{HashAlgorithm, HashFunction, function::digest_output};
use bignum::Result;
use digest::Digest;

macro_rules! impl_digest_adapter {
    ($name:ident, $inner:ty, $algorithm:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Default)]
        pub struct $name($inner);

        impl HashFunction for $name {
            const ALGORITHM: HashAlgorithm = $algorithm;

            fn new() -> Self {
                Self(<$inner as Digest>::new())
            }

            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.0, data);
            }

            fn finalize_into(self, out: &mut [u8]) -> Result<()> {
                let out = digest_output(out, Self::DIGEST_SIZE)?;
                out.copy_from_slice(&Digest::finalize(self.0));
                Ok(())
            }
        }
    };
}

#[cfg(feature = "sha2")]
impl_digest_adapter!(Sha224, sha2::Sha224, HashAlgorithm::Sha224, "SHA-224 hasher.");
#[cfg(feature = "sha2")]
impl_digest_adapter!(Sha256, sha2::Sha256, HashAlgorithm::Sha256, "SHA-256 hasher.");
#[cfg(feature = "sha2")]
impl_digest_adapter!(Sha384, sha2::Sha384, HashAlgorithm::Sha384, "SHA-384 hasher.");
#[cfg(feature = "sha2")]
impl_digest_adapter!(Sha512, sha2::Sha512, HashAlgorithm::Sha512, "SHA-512 hasher.");
#[cfg(feature = "belt-hash")]
impl_digest_adapter!(
    BeltHash,
    belt_hash::BeltHash,
    HashAlgorithm::BeltHash,
    "belt-hash (STB 34.101.31) hasher."
);
