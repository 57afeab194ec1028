//! Hash algorithm identifiers.

use bignum::Error;
use core::{fmt, str::FromStr};

/// Hash algorithms known to this crate.
///
/// Algorithms backed by an optional dependency are always nameable; creating
/// a context for one whose feature is disabled fails with
/// [`Error::UnsupportedAlgorithm`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashAlgorithm {
    /// SHA-224 (FIPS 180-4).
    Sha224,
    /// SHA-256 (FIPS 180-4).
    Sha256,
    /// SHA-384 (FIPS 180-4).
    Sha384,
    /// SHA-512 (FIPS 180-4).
    Sha512,
    /// SHA3-224 (FIPS 202).
    Sha3_224,
    /// SHA3-256 (FIPS 202).
    Sha3_256,
    /// SHA3-384 (FIPS 202).
    Sha3_384,
    /// SHA3-512 (FIPS 202).
    Sha3_512,
    /// SHAKE128 extendable-output function (FIPS 202).
    Shake128,
    /// SHAKE256 extendable-output function (FIPS 202).
    Shake256,
    /// belt-hash (STB 34.101.31).
    BeltHash,
}

impl HashAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [HashAlgorithm; 11] = [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Shake128,
        HashAlgorithm::Shake256,
        HashAlgorithm::BeltHash,
    ];

    /// Canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_224 => "SHA3-224",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Shake128 => "SHAKE128",
            HashAlgorithm::Shake256 => "SHAKE256",
            HashAlgorithm::BeltHash => "BELT-HASH",
        }
    }

    /// Digest size in bytes.
    ///
    /// For the SHAKE functions this is the default output length, twice the
    /// security level; any other length can be requested explicitly.
    pub const fn digest_size(self) -> usize {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha3_224 => 28,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Shake128
            | HashAlgorithm::BeltHash => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 | HashAlgorithm::Shake256 => 64,
        }
    }

    /// Block size in bytes: the compression function input for SHA-2 and
    /// belt-hash, the sponge rate for Keccak-based functions.
    pub const fn block_size(self) -> usize {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha512 => 128,
            HashAlgorithm::Sha3_224 => 144,
            HashAlgorithm::Sha3_256 | HashAlgorithm::Shake256 => 136,
            HashAlgorithm::Sha3_384 => 104,
            HashAlgorithm::Sha3_512 => 72,
            HashAlgorithm::Shake128 => 168,
            HashAlgorithm::BeltHash => 32,
        }
    }

    /// Is this an extendable-output function?
    pub const fn is_xof(self) -> bool {
        matches!(self, HashAlgorithm::Shake128 | HashAlgorithm::Shake256)
    }

    /// DER encoding of the algorithm's object identifier, tag and length
    /// included.
    pub const fn oid(self) -> &'static [u8] {
        match self {
            HashAlgorithm::Sha224 => &OID_SHA224,
            HashAlgorithm::Sha256 => &OID_SHA256,
            HashAlgorithm::Sha384 => &OID_SHA384,
            HashAlgorithm::Sha512 => &OID_SHA512,
            HashAlgorithm::Sha3_224 => &OID_SHA3_224,
            HashAlgorithm::Sha3_256 => &OID_SHA3_256,
            HashAlgorithm::Sha3_384 => &OID_SHA3_384,
            HashAlgorithm::Sha3_512 => &OID_SHA3_512,
            HashAlgorithm::Shake128 => &OID_SHAKE128,
            HashAlgorithm::Shake256 => &OID_SHAKE256,
            HashAlgorithm::BeltHash => &OID_BELT_HASH,
        }
    }
}

/// 2.16.840.1.101.3.4.2.`arc`
const fn nist_hash_oid(arc: u8) -> [u8; 11] {
    [0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, arc]
}

const OID_SHA224: [u8; 11] = nist_hash_oid(0x04);
const OID_SHA256: [u8; 11] = nist_hash_oid(0x01);
const OID_SHA384: [u8; 11] = nist_hash_oid(0x02);
const OID_SHA512: [u8; 11] = nist_hash_oid(0x03);
const OID_SHA3_224: [u8; 11] = nist_hash_oid(0x07);
const OID_SHA3_256: [u8; 11] = nist_hash_oid(0x08);
const OID_SHA3_384: [u8; 11] = nist_hash_oid(0x09);
const OID_SHA3_512: [u8; 11] = nist_hash_oid(0x0a);
const OID_SHAKE128: [u8; 11] = nist_hash_oid(0x0b);
const OID_SHAKE256: [u8; 11] = nist_hash_oid(0x0c);

/// 1.2.112.0.2.0.34.101.31.81
const OID_BELT_HASH: [u8; 11] = [0x06, 0x09, 0x2a, 0x70, 0x00, 0x02, 0x00, 0x22, 0x65, 0x1f, 0x51];

/// Compare names ignoring ASCII case, `-` and `_`.
fn name_matches(name: &str, candidate: &str) -> bool {
    fn significant(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.bytes()
            .filter(|b| *b != b'-' && *b != b'_')
            .map(|b| b.to_ascii_uppercase())
    }
    significant(name).eq(significant(candidate))
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| name_matches(name, alg.as_str()))
            .ok_or(Error::UnsupportedAlgorithm)
    }
}
