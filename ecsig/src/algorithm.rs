//! Signature scheme identifiers.

use bignum::Error;
use core::{fmt, str::FromStr};

/// Signature schemes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignatureAlgorithm {
    /// ECDSA (FIPS 186-5) with a random nonce.
    Ecdsa,

    /// ECDSA with the deterministic nonce of RFC 6979.
    Decdsa,

    /// BIGN (STB 34.101.45) with a random nonce.
    Bign,

    /// BIGN with an RFC 6979 nonce over the signature's hash function.
    Dbign,
}

impl SignatureAlgorithm {
    /// Every scheme, in declaration order.
    pub const ALL: [SignatureAlgorithm; 4] = [
        SignatureAlgorithm::Ecdsa,
        SignatureAlgorithm::Decdsa,
        SignatureAlgorithm::Bign,
        SignatureAlgorithm::Dbign,
    ];

    /// Canonical name.
    pub const fn as_str(self) -> &'static str {
        match self {
            SignatureAlgorithm::Ecdsa => "ECDSA",
            SignatureAlgorithm::Decdsa => "DECDSA",
            SignatureAlgorithm::Bign => "BIGN",
            SignatureAlgorithm::Dbign => "DBIGN",
        }
    }

    /// Does this scheme derive its nonce from the key and message?
    pub const fn is_deterministic(self) -> bool {
        matches!(self, SignatureAlgorithm::Decdsa | SignatureAlgorithm::Dbign)
    }

    /// Is this one of the BIGN schemes?
    pub const fn is_bign(self) -> bool {
        matches!(self, SignatureAlgorithm::Bign | SignatureAlgorithm::Dbign)
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        SignatureAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(name))
            .ok_or(Error::UnsupportedAlgorithm)
    }
}
