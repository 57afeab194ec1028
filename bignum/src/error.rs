//! Error types.

use core::fmt;

/// Error type shared by every layer of the toolkit.
///
/// Each variant names a distinct failure so callers can tell API misuse,
/// malformed input and cryptographic rejection apart.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A context was driven before it was initialized.
    NotInitialized,

    /// A context was driven out of order or after it was finalized.
    InvalidState,

    /// The configured capacity is too small for the requested operation.
    CapacityExceeded,

    /// Field elements from two different field contexts were combined.
    ContextMismatch,

    /// Points from two different curves were combined.
    CurveMismatch,

    /// A point is malformed or does not lie on the expected curve or subgroup.
    InvalidPoint,

    /// A scalar or field element is out of range.
    InvalidScalar,

    /// A signature encoding is malformed.
    InvalidSignature,

    /// An input or output buffer has the wrong length.
    InvalidLength,

    /// A well-formed signature did not verify.
    VerificationFailed,

    /// The cryptographic random source failed.
    RngUnavailable,

    /// No curve is registered under the requested name.
    UnknownCurve,

    /// The requested algorithm is not supported in this position.
    UnsupportedAlgorithm,

    /// A modulus or curve parameter set does not qualify.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::NotInitialized => "context used before initialization",
            Error::InvalidState => "context used out of order",
            Error::CapacityExceeded => "integer capacity exceeded",
            Error::ContextMismatch => "field elements belong to different contexts",
            Error::CurveMismatch => "points belong to different curves",
            Error::InvalidPoint => "invalid curve point",
            Error::InvalidScalar => "scalar out of range",
            Error::InvalidSignature => "malformed signature",
            Error::InvalidLength => "invalid length",
            Error::VerificationFailed => "signature verification failed",
            Error::RngUnavailable => "random number generator unavailable",
            Error::UnknownCurve => "unknown curve name",
            Error::UnsupportedAlgorithm => "unsupported algorithm",
            Error::InvalidModulus => "invalid modulus or curve parameters",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
