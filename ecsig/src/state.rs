//! Lifecycle shared by signing and verification contexts.

use bignum::{Error, Result};

/// Progress of a [`SignContext`](crate::SignContext) or
/// [`VerifyContext`](crate::VerifyContext).
///
/// A context moves `Uninitialized → Initialized → Updating → Finalized`
/// and never leaves `Finalized`; sign or verify again with a fresh context.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ContextState {
    /// Created, no key bound yet.
    #[default]
    Uninitialized,

    /// Key bound, no message data absorbed.
    Initialized,

    /// At least one chunk of message data absorbed.
    Updating,

    /// Signature produced or checked.
    Finalized,
}

impl ContextState {
    /// A key may only be bound to a fresh context.
    pub(crate) fn check_uninitialized(self) -> Result<()> {
        match self {
            ContextState::Uninitialized => Ok(()),
            _ => Err(Error::InvalidState),
        }
    }

    /// Message data and finalization need a bound key.
    pub(crate) fn check_active(self) -> Result<()> {
        match self {
            ContextState::Uninitialized => Err(Error::NotInitialized),
            ContextState::Initialized | ContextState::Updating => Ok(()),
            ContextState::Finalized => Err(Error::InvalidState),
        }
    }
}
