//! Operating system entropy.

use bignum::Error;
use rand_core::{TryCryptoRng, TryRngCore};

/// Cryptographically secure random source backed by the operating system.
///
/// Failures of the OS source are reported as [`Error::RngUnavailable`] and
/// logged at `warn` level. Without the `getrandom` feature there is no
/// source and every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecureRng {
    _private: (),
}

impl SecureRng {
    /// Handle to the OS entropy source.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Is an OS entropy source compiled in?
    pub const fn is_available() -> bool {
        cfg!(feature = "getrandom")
    }
}

impl TryRngCore for SecureRng {
    type Error = Error;

    fn try_next_u32(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; 4];
        self.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Error> {
        let mut buf = [0u8; 8];
        self.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    #[cfg(feature = "getrandom")]
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        rand_core::OsRng.try_fill_bytes(dst).map_err(|err| {
            log::warn!("OS entropy source failed: {err}");
            Error::RngUnavailable
        })
    }

    #[cfg(not(feature = "getrandom"))]
    fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Error> {
        log::warn!("no OS entropy source compiled in");
        Err(Error::RngUnavailable)
    }
}

impl TryCryptoRng for SecureRng {}

#[cfg(all(test, feature = "getrandom"))]
mod tests {
    use super::SecureRng;
    use rand_core::TryRngCore;

    #[test]
    fn fills_buffers() {
        let mut rng = SecureRng::new();
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        rng.try_fill_bytes(&mut a).unwrap();
        rng.try_fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
        assert!(SecureRng::is_available());
    }

    #[test]
    fn draws_words() {
        let mut rng = SecureRng::new();
        let words: [u64; 4] = core::array::from_fn(|_| rng.try_next_u64().unwrap());
        assert!(words.iter().any(|w| *w != words[0]));
    }
}
