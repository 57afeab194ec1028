//! Seeded generator for reproducible, non-secret data.

use crate::SecureRng;
use bignum::Result;
use rand_core::{RngCore, SeedableRng, TryRngCore, impls};

/// Knuth's MMIX multiplier.
const MULTIPLIER: u64 = 6364136223846793005;

/// Knuth's MMIX increment.
const INCREMENT: u64 = 1442695040888963407;

/// 64-bit linear congruential generator.
///
/// Fast and reproducible from its seed, and trivially predictable: it
/// implements [`RngCore`] but not `CryptoRng`, so it cannot be
/// passed to key generation or signing, which require `TryCryptoRng`:
///
/// ```compile_fail
/// use entropy::TestRng;
/// use entropy::rand_core::TryCryptoRng;
///
/// fn needs_crypto_rng<R: TryCryptoRng>(_rng: &mut R) {}
///
/// needs_crypto_rng(&mut TestRng::new(7));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestRng {
    state: u64,
}

impl TestRng {
    /// Generator starting from `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generator seeded from the OS source, for tests that want fresh but
    /// replayable data. The seed can be read back with [`TestRng::state`].
    pub fn from_secure(rng: &mut SecureRng) -> Result<Self> {
        let seed = rng.try_next_u64()?;
        log::debug!("test generator seeded with {seed:#018x}");
        Ok(Self::new(seed))
    }

    /// Current internal state; a generator created from it continues the
    /// same sequence.
    pub const fn state(&self) -> u64 {
        self.state
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }
}

impl RngCore for TestRng {
    /// The high half of the state; the low bits of an LCG have short periods.
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for TestRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::{INCREMENT, TestRng};
    use rand_core::RngCore;

    #[test]
    fn first_outputs() {
        let mut rng = TestRng::new(0);
        assert_eq!(rng.state(), 0);
        assert_eq!(rng.next_u32(), (INCREMENT >> 32) as u32);
        assert_eq!(rng.state(), INCREMENT);
    }

    #[test]
    fn reproducible() {
        let mut a = TestRng::new(0x5eed);
        let mut b = TestRng::new(0x5eed);
        let mut x = [0u8; 37];
        let mut y = [0u8; 37];
        a.fill_bytes(&mut x);
        b.fill_bytes(&mut y);
        assert_eq!(x, y);

        let resumed = TestRng::new(a.state());
        assert_eq!(resumed, a);
    }

    #[test]
    fn seeds_diverge() {
        let mut a = TestRng::new(1);
        let mut b = TestRng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
