//! Random number generation.

use super::Uint;
use crate::{Error, Result};
use rand_core::TryRngCore;
use subtle::ConstantTimeLess;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Generate a uniformly random integer in `[0, bound)`.
    ///
    /// Candidates are masked to the bit length of `bound` and rejected until
    /// one falls below it, which takes fewer than two draws on average.
    /// Any failure of `rng` is reported as [`Error::RngUnavailable`].
    pub fn random_below<R: TryRngCore + ?Sized>(rng: &mut R, bound: &Self) -> Result<Self> {
        if bool::from(bound.is_zero()) {
            return Err(Error::InvalidModulus);
        }

        let bits = bound.bits_vartime();
        loop {
            let mut words = [0; LIMBS];
            for w in words.iter_mut() {
                *w = rng.try_next_u64().map_err(|_| Error::RngUnavailable)?;
            }

            let candidate = Self::from_words(words).mask_bits(bits);
            if bool::from(candidate.ct_lt(bound)) {
                return Ok(candidate);
            }
        }
    }

    /// Generate a uniformly random integer in `[1, bound)`.
    pub fn random_nonzero_below<R: TryRngCore + ?Sized>(rng: &mut R, bound: &Self) -> Result<Self> {
        if bool::from(bound.ct_lt(&Self::from_u64(2))) {
            return Err(Error::InvalidModulus);
        }

        loop {
            let candidate = Self::random_below(rng, bound)?;
            if !bool::from(candidate.is_zero()) {
                return Ok(candidate);
            }
        }
    }
}
