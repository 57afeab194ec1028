//! Schoolbook multiplication.

use super::Uint;
use crate::{
    Error, Result,
    word::{mac, nonzero_mask},
};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes the full double-width product `self * rhs`, returned as `(lo, hi)`.
    pub const fn widening_mul(&self, rhs: &Self) -> (Self, Self) {
        let mut lo = [0; LIMBS];
        let mut hi = [0; LIMBS];

        let mut i = 0;
        while i < LIMBS {
            let mut carry = 0;
            let mut j = 0;
            while j < LIMBS {
                let k = i + j;
                if k >= LIMBS {
                    let (w, c) = mac(hi[k - LIMBS], self.words[i], rhs.words[j], carry);
                    hi[k - LIMBS] = w;
                    carry = c;
                } else {
                    let (w, c) = mac(lo[k], self.words[i], rhs.words[j], carry);
                    lo[k] = w;
                    carry = c;
                }
                j += 1;
            }

            // column `i + LIMBS` has not been written yet
            hi[i] = carry;
            i += 1;
        }

        (Self { words: lo }, Self { words: hi })
    }

    /// Computes `self * rhs` modulo `2^BITS`.
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.widening_mul(rhs).0
    }

    /// Computes `self * rhs`, failing with [`Error::CapacityExceeded`] on overflow.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let (lo, hi) = self.widening_mul(rhs);
        let overflow = hi.words.iter().fold(0, |acc, w| acc | w);
        if nonzero_mask(overflow) != 0 {
            return Err(Error::CapacityExceeded);
        }
        Ok(lo)
    }
}
