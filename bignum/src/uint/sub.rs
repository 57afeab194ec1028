//! Subtraction, plain and modular.

use super::Uint;
use crate::{
    Error, Result,
    word::{Word, sbb},
};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self - (rhs + borrow)`, returning the result along with the borrow out.
    ///
    /// Borrows are `0` or `Word::MAX`.
    #[inline]
    pub const fn borrowing_sub(&self, rhs: &Self, mut borrow: Word) -> (Self, Word) {
        let mut words = [0; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let (w, b) = sbb(self.words[i], rhs.words[i], borrow);
            words[i] = w;
            borrow = b;
            i += 1;
        }
        (Self { words }, borrow)
    }

    /// Computes `self - rhs` modulo `2^BITS`.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs, 0).0
    }

    /// Computes `self - rhs`, failing with [`Error::CapacityExceeded`] on underflow.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        match self.borrowing_sub(rhs, 0) {
            (diff, 0) => Ok(diff),
            _ => Err(Error::CapacityExceeded),
        }
    }

    /// Computes `self - rhs mod p`.
    ///
    /// Assumes `self` and `rhs` are both reduced modulo `p`.
    pub fn sub_mod(&self, rhs: &Self, p: &Self) -> Self {
        let (diff, borrow) = self.borrowing_sub(rhs, 0);
        diff.wrapping_add(&p.and_word(borrow))
    }

    /// Computes `-self mod p`.
    ///
    /// Assumes `self` is reduced modulo `p`.
    pub fn neg_mod(&self, p: &Self) -> Self {
        Self::ZERO.sub_mod(self, p)
    }
}
