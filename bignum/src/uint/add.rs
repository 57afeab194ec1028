//! Addition, plain and modular.

use super::Uint;
use crate::{
    Error, Result,
    word::{Word, adc, sbb},
};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self + rhs + carry`, returning the result along with the carry out.
    #[inline]
    pub const fn carrying_add(&self, rhs: &Self, mut carry: Word) -> (Self, Word) {
        let mut words = [0; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let (w, c) = adc(self.words[i], rhs.words[i], carry);
            words[i] = w;
            carry = c;
            i += 1;
        }
        (Self { words }, carry)
    }

    /// Computes `self + rhs` modulo `2^BITS`.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.carrying_add(rhs, 0).0
    }

    /// Computes `self + rhs`, failing with [`Error::CapacityExceeded`] on overflow.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        match self.carrying_add(rhs, 0) {
            (sum, 0) => Ok(sum),
            _ => Err(Error::CapacityExceeded),
        }
    }

    /// Computes `self + rhs mod p`.
    ///
    /// Assumes `self` and `rhs` are both reduced modulo `p`.
    pub fn add_mod(&self, rhs: &Self, p: &Self) -> Self {
        let (sum, carry) = self.carrying_add(rhs, 0);
        sum.sub_mod_with_carry(carry, p, p)
    }

    /// Computes `2 * self mod p`.
    ///
    /// Assumes `self` is reduced modulo `p`.
    pub fn double_mod(&self, p: &Self) -> Self {
        let (shifted, carry) = self.shl1();
        shifted.sub_mod_with_carry(carry, p, p)
    }

    /// Computes `(carry:self) - rhs`, adding `p` back if the difference is negative.
    ///
    /// Requires `(carry:self) < rhs + p`.
    pub(crate) fn sub_mod_with_carry(&self, carry: Word, rhs: &Self, p: &Self) -> Self {
        let (diff, borrow) = self.borrowing_sub(rhs, 0);

        // the high word is `carry - 0 - borrow`; it only underflows when the
        // full-width difference is negative
        let (_, borrow) = sbb(carry, 0, borrow);

        diff.wrapping_add(&p.and_word(borrow))
    }
}
