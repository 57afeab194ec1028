//! Constant-time modular reduction.

use super::Uint;
use crate::{Error, Result, word::Word};
use subtle::ConstantTimeEq;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self mod p`.
    ///
    /// The reduction is bit-serial: every bit of the capacity performs the
    /// same shift and conditional subtraction, so the running time depends
    /// only on `LIMBS`.
    pub fn rem(&self, p: &Self) -> Result<Self> {
        if bool::from(p.ct_eq(&Self::ZERO)) {
            return Err(Error::InvalidModulus);
        }

        let mut r = Self::ZERO;
        for i in (0..Self::BITS).rev() {
            r = r.reduce_step(self.bit_word(i), p);
        }
        Ok(r)
    }

    /// Computes `(hi:lo) mod p` for a double-width value.
    pub fn rem_wide(lo: &Self, hi: &Self, p: &Self) -> Result<Self> {
        let mut r = hi.rem(p)?;
        for i in (0..Self::BITS).rev() {
            r = r.reduce_step(lo.bit_word(i), p);
        }
        Ok(r)
    }

    /// Computes `(2 * self + bit) mod p` for `self < p`.
    fn reduce_step(&self, bit: Word, p: &Self) -> Self {
        let (mut shifted, carry) = self.shl1();
        shifted.words[0] |= bit;
        shifted.sub_mod_with_carry(carry, p, p)
    }

    fn bit_word(&self, index: u32) -> Word {
        (self.words[(index / Word::BITS) as usize] >> (index % Word::BITS)) & 1
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, U256, Uint};

    #[test]
    fn rem_small() {
        let n = U256::from_u64(1_000_003);
        assert_eq!(n.rem(&U256::from_u64(1000)), Ok(U256::from_u64(3)));
        assert_eq!(U256::from_u64(7).rem(&U256::from_u64(9)), Ok(U256::from_u64(7)));
    }

    #[test]
    fn rem_by_zero() {
        assert_eq!(U256::ONE.rem(&U256::ZERO), Err(Error::InvalidModulus));
    }

    #[test]
    fn rem_max() {
        // 2^128 - 1 = 3 * 5 * 17 * 257 * 641 * 65537 * 274177 * 6700417 * 67280421310721
        let n = Uint::<2>::MAX;
        assert_eq!(n.rem(&Uint::from_u64(65537)), Ok(Uint::ZERO));
        assert_eq!(n.rem(&Uint::from_u64(7)), Ok(Uint::from_u64(3)));
    }

    #[test]
    fn rem_wide_matches_product() {
        let a = U256::from_words([0xdead_beef, 0x1234, 0, 0x8000_0000_0000_0000]);
        let b = U256::from_words([7, 0, 0x5555, 1]);
        let p = U256::from_words([0xffff_ffff_ffff_ffc5, u64::MAX, u64::MAX, u64::MAX]);
        let (lo, hi) = a.widening_mul(&b);
        let expected = {
            let a = a.rem(&p).unwrap();
            let b = b.rem(&p).unwrap();
            let mut acc = U256::ZERO;
            for i in (0..256).rev() {
                acc = acc.double_mod(&p);
                if bool::from(b.bit(i)) {
                    acc = acc.add_mod(&a, &p);
                }
            }
            acc
        };
        assert_eq!(U256::rem_wide(&lo, &hi, &p), Ok(expected));
    }
}
