//! Bit shifts.
//!
//! Shift amounts are public; the shifted value may be secret.

use super::Uint;
use crate::word::Word;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self << shift`, discarding bits shifted past the capacity.
    pub const fn shl(&self, shift: u32) -> Self {
        let mut words = [0; LIMBS];
        if shift >= Self::BITS {
            return Self { words };
        }

        let limbs = (shift / Word::BITS) as usize;
        let bits = shift % Word::BITS;
        let mut i = LIMBS;
        while i > limbs {
            i -= 1;
            let mut w = self.words[i - limbs] << bits;
            if bits != 0 && i > limbs {
                w |= self.words[i - limbs - 1] >> (Word::BITS - bits);
            }
            words[i] = w;
        }
        Self { words }
    }

    /// Computes `self >> shift`.
    pub const fn shr(&self, shift: u32) -> Self {
        let mut words = [0; LIMBS];
        if shift >= Self::BITS {
            return Self { words };
        }

        let limbs = (shift / Word::BITS) as usize;
        let bits = shift % Word::BITS;
        let mut i = 0;
        while i + limbs < LIMBS {
            let mut w = self.words[i + limbs] >> bits;
            if bits != 0 && i + limbs + 1 < LIMBS {
                w |= self.words[i + limbs + 1] << (Word::BITS - bits);
            }
            words[i] = w;
            i += 1;
        }
        Self { words }
    }

    /// Shift left by one bit, returning the bit shifted out of the top limb.
    pub const fn shl1(&self) -> (Self, Word) {
        let mut words = [0; LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < LIMBS {
            words[i] = (self.words[i] << 1) | carry;
            carry = self.words[i] >> (Word::BITS - 1);
            i += 1;
        }
        (Self { words }, carry)
    }

    /// Shift right by one bit, shifting `high_bit` into the top position.
    pub const fn shr1_with_carry(&self, high_bit: Word) -> Self {
        let mut words = [0; LIMBS];
        let mut carry = high_bit & 1;
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            words[i] = (self.words[i] >> 1) | (carry << (Word::BITS - 1));
            carry = self.words[i] & 1;
        }
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use crate::{U256, Uint};

    #[test]
    fn shl_across_limbs() {
        let n = U256::ONE.shl(130);
        assert_eq!(n.as_words(), &[0, 0, 4, 0]);
        assert_eq!(U256::ONE.shl(256), U256::ZERO);
        assert_eq!(U256::MAX.shl(64).as_words(), &[0, u64::MAX, u64::MAX, u64::MAX]);
    }

    #[test]
    fn shr_across_limbs() {
        let n = U256::from_words([0, 0, 4, 0]).shr(130);
        assert_eq!(n, U256::ONE);
        assert_eq!(U256::MAX.shr(255), U256::ONE);
        assert_eq!(U256::MAX.shr(300), U256::ZERO);
    }

    #[test]
    fn shl1_carry() {
        let (n, carry) = Uint::<2>::from_words([1 << 63, 1 << 63]).shl1();
        assert_eq!(n.as_words(), &[0, 1]);
        assert_eq!(carry, 1);
    }

    #[test]
    fn shr1_shifts_in_high_bit() {
        let n = Uint::<2>::from_words([3, 0]).shr1_with_carry(1);
        assert_eq!(n.as_words(), &[1, 1 << 63]);
    }
}
