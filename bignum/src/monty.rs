//! Montgomery multiplication.
//!
//! Values are kept as `a·R mod p` with `R = 2^(64·LIMBS)`, which turns each
//! modular multiplication into a product followed by a word-by-word
//! reduction (coarsely integrated operand scanning, CIOS).

use crate::{
    Error, Result, Uint,
    word::{Word, adc, mac},
};
use subtle::ConditionallySelectable;

/// Precomputed constants for Montgomery arithmetic modulo an odd `p`.
///
/// Derived once by [`MontyParams::new`] and immutable afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MontyParams<const LIMBS: usize> {
    /// The modulus `p`.
    modulus: Uint<LIMBS>,

    /// `R mod p`, i.e. one in Montgomery form.
    one: Uint<LIMBS>,

    /// `R^2 mod p`, used to enter Montgomery form.
    r2: Uint<LIMBS>,

    /// `R^-1 mod p`.
    r_inv: Uint<LIMBS>,

    /// `-p^-1 mod 2^64`.
    mod_neg_inv: Word,
}

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Derive the Montgomery constants for `modulus`.
    ///
    /// Fails with [`Error::InvalidModulus`] unless the modulus is odd and
    /// greater than one.
    pub fn new(modulus: Uint<LIMBS>) -> Result<Self> {
        if !bool::from(modulus.is_odd()) || modulus == Uint::ONE {
            return Err(Error::InvalidModulus);
        }

        let mod_neg_inv = inv_mod_word(modulus.as_words()[0]).wrapping_neg();

        // 2^BITS - p is congruent to R
        let one = Uint::ZERO.wrapping_sub(&modulus).rem(&modulus)?;

        let mut r2 = one;
        for _ in 0..Uint::<LIMBS>::BITS {
            r2 = r2.double_mod(&modulus);
        }

        let mut params = Self {
            modulus,
            one,
            r2,
            r_inv: Uint::ZERO,
            mod_neg_inv,
        };
        params.r_inv = params.mul(&Uint::ONE, &Uint::ONE);
        Ok(params)
    }

    /// The modulus `p`.
    pub const fn modulus(&self) -> &Uint<LIMBS> {
        &self.modulus
    }

    /// One in Montgomery form (`R mod p`).
    pub const fn one(&self) -> &Uint<LIMBS> {
        &self.one
    }

    /// `R^2 mod p`.
    pub const fn r2(&self) -> &Uint<LIMBS> {
        &self.r2
    }

    /// `R^-1 mod p`.
    pub const fn r_inv(&self) -> &Uint<LIMBS> {
        &self.r_inv
    }

    /// `-p^-1 mod 2^64`.
    pub const fn mod_neg_inv(&self) -> Word {
        self.mod_neg_inv
    }

    /// Computes `a * b * R^-1 mod p` for `a, b < p`.
    pub fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        let a = a.as_words();
        let b = b.as_words();
        let p = self.modulus.as_words();

        // running value is (t_top:t_hi:t)
        let mut t = [0 as Word; LIMBS];
        let mut t_hi: Word = 0;

        for i in 0..LIMBS {
            let mut carry = 0;
            for j in 0..LIMBS {
                (t[j], carry) = mac(t[j], a[j], b[i], carry);
            }
            let (sum, t_top) = adc(t_hi, carry, 0);
            t_hi = sum;

            // add m·p so the lowest word vanishes, then shift down one word
            let m = t[0].wrapping_mul(self.mod_neg_inv);
            let (_, mut carry) = mac(t[0], m, p[0], 0);
            for j in 1..LIMBS {
                (t[j - 1], carry) = mac(t[j], m, p[j], carry);
            }
            let (sum, c) = adc(t_hi, carry, 0);
            t[LIMBS - 1] = sum;
            t_hi = t_top + c;
        }

        // (t_hi:t) < 2p
        Uint::from_words(t).sub_mod_with_carry(t_hi, &self.modulus, &self.modulus)
    }

    /// Computes `a^2 * R^-1 mod p`.
    pub fn square(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.mul(a, a)
    }

    /// Convert a reduced integer into Montgomery form.
    pub fn to_monty(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.mul(a, &self.r2)
    }

    /// Convert out of Montgomery form.
    pub fn from_monty(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.mul(a, &Uint::ONE)
    }

    /// Computes `base^exp` in Montgomery form, scanning the low `exp_bits`
    /// bits of `exp` with a Montgomery ladder.
    ///
    /// Every bit costs one multiplication and one squaring whatever its
    /// value, so only `exp_bits` is revealed through timing.
    pub fn pow(&self, base: &Uint<LIMBS>, exp: &Uint<LIMBS>, exp_bits: u32) -> Uint<LIMBS> {
        let mut r0 = self.one;
        let mut r1 = *base;

        for i in (0..exp_bits).rev() {
            let bit = exp.bit(i);
            Uint::conditional_swap(&mut r0, &mut r1, bit);
            r1 = self.mul(&r0, &r1);
            r0 = self.square(&r0);
            Uint::conditional_swap(&mut r0, &mut r1, bit);
        }

        r0
    }

    /// Computes `base^exp` in Montgomery form for a public exponent.
    pub fn pow_vartime(&self, base: &Uint<LIMBS>, exp: &Uint<LIMBS>) -> Uint<LIMBS> {
        let mut acc = self.one;
        for i in (0..exp.bits_vartime()).rev() {
            acc = self.square(&acc);
            if bool::from(exp.bit(i)) {
                acc = self.mul(&acc, base);
            }
        }
        acc
    }
}

/// Computes `a^-1 mod 2^64` for odd `a` by Newton iteration.
///
/// `a` is its own inverse modulo 8, and each step doubles the number of
/// correct low bits: 3, 6, 12, 24, 48, 96.
const fn inv_mod_word(a: Word) -> Word {
    let mut x = a;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul(2u64.wrapping_sub(a.wrapping_mul(x)));
        i += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::{MontyParams, inv_mod_word};
    use crate::{Error, U256, Uint};

    fn p256() -> MontyParams<4> {
        let p = U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff")
            .unwrap();
        MontyParams::new(p).unwrap()
    }

    #[test]
    fn word_inverse() {
        for a in [1u64, 3, 0xffff_ffff_ffff_ffff, 0x1234_5678_9abc_def1] {
            assert_eq!(a.wrapping_mul(inv_mod_word(a)), 1);
        }
    }

    #[test]
    fn rejects_even_modulus() {
        assert_eq!(MontyParams::new(U256::from_u64(10)), Err(Error::InvalidModulus));
        assert_eq!(MontyParams::new(U256::ONE), Err(Error::InvalidModulus));
    }

    #[test]
    fn constants() {
        let params = p256();
        assert_eq!(params.from_monty(params.one()), U256::ONE);
        assert_eq!(params.to_monty(&U256::ONE), *params.one());

        // R * R^-1 == 1
        let r = *params.one();
        let prod = r.widening_mul(params.r_inv());
        assert_eq!(U256::rem_wide(&prod.0, &prod.1, params.modulus()), Ok(U256::ONE));
    }

    #[test]
    fn mul_matches_reference() {
        let params = p256();
        let p = *params.modulus();
        let a = U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296")
            .unwrap();
        let b = U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5")
            .unwrap();
        let (lo, hi) = a.widening_mul(&b);
        let expected = U256::rem_wide(&lo, &hi, &p).unwrap();

        let prod = params.mul(&params.to_monty(&a), &params.to_monty(&b));
        assert_eq!(params.from_monty(&prod), expected);
    }

    #[test]
    fn small_modulus() {
        let params = MontyParams::new(Uint::<1>::from_u64(1_000_003)).unwrap();
        let a = params.to_monty(&Uint::from_u64(123_456));
        let b = params.to_monty(&Uint::from_u64(654_321));
        let prod = params.from_monty(&params.mul(&a, &b));
        assert_eq!(prod, Uint::from_u64(123_456 * 654_321 % 1_000_003));
    }

    #[test]
    fn pow_agrees_with_vartime() {
        let params = p256();
        let base = params.to_monty(&U256::from_u64(3));
        let exp = U256::from_be_hex("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721")
            .unwrap();
        assert_eq!(params.pow(&base, &exp, 256), params.pow_vartime(&base, &exp));

        // Fermat: 3^(p-1) == 1
        let p_minus_1 = params.modulus().wrapping_sub(&U256::ONE);
        assert_eq!(params.pow(&base, &p_minus_1, 256), *params.one());
    }
}
