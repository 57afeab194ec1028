//! Modular inversion by the binary extended Euclidean algorithm.

use super::Uint;
use crate::{Error, Result};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Computes `self^-1 mod m` for an odd modulus `m`.
    ///
    /// Branches on its inputs: only use it with public values such as
    /// signature components. Secret values are inverted by exponentiation
    /// in the field layer instead.
    ///
    /// Fails with [`Error::InvalidModulus`] if `m` is even or one, and with
    /// [`Error::InvalidScalar`] if `self` shares a factor with `m`.
    pub fn inv_mod_vartime(&self, m: &Self) -> Result<Self> {
        if !bool::from(m.is_odd()) || *m == Self::ONE {
            return Err(Error::InvalidModulus);
        }

        // invariants: x1 * self == u, x2 * self == v (mod m)
        let mut u = self.rem(m)?;
        let mut v = *m;
        let mut x1 = Self::ONE;
        let mut x2 = Self::ZERO;

        loop {
            if u == Self::ONE {
                return Ok(x1);
            }
            if v == Self::ONE {
                return Ok(x2);
            }
            if bool::from(u.is_zero()) || bool::from(v.is_zero()) {
                return Err(Error::InvalidScalar);
            }

            while !bool::from(u.is_odd()) {
                u = u.shr(1);
                x1 = x1.half_mod(m);
            }
            while !bool::from(v.is_odd()) {
                v = v.shr(1);
                x2 = x2.half_mod(m);
            }

            if u >= v {
                u = u.wrapping_sub(&v);
                x1 = x1.sub_mod(&x2, m);
            } else {
                v = v.wrapping_sub(&u);
                x2 = x2.sub_mod(&x1, m);
            }
        }
    }

    /// Computes `self / 2 mod m` for odd `m` and `self < m`.
    pub fn half_mod(&self, m: &Self) -> Self {
        let odd = (self.words[0] & 1).wrapping_neg();
        let (sum, carry) = self.carrying_add(&m.and_word(odd), 0);
        sum.shr1_with_carry(carry)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, U256, Uint};

    #[test]
    fn small_inverse() {
        let m = Uint::<1>::from_u64(7);
        assert_eq!(Uint::<1>::from_u64(3).inv_mod_vartime(&m), Ok(Uint::from_u64(5)));
        assert_eq!(Uint::<1>::from_u64(1).inv_mod_vartime(&m), Ok(Uint::ONE));
        assert_eq!(Uint::<1>::from_u64(6).inv_mod_vartime(&m), Ok(Uint::from_u64(6)));
    }

    #[test]
    fn non_invertible() {
        let m = Uint::<1>::from_u64(15);
        assert_eq!(Uint::<1>::from_u64(5).inv_mod_vartime(&m), Err(Error::InvalidScalar));
        assert_eq!(Uint::<1>::ZERO.inv_mod_vartime(&m), Err(Error::InvalidScalar));
        assert_eq!(
            Uint::<1>::from_u64(3).inv_mod_vartime(&Uint::from_u64(16)),
            Err(Error::InvalidModulus)
        );
    }

    #[test]
    fn large_inverse() {
        let q = U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551")
            .unwrap();
        let a = U256::from_be_hex("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721")
            .unwrap();
        let inv = a.inv_mod_vartime(&q).unwrap();
        let (lo, hi) = a.widening_mul(&inv);
        assert_eq!(U256::rem_wide(&lo, &hi, &q), Ok(U256::ONE));
    }

    #[test]
    fn half_mod() {
        let m = Uint::<1>::from_u64(11);
        assert_eq!(Uint::<1>::from_u64(3).half_mod(&m), Uint::from_u64(7));
        assert_eq!(Uint::<1>::from_u64(4).half_mod(&m), Uint::from_u64(2));
    }
}
