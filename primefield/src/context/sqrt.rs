//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use super::FpCtx;
use bignum::{Error, Result, Uint};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Upper bound on the quadratic non-residue search for Tonelli-Shanks.
const MAX_NONRESIDUE_CANDIDATE: u64 = 1 << 10;

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Algorithm {
    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    Atkins,

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    fn for_modulus<const LIMBS: usize>(p: &Uint<LIMBS>) -> Self {
        let low = p.as_words()[0];
        if low % 4 == 3 {
            Self::Shanks
        } else if low % 8 == 5 {
            Self::Atkins
        } else {
            Self::TonelliShanks
        }
    }
}

/// Per-modulus square root constants, all field values in Montgomery form.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SqrtParams<const LIMBS: usize> {
    algorithm: Algorithm,

    /// `(p + 1) / 4` (Shanks), `(p - 5) / 8` (Atkins) or `(t - 1) / 2` (Tonelli-Shanks).
    exp: Uint<LIMBS>,

    /// `2^((p - 5) / 8)` (Atkins) or a primitive `2^s`-th root of unity (Tonelli-Shanks).
    constant: Uint<LIMBS>,

    /// `s` such that `p - 1 = 2^s * t` with `t` odd.
    s: u32,
}

impl<const LIMBS: usize> SqrtParams<LIMBS> {
    /// Derive the constants for the modulus of `ctx`.
    pub(crate) fn new(ctx: &FpCtx<LIMBS>) -> Result<Self> {
        let p = ctx.modulus();
        let algorithm = Algorithm::for_modulus(p);

        match algorithm {
            // (p + 1) / 4 == (p >> 2) + 1 for p ≡ 3 (mod 4)
            Algorithm::Shanks => Ok(Self {
                algorithm,
                exp: p.shr(2).wrapping_add(&Uint::ONE),
                constant: Uint::ZERO,
                s: 1,
            }),
            // (p - 5) / 8 == p >> 3 for p ≡ 5 (mod 8)
            Algorithm::Atkins => {
                let exp = p.shr(3);
                let two = ctx.double(&ctx.one());
                Ok(Self {
                    algorithm,
                    exp,
                    constant: ctx.pow_vartime(&two, &exp),
                    s: 2,
                })
            }
            Algorithm::TonelliShanks => {
                let p_minus_1 = p.wrapping_sub(&Uint::ONE);
                let s = trailing_zeros(&p_minus_1);
                let t = p_minus_1.shr(s);
                let z = find_nonresidue(ctx)?;
                Ok(Self {
                    algorithm,
                    exp: t.shr(1),
                    constant: ctx.pow_vartime(&z, &t),
                    s,
                })
            }
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl<const LIMBS: usize> FpCtx<LIMBS> {
    /// Returns the square root of `a` (Montgomery form) mod p, or `None` if
    /// no square root exists.
    pub(super) fn sqrt_monty(&self, a: &Uint<LIMBS>) -> CtOption<Uint<LIMBS>> {
        match self.sqrt.algorithm {
            Algorithm::Atkins => self.sqrt_atkins(a),
            Algorithm::Shanks => self.sqrt_shanks(a),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(a),
        }
    }

    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkins(&self, a: &Uint<LIMBS>) -> CtOption<Uint<LIMBS>> {
        let one = self.one();
        let t = self.sqrt.constant;
        let a1 = self.pow_vartime(a, &self.sqrt.exp);
        let a0 = self.square(&self.mul(&self.square(&a1), a));
        let b = self.mul(&t, &a1);
        let ab = self.mul(a, &b);
        let i = self.double(&self.mul(&ab, &b));
        let x = self.mul(&ab, &self.sub(&i, &one));
        CtOption::new(x, !a0.ct_eq(&self.neg(&one)))
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_shanks(&self, a: &Uint<LIMBS>) -> CtOption<Uint<LIMBS>> {
        let sqrt = self.pow_vartime(a, &self.sqrt.exp);
        CtOption::new(sqrt, self.square(&sqrt).ct_eq(a))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self, a: &Uint<LIMBS>) -> CtOption<Uint<LIMBS>> {
        let one = self.one();
        let w = self.pow_vartime(a, &self.sqrt.exp);

        let mut v = self.sqrt.s;
        let mut x = self.mul(a, &w);
        let mut b = self.mul(&x, &w);
        let mut z = self.sqrt.constant;

        for max_v in (1..=self.sqrt.s).rev() {
            let mut k = 1;
            let mut tmp = self.square(&b);
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&one);
                let squared = self.square(&Uint::conditional_select(&tmp, &z, tmp_is_one));
                tmp = Uint::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Uint::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Uint::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = self.mul(&x, &z);
            x = Uint::conditional_select(&result, &x, b.ct_eq(&one));
            z = self.square(&z);
            b = self.mul(&b, &z);
            v = k;
        }

        CtOption::new(x, self.square(&x).ct_eq(a))
    }
}

/// Number of trailing zero bits of a non-zero public value.
fn trailing_zeros<const LIMBS: usize>(n: &Uint<LIMBS>) -> u32 {
    let mut zeros = 0;
    for w in n.as_words() {
        if *w != 0 {
            return zeros + w.trailing_zeros();
        }
        zeros += u64::BITS;
    }
    zeros
}

/// Smallest quadratic non-residue `z ≥ 2`, in Montgomery form.
fn find_nonresidue<const LIMBS: usize>(ctx: &FpCtx<LIMBS>) -> Result<Uint<LIMBS>> {
    let p = ctx.modulus();
    let legendre_exp = p.shr(1);
    let minus_one = ctx.neg(&ctx.one());

    for candidate in 2..MAX_NONRESIDUE_CANDIDATE {
        let n = Uint::from_u64(candidate);
        if n >= *p {
            break;
        }
        let z = ctx.to_monty(&n);
        if ctx.pow_vartime(&z, &legendre_exp) == minus_one {
            return Ok(z);
        }
    }

    Err(Error::InvalidModulus)
}
