//! Field contexts: a modulus together with its precomputed Montgomery and
//! square root constants.
//!
//! Besides constructing [`Fp`](crate::Fp) elements, a context exposes the
//! raw Montgomery-domain arithmetic on [`Uint`] values already reduced
//! modulo `p`. Higher layers which have established that all their operands
//! belong to one context (e.g. the coordinates of points on one curve) use
//! these directly.

mod sqrt;

use self::sqrt::SqrtParams;
use bignum::{MontyParams, Result, Uint};
use core::fmt;
use subtle::CtOption;

/// Prime field context.
///
/// Contexts are compared by identity: two contexts built from the same
/// modulus are still distinct, and their elements cannot be mixed.
pub struct FpCtx<const LIMBS: usize> {
    params: MontyParams<LIMBS>,
    p_minus_2: Uint<LIMBS>,
    bits: u32,
    bytes: usize,
    sqrt: SqrtParams<LIMBS>,
}

impl<const LIMBS: usize> FpCtx<LIMBS> {
    /// Create a context for the prime `modulus`.
    ///
    /// The modulus must be odd and greater than one; primality is the
    /// caller's responsibility. Fails with
    /// [`Error::InvalidModulus`](crate::Error::InvalidModulus) otherwise, or
    /// when no quadratic non-residue is found for square roots.
    pub fn new(modulus: Uint<LIMBS>) -> Result<Self> {
        let params = MontyParams::new(modulus)?;
        let bits = modulus.bits_vartime();

        let mut ctx = Self {
            params,
            p_minus_2: modulus.wrapping_sub(&Uint::from_u64(2)),
            bits,
            bytes: bits.div_ceil(8) as usize,
            sqrt: SqrtParams::default(),
        };
        ctx.sqrt = SqrtParams::new(&ctx)?;
        Ok(ctx)
    }

    /// Create a context from a big-endian hex modulus.
    pub fn from_be_hex(hex: &str) -> Result<Self> {
        Self::new(Uint::from_be_hex(hex)?)
    }

    /// The modulus `p`.
    pub fn modulus(&self) -> &Uint<LIMBS> {
        self.params.modulus()
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Byte length of an encoded element.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// Montgomery constants.
    pub fn params(&self) -> &MontyParams<LIMBS> {
        &self.params
    }

    //
    // Montgomery-domain arithmetic on raw integers
    //

    /// One in Montgomery form.
    pub fn one(&self) -> Uint<LIMBS> {
        *self.params.one()
    }

    /// Convert a reduced integer into Montgomery form.
    pub fn to_monty(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.to_monty(a)
    }

    /// Convert out of Montgomery form into the canonical representative.
    pub fn from_monty(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.from_monty(a)
    }

    /// Computes `a + b`.
    pub fn add(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.add_mod(b, self.modulus())
    }

    /// Computes `a - b`.
    pub fn sub(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.sub_mod(b, self.modulus())
    }

    /// Computes `-a`.
    pub fn neg(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.neg_mod(self.modulus())
    }

    /// Computes `2a`.
    pub fn double(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        a.double_mod(self.modulus())
    }

    /// Computes `a * b`.
    pub fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.mul(a, b)
    }

    /// Computes `a^2`.
    pub fn square(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.square(a)
    }

    /// Computes `a^exp` scanning every bit of the exponent's capacity.
    pub fn pow(&self, a: &Uint<LIMBS>, exp: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.pow(a, exp, Uint::<LIMBS>::BITS)
    }

    /// Computes `a^exp` for a public exponent.
    pub fn pow_vartime(&self, a: &Uint<LIMBS>, exp: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.pow_vartime(a, exp)
    }

    /// Computes `a^(p-2)`, the inverse of `a` when `a` is non-zero and zero otherwise.
    pub fn invert(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.params.pow(a, &self.p_minus_2, self.bits)
    }

    /// Square root of `a`, or none if `a` is a non-residue.
    pub fn sqrt(&self, a: &Uint<LIMBS>) -> CtOption<Uint<LIMBS>> {
        self.sqrt_monty(a)
    }

    /// Reduce an arbitrary integer modulo `p` (canonical form, not Montgomery).
    pub fn reduce(&self, a: &Uint<LIMBS>) -> Uint<LIMBS> {
        // the modulus is never zero, so `rem` cannot fail
        a.rem(self.modulus()).unwrap_or(Uint::ZERO)
    }
}

impl<const LIMBS: usize> fmt::Debug for FpCtx<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FpCtx")
            .field("modulus", self.modulus())
            .field("bits", &self.bits)
            .field("sqrt", &self.sqrt.algorithm())
            .finish()
    }
}
