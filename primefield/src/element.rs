//! Field elements bound to a field context.

use crate::{ByteOrder, FpCtx};
use bignum::{Error, Result, Uint};
use core::{fmt, ptr};
use rand_core::TryRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

/// Element of the prime field described by an [`FpCtx`].
///
/// The value is kept in Montgomery form and is always reduced. Binary
/// operations check that both operands borrow the same context and fail
/// with [`Error::ContextMismatch`] otherwise.
#[derive(Clone, Copy)]
pub struct Fp<'f, const LIMBS: usize> {
    ctx: &'f FpCtx<LIMBS>,
    mont: Uint<LIMBS>,
}

impl<'f, const LIMBS: usize> Fp<'f, LIMBS> {
    /// Zero element (additive identity).
    pub fn zero(ctx: &'f FpCtx<LIMBS>) -> Self {
        Self {
            ctx,
            mont: Uint::ZERO,
        }
    }

    /// Multiplicative identity.
    pub fn one(ctx: &'f FpCtx<LIMBS>) -> Self {
        Self {
            ctx,
            mont: ctx.one(),
        }
    }

    /// Create an element from a `u64`, reducing it modulo `p`.
    pub fn from_u64(ctx: &'f FpCtx<LIMBS>, n: u64) -> Self {
        Self::from_uint_reduced(ctx, &Uint::from_u64(n))
    }

    /// Create an element from a canonical integer.
    ///
    /// Fails with [`Error::InvalidScalar`] if `n >= p`; out-of-range input is
    /// rejected rather than reduced.
    pub fn from_uint(ctx: &'f FpCtx<LIMBS>, n: &Uint<LIMBS>) -> Result<Self> {
        if n >= ctx.modulus() {
            return Err(Error::InvalidScalar);
        }
        Ok(Self {
            ctx,
            mont: ctx.to_monty(n),
        })
    }

    /// Create an element from an arbitrary integer, reducing it modulo `p`.
    pub fn from_uint_reduced(ctx: &'f FpCtx<LIMBS>, n: &Uint<LIMBS>) -> Self {
        Self {
            ctx,
            mont: ctx.to_monty(&ctx.reduce(n)),
        }
    }

    /// Create an element from an integer already in Montgomery form.
    pub fn from_montgomery(ctx: &'f FpCtx<LIMBS>, mont: Uint<LIMBS>) -> Result<Self> {
        if mont >= *ctx.modulus() {
            return Err(Error::InvalidScalar);
        }
        Ok(Self { ctx, mont })
    }

    /// Create an element from a Montgomery-form integer, reducing it modulo `p`.
    ///
    /// Infallible counterpart of [`Fp::from_montgomery`] for values produced
    /// by the context's own raw arithmetic.
    pub fn from_montgomery_reduced(ctx: &'f FpCtx<LIMBS>, mont: &Uint<LIMBS>) -> Self {
        Self {
            ctx,
            mont: ctx.reduce(mont),
        }
    }

    /// Decode an element from exactly [`FpCtx::bytes`] bytes.
    pub fn from_bytes(ctx: &'f FpCtx<LIMBS>, bytes: &[u8], order: ByteOrder) -> Result<Self> {
        if bytes.len() != ctx.bytes() {
            return Err(Error::InvalidLength);
        }
        Self::from_uint(ctx, &order.decode(bytes)?)
    }

    /// Generate a uniformly random element.
    pub fn random<R: TryRngCore + ?Sized>(ctx: &'f FpCtx<LIMBS>, rng: &mut R) -> Result<Self> {
        let n = Uint::random_below(rng, ctx.modulus())?;
        Ok(Self {
            ctx,
            mont: ctx.to_monty(&n),
        })
    }

    /// Generate a uniformly random non-zero element.
    pub fn random_nonzero<R: TryRngCore + ?Sized>(
        ctx: &'f FpCtx<LIMBS>,
        rng: &mut R,
    ) -> Result<Self> {
        let n = Uint::random_nonzero_below(rng, ctx.modulus())?;
        Ok(Self {
            ctx,
            mont: ctx.to_monty(&n),
        })
    }

    /// The context this element belongs to.
    pub fn context(&self) -> &'f FpCtx<LIMBS> {
        self.ctx
    }

    /// Canonical integer value in `[0, p)`.
    pub fn to_uint(&self) -> Uint<LIMBS> {
        self.ctx.from_monty(&self.mont)
    }

    /// Internal Montgomery form.
    pub fn as_montgomery(&self) -> &Uint<LIMBS> {
        &self.mont
    }

    /// Encode into exactly [`FpCtx::bytes`] bytes.
    pub fn write_bytes(&self, out: &mut [u8], order: ByteOrder) -> Result<()> {
        if out.len() != self.ctx.bytes() {
            return Err(Error::InvalidLength);
        }
        order.encode(&self.to_uint(), out)
    }

    /// Determine if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.mont.is_zero()
    }

    /// Determine if the canonical value is odd.
    pub fn is_odd(&self) -> Choice {
        self.to_uint().is_odd()
    }

    /// Returns `true` if both elements borrow the same context.
    pub fn same_context(&self, other: &Self) -> bool {
        ptr::eq(self.ctx, other.ctx)
    }

    fn check_context(&self, other: &Self) -> Result<()> {
        match self.same_context(other) {
            true => Ok(()),
            false => Err(Error::ContextMismatch),
        }
    }

    fn with(&self, mont: Uint<LIMBS>) -> Self {
        Self { ctx: self.ctx, mont }
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_context(rhs)?;
        Ok(self.with(self.ctx.add(&self.mont, &rhs.mont)))
    }

    /// Subtract elements.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_context(rhs)?;
        Ok(self.with(self.ctx.sub(&self.mont, &rhs.mont)))
    }

    /// Multiply elements.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_context(rhs)?;
        Ok(self.with(self.ctx.mul(&self.mont, &rhs.mont)))
    }

    /// Negate element.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.with(self.ctx.neg(&self.mont))
    }

    /// Double element (add it to itself).
    #[must_use]
    pub fn double(&self) -> Self {
        self.with(self.ctx.double(&self.mont))
    }

    /// Compute modular square.
    #[must_use]
    pub fn square(&self) -> Self {
        self.with(self.ctx.square(&self.mont))
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// Runs a Montgomery ladder over every bit of `exp`'s capacity, so the
    /// exponent may be secret.
    #[must_use]
    pub fn pow(&self, exp: &Uint<LIMBS>) -> Self {
        self.with(self.ctx.pow(&self.mont, exp))
    }

    /// Returns `self^exp`.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    #[must_use]
    pub fn pow_vartime(&self, exp: &Uint<LIMBS>) -> Self {
        self.with(self.ctx.pow_vartime(&self.mont, exp))
    }

    /// Compute field inversion: `1 / self`, by Fermat's little theorem.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.with(self.ctx.invert(&self.mont)), !self.is_zero())
    }

    /// Compute field inversion: `1 / self` in variable-time.
    ///
    /// Fails with [`Error::InvalidScalar`] for zero. Only for public values.
    pub fn invert_vartime(&self) -> Result<Self> {
        let inv = self.to_uint().inv_mod_vartime(self.ctx.modulus())?;
        Ok(self.with(self.ctx.to_monty(&inv)))
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        self.ctx.sqrt(&self.mont).map(|mont| self.with(mont))
    }

    /// Constant-time select: returns `a` if `choice` is 0 and `b` if it is 1.
    ///
    /// Fails with [`Error::ContextMismatch`] unless both elements borrow the
    /// same context.
    pub fn select(a: &Self, b: &Self, choice: Choice) -> Result<Self> {
        a.check_context(b)?;
        Ok(a.with(Uint::conditional_select(&a.mont, &b.mont, choice)))
    }
}

//
// `subtle` trait impls
//

impl<const LIMBS: usize> ConstantTimeEq for Fp<'_, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        Choice::from(self.same_context(other) as u8) & self.mont.ct_eq(&other.mont)
    }
}

//
// `core::cmp` trait impls
//

impl<const LIMBS: usize> PartialEq for Fp<'_, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for Fp<'_, LIMBS> {}

impl<const LIMBS: usize> fmt::Debug for Fp<'_, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{:X})", self.to_uint())
    }
}

impl<const LIMBS: usize> Zeroize for Fp<'_, LIMBS> {
    fn zeroize(&mut self) {
        self.mont.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::Fp;
    use crate::{ByteOrder, FpCtx};
    use bignum::{Error, U256, Uint};
    use hex_literal::hex;
    use subtle::{Choice, ConstantTimeEq};

    const P256_FIELD: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

    #[test]
    fn context_mismatch() {
        let ctx1 = FpCtx::<4>::from_be_hex(P256_FIELD).unwrap();
        let ctx2 = FpCtx::<4>::from_be_hex(P256_FIELD).unwrap();
        let a = Fp::from_u64(&ctx1, 5);
        let b = Fp::from_u64(&ctx2, 5);

        assert_eq!(a.add(&b), Err(Error::ContextMismatch));
        assert_eq!(a.sub(&b), Err(Error::ContextMismatch));
        assert_eq!(a.mul(&b), Err(Error::ContextMismatch));
        assert_ne!(a, b);
        assert_eq!(a.add(&a).unwrap(), Fp::from_u64(&ctx1, 10));
    }

    #[test]
    fn select_rejects_foreign_context() {
        let f13 = FpCtx::<1>::new(Uint::from_u64(13)).unwrap();
        let f17 = FpCtx::<1>::new(Uint::from_u64(17)).unwrap();
        let a = Fp::from_u64(&f13, 1);
        let b = Fp::from_u64(&f17, 16);

        for choice in [Choice::from(0), Choice::from(1)] {
            assert_eq!(Fp::select(&a, &b, choice), Err(Error::ContextMismatch));
        }
        assert!(!bool::from(a.ct_eq(&b)));
        assert_ne!(a, b);

        let c = Fp::from_u64(&f13, 12);
        assert_eq!(Fp::select(&a, &c, Choice::from(0)).unwrap(), a);
        assert_eq!(Fp::select(&a, &c, Choice::from(1)).unwrap(), c);
    }

    #[test]
    fn from_uint_rejects_out_of_range() {
        let ctx = FpCtx::<4>::from_be_hex(P256_FIELD).unwrap();
        let p = *ctx.modulus();
        assert_eq!(Fp::from_uint(&ctx, &p), Err(Error::InvalidScalar));
        assert_eq!(Fp::from_uint_reduced(&ctx, &p), Fp::zero(&ctx));
        let p_plus_1 = p.wrapping_add(&U256::ONE);
        assert_eq!(Fp::from_uint_reduced(&ctx, &p_plus_1), Fp::one(&ctx));
    }

    #[test]
    fn bytes() {
        let ctx = FpCtx::<4>::from_be_hex(P256_FIELD).unwrap();
        let be = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
        let fe = Fp::from_bytes(&ctx, &be, ByteOrder::BigEndian).unwrap();

        let mut le = [0u8; 32];
        fe.write_bytes(&mut le, ByteOrder::LittleEndian).unwrap();
        let mut expected = be;
        expected.reverse();
        assert_eq!(le, expected);

        assert_eq!(Fp::from_bytes(&ctx, &be[1..], ByteOrder::BigEndian), Err(Error::InvalidLength));
        assert_eq!(
            Fp::from_bytes(&ctx, &[0xff; 32], ByteOrder::BigEndian),
            Err(Error::InvalidScalar)
        );
        let mut short = [0u8; 31];
        assert_eq!(fe.write_bytes(&mut short, ByteOrder::BigEndian), Err(Error::InvalidLength));
    }

    #[test]
    fn invert() {
        let ctx = FpCtx::<4>::from_be_hex(P256_FIELD).unwrap();
        let one = Fp::one(&ctx);
        assert_eq!(one.invert().unwrap(), one);

        let three = one.add(&one).unwrap().add(&one).unwrap();
        let inv_three = three.invert().unwrap();
        assert_eq!(three.mul(&inv_three).unwrap(), one);
        assert_eq!(three.invert_vartime().unwrap(), inv_three);

        let minus_three = three.neg();
        let inv_minus_three = minus_three.invert().unwrap();
        assert_eq!(inv_minus_three, inv_three.neg());
        assert_eq!(three.mul(&inv_minus_three).unwrap(), one.neg());

        assert!(bool::from(Fp::zero(&ctx).invert().is_none()));
        assert_eq!(Fp::zero(&ctx).invert_vartime(), Err(Error::InvalidScalar));
    }

    #[test]
    fn pow() {
        let ctx = FpCtx::new(Uint::<1>::from_u64(1_000_003)).unwrap();
        let two = Fp::from_u64(&ctx, 2);
        let exp = Uint::from_u64(20);
        assert_eq!(two.pow(&exp), Fp::from_u64(&ctx, 1 << 20));
        assert_eq!(two.pow_vartime(&exp), Fp::from_u64(&ctx, 1 << 20));
    }

    #[test]
    fn parity() {
        let ctx = FpCtx::new(Uint::<1>::from_u64(1_000_003)).unwrap();
        assert!(bool::from(Fp::from_u64(&ctx, 7).is_odd()));
        assert!(!bool::from(Fp::from_u64(&ctx, 7).neg().is_odd()));
    }
}
