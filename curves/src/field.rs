//! Coordinate arithmetic.
//!
//! Points keep their coordinates as raw Montgomery-form integers tied to the
//! base field of their curve. Once curve identity has been checked, all
//! operands share one context, so the formulas use operator syntax instead
//! of the context-checked [`Fp`] API.

use bignum::Uint;
use core::ops::{Add, Mul, Neg, Sub};
use primefield::{Fp, FpCtx};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Base field element of a curve.
#[derive(Clone, Copy)]
pub(crate) struct Fe<'f, const LIMBS: usize> {
    ctx: &'f FpCtx<LIMBS>,
    v: Uint<LIMBS>,
}

impl<'f, const LIMBS: usize> Fe<'f, LIMBS> {
    pub(crate) fn new(ctx: &'f FpCtx<LIMBS>, v: Uint<LIMBS>) -> Self {
        Self { ctx, v }
    }

    pub(crate) fn zero(ctx: &'f FpCtx<LIMBS>) -> Self {
        Self::new(ctx, Uint::ZERO)
    }

    pub(crate) fn one(ctx: &'f FpCtx<LIMBS>) -> Self {
        Self::new(ctx, ctx.one())
    }

    /// Borrow the value of a checked field element.
    pub(crate) fn from_fp(fp: &Fp<'f, LIMBS>) -> Self {
        Self::new(fp.context(), *fp.as_montgomery())
    }

    pub(crate) fn to_fp(self) -> Fp<'f, LIMBS> {
        Fp::from_montgomery_reduced(self.ctx, &self.v)
    }

    pub(crate) fn context(&self) -> &'f FpCtx<LIMBS> {
        self.ctx
    }

    /// Montgomery-form value.
    pub(crate) fn value(&self) -> &Uint<LIMBS> {
        &self.v
    }

    pub(crate) fn double(self) -> Self {
        Self::new(self.ctx, self.ctx.double(&self.v))
    }

    pub(crate) fn square(self) -> Self {
        Self::new(self.ctx, self.ctx.square(&self.v))
    }

    /// `1 / self`, or zero for zero.
    pub(crate) fn invert(self) -> Self {
        Self::new(self.ctx, self.ctx.invert(&self.v))
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.v.is_zero()
    }

    /// Parity of the canonical value.
    pub(crate) fn is_odd(&self) -> Choice {
        self.ctx.from_monty(&self.v).is_odd()
    }

    pub(crate) fn sqrt(self) -> CtOption<Self> {
        let ctx = self.ctx;
        ctx.sqrt(&self.v).map(|v| Self::new(ctx, v))
    }
}

impl<const LIMBS: usize> Add for Fe<'_, LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.ctx, self.ctx.add(&self.v, &rhs.v))
    }
}

impl<const LIMBS: usize> Sub for Fe<'_, LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.ctx, self.ctx.sub(&self.v, &rhs.v))
    }
}

impl<const LIMBS: usize> Mul for Fe<'_, LIMBS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.ctx, self.ctx.mul(&self.v, &rhs.v))
    }
}

impl<const LIMBS: usize> Neg for Fe<'_, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.ctx, self.ctx.neg(&self.v))
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Fe<'_, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(a.ctx, Uint::conditional_select(&a.v, &b.v, choice))
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Fe<'_, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.v.ct_eq(&other.v)
    }
}
