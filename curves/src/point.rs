//! Points in projective coordinates.

use crate::{
    AffinePoint, Curve, CurveKind,
    curve::Model,
    field::Fe,
    point_arithmetic::PointArithmetic,
};
use bignum::{Error, Result, Uint};
use core::{fmt, ptr};
use primefield::Fp;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Point on a [`Curve`].
///
/// Short Weierstrass points use homogeneous projective coordinates
/// `(X : Y : Z)` with the identity at `(0 : 1 : 0)`. Twisted Edwards points
/// use extended coordinates `(X : Y : Z : T)` with `T = XY/Z` and the
/// identity at `(0 : 1 : 1 : 0)`.
///
/// Group operations use complete formulas and never branch on the values of
/// the coordinates.
#[derive(Clone, Copy)]
pub struct Point<'c, const LIMBS: usize> {
    pub(crate) curve: &'c Curve<LIMBS>,
    pub(crate) x: Fe<'c, LIMBS>,
    pub(crate) y: Fe<'c, LIMBS>,
    pub(crate) z: Fe<'c, LIMBS>,
    /// Extended coordinate, unused (zero) on short Weierstrass curves.
    pub(crate) t: Fe<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> Point<'c, LIMBS> {
    /// Additive identity of the group, also known as the "neutral element" or
    /// "point at infinity".
    pub fn identity(curve: &'c Curve<LIMBS>) -> Self {
        let field = curve.field();
        let zero = Fe::zero(field);
        let one = Fe::one(field);
        let z = match curve.kind() {
            CurveKind::ShortWeierstrass => zero,
            CurveKind::TwistedEdwards => one,
        };

        Self {
            curve,
            x: zero,
            y: one,
            z,
            t: zero,
        }
    }

    /// Create a point from affine coordinates in the curve's base field.
    ///
    /// Fails with [`Error::ContextMismatch`] if the coordinates belong to
    /// another field context and with [`Error::InvalidPoint`] if `(x, y)`
    /// does not satisfy the curve equation.
    pub fn from_affine(
        curve: &'c Curve<LIMBS>,
        x: &Fp<'_, LIMBS>,
        y: &Fp<'_, LIMBS>,
    ) -> Result<Self> {
        let field = curve.field();
        if !ptr::eq(x.context(), field) || !ptr::eq(y.context(), field) {
            return Err(Error::ContextMismatch);
        }

        let x = Fe::new(field, *x.as_montgomery());
        let y = Fe::new(field, *y.as_montgomery());
        if !bool::from(curve.contains(x, y)) {
            return Err(Error::InvalidPoint);
        }

        Ok(Self::from_affine_unchecked(curve, x, y))
    }

    pub(crate) fn from_affine_unchecked(
        curve: &'c Curve<LIMBS>,
        x: Fe<'c, LIMBS>,
        y: Fe<'c, LIMBS>,
    ) -> Self {
        let field = curve.field();
        let t = match curve.kind() {
            CurveKind::ShortWeierstrass => Fe::zero(field),
            CurveKind::TwistedEdwards => x * y,
        };

        Self {
            curve,
            x,
            y,
            z: Fe::one(field),
            t,
        }
    }

    /// Projective short Weierstrass result with this point's curve.
    pub(crate) fn with_coordinates(
        &self,
        x: Fe<'c, LIMBS>,
        y: Fe<'c, LIMBS>,
        z: Fe<'c, LIMBS>,
    ) -> Self {
        Self {
            curve: self.curve,
            x,
            y,
            z,
            t: Fe::zero(self.curve.field()),
        }
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'c Curve<LIMBS> {
        self.curve
    }

    fn check_curve(&self, other: &Self) -> Result<()> {
        match ptr::eq(self.curve, other.curve) {
            true => Ok(()),
            false => Err(Error::CurveMismatch),
        }
    }

    /// Constant-time select: returns `a` if `choice` is 0 and `b` if it is 1.
    ///
    /// Fails with [`Error::CurveMismatch`] unless both points lie on the same
    /// curve.
    pub fn select(a: &Self, b: &Self, choice: Choice) -> Result<Self> {
        a.check_curve(b)?;
        Ok(Self::select_unchecked(a, b, choice))
    }

    /// Select between two points already known to share a curve.
    pub(crate) fn select_unchecked(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            curve: a.curve,
            x: Fe::conditional_select(&a.x, &b.x, choice),
            y: Fe::conditional_select(&a.y, &b.y, choice),
            z: Fe::conditional_select(&a.z, &b.z, choice),
            t: Fe::conditional_select(&a.t, &b.t, choice),
        }
    }

    fn swap(a: &mut Self, b: &mut Self, choice: Choice) {
        let t = *a;
        *a = Self::select_unchecked(a, b, choice);
        *b = Self::select_unchecked(b, &t, choice);
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_curve(other)?;
        Ok(self.curve.formulas().add(self, other))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    /// Returns `self + self`.
    #[must_use]
    pub fn double(&self) -> Self {
        self.curve.formulas().double(self)
    }

    /// Returns `-self`.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self.curve.kind() {
            CurveKind::ShortWeierstrass => Self { y: -self.y, ..*self },
            CurveKind::TwistedEdwards => Self {
                x: -self.x,
                t: -self.t,
                ..*self
            },
        }
    }

    /// Returns `[k] self`.
    ///
    /// The scalar must be reduced: `k ≥ q` fails with
    /// [`Error::InvalidScalar`] rather than being reduced silently. The
    /// Montgomery ladder runs over the bit length of `q` whatever the
    /// magnitude of `k`.
    pub fn scalar_mul(&self, k: &Uint<LIMBS>) -> Result<Self> {
        if k >= self.curve.order() {
            return Err(Error::InvalidScalar);
        }
        Ok(self.ladder(k))
    }

    /// Returns `[k] self` for an element of the curve's scalar field.
    ///
    /// Fails with [`Error::ContextMismatch`] if `k` belongs to another context.
    pub fn mul_scalar(&self, k: &Fp<'_, LIMBS>) -> Result<Self> {
        if !ptr::eq(k.context(), self.curve.scalars()) {
            return Err(Error::ContextMismatch);
        }
        Ok(self.ladder(&k.to_uint()))
    }

    /// Montgomery ladder over the bit length of the group order.
    pub(crate) fn ladder(&self, k: &Uint<LIMBS>) -> Self {
        let formulas = self.curve.formulas();
        let mut r0 = Self::identity(self.curve);
        let mut r1 = *self;

        for i in (0..self.curve.scalars().bits()).rev() {
            let bit = k.bit(i);
            Self::swap(&mut r0, &mut r1, bit);
            r1 = formulas.add(&r0, &r1);
            r0 = formulas.double(&r0);
            Self::swap(&mut r0, &mut r1, bit);
        }

        r0
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        match self.curve.kind() {
            CurveKind::ShortWeierstrass => self.z.is_zero(),
            CurveKind::TwistedEdwards => self.x.is_zero() & self.y.ct_eq(&self.z),
        }
    }

    /// Does this point satisfy the curve equation?
    ///
    /// The identity is on the curve.
    pub fn is_on_curve(&self) -> Choice {
        let curve = self.curve;
        let (x, y, z) = (self.x, self.y, self.z);
        let fe = |v: &Uint<LIMBS>| Fe::new(curve.field(), *v);

        match *curve.model() {
            Model::ShortWeierstrass { a, b, .. } => {
                // Y²Z = X³ + aXZ² + bZ³
                let zz = z.square();
                let lhs = y.square() * z;
                let rhs = (x.square() + fe(&a) * zz) * x + fe(&b) * zz * z;
                lhs.ct_eq(&rhs) & !(y.is_zero() & z.is_zero())
            }
            Model::TwistedEdwards { a, d } => {
                // aX² + Y² = Z² + dT², XY = ZT
                let lhs = fe(&a) * x.square() + y.square();
                let rhs = z.square() + fe(&d) * self.t.square();
                lhs.ct_eq(&rhs) & (x * y).ct_eq(&(z * self.t)) & !z.is_zero()
            }
        }
    }

    /// Is this point in the subgroup generated by the curve's generator?
    ///
    /// Always true on curves with cofactor one; otherwise checks `[q] P = O`.
    pub fn is_in_subgroup(&self) -> Choice {
        if self.curve.cofactor() == 1 {
            return Choice::from(1);
        }
        self.mul_order_vartime().is_identity()
    }

    /// Returns `[q] self` by double-and-add over the public group order.
    pub(crate) fn mul_order_vartime(&self) -> Self {
        let formulas = self.curve.formulas();
        let q = self.curve.order();
        let mut acc = Self::identity(self.curve);
        for i in (0..q.bits_vartime()).rev() {
            acc = formulas.double(&acc);
            if bool::from(q.bit(i)) {
                acc = formulas.add(&acc, self);
            }
        }
        acc
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<'c, LIMBS> {
        let zinv = self.z.invert();
        AffinePoint {
            curve: self.curve,
            x: (self.x * zinv).to_fp(),
            y: (self.y * zinv).to_fp(),
            infinity: self.is_identity(),
        }
    }
}

//
// `subtle` trait impls
//

impl<const LIMBS: usize> ConstantTimeEq for Point<'_, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // X1Z2 == X2Z1 && Y1Z2 == Y2Z1
        let same_curve = Choice::from(ptr::eq(self.curve, other.curve) as u8);
        let x1z2 = self.x * other.z;
        let x2z1 = other.x * self.z;
        let y1z2 = self.y * other.z;
        let y2z1 = other.y * self.z;
        same_curve & x1z2.ct_eq(&x2z1) & y1z2.ct_eq(&y2z1)
    }
}

//
// `core::cmp` trait impls
//

impl<const LIMBS: usize> PartialEq for Point<'_, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for Point<'_, LIMBS> {}

impl<const LIMBS: usize> fmt::Debug for Point<'_, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let affine = self.to_affine();
        f.debug_struct("Point")
            .field("x", &affine.x)
            .field("y", &affine.y)
            .field("identity", &bool::from(affine.infinity))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Curve, CurveName, Point};
    use subtle::Choice;
    use bignum::{Error, Uint};
    use primefield::Fp;

    #[test]
    fn identity_laws() {
        for name in [CurveName::Secp256r1, CurveName::Edwards25519] {
            let curve = Curve::<4>::named(name).unwrap();
            let g = curve.generator();
            let o = curve.identity();

            assert!(bool::from(o.is_identity()));
            assert!(bool::from(o.is_on_curve()));
            assert_eq!(g.add(&o).unwrap(), g);
            assert_eq!(o.add(&g).unwrap(), g);
            assert_eq!(o.double(), o);
            assert_eq!(g.sub(&g).unwrap(), o);
            assert_eq!(g.add(&g.neg()).unwrap(), o);
        }
    }

    #[test]
    fn select_requires_same_curve() {
        let c1 = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let c2 = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let g1 = c1.generator();
        let g2 = c2.generator();

        for choice in [Choice::from(0), Choice::from(1)] {
            assert_eq!(Point::select(&g1, &g2, choice), Err(Error::CurveMismatch));
        }
        assert_ne!(g1, g2);

        let o = c1.identity();
        assert_eq!(Point::select(&g1, &o, Choice::from(0)).unwrap(), g1);
        assert_eq!(Point::select(&g1, &o, Choice::from(1)).unwrap(), o);
    }

    #[test]
    fn double_matches_add() {
        for name in [CurveName::Secp256r1, CurveName::Secp256k1, CurveName::BrainpoolP256r1] {
            let curve = Curve::<4>::named(name).unwrap();
            let g = curve.generator();
            assert_eq!(g.double(), g.add(&g).unwrap());
            assert_eq!(g.double().double(), curve.mul_generator(&Uint::from_u64(4)).unwrap());
        }
    }

    #[test]
    fn scalar_range() {
        let curve = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let g = curve.generator();
        assert_eq!(g.scalar_mul(curve.order()), Err(Error::InvalidScalar));
        assert_eq!(g.scalar_mul(&Uint::ZERO).unwrap(), curve.identity());
        assert_eq!(g.scalar_mul(&Uint::ONE).unwrap(), g);

        let q_minus_1 = curve.order().wrapping_sub(&Uint::ONE);
        assert_eq!(g.scalar_mul(&q_minus_1).unwrap(), g.neg());
    }

    #[test]
    fn curve_mismatch() {
        let c1 = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let c2 = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let g1 = c1.generator();
        let g2 = c2.generator();

        assert_eq!(g1.add(&g2), Err(Error::CurveMismatch));
        assert_eq!(g1.sub(&g2), Err(Error::CurveMismatch));
        assert_ne!(g1, g2);
    }

    #[test]
    fn mul_scalar_context() {
        let curve = Curve::<4>::named(CurveName::Secp256k1).unwrap();
        let g = curve.generator();
        let k = Fp::from_u64(curve.scalars(), 7);
        assert_eq!(g.mul_scalar(&k).unwrap(), g.scalar_mul(&Uint::from_u64(7)).unwrap());

        let wrong = Fp::from_u64(curve.field(), 7);
        assert_eq!(g.mul_scalar(&wrong), Err(Error::ContextMismatch));
    }

    #[test]
    fn from_affine_validates() {
        let curve = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let affine = curve.generator().to_affine();
        let p = crate::Point::from_affine(&curve, &affine.x(), &affine.y()).unwrap();
        assert_eq!(p, curve.generator());

        let bad_y = affine.y().add(&Fp::one(curve.field())).unwrap();
        assert_eq!(
            crate::Point::from_affine(&curve, &affine.x(), &bad_y),
            Err(Error::InvalidPoint)
        );

        let other = Curve::<4>::named(CurveName::Secp256r1).unwrap();
        let x = Fp::from_u64(other.field(), 1);
        assert_eq!(
            crate::Point::from_affine(&curve, &x, &affine.y()),
            Err(Error::ContextMismatch)
        );
    }

    #[test]
    fn edwards_subgroup() {
        let curve = Curve::<4>::named(CurveName::Edwards25519).unwrap();
        assert!(bool::from(curve.generator().is_in_subgroup()));

        // (0, -1) has order 2
        let field = curve.field();
        let p = crate::Point::from_affine(&curve, &Fp::zero(field), &Fp::one(field).neg()).unwrap();
        assert!(!bool::from(p.is_identity()));
        assert!(bool::from(p.double().is_identity()));
        assert!(!bool::from(p.is_in_subgroup()));
    }
}
