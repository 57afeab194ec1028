//! Curve descriptors.

use crate::{
    CurveName, Point,
    field::Fe,
    point_arithmetic::{EquationA, Formulas},
};
use bignum::{Error, Result, Uint};
use core::fmt;
use primefield::{Fp, FpCtx};
use subtle::{Choice, ConstantTimeEq};

/// Curve model.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CurveKind {
    /// Short Weierstrass curve: `y² = x³ + ax + b`.
    ShortWeierstrass,

    /// Twisted Edwards curve: `ax² + y² = 1 + dx²y²`.
    TwistedEdwards,
}

/// Curve equation coefficients, as canonical integers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Equation<const LIMBS: usize> {
    /// `y² = x³ + ax + b`
    ShortWeierstrass {
        /// 𝒂-coefficient
        a: Uint<LIMBS>,
        /// 𝒃-coefficient
        b: Uint<LIMBS>,
    },

    /// `ax² + y² = 1 + dx²y²`
    TwistedEdwards {
        /// 𝒂-coefficient
        a: Uint<LIMBS>,
        /// 𝒅-coefficient
        d: Uint<LIMBS>,
    },
}

/// Coefficients in Montgomery form.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Model<const LIMBS: usize> {
    ShortWeierstrass {
        a: Uint<LIMBS>,
        b: Uint<LIMBS>,
        /// `3b`
        b3: Uint<LIMBS>,
        equation_a: EquationA,
    },
    TwistedEdwards {
        a: Uint<LIMBS>,
        d: Uint<LIMBS>,
    },
}

/// Elliptic curve over a prime field, with a generator of a prime order
/// subgroup.
///
/// Immutable once constructed. Points borrow their curve and operations on
/// points of two different curves fail with [`Error::CurveMismatch`].
pub struct Curve<const LIMBS: usize> {
    name: Option<CurveName>,
    field: FpCtx<LIMBS>,
    scalars: FpCtx<LIMBS>,
    model: Model<LIMBS>,
    cofactor: u64,
    /// Affine generator coordinates, Montgomery form.
    generator: (Uint<LIMBS>, Uint<LIMBS>),
}

impl<const LIMBS: usize> Curve<LIMBS> {
    /// Short Weierstrass curve `y² = x³ + ax + b` over `GF(p)` with generator
    /// `(gx, gy)` of prime order `q`.
    ///
    /// Fails with [`Error::InvalidModulus`] if `p` or `q` is not a usable
    /// modulus, a coefficient is not reduced, `b = 0`, the curve is singular
    /// or the cofactor is zero. Fails with [`Error::InvalidPoint`] if the
    /// generator is not a point of order `q`.
    pub fn short_weierstrass(
        p: &Uint<LIMBS>,
        a: &Uint<LIMBS>,
        b: &Uint<LIMBS>,
        q: &Uint<LIMBS>,
        cofactor: u64,
        gx: &Uint<LIMBS>,
        gy: &Uint<LIMBS>,
    ) -> Result<Self> {
        Self::build(None, p, Equation::ShortWeierstrass { a: *a, b: *b }, q, cofactor, (gx, gy))
    }

    /// Twisted Edwards curve `ax² + y² = 1 + dx²y²` over `GF(p)` with
    /// generator `(gx, gy)` of prime order `q`.
    ///
    /// The unified addition law is only complete when `a` is a square and
    /// `d` is not, so other parameters are rejected with
    /// [`Error::InvalidModulus`], as are `a = 0`, `d = 0` and `a = d`.
    pub fn twisted_edwards(
        p: &Uint<LIMBS>,
        a: &Uint<LIMBS>,
        d: &Uint<LIMBS>,
        q: &Uint<LIMBS>,
        cofactor: u64,
        gx: &Uint<LIMBS>,
        gy: &Uint<LIMBS>,
    ) -> Result<Self> {
        Self::build(None, p, Equation::TwistedEdwards { a: *a, d: *d }, q, cofactor, (gx, gy))
    }

    pub(crate) fn build(
        name: Option<CurveName>,
        p: &Uint<LIMBS>,
        equation: Equation<LIMBS>,
        q: &Uint<LIMBS>,
        cofactor: u64,
        (gx, gy): (&Uint<LIMBS>, &Uint<LIMBS>),
    ) -> Result<Self> {
        if cofactor == 0 {
            return Err(Error::InvalidModulus);
        }

        let field = FpCtx::new(*p)?;
        let scalars = FpCtx::new(*q)?;
        let coefficient = |c: &Uint<LIMBS>| {
            Fp::from_uint(&field, c)
                .map(|fe| *fe.as_montgomery())
                .map_err(|_| Error::InvalidModulus)
        };

        let model = match equation {
            Equation::ShortWeierstrass { a, b } => {
                let a = coefficient(&a)?;
                let b = coefficient(&b)?;
                let (fa, fb) = (Fe::new(&field, a), Fe::new(&field, b));

                // 4a³ + 27b² ≠ 0
                let four_a3 = (fa.square() * fa).double().double();
                let b2 = fb.square();
                let b2_3 = b2.double() + b2;
                let b2_27 = b2_3.double().double().double() + b2_3;
                let discriminant = four_a3 + b2_27;
                if bool::from(fb.is_zero() | discriminant.is_zero()) {
                    return Err(Error::InvalidModulus);
                }

                let b3 = fb.double() + fb;
                Model::ShortWeierstrass {
                    a,
                    b,
                    b3: *b3.value(),
                    equation_a: EquationA::classify(&fa),
                }
            }
            Equation::TwistedEdwards { a, d } => {
                let a = coefficient(&a)?;
                let d = coefficient(&d)?;
                let (fa, fd) = (Fe::new(&field, a), Fe::new(&field, d));

                let degenerate = fa.is_zero() | fd.is_zero() | fa.ct_eq(&fd);
                let complete = fa.sqrt().is_some() & fd.sqrt().is_none();
                if bool::from(degenerate | !complete) {
                    return Err(Error::InvalidModulus);
                }

                Model::TwistedEdwards { a, d }
            }
        };

        let gx = Fp::from_uint(&field, gx).map_err(|_| Error::InvalidPoint)?;
        let gy = Fp::from_uint(&field, gy).map_err(|_| Error::InvalidPoint)?;
        let generator = (*gx.as_montgomery(), *gy.as_montgomery());

        let curve = Self {
            name,
            field,
            scalars,
            model,
            cofactor,
            generator,
        };
        curve.check_generator()?;

        log::debug!(
            "constructed {:?} curve {} over a {}-bit field, {}-bit order, cofactor {}",
            curve.kind(),
            curve.name.map_or("(custom)", |name| name.as_str()),
            curve.field.bits(),
            curve.scalars.bits(),
            curve.cofactor
        );
        Ok(curve)
    }

    /// The generator must lie on the curve and have order `q`.
    fn check_generator(&self) -> Result<()> {
        let g = self.generator();
        let valid = g.is_on_curve() & !g.is_identity() & g.mul_order_vartime().is_identity();
        match bool::from(valid) {
            true => Ok(()),
            false => Err(Error::InvalidPoint),
        }
    }

    /// Registry name, if this curve was built with [`Curve::named`].
    pub fn name(&self) -> Option<CurveName> {
        self.name
    }

    /// Curve model.
    pub fn kind(&self) -> CurveKind {
        match self.model {
            Model::ShortWeierstrass { .. } => CurveKind::ShortWeierstrass,
            Model::TwistedEdwards { .. } => CurveKind::TwistedEdwards,
        }
    }

    /// Equation coefficients.
    pub fn equation(&self) -> Equation<LIMBS> {
        let canonical = |v: &Uint<LIMBS>| self.field.from_monty(v);
        match &self.model {
            Model::ShortWeierstrass { a, b, .. } => Equation::ShortWeierstrass {
                a: canonical(a),
                b: canonical(b),
            },
            Model::TwistedEdwards { a, d } => Equation::TwistedEdwards {
                a: canonical(a),
                d: canonical(d),
            },
        }
    }

    /// Base field context.
    pub fn field(&self) -> &FpCtx<LIMBS> {
        &self.field
    }

    /// Scalar field context: integers modulo the subgroup order `q`.
    pub fn scalars(&self) -> &FpCtx<LIMBS> {
        &self.scalars
    }

    /// Order `q` of the generator.
    pub fn order(&self) -> &Uint<LIMBS> {
        self.scalars.modulus()
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u64 {
        self.cofactor
    }

    /// Byte length of an encoded base field element.
    pub fn field_bytes(&self) -> usize {
        self.field.bytes()
    }

    /// Byte length of an encoded scalar.
    pub fn scalar_bytes(&self) -> usize {
        self.scalars.bytes()
    }

    /// Identity element.
    pub fn identity(&self) -> Point<'_, LIMBS> {
        Point::identity(self)
    }

    /// Generator of the prime order subgroup.
    pub fn generator(&self) -> Point<'_, LIMBS> {
        let (x, y) = self.generator;
        Point::from_affine_unchecked(self, Fe::new(&self.field, x), Fe::new(&self.field, y))
    }

    /// Returns `[k] G`. Fails with [`Error::InvalidScalar`] if `k ≥ q`.
    pub fn mul_generator(&self, k: &Uint<LIMBS>) -> Result<Point<'_, LIMBS>> {
        self.generator().scalar_mul(k)
    }

    /// Returns `true` if `other` is this very curve instance.
    pub fn same_curve(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }

    pub(crate) fn model(&self) -> &Model<LIMBS> {
        &self.model
    }

    pub(crate) fn formulas(&self) -> Formulas<'_, LIMBS> {
        Formulas::for_curve(self)
    }

    /// Curve equation evaluated on affine coordinates.
    pub(crate) fn contains(&self, x: Fe<'_, LIMBS>, y: Fe<'_, LIMBS>) -> Choice {
        let fe = |v: &Uint<LIMBS>| Fe::new(&self.field, *v);
        let one = Fe::one(&self.field);
        match &self.model {
            Model::ShortWeierstrass { a, b, .. } => {
                let rhs = (x.square() + fe(a)) * x + fe(b);
                y.square().ct_eq(&rhs)
            }
            Model::TwistedEdwards { a, d } => {
                let (xx, yy) = (x.square(), y.square());
                let lhs = fe(a) * xx + yy;
                let rhs = one + fe(d) * xx * yy;
                lhs.ct_eq(&rhs)
            }
        }
    }
}

impl<const LIMBS: usize> fmt::Debug for Curve<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("equation", &self.equation())
            .field("p", self.field.modulus())
            .field("q", self.order())
            .field("cofactor", &self.cofactor)
            .finish()
    }
}
