//! Point arithmetic implementation optimised for different curve equations
//!
//! Support for formulas specialized to the short Weierstrass equation's
//! 𝒂-coefficient, and the unified law for twisted Edwards curves.

use crate::{Curve, Point, curve::Model, field::Fe};
use subtle::ConstantTimeEq;

mod sealed {
    use crate::Point;

    /// Elliptic point arithmetic implementation
    ///
    /// Provides implementation of point arithmetic (point addition, point doubling) which
    /// might be optimized for the curve.
    pub trait PointArithmetic<'c, const LIMBS: usize> {
        /// Returns `lhs + rhs`
        fn add(&self, lhs: &Point<'c, LIMBS>, rhs: &Point<'c, LIMBS>) -> Point<'c, LIMBS>;

        /// Returns `point + point`
        fn double(&self, point: &Point<'c, LIMBS>) -> Point<'c, LIMBS>;
    }
}

/// Allow crate-local visibility
pub(crate) use sealed::PointArithmetic;

/// Special forms of the short Weierstrass 𝒂-coefficient.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EquationA {
    Zero,
    MinusThree,
    Generic,
}

impl EquationA {
    pub(crate) fn classify<const LIMBS: usize>(a: &Fe<'_, LIMBS>) -> Self {
        let one = Fe::one(a.context());
        let minus_three = -(one.double() + one);
        if bool::from(a.is_zero()) {
            Self::Zero
        } else if bool::from(a.ct_eq(&minus_three)) {
            Self::MinusThree
        } else {
            Self::Generic
        }
    }
}

/// Formulas selected for a curve, with its coefficients loaded.
pub(crate) enum Formulas<'c, const LIMBS: usize> {
    Generic(EquationAIsGeneric<'c, LIMBS>),
    MinusThree(EquationAIsMinusThree<'c, LIMBS>),
    Zero(EquationAIsZero<'c, LIMBS>),
    Edwards(TwistedEdwards<'c, LIMBS>),
}

impl<'c, const LIMBS: usize> Formulas<'c, LIMBS> {
    pub(crate) fn for_curve(curve: &'c Curve<LIMBS>) -> Self {
        let fe = |v| Fe::new(curve.field(), v);
        match *curve.model() {
            Model::ShortWeierstrass {
                a,
                b3,
                equation_a: EquationA::Generic,
                ..
            } => Self::Generic(EquationAIsGeneric { a: fe(a), b3: fe(b3) }),
            Model::ShortWeierstrass {
                b,
                equation_a: EquationA::MinusThree,
                ..
            } => Self::MinusThree(EquationAIsMinusThree { b: fe(b) }),
            Model::ShortWeierstrass {
                b3,
                equation_a: EquationA::Zero,
                ..
            } => Self::Zero(EquationAIsZero { b3: fe(b3) }),
            Model::TwistedEdwards { a, d } => Self::Edwards(TwistedEdwards { a: fe(a), d: fe(d) }),
        }
    }
}

impl<'c, const LIMBS: usize> PointArithmetic<'c, LIMBS> for Formulas<'c, LIMBS> {
    fn add(&self, lhs: &Point<'c, LIMBS>, rhs: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        match self {
            Self::Generic(f) => f.add(lhs, rhs),
            Self::MinusThree(f) => f.add(lhs, rhs),
            Self::Zero(f) => f.add(lhs, rhs),
            Self::Edwards(f) => f.add(lhs, rhs),
        }
    }

    fn double(&self, point: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        match self {
            Self::Generic(f) => f.double(point),
            Self::MinusThree(f) => f.double(point),
            Self::Zero(f) => f.double(point),
            Self::Edwards(f) => f.double(point),
        }
    }
}

/// The 𝒂-coefficient of the short Weierstrass equation does not have specific
/// properties which allow for an optimized implementation.
pub(crate) struct EquationAIsGeneric<'c, const LIMBS: usize> {
    a: Fe<'c, LIMBS>,
    b3: Fe<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> PointArithmetic<'c, LIMBS> for EquationAIsGeneric<'c, LIMBS> {
    /// Implements complete addition for any curve
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(&self, lhs: &Point<'c, LIMBS>, rhs: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let (a, b3) = (self.a, self.b3);

        let t0 = lhs.x * rhs.x; // 1
        let t1 = lhs.y * rhs.y; // 2
        let t2 = lhs.z * rhs.z; // 3
        let t3 = lhs.x + lhs.y; // 4
        let t4 = rhs.x + rhs.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = t0 + t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = lhs.x + lhs.z; // 9
        let t5 = rhs.x + rhs.z; // 10
        let t4 = t4 * t5; // 11
        let t5 = t0 + t2; // 12
        let t4 = t4 - t5; // 13
        let t5 = lhs.y + lhs.z; // 14
        let x3 = rhs.y + rhs.z; // 15
        let t5 = t5 * x3; // 16
        let x3 = t1 + t2; // 17
        let t5 = t5 - x3; // 18
        let z3 = a * t4; // 19
        let x3 = b3 * t2; // 20
        let z3 = x3 + z3; // 21
        let x3 = t1 - z3; // 22
        let z3 = t1 + z3; // 23
        let y3 = x3 * z3; // 24
        let t1 = t0 + t0; // 25
        let t1 = t1 + t0; // 26
        let t2 = a * t2; // 27
        let t4 = b3 * t4; // 28
        let t1 = t1 + t2; // 29
        let t2 = t0 - t2; // 30
        let t2 = a * t2; // 31
        let t4 = t4 + t2; // 32
        let t0 = t1 * t4; // 33
        let y3 = y3 + t0; // 34
        let t0 = t5 * t4; // 35
        let x3 = t3 * x3; // 36
        let x3 = x3 - t0; // 37
        let t0 = t3 * t1; // 38
        let z3 = t5 * z3; // 39
        let z3 = z3 + t0; // 40

        lhs.with_coordinates(x3, y3, z3)
    }

    /// Implements point doubling for curves with any `a`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 3). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(&self, point: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let (a, b3) = (self.a, self.b3);

        let t0 = point.x * point.x; // 1
        let t1 = point.y * point.y; // 2
        let t2 = point.z * point.z; // 3
        let t3 = point.x * point.y; // 4
        let t3 = t3 + t3; // 5
        let z3 = point.x * point.z; // 6
        let z3 = z3 + z3; // 7
        let x3 = a * z3; // 8
        let y3 = b3 * t2; // 9
        let y3 = x3 + y3; // 10
        let x3 = t1 - y3; // 11
        let y3 = t1 + y3; // 12
        let y3 = x3 * y3; // 13
        let x3 = t3 * x3; // 14
        let z3 = b3 * z3; // 15
        let t2 = a * t2; // 16
        let t3 = t0 - t2; // 17
        let t3 = a * t3; // 18
        let t3 = t3 + z3; // 19
        let z3 = t0 + t0; // 20
        let t0 = z3 + t0; // 21
        let t0 = t0 + t2; // 22
        let t0 = t0 * t3; // 23
        let y3 = y3 + t0; // 24
        let t2 = point.y * point.z; // 25
        let t2 = t2 + t2; // 26
        let t0 = t2 * t3; // 27
        let x3 = x3 - t0; // 28
        let z3 = t2 * t1; // 29
        let z3 = z3 + z3; // 30
        let z3 = z3 + z3; // 31

        point.with_coordinates(x3, y3, z3)
    }
}

/// The 𝒂-coefficient of the short Weierstrass equation is -3.
pub(crate) struct EquationAIsMinusThree<'c, const LIMBS: usize> {
    b: Fe<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> PointArithmetic<'c, LIMBS> for EquationAIsMinusThree<'c, LIMBS> {
    /// Implements complete addition for curves with `a = -3`
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 4). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(&self, lhs: &Point<'c, LIMBS>, rhs: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let b = self.b;

        let xx = lhs.x * rhs.x; // 1
        let yy = lhs.y * rhs.y; // 2
        let zz = lhs.z * rhs.z; // 3
        let xy_pairs = ((lhs.x + lhs.y) * (rhs.x + rhs.y)) - (xx + yy); // 4, 5, 6, 7, 8
        let yz_pairs = ((lhs.y + lhs.z) * (rhs.y + rhs.z)) - (yy + zz); // 9, 10, 11, 12, 13
        let xz_pairs = ((lhs.x + lhs.z) * (rhs.x + rhs.z)) - (xx + zz); // 14, 15, 16, 17, 18

        let bzz_part = xz_pairs - (b * zz); // 19, 20
        let bzz3_part = bzz_part.double() + bzz_part; // 21, 22
        let yy_m_bzz3 = yy - bzz3_part; // 23
        let yy_p_bzz3 = yy + bzz3_part; // 24

        let zz3 = zz.double() + zz; // 26, 27
        let bxz_part = (b * xz_pairs) - (zz3 + xx); // 25, 28, 29
        let bxz3_part = bxz_part.double() + bxz_part; // 30, 31
        let xx3_m_zz3 = xx.double() + xx - zz3; // 32, 33, 34

        lhs.with_coordinates(
            (yy_p_bzz3 * xy_pairs) - (yz_pairs * bxz3_part), // 35, 39, 40
            (yy_p_bzz3 * yy_m_bzz3) + (xx3_m_zz3 * bxz3_part), // 36, 37, 38
            (yy_m_bzz3 * yz_pairs) + (xy_pairs * xx3_m_zz3), // 41, 42, 43
        )
    }

    /// Implements point doubling for curves with `a = -3`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 6). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(&self, point: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let b = self.b;

        let xx = point.x.square(); // 1
        let yy = point.y.square(); // 2
        let zz = point.z.square(); // 3
        let xy2 = (point.x * point.y).double(); // 4, 5
        let xz2 = (point.x * point.z).double(); // 6, 7

        let bzz_part = (b * zz) - xz2; // 8, 9
        let bzz3_part = bzz_part.double() + bzz_part; // 10, 11
        let yy_m_bzz3 = yy - bzz3_part; // 12
        let yy_p_bzz3 = yy + bzz3_part; // 13
        let y_frag = yy_p_bzz3 * yy_m_bzz3; // 14
        let x_frag = yy_m_bzz3 * xy2; // 15

        let zz3 = zz.double() + zz; // 16, 17
        let bxz2_part = (b * xz2) - (zz3 + xx); // 18, 19, 20
        let bxz6_part = bxz2_part.double() + bxz2_part; // 21, 22
        let xx3_m_zz3 = xx.double() + xx - zz3; // 23, 24, 25

        let y = y_frag + (xx3_m_zz3 * bxz6_part); // 26, 27
        let yz2 = (point.y * point.z).double(); // 28, 29
        let x = x_frag - (bxz6_part * yz2); // 30, 31
        let z = (yz2 * yy).double().double(); // 32, 33, 34

        point.with_coordinates(x, y, z)
    }
}

/// The 𝒂-coefficient of the short Weierstrass equation is zero.
pub(crate) struct EquationAIsZero<'c, const LIMBS: usize> {
    b3: Fe<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> PointArithmetic<'c, LIMBS> for EquationAIsZero<'c, LIMBS> {
    /// Implements complete addition for curves with `a = 0`
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 7). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(&self, lhs: &Point<'c, LIMBS>, rhs: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let b3 = self.b3;

        let t0 = lhs.x * rhs.x; // 1
        let t1 = lhs.y * rhs.y; // 2
        let t2 = lhs.z * rhs.z; // 3
        let t3 = lhs.x + lhs.y; // 4
        let t4 = rhs.x + rhs.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = t0 + t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = lhs.y + lhs.z; // 9
        let x3 = rhs.y + rhs.z; // 10
        let t4 = t4 * x3; // 11
        let x3 = t1 + t2; // 12
        let t4 = t4 - x3; // 13
        let x3 = lhs.x + lhs.z; // 14
        let y3 = rhs.x + rhs.z; // 15
        let x3 = x3 * y3; // 16
        let y3 = t0 + t2; // 17
        let y3 = x3 - y3; // 18
        let x3 = t0 + t0; // 19
        let t0 = x3 + t0; // 20
        let t2 = b3 * t2; // 21
        let z3 = t1 + t2; // 22
        let t1 = t1 - t2; // 23
        let y3 = b3 * y3; // 24
        let x3 = t4 * y3; // 25
        let t2 = t3 * t1; // 26
        let x3 = t2 - x3; // 27
        let y3 = y3 * t0; // 28
        let t1 = t1 * z3; // 29
        let y3 = t1 + y3; // 30
        let t0 = t0 * t3; // 31
        let z3 = z3 * t4; // 32
        let z3 = z3 + t0; // 33

        lhs.with_coordinates(x3, y3, z3)
    }

    /// Implements point doubling for curves with `a = 0`
    ///
    /// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 9). The comments after each line indicate which algorithm
    /// steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(&self, point: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let b3 = self.b3;

        let t0 = point.y * point.y; // 1
        let z3 = t0 + t0; // 2
        let z3 = z3 + z3; // 3
        let z3 = z3 + z3; // 4
        let t1 = point.y * point.z; // 5
        let t2 = point.z * point.z; // 6
        let t2 = b3 * t2; // 7
        let x3 = t2 * z3; // 8
        let y3 = t0 + t2; // 9
        let z3 = t1 * z3; // 10
        let t1 = t2 + t2; // 11
        let t2 = t1 + t2; // 12
        let t0 = t0 - t2; // 13
        let y3 = t0 * y3; // 14
        let y3 = x3 + y3; // 15
        let t1 = point.x * point.y; // 16
        let x3 = t0 * t1; // 17
        let x3 = x3 + x3; // 18

        point.with_coordinates(x3, y3, z3)
    }
}

/// Twisted Edwards curve in extended coordinates `(X : Y : Z : T)`, `T = XY/Z`.
pub(crate) struct TwistedEdwards<'c, const LIMBS: usize> {
    a: Fe<'c, LIMBS>,
    d: Fe<'c, LIMBS>,
}

impl<'c, const LIMBS: usize> PointArithmetic<'c, LIMBS> for TwistedEdwards<'c, LIMBS> {
    /// Unified addition law from [Hisil-Wong-Carter-Dawson 2008] (section 3.1).
    ///
    /// Complete when `a` is a square and `d` is a non-square in the base field.
    ///
    /// [Hisil-Wong-Carter-Dawson 2008]: https://iacr.org/archive/asiacrypt2008/53500329/53500329.pdf
    fn add(&self, lhs: &Point<'c, LIMBS>, rhs: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        let a_xx = self.a * lhs.x * rhs.x; // aX1X2
        let d_tt = self.d * lhs.t * rhs.t; // dT1T2
        let zz = lhs.z * rhs.z; // Z1Z2
        let yy = lhs.y * rhs.y;
        let cross = (lhs.x * rhs.y) + (lhs.y * rhs.x);

        let x_2 = zz - d_tt;
        let y_1 = yy - a_xx;
        let y_2 = zz + d_tt;

        Point {
            curve: lhs.curve,
            x: cross * x_2,
            y: y_1 * y_2,
            z: x_2 * y_2,
            t: y_1 * cross,
        }
    }

    /// The addition law is unified, so doubling is addition to itself.
    fn double(&self, point: &Point<'c, LIMBS>) -> Point<'c, LIMBS> {
        self.add(point, point)
    }
}
