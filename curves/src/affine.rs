//! Affine points

use crate::{Curve, Point, field::Fe};
use bignum::Result;
use core::fmt;
use primefield::Fp;
use subtle::{Choice, ConstantTimeEq};

/// Point on a [`Curve`] in affine coordinates.
///
/// On short Weierstrass curves the identity has no affine coordinates; it is
/// flagged by [`AffinePoint::is_identity`] and both coordinates read as zero.
#[derive(Clone, Copy)]
pub struct AffinePoint<'c, const LIMBS: usize> {
    pub(crate) curve: &'c Curve<LIMBS>,
    pub(crate) x: Fp<'c, LIMBS>,
    pub(crate) y: Fp<'c, LIMBS>,
    pub(crate) infinity: Choice,
}

impl<'c, const LIMBS: usize> AffinePoint<'c, LIMBS> {
    /// Create an affine point, validating it against the curve equation.
    pub fn new(curve: &'c Curve<LIMBS>, x: &Fp<'_, LIMBS>, y: &Fp<'_, LIMBS>) -> Result<Self> {
        Point::from_affine(curve, x, y).map(|p| p.to_affine())
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'c Curve<LIMBS> {
        self.curve
    }

    /// Get the affine x-coordinate as a field element.
    pub fn x(&self) -> Fp<'c, LIMBS> {
        self.x
    }

    /// Get the affine y-coordinate as a field element.
    pub fn y(&self) -> Fp<'c, LIMBS> {
        self.y
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Convert back to projective form.
    pub fn to_projective(&self) -> Point<'c, LIMBS> {
        let x = Fe::from_fp(&self.x);
        let y = Fe::from_fp(&self.y);
        let p = Point::from_affine_unchecked(self.curve, x, y);
        Point::select_unchecked(&p, &Point::identity(self.curve), self.infinity)
    }
}

impl<const LIMBS: usize> ConstantTimeEq for AffinePoint<'_, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & !(self.infinity ^ other.infinity)
    }
}

impl<const LIMBS: usize> PartialEq for AffinePoint<'_, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for AffinePoint<'_, LIMBS> {}

impl<const LIMBS: usize> fmt::Debug for AffinePoint<'_, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffinePoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("infinity", &bool::from(self.infinity))
            .finish()
    }
}

impl<'c, const LIMBS: usize> From<Point<'c, LIMBS>> for AffinePoint<'c, LIMBS> {
    fn from(p: Point<'c, LIMBS>) -> AffinePoint<'c, LIMBS> {
        p.to_affine()
    }
}

impl<'c, const LIMBS: usize> From<AffinePoint<'c, LIMBS>> for Point<'c, LIMBS> {
    fn from(p: AffinePoint<'c, LIMBS>) -> Point<'c, LIMBS> {
        p.to_projective()
    }
}
