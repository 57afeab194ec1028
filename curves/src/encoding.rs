//! Point encodings.
//!
//! Uncompressed points are `x ‖ y`. Compressed points are a tag byte
//! followed by one coordinate: `x` on short Weierstrass curves and `y` on
//! twisted Edwards curves, the tag (`0x02` or `0x03`) carrying the parity of
//! the omitted coordinate. Coordinates are fixed-width in the requested
//! byte order.

use crate::{Curve, CurveKind, Point, curve::Model, field::Fe};
use bignum::{Error, Result, Uint};
use primefield::{ByteOrder, Fp};
use subtle::{Choice, ConditionallySelectable};

/// Tag of a compressed point whose omitted coordinate is even.
const TAG_EVEN: u8 = 0x02;

/// Tag of a compressed point whose omitted coordinate is odd.
const TAG_ODD: u8 = 0x03;

/// Point encoding format.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PointEncoding {
    /// Both affine coordinates.
    #[default]
    Uncompressed,

    /// Parity tag and one coordinate.
    Compressed,
}

impl<const LIMBS: usize> Curve<LIMBS> {
    /// Length in bytes of an encoded point.
    pub fn encoded_len(&self, encoding: PointEncoding) -> usize {
        match encoding {
            PointEncoding::Uncompressed => 2 * self.field_bytes(),
            PointEncoding::Compressed => 1 + self.field_bytes(),
        }
    }
}

impl<'c, const LIMBS: usize> Point<'c, LIMBS> {
    /// Encode this point into the front of `out`, returning the number of
    /// bytes written.
    ///
    /// Fails with [`Error::InvalidLength`] if `out` is too short and with
    /// [`Error::InvalidPoint`] for the short Weierstrass identity, which has
    /// no affine encoding.
    pub fn to_bytes(
        &self,
        encoding: PointEncoding,
        order: ByteOrder,
        out: &mut [u8],
    ) -> Result<usize> {
        let len = self.curve.encoded_len(encoding);
        if out.len() < len {
            return Err(Error::InvalidLength);
        }

        let edwards = self.curve.kind() == CurveKind::TwistedEdwards;
        let affine = self.to_affine();
        if !edwards && bool::from(affine.is_identity()) {
            return Err(Error::InvalidPoint);
        }

        let n = self.curve.field_bytes();
        match encoding {
            PointEncoding::Uncompressed => {
                affine.x.write_bytes(&mut out[..n], order)?;
                affine.y.write_bytes(&mut out[n..len], order)?;
            }
            PointEncoding::Compressed => {
                let (kept, omitted) = match edwards {
                    false => (affine.x, affine.y),
                    true => (affine.y, affine.x),
                };
                out[0] = u8::conditional_select(&TAG_EVEN, &TAG_ODD, omitted.is_odd());
                kept.write_bytes(&mut out[1..len], order)?;
            }
        }

        Ok(len)
    }

    /// Decode a point, picking the format from the length of `bytes`.
    ///
    /// The result is validated against the curve equation. Fails with
    /// [`Error::InvalidLength`] for a length matching neither format and
    /// with [`Error::InvalidPoint`] for anything that does not decode to a
    /// point of `curve`.
    pub fn from_bytes(curve: &'c Curve<LIMBS>, bytes: &[u8], order: ByteOrder) -> Result<Self> {
        let n = curve.field_bytes();
        let coordinate =
            |b: &[u8]| Fp::from_bytes(curve.field(), b, order).map_err(|_| Error::InvalidPoint);

        if bytes.len() == curve.encoded_len(PointEncoding::Uncompressed) {
            let x = coordinate(&bytes[..n])?;
            let y = coordinate(&bytes[n..])?;
            Self::from_affine(curve, &x, &y)
        } else if bytes.len() == curve.encoded_len(PointEncoding::Compressed) {
            let odd = match bytes[0] {
                TAG_EVEN => Choice::from(0),
                TAG_ODD => Choice::from(1),
                _ => return Err(Error::InvalidPoint),
            };
            let kept = Fe::from_fp(&coordinate(&bytes[1..])?);
            let (x, y) = decompress(curve, kept, odd)?;
            Self::from_affine(curve, &x.to_fp(), &y.to_fp())
        } else {
            Err(Error::InvalidLength)
        }
    }
}

/// Recover the omitted coordinate with the requested parity.
fn decompress<'c, const LIMBS: usize>(
    curve: &'c Curve<LIMBS>,
    kept: Fe<'c, LIMBS>,
    odd: Choice,
) -> Result<(Fe<'c, LIMBS>, Fe<'c, LIMBS>)> {
    let fe = |v: &Uint<LIMBS>| Fe::new(curve.field(), *v);
    let one = Fe::one(curve.field());

    let square = match curve.model() {
        // y² = x³ + ax + b
        Model::ShortWeierstrass { a, b, .. } => (kept.square() + fe(a)) * kept + fe(b),
        // x² = (y² - 1) / (dy² - a)
        Model::TwistedEdwards { a, d } => {
            let yy = kept.square();
            (yy - one) * (fe(d) * yy - fe(a)).invert()
        }
    };

    let root = square.sqrt();
    if !bool::from(root.is_some()) {
        return Err(Error::InvalidPoint);
    }
    let root = root.unwrap_or(Fe::zero(curve.field()));
    let other = Fe::conditional_select(&root, &-root, root.is_odd() ^ odd);
    if bool::from(other.is_odd() ^ odd) {
        return Err(Error::InvalidPoint);
    }

    Ok(match curve.kind() {
        CurveKind::ShortWeierstrass => (kept, other),
        CurveKind::TwistedEdwards => (other, kept),
    })
}
