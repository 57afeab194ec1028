//! Signature equations.
//!
//! ## ECDSA (FIPS 186-5)
//!
//! ```text
//! Sign:    e ← bits2int(H) mod q
//!          R ← kG, r ← x(R) mod q
//!          s ← k⁻¹(e + rd) mod q, retrying while r = 0 or s = 0
//! Verify:  r, s ∈ [1, q)
//!          R ← (ew)G + (rw)Q where w = s⁻¹
//!          accept iff R ≠ O and x(R) mod q = r
//! ```
//!
//! ## BIGN (STB 34.101.45)
//!
//! ```text
//! Sign:    h ← LE(H) mod q
//!          R ← kG
//!          S0 ← ⟨hash(OID ‖ ⟨x(R)⟩ ‖ H)⟩_l
//!          S1 ← (k − h − (S0 + 2^l)d) mod q
//! Verify:  S1 < q
//!          R ← ((S1 + h) mod q)G + ((S0 + 2^l) mod q)Q
//!          accept iff R ≠ O and S0 = ⟨hash(OID ‖ ⟨x(R)⟩ ‖ H)⟩_l
//! ```

use crate::{
    SignatureAlgorithm,
    rfc6979::bits2int,
    signature::{MAX_SCALAR_BYTES, bign_half},
};
use bignum::{Error, Result, Uint};
use curves::{AffinePoint, Curve, CurveKind, Point};
use hashes::{HashAlgorithm, HashContext, MAX_DIGEST_SIZE};
use primefield::{ByteOrder, Fp, FpCtx};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Check that `algorithm` can run over `curve` with `hash`.
pub(crate) fn check_parameters<const LIMBS: usize>(
    algorithm: SignatureAlgorithm,
    hash: HashAlgorithm,
    curve: &Curve<LIMBS>,
) -> Result<()> {
    if curve.kind() != CurveKind::ShortWeierstrass {
        return Err(Error::UnsupportedAlgorithm);
    }
    if curve.scalar_bytes() > MAX_SCALAR_BYTES || curve.field_bytes() > MAX_SCALAR_BYTES {
        return Err(Error::CapacityExceeded);
    }
    if algorithm.is_bign() && hash.digest_size() != curve.scalar_bytes() {
        return Err(Error::UnsupportedAlgorithm);
    }
    Ok(())
}

fn rejected(reason: &str) -> Error {
    log::debug!("signature rejected: {reason}");
    Error::VerificationFailed
}

/// `bits2int(H) mod q`
pub(crate) fn ecdsa_digest_scalar<'f, const LIMBS: usize>(
    scalars: &'f FpCtx<LIMBS>,
    digest: &[u8],
) -> Result<Fp<'f, LIMBS>> {
    Ok(Fp::from_uint_reduced(scalars, &bits2int(digest, scalars.bits())?))
}

/// `LE(H) mod q`
pub(crate) fn bign_digest_scalar<'f, const LIMBS: usize>(
    scalars: &'f FpCtx<LIMBS>,
    digest: &[u8],
) -> Result<Fp<'f, LIMBS>> {
    Ok(Fp::from_uint_reduced(scalars, &Uint::from_le_slice(digest)?))
}

/// x-coordinate of `point` reduced into the scalar field.
fn x_mod_q<'c, const LIMBS: usize>(point: &AffinePoint<'c, LIMBS>) -> Fp<'c, LIMBS> {
    Fp::from_uint_reduced(point.curve().scalars(), &point.x().to_uint())
}

pub(crate) fn ecdsa_sign<'c, const LIMBS: usize>(
    curve: &'c Curve<LIMBS>,
    d: &Fp<'c, LIMBS>,
    digest: &[u8],
    mut nonce: impl FnMut() -> Result<Fp<'c, LIMBS>>,
) -> Result<(Uint<LIMBS>, Uint<LIMBS>)> {
    let e = ecdsa_digest_scalar(curve.scalars(), digest)?;

    loop {
        let k = Zeroizing::new(nonce()?);
        let r = x_mod_q(&curve.generator().mul_scalar(&k)?.to_affine());
        if bool::from(r.is_zero()) {
            continue;
        }

        let k_inv = Option::<Fp<'c, LIMBS>>::from(k.invert()).ok_or(Error::InvalidScalar)?;
        let k_inv = Zeroizing::new(k_inv);
        let s = k_inv.mul(&e.add(&r.mul(d)?)?)?;
        if bool::from(s.is_zero()) {
            continue;
        }

        return Ok((r.to_uint(), s.to_uint()));
    }
}

pub(crate) fn ecdsa_verify<const LIMBS: usize>(
    public: &Point<'_, LIMBS>,
    digest: &[u8],
    r: &Uint<LIMBS>,
    s: &Uint<LIMBS>,
) -> Result<()> {
    let curve = public.curve();
    let scalars = curve.scalars();

    let (r, s) = match (Fp::from_uint(scalars, r), Fp::from_uint(scalars, s)) {
        (Ok(r), Ok(s)) if !bool::from(r.is_zero() | s.is_zero()) => (r, s),
        _ => return Err(rejected("r or s out of range")),
    };

    let e = ecdsa_digest_scalar(scalars, digest)?;
    let w = s.invert_vartime()?;
    let u1 = e.mul(&w)?;
    let u2 = r.mul(&w)?;

    let point = curve
        .generator()
        .mul_scalar(&u1)?
        .add(&public.mul_scalar(&u2)?)?;
    if bool::from(point.is_identity()) {
        return Err(rejected("R is the identity"));
    }

    match x_mod_q(&point.to_affine()) == r {
        true => Ok(()),
        false => Err(rejected("r mismatch")),
    }
}

/// `2^l`, the offset added to `S0`.
fn bign_offset<const LIMBS: usize>(scalars: &FpCtx<LIMBS>) -> Uint<LIMBS> {
    Uint::ONE.shl(8 * bign_half(scalars.bytes()) as u32)
}

/// `hash(OID ‖ ⟨x(R)⟩ ‖ H)` written to the front of `out`.
fn bign_tag<const LIMBS: usize>(
    hash: HashAlgorithm,
    point: &AffinePoint<'_, LIMBS>,
    digest: &[u8],
    out: &mut [u8],
) -> Result<usize> {
    let n = point.curve().field_bytes();
    let mut x = [0u8; MAX_SCALAR_BYTES];
    let x = x.get_mut(..n).ok_or(Error::CapacityExceeded)?;
    point.x().write_bytes(x, ByteOrder::LittleEndian)?;

    let mut hasher = HashContext::new(hash)?;
    hasher.update(hash.oid())?;
    hasher.update(x)?;
    hasher.update(digest)?;
    hasher.finalize(out)
}

pub(crate) fn bign_sign<'c, const LIMBS: usize>(
    curve: &'c Curve<LIMBS>,
    d: &Fp<'c, LIMBS>,
    hash: HashAlgorithm,
    digest: &[u8],
    mut nonce: impl FnMut() -> Result<Fp<'c, LIMBS>>,
) -> Result<(Uint<LIMBS>, Uint<LIMBS>)> {
    let scalars = curve.scalars();
    let h = bign_digest_scalar(scalars, digest)?;

    let k = Zeroizing::new(nonce()?);
    let point = curve.generator().mul_scalar(&k)?.to_affine();

    let mut tag = [0u8; MAX_DIGEST_SIZE];
    bign_tag(hash, &point, digest, &mut tag)?;
    let half = bign_half(scalars.bytes());
    let s0 = Uint::from_le_slice(&tag[..half])?;

    let t = Fp::from_uint_reduced(scalars, &s0.wrapping_add(&bign_offset(scalars)));
    let s1 = k.sub(&h)?.sub(&t.mul(d)?)?;

    Ok((s0, s1.to_uint()))
}

pub(crate) fn bign_verify<const LIMBS: usize>(
    public: &Point<'_, LIMBS>,
    hash: HashAlgorithm,
    digest: &[u8],
    s0: &Uint<LIMBS>,
    s1: &Uint<LIMBS>,
) -> Result<()> {
    let curve = public.curve();
    let scalars = curve.scalars();

    let s1 = Fp::from_uint(scalars, s1).map_err(|_| rejected("S1 out of range"))?;
    let h = bign_digest_scalar(scalars, digest)?;
    let u1 = s1.add(&h)?;
    let u2 = Fp::from_uint_reduced(scalars, &s0.wrapping_add(&bign_offset(scalars)));

    let point = curve
        .generator()
        .mul_scalar(&u1)?
        .add(&public.mul_scalar(&u2)?)?;
    if bool::from(point.is_identity()) {
        return Err(rejected("R is the identity"));
    }

    let half = bign_half(scalars.bytes());
    let mut tag = [0u8; MAX_DIGEST_SIZE];
    bign_tag(hash, &point.to_affine(), digest, &mut tag)?;
    let mut expected = [0u8; MAX_SCALAR_BYTES];
    s0.write_le_bytes(&mut expected[..half])?;

    match bool::from(tag[..half].ct_eq(&expected[..half])) {
        true => Ok(()),
        false => Err(rejected("S0 mismatch")),
    }
}
