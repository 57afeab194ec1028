//! Named curve registry and curve construction tests.

use curves::{ByteOrder, Curve, CurveKind, CurveName, Equation, Error, Fp, Point, Uint};
use hex_literal::hex;

#[test]
fn all_named_curves_are_consistent() {
    for name in CurveName::ALL {
        let curve = Curve::<9>::named(name).unwrap();
        let generator = curve.generator();

        assert_eq!(curve.name(), Some(name));
        assert!(bool::from(generator.is_on_curve()), "{name}");
        assert!(bool::from(generator.is_in_subgroup()), "{name}");
        assert!(!bool::from(generator.is_identity()), "{name}");

        let q_minus_one = curve.order().wrapping_sub(&Uint::ONE);
        let p = generator.scalar_mul(&q_minus_one).unwrap();
        assert!(bool::from(p.add(&generator).unwrap().is_identity()), "{name}");

        let expected = match name {
            CurveName::Edwards25519 | CurveName::Edwards448 => CurveKind::TwistedEdwards,
            _ => CurveKind::ShortWeierstrass,
        };
        assert_eq!(curve.kind(), expected);
    }
}

#[test]
fn cofactors() {
    let ed25519 = Curve::<4>::named(CurveName::Edwards25519).unwrap();
    let ed448 = Curve::<7>::named(CurveName::Edwards448).unwrap();
    let p256 = Curve::<4>::named(CurveName::Secp256r1).unwrap();
    assert_eq!(ed25519.cofactor(), 8);
    assert_eq!(ed448.cofactor(), 4);
    assert_eq!(p256.cofactor(), 1);
}

#[test]
fn lookup_by_name() {
    let curve = Curve::<4>::from_name("secp256r1").unwrap();
    assert_eq!(curve.name(), Some(CurveName::Secp256r1));
    assert_eq!(Curve::<4>::from_name("secp256r2").unwrap_err(), Error::UnknownCurve);
    assert_eq!(
        Curve::<4>::from_name("SECP384R1").unwrap_err(),
        Error::CapacityExceeded
    );
}

#[test]
fn custom_curve_matches_named() {
    let p = Uint::<4>::from_be_hex(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    )
    .unwrap();
    let named = Curve::<4>::named(CurveName::Secp256r1).unwrap();
    let (a, b) = match named.equation() {
        Equation::ShortWeierstrass { a, b } => (a, b),
        Equation::TwistedEdwards { .. } => unreachable!(),
    };
    let g = named.generator().to_affine();

    let custom = Curve::short_weierstrass(
        &p,
        &a,
        &b,
        named.order(),
        1,
        &g.x().to_uint(),
        &g.y().to_uint(),
    )
    .unwrap();
    assert_eq!(custom.name(), None);
    assert!(!custom.same_curve(&named));

    let k = Uint::from_u64(0xdead_beef);
    let mut lhs = [0u8; 64];
    let mut rhs = [0u8; 64];
    let encoding = curves::PointEncoding::Uncompressed;
    custom
        .mul_generator(&k)
        .unwrap()
        .to_bytes(encoding, ByteOrder::BigEndian, &mut lhs)
        .unwrap();
    named
        .mul_generator(&k)
        .unwrap()
        .to_bytes(encoding, ByteOrder::BigEndian, &mut rhs)
        .unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn rejects_bad_parameters() {
    let named = Curve::<4>::named(CurveName::Secp256r1).unwrap();
    let p = *named.field().modulus();
    let q = *named.order();
    let g = named.generator().to_affine();
    let (gx, gy) = (g.x().to_uint(), g.y().to_uint());
    let three = Uint::from_u64(3);
    let minus_three = p.wrapping_sub(&three);
    let two = Uint::from_u64(2);

    // b = 0
    let err = Curve::short_weierstrass(&p, &minus_three, &Uint::ZERO, &q, 1, &gx, &gy);
    assert_eq!(err.unwrap_err(), Error::InvalidModulus);

    // y² = x³ - 3x + 2 is singular
    let err = Curve::short_weierstrass(&p, &minus_three, &two, &q, 1, &gx, &gy);
    assert_eq!(err.unwrap_err(), Error::InvalidModulus);

    // unreduced coefficient
    let err = Curve::short_weierstrass(&p, &p, &three, &q, 1, &gx, &gy);
    assert_eq!(err.unwrap_err(), Error::InvalidModulus);

    // zero cofactor
    let b = match named.equation() {
        Equation::ShortWeierstrass { b, .. } => b,
        Equation::TwistedEdwards { .. } => unreachable!(),
    };
    let err = Curve::short_weierstrass(&p, &minus_three, &b, &q, 0, &gx, &gy);
    assert_eq!(err.unwrap_err(), Error::InvalidModulus);

    // generator off the curve
    let err = Curve::short_weierstrass(&p, &minus_three, &b, &q, 1, &gx, &gx);
    assert_eq!(err.unwrap_err(), Error::InvalidPoint);

    // wrong order
    let q_plus_two = q.wrapping_add(&two);
    let err = Curve::short_weierstrass(&p, &minus_three, &b, &q_plus_two, 1, &gx, &gy);
    assert_eq!(err.unwrap_err(), Error::InvalidPoint);

    // a = d is degenerate
    let ed = Curve::<4>::named(CurveName::Edwards25519).unwrap();
    let ep = *ed.field().modulus();
    let minus_one = ep.wrapping_sub(&Uint::ONE);
    let g = ed.generator().to_affine();
    let err = Curve::twisted_edwards(
        &ep,
        &minus_one,
        &minus_one,
        ed.order(),
        8,
        &g.x().to_uint(),
        &g.y().to_uint(),
    );
    assert_eq!(err.unwrap_err(), Error::InvalidModulus);
}

/// RFC 8032 section 7.1, TEST 1
#[test]
fn ed25519_public_key() {
    use sha2::{Digest, Sha512};

    let secret = hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let public = hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");

    let curve = Curve::<4>::named(CurveName::Edwards25519).unwrap();
    let digest = Sha512::digest(secret);
    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(&digest[..32]);
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;

    let k = Uint::from_le_slice(&scalar).unwrap().rem(curve.order()).unwrap();
    let point = curve.mul_generator(&k).unwrap().to_affine();

    let mut encoded = [0u8; 32];
    point.y().write_bytes(&mut encoded, ByteOrder::LittleEndian).unwrap();
    encoded[31] |= u8::from(bool::from(point.x().is_odd())) << 7;
    assert_eq!(encoded, public);

    // and back
    let mut y = public;
    let odd = y[31] >> 7;
    y[31] &= 0x7f;
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02 | odd;
    compressed[1..].copy_from_slice(&y);
    let decoded = Point::from_bytes(&curve, &compressed, ByteOrder::LittleEndian).unwrap();
    assert_eq!(decoded.to_affine(), point);
}

#[test]
fn point_from_foreign_field() {
    let p256 = Curve::<4>::named(CurveName::Secp256r1).unwrap();
    let k256 = Curve::<4>::named(CurveName::Secp256k1).unwrap();
    let g = k256.generator().to_affine();
    assert_eq!(
        Point::from_affine(&p256, &g.x(), &g.y()).unwrap_err(),
        Error::ContextMismatch
    );

    let x = Fp::from_u64(p256.field(), 1);
    assert_eq!(Point::from_affine(&p256, &x, &x).unwrap_err(), Error::InvalidPoint);
}
