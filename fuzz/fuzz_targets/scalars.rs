#![no_main]
// Field laws over the scalar fields of the 256-bit named curves
use curves::{Curve, CurveName};
use libfuzzer_sys::fuzz_target;
use primefield::{ByteOrder, Fp};

fn test_field(fe1: Fp<'_, 4>, fe2: Fp<'_, 4>, fe3: Fp<'_, 4>) {
    let ctx = fe1.context();
    let zero = Fp::zero(ctx);
    let one = Fp::one(ctx);

    // Associativity
    assert_eq!(
        fe1.add(&fe2.add(&fe3).unwrap()).unwrap(),
        fe1.add(&fe2).unwrap().add(&fe3).unwrap()
    );
    assert_eq!(
        fe1.mul(&fe2.mul(&fe3).unwrap()).unwrap(),
        fe1.mul(&fe2).unwrap().mul(&fe3).unwrap()
    );

    // Commutativity
    assert_eq!(fe1.add(&fe2).unwrap(), fe2.add(&fe1).unwrap());
    assert_eq!(fe1.mul(&fe2).unwrap(), fe2.mul(&fe1).unwrap());

    // Identity
    assert_eq!(fe1.add(&zero).unwrap(), fe1);
    assert_eq!(fe1.mul(&one).unwrap(), fe1);
    assert_eq!(fe1.sub(&fe1).unwrap(), zero);

    // Distributivity
    assert_eq!(
        fe1.mul(&fe2.add(&fe3).unwrap()).unwrap(),
        fe1.mul(&fe2).unwrap().add(&fe1.mul(&fe3).unwrap()).unwrap()
    );

    // Inverse, square, sqrt
    assert_eq!(fe1.add(&fe1.neg()).unwrap(), zero);
    let fe1_sq = fe1.square();
    if !bool::from(fe1.is_zero()) {
        let inv = Option::<Fp<'_, 4>>::from(fe1.invert()).unwrap();
        assert_eq!(fe1.mul(&inv).unwrap(), one);
        assert_eq!(fe1.invert_vartime().unwrap(), inv);
    }
    let root = Option::<Fp<'_, 4>>::from(fe1_sq.sqrt()).unwrap();
    assert_eq!(root.square(), fe1_sq);

    // Canonical encoding
    let mut bytes = [0u8; 32];
    fe1.write_bytes(&mut bytes, ByteOrder::BigEndian).unwrap();
    assert_eq!(Fp::from_bytes(ctx, &bytes, ByteOrder::BigEndian).unwrap(), fe1);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    for name in [
        CurveName::Secp256r1,
        CurveName::Secp256k1,
        CurveName::BrainpoolP256r1,
        CurveName::Bign256v1,
        CurveName::Sm2p256v1,
        CurveName::Edwards25519,
    ] {
        let curve = Curve::<4>::named(name).unwrap();
        let scalars = curve.scalars();
        let element = |chunk: &[u8]| {
            let n = primefield::bignum::Uint::from_be_slice(chunk).unwrap();
            Fp::from_uint_reduced(scalars, &n)
        };
        test_field(
            element(&data[0..32]),
            element(&data[32..64]),
            element(&data[64..96]),
        );
    }
});
