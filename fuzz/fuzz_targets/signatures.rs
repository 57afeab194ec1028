#![no_main]
// Verification of arbitrary signatures never panics and never accepts garbage
use ecsig::{
    ByteOrder, Curve, CurveName, Error, HashAlgorithm, SignatureAlgorithm, VerifyingKey, verify,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let (selector, rest) = data.split_at(1);
    let algorithm = SignatureAlgorithm::ALL[usize::from(selector[0]) % 4];

    let curve = Curve::<4>::named(CurveName::Bign256v1).unwrap();
    let key = VerifyingKey::from_point(curve.generator()).unwrap();
    let len = ecsig::signature_len(algorithm, curve.scalar_bytes());

    let result = verify(algorithm, HashAlgorithm::Sha3_256, &key, b"fuzz", rest);
    match rest.len() == len {
        true => assert_eq!(result, Err(Error::VerificationFailed)),
        false => assert_eq!(result, Err(Error::InvalidLength)),
    }

    // Arbitrary public keys either decode to a valid key or are rejected.
    if rest.len() == 64 {
        if let Ok(key) = VerifyingKey::from_bytes(&curve, rest, ByteOrder::LittleEndian) {
            assert!(bool::from(key.as_point().is_on_curve()));
        }
    }
});
