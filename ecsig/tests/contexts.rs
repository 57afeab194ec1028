//! Sign and verify context lifecycles.

use ecsig::{
    ContextState, Curve, CurveName, Error, HashAlgorithm, SecureRng, SignContext,
    SignatureAlgorithm, SigningKey, VerifyContext, bignum::Uint,
};

fn p256() -> Curve<4> {
    Curve::named(CurveName::Secp256r1).unwrap()
}

#[test]
fn sign_out_of_order() {
    let curve = p256();
    let key = SigningKey::new(&curve, &Uint::from_u64(42)).unwrap();
    let mut rng = SecureRng::new();
    let mut out = [0u8; 64];

    let mut ctx = SignContext::new(SignatureAlgorithm::Decdsa, HashAlgorithm::Sha3_256).unwrap();
    assert_eq!(ctx.state(), ContextState::Uninitialized);
    assert_eq!(ctx.signature_len(), None);
    assert_eq!(ctx.sign_update(b"early"), Err(Error::NotInitialized));
    assert_eq!(ctx.sign_finalize(&mut rng, &mut out), Err(Error::NotInitialized));

    ctx.sign_init(&key).unwrap();
    assert_eq!(ctx.state(), ContextState::Initialized);
    assert_eq!(ctx.signature_len(), Some(64));
    assert_eq!(ctx.sign_init(&key), Err(Error::InvalidState));

    ctx.sign_update(b"message").unwrap();
    assert_eq!(ctx.state(), ContextState::Updating);
    assert_eq!(ctx.sign_init(&key), Err(Error::InvalidState));

    assert_eq!(ctx.sign_finalize(&mut rng, &mut out[..63]), Err(Error::InvalidLength));
    assert_eq!(ctx.state(), ContextState::Updating);
    assert_eq!(ctx.sign_finalize(&mut rng, &mut out), Ok(64));
    assert_eq!(ctx.state(), ContextState::Finalized);

    assert_eq!(ctx.sign_update(b"late"), Err(Error::InvalidState));
    assert_eq!(ctx.sign_finalize(&mut rng, &mut out), Err(Error::InvalidState));
    assert_eq!(ctx.sign_init(&key), Err(Error::InvalidState));
}

#[test]
fn verify_out_of_order() {
    let curve = p256();
    let key = SigningKey::new(&curve, &Uint::from_u64(42)).unwrap();
    let public = key.verifying_key();
    let mut signature = [0u8; 64];
    ecsig::sign(
        SignatureAlgorithm::Decdsa,
        HashAlgorithm::Sha3_256,
        &key,
        b"message",
        &mut SecureRng::new(),
        &mut signature,
    )
    .unwrap();

    let mut ctx = VerifyContext::new(SignatureAlgorithm::Decdsa, HashAlgorithm::Sha3_256).unwrap();
    assert_eq!(ctx.verify_update(b"early"), Err(Error::NotInitialized));
    assert_eq!(ctx.verify_finalize(), Err(Error::NotInitialized));
    assert_eq!(ctx.verify_init(public, &signature[..63]), Err(Error::InvalidLength));
    assert_eq!(ctx.state(), ContextState::Uninitialized);

    ctx.verify_init(public, &signature).unwrap();
    assert_eq!(ctx.verify_init(public, &signature), Err(Error::InvalidState));
    ctx.verify_update(b"mess").unwrap();
    ctx.verify_update(b"age").unwrap();
    assert_eq!(ctx.verify_finalize(), Ok(()));

    assert_eq!(ctx.state(), ContextState::Finalized);
    assert_eq!(ctx.verify_update(b"late"), Err(Error::InvalidState));
    assert_eq!(ctx.verify_finalize(), Err(Error::InvalidState));
}

#[test]
fn failed_verification_finalizes() {
    let curve = p256();
    let key = SigningKey::new(&curve, &Uint::from_u64(42)).unwrap();

    let mut ctx = VerifyContext::new(SignatureAlgorithm::Ecdsa, HashAlgorithm::Sha3_256).unwrap();
    ctx.verify_init(key.verifying_key(), &[0u8; 64]).unwrap();
    assert_eq!(ctx.verify_finalize(), Err(Error::VerificationFailed));
    assert_eq!(ctx.verify_finalize(), Err(Error::InvalidState));
}

#[test]
fn empty_message() {
    let curve = p256();
    let key = SigningKey::new(&curve, &Uint::from_u64(7)).unwrap();
    let mut rng = SecureRng::new();

    let mut ctx = SignContext::new(SignatureAlgorithm::Decdsa, HashAlgorithm::Sha3_384).unwrap();
    ctx.sign_init(&key).unwrap();
    let mut signature = [0u8; 64];
    ctx.sign_finalize(&mut rng, &mut signature).unwrap();

    let mut ctx = VerifyContext::new(SignatureAlgorithm::Decdsa, HashAlgorithm::Sha3_384).unwrap();
    ctx.verify_init(key.verifying_key(), &signature).unwrap();
    ctx.verify_finalize().unwrap();
}

#[test]
fn unsupported_combinations() {
    assert_eq!(
        SignContext::<4>::new(SignatureAlgorithm::Ecdsa, HashAlgorithm::Shake128).unwrap_err(),
        Error::UnsupportedAlgorithm
    );
    assert_eq!(
        VerifyContext::<4>::new(SignatureAlgorithm::Bign, HashAlgorithm::Shake256).unwrap_err(),
        Error::UnsupportedAlgorithm
    );

    // twisted Edwards curves have no ECDSA or BIGN
    let ed25519 = Curve::<4>::named(CurveName::Edwards25519).unwrap();
    let key = SigningKey::new(&ed25519, &Uint::from_u64(3)).unwrap();
    let mut ctx = SignContext::new(SignatureAlgorithm::Ecdsa, HashAlgorithm::Sha3_256).unwrap();
    assert_eq!(ctx.sign_init(&key), Err(Error::UnsupportedAlgorithm));
    assert_eq!(ctx.state(), ContextState::Uninitialized);

    // BIGN needs a digest as wide as the group order
    let p384 = Curve::<6>::named(CurveName::Secp384r1).unwrap();
    let key = SigningKey::new(&p384, &Uint::from_u64(3)).unwrap();
    let mut ctx = SignContext::new(SignatureAlgorithm::Dbign, HashAlgorithm::Sha3_256).unwrap();
    assert_eq!(ctx.sign_init(&key), Err(Error::UnsupportedAlgorithm));
    let mut ctx = SignContext::new(SignatureAlgorithm::Dbign, HashAlgorithm::Sha3_384).unwrap();
    ctx.sign_init(&key).unwrap();
}

#[test]
fn scheme_names() {
    for alg in SignatureAlgorithm::ALL {
        assert_eq!(alg.as_str().parse::<SignatureAlgorithm>(), Ok(alg));
    }
    assert_eq!("dbign".parse::<SignatureAlgorithm>(), Ok(SignatureAlgorithm::Dbign));
    assert_eq!(
        "eddsa".parse::<SignatureAlgorithm>(),
        Err(Error::UnsupportedAlgorithm)
    );
    assert!(SignatureAlgorithm::Decdsa.is_deterministic());
    assert!(!SignatureAlgorithm::Bign.is_deterministic());
}
