//! Builds the signature stack without `std`.
#![no_std]

use ecsig::{
    Curve, CurveName, HashAlgorithm, Result, SignatureAlgorithm, SigningKey,
    rand_core::TryCryptoRng,
};

/// Sign and verify `msg` with a fresh P-256 key.
pub fn sign_and_verify<R: TryCryptoRng + ?Sized>(rng: &mut R, msg: &[u8]) -> Result<()> {
    let curve = Curve::<4>::named(CurveName::Secp256r1)?;
    let key = SigningKey::generate(&curve, rng)?;

    let mut sig = [0u8; 64];
    let len = ecsig::sign(
        SignatureAlgorithm::Ecdsa,
        HashAlgorithm::Sha3_256,
        &key,
        msg,
        rng,
        &mut sig,
    )?;
    ecsig::verify(
        SignatureAlgorithm::Ecdsa,
        HashAlgorithm::Sha3_256,
        key.verifying_key(),
        msg,
        &sig[..len],
    )
}
