//! Known-answer tests and cross-checks against the RustCrypto hashes.

use hashes::{HashAlgorithm, HashContext, HashFunction, Hmac, HmacContext, Shake256};
use hex_literal::hex;
use proptest::prelude::*;

/// FIPS 202 examples for the message "abc".
#[test]
fn sha3_abc() {
    let vectors: [(HashAlgorithm, &[u8]); 4] = [
        (
            HashAlgorithm::Sha3_224,
            &hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf"),
        ),
        (
            HashAlgorithm::Sha3_256,
            &hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
        ),
        (
            HashAlgorithm::Sha3_384,
            &hex!(
                "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2"
                "98d88cea927ac7f539f1edf228376d25"
            ),
        ),
        (
            HashAlgorithm::Sha3_512,
            &hex!(
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e"
                "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
            ),
        ),
    ];

    for (algorithm, expected) in vectors {
        let mut out = [0u8; 64];
        let len = hashes::digest(algorithm, b"abc", &mut out).unwrap();
        assert_eq!(&out[..len], expected, "{algorithm}");
    }
}

#[test]
fn shake256_long_output() {
    let mut xof = Shake256::new();
    xof.update(b"");
    let mut out = [0u8; 64];
    xof.finalize_xof(&mut out);
    assert_eq!(
        out,
        hex!(
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
            "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
        )
    );
}

#[cfg(feature = "sha2")]
#[test]
fn sha2_adapters() {
    let mut out = [0u8; 64];
    let len = hashes::digest(HashAlgorithm::Sha256, b"abc", &mut out).unwrap();
    assert_eq!(
        out[..len],
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );

    let len = hashes::digest(HashAlgorithm::Sha224, b"abc", &mut out).unwrap();
    assert_eq!(
        out[..len],
        hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")
    );
}

/// RFC 4231 test cases 1, 2 and 6 for HMAC-SHA-256.
#[cfg(feature = "sha2")]
#[test]
fn hmac_sha256_rfc4231() {
    let cases: [(&[u8], &[u8], [u8; 32]); 3] = [
        (
            &[0x0b; 20],
            b"Hi There",
            hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"),
        ),
        (
            b"Jefe",
            b"what do ya want for nothing?",
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"),
        ),
        (
            &[0xaa; 131],
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"),
        ),
    ];

    for (key, data, tag) in cases {
        let mut mac = Hmac::<hashes::Sha256>::new(key).unwrap();
        mac.update(data);
        mac.verify(&tag).unwrap();

        let mut ctx = HmacContext::new(HashAlgorithm::Sha256, key).unwrap();
        ctx.update(data).unwrap();
        ctx.verify(&tag).unwrap();
    }
}

fn sha3_reference(algorithm: HashAlgorithm, data: &[u8], out: &mut [u8]) -> usize {
    use sha3::Digest;

    let digest = match algorithm {
        HashAlgorithm::Sha3_224 => sha3::Sha3_224::digest(data).to_vec(),
        HashAlgorithm::Sha3_256 => sha3::Sha3_256::digest(data).to_vec(),
        HashAlgorithm::Sha3_384 => sha3::Sha3_384::digest(data).to_vec(),
        HashAlgorithm::Sha3_512 => sha3::Sha3_512::digest(data).to_vec(),
        _ => unreachable!(),
    };
    out[..digest.len()].copy_from_slice(&digest);
    digest.len()
}

proptest! {
    #[test]
    fn sha3_matches_reference(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        split in any::<prop::sample::Index>(),
    ) {
        for algorithm in [
            HashAlgorithm::Sha3_224,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha3_384,
            HashAlgorithm::Sha3_512,
        ] {
            let at = split.index(data.len() + 1);
            let mut ctx = HashContext::new(algorithm).unwrap();
            ctx.update(&data[..at]).unwrap();
            ctx.update(&data[at..]).unwrap();

            let (mut ours, mut theirs) = ([0u8; 64], [0u8; 64]);
            let len = ctx.finalize(&mut ours).unwrap();
            prop_assert_eq!(len, sha3_reference(algorithm, &data, &mut theirs));
            prop_assert_eq!(&ours[..len], &theirs[..len]);
        }
    }

    #[test]
    fn shake128_matches_reference(
        data in proptest::collection::vec(any::<u8>(), 0..400),
        len in 1usize..500,
    ) {
        use sha3::digest::{ExtendableOutput, Update, XofReader};

        let mut ctx = HashContext::new_xof(HashAlgorithm::Shake128, len).unwrap();
        ctx.update(&data).unwrap();
        let mut ours = [0u8; 500];
        prop_assert_eq!(ctx.finalize(&mut ours), Ok(len));

        let mut reference = sha3::Shake128::default();
        reference.update(&data);
        let mut theirs = [0u8; 500];
        reference.finalize_xof().read(&mut theirs[..len]);
        prop_assert_eq!(&ours[..len], &theirs[..len]);
    }

    #[test]
    fn hmac_matches_reference(
        key in proptest::collection::vec(any::<u8>(), 0..300),
        data in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        use hmac::Mac;

        let mut ours = Hmac::<hashes::Sha3_384>::new(&key).unwrap();
        ours.update(&data);
        let mut tag = [0u8; 48];
        ours.finalize_into(&mut tag).unwrap();

        let mut theirs = hmac::Hmac::<sha3::Sha3_384>::new_from_slice(&key).unwrap();
        theirs.update(&data);
        prop_assert!(theirs.verify_slice(&tag).is_ok());
    }
}
