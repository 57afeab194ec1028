//! Group law tests against published and independently computed multiples
//! of each curve's generator.

use hex_literal::hex;

type Vectors2 = &'static [(&'static [u8], &'static [u8])];
type Vectors3 = &'static [(&'static [u8], &'static [u8], &'static [u8])];

mod secp256r1 {
    use super::*;
    use curves::CurveName;

    const ADD_TEST_VECTORS: Vectors2 = &[
        (
            &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        ),
        (
            &hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
            &hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
        ),
        (
            &hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
            &hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
        ),
    ];

    const MUL_TEST_VECTORS: Vectors3 = &[
        (
            &hex!("1234567890abcdef"),
            &hex!("9fad84aeae08bbef7f010014d82cef6a09de2b0cf871b5ce0c4f1d13a59a5934"),
            &hex!("07cb45769f1070e2c2470fe5b1bfe63133c0b0cdc64ea4bf3791a8ec2a07fd4f"),
        ),
        (
            &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550"),
            &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            &hex!("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"),
        ),
    ];

    curves::test_curve_arithmetic!(4, CurveName::Secp256r1, ADD_TEST_VECTORS, MUL_TEST_VECTORS);
}

mod secp256k1 {
    use super::*;
    use curves::CurveName;

    const ADD_TEST_VECTORS: Vectors2 = &[
        (
            &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        ),
        (
            &hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
            &hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
        ),
        (
            &hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
            &hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
        ),
    ];

    const MUL_TEST_VECTORS: Vectors3 = &[
        (
            &hex!("1234567890abcdef"),
            &hex!("f973a0b87062c389d125d8199e803b832b6ac6bf7867a4f6cd87506060fc4c58"),
            &hex!("4b4a0a3f26c988c54c236b224c48bb605b265949e65c098ecd87a581ca10e25d"),
        ),
        (
            &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
            &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            &hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
        ),
    ];

    curves::test_curve_arithmetic!(4, CurveName::Secp256k1, ADD_TEST_VECTORS, MUL_TEST_VECTORS);
}

mod secp384r1 {
    use super::*;
    use curves::CurveName;

    const ADD_TEST_VECTORS: Vectors2 = &[
        (
            &hex!(
                "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
                "5502f25dbf55296c3a545e3872760ab7"
            ),
            &hex!(
                "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
                "0a60b1ce1d7e819d7a431d7c90ea0e5f"
            ),
        ),
        (
            &hex!(
                "08d999057ba3d2d969260045c55b97f089025959a6f434d651d207d19fb96e9e"
                "4fe0e86ebe0e64f85b96a9c75295df61"
            ),
            &hex!(
                "8e80f1fa5b1b3cedb7bfe8dffd6dba74b275d875bc6cc43e904e505f256ab425"
                "5ffd43e94d39e22d61501e700a940e80"
            ),
        ),
        (
            &hex!(
                "077a41d4606ffa1464793c7e5fdc7d98cb9d3910202dcd06bea4f240d3566da6"
                "b408bbae5026580d02d7e5c70500c831"
            ),
            &hex!(
                "c995f7ca0b0c42837d0bbe9602a9fc998520b41c85115aa5f7684c0edc111eac"
                "c24abd6be4b5d298b65f28600a2f1df1"
            ),
        ),
    ];

    const MUL_TEST_VECTORS: Vectors3 = &[(
        &hex!("1234567890abcdef"),
        &hex!(
            "fbf96095915eb587390f850ec95b35f618ae121c72a70808ad8f9f4c261b602b"
            "63541743e395f7c778e52bb28c18dc83"
        ),
        &hex!(
            "016a6ff3f72c9368326ad50a3bd148a53cd2213bb480e4730ad019db87ae1009"
            "95ec65df011e19811a15dc9ddfc9ab3c"
        ),
    )];

    curves::test_curve_arithmetic!(6, CurveName::Secp384r1, ADD_TEST_VECTORS, MUL_TEST_VECTORS);
}

mod brainpoolp256r1 {
    use super::*;
    use curves::CurveName;

    const ADD_TEST_VECTORS: Vectors2 = &[
        (
            &hex!("8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262"),
            &hex!("547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997"),
        ),
        (
            &hex!("743cf1b8b5cd4f2eb55f8aa369593ac436ef044166699e37d51a14c2ce13ea0e"),
            &hex!("36ed163337deba9c946fe0bb776529da38df059f69249406892ada097eeb7cd4"),
        ),
        (
            &hex!("a8f217b77338f1d4d6624c3ab4f6cc16d2aa843d0c0fca016b91e2ad25cae39d"),
            &hex!("4b49cafc7dac26bb0aa2a6850a1b40f5fac10e4589348fb77e65cc5602b74f9d"),
        ),
    ];

    const MUL_TEST_VECTORS: Vectors3 = &[(
        &hex!("1234567890abcdef"),
        &hex!("668adacf4ed5f35980db33ee865581f20198bc9364bdd94dc8aaa9731cb7bb17"),
        &hex!("04c51e8d475b04dbb59639f222f130d92d03e72e0f7a8e92af582ef674c3ce64"),
    )];

    curves::test_curve_arithmetic!(
        4,
        CurveName::BrainpoolP256r1,
        ADD_TEST_VECTORS,
        MUL_TEST_VECTORS
    );
}

mod edwards25519 {
    use super::*;
    use curves::CurveName;

    const ADD_TEST_VECTORS: Vectors2 = &[
        (
            &hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
            &hex!("6666666666666666666666666666666666666666666666666666666666666658"),
        ),
        (
            &hex!("36ab384c9f5a046c3d043b7d1833e7ac080d8e4515d7a45f83c5a14e2843ce0e"),
            &hex!("2260cdf3092329c21da25ee8c9a21f5697390f51643851560e5f46ae6af8a3c9"),
        ),
        (
            &hex!("67ae9c4a22928f491ff4ae743edac83a6343981981624886ac62485fd3f8e25c"),
            &hex!("1267b1d177ee69aba126a18e60269ef79f16ec176724030402c3684878f5b4d4"),
        ),
    ];

    const MUL_TEST_VECTORS: Vectors3 = &[(
        &hex!("1234567890abcdef"),
        &hex!("3f7cfd9ad2f597e8899f6801b6bfd95f9d9e928f88106240948f8de15eaa429f"),
        &hex!("183e77e444d3539ad7bb9c761d12a53f667badefec4960971a94ff7f7d22c1c4"),
    )];

    curves::test_curve_arithmetic!(4, CurveName::Edwards25519, ADD_TEST_VECTORS, MUL_TEST_VECTORS);
}

mod edwards448 {
    use super::*;
    use curves::CurveName;

    const ADD_TEST_VECTORS: Vectors2 = &[
        (
            &hex!(
                "4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324a3d3a464"
                "12ae1af72ab66511433b80e18b00938e2626a82bc70cc05e"
            ),
            &hex!(
                "693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e05a0c2d7"
                "3ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14"
            ),
        ),
        (
            &hex!(
                "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa955555555"
                "555555555555555555555555555555555555555555555555"
            ),
            &hex!(
                "ae05e9634ad7048db359d6205086c2b0036ed7a035884dd7b7e36d728ad8c4b8"
                "0d6565833a2a3098bbbcb2bed1cda06bdaeafbcdea9386ed"
            ),
        ),
        (
            &hex!(
                "0865886b9108af6455bd64316cb6943332241b8b8cda82c7e2ba077a4a3fcfe8"
                "daa9cbf7f6271fd6e862b769465da8575728173286ff2f8f"
            ),
            &hex!(
                "e005a8dbd5125cf706cbda7ad43aa6449a4a8d952356c3b9fce43c82ec4e1d58"
                "bb3a331bdb6767f0bffa9a68fed02dafb822ac13588ed6fc"
            ),
        ),
    ];

    const MUL_TEST_VECTORS: Vectors3 = &[(
        &hex!("1234567890abcdef"),
        &hex!(
            "f019b8344ae97b8a1d99b3ee15eaf1e6b193b45983314ac92f4cb3792713514a"
            "7e307a566504dc7039135805c6e3c1f5eec849587e9ee247"
        ),
        &hex!(
            "fa2d8d8875449cd8c0008a68bedbf2843bf284b3b29c529555fbb2c9b00f8e3d"
            "5c6e19c21387362ce5e30907c1462cf8e4b17d1d40c2b34b"
        ),
    )];

    curves::test_curve_arithmetic!(7, CurveName::Edwards448, ADD_TEST_VECTORS, MUL_TEST_VECTORS);
}
