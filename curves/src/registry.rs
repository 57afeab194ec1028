//! Named curves.

use crate::{Curve, curve::Equation};
use bignum::{Error, Result, Uint};
use core::{fmt, str::FromStr};

/// Curves known to the registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CurveName {
    /// NIST P-192 (secp192r1).
    Secp192r1,
    /// NIST P-224 (secp224r1).
    Secp224r1,
    /// NIST P-256 (secp256r1).
    Secp256r1,
    /// NIST P-384 (secp384r1).
    Secp384r1,
    /// NIST P-521 (secp521r1).
    Secp521r1,
    /// SEC 2 Koblitz curve secp256k1.
    Secp256k1,
    /// brainpoolP256r1 (RFC 5639).
    BrainpoolP256r1,
    /// brainpoolP384r1 (RFC 5639).
    BrainpoolP384r1,
    /// brainpoolP512r1 (RFC 5639).
    BrainpoolP512r1,
    /// bign-curve256v1 (STB 34.101.45).
    Bign256v1,
    /// SM2 recommended curve (GB/T 32918.5).
    Sm2p256v1,
    /// Twisted Edwards form of Curve25519 (RFC 8032).
    Edwards25519,
    /// Edwards448 "Goldilocks" (RFC 8032).
    Edwards448,
}

impl CurveName {
    /// Every registered curve.
    pub const ALL: [CurveName; 13] = [
        CurveName::Secp192r1,
        CurveName::Secp224r1,
        CurveName::Secp256r1,
        CurveName::Secp384r1,
        CurveName::Secp521r1,
        CurveName::Secp256k1,
        CurveName::BrainpoolP256r1,
        CurveName::BrainpoolP384r1,
        CurveName::BrainpoolP512r1,
        CurveName::Bign256v1,
        CurveName::Sm2p256v1,
        CurveName::Edwards25519,
        CurveName::Edwards448,
    ];

    /// Registry name, e.g. `"SECP256R1"`.
    pub fn as_str(self) -> &'static str {
        self.params().name
    }

    /// Number of 64-bit limbs needed to hold this curve's parameters.
    pub fn limbs(self) -> usize {
        self.params().bits.div_ceil(64)
    }

    fn params(self) -> &'static CurveParams {
        match self {
            CurveName::Secp192r1 => &SECP192R1,
            CurveName::Secp224r1 => &SECP224R1,
            CurveName::Secp256r1 => &SECP256R1,
            CurveName::Secp384r1 => &SECP384R1,
            CurveName::Secp521r1 => &SECP521R1,
            CurveName::Secp256k1 => &SECP256K1,
            CurveName::BrainpoolP256r1 => &BRAINPOOLP256R1,
            CurveName::BrainpoolP384r1 => &BRAINPOOLP384R1,
            CurveName::BrainpoolP512r1 => &BRAINPOOLP512R1,
            CurveName::Bign256v1 => &BIGN256V1,
            CurveName::Sm2p256v1 => &SM2P256V1,
            CurveName::Edwards25519 => &EDWARDS25519,
            CurveName::Edwards448 => &EDWARDS448,
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveName {
    type Err = Error;

    /// Case-insensitive lookup; fails with [`Error::UnknownCurve`].
    fn from_str(s: &str) -> Result<Self> {
        CurveName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownCurve)
    }
}

impl<const LIMBS: usize> Curve<LIMBS> {
    /// Build a registered curve.
    ///
    /// Fails with [`Error::CapacityExceeded`] if `LIMBS` is too small for
    /// the curve's parameters (see [`CurveName::limbs`]).
    pub fn named(name: CurveName) -> Result<Self> {
        let params = name.params();
        if LIMBS < name.limbs() {
            return Err(Error::CapacityExceeded);
        }
        log::trace!("loading named curve {name}");

        let p = Uint::from_be_hex(params.p)?;
        let a = Uint::from_be_hex(params.a)?;
        let b = Uint::from_be_hex(params.b)?;
        let equation = match params.model {
            NamedModel::ShortWeierstrass => Equation::ShortWeierstrass { a, b },
            NamedModel::TwistedEdwards => Equation::TwistedEdwards { a, d: b },
        };
        let q = Uint::from_be_hex(params.q)?;
        let gx = Uint::from_be_hex(params.gx)?;
        let gy = Uint::from_be_hex(params.gy)?;

        Self::build(Some(name), &p, equation, &q, params.cofactor, (&gx, &gy))
    }

    /// Build a registered curve by its name, case-insensitively.
    ///
    /// Fails with [`Error::UnknownCurve`] for unregistered names.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::named(name.parse()?)
    }
}

enum NamedModel {
    ShortWeierstrass,
    TwistedEdwards,
}

/// Big-endian hex parameters of a registered curve.
struct CurveParams {
    name: &'static str,
    model: NamedModel,
    /// Bit length of the largest parameter.
    bits: usize,
    p: &'static str,
    /// 𝒂-coefficient
    a: &'static str,
    /// 𝒃-coefficient, or 𝒅 for Edwards curves
    b: &'static str,
    q: &'static str,
    cofactor: u64,
    gx: &'static str,
    gy: &'static str,
}

static SECP192R1: CurveParams = CurveParams {
    name: "SECP192R1",
    model: NamedModel::ShortWeierstrass,
    bits: 192,
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    q: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    cofactor: 1,
    gx: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    gy: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
};

static SECP224R1: CurveParams = CurveParams {
    name: "SECP224R1",
    model: NamedModel::ShortWeierstrass,
    bits: 224,
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    q: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    cofactor: 1,
    gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
};

static SECP256R1: CurveParams = CurveParams {
    name: "SECP256R1",
    model: NamedModel::ShortWeierstrass,
    bits: 256,
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    q: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    cofactor: 1,
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
};

static SECP384R1: CurveParams = CurveParams {
    name: "SECP384R1",
    model: NamedModel::ShortWeierstrass,
    bits: 384,
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc",
    b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
    q: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    cofactor: 1,
    gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
};

static SECP521R1: CurveParams = CurveParams {
    name: "SECP521R1",
    model: NamedModel::ShortWeierstrass,
    bits: 521,
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc",
    b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
    q: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    cofactor: 1,
    gx: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    gy: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
};

static SECP256K1: CurveParams = CurveParams {
    name: "SECP256K1",
    model: NamedModel::ShortWeierstrass,
    bits: 256,
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "00",
    b: "07",
    q: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    cofactor: 1,
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
};

static BRAINPOOLP256R1: CurveParams = CurveParams {
    name: "BRAINPOOLP256R1",
    model: NamedModel::ShortWeierstrass,
    bits: 256,
    p: "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
    a: "7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9",
    b: "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
    q: "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
    cofactor: 1,
    gx: "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
    gy: "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
};

static BRAINPOOLP384R1: CurveParams = CurveParams {
    name: "BRAINPOOLP384R1",
    model: NamedModel::ShortWeierstrass,
    bits: 384,
    p: "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53",
    a: "7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826",
    b: "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11",
    q: "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565",
    cofactor: 1,
    gx: "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e",
    gy: "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820341263c5315",
};

static BRAINPOOLP512R1: CurveParams = CurveParams {
    name: "BRAINPOOLP512R1",
    model: NamedModel::ShortWeierstrass,
    bits: 512,
    p: "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca703308717d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3",
    a: "7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca",
    b: "3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723",
    q: "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330870553e5c414ca92619418661197fac10471db1d381085ddaddb58796829ca90069",
    cofactor: 1,
    gx: "81aee4bdd82ed9645a21322e9c4c6a9385ed9f70b5d916c1b43b62eef4d0098eff3b1f78e2d0d48d50d1687b93b97d5f7c6d5047406a5e688b352209bcb9f822",
    gy: "7dde385d566332ecc0eabfa9cf7822fdf209f70024a57b1aa000c55b881f8111b2dcde494a5f485e5bca4bd88a2763aed1ca2b2fa8f0540678cd1e0f3ad80892",
};

static BIGN256V1: CurveParams = CurveParams {
    name: "BIGN256V1",
    model: NamedModel::ShortWeierstrass,
    bits: 256,
    p: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff43",
    a: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff40",
    b: "77ce6c1515f3a8edd2c13aabe4d8fbbe4cf55069978b9253b22e7d6bd69c03f1",
    q: "ffffffffffffffffffffffffffffffffd95c8ed60dfb4dfc7e5abf99263d6607",
    cofactor: 1,
    gx: "00",
    gy: "6bf7fc3cfb16d69f5ce4c9a351d6835d78913966c408f6521e29cf1804516a93",
};

static SM2P256V1: CurveParams = CurveParams {
    name: "SM2P256V1",
    model: NamedModel::ShortWeierstrass,
    bits: 256,
    p: "fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff",
    a: "fffffffeffffffffffffffffffffffffffffffff00000000fffffffffffffffc",
    b: "28e9fa9e9d9f5e344d5a9e4bcf6509a7f39789f515ab8f92ddbcbd414d940e93",
    q: "fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123",
    cofactor: 1,
    gx: "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7",
    gy: "bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0",
};

static EDWARDS25519: CurveParams = CurveParams {
    name: "EDWARDS25519",
    model: NamedModel::TwistedEdwards,
    bits: 255,
    p: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    // -1
    a: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec",
    b: "52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3",
    q: "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
    cofactor: 8,
    gx: "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a",
    gy: "6666666666666666666666666666666666666666666666666666666666666658",
};

static EDWARDS448: CurveParams = CurveParams {
    name: "EDWARDS448",
    model: NamedModel::TwistedEdwards,
    bits: 448,
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    a: "01",
    // -39081
    b: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffff6756",
    q: "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3",
    cofactor: 4,
    gx: "4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e",
    gy: "693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14",
};
