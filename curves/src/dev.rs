//! Development-related functionality.

/// Implement group law tests for a named curve.
///
/// `$add_vectors` lists the affine coordinates of `G, 2G, 3G, ...` and
/// `$mul_vectors` lists `(k, x, y)` triples with `kG = (x, y)`, all big
/// endian.
#[macro_export]
macro_rules! test_curve_arithmetic {
    ($limbs:expr, $name:expr, $add_vectors:expr, $mul_vectors:expr) => {
        fn test_curve() -> $crate::Curve<$limbs> {
            $crate::Curve::named($name).unwrap()
        }

        fn vector_point<'c>(
            curve: &'c $crate::Curve<$limbs>,
            x: &[u8],
            y: &[u8],
        ) -> $crate::Point<'c, $limbs> {
            let order = $crate::ByteOrder::BigEndian;
            let x = $crate::Fp::from_bytes(curve.field(), x, order).unwrap();
            let y = $crate::Fp::from_bytes(curve.field(), y, order).unwrap();
            $crate::Point::from_affine(curve, &x, &y).unwrap()
        }

        #[test]
        fn affine_to_projective() {
            let curve = test_curve();
            let generator = curve.generator();
            let affine = generator.to_affine();

            assert_eq!(affine.to_projective(), generator);
            assert!(!bool::from(affine.is_identity()));
            assert!(bool::from(curve.identity().to_affine().is_identity()));
        }

        #[test]
        fn identity_addition() {
            let curve = test_curve();
            let identity = curve.identity();
            let generator = curve.generator();

            assert_eq!(identity.add(&generator).unwrap(), generator);
            assert_eq!(generator.add(&identity).unwrap(), generator);
            assert_eq!(identity.add(&identity).unwrap(), identity);
            assert_eq!(identity.double(), identity);
            assert!(bool::from(generator.sub(&generator).unwrap().is_identity()));
        }

        #[test]
        fn test_vector_repeated_add() {
            let curve = test_curve();
            let generator = curve.generator();
            let mut p = generator;

            for (i, (x, y)) in $add_vectors.iter().enumerate() {
                assert_eq!(p, vector_point(&curve, x, y), "{}G", i + 1);
                p = p.add(&generator).unwrap();
            }
        }

        #[test]
        fn test_vector_double_generator() {
            let curve = test_curve();
            let (x, y) = $add_vectors[1];
            assert_eq!(curve.generator().double(), vector_point(&curve, x, y));
        }

        #[test]
        fn test_vector_scalar_mult() {
            let curve = test_curve();
            for (k, x, y) in $mul_vectors.iter() {
                let k = $crate::Uint::from_be_slice(k).unwrap();
                let expected = vector_point(&curve, x, y);
                assert_eq!(curve.mul_generator(&k).unwrap(), expected);
                assert!(bool::from(expected.is_on_curve()));
            }
        }

        #[test]
        fn order_annihilates_generator() {
            let curve = test_curve();
            let generator = curve.generator();
            let q_minus_one = curve.order().wrapping_sub(&$crate::Uint::ONE);
            let p = generator.scalar_mul(&q_minus_one).unwrap();

            assert_eq!(p, generator.neg());
            assert!(bool::from(p.add(&generator).unwrap().is_identity()));
            assert_eq!(
                generator.scalar_mul(curve.order()),
                Err($crate::Error::InvalidScalar)
            );
        }

        #[test]
        fn compressed_round_trip() {
            let curve = test_curve();
            let encoding = $crate::PointEncoding::Compressed;
            let mut out = [0u8; 80];

            for (k, _, _) in $mul_vectors.iter() {
                let k = $crate::Uint::from_be_slice(k).unwrap();
                let p = curve.mul_generator(&k).unwrap();
                let len = p.to_bytes(encoding, $crate::ByteOrder::BigEndian, &mut out).unwrap();
                let decoded =
                    $crate::Point::from_bytes(&curve, &out[..len], $crate::ByteOrder::BigEndian);
                assert_eq!(decoded.unwrap(), p);
            }
        }
    };
}

/// Write `criterion`-based scalar multiplication benchmarks for a named curve.
#[macro_export]
macro_rules! bench_curve {
    ($fn_name:ident, $limbs:expr, $name:expr) => {
        fn $fn_name(c: &mut ::criterion::Criterion) {
            let curve = $crate::Curve::<$limbs>::named($name).unwrap();
            let generator = curve.generator();
            let k = curve.order().shr(1);
            let p = curve.mul_generator(&k).unwrap();

            let mut group = c.benchmark_group($name.as_str());
            group.bench_function("add", |b| {
                b.iter(|| core::hint::black_box(&generator).add(&p))
            });
            group.bench_function("double", |b| {
                b.iter(|| core::hint::black_box(&p).double())
            });
            group.bench_function("scalar_mul", |b| {
                b.iter(|| generator.scalar_mul(core::hint::black_box(&k)))
            });
            group.bench_function("to_affine", |b| {
                b.iter(|| core::hint::black_box(&p).to_affine())
            });
            group.finish();
        }
    };
}
