/// Write a series of `criterion`-based benchmarks for a field context.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $ctx:expr, $fe_a:expr, $fe_b:expr } => {
        fn $name(c: &mut ::criterion::Criterion) {
            let ctx = $ctx;
            let x = core::hint::black_box($fe_a(&ctx));
            let y = core::hint::black_box($fe_b(&ctx));

            let mut group = c.benchmark_group($desc);
            group.bench_function("add", |b| b.iter(|| x.add(&y)));
            group.bench_function("sub", |b| b.iter(|| x.sub(&y)));
            group.bench_function("mul", |b| b.iter(|| x.mul(&y)));
            group.bench_function("neg", |b| b.iter(|| x.neg()));
            group.bench_function("invert", |b| b.iter(|| x.invert()));
            group.bench_function("square", |b| b.iter(|| x.square()));
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
            group.finish();
        }
    };
}

/// Implement all tests for a field described by a hex modulus.
#[macro_export]
macro_rules! test_primefield {
    ($limbs:expr, $modulus:expr) => {
        fn test_ctx() -> $crate::FpCtx<$limbs> {
            $crate::FpCtx::from_be_hex($modulus).unwrap()
        }

        $crate::test_field_identity!();
        $crate::test_field_invert!();
        $crate::test_field_sqrt!();
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    () => {
        #[test]
        fn zero_is_additive_identity() {
            let ctx = test_ctx();
            let zero = $crate::Fp::zero(&ctx);
            let one = $crate::Fp::one(&ctx);
            assert_eq!(zero.add(&zero).unwrap(), zero);
            assert_eq!(one.add(&zero).unwrap(), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let ctx = test_ctx();
            let one = $crate::Fp::one(&ctx);
            assert_eq!(one.mul(&one).unwrap(), one);
        }

        #[test]
        fn modulus_reduces_to_zero() {
            let ctx = test_ctx();
            assert_eq!(
                $crate::Fp::from_uint_reduced(&ctx, ctx.modulus()),
                $crate::Fp::zero(&ctx)
            );
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    () => {
        #[test]
        fn invert() {
            let ctx = test_ctx();
            let one = $crate::Fp::one(&ctx);
            assert_eq!(one.invert().unwrap(), one);

            let three = $crate::Fp::from_u64(&ctx, 3);
            let inv_three = three.invert().unwrap();
            assert_eq!(three.mul(&inv_three).unwrap(), one);

            let minus_three = three.neg();
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, inv_three.neg());
            assert_eq!(three.mul(&inv_minus_three).unwrap(), one.neg());
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    () => {
        #[test]
        fn sqrt() {
            let ctx = test_ctx();
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $crate::Fp::from_u64(&ctx, n);
                let sqrt = fe.sqrt().unwrap();
                assert_eq!(sqrt.square(), fe);
            }
        }
    };
}
