//! Property tests for fixed-capacity integer arithmetic.

use bignum::{MontyParams, U256};
use proptest::prelude::*;

/// P-256 group order, an odd 256-bit modulus.
const ORDER: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

fn order() -> U256 {
    U256::from_be_hex(ORDER).unwrap()
}

prop_compose! {
    fn uint()(words in any::<[u64; 4]>()) -> U256 {
        U256::from_words(words)
    }
}

prop_compose! {
    fn reduced()(n in uint()) -> U256 {
        n.rem(&order()).unwrap()
    }
}

proptest! {
    #[test]
    fn add_then_sub_is_identity(a in uint(), b in uint()) {
        let (sum, carry) = a.carrying_add(&b, 0);
        let (diff, borrow) = sum.borrowing_sub(&b, 0);
        prop_assert_eq!(diff, a);
        // a carry out of the addition is matched by a borrow out of the subtraction
        prop_assert_eq!(carry == 1, borrow == u64::MAX);
    }

    #[test]
    fn add_mod_then_sub_mod_is_identity(a in reduced(), b in reduced()) {
        let q = order();
        prop_assert_eq!(a.add_mod(&b, &q).sub_mod(&b, &q), a);
        prop_assert_eq!(a.add_mod(&a.neg_mod(&q), &q), U256::ZERO);
    }

    #[test]
    fn ct_cmp_matches_words(a in uint(), b in uint()) {
        let expected = a.as_words().iter().rev().cmp(b.as_words().iter().rev());
        prop_assert_eq!(a.ct_cmp(&b), expected);
    }

    #[test]
    fn shifts_are_inverse(a in uint(), shift in 0u32..256) {
        let masked = a.mask_bits(256 - shift);
        prop_assert_eq!(masked.shl(shift).shr(shift), masked);
    }

    #[test]
    fn monty_mul_matches_rem_wide(a in reduced(), b in reduced()) {
        let q = order();
        let params = MontyParams::new(q).unwrap();
        let (lo, hi) = a.widening_mul(&b);
        let expected = U256::rem_wide(&lo, &hi, &q).unwrap();
        let actual = params.from_monty(&params.mul(&params.to_monty(&a), &params.to_monty(&b)));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn inverse_is_inverse(a in reduced()) {
        prop_assume!(!bool::from(a.is_zero()));
        let q = order();
        let inv = a.inv_mod_vartime(&q).unwrap();

        let params = MontyParams::new(q).unwrap();
        let fermat = params.from_monty(&params.pow(
            &params.to_monty(&a),
            &q.wrapping_sub(&U256::from_u64(2)),
            256,
        ));
        prop_assert_eq!(inv, fermat);
    }

    #[test]
    fn be_bytes_round_trip(a in uint()) {
        let mut bytes = [0u8; 32];
        a.write_be_bytes(&mut bytes).unwrap();
        prop_assert_eq!(U256::from_be_slice(&bytes).unwrap(), a);
    }
}
