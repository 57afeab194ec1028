//! Constant-time comparisons.

use super::Uint;
use crate::word::nonzero_mask;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Three-way comparison which inspects every limb regardless of where
    /// the operands first differ.
    pub fn ct_cmp(&self, rhs: &Self) -> Ordering {
        let (diff, borrow) = self.borrowing_sub(rhs, 0);
        let ne = diff.words.iter().fold(0, |acc, w| acc | w);

        // -1, 0 or 1, assembled from masks
        let lt = (borrow & 1) as i8;
        let ne = (nonzero_mask(ne) & 1) as i8;
        (ne - 2 * lt).cmp(&0)
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let acc = self
            .words
            .iter()
            .zip(other.words.iter())
            .fold(0, |acc, (a, b)| acc | (a ^ b));
        Choice::from((nonzero_mask(acc) & 1) as u8 ^ 1)
    }
}

impl<const LIMBS: usize> ConstantTimeGreater for Uint<LIMBS> {
    fn ct_gt(&self, other: &Self) -> Choice {
        let (_, borrow) = other.borrowing_sub(self, 0);
        Choice::from((borrow & 1) as u8)
    }
}

impl<const LIMBS: usize> ConstantTimeLess for Uint<LIMBS> {
    fn ct_lt(&self, other: &Self) -> Choice {
        let (_, borrow) = self.borrowing_sub(other, 0);
        Choice::from((borrow & 1) as u8)
    }
}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ct_cmp(other)
    }
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::U256;
    use core::cmp::Ordering;
    use subtle::{ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

    #[test]
    fn ct_cmp_orders() {
        let a = U256::from_words([0, 0, 0, 1]);
        let b = U256::from_words([u64::MAX, u64::MAX, u64::MAX, 0]);
        assert_eq!(a.ct_cmp(&b), Ordering::Greater);
        assert_eq!(b.ct_cmp(&a), Ordering::Less);
        assert_eq!(a.ct_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn ct_traits_agree() {
        let a = U256::from_u64(5);
        let b = U256::from_u64(7);
        assert!(bool::from(a.ct_lt(&b)));
        assert!(bool::from(b.ct_gt(&a)));
        assert!(!bool::from(a.ct_gt(&a)));
        assert!(bool::from(a.ct_eq(&a)));
        assert!(a < b);
    }
}
