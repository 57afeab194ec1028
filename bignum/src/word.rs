//! Word-level primitives.

/// Unsigned machine word used as a limb.
pub type Word = u64;

/// Double-width word holding the full result of a limb multiplication.
pub type WideWord = u128;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let ret = (a as WideWord) + (b as WideWord) + (carry as WideWord);
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is either `0` or `Word::MAX`; only its top bit is read.
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let ret = (a as WideWord).wrapping_sub((b as WideWord) + ((borrow >> (Word::BITS - 1)) as WideWord));
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let ret = (a as WideWord) + ((b as WideWord) * (c as WideWord)) + (carry as WideWord);
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Returns `Word::MAX` if `w` is non-zero and `0` otherwise, without branching.
#[inline(always)]
pub(crate) const fn nonzero_mask(w: Word) -> Word {
    ((w | w.wrapping_neg()) >> (Word::BITS - 1)).wrapping_neg()
}
