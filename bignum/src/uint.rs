//! Stack-allocated fixed-capacity unsigned integers.

mod add;
mod cmp;
mod encoding;
mod inv;
mod mul;
mod rand;
mod rem;
mod shift;
mod sub;

use crate::word::{Word, nonzero_mask};
use core::fmt;
use subtle::{Choice, ConditionallySelectable};
use zeroize::DefaultIsZeroes;

/// Fixed-capacity unsigned integer made of `LIMBS` little-endian words.
///
/// The capacity is part of the type, so an integer can never be used
/// "uninitialized": the only ways to obtain one are the constants and
/// constructors below, all of which yield a fully defined value.
#[derive(Clone, Copy)]
pub struct Uint<const LIMBS: usize> {
    words: [Word; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self { words: [0; LIMBS] };

    /// The value `1`.
    pub const ONE: Self = Self::from_u64(1);

    /// Largest representable value.
    pub const MAX: Self = Self {
        words: [Word::MAX; LIMBS],
    };

    /// Number of limbs.
    pub const LIMBS: usize = LIMBS;

    /// Capacity in bits.
    pub const BITS: u32 = LIMBS as u32 * Word::BITS;

    /// Capacity in bytes.
    pub const BYTES: usize = LIMBS * (Word::BITS as usize / 8);

    /// Create an integer from its little-endian words.
    pub const fn from_words(words: [Word; LIMBS]) -> Self {
        Self { words }
    }

    /// Create an integer from a `u64`.
    pub const fn from_u64(n: u64) -> Self {
        let mut words = [0; LIMBS];
        words[0] = n;
        Self { words }
    }

    /// Borrow the little-endian words.
    pub const fn as_words(&self) -> &[Word; LIMBS] {
        &self.words
    }

    /// Consume the integer and return its little-endian words.
    pub const fn to_words(self) -> [Word; LIMBS] {
        self.words
    }

    /// Is this integer zero?
    pub fn is_zero(&self) -> Choice {
        let acc = self.words.iter().fold(0, |acc, w| acc | w);
        Choice::from((nonzero_mask(acc) & 1) as u8 ^ 1)
    }

    /// Is this integer odd?
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.words[0] & 1) as u8)
    }

    /// Returns bit `index` (`0` is least significant). Out-of-range bits read as zero.
    ///
    /// The index is treated as public.
    pub fn bit(&self, index: u32) -> Choice {
        let limb = (index / Word::BITS) as usize;
        if limb >= LIMBS {
            return Choice::from(0);
        }
        Choice::from(((self.words[limb] >> (index % Word::BITS)) & 1) as u8)
    }

    /// Number of significant bits, computed without branching on the value.
    pub fn bits(&self) -> u32 {
        let mut bits = 0u32;
        for (i, w) in self.words.iter().enumerate() {
            let limb_bits = i as u32 * Word::BITS + (Word::BITS - w.leading_zeros());
            let nonzero = Choice::from((nonzero_mask(*w) & 1) as u8);
            bits.conditional_assign(&limb_bits, nonzero);
        }
        bits
    }

    /// Number of significant bits of a public value.
    pub fn bits_vartime(&self) -> u32 {
        for i in (0..LIMBS).rev() {
            if self.words[i] != 0 {
                return i as u32 * Word::BITS + (Word::BITS - self.words[i].leading_zeros());
            }
        }
        0
    }

    /// Keep only the `bits` least significant bits.
    pub fn mask_bits(&self, bits: u32) -> Self {
        let mut words = self.words;
        for (i, w) in words.iter_mut().enumerate() {
            let lo = i as u32 * Word::BITS;
            if bits <= lo {
                *w = 0;
            } else if bits - lo < Word::BITS {
                *w &= (1 << (bits - lo)) - 1;
            }
        }
        Self { words }
    }

    /// Bitwise AND of every limb with `mask`.
    pub(crate) fn and_word(&self, mask: Word) -> Self {
        let mut words = self.words;
        for w in words.iter_mut() {
            *w &= mask;
        }
        Self { words }
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut words = [0; LIMBS];
        for (i, w) in words.iter_mut().enumerate() {
            *w = Word::conditional_select(&a.words[i], &b.words[i], choice);
        }
        Self { words }
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> DefaultIsZeroes for Uint<LIMBS> {}

impl<const LIMBS: usize> From<u64> for Uint<LIMBS> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in self.words.iter().rev() {
            write!(f, "{w:016x}")?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in self.words.iter().rev() {
            write!(f, "{w:016X}")?;
        }
        Ok(())
    }
}
