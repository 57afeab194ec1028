//! Byte and hex encodings.

use super::Uint;
use crate::{Error, Result, word::Word};

const WORD_BYTES: usize = (Word::BITS / 8) as usize;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Decode a big-endian byte string of any length.
    ///
    /// Leading zero bytes beyond the capacity are accepted; any other byte
    /// that does not fit fails with [`Error::CapacityExceeded`].
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        let mut words = [0; LIMBS];
        let mut overflow = 0u8;
        for (i, byte) in bytes.iter().rev().enumerate() {
            if i < Self::BYTES {
                words[i / WORD_BYTES] |= Word::from(*byte) << (8 * (i % WORD_BYTES));
            } else {
                overflow |= byte;
            }
        }
        match overflow {
            0 => Ok(Self { words }),
            _ => Err(Error::CapacityExceeded),
        }
    }

    /// Decode a little-endian byte string of any length.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        let mut words = [0; LIMBS];
        let mut overflow = 0u8;
        for (i, byte) in bytes.iter().enumerate() {
            if i < Self::BYTES {
                words[i / WORD_BYTES] |= Word::from(*byte) << (8 * (i % WORD_BYTES));
            } else {
                overflow |= byte;
            }
        }
        match overflow {
            0 => Ok(Self { words }),
            _ => Err(Error::CapacityExceeded),
        }
    }

    /// Decode a big-endian hex string (no prefix, even length).
    ///
    /// Used for curve constants; the input is not secret.
    pub fn from_be_hex(hex: &str) -> Result<Self> {
        let digits = hex.as_bytes();
        if digits.len() % 2 != 0 {
            return Err(Error::InvalidLength);
        }

        let mut words = [0; LIMBS];
        for (i, digit) in digits.iter().rev().enumerate() {
            let nibble = Word::from(decode_nibble(*digit)?);
            let limb = i / (2 * WORD_BYTES);
            if limb < LIMBS {
                words[limb] |= nibble << (4 * (i % (2 * WORD_BYTES)));
            } else if nibble != 0 {
                return Err(Error::CapacityExceeded);
            }
        }
        Ok(Self { words })
    }

    /// Encode as big-endian bytes filling all of `out`.
    ///
    /// Fails with [`Error::InvalidLength`] if the value does not fit in `out`.
    pub fn write_be_bytes(&self, out: &mut [u8]) -> Result<()> {
        self.check_fits(out.len())?;
        for (i, byte) in out.iter_mut().rev().enumerate() {
            *byte = self.byte(i);
        }
        Ok(())
    }

    /// Encode as little-endian bytes filling all of `out`.
    pub fn write_le_bytes(&self, out: &mut [u8]) -> Result<()> {
        self.check_fits(out.len())?;
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.byte(i);
        }
        Ok(())
    }

    /// Byte `i` counting from the least significant end, zero past the capacity.
    fn byte(&self, i: usize) -> u8 {
        if i >= Self::BYTES {
            return 0;
        }
        (self.words[i / WORD_BYTES] >> (8 * (i % WORD_BYTES))) as u8
    }

    fn check_fits(&self, len: usize) -> Result<()> {
        let overflow = (len..Self::BYTES).fold(0u8, |acc, i| acc | self.byte(i));
        match overflow {
            0 => Ok(()),
            _ => Err(Error::InvalidLength),
        }
    }
}

fn decode_nibble(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(Error::InvalidLength),
    }
}
