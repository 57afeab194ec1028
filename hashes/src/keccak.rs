//! Keccak-f[1600] permutation and sponge.

use bignum::{Error, Result};
use zeroize::Zeroize;

/// Width of the permutation state in bytes.
pub const STATE_BYTES: usize = 200;

/// Domain separation suffix of the SHA-3 functions.
pub(crate) const SHA3_SUFFIX: u8 = 0x06;

/// Domain separation suffix of the SHAKE functions.
pub(crate) const SHAKE_SUFFIX: u8 = 0x1f;

const ROUND_CONSTANTS: [u64; 24] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ rotation offsets, in π traversal order.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π lane traversal starting from lane 1.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the 24-round Keccak-f[1600] permutation.
pub fn keccak_f1600(state: &mut [u64; 25]) {
    for rc in ROUND_CONSTANTS {
        // θ
        let mut c = [0u64; 5];
        for (x, column) in c.iter_mut().enumerate() {
            *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[5 * y + x] ^= d;
            }
        }

        // ρ and π
        let mut current = state[1];
        for (&lane, &rotation) in PI.iter().zip(RHO.iter()) {
            let next = state[lane];
            state[lane] = current.rotate_left(rotation);
            current = next;
        }

        // χ
        for y in 0..5 {
            let row = [
                state[5 * y],
                state[5 * y + 1],
                state[5 * y + 2],
                state[5 * y + 3],
                state[5 * y + 4],
            ];
            for x in 0..5 {
                state[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // ι
        state[0] ^= rc;
    }
}

/// Keccak sponge with a byte-granular rate and a domain separation suffix.
///
/// Input is XORed straight into the state, so no block buffer is kept. Once
/// the sponge starts squeezing it no longer accepts input.
#[derive(Clone)]
pub struct KeccakSponge {
    state: [u64; 25],
    rate: usize,
    suffix: u8,
    pos: usize,
    squeezing: bool,
}

impl KeccakSponge {
    /// Create an empty sponge. `rate` is in bytes and must be a nonzero
    /// multiple of 8 below [`STATE_BYTES`].
    pub const fn new(rate: usize, suffix: u8) -> Self {
        debug_assert!(rate > 0 && rate < STATE_BYTES && rate % 8 == 0);
        Self {
            state: [0; 25],
            rate,
            suffix,
            pos: 0,
            squeezing: false,
        }
    }

    /// Rate in bytes.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Absorb `data`.
    ///
    /// Fails with [`Error::InvalidState`] once squeezing has started.
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if self.squeezing {
            return Err(Error::InvalidState);
        }
        self.absorb_unchecked(data);
        Ok(())
    }

    /// Absorb into a sponge that has not started squeezing.
    pub(crate) fn absorb_unchecked(&mut self, mut data: &[u8]) {
        debug_assert!(!self.squeezing);
        while !data.is_empty() {
            let take = (self.rate - self.pos).min(data.len());
            for (i, &byte) in data[..take].iter().enumerate() {
                self.xor_byte(self.pos + i, byte);
            }
            self.pos += take;
            data = &data[take..];

            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
        }
    }

    /// Squeeze `out.len()` bytes, padding the input first if this is the
    /// first call.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if !self.squeezing {
            self.pad();
        }

        for byte in out.iter_mut() {
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            *byte = (self.state[self.pos / 8] >> (8 * (self.pos % 8))) as u8;
            self.pos += 1;
        }
    }

    /// pad10*1 with the domain separation suffix.
    fn pad(&mut self) {
        self.xor_byte(self.pos, self.suffix);
        self.xor_byte(self.rate - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.pos = 0;
        self.squeezing = true;
    }

    fn xor_byte(&mut self, index: usize, byte: u8) {
        self.state[index / 8] ^= u64::from(byte) << (8 * (index % 8));
    }
}

impl Zeroize for KeccakSponge {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.pos.zeroize();
    }
}
