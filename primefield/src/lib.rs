#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod context;
mod dev;
mod element;

pub use crate::{context::FpCtx, element::Fp};
pub use bignum::{self, Error, Result, Uint};
pub use rand_core;
pub use subtle;
pub use zeroize;

/// Byte order used when encoding/decoding field elements as bytestrings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ByteOrder {
    /// Big endian.
    #[default]
    BigEndian,

    /// Little endian.
    LittleEndian,
}

impl ByteOrder {
    /// Decode an integer of any width in this byte order.
    pub fn decode<const LIMBS: usize>(self, bytes: &[u8]) -> Result<Uint<LIMBS>> {
        match self {
            ByteOrder::BigEndian => Uint::from_be_slice(bytes),
            ByteOrder::LittleEndian => Uint::from_le_slice(bytes),
        }
    }

    /// Encode an integer into all of `out` in this byte order.
    pub fn encode<const LIMBS: usize>(self, n: &Uint<LIMBS>, out: &mut [u8]) -> Result<()> {
        match self {
            ByteOrder::BigEndian => n.write_be_bytes(out),
            ByteOrder::LittleEndian => n.write_le_bytes(out),
        }
    }
}
