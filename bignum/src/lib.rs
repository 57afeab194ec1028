#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

mod error;
mod monty;
mod uint;
mod word;

pub use crate::{
    error::{Error, Result},
    monty::MontyParams,
    uint::Uint,
    word::{WideWord, Word},
};
pub use rand_core;
pub use subtle;
pub use zeroize;

/// 192-bit unsigned integer.
pub type U192 = Uint<3>;

/// 256-bit unsigned integer.
pub type U256 = Uint<4>;

/// 384-bit unsigned integer.
pub type U384 = Uint<6>;

/// 448-bit unsigned integer.
pub type U448 = Uint<7>;

/// 512-bit unsigned integer.
pub type U512 = Uint<8>;

/// 576-bit unsigned integer, wide enough for P-521.
pub type U576 = Uint<9>;
