#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(any(feature = "sha2", feature = "belt-hash"))]
mod adapter;
mod algorithm;
mod context;
mod function;
mod hmac;
mod sha3;

pub mod keccak;

pub use crate::{
    algorithm::HashAlgorithm,
    context::{HashContext, digest},
    function::HashFunction,
    hmac::{Hmac, HmacContext, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE},
    sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256},
};
pub use bignum::{Error, Result};

#[cfg(feature = "belt-hash")]
pub use crate::adapter::BeltHash;
#[cfg(feature = "sha2")]
pub use crate::adapter::{Sha224, Sha256, Sha384, Sha512};
