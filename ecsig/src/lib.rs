#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod algorithm;
mod rfc6979;
mod scheme;
mod signature;
mod signing;
mod state;
mod verifying;

pub use crate::{
    algorithm::SignatureAlgorithm,
    signature::{MAX_SCALAR_BYTES, Signature, signature_len},
    signing::{SignContext, SigningKey, sign},
    state::ContextState,
    verifying::{VerifyContext, VerifyingKey, verify},
};
pub use bignum::{self, Error, Result};
pub use curves::{self, ByteOrder, Curve, CurveName, Point};
pub use entropy::SecureRng;
pub use hashes::{self, HashAlgorithm};
pub use rand_core;
