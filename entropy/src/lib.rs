#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod deterministic;
mod secure;

pub use crate::{deterministic::TestRng, secure::SecureRng};
pub use bignum::{Error, Result};
pub use rand_core;
