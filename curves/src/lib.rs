#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod affine;
mod curve;
mod dev;
mod encoding;
mod field;
mod point;
mod point_arithmetic;
mod registry;

pub use crate::{
    affine::AffinePoint,
    curve::{Curve, CurveKind, Equation},
    encoding::PointEncoding,
    point::Point,
    registry::CurveName,
};
pub use bignum::{self, Error, Result, Uint};
pub use primefield::{self, ByteOrder, Fp, FpCtx};
pub use rand_core;
pub use subtle;
pub use zeroize;
