//! # numerus-core
//!
//! Numeric primitives for the numerus expression system.
//!
//! This crate provides:
//! - Raw numeric payloads that keep the integer/float distinction (`Value`)
//! - Well-known constants with their symbolic rendering (`Constant`)
//! - NaN-free scalars with canonical constant detection (`Scalar`)
//! - The error taxonomy shared by every numerus crate (`Error`)
//!
//! ## Invariants
//!
//! - A `Scalar` never holds NaN
//! - Integer arithmetic stays integral until it overflows or turns inexact

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constant;
pub mod error;
pub mod scalar;
pub mod value;

#[cfg(test)]
mod proptests;

pub use constant::Constant;
pub use error::{Error, Result};
pub use scalar::Scalar;
pub use value::Value;
