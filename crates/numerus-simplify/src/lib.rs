//! # numerus-simplify
//!
//! Explicit collapse pass for numerus expressions.
//!
//! This crate uses the `egg` library to provide:
//! - A term language mirroring every numerus operation
//! - Rewrite rules for inverse chains, idempotent operations and identities
//! - Cost functions for extraction
//! - Lowering of `Number` trees into e-graph terms and lifting them back
//!
//! Collapsing is never performed during evaluation; callers ask for it.
//!
//! ```rust
//! use numerus_expr::Number;
//! use numerus_simplify::Collapse;
//!
//! let x = Number::from(7);
//! let roundtrip = x.square_root().unwrap().power(2).unwrap();
//! assert_eq!(roundtrip.collapse().unwrap().to_string(), "7");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod cost;
pub mod engine;
pub mod error;
pub mod language;
pub mod rules;

pub use engine::{Collapse, CollapseConfig, CollapseStats, Collapser, CostModel};
pub use error::CollapseError;
pub use language::{Literal, NumerusLang};
