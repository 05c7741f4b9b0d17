//! # numerus-expr
//!
//! Lazy number expressions for numerus.
//!
//! This crate provides:
//! - `Number`, a cheap-to-clone handle on an immutable expression node
//! - One operation node per arithmetic or transcendental operation
//! - Write-once memoized evaluation of every operation node
//! - Eager definition-set guards on domain-restricted operations
//! - Canonical infix/prefix rendering
//!
//! ## Evaluation Model
//!
//! Building an expression never evaluates it, except where a guard needs
//! an operand's value (divisors, logarithms, inverse trigonometry,
//! factorials). The first call to [`Number::result`] walks the tree
//! bottom-up; each node caches its own result, so later calls return the
//! very same scalar node.
//!
//! ```rust
//! use numerus_expr::Number;
//!
//! let sum = Number::from(24).add_all([42, 66]).unwrap();
//! assert_eq!(sum.to_string(), "24 + 42 + 66");
//! assert!(sum.equals(&Number::from(132)).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod display;
pub mod eval;
pub mod number;
pub mod numerize;
pub mod operation;
pub mod round;

#[cfg(test)]
mod proptests;

pub use number::{Number, View};
pub use numerize::{numerize, IntoNumber};
pub use operation::{Arity, Operation, OperationKind};
pub use round::RoundingMode;
