//! # Numerus
//!
//! Immutable algebraic number expressions with lazy, memoized evaluation.
//!
//! A [`Number`](numerus_expr::Number) is either a scalar or an operation
//! over other numbers. Building an operation never evaluates it; the value
//! is computed on first request and cached inside the node for every later
//! reader. Definition sets are checked when a node is built, so an invalid
//! expression such as `lb(0)` is rejected before it exists.
//!
//! ## Features
//!
//! - **Scalars**: integer/float payloads with well-known constants
//! - **Definition sets**: ℝ, ℤ, ℕ, ranges and enumerations with union and intersection
//! - **Operations**: arithmetic, logarithms, rounding, factorial and trigonometry
//! - **Collapse**: opt-in equality saturation through e-graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let sum = Number::from(24).add_all([42, 66]).unwrap();
//! assert_eq!(sum.to_string(), "24 + 42 + 66");
//! assert!(sum.equals(&Number::from(132)).unwrap());
//!
//! let roundtrip = Number::from(8).binary_logarithm().unwrap();
//! let roundtrip = Number::from(2).power(roundtrip).unwrap();
//! assert_eq!(roundtrip.collapse().unwrap().to_string(), "8");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerus_core as core;
pub use numerus_expr as expr;
pub use numerus_sets as sets;
pub use numerus_simplify as simplify;

#[cfg(test)]
mod tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numerus_core::{Constant, Error, Result, Scalar, Value};
    pub use numerus_expr::{numerize, IntoNumber, Number, OperationKind, RoundingMode, View};
    pub use numerus_sets::{Bound, Range, Set};
    pub use numerus_simplify::{Collapse, CollapseConfig, Collapser, CostModel};
}
