//! # numerus-sets
//!
//! Definition sets for numerus.
//!
//! A definition set answers whether a scalar lies in the domain of an
//! operation, and rejects it with [`numerus_core::Error::OutOfDefinitionSet`]
//! otherwise. Sets render in mathematical notation:
//!
//! ```text
//! ℝ  ℝ*  ℤ  ℤ*  ℕ  ℕ*  {1;2}  [1;2]  ]1;2[  A ∪ B  A ∩ B
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod range;
pub mod set;

pub use range::{Bound, Range};
pub use set::Set;
