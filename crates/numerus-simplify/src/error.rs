//! Collapse errors.

use thiserror::Error;

/// Errors raised while collapsing an expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CollapseError {
    /// The extracted term contained no node.
    #[error("collapsed expression is empty")]
    Empty,

    /// A rounding node carried something other than a whole precision.
    #[error("invalid rounding precision: {0}")]
    InvalidPrecision(String),

    /// Rebuilding a number from the extracted term failed.
    #[error(transparent)]
    Number(#[from] numerus_core::Error),
}

/// Parse failure for a [`crate::Literal`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid numeric literal: {0}")]
pub struct ParseLiteralError(pub String);
