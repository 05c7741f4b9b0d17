//! Error taxonomy.
//!
//! Every variant is a contract violation raised at the point where the
//! offending node is built or first evaluated. None of them is transient.

use thiserror::Error;

/// Errors raised by numerus operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A computation produced NaN, which no scalar may hold.
    #[error("not a number")]
    NotANumber,

    /// The divisor of a division evaluated to zero.
    #[error("division by zero: {dividend} ÷ 0")]
    DivisionByZero {
        /// Rendering of the dividend.
        dividend: String,
    },

    /// A value fell outside the definition set of an operation.
    #[error("{value} ∉ {set}")]
    OutOfDefinitionSet {
        /// Rendering of the rejected value.
        value: String,
        /// Rendering of the rejecting set.
        set: String,
    },

    /// Rounding was requested with a negative number of digits.
    #[error("precision must be positive, got {precision}")]
    PrecisionMustBePositive {
        /// The requested precision.
        precision: i64,
    },

    /// Factorial was requested on a negative integer.
    #[error("factorial must be positive, got {value}")]
    FactorialMustBePositive {
        /// The negative input.
        value: i64,
    },

    /// An n-ary operation was built with too few operands.
    #[error("{operation} needs at least {expected} operand(s), got {given}")]
    NotEnoughOperands {
        /// Name of the operation.
        operation: &'static str,
        /// Minimum arity.
        expected: usize,
        /// Number of operands supplied.
        given: usize,
    },

    /// A fixed-arity operation was built with too many operands.
    #[error("{operation} takes at most {expected} operand(s), got {given}")]
    TooManyOperands {
        /// Name of the operation.
        operation: &'static str,
        /// Maximum arity.
        expected: usize,
        /// Number of operands supplied.
        given: usize,
    },
}

/// Result type used across numerus.
pub type Result<T, E = Error> = std::result::Result<T, E>;
