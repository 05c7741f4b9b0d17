//! NaN-free scalars.
//!
//! A `Scalar` is the evaluated form of every numerus expression: a raw
//! [`Value`] plus the canonical [`Constant`] it matches, if any.

use std::cmp::Ordering;
use std::fmt;

use crate::{Constant, Error, Result, Value};

/// A raw number that is guaranteed not to be NaN.
///
/// Equality and ordering are numeric and ignore the integer/float
/// distinction: `Scalar::int(3) == Scalar::float(3.0)`.
#[derive(Clone, Copy, Debug)]
pub struct Scalar {
    value: Value,
    constant: Option<Constant>,
}

impl Scalar {
    /// The integer 0.
    pub const ZERO: Self = Self::from_constant(Constant::Zero);
    /// The integer 1.
    pub const ONE: Self = Self::from_constant(Constant::One);
    /// The integer 2.
    pub const TWO: Self = Self::from_constant(Constant::Two);
    /// The integer 10.
    pub const TEN: Self = Self::from_constant(Constant::Ten);
    /// The integer 100.
    pub const HUNDRED: Self = Self::from_constant(Constant::Hundred);
    /// Euler's number.
    pub const E: Self = Self::from_constant(Constant::E);
    /// π
    pub const PI: Self = Self::from_constant(Constant::Pi);
    /// +∞
    pub const POSITIVE_INFINITY: Self = Self::from_constant(Constant::PositiveInfinity);
    /// -∞
    pub const NEGATIVE_INFINITY: Self = Self::from_constant(Constant::NegativeInfinity);

    /// Wraps a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotANumber`] if the value is NaN.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        if value.is_nan() {
            return Err(Error::NotANumber);
        }
        Ok(Self {
            value,
            constant: Constant::detect(value),
        })
    }

    /// Wraps an integer.
    #[must_use]
    pub fn int(value: i64) -> Self {
        let value = Value::Int(value);
        Self {
            value,
            constant: Constant::detect(value),
        }
    }

    /// Wraps a float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotANumber`] if the value is NaN.
    pub fn float(value: f64) -> Result<Self> {
        Self::new(Value::Float(value))
    }

    /// Returns the scalar for a well-known constant.
    #[must_use]
    pub const fn from_constant(constant: Constant) -> Self {
        Self {
            value: constant.value(),
            constant: Some(constant),
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> Value {
        self.value
    }

    /// Returns the canonical constant this scalar matches.
    #[must_use]
    pub const fn constant(self) -> Option<Constant> {
        self.constant
    }

    /// Returns the value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.value.as_f64()
    }

    /// Returns true if this scalar is a whole number.
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.value.is_integral()
    }

    /// Returns true if this scalar is ±∞.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.value.is_infinite()
    }

    /// Returns true if this scalar equals zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        num_traits::Zero::is_zero(&self.value)
    }

    /// Returns true if this scalar is strictly negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.value.is_negative()
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.constant {
            Some(
                c @ (Constant::E
                | Constant::Pi
                | Constant::PositiveInfinity
                | Constant::NegativeInfinity),
            ) => f.write_str(c.symbol()),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl From<Constant> for Scalar {
    fn from(constant: Constant) -> Self {
        Self::from_constant(constant)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::int(i64::from(n))
    }
}

impl TryFrom<f64> for Scalar {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self> {
        Self::float(f)
    }
}

impl TryFrom<Value> for Scalar {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(value)
    }
}
