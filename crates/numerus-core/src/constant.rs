//! Well-known constants.
//!
//! Detection is a pure function from a raw value to its canonical tag;
//! there is no global registry.

use std::f64::consts;
use std::fmt;

use crate::Value;

/// A well-known numeric constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    /// The integer 0.
    Zero,
    /// The integer 1.
    One,
    /// The integer 2.
    Two,
    /// The integer 10.
    Ten,
    /// The integer 100.
    Hundred,
    /// Euler's number.
    E,
    /// The ratio of a circle's circumference to its diameter.
    Pi,
    /// +∞
    PositiveInfinity,
    /// -∞
    NegativeInfinity,
}

impl Constant {
    /// Returns the raw value of this constant.
    #[must_use]
    pub const fn value(self) -> Value {
        match self {
            Constant::Zero => Value::Int(0),
            Constant::One => Value::Int(1),
            Constant::Two => Value::Int(2),
            Constant::Ten => Value::Int(10),
            Constant::Hundred => Value::Int(100),
            Constant::E => Value::Float(consts::E),
            Constant::Pi => Value::Float(consts::PI),
            Constant::PositiveInfinity => Value::Float(f64::INFINITY),
            Constant::NegativeInfinity => Value::Float(f64::NEG_INFINITY),
        }
    }

    /// Maps a raw value onto its canonical constant, if it is one.
    ///
    /// Integers are only recognised when integer-typed: `2.0` is not
    /// [`Constant::Two`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn detect(value: Value) -> Option<Self> {
        match value {
            Value::Int(0) => Some(Constant::Zero),
            Value::Int(1) => Some(Constant::One),
            Value::Int(2) => Some(Constant::Two),
            Value::Int(10) => Some(Constant::Ten),
            Value::Int(100) => Some(Constant::Hundred),
            Value::Int(_) => None,
            Value::Float(f) if f == consts::E => Some(Constant::E),
            Value::Float(f) if f == consts::PI => Some(Constant::Pi),
            Value::Float(f) if f == f64::INFINITY => Some(Constant::PositiveInfinity),
            Value::Float(f) if f == f64::NEG_INFINITY => Some(Constant::NegativeInfinity),
            Value::Float(_) => None,
        }
    }

    /// Returns the textual symbol of this constant.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Constant::Zero => "0",
            Constant::One => "1",
            Constant::Two => "2",
            Constant::Ten => "10",
            Constant::Hundred => "100",
            Constant::E => "e",
            Constant::Pi => "π",
            Constant::PositiveInfinity => "+∞",
            Constant::NegativeInfinity => "-∞",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
