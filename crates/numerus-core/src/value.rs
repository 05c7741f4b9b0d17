//! Raw numeric payloads.
//!
//! A `Value` is either a 64-bit integer or a 64-bit float. Arithmetic keeps
//! integers integral as long as the result is exact and does not overflow,
//! and falls back to floating point otherwise. These operations are
//! infallible: NaN is representable here and rejected by [`crate::Scalar`].

use num_traits::{One, Pow, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A raw integer or floating-point number.
#[derive(Clone, Copy, Debug)]
pub enum Value {
    /// A machine integer.
    Int(i64),
    /// An IEEE 754 double.
    Float(f64),
}

impl Value {
    /// Returns the value as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }

    /// Returns the integer payload if this value is integer-typed.
    #[must_use]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i),
            Value::Float(_) => None,
        }
    }

    /// Returns true if the payload is integer-typed.
    #[must_use]
    pub fn is_int(self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Value::Float(f) if f.is_nan())
    }

    /// Returns true if this is a float infinity.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Value::Float(f) if f.is_infinite())
    }

    /// Returns true if the value is a whole number, whatever its type.
    #[must_use]
    pub fn is_integral(self) -> bool {
        match self {
            Value::Int(_) => true,
            Value::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }

    /// Returns true if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Value::Int(i) => i < 0,
            Value::Float(f) => f < 0.0,
        }
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::Int(0)
    }

    fn is_zero(&self) -> bool {
        match *self {
            Value::Int(i) => i == 0,
            Value::Float(f) => f == 0.0,
        }
    }
}

impl One for Value {
    fn one() -> Self {
        Value::Int(1)
    }
}

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            // Debug is the shortest representation that parses back exactly.
            Value::Float(x) => write!(f, "{x:?}"),
        }
    }
}

// Arithmetic operations
impl Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Value::Float(self.as_f64() + rhs.as_f64()), Value::Int),
            _ => Value::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Value::Float(self.as_f64() - rhs.as_f64()), Value::Int),
            _ => Value::Float(self.as_f64() - rhs.as_f64()),
        }
    }
}

impl Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Value::Float(self.as_f64() * rhs.as_f64()), Value::Int),
            _ => Value::Float(self.as_f64() * rhs.as_f64()),
        }
    }
}

impl Div for Value {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if let (Value::Int(a), Value::Int(b)) = (self, rhs) {
            if b != 0 && a.checked_rem(b) == Some(0) {
                if let Some(q) = a.checked_div(b) {
                    return Value::Int(q);
                }
            }
        }
        Value::Float(self.as_f64() / rhs.as_f64())
    }
}

/// Floating-point remainder: the result carries the sign of the dividend.
impl Rem for Value {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Value::Float(self.as_f64() % rhs.as_f64())
    }
}

impl Neg for Value {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Value::Int(i) => i
                .checked_neg()
                .map_or_else(|| Value::Float(-self.as_f64()), Value::Int),
            Value::Float(f) => Value::Float(-f),
        }
    }
}

impl Pow<Value> for Value {
    type Output = Self;

    fn pow(self, rhs: Value) -> Self::Output {
        if let (Value::Int(base), Value::Int(exp)) = (self, rhs) {
            if let Ok(exp) = u32::try_from(exp) {
                if let Some(result) = base.checked_pow(exp) {
                    return Value::Int(result);
                }
            }
        }
        Value::Float(self.as_f64().powf(rhs.as_f64()))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
