//! Normalisation of raw numerics and numbers into [`Number`]s.

use numerus_core::{Constant, Result, Scalar, Value};

use crate::Number;

/// Anything that can stand as an operand.
pub trait IntoNumber {
    /// Converts into a number.
    ///
    /// # Errors
    ///
    /// Returns [`numerus_core::Error::NotANumber`] for NaN inputs.
    fn into_number(self) -> Result<Number>;
}

impl IntoNumber for Number {
    fn into_number(self) -> Result<Number> {
        Ok(self)
    }
}

impl IntoNumber for &Number {
    fn into_number(self) -> Result<Number> {
        Ok(self.clone())
    }
}

impl IntoNumber for Scalar {
    fn into_number(self) -> Result<Number> {
        Ok(Number::from_scalar(self))
    }
}

impl IntoNumber for Constant {
    fn into_number(self) -> Result<Number> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for Value {
    fn into_number(self) -> Result<Number> {
        Number::new(self)
    }
}

impl IntoNumber for i64 {
    fn into_number(self) -> Result<Number> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for i32 {
    fn into_number(self) -> Result<Number> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for u32 {
    fn into_number(self) -> Result<Number> {
        Ok(Number::from(self))
    }
}

impl IntoNumber for f64 {
    fn into_number(self) -> Result<Number> {
        Number::new(self)
    }
}

/// Normalises a sequence of raw numerics or numbers.
///
/// # Errors
///
/// Returns the first conversion error.
pub fn numerize<I>(values: I) -> Result<Vec<Number>>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    values.into_iter().map(IntoNumber::into_number).collect()
}
