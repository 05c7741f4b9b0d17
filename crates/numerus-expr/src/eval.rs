//! Scalar semantics of each operation.

use num_traits::Pow;

use numerus_core::{Error, Result, Scalar, Value};

use crate::operation::OperationKind;
use crate::round;

/// Applies an operation to already evaluated operands.
///
/// The raw result is re-wrapped through [`Scalar::new`], which detects
/// canonical constants and rejects NaN.
///
/// # Errors
///
/// Returns [`Error::NotANumber`] if the result is NaN, or
/// [`Error::NotEnoughOperands`] or [`Error::TooManyOperands`] if the
/// number of `operands` does not match the arity.
pub fn apply(kind: OperationKind, operands: &[Scalar]) -> Result<Scalar> {
    if operands.len() < kind.arity().min() {
        return Err(Error::NotEnoughOperands {
            operation: kind.name(),
            expected: kind.arity().min(),
            given: operands.len(),
        });
    }
    if let Some(max) = kind.arity().max() {
        if operands.len() > max {
            return Err(Error::TooManyOperands {
                operation: kind.name(),
                expected: max,
                given: operands.len(),
            });
        }
    }

    let a = operands[0].value();
    let value = match kind {
        OperationKind::Addition => fold(operands, |acc, v| acc + v),
        OperationKind::Subtraction => fold(operands, |acc, v| acc - v),
        OperationKind::Multiplication => fold(operands, |acc, v| acc * v),
        OperationKind::Division => a / operands[1].value(),
        OperationKind::Modulo => a % operands[1].value(),
        OperationKind::Power => a.pow(operands[1].value()),
        OperationKind::Absolute => absolute(a),
        OperationKind::Floor => Value::Float(a.as_f64().floor()),
        OperationKind::Ceil => Value::Float(a.as_f64().ceil()),
        OperationKind::Round { precision, mode } => {
            Value::Float(round::round(a.as_f64(), precision, mode))
        }
        OperationKind::SquareRoot => Value::Float(a.as_f64().sqrt()),
        OperationKind::Exponential => Value::Float(a.as_f64().exp()),
        OperationKind::BinaryLogarithm => Value::Float(a.as_f64().log2()),
        OperationKind::NaturalLogarithm => Value::Float(a.as_f64().ln()),
        OperationKind::CommonLogarithm => Value::Float(a.as_f64().log10()),
        OperationKind::Signum => signum(operands[0]),
        OperationKind::Factorial => factorial(a),
        OperationKind::Sine => Value::Float(a.as_f64().sin()),
        OperationKind::Cosine => Value::Float(a.as_f64().cos()),
        OperationKind::Tangent => Value::Float(a.as_f64().tan()),
        OperationKind::ArcSine => Value::Float(a.as_f64().asin()),
        OperationKind::ArcCosine => Value::Float(a.as_f64().acos()),
        OperationKind::ArcTangent => Value::Float(a.as_f64().atan()),
    };

    Scalar::new(value)
}

/// Left-to-right accumulation over every operand.
fn fold(operands: &[Scalar], f: impl Fn(Value, Value) -> Value) -> Value {
    operands[1..]
        .iter()
        .fold(operands[0].value(), |acc, s| f(acc, s.value()))
}

fn absolute(value: Value) -> Value {
    match value {
        Value::Int(i) => i
            .checked_abs()
            .map_or_else(|| Value::Float(value.as_f64().abs()), Value::Int),
        Value::Float(f) => Value::Float(f.abs()),
    }
}

fn signum(scalar: Scalar) -> Value {
    if scalar.is_zero() {
        Value::Int(0)
    } else if scalar.is_negative() {
        Value::Int(-1)
    } else {
        Value::Int(1)
    }
}

/// n! for a non-negative whole number, switching to floats on overflow.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn factorial(value: Value) -> Value {
    let n = value.as_int().unwrap_or_else(|| value.as_f64() as i64);
    let mut result = Value::Int(1);
    for i in 2..=n {
        result = result * Value::Int(i);
        if result.is_infinite() {
            break;
        }
    }
    result
}
