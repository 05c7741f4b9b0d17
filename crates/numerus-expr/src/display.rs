//! Canonical rendering.
//!
//! Operands that are themselves operations are parenthesised by infix,
//! prefix and postfix templates. Function-call and delimiter templates
//! (`ln(x)`, `|x|`, `⌊x⌋`) already bracket their operand and never add a
//! second pair. Bare scalars are never bracketed.

use std::fmt;

use crate::number::Node;
use crate::operation::{Operation, OperationKind};
use crate::Number;

/// Renders a number, parenthesised when it is an operation.
struct Operand<'a>(&'a Number);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_operation() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Scalar(s) => write!(f, "{s}"),
            Node::Operation(op) => write!(f, "{op}"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self.operands();
        let x = &operands[0];
        match self.kind() {
            OperationKind::Addition => infix(f, operands, " + "),
            OperationKind::Subtraction => infix(f, operands, " - "),
            OperationKind::Multiplication => infix(f, operands, " × "),
            OperationKind::Division => infix(f, operands, " ÷ "),
            OperationKind::Modulo => infix(f, operands, " % "),
            OperationKind::Power => infix(f, operands, "^"),
            OperationKind::Absolute => write!(f, "|{x}|"),
            OperationKind::Floor => write!(f, "⌊{x}⌋"),
            OperationKind::Ceil => write!(f, "⌈{x}⌉"),
            OperationKind::Round { precision, mode } => {
                write!(f, "round({x}, {precision}, {mode})")
            }
            OperationKind::SquareRoot => write!(f, "√{}", Operand(x)),
            OperationKind::Exponential => write!(f, "e^{}", Operand(x)),
            OperationKind::BinaryLogarithm => write!(f, "lb({x})"),
            OperationKind::NaturalLogarithm => write!(f, "ln({x})"),
            OperationKind::CommonLogarithm => write!(f, "lg({x})"),
            OperationKind::Signum => write!(f, "sgn({x})"),
            OperationKind::Factorial => write!(f, "{}!", Operand(x)),
            OperationKind::Sine => write!(f, "sin({x})"),
            OperationKind::Cosine => write!(f, "cos({x})"),
            OperationKind::Tangent => write!(f, "tan({x})"),
            OperationKind::ArcSine => write!(f, "asin({x})"),
            OperationKind::ArcCosine => write!(f, "acos({x})"),
            OperationKind::ArcTangent => write!(f, "atan({x})"),
        }
    }
}

fn infix(f: &mut fmt::Formatter<'_>, operands: &[Number], separator: &str) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", Operand(operand))?;
    }
    Ok(())
}
