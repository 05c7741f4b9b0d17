//! The expression language for egg-based collapsing.
//!
//! This module defines the language understood by the e-graph, mapping
//! every numerus operation to an egg node.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use egg::{define_language, Id};

use numerus_core::{Constant, Scalar, Value};

use crate::error::ParseLiteralError;

define_language! {
    /// The numeric expression language for numerus.
    pub enum NumerusLang {
        // Basic arithmetic
        "+" = Add(Box<[Id]>),
        "-" = Sub(Box<[Id]>),
        "*" = Mul(Box<[Id]>),
        "/" = Div([Id; 2]),
        "%" = Mod([Id; 2]),
        "^" = Pow([Id; 2]),

        // Piecewise
        "abs" = Abs(Id),
        "sgn" = Sgn(Id),
        "floor" = Floor(Id),
        "ceil" = Ceil(Id),
        "round-half-up" = RoundHalfUp([Id; 2]),
        "round-half-down" = RoundHalfDown([Id; 2]),
        "round-half-even" = RoundHalfEven([Id; 2]),
        "round-half-odd" = RoundHalfOdd([Id; 2]),
        "!" = Factorial(Id),

        // Exponential and logarithmic
        "sqrt" = Sqrt(Id),
        "exp" = Exp(Id),
        "lb" = Lb(Id),
        "ln" = Ln(Id),
        "lg" = Lg(Id),

        // Trigonometric functions
        "sin" = Sin(Id),
        "cos" = Cos(Id),
        "tan" = Tan(Id),
        "asin" = Asin(Id),
        "acos" = Acos(Id),
        "atan" = Atan(Id),

        // Numeric literals, tried last so operator names win
        Num(Literal),
    }
}

impl NumerusLang {
    /// Extracts the scalar if this is a literal.
    #[must_use]
    pub fn as_num(&self) -> Option<Scalar> {
        match self {
            NumerusLang::Num(lit) => Some(lit.scalar()),
            _ => None,
        }
    }
}

/// A scalar usable as an e-graph leaf.
///
/// Equality is structural: `2` and `2.0` are distinct literals, so a rule
/// written against the integer never rewrites a float.
#[derive(Clone, Copy, Debug)]
pub struct Literal(Scalar);

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum LiteralKey {
    Int(i64),
    Float(u64),
}

impl Literal {
    /// Wraps a scalar.
    #[must_use]
    pub const fn new(scalar: Scalar) -> Self {
        Self(scalar)
    }

    /// Returns the wrapped scalar.
    #[must_use]
    pub const fn scalar(self) -> Scalar {
        self.0
    }

    fn key(self) -> LiteralKey {
        match self.0.value() {
            Value::Int(i) => LiteralKey::Int(i),
            Value::Float(f) => LiteralKey::Float(f.to_bits()),
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Literal {}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.constant(), self.0.value()) {
            (Some(Constant::E), _) => f.write_str("e"),
            (Some(Constant::Pi), _) => f.write_str("pi"),
            (Some(Constant::PositiveInfinity), _) => f.write_str("+inf"),
            (Some(Constant::NegativeInfinity), _) => f.write_str("-inf"),
            (_, Value::Int(i)) => write!(f, "{i}"),
            (_, Value::Float(x)) => write!(f, "{x:?}"),
        }
    }
}

impl FromStr for Literal {
    type Err = ParseLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scalar = match s {
            "e" => Scalar::E,
            "pi" => Scalar::PI,
            "+inf" => Scalar::POSITIVE_INFINITY,
            "-inf" => Scalar::NEGATIVE_INFINITY,
            _ => {
                if let Ok(i) = s.parse::<i64>() {
                    Scalar::int(i)
                } else {
                    match s.parse::<f64>() {
                        Ok(x) if x.is_finite() => Scalar::float(x)
                            .map_err(|_| ParseLiteralError(s.to_string()))?,
                        _ => return Err(ParseLiteralError(s.to_string())),
                    }
                }
            }
        };
        Ok(Self(scalar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egg::RecExpr;

    #[test]
    fn test_parse_expr() {
        let expr: RecExpr<NumerusLang> = "(+ 1 2 3)".parse().unwrap();
        assert_eq!(expr.as_ref().len(), 4);
    }

    #[test]
    fn test_parse_complex() {
        let expr: RecExpr<NumerusLang> = "(^ (sqrt (+ 1.5 e)) 2)".parse().unwrap();
        assert!(!expr.as_ref().is_empty());
        assert_eq!(expr.to_string(), "(^ (sqrt (+ 1.5 e)) 2)");
    }

    #[test]
    fn test_literal_roundtrip() {
        for text in ["0", "-42", "42.0", "0.1", "1e-7", "e", "pi", "+inf", "-inf"] {
            let lit: Literal = text.parse().unwrap();
            assert_eq!(lit.to_string(), text);
        }
    }

    #[test]
    fn test_literal_rejects_garbage() {
        assert!("sqrt".parse::<Literal>().is_err());
        assert!("NaN".parse::<Literal>().is_err());
        assert!("inf".parse::<Literal>().is_err());
    }

    #[test]
    fn test_as_num() {
        let expr: RecExpr<NumerusLang> = "(sqrt 2)".parse().unwrap();
        let nodes = expr.as_ref();
        assert_eq!(nodes[0].as_num().map(Scalar::value), Some(Value::Int(2)));
        assert!(nodes[1].as_num().is_none());
    }

    #[test]
    fn test_literal_structural_equality() {
        let int: Literal = "2".parse().unwrap();
        let float: Literal = "2.0".parse().unwrap();
        assert_ne!(int, float);
        assert_eq!(int, Literal::new(Scalar::TWO));
    }
}
