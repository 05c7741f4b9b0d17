//! Operation nodes.
//!
//! An operation owns its operands and a write-once result slot. Building
//! one runs the definition-set guard of its kind; evaluating it happens at
//! most once, on the first call to [`Operation::result`].

use once_cell::sync::OnceCell;
use smallvec::SmallVec;

use numerus_core::{Error, Result, Scalar};
use numerus_sets::{Range, Set};

use crate::eval;
use crate::round::RoundingMode;
use crate::number::Node;
use crate::Number;

/// Every operation numerus knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// a + b + …
    Addition,
    /// a - b - …
    Subtraction,
    /// a × b × …
    Multiplication,
    /// a ÷ b
    Division,
    /// Floating-point remainder of a ÷ b.
    Modulo,
    /// a^b
    Power,
    /// |a|
    Absolute,
    /// ⌊a⌋
    Floor,
    /// ⌈a⌉
    Ceil,
    /// a rounded to `precision` decimal digits.
    Round {
        /// Number of decimal digits kept.
        precision: u32,
        /// Tie-breaking rule.
        mode: RoundingMode,
    },
    /// √a
    SquareRoot,
    /// e^a
    Exponential,
    /// Base-2 logarithm.
    BinaryLogarithm,
    /// Base-e logarithm.
    NaturalLogarithm,
    /// Base-10 logarithm.
    CommonLogarithm,
    /// Sign of a: -1, 0 or 1.
    Signum,
    /// a!
    Factorial,
    /// sin(a)
    Sine,
    /// cos(a)
    Cosine,
    /// tan(a)
    Tangent,
    /// asin(a)
    ArcSine,
    /// acos(a)
    ArcCosine,
    /// atan(a)
    ArcTangent,
}

/// How many operands an operation takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one.
    Unary,
    /// Exactly two.
    Binary,
    /// One or more.
    Variadic,
}

impl Arity {
    /// Returns the minimum number of operands.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Arity::Unary | Arity::Variadic => 1,
            Arity::Binary => 2,
        }
    }

    /// Returns the maximum number of operands, if bounded.
    #[must_use]
    pub const fn max(self) -> Option<usize> {
        match self {
            Arity::Unary => Some(1),
            Arity::Binary => Some(2),
            Arity::Variadic => None,
        }
    }
}

impl OperationKind {
    /// Returns a human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            OperationKind::Addition => "addition",
            OperationKind::Subtraction => "subtraction",
            OperationKind::Multiplication => "multiplication",
            OperationKind::Division => "division",
            OperationKind::Modulo => "modulo",
            OperationKind::Power => "power",
            OperationKind::Absolute => "absolute",
            OperationKind::Floor => "floor",
            OperationKind::Ceil => "ceil",
            OperationKind::Round { .. } => "round",
            OperationKind::SquareRoot => "square root",
            OperationKind::Exponential => "exponential",
            OperationKind::BinaryLogarithm => "binary logarithm",
            OperationKind::NaturalLogarithm => "natural logarithm",
            OperationKind::CommonLogarithm => "common logarithm",
            OperationKind::Signum => "signum",
            OperationKind::Factorial => "factorial",
            OperationKind::Sine => "sine",
            OperationKind::Cosine => "cosine",
            OperationKind::Tangent => "tangent",
            OperationKind::ArcSine => "arc sine",
            OperationKind::ArcCosine => "arc cosine",
            OperationKind::ArcTangent => "arc tangent",
        }
    }

    /// Returns how many operands this operation takes.
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            OperationKind::Addition | OperationKind::Subtraction | OperationKind::Multiplication => {
                Arity::Variadic
            }
            OperationKind::Division | OperationKind::Modulo | OperationKind::Power => Arity::Binary,
            _ => Arity::Unary,
        }
    }

    /// Returns the set the single operand must belong to, if restricted.
    ///
    /// Factorial is restricted to ℕ, but reports negative integers with a
    /// dedicated error before this set is consulted.
    #[must_use]
    pub fn definition_set(self) -> Option<Set> {
        match self {
            OperationKind::BinaryLogarithm
            | OperationKind::NaturalLogarithm
            | OperationKind::CommonLogarithm => Some(Set::positive_reals()),
            OperationKind::ArcSine | OperationKind::ArcCosine => Some(Set::Range(
                Range::inclusive(Scalar::int(-1), Scalar::ONE),
            )),
            OperationKind::Factorial => Some(Set::NaturalNumbers),
            _ => None,
        }
    }
}

/// An operation node with its operands and memoized result.
#[derive(Debug)]
pub struct Operation {
    kind: OperationKind,
    operands: SmallVec<[Number; 2]>,
    result: OnceCell<Result<Number>>,
}

impl Operation {
    /// Builds a new operation node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughOperands`] or [`Error::TooManyOperands`]
    /// when the arity is not met, and
    /// the guard error of the kind when an operand is rejected:
    /// [`Error::DivisionByZero`], [`Error::FactorialMustBePositive`] or
    /// [`Error::OutOfDefinitionSet`]. Guarded operands are evaluated here,
    /// so their own evaluation errors surface as well.
    pub fn build(
        kind: OperationKind,
        operands: impl IntoIterator<Item = Number>,
    ) -> Result<Number> {
        let operands: SmallVec<[Number; 2]> = operands.into_iter().collect();
        let arity = kind.arity();
        if operands.len() < arity.min() {
            return Err(Error::NotEnoughOperands {
                operation: kind.name(),
                expected: arity.min(),
                given: operands.len(),
            });
        }
        if let Some(max) = arity.max() {
            if operands.len() > max {
                return Err(Error::TooManyOperands {
                    operation: kind.name(),
                    expected: max,
                    given: operands.len(),
                });
            }
        }

        guard(kind, &operands)?;

        Ok(Number::from_operation(Self {
            kind,
            operands,
            result: OnceCell::new(),
        }))
    }

    /// Returns the kind of this operation.
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the operands in order.
    #[must_use]
    pub fn operands(&self) -> &[Number] {
        &self.operands
    }

    /// Returns true if the result has already been computed.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.result.get().is_some()
    }

    /// Evaluates this operation, at most once.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating the operands or
    /// applying the operation. Errors are cached like results.
    pub fn result(&self) -> Result<Number> {
        if let Some(result) = self.result.get() {
            return result.clone();
        }
        self.force();
        self.result.get_or_init(|| self.evaluate()).clone()
    }

    /// Fills the result of every pending operation below `self`, children
    /// before parents, with an explicit stack instead of recursion.
    fn force(&self) {
        let mut stack: Vec<(&Operation, bool)> = vec![(self, false)];
        while let Some((op, expanded)) = stack.pop() {
            if op.is_evaluated() {
                continue;
            }
            if expanded {
                op.result.get_or_init(|| op.evaluate());
                continue;
            }
            stack.push((op, true));
            for operand in op.operands.iter().rev() {
                if let Node::Operation(child) = operand.node() {
                    if !child.is_evaluated() {
                        stack.push((child, false));
                    }
                }
            }
        }
    }

    fn evaluate(&self) -> Result<Number> {
        let operands = self
            .operands
            .iter()
            .map(Number::scalar)
            .collect::<Result<SmallVec<[Scalar; 4]>>>()?;
        let scalar = eval::apply(self.kind, &operands)?;
        tracing::trace!(operation = self.kind.name(), result = %scalar, "evaluated operation");
        Ok(Number::from_scalar(scalar))
    }
}

impl Drop for Operation {
    // Unlinks uniquely owned operands one level at a time so dropping a
    // deep chain does not recurse.
    fn drop(&mut self) {
        let mut pending: Vec<Number> = self.operands.drain(..).collect();
        while let Some(number) = pending.pop() {
            if let Some(Node::Operation(mut op)) = number.into_node() {
                pending.extend(op.operands.drain(..));
            }
        }
    }
}

fn guard(kind: OperationKind, operands: &[Number]) -> Result<()> {
    match kind {
        OperationKind::Division => {
            if operands[1].scalar()?.is_zero() {
                tracing::debug!(dividend = %operands[0], "rejected division by zero");
                return Err(Error::DivisionByZero {
                    dividend: operands[0].to_string(),
                });
            }
            Ok(())
        }
        OperationKind::Factorial => {
            let scalar = operands[0].scalar()?;
            if scalar.is_integer() && scalar.is_negative() {
                return Err(Error::FactorialMustBePositive {
                    value: integer_part(scalar),
                });
            }
            Set::NaturalNumbers.accept(&scalar)
        }
        _ => match kind.definition_set() {
            Some(set) => set.accept(&operands[0].scalar()?),
            None => Ok(()),
        },
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integer_part(scalar: Scalar) -> i64 {
    scalar
        .value()
        .as_int()
        .unwrap_or_else(|| scalar.as_f64() as i64)
}
