//! Conversion between [`Number`] trees and e-graph terms.
//!
//! Lowering walks a tree with an explicit stack and appends each distinct
//! node to a [`RecExpr`] in post-order. Lifting replays a term in the same order and rebuilds every
//! node through the regular builders, so definition-set guards run again.

use egg::{Id, RecExpr};
use hashbrown::HashMap;

use numerus_core::Scalar;
use numerus_expr::{Number, Operation, OperationKind, RoundingMode, View};

use crate::error::CollapseError;
use crate::language::{Literal, NumerusLang};

/// Lowers a number into an e-graph term.
///
/// Nodes shared between several parents are emitted once, so the term
/// grows with the number of distinct nodes rather than the number of
/// paths through the tree.
#[must_use]
pub fn lower(number: &Number) -> RecExpr<NumerusLang> {
    let mut expr = RecExpr::default();
    let mut lowered: HashMap<*const (), Id> = HashMap::new();
    let mut stack: Vec<(&Number, bool)> = vec![(number, false)];

    while let Some((current, expanded)) = stack.pop() {
        let key = current.as_ptr();
        if lowered.contains_key(&key) {
            continue;
        }
        let op = match current.view() {
            View::Scalar(scalar) => {
                let id = expr.add(NumerusLang::Num(Literal::new(scalar)));
                lowered.insert(key, id);
                continue;
            }
            View::Operation(op) => op,
        };
        if !expanded {
            stack.push((current, true));
            stack.extend(op.operands().iter().rev().map(|operand| (operand, false)));
            continue;
        }

        let ids: Vec<Id> = op
            .operands()
            .iter()
            .map(|operand| lowered[&operand.as_ptr()])
            .collect();
        let id = lower_operation(op, ids, &mut expr);
        lowered.insert(key, id);
    }

    expr
}

fn lower_operation(op: &Operation, ids: Vec<Id>, expr: &mut RecExpr<NumerusLang>) -> Id {
    let pair = [ids[0], *ids.get(1).unwrap_or(&ids[0])];
    let single = ids[0];

    let node = match op.kind() {
        OperationKind::Addition => NumerusLang::Add(ids.into_boxed_slice()),
        OperationKind::Subtraction => NumerusLang::Sub(ids.into_boxed_slice()),
        OperationKind::Multiplication => NumerusLang::Mul(ids.into_boxed_slice()),
        OperationKind::Division => NumerusLang::Div(pair),
        OperationKind::Modulo => NumerusLang::Mod(pair),
        OperationKind::Power => NumerusLang::Pow(pair),
        OperationKind::Absolute => NumerusLang::Abs(single),
        OperationKind::Signum => NumerusLang::Sgn(single),
        OperationKind::Floor => NumerusLang::Floor(single),
        OperationKind::Ceil => NumerusLang::Ceil(single),
        OperationKind::Round { precision, mode } => {
            let digits = expr.add(NumerusLang::Num(Literal::new(Scalar::int(i64::from(
                precision,
            )))));
            let children = [single, digits];
            match mode {
                RoundingMode::HalfUp => NumerusLang::RoundHalfUp(children),
                RoundingMode::HalfDown => NumerusLang::RoundHalfDown(children),
                RoundingMode::HalfEven => NumerusLang::RoundHalfEven(children),
                RoundingMode::HalfOdd => NumerusLang::RoundHalfOdd(children),
            }
        }
        OperationKind::Factorial => NumerusLang::Factorial(single),
        OperationKind::SquareRoot => NumerusLang::Sqrt(single),
        OperationKind::Exponential => NumerusLang::Exp(single),
        OperationKind::BinaryLogarithm => NumerusLang::Lb(single),
        OperationKind::NaturalLogarithm => NumerusLang::Ln(single),
        OperationKind::CommonLogarithm => NumerusLang::Lg(single),
        OperationKind::Sine => NumerusLang::Sin(single),
        OperationKind::Cosine => NumerusLang::Cos(single),
        OperationKind::Tangent => NumerusLang::Tan(single),
        OperationKind::ArcSine => NumerusLang::Asin(single),
        OperationKind::ArcCosine => NumerusLang::Acos(single),
        OperationKind::ArcTangent => NumerusLang::Atan(single),
    };
    expr.add(node)
}

/// Rebuilds a number from an e-graph term.
///
/// # Errors
///
/// Returns [`CollapseError::Empty`] for an empty term,
/// [`CollapseError::InvalidPrecision`] when a rounding node does not carry
/// a whole non-negative precision, and [`CollapseError::Number`] when a
/// builder rejects its operands.
pub fn lift(expr: &RecExpr<NumerusLang>) -> Result<Number, CollapseError> {
    let nodes = expr.as_ref();
    let mut built: Vec<Number> = Vec::with_capacity(nodes.len());

    for node in nodes {
        let number = match node {
            NumerusLang::Num(lit) => Number::from_scalar(lit.scalar()),
            NumerusLang::Add(ids) => build(OperationKind::Addition, &built, ids)?,
            NumerusLang::Sub(ids) => build(OperationKind::Subtraction, &built, ids)?,
            NumerusLang::Mul(ids) => build(OperationKind::Multiplication, &built, ids)?,
            NumerusLang::Div(ids) => build(OperationKind::Division, &built, ids)?,
            NumerusLang::Mod(ids) => build(OperationKind::Modulo, &built, ids)?,
            NumerusLang::Pow(ids) => build(OperationKind::Power, &built, ids)?,
            NumerusLang::Abs(id) => build(OperationKind::Absolute, &built, &[*id])?,
            NumerusLang::Sgn(id) => build(OperationKind::Signum, &built, &[*id])?,
            NumerusLang::Floor(id) => build(OperationKind::Floor, &built, &[*id])?,
            NumerusLang::Ceil(id) => build(OperationKind::Ceil, &built, &[*id])?,
            NumerusLang::RoundHalfUp([x, p]) => round(RoundingMode::HalfUp, nodes, &built, *x, *p)?,
            NumerusLang::RoundHalfDown([x, p]) => round(RoundingMode::HalfDown, nodes, &built, *x, *p)?,
            NumerusLang::RoundHalfEven([x, p]) => round(RoundingMode::HalfEven, nodes, &built, *x, *p)?,
            NumerusLang::RoundHalfOdd([x, p]) => round(RoundingMode::HalfOdd, nodes, &built, *x, *p)?,
            NumerusLang::Factorial(id) => build(OperationKind::Factorial, &built, &[*id])?,
            NumerusLang::Sqrt(id) => build(OperationKind::SquareRoot, &built, &[*id])?,
            NumerusLang::Exp(id) => build(OperationKind::Exponential, &built, &[*id])?,
            NumerusLang::Lb(id) => build(OperationKind::BinaryLogarithm, &built, &[*id])?,
            NumerusLang::Ln(id) => build(OperationKind::NaturalLogarithm, &built, &[*id])?,
            NumerusLang::Lg(id) => build(OperationKind::CommonLogarithm, &built, &[*id])?,
            NumerusLang::Sin(id) => build(OperationKind::Sine, &built, &[*id])?,
            NumerusLang::Cos(id) => build(OperationKind::Cosine, &built, &[*id])?,
            NumerusLang::Tan(id) => build(OperationKind::Tangent, &built, &[*id])?,
            NumerusLang::Asin(id) => build(OperationKind::ArcSine, &built, &[*id])?,
            NumerusLang::Acos(id) => build(OperationKind::ArcCosine, &built, &[*id])?,
            NumerusLang::Atan(id) => build(OperationKind::ArcTangent, &built, &[*id])?,
        };
        built.push(number);
    }

    built.pop().ok_or(CollapseError::Empty)
}

fn build(kind: OperationKind, built: &[Number], ids: &[Id]) -> Result<Number, CollapseError> {
    let operands = ids.iter().map(|id| built[usize::from(*id)].clone());
    Ok(Number::operation(kind, operands)?)
}

fn round(
    mode: RoundingMode,
    nodes: &[NumerusLang],
    built: &[Number],
    operand: Id,
    precision: Id,
) -> Result<Number, CollapseError> {
    let digits = &nodes[usize::from(precision)];
    let precision = digits
        .as_num()
        .and_then(|scalar| scalar.value().as_int())
        .and_then(|int| u32::try_from(int).ok())
        .ok_or_else(|| CollapseError::InvalidPrecision(built[usize::from(precision)].to_string()))?;
    build(OperationKind::Round { precision, mode }, built, &[operand])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(number: &Number) -> Number {
        lift(&lower(number)).unwrap()
    }

    #[test]
    fn test_lower_shape() {
        let sum = Number::from(24).add_all([42, 66]).unwrap();
        assert_eq!(lower(&sum).to_string(), "(+ 24 42 66)");

        let rooted = Number::from(2).square_root().unwrap().power(2).unwrap();
        assert_eq!(lower(&rooted).to_string(), "(^ (sqrt 2) 2)");
    }

    #[test]
    fn test_lower_round_carries_precision() {
        let rounded = Number::try_from(42.125).unwrap().round_even(2).unwrap();
        assert_eq!(lower(&rounded).to_string(), "(round-half-even 42.125 2)");
    }

    #[test]
    fn test_roundtrip_preserves_rendering() {
        let tree = Number::from(8)
            .binary_logarithm()
            .unwrap()
            .add(Number::from(3).factorial().unwrap())
            .unwrap()
            .round_odd(1)
            .unwrap();
        let back = roundtrip(&tree);
        assert_eq!(back.to_string(), tree.to_string());
        assert!(back.equals(&tree).unwrap());
    }

    #[test]
    fn test_roundtrip_constants() {
        let tree = Number::e().multiply_by(Number::pi()).unwrap();
        assert_eq!(lower(&tree).to_string(), "(* e pi)");
        assert_eq!(roundtrip(&tree).to_string(), tree.to_string());
    }

    #[test]
    fn test_lift_reruns_guards() {
        let expr: RecExpr<NumerusLang> = "(/ 1 0)".parse().unwrap();
        assert!(matches!(
            lift(&expr),
            Err(CollapseError::Number(numerus_core::Error::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn test_lift_rejects_fractional_precision() {
        let expr: RecExpr<NumerusLang> = "(round-half-up 1.5 0.5)".parse().unwrap();
        assert!(matches!(lift(&expr), Err(CollapseError::InvalidPrecision(_))));
    }

    #[test]
    fn test_lower_emits_shared_nodes_once() {
        let mut doubled = Number::from(1);
        for _ in 0..30 {
            doubled = doubled.add(&doubled).unwrap();
        }
        let expr = lower(&doubled);
        assert_eq!(expr.as_ref().len(), 31);

        let back = lift(&expr).unwrap();
        assert_eq!(back.value().unwrap(), numerus_core::Value::Int(1 << 30));
    }

    #[test]
    fn test_lower_deep_chain() {
        let mut chain = Number::from(0);
        for _ in 0..100_000 {
            chain = chain.add(1).unwrap();
        }
        assert_eq!(lower(&chain).as_ref().len(), 200_001);
    }

    #[test]
    fn test_lift_empty() {
        let expr = RecExpr::<NumerusLang>::default();
        assert_eq!(lift(&expr).unwrap_err(), CollapseError::Empty);
    }
}
