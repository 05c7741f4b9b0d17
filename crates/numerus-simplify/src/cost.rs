//! Cost functions for expression extraction.
//!
//! After saturation every e-class holds many equivalent terms; the cost
//! function decides which one comes back out.

use egg::{CostFunction, Id, Language};

use crate::language::NumerusLang;

/// Prefers the term with the fewest nodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstSizeCost;

impl CostFunction<NumerusLang> for AstSizeCost {
    type Cost = usize;

    fn cost<C>(&mut self, enode: &NumerusLang, mut costs: C) -> Self::Cost
    where
        C: FnMut(Id) -> Self::Cost,
    {
        enode.fold(1, |sum, id| sum + costs(id))
    }
}

/// Weighs nodes by how expensive they are to evaluate.
///
/// Literals are free, arithmetic is cheap and transcendental functions
/// dominate, so among terms of equal size the one with fewer `ln`, `sin`
/// and friends wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperationCost;

impl CostFunction<NumerusLang> for OperationCost {
    type Cost = usize;

    fn cost<C>(&mut self, enode: &NumerusLang, mut costs: C) -> Self::Cost
    where
        C: FnMut(Id) -> Self::Cost,
    {
        let base_cost = match enode {
            NumerusLang::Num(_) => 0,
            NumerusLang::Add(_) | NumerusLang::Sub(_) | NumerusLang::Mul(_) => 1,
            NumerusLang::Abs(_) | NumerusLang::Sgn(_) => 1,
            NumerusLang::Floor(_) | NumerusLang::Ceil(_) => 2,
            NumerusLang::Div(_) | NumerusLang::Mod(_) => 3,
            NumerusLang::RoundHalfUp(_)
            | NumerusLang::RoundHalfDown(_)
            | NumerusLang::RoundHalfEven(_)
            | NumerusLang::RoundHalfOdd(_) => 3,
            NumerusLang::Pow(_) | NumerusLang::Sqrt(_) => 5,
            NumerusLang::Factorial(_) => 8,
            NumerusLang::Exp(_)
            | NumerusLang::Lb(_)
            | NumerusLang::Ln(_)
            | NumerusLang::Lg(_) => 15,
            NumerusLang::Sin(_)
            | NumerusLang::Cos(_)
            | NumerusLang::Tan(_)
            | NumerusLang::Asin(_)
            | NumerusLang::Acos(_)
            | NumerusLang::Atan(_) => 20,
        };

        enode.fold(base_cost, |sum, id| sum + costs(id))
    }
}
