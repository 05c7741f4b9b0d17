//! Neutral elements and single-operand chains.

use egg::{rewrite, Rewrite};

use crate::language::NumerusLang;

/// Returns identity rewrite rules.
#[must_use]
pub fn rules() -> Vec<Rewrite<NumerusLang, ()>> {
    vec![
        // x + 0 = 0 + x = x
        rewrite!("add-zero"; "(+ ?a 0)" => "?a"),
        rewrite!("zero-add"; "(+ 0 ?a)" => "?a"),

        // x - 0 = x
        rewrite!("sub-zero"; "(- ?a 0)" => "?a"),

        // x * 1 = 1 * x = x
        rewrite!("mul-one"; "(* ?a 1)" => "?a"),
        rewrite!("one-mul"; "(* 1 ?a)" => "?a"),

        // x / 1 = x
        rewrite!("div-one"; "(/ ?a 1)" => "?a"),

        // x^1 = x
        rewrite!("pow-one"; "(^ ?a 1)" => "?a"),

        // A chain over a single operand is that operand
        rewrite!("add-single"; "(+ ?a)" => "?a"),
        rewrite!("sub-single"; "(- ?a)" => "?a"),
        rewrite!("mul-single"; "(* ?a)" => "?a"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::AstSizeCost;
    use egg::{Extractor, RecExpr, Runner};

    fn collapse(text: &str) -> String {
        let expr: RecExpr<NumerusLang> = text.parse().unwrap();
        let runner = Runner::default().with_expr(&expr).run(&rules());
        let extractor = Extractor::new(&runner.egraph, AstSizeCost);
        extractor.find_best(runner.roots[0]).1.to_string()
    }

    #[test]
    fn test_neutral_elements() {
        assert_eq!(collapse("(+ (sqrt 3) 0)"), "(sqrt 3)");
        assert_eq!(collapse("(* 1 (ln 3))"), "(ln 3)");
        assert_eq!(collapse("(/ (- 5 0) 1)"), "5");
        assert_eq!(collapse("(^ (exp 2) 1)"), "(exp 2)");
    }

    #[test]
    fn test_float_zero_is_not_rewritten() {
        // 0.0 and 0 are distinct literals
        assert_eq!(collapse("(+ 3 0.0)"), "(+ 3 0.0)");
    }

    #[test]
    fn test_single_operand_chain() {
        assert_eq!(collapse("(* (+ 4))"), "4");
    }

    #[test]
    fn test_wider_chains_are_kept() {
        assert_eq!(collapse("(+ 1 2 0)"), "(+ 1 2 0)");
    }
}
