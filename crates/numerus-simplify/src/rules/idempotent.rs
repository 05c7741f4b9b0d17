//! Operations whose second application changes nothing.

use egg::{rewrite, Rewrite};

use crate::language::NumerusLang;

/// Returns idempotence rewrite rules.
#[must_use]
pub fn rules() -> Vec<Rewrite<NumerusLang, ()>> {
    vec![
        rewrite!("abs-abs"; "(abs (abs ?x))" => "(abs ?x)"),
        rewrite!("sgn-sgn"; "(sgn (sgn ?x))" => "(sgn ?x)"),
        rewrite!("floor-floor"; "(floor (floor ?x))" => "(floor ?x)"),
        rewrite!("ceil-ceil"; "(ceil (ceil ?x))" => "(ceil ?x)"),

        // The inner result is already whole
        rewrite!("floor-ceil"; "(floor (ceil ?x))" => "(ceil ?x)"),
        rewrite!("ceil-floor"; "(ceil (floor ?x))" => "(floor ?x)"),
        rewrite!("abs-sq"; "(abs (^ ?x 2))" => "(^ ?x 2)"),
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
    fn test_repeated_application() {
        assert_eq!(collapse("(abs (abs (abs -4)))"), "(abs -4)");
        assert_eq!(collapse("(sgn (sgn -4))"), "(sgn -4)");
        assert_eq!(collapse("(floor (floor 4.5))"), "(floor 4.5)");
    }

    #[test]
    fn test_mixed_rounding() {
        assert_eq!(collapse("(floor (ceil 4.5))"), "(ceil 4.5)");
        assert_eq!(collapse("(ceil (floor 4.5))"), "(floor 4.5)");
    }

    #[test]
    fn test_abs_of_square() {
        assert_eq!(collapse("(abs (^ -3 2))"), "(^ -3 2)");
    }
}
