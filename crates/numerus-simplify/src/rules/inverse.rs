//! Chains of an operation followed by its inverse.
//!
//! Logarithms only accept positive operands, so `exp(ln(x))` can only be
//! built when `x > 0` and the rewrite to `x` is exact. Going the other way
//! needs no such condition.

use egg::{rewrite, Rewrite};

use crate::language::NumerusLang;

/// Returns inverse-pair rewrite rules.
#[must_use]
pub fn rules() -> Vec<Rewrite<NumerusLang, ()>> {
    vec![
        // (√x)² = x
        rewrite!("sq-sqrt"; "(^ (sqrt ?x) 2)" => "?x"),

        // √(x²) = |x|
        rewrite!("sqrt-sq"; "(sqrt (^ ?x 2))" => "(abs ?x)"),

        // e^ln(x) = ln(e^x) = x
        rewrite!("exp-ln"; "(exp (ln ?x))" => "?x"),
        rewrite!("ln-exp"; "(ln (exp ?x))" => "?x"),
        rewrite!("pow-e-ln"; "(^ e (ln ?x))" => "?x"),
        rewrite!("ln-pow-e"; "(ln (^ e ?x))" => "?x"),

        // 2^lb(x) = lb(2^x) = x
        rewrite!("pow-two-lb"; "(^ 2 (lb ?x))" => "?x"),
        rewrite!("lb-pow-two"; "(lb (^ 2 ?x))" => "?x"),

        // 10^lg(x) = lg(10^x) = x
        rewrite!("pow-ten-lg"; "(^ 10 (lg ?x))" => "?x"),
        rewrite!("lg-pow-ten"; "(lg (^ 10 ?x))" => "?x"),
    ]
}
