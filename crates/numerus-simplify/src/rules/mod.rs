//! Collapse rules organized by category.
//!
//! Every rule here is an identity over the reals. Floating-point overflow
//! and NaN are not preserved: `√(1e200²)` evaluates to `+∞` but collapses
//! to `|1e200|`. None of the rules folds numbers; evaluation stays with
//! the tree.

pub mod identity;
pub mod idempotent;
pub mod inverse;

use egg::Rewrite;

use crate::language::NumerusLang;

/// Collects all collapse rules.
#[must_use]
pub fn all_rules() -> Vec<Rewrite<NumerusLang, ()>> {
    let mut rules = Vec::new();
    rules.extend(identity::rules());
    rules.extend(inverse::rules());
    rules.extend(idempotent::rules());
    rules
}
