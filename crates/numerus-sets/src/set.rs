//! Composable definition sets.

use std::fmt;

use numerus_core::{Error, Result, Scalar};

use crate::Range;

/// A set of real numbers an operation is defined on.
#[derive(Clone, Debug, PartialEq)]
pub enum Set {
    /// ℝ
    Reals,
    /// ℝ*, the reals without zero.
    RealsExceptZero,
    /// ℤ
    Integers,
    /// ℤ*, the integers without zero.
    IntegersExceptZero,
    /// ℕ, the non-negative integers.
    NaturalNumbers,
    /// ℕ*, the positive integers.
    NaturalNumbersExceptZero,
    /// An explicit finite set of values.
    Enumerated(Vec<Scalar>),
    /// An interval.
    Range(Range),
    /// Values in either set.
    Union(Box<Set>, Box<Set>),
    /// Values in both sets.
    Intersection(Box<Set>, Box<Set>),
}

impl Set {
    /// The domain of logarithms, `]0;+∞[`.
    #[must_use]
    pub fn positive_reals() -> Self {
        Set::Range(Range::exclusive(Scalar::ZERO, Scalar::POSITIVE_INFINITY))
    }

    /// Creates an enumerated set.
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = Scalar>) -> Self {
        Set::Enumerated(values.into_iter().collect())
    }

    /// Returns the union of both sets.
    #[must_use]
    pub fn union(self, other: Set) -> Self {
        Set::Union(Box::new(self), Box::new(other))
    }

    /// Returns the intersection of both sets.
    #[must_use]
    pub fn intersection(self, other: Set) -> Self {
        Set::Intersection(Box::new(self), Box::new(other))
    }

    /// Returns true if the scalar belongs to this set.
    #[must_use]
    pub fn contains(&self, scalar: &Scalar) -> bool {
        match self {
            Set::Reals => !scalar.is_infinite(),
            Set::RealsExceptZero => !scalar.is_infinite() && !scalar.is_zero(),
            Set::Integers => scalar.is_integer(),
            Set::IntegersExceptZero => scalar.is_integer() && !scalar.is_zero(),
            Set::NaturalNumbers => scalar.is_integer() && !scalar.is_negative(),
            Set::NaturalNumbersExceptZero => {
                scalar.is_integer() && !scalar.is_negative() && !scalar.is_zero()
            }
            Set::Enumerated(values) => values.iter().any(|v| v == scalar),
            Set::Range(range) => range.contains(scalar),
            Set::Union(a, b) => a.contains(scalar) || b.contains(scalar),
            Set::Intersection(a, b) => a.contains(scalar) && b.contains(scalar),
        }
    }

    /// Checks that the scalar belongs to this set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDefinitionSet`] naming the value and this set.
    pub fn accept(&self, scalar: &Scalar) -> Result<()> {
        if self.contains(scalar) {
            return Ok(());
        }
        tracing::debug!(value = %scalar, set = %self, "value rejected by definition set");
        Err(Error::OutOfDefinitionSet {
            value: scalar.to_string(),
            set: self.to_string(),
        })
    }

    fn is_composite(&self) -> bool {
        matches!(self, Set::Union(..) | Set::Intersection(..))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_composite() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Set::Reals => f.write_str("ℝ"),
            Set::RealsExceptZero => f.write_str("ℝ*"),
            Set::Integers => f.write_str("ℤ"),
            Set::IntegersExceptZero => f.write_str("ℤ*"),
            Set::NaturalNumbers => f.write_str("ℕ"),
            Set::NaturalNumbersExceptZero => f.write_str("ℕ*"),
            Set::Enumerated(values) if values.is_empty() => f.write_str("∅"),
            Set::Enumerated(values) => {
                f.write_str("{")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
            Set::Range(range) => write!(f, "{range}"),
            Set::Union(a, b) => {
                a.fmt_operand(f)?;
                f.write_str(" ∪ ")?;
                b.fmt_operand(f)
            }
            Set::Intersection(a, b) => {
                a.fmt_operand(f)?;
                f.write_str(" ∩ ")?;
                b.fmt_operand(f)
            }
        }
    }
}

impl From<Range> for Set {
    fn from(range: Range) -> Self {
        Set::Range(range)
    }
}
