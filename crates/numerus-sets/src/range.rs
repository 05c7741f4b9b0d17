//! Numeric intervals.

use std::fmt;

use numerus_core::Scalar;

/// One end of a [`Range`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// The endpoint belongs to the range.
    Inclusive(Scalar),
    /// The endpoint is excluded from the range.
    Exclusive(Scalar),
}

impl Bound {
    /// Returns the endpoint.
    #[must_use]
    pub const fn scalar(self) -> Scalar {
        match self {
            Bound::Inclusive(s) | Bound::Exclusive(s) => s,
        }
    }

    /// Returns true if the endpoint is part of the range.
    #[must_use]
    pub const fn is_inclusive(self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }
}

/// An interval between two bounds.
///
/// Rendered `[a;b]` when inclusive and `]a;b[` when exclusive, one bracket
/// per end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: Bound,
    upper: Bound,
}

impl Range {
    /// Creates a range from its two bounds.
    #[must_use]
    pub const fn new(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// Creates `[lower;upper]`.
    #[must_use]
    pub const fn inclusive(lower: Scalar, upper: Scalar) -> Self {
        Self::new(Bound::Inclusive(lower), Bound::Inclusive(upper))
    }

    /// Creates `]lower;upper[`.
    #[must_use]
    pub const fn exclusive(lower: Scalar, upper: Scalar) -> Self {
        Self::new(Bound::Exclusive(lower), Bound::Exclusive(upper))
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> Bound {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> Bound {
        self.upper
    }

    /// Returns true if the scalar lies within the range.
    #[must_use]
    pub fn contains(&self, scalar: &Scalar) -> bool {
        let above = match self.lower {
            Bound::Inclusive(l) => *scalar >= l,
            Bound::Exclusive(l) => *scalar > l,
        };
        let below = match self.upper {
            Bound::Inclusive(u) => *scalar <= u,
            Bound::Exclusive(u) => *scalar < u,
        };
        above && below
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower.is_inclusive() { '[' } else { ']' };
        let close = if self.upper.is_inclusive() { ']' } else { '[' };
        write!(
            f,
            "{open}{};{}{close}",
            self.lower.scalar(),
            self.upper.scalar()
        )
    }
}
