//! The polymorphic number handle.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use numerus_core::{Constant, Error, Result, Scalar, Value};
use numerus_sets::Set;

use crate::operation::Operation;

/// An immutable number: either a scalar or an operation over other numbers.
///
/// Cloning is cheap and shares the underlying node, including its
/// memoized result. Equality and ordering are numeric: two differently
/// shaped trees that evaluate to the same value are equal.
#[derive(Clone)]
pub struct Number(Arc<Node>);

/// A borrowed view of what a [`Number`] is made of.
#[derive(Clone, Copy, Debug)]
pub enum View<'a> {
    /// A plain scalar.
    Scalar(Scalar),
    /// An operation node.
    Operation(&'a Operation),
}

#[derive(Debug)]
pub(crate) enum Node {
    Scalar(Scalar),
    Operation(Operation),
}

impl Number {
    /// Creates a scalar number from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotANumber`] if the value is NaN.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        Scalar::new(value).map(Self::from_scalar)
    }

    /// Wraps a scalar.
    #[must_use]
    pub fn from_scalar(scalar: Scalar) -> Self {
        Self(Arc::new(Node::Scalar(scalar)))
    }

    pub(crate) fn from_operation(operation: Operation) -> Self {
        Self(Arc::new(Node::Operation(operation)))
    }

    pub(crate) fn node(&self) -> &Node {
        &self.0
    }

    /// Takes the node out if this is its last handle.
    pub(crate) fn into_node(self) -> Option<Node> {
        Arc::into_inner(self.0)
    }

    /// Returns the address of the shared node.
    ///
    /// Clones report the same address; it stays unique while any of them
    /// is alive.
    #[must_use]
    pub fn as_ptr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast()
    }

    /// The integer 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_scalar(Scalar::ZERO)
    }

    /// The integer 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_scalar(Scalar::ONE)
    }

    /// The integer 2.
    #[must_use]
    pub fn two() -> Self {
        Self::from_scalar(Scalar::TWO)
    }

    /// Euler's number.
    #[must_use]
    pub fn e() -> Self {
        Self::from_scalar(Scalar::E)
    }

    /// π
    #[must_use]
    pub fn pi() -> Self {
        Self::from_scalar(Scalar::PI)
    }

    /// +∞
    #[must_use]
    pub fn infinity() -> Self {
        Self::from_scalar(Scalar::POSITIVE_INFINITY)
    }

    /// -∞
    #[must_use]
    pub fn negative_infinity() -> Self {
        Self::from_scalar(Scalar::NEGATIVE_INFINITY)
    }

    /// Returns what this number is made of.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        match self.node() {
            Node::Scalar(s) => View::Scalar(*s),
            Node::Operation(op) => View::Operation(op),
        }
    }

    /// Returns the scalar if this number is not an operation.
    #[must_use]
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self.node() {
            Node::Scalar(s) => Some(*s),
            Node::Operation(_) => None,
        }
    }

    /// Returns the operation node, if this number is one.
    #[must_use]
    pub fn as_operation(&self) -> Option<&Operation> {
        match self.node() {
            Node::Scalar(_) => None,
            Node::Operation(op) => Some(op),
        }
    }

    /// Returns true if this number is an operation node.
    #[must_use]
    pub fn is_operation(&self) -> bool {
        matches!(self.node(), Node::Operation(_))
    }

    /// Returns true if both handles share the same node.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Evaluates this number into a scalar node.
    ///
    /// A scalar returns itself. An operation evaluates at most once and
    /// hands out the same cached node on every later call.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating the tree.
    pub fn result(&self) -> Result<Number> {
        match self.node() {
            Node::Scalar(_) => Ok(self.clone()),
            Node::Operation(op) => op.result(),
        }
    }

    /// Evaluates this number into a scalar.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating the tree.
    pub fn scalar(&self) -> Result<Scalar> {
        match self.node() {
            Node::Scalar(s) => Ok(*s),
            Node::Operation(op) => op.result()?.scalar(),
        }
    }

    /// Evaluates this number into its raw value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating the tree.
    pub fn value(&self) -> Result<Value> {
        self.scalar().map(Scalar::value)
    }

    /// Returns true if both numbers evaluate to the same value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating either tree.
    pub fn equals(&self, other: &Number) -> Result<bool> {
        Ok(self.scalar()? == other.scalar()?)
    }

    /// Returns true if this number evaluates strictly above `other`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating either tree.
    pub fn higher_than(&self, other: &Number) -> Result<bool> {
        Ok(self.scalar()? > other.scalar()?)
    }

    /// Returns true if this number evaluates into the given set.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while evaluating the tree.
    pub fn belongs_to(&self, set: &Set) -> Result<bool> {
        Ok(set.contains(&self.scalar()?))
    }
}

/// Trees that fail to evaluate are never equal to anything.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let a = self.scalar().ok()?;
        let b = other.scalar().ok()?;
        a.partial_cmp(&b)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Number")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl From<Scalar> for Number {
    fn from(scalar: Scalar) -> Self {
        Self::from_scalar(scalar)
    }
}

impl From<Constant> for Number {
    fn from(constant: Constant) -> Self {
        Self::from_scalar(Scalar::from_constant(constant))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_scalar(Scalar::int(n))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from_scalar(Scalar::int(i64::from(n)))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self::from_scalar(Scalar::int(i64::from(n)))
    }
}

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self> {
        Self::new(f)
    }
}

impl TryFrom<Value> for Number {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(value)
    }
}
