//! Builders for every operation.
//!
//! Each builder returns a brand-new node and leaves `self` and its
//! arguments untouched.

use smallvec::SmallVec;

use numerus_core::{Error, Result};

use crate::operation::{Operation, OperationKind};
use crate::round::RoundingMode;
use crate::{IntoNumber, Number};

impl Number {
    // === N-ary constructors ===

    /// Builds the sum of one or more operands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughOperands`] when `operands` is empty, or the
    /// first conversion error.
    pub fn addition<I>(operands: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        nary(OperationKind::Addition, operands)
    }

    /// Builds the left-to-right difference of one or more operands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughOperands`] when `operands` is empty, or the
    /// first conversion error.
    pub fn subtraction<I>(operands: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        nary(OperationKind::Subtraction, operands)
    }

    /// Builds the product of one or more operands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughOperands`] when `operands` is empty, or the
    /// first conversion error.
    pub fn multiplication<I>(operands: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        nary(OperationKind::Multiplication, operands)
    }

    /// Builds an operation of any kind over the given operands.
    ///
    /// # Errors
    ///
    /// See [`Operation::build`].
    pub fn operation<I>(kind: OperationKind, operands: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        nary(kind, operands)
    }

    // === Arithmetic ===

    /// `self + other`
    ///
    /// # Errors
    ///
    /// Returns the conversion error of `other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: impl IntoNumber) -> Result<Number> {
        self.add_all([other])
    }

    /// `self + a + b + …` as a single flat node.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn add_all<I>(&self, rest: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        self.chain(OperationKind::Addition, rest)
    }

    /// `self - other`
    ///
    /// # Errors
    ///
    /// Returns the conversion error of `other`.
    pub fn subtract(&self, other: impl IntoNumber) -> Result<Number> {
        self.subtract_all([other])
    }

    /// `self - a - b - …` as a single flat node.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn subtract_all<I>(&self, rest: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        self.chain(OperationKind::Subtraction, rest)
    }

    /// `self × other`
    ///
    /// # Errors
    ///
    /// Returns the conversion error of `other`.
    pub fn multiply_by(&self, other: impl IntoNumber) -> Result<Number> {
        self.multiply_by_all([other])
    }

    /// `self × a × b × …` as a single flat node.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn multiply_by_all<I>(&self, rest: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        self.chain(OperationKind::Multiplication, rest)
    }

    /// `self ÷ divisor`
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the divisor evaluates to zero.
    /// The divisor is evaluated immediately.
    pub fn divide_by(&self, divisor: impl IntoNumber) -> Result<Number> {
        self.binary(OperationKind::Division, divisor)
    }

    /// Floating-point remainder of `self ÷ divisor`.
    ///
    /// # Errors
    ///
    /// Returns the conversion error of `divisor`.
    pub fn modulo(&self, divisor: impl IntoNumber) -> Result<Number> {
        self.binary(OperationKind::Modulo, divisor)
    }

    /// `self^exponent`
    ///
    /// # Errors
    ///
    /// Returns the conversion error of `exponent`.
    pub fn power(&self, exponent: impl IntoNumber) -> Result<Number> {
        self.binary(OperationKind::Power, exponent)
    }

    // === Unary ===

    /// `|self|`
    ///
    /// # Errors
    ///
    /// Never fails today; kept fallible like every builder.
    pub fn absolute(&self) -> Result<Number> {
        self.unary(OperationKind::Absolute)
    }

    /// `√self`
    ///
    /// Negative operands are only rejected when evaluated.
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn square_root(&self) -> Result<Number> {
        self.unary(OperationKind::SquareRoot)
    }

    /// `e^self`
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn exponential(&self) -> Result<Number> {
        self.unary(OperationKind::Exponential)
    }

    /// `lb(self)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDefinitionSet`] unless `self` evaluates into
    /// `]0;+∞[`.
    pub fn binary_logarithm(&self) -> Result<Number> {
        self.unary(OperationKind::BinaryLogarithm)
    }

    /// `ln(self)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDefinitionSet`] unless `self` evaluates into
    /// `]0;+∞[`.
    pub fn natural_logarithm(&self) -> Result<Number> {
        self.unary(OperationKind::NaturalLogarithm)
    }

    /// `lg(self)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDefinitionSet`] unless `self` evaluates into
    /// `]0;+∞[`.
    pub fn common_logarithm(&self) -> Result<Number> {
        self.unary(OperationKind::CommonLogarithm)
    }

    /// `sgn(self)`
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn signum(&self) -> Result<Number> {
        self.unary(OperationKind::Signum)
    }

    /// `⌊self⌋`
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn floor(&self) -> Result<Number> {
        self.unary(OperationKind::Floor)
    }

    /// `⌈self⌉`
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn ceil(&self) -> Result<Number> {
        self.unary(OperationKind::Ceil)
    }

    /// `self!`
    ///
    /// # Errors
    ///
    /// Returns [`Error::FactorialMustBePositive`] for negative integers and
    /// [`Error::OutOfDefinitionSet`] for any other value outside ℕ.
    pub fn factorial(&self) -> Result<Number> {
        self.unary(OperationKind::Factorial)
    }

    // === Rounding ===

    /// Rounds to `precision` decimal digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionMustBePositive`] if `precision` is negative.
    pub fn round(&self, precision: i64, mode: RoundingMode) -> Result<Number> {
        if precision < 0 {
            return Err(Error::PrecisionMustBePositive { precision });
        }
        let precision = u32::try_from(precision).unwrap_or(u32::MAX);
        self.unary(OperationKind::Round { precision, mode })
    }

    /// Rounds with ties away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionMustBePositive`] if `precision` is negative.
    pub fn round_up(&self, precision: i64) -> Result<Number> {
        self.round(precision, RoundingMode::HalfUp)
    }

    /// Rounds with ties toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionMustBePositive`] if `precision` is negative.
    pub fn round_down(&self, precision: i64) -> Result<Number> {
        self.round(precision, RoundingMode::HalfDown)
    }

    /// Rounds with ties to the even neighbour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionMustBePositive`] if `precision` is negative.
    pub fn round_even(&self, precision: i64) -> Result<Number> {
        self.round(precision, RoundingMode::HalfEven)
    }

    /// Rounds with ties to the odd neighbour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrecisionMustBePositive`] if `precision` is negative.
    pub fn round_odd(&self, precision: i64) -> Result<Number> {
        self.round(precision, RoundingMode::HalfOdd)
    }

    // === Trigonometry ===

    /// `sin(self)`, in radians.
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn sine(&self) -> Result<Number> {
        self.unary(OperationKind::Sine)
    }

    /// `cos(self)`, in radians.
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn cosine(&self) -> Result<Number> {
        self.unary(OperationKind::Cosine)
    }

    /// `tan(self)`, in radians.
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn tangent(&self) -> Result<Number> {
        self.unary(OperationKind::Tangent)
    }

    /// `asin(self)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDefinitionSet`] unless `self` is in `[-1;1]`.
    pub fn arc_sine(&self) -> Result<Number> {
        self.unary(OperationKind::ArcSine)
    }

    /// `acos(self)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDefinitionSet`] unless `self` is in `[-1;1]`.
    pub fn arc_cosine(&self) -> Result<Number> {
        self.unary(OperationKind::ArcCosine)
    }

    /// `atan(self)`
    ///
    /// # Errors
    ///
    /// Never fails at construction.
    pub fn arc_tangent(&self) -> Result<Number> {
        self.unary(OperationKind::ArcTangent)
    }

    // === Helpers ===

    fn unary(&self, kind: OperationKind) -> Result<Number> {
        Operation::build(kind, [self.clone()])
    }

    fn binary(&self, kind: OperationKind, other: impl IntoNumber) -> Result<Number> {
        Operation::build(kind, [self.clone(), other.into_number()?])
    }

    fn chain<I>(&self, kind: OperationKind, rest: I) -> Result<Number>
    where
        I: IntoIterator,
        I::Item: IntoNumber,
    {
        let mut operands: SmallVec<[Number; 2]> = SmallVec::new();
        operands.push(self.clone());
        for operand in rest {
            operands.push(operand.into_number()?);
        }
        Operation::build(kind, operands)
    }
}

fn nary<I>(kind: OperationKind, operands: I) -> Result<Number>
where
    I: IntoIterator,
    I::Item: IntoNumber,
{
    let operands = operands
        .into_iter()
        .map(IntoNumber::into_number)
        .collect::<Result<SmallVec<[Number; 2]>>>()?;
    Operation::build(kind, operands)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use numerus_core::{Scalar, Value};

    use super::*;

    fn n(i: i64) -> Number {
        Number::from(i)
    }

    fn f(x: f64) -> Number {
        Number::try_from(x).unwrap()
    }

    #[test]
    fn test_addition_scenario() {
        let sum = Number::addition([n(24), n(42), n(66)]).unwrap();
        assert_eq!(sum.value().unwrap(), Value::Int(132));
        assert!(sum.value().unwrap().is_int());
    }

    #[test]
    fn test_builders_do_not_mutate() {
        let a = n(2);
        let b = a.add(n(3)).unwrap();
        let c = b.multiply_by(n(4)).unwrap();
        assert_eq!(a.value().unwrap(), Value::Int(2));
        assert_eq!(b.value().unwrap(), Value::Int(5));
        assert_eq!(c.value().unwrap(), Value::Int(20));
    }

    #[test]
    fn test_variadic_builders_stay_flat() {
        let sum = n(1).add_all([2, 3, 4]).unwrap();
        assert_eq!(sum.as_operation().unwrap().operands().len(), 4);
        assert_eq!(sum.value().unwrap(), Value::Int(10));

        let diff = n(10).subtract_all([1, 2]).unwrap();
        assert_eq!(diff.to_string(), "10 - 1 - 2");
        assert_eq!(diff.value().unwrap(), Value::Int(7));

        let product = n(2).multiply_by_all([3, 4]).unwrap();
        assert_eq!(product.value().unwrap(), Value::Int(24));
    }

    #[test]
    fn test_empty_nary_is_rejected() {
        let empty: [Number; 0] = [];
        assert!(matches!(
            Number::multiplication(empty),
            Err(Error::NotEnoughOperands { operation: "multiplication", .. })
        ));
        assert_eq!(Number::subtraction([n(5)]).unwrap().value().unwrap(), Value::Int(5));
    }

    #[test]
    fn test_division() {
        assert_eq!(n(4).divide_by(2).unwrap().value().unwrap(), Value::Int(2));
        assert_eq!(n(3).divide_by(2).unwrap().value().unwrap(), Value::Float(1.5));
    }

    #[test]
    fn test_division_by_zero_is_eager() {
        assert_eq!(
            n(4).divide_by(0).unwrap_err(),
            Error::DivisionByZero {
                dividend: "4".to_string()
            }
        );
        let zero = n(2).subtract(2).unwrap();
        assert!(matches!(
            n(4).divide_by(zero),
            Err(Error::DivisionByZero { .. })
        ));
        assert!(n(4).divide_by(f(0.0)).is_err());
    }

    #[test]
    fn test_power_scenario() {
        let p = n(2).power(10).unwrap();
        assert_eq!(p.value().unwrap(), Value::Int(1024));
    }

    #[test]
    fn test_logarithms_reject_non_positive() {
        for build in [
            Number::binary_logarithm as fn(&Number) -> Result<Number>,
            Number::natural_logarithm,
            Number::common_logarithm,
        ] {
            let err = build(&n(0)).unwrap_err();
            assert!(matches!(err, Error::OutOfDefinitionSet { .. }));
            assert!(err.to_string().contains("0 ∉"));
            assert!(build(&n(-3)).is_err());
            assert!(build(&Number::infinity()).is_err());
            assert!(build(&n(8)).is_ok());
        }
    }

    #[test]
    fn test_logarithm_guard_is_eager() {
        let zero = n(1).subtract(1).unwrap();
        let err = zero.natural_logarithm().unwrap_err();
        assert_eq!(err.to_string(), "0 ∉ ]0;+∞[");
        assert!(zero.as_operation().unwrap().is_evaluated());
    }

    #[test]
    fn test_logarithm_values() {
        assert_eq!(n(1024).binary_logarithm().unwrap().value().unwrap(), Value::Float(10.0));
        let ln = Number::e().natural_logarithm().unwrap().value().unwrap().as_f64();
        assert!((ln - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(n(4).factorial().unwrap().value().unwrap(), Value::Int(24));
        assert_eq!(
            n(-1).factorial().unwrap_err(),
            Error::FactorialMustBePositive { value: -1 }
        );
        assert_eq!(
            f(-2.0).factorial().unwrap_err(),
            Error::FactorialMustBePositive { value: -2 }
        );
        let err = f(2.5).factorial().unwrap_err();
        assert_eq!(err.to_string(), "2.5 ∉ ℕ");
        assert_eq!(f(3.0).factorial().unwrap().value().unwrap(), Value::Int(6));
    }

    #[test]
    fn test_rounding_modes() {
        let x = f(42.5);
        assert_eq!(x.round_up(0).unwrap().value().unwrap(), Value::Float(43.0));
        assert_eq!(x.round_down(0).unwrap().value().unwrap(), Value::Float(42.0));
        assert_eq!(x.round_even(0).unwrap().value().unwrap(), Value::Float(42.0));
        assert_eq!(x.round_odd(0).unwrap().value().unwrap(), Value::Float(43.0));
        assert!(!x.round_up(0).unwrap().value().unwrap().is_int());
    }

    #[test]
    fn test_negative_precision() {
        assert_eq!(
            f(42.5).round_up(-1).unwrap_err(),
            Error::PrecisionMustBePositive { precision: -1 }
        );
    }

    #[test]
    fn test_inverse_trigonometry_domain() {
        assert!(n(2).arc_sine().is_err());
        assert!(f(-1.5).arc_cosine().is_err());
        let half_pi = n(1).arc_sine().unwrap().value().unwrap().as_f64();
        assert!((half_pi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(n(1).arc_cosine().unwrap().value().unwrap().as_f64(), 0.0);
        assert!(n(1000).arc_tangent().is_ok());
    }

    #[test]
    fn test_square_root_rejects_negative_at_evaluation() {
        let root = n(-4).square_root().unwrap();
        assert_eq!(root.value().unwrap_err(), Error::NotANumber);
        assert_eq!(n(16).square_root().unwrap().value().unwrap(), Value::Float(4.0));
    }

    #[test]
    fn test_signum_absolute_floor_ceil() {
        assert_eq!(f(-0.5).signum().unwrap().value().unwrap(), Value::Int(-1));
        assert_eq!(n(-7).absolute().unwrap().value().unwrap(), Value::Int(7));
        assert_eq!(n(42).floor().unwrap().to_string(), "⌊42⌋");
        assert_eq!(n(42).floor().unwrap().result().unwrap().to_string(), "42.0");
        assert_eq!(f(41.2).ceil().unwrap().value().unwrap(), Value::Float(42.0));
    }

    #[test]
    fn test_result_is_canonicalised() {
        let e = n(1).exponential().unwrap();
        let result = e.result().unwrap();
        assert!(result.as_scalar().is_some());
        let zero = n(5).subtract(5).unwrap().result().unwrap();
        assert_eq!(zero.as_scalar().unwrap().constant(), Some(numerus_core::Constant::Zero));
        assert_eq!(
            n(10).multiply_by(10).unwrap().scalar().unwrap(),
            Scalar::HUNDRED
        );
    }

    #[test]
    fn test_operands_accept_raw_values() {
        let x = n(1).add(2.5).unwrap();
        assert_eq!(x.value().unwrap(), Value::Float(3.5));
        assert_eq!(n(1).add(f64::NAN).unwrap_err(), Error::NotANumber);
    }
}
