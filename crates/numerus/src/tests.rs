//! End-to-end tests across the numerus crates.

#[cfg(test)]
mod integration_tests {
    use std::thread;

    use approx::assert_relative_eq;

    use crate::prelude::*;

    fn n(i: i64) -> Number {
        Number::from(i)
    }

    fn f(x: f64) -> Number {
        Number::try_from(x).unwrap()
    }

    #[test]
    fn test_sum_of_three() {
        let sum = Number::addition([24, 42, 66]).unwrap();
        assert_eq!(sum.value().unwrap(), Value::Int(132));
    }

    #[test]
    fn test_division_by_zero_fails_at_construction() {
        let err = n(4).divide_by(0).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero { .. }));

        let zero = n(3).subtract(3).unwrap();
        assert!(matches!(
            n(4).divide_by(&zero),
            Err(Error::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_logarithm_of_zero_names_the_value() {
        let err = n(0).binary_logarithm().unwrap_err();
        assert!(matches!(err, Error::OutOfDefinitionSet { .. }));
        assert!(err.to_string().contains("0 ∉"));

        assert!(n(0).natural_logarithm().is_err());
        assert!(n(0).common_logarithm().is_err());
    }

    #[test]
    fn test_power_of_two() {
        let power = n(2).power(10).unwrap();
        assert_eq!(power.value().unwrap(), Value::Int(1024));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(
            n(-1).factorial().unwrap_err(),
            Error::FactorialMustBePositive { value: -1 }
        );
        assert_eq!(n(4).factorial().unwrap().value().unwrap(), Value::Int(24));
    }

    #[test]
    fn test_rounding_modes_on_a_tie() {
        let tie = f(42.5);
        assert_eq!(tie.round_up(0).unwrap().value().unwrap(), Value::Float(43.0));
        assert_eq!(tie.round_down(0).unwrap().value().unwrap(), Value::Float(42.0));
        assert_eq!(tie.round_even(0).unwrap().value().unwrap(), Value::Float(42.0));
        assert_eq!(tie.round_odd(0).unwrap().value().unwrap(), Value::Float(43.0));
        assert_eq!(
            tie.round(-1, RoundingMode::HalfUp).unwrap_err(),
            Error::PrecisionMustBePositive { precision: -1 }
        );
    }

    #[test]
    fn test_rendering_brackets_nested_operations() {
        let flat = Number::addition([24, 42, 66]).unwrap();
        assert_eq!(flat.to_string(), "24 + 42 + 66");

        let nested = n(24).add(Number::addition([42, 66]).unwrap()).unwrap();
        assert_eq!(nested.to_string(), "24 + (42 + 66)");
        assert!(nested.equals(&flat).unwrap());
    }

    #[test]
    fn test_equality_ignores_shape() {
        let sum = n(1).add(2).unwrap();
        assert!(sum.equals(&n(3)).unwrap());
        assert!(n(4).higher_than(&sum).unwrap());
        assert_eq!(sum, n(3));
    }

    #[test]
    fn test_numerize_mixes_inputs() {
        let existing = n(5).multiply_by(2).unwrap();
        let numbers = numerize([existing, n(1), Number::pi()]).unwrap();
        let sum = Number::addition(numbers).unwrap();
        assert_relative_eq!(
            sum.value().unwrap().as_f64(),
            11.0 + std::f64::consts::PI
        );
    }

    #[test]
    fn test_belongs_to_sets() {
        let half = n(1).divide_by(2).unwrap();
        assert!(half.belongs_to(&Set::Reals).unwrap());
        assert!(!half.belongs_to(&Set::Integers).unwrap());

        let unit = Set::from(Range::inclusive(Scalar::ZERO, Scalar::ONE));
        assert!(half.belongs_to(&unit.clone().intersection(Set::Reals)).unwrap());
        assert!(n(2).belongs_to(&unit.union(Set::of([Scalar::TWO]))).unwrap());
    }

    #[test]
    fn test_collapse_inverse_chain() {
        let x = n(7);
        let chain = x.square_root().unwrap().power(2).unwrap();
        let collapsed = chain.collapse().unwrap();
        assert_eq!(collapsed.to_string(), "7");
        assert!(collapsed.equals(&x).unwrap());
    }

    #[test]
    fn test_collapse_is_opt_in() {
        let chain = n(5).natural_logarithm().unwrap().exponential().unwrap();
        assert_eq!(chain.to_string(), "e^(ln(5))");
        assert_relative_eq!(chain.value().unwrap().as_f64(), 5.0, epsilon = 1e-12);
        assert_eq!(chain.collapse().unwrap().to_string(), "5");
    }

    #[test]
    fn test_shared_tree_across_threads() {
        let tree = Number::addition((1..=100_i64).map(Number::from)).unwrap();

        let results: Vec<Number> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| tree.result().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in &results {
            assert!(Number::ptr_eq(result, &results[0]));
            assert_eq!(result.value().unwrap(), Value::Int(5050));
        }
    }
}
