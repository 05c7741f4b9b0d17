//! Property-based tests for expression laws.

#[cfg(test)]
mod tests {
    use approx::relative_eq;
    use proptest::prelude::*;

    use crate::Number;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn positive_float() -> impl Strategy<Value = f64> {
        1.0e-3f64..1.0e3f64
    }

    fn any_number() -> impl Strategy<Value = Number> {
        prop_oneof![
            small_int().prop_map(Number::from),
            (-1.0e3f64..1.0e3f64).prop_map(|f| Number::try_from(f).unwrap()),
        ]
    }

    fn close(a: &Number, b: &Number) -> bool {
        let a = a.value().unwrap().as_f64();
        let b = b.value().unwrap().as_f64();
        relative_eq!(a, b, epsilon = 1e-12, max_relative = 1e-12)
    }

    proptest! {
        #[test]
        fn addition_commutative(a in any_number(), b in any_number()) {
            let ab = a.add(&b).unwrap();
            let ba = b.add(&a).unwrap();
            prop_assert!(ab.equals(&ba).unwrap());
        }

        #[test]
        fn multiplication_commutative(a in any_number(), b in any_number()) {
            let ab = a.multiply_by(&b).unwrap();
            let ba = b.multiply_by(&a).unwrap();
            prop_assert!(ab.equals(&ba).unwrap());
        }

        #[test]
        fn result_is_memoized(a in any_number(), b in any_number()) {
            let sum = a.add(&b).unwrap();
            let first = sum.result().unwrap();
            let second = sum.result().unwrap();
            prop_assert!(Number::ptr_eq(&first, &second));
        }

        #[test]
        fn square_root_then_square(a in positive_float()) {
            let a = Number::try_from(a).unwrap();
            let back = a.square_root().unwrap().power(2).unwrap();
            prop_assert!(close(&back, &a));
        }

        #[test]
        fn perfect_squares_are_exact(i in 0i64..1000) {
            let square = Number::from(i * i);
            let back = square.square_root().unwrap().power(2).unwrap();
            prop_assert!(back.equals(&square).unwrap());
        }

        #[test]
        fn logarithm_of_product(a in positive_float(), b in positive_float()) {
            let a = Number::try_from(a).unwrap();
            let b = Number::try_from(b).unwrap();
            let product = a.multiply_by(&b).unwrap();

            let ln = product.natural_logarithm().unwrap();
            let sum = a.natural_logarithm().unwrap().add(b.natural_logarithm().unwrap()).unwrap();
            prop_assert!(close(&ln, &sum));

            let lg = product.common_logarithm().unwrap();
            let sum = a.common_logarithm().unwrap().add(b.common_logarithm().unwrap()).unwrap();
            prop_assert!(close(&lg, &sum));

            let lb = product.binary_logarithm().unwrap();
            let sum = a.binary_logarithm().unwrap().add(b.binary_logarithm().unwrap()).unwrap();
            prop_assert!(close(&lb, &sum));
        }

        #[test]
        fn negative_power_is_reciprocal(a in prop_oneof![(-20i64..=-1i64), (1i64..=20i64)], n in 1i64..6) {
            let a = Number::from(a);
            let negative = a.power(-n).unwrap();
            let reciprocal = Number::one().divide_by(a.power(n).unwrap()).unwrap();
            prop_assert!(close(&negative, &reciprocal));
        }

        #[test]
        fn structure_does_not_affect_equality(a in small_int(), b in small_int(), c in small_int()) {
            let flat = Number::addition([a, b, c]).unwrap();
            let nested = Number::from(a).add(Number::from(b).add(c).unwrap()).unwrap();
            prop_assert!(flat.equals(&nested).unwrap());
            prop_assert_ne!(flat.to_string(), nested.to_string());
        }
    }
}
