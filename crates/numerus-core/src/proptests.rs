//! Property-based tests for raw value arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Scalar, Value};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn finite_float() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }

    fn any_value() -> impl Strategy<Value = Value> {
        prop_oneof![small_int().prop_map(Value::Int), finite_float().prop_map(Value::Float)]
    }

    proptest! {
        #[test]
        fn value_add_commutative(a in any_value(), b in any_value()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn value_mul_commutative(a in any_value(), b in any_value()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn integer_arithmetic_stays_integral(a in small_int(), b in small_int()) {
            prop_assert!((Value::Int(a) + Value::Int(b)).is_int());
            prop_assert!((Value::Int(a) - Value::Int(b)).is_int());
            prop_assert!((Value::Int(a) * Value::Int(b)).is_int());
        }

        #[test]
        fn exact_division_stays_integral(a in small_int(), b in prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]) {
            let product = Value::Int(a * b);
            prop_assert_eq!(product / Value::Int(b), Value::Int(a));
            prop_assert!((product / Value::Int(b)).is_int());
        }

        #[test]
        fn sub_is_add_negated(a in any_value(), b in any_value()) {
            prop_assert_eq!(a - b, a + (-b));
        }

        #[test]
        fn scalar_keeps_finite_values(f in finite_float()) {
            let scalar = Scalar::float(f).unwrap();
            prop_assert_eq!(scalar.as_f64(), f);
            prop_assert!(!scalar.value().is_int());
        }

        #[test]
        fn scalar_display_parses_back(f in finite_float()) {
            let scalar = Scalar::float(f).unwrap();
            if scalar.constant().is_none() {
                let parsed: f64 = scalar.to_string().parse().unwrap();
                prop_assert_eq!(parsed, f);
            }
        }
    }
}
