//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use numera_core::Epsilon;
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    fn eps() -> Epsilon {
        Epsilon::new(1e-6).unwrap()
    }

    // Integer-valued coefficients keep sums and products exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(|c| Polynomial::new(c, eps()))
    }

    // Arbitrary finite coefficients for formatting
    fn real_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(-1.0e6f64..1.0e6f64, 1..=6).prop_map(|c| Polynomial::new(c, eps()))
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero(eps());
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            let sum = a.add(&a.neg());
            prop_assert!(sum.is_zero());
            prop_assert_eq!(sum, Polynomial::zero(eps()));
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
        }

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_eval_homomorphism(a in small_poly(), b in small_poly(), x in -3i32..=3i32) {
            let x = f64::from(x);
            prop_assert_eq!(a.add(&b).value_at(x), a.value_at(x) + b.value_at(x));
            prop_assert_eq!(a.mul(&b).value_at(x), a.value_at(x) * b.value_at(x));
        }

        #[test]
        fn poly_leading_coeff_not_negligible(a in small_poly()) {
            prop_assume!(a.degree() > 0);
            prop_assert!(!a.epsilon().is_negligible(a.leading_coeff()));
        }

        // Formatting

        #[test]
        fn poly_format_round_trip(a in real_poly()) {
            let parsed = Polynomial::parse(&a.to_string(), eps()).unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
