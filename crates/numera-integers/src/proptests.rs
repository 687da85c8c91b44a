//! Property-based tests for the GCD algorithms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::gcd::{binary, gcd_binary, gcd_subtractive, GcdAlgorithm};
    use crate::parallel::{par_gcd_all, ParallelConfig};

    // The subtractive kernel is linear in the operands, keep them small
    fn small_int() -> impl Strategy<Value = i64> {
        -5000i64..5000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-5000i64..=-1i64), (1i64..=5000i64)]
    }

    fn algorithm() -> impl Strategy<Value = GcdAlgorithm> {
        prop_oneof![Just(GcdAlgorithm::Subtractive), Just(GcdAlgorithm::Binary)]
    }

    proptest! {
        #[test]
        fn algorithms_agree(a in small_int(), b in small_int()) {
            prop_assert_eq!(gcd_subtractive(a, b), gcd_binary(a, b));
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let g = gcd_binary(a, b);
            prop_assert!(g > 0);
            prop_assert_eq!(a.unsigned_abs() % g, 0);
            prop_assert_eq!(b.unsigned_abs() % g, 0);
        }

        #[test]
        fn gcd_is_greatest(a in non_zero_int(), b in non_zero_int()) {
            let g = gcd_binary(a, b);
            let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
            for d in (g + 1)..=a.min(b) {
                prop_assert!(a % d != 0 || b % d != 0);
            }
        }

        #[test]
        fn gcd_commutative(alg in algorithm(), a in small_int(), b in small_int()) {
            prop_assert_eq!(alg.gcd(a, b), alg.gcd(b, a));
        }

        #[test]
        fn gcd_identities(alg in algorithm(), a in small_int()) {
            prop_assert_eq!(alg.gcd(a, 0), a.unsigned_abs());
            prop_assert_eq!(alg.gcd(0, a), a.unsigned_abs());
            prop_assert_eq!(alg.gcd(a, a), a.unsigned_abs());
        }

        #[test]
        fn gcd_sign_invariant(alg in algorithm(), a in small_int(), b in small_int()) {
            prop_assert_eq!(alg.gcd(a, b), alg.gcd(-a, b));
            prop_assert_eq!(alg.gcd(a, b), alg.gcd(a, -b));
        }

        #[test]
        fn fold_associative(alg in algorithm(), a in small_int(), b in small_int(), c in small_int()) {
            let left = alg.pair(alg.gcd(a, b), c.unsigned_abs());
            let right = alg.pair(a.unsigned_abs(), alg.gcd(b, c));
            prop_assert_eq!(alg.gcd3(a, b, c), left);
            prop_assert_eq!(alg.gcd3(a, b, c), right);
            prop_assert_eq!(alg.gcd_all(&[a, b, c]), left);
        }

        #[test]
        fn fold_order_independent(alg in algorithm(), values in proptest::collection::vec(small_int(), 0..12)) {
            let mut reversed = values.clone();
            reversed.reverse();
            prop_assert_eq!(alg.gcd_all(&values), alg.gcd_all(&reversed));
        }

        #[test]
        fn sequences_agree(values in proptest::collection::vec(small_int(), 0..12)) {
            prop_assert_eq!(
                GcdAlgorithm::Subtractive.gcd_all(&values),
                GcdAlgorithm::Binary.gcd_all(&values)
            );
        }

        #[test]
        fn parallel_matches_sequential(
            values in proptest::collection::vec(any::<i64>(), 0..200),
            chunk_size in 1usize..17
        ) {
            let config = ParallelConfig { parallel_threshold: 0, chunk_size };
            prop_assert_eq!(
                par_gcd_all(&values, GcdAlgorithm::Binary, &config),
                GcdAlgorithm::Binary.gcd_all(&values)
            );
        }

        #[test]
        fn binary_full_range_divides(a in any::<u64>(), b in 1u64..) {
            let g = binary(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }
    }
}
