//! Property-based tests for bit decomposition.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::binary64::{bits_of, bits_of_masked, Binary64, WIDTH};

    proptest! {
        #[test]
        fn width_is_fixed(raw in any::<u64>()) {
            let bits = bits_of(f64::from_bits(raw));
            prop_assert_eq!(bits.len(), WIDTH);
            prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
        }

        #[test]
        fn variants_agree(raw in any::<u64>()) {
            let d = f64::from_bits(raw);
            prop_assert_eq!(bits_of(d), bits_of_masked(d));
        }

        #[test]
        fn bits_reconstruct_value(raw in any::<u64>()) {
            let bits = bits_of(f64::from_bits(raw));
            prop_assert_eq!(u64::from_str_radix(&bits, 2).unwrap(), raw);
        }

        #[test]
        fn fields_reassemble(raw in any::<u64>()) {
            let b = Binary64::from_bits(raw);
            let rebuilt = (u64::from(b.sign()) << 63)
                | (u64::from(b.biased_exponent()) << 52)
                | b.mantissa();
            prop_assert_eq!(rebuilt, raw);
        }

        #[test]
        fn negation_flips_only_sign(d in any::<f64>()) {
            let a = bits_of(d);
            let b = bits_of(-d);
            prop_assert_ne!(&a[..1], &b[..1]);
            prop_assert_eq!(&a[1..], &b[1..]);
        }
    }
}
