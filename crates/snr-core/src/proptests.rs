//! Property-based tests for exact coefficient arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Coeff, NearRing, Ring};

    // Strategy for generating small rationals
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        (-1000i64..1000i64, 1i64..50i64).prop_map(|(n, d)| Coeff::new(n, d))
    }

    fn non_zero_coeff() -> impl Strategy<Value = Coeff> {
        small_coeff().prop_filter("coefficient must be non-zero", |c| !c.is_zero())
    }

    proptest! {
        #[test]
        fn coeff_add_commutative(a in small_coeff(), b in small_coeff()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn coeff_mul_associative(a in small_coeff(), b in small_coeff(), c in small_coeff()) {
            prop_assert_eq!((&a * &b) * &c, a * (&b * &c));
        }

        #[test]
        fn coeff_distributive(a in small_coeff(), b in small_coeff(), c in small_coeff()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn coeff_div_inverse(a in small_coeff(), b in non_zero_coeff()) {
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(q * b, a);
        }

        #[test]
        fn coeff_display_parses_back(a in small_coeff()) {
            let parsed: Coeff = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        #[test]
        fn coeff_modulo_in_range(n in -10_000i64..10_000i64, m in 1i64..100i64) {
            let r = Coeff::from(n).modulo(m).unwrap();
            prop_assert_eq!(r.to_i64(), Some(n.rem_euclid(m)));
        }

        #[test]
        fn coeff_pow_matches_repeated_mul(a in small_coeff(), n in 0usize..5) {
            let mut expected = Coeff::ONE;
            for _ in 0..n {
                expected = expected * &a;
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        #[test]
        fn coeff_mul_by_scalar(a in small_coeff(), n in -20i64..20i64) {
            prop_assert_eq!(a.mul_by_scalar(n), a * Coeff::from(n));
        }
    }
}
