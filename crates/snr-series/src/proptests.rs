//! Property-based tests for sequences and signatures.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use snr_core::{Coeff, STD_LEN};

    use crate::{Seq, Sig};

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        (-5i64..=5i64).prop_map(Coeff::from)
    }

    // Strategy for generating short sequences (1-5 terms)
    fn small_seq() -> impl Strategy<Value = Seq> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Seq::new)
    }

    // Sequences with a non-zero leading term, usable as divisors
    fn divisor_seq() -> impl Strategy<Value = Seq> {
        small_seq().prop_filter("leading term must be non-zero", |s| !s[0].is_zero())
    }

    // Sequences beginning with 1, the domain of the inverse signature function
    fn unit_seq() -> impl Strategy<Value = Seq> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(|tail| {
            let mut coeffs = vec![Coeff::ONE];
            coeffs.extend(tail);
            Seq::new(coeffs)
        })
    }

    fn small_sig() -> impl Strategy<Value = Sig> {
        small_seq().prop_map(Sig::new)
    }

    fn divisor_sig() -> impl Strategy<Value = Sig> {
        divisor_seq().prop_map(Sig::new)
    }

    proptest! {
        // Sequence ring axioms

        #[test]
        fn seq_add_commutative(a in small_seq(), b in small_seq()) {
            prop_assert_eq!(a.add_seq(&b), b.add_seq(&a));
        }

        #[test]
        fn seq_add_associative(a in small_seq(), b in small_seq(), c in small_seq()) {
            prop_assert_eq!(a.add_seq(&b).add_seq(&c), a.add_seq(&b.add_seq(&c)));
        }

        #[test]
        fn seq_mul_commutative(a in small_seq(), b in small_seq()) {
            prop_assert_eq!(a.mul_seq(&b), b.mul_seq(&a));
        }

        #[test]
        fn seq_mul_associative(a in small_seq(), b in small_seq(), c in small_seq()) {
            prop_assert_eq!(a.mul_seq(&b).mul_seq(&c), a.mul_seq(&b.mul_seq(&c)));
        }

        #[test]
        fn seq_distributive(a in small_seq(), b in small_seq(), c in small_seq()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul_seq(&b.add_seq(&c));
            let right = a.mul_seq(&b).add_seq(&a.mul_seq(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn seq_sub_self_is_zero(a in small_seq()) {
            prop_assert_eq!(a.sub_seq(&a), Seq::zero());
        }

        #[test]
        fn seq_product_length(a in small_seq(), b in small_seq()) {
            prop_assume!(!a.is_empty() && !b.is_empty());
            prop_assert_eq!(a.mul_seq(&b).len(), a.len() + b.len() - 1);
        }

        #[test]
        fn seq_padding_reads_zero(a in small_seq(), extra in 0usize..10) {
            prop_assert!(a[a.stored_len() + extra].is_zero());
        }

        #[test]
        fn seq_division_inverts_product(a in small_seq(), b in divisor_seq()) {
            let q = a.div_seq(&b).unwrap();
            let n = q.len();
            prop_assert_eq!(q.mul_seq(&b).truncate(n), a.truncate(n));
        }

        #[test]
        fn seq_aeration_moves_terms(a in small_seq(), factor in 1usize..5) {
            let aerated = a.aerate(factor);
            prop_assert_eq!(aerated.stored_len(), a.len() * factor);
            for k in 0..aerated.stored_len() {
                if k % factor == 0 {
                    prop_assert_eq!(&aerated[k], &a[k / factor]);
                } else {
                    prop_assert!(aerated[k].is_zero());
                }
            }
        }

        #[test]
        fn seq_inverse_undoes_signature_function(a in small_seq()) {
            // The first len(a) + 1 terms of F_a determine a.
            let f = a.f(a.len() + 1);
            prop_assert_eq!(f.i().unwrap(), a);
        }

        #[test]
        fn seq_signature_function_undoes_inverse(a in unit_seq()) {
            let d = a.i().unwrap();
            prop_assert_eq!(d.f(a.len()), a);
        }

        #[test]
        fn seq_display_parses_back(a in small_seq()) {
            let parsed: Seq = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        #[test]
        fn seq_contains_prefix(a in small_seq(), n in 0usize..6) {
            prop_assert!(a.contains(a.truncate(n)));
        }

        // Signature near-ring laws

        #[test]
        fn sig_add_commutative(a in small_sig(), b in small_sig()) {
            prop_assert_eq!(a.add_sig(&b), b.add_sig(&a));
        }

        #[test]
        fn sig_mul_identity(a in small_sig()) {
            let one = Sig::new(Seq::one());
            prop_assert_eq!(a.mul_sig(&one), a.clone());
            prop_assert_eq!(one.mul_sig(&a), a);
        }

        #[test]
        fn sig_mul_associative(a in small_sig(), b in small_sig(), c in small_sig()) {
            prop_assert_eq!(a.mul_sig(&b).mul_sig(&c), a.mul_sig(&b.mul_sig(&c)));
        }

        #[test]
        fn sig_sub_undoes_add(a in small_sig(), b in small_sig()) {
            let back = a.add_sig(&b).sub_sig(&b);
            prop_assert_eq!(back.val().truncate(STD_LEN), a.val().truncate(STD_LEN));
        }

        #[test]
        fn sig_left_div_undoes_mul(q in small_sig(), b in divisor_sig()) {
            let a = q.mul_sig(&b);
            prop_assert_eq!(a.left_div_sig(&b).unwrap(), q);
        }

        #[test]
        fn sig_right_div_undoes_mul(q in small_sig(), b in divisor_sig()) {
            let a = b.mul_sig(&q);
            prop_assert_eq!(a.right_div_sig(&b).unwrap(), q);
        }
    }
}
