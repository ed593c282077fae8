//! Property-based tests for triangles of sequences.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use snr_core::Coeff;
    use snr_series::Seq;

    use crate::block::Block;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        (-3i64..=3i64).prop_map(Coeff::from)
    }

    // Strategy for generating short sequences (1-4 terms)
    fn small_seq() -> impl Strategy<Value = Seq> {
        proptest::collection::vec(small_coeff(), 1..=4).prop_map(Seq::new)
    }

    // Strategy for generating small square blocks
    fn small_block() -> impl Strategy<Value = Block> {
        (1usize..=4).prop_flat_map(|n| {
            proptest::collection::vec(
                proptest::collection::vec(small_coeff(), n).prop_map(Seq::new),
                n,
            )
            .prop_map(Block::new)
        })
    }

    proptest! {
        #[test]
        fn block_add_commutative(a in small_block(), b in small_block()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn block_sub_self_is_blank(a in small_block()) {
            prop_assert_eq!(&a - &a, Block::blank(a.window()));
        }

        #[test]
        fn block_mul_associative(a in small_block(), b in small_block(), c in small_block()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn block_identity_neutral(a in small_block()) {
            let id = Block::identity(a.window());
            prop_assert_eq!(&a * &id, a.clone());
            prop_assert_eq!(&id * &a, a);
        }

        #[test]
        fn triangle_sums_are_signature_function(d in small_seq(), size in 1usize..8) {
            let t = Block::power_triangle(&d, size, false);
            prop_assert_eq!(t.antidiagonal_sums(), d.f(size));
        }

        #[test]
        fn tapering_keeps_prefix(d in small_seq(), size in 1usize..6) {
            let plain = Block::power_triangle(&d, size, false);
            let tapered = Block::power_triangle(&d, size, true);
            prop_assert_eq!(tapered.antidiagonal_sums().truncate(size), plain.antidiagonal_sums());
        }
    }
}
