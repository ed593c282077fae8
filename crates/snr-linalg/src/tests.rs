//! Integration tests for snr-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::block::Block;
    use crate::parallel::{parallel_antidiagonals, parallel_mul, ParallelConfig};
    use crate::transform::g_matrix;
    use snr_core::Coeff;
    use snr_series::{Seq, Sig};

    #[test]
    fn test_triangle_sums_match_signature_function() {
        // The antidiagonals of the power triangle of d sum to F_d.
        for base in [Seq::from([1, 1]), Seq::from([2, 3]), Seq::from([1, 0, 1])] {
            let t = Block::power_triangle(&base, 8, false);
            assert_eq!(t.antidiagonal_sums(), base.f(8));
        }
    }

    #[test]
    fn test_tapering_keeps_prefix() {
        let base = Seq::from([1, 2, 1]);
        let plain = Block::power_triangle(&base, 6, false);
        let tapered = Block::power_triangle(&base, 6, true);
        assert!(tapered.num_rows() > plain.num_rows());
        assert_eq!(tapered.antidiagonal_sums().truncate(6), plain.antidiagonal_sums());
    }

    #[test]
    fn test_inverse_recovers_base() {
        let base = Seq::from([1, 1, 1]);
        let t = Block::power_triangle(&base, 6, true);
        assert_eq!(t.i(1, 1).unwrap().truncate(3), base);
    }

    #[test]
    fn test_identity_powers() {
        let id = Block::identity(4);
        assert_eq!(&id * &id, id);
        assert_eq!(id.pow(5), id);
        assert_eq!(Block::power_triangle([1, 1], 4, false).pow(0), id);
    }

    #[test]
    fn test_identity_scale() {
        let id = Block::identity(3);
        let scaled = &id * &Seq::from([2, 1]);
        assert_eq!(scaled.row(1), &Seq::from([0, 2, 1]));
        assert_eq!(scaled.get(2, 3), Coeff::ONE);
    }

    #[test]
    fn test_sen_transform() {
        let s = Block::sen_matrix([1, 1], 6);
        let out = g_matrix(&s, &[Sig::from([1, 1])], 6);

        // Row 0 is [1] against F_[1, 1] down the first column.
        let fib = Seq::from([1, 1]).f(6);
        assert_eq!(out.get(0, 0), Coeff::ONE);
        assert_eq!(out.get(5, 5), Coeff::ZERO);
        assert_eq!(out.num_rows(), 6);
        for y in 1..6 {
            assert_eq!(out.get(y - 1, y), Coeff::ZERO);
        }
        assert_eq!(out.get(1, 0), &fib[1] + &(&s[(1, 0)] * &fib[0]));
    }

    #[test]
    fn test_parallel_vs_sequential() {
        let config = ParallelConfig {
            parallel_threshold: 1,
        };
        let t = Block::power_triangle([1, 1, 1], 12, true);
        assert_eq!(
            parallel_antidiagonals(&t, 2, &Seq::one(), &config),
            t.f(2, 1)
        );
        let s = Block::sen_matrix([2, 1], 8);
        assert_eq!(parallel_mul(&s, &t, &config), &s * &t);
    }
}
