//! Parallel batch operations.
//!
//! Rayon-backed versions of the costly triangle and sequence operations.
//! Each helper falls back to the sequential path below the configured
//! threshold and returns exactly what the sequential version returns.

use rayon::prelude::*;

use snr_core::Coeff;
use snr_series::Seq;

use crate::block::Block;

/// Configuration for the parallel helpers.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum batch size (or block window) to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
        }
    }
}

/// Signature functions of many sequences, each taken to `len` terms.
pub fn parallel_signature_functions(
    seqs: &[Seq],
    len: usize,
    config: &ParallelConfig,
) -> Vec<Seq> {
    if seqs.len() < config.parallel_threshold {
        return seqs.iter().map(|s| s.f(len)).collect();
    }

    tracing::debug!(batch = seqs.len(), len, "parallel signature functions");
    seqs.par_iter().map(|s| s.f(len)).collect()
}

/// Aerated, convolved antidiagonal sums of many blocks.
pub fn parallel_block_sums(
    blocks: &[Block],
    aeration: usize,
    conv: &Seq,
    config: &ParallelConfig,
) -> Vec<Seq> {
    if blocks.len() < config.parallel_threshold {
        return blocks.iter().map(|b| b.f(aeration, conv)).collect();
    }

    tracing::debug!(batch = blocks.len(), aeration, "parallel antidiagonal sums");
    blocks.par_iter().map(|b| b.f(aeration, conv)).collect()
}

/// Antidiagonal summation of one block, with the antidiagonals evaluated in
/// parallel.
pub fn parallel_antidiagonals(
    block: &Block,
    aeration: usize,
    conv: &Seq,
    config: &ParallelConfig,
) -> Seq {
    let rows = block.num_rows();
    if rows < config.parallel_threshold {
        return block.f(aeration, conv);
    }

    tracing::debug!(rows, aeration, "parallel antidiagonal summation");
    let g_f = conv.f(rows);
    let sums: Vec<Coeff> = (0..rows)
        .into_par_iter()
        .map(|n| block.antidiagonal(n, aeration, &g_f))
        .collect();
    Seq::new(sums)
}

/// Block product with the rows of the result evaluated in parallel.
pub fn parallel_mul(a: &Block, b: &Block, config: &ParallelConfig) -> Block {
    let window = a.window().max(b.window());
    if window < config.parallel_threshold {
        return a.mul_block(b);
    }

    tracing::debug!(window, "parallel block product");
    let rows: Vec<Seq> = (0..window)
        .into_par_iter()
        .map(|x| a.product_row(b, x, window))
        .collect();
    Block::from_product_rows(rows, window, a.target_len().max(b.target_len()))
}
