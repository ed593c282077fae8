//! The signature-driven triangle transform.
//!
//! Each signature `g` maps a triangle `S` to the lower triangle
//!
//! ```text
//! S'[n][y] = Σ_{k=0}^{n} S[k][y] · F_g[n - k]      for y ≤ n < size
//! ```
//!
//! i.e. every column of `S` is Cauchy-multiplied by the signature function
//! of `g` and cut to the lower triangle. Starting from
//! [`Block::sen_matrix`], the passes build the matrices `S_d^p`.

use snr_core::Coeff;
use snr_series::{Seq, Sig};

use crate::block::Block;

/// Applies one transform pass per signature, in order.
///
/// An empty signature list returns `initial` unchanged.
#[must_use]
pub fn g_matrix(initial: &Block, signatures: &[Sig], size: usize) -> Block {
    signatures
        .iter()
        .enumerate()
        .fold(initial.clone(), |prev, (pass, g)| {
            tracing::debug!(pass, size, "g-matrix pass");
            next_matrix(&prev, &g.val().f(size), size)
        })
}

/// One pass against the precomputed signature function `f_g`.
fn next_matrix(prev: &Block, f_g: &Seq, size: usize) -> Block {
    let mut out = Block::blank(size);
    for n in 0..size {
        for y in 0..=n {
            let sum = (0..=n).fold(Coeff::ZERO, |acc, k| acc + &prev[(k, y)] * &f_g[n - k]);
            out.set(n, y, sum);
        }
    }
    out
}
