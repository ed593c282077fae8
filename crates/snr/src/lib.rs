//! # snr
//!
//! Signature near-rings over exact rationals.
//!
//! A sequence is read as a formal power series, and its *signature
//! function* is the generating function of the linear recurrence whose
//! coefficients it holds. Signatures form a near-ring whose addition and
//! convolution act on sequences through their signature functions, and
//! triangles of sequences recover those functions by antidiagonal
//! summation.
//!
//! ## Features
//!
//! - **Exact arithmetic**: every coefficient is an arbitrary precision
//!   rational
//! - **Sequence ring**: zero-padded sequences under addition and the Cauchy
//!   product, with formal division
//! - **Signature near-ring**: signature addition, convolution, subtraction
//!   and the two one-sided divisions
//! - **Triangles**: power triangles, aerated and convolved antidiagonal
//!   sums, and the signature-driven transform
//!
//! ## Quick Start
//!
//! ```rust
//! use snr::prelude::*;
//!
//! let d = Seq::from([1, 1]);
//! assert_eq!(d.f(5), Seq::from([1, 1, 2, 3, 5]));
//!
//! let triangle = Block::power_triangle(&d, 5, false);
//! assert_eq!(triangle.antidiagonal_sums(), d.f(5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use snr_core as core;
pub use snr_linalg as linalg;
pub use snr_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use snr_core::{Coeff, NearRing, Result, Ring, SnrError, STD_LEN};
    pub use snr_linalg::{g_matrix, Block, ParallelConfig};
    pub use snr_series::{Operand, Seq, Sig};
}
