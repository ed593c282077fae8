//! # snr-linalg
//!
//! Triangles of sequences for the signature near-ring.
//!
//! This crate provides:
//! - [`Block`]: a matrix whose rows are sequences, with matrix arithmetic
//! - Power triangles and the initial triangle of the signature transform
//! - Antidiagonal summation, optionally aerated and convolved
//! - The [`g_matrix`] transform driven by a list of signatures
//! - Parallel batch helpers via rayon
//!
//! ## Antidiagonal summation
//!
//! Summing the antidiagonals of the power triangle of `d` yields the
//! signature function of `d`: the triangle of `[1, 1]` sums to the Fibonacci
//! numbers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod parallel;
pub mod transform;

pub use block::Block;
pub use parallel::ParallelConfig;
pub use transform::g_matrix;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
