//! # snr-series
//!
//! Zero-padded sequences and the signature near-ring.
//!
//! This crate provides:
//! - [`Seq`]: the ring of sequences under addition and convolution
//! - [`Sig`]: the signature near-ring (signature addition and convolution)
//! - [`Operand`]: the coercion applied to every right-hand operand
//!
//! ## Key operations
//!
//! - Signature function `f`: generating function of the linear recurrence
//!   whose coefficients are the sequence
//! - Inverse signature function `i`
//! - Formal power series division and the two signature divisions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod operand;
pub mod ops;
pub mod sequence;
pub mod signature;

#[cfg(test)]
mod proptests;

pub use operand::Operand;
pub use sequence::Seq;
pub use signature::Sig;
