//! # snr-core
//!
//! Foundations for the signature near-ring workspace.
//!
//! This crate provides:
//! - Exact rational coefficients (`Coeff`) backed by `dashu`
//! - The `NearRing` and `Ring` traits shared by sequences and signatures
//! - The error taxonomy (`SnrError`)
//! - The default working length (`STD_LEN`)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! NearRing        (Sig: signature addition and convolution)
//!  └── Ring       (Coeff, Seq: subtraction, negation, distributivity)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coeff;
pub mod config;
pub mod error;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use coeff::Coeff;
pub use config::STD_LEN;
pub use error::{Result, SnrError};
pub use traits::{NearRing, Ring};
