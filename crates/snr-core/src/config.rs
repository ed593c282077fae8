//! Working-length defaults.
//!
//! Sequences are finite truncations of infinite objects. Operations that
//! have to pick a truncation on their own (the signature function,
//! signature subtraction, the block constructors) fall back to [`STD_LEN`];
//! each of them also has a form taking an explicit length.

/// Default number of terms generated when no length is given.
pub const STD_LEN: usize = 30;
