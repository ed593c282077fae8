//! Error taxonomy shared by every layer.

use thiserror::Error;

/// Errors raised by sequence, signature and block operations.
///
/// All of them are input errors: they are returned at the point of the
/// offending operation and no operand is modified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnrError {
    /// An operand could not be coerced to a sequence or signature.
    #[error("unsupported operand: {0}")]
    UnsupportedOperand(String),

    /// The divisor has a zero leading coefficient (or a zero modulus).
    #[error("division undefined: divisor has a zero leading coefficient")]
    DivisionUndefined,

    /// The inverse signature function needs a sequence starting with 1.
    #[error("non-invertible: sequence must begin with 1, found {0}")]
    NonInvertible(String),
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, SnrError>;
