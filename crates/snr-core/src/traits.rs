//! Algebraic structure traits.
//!
//! Sequences form a commutative ring under addition and convolution.
//! Signatures only form a near-ring: their multiplication is neither
//! commutative nor distributive, and subtraction is not `a + (-b)`.

use std::fmt::Debug;
use std::ops::{Neg, Sub};

use num_traits::{One, Zero};

/// A near-ring: an additive structure with an associative multiplication.
///
/// # Laws
///
/// - Addition is associative with identity `zero()`
/// - Multiplication is associative with identity `one()`
///
/// Distributivity is not required on either side.
pub trait NearRing: Clone + Eq + Debug + Zero + One {
    /// Computes self * self * ... (n times) in the near-ring.
    ///
    /// `pow(0)` is the multiplicative identity.
    fn pow(&self, n: usize) -> Self {
        let mut result = Self::one();
        for _ in 0..n {
            result = result * self.clone();
        }
        result
    }
}

/// A ring: a near-ring with negation and a multiplication that distributes
/// over addition.
///
/// # Laws
///
/// - Addition is commutative and every element has an additive inverse
/// - `a * (b + c) = a * b + a * c`
/// - `a - b = a + (-b)`
pub trait Ring: NearRing + Sub<Output = Self> + Neg<Output = Self> {
    /// Computes self + self + ... (n times), negated for negative n.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        for _ in 0..n.unsigned_abs() {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }
}
