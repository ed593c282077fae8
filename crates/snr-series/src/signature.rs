//! The signature near-ring.
//!
//! A [`Sig`] wraps a sequence `a` and redefines arithmetic in terms of the
//! Cauchy product and the shift sequence `x = [0, 1]`:
//!
//! - signature addition: `a ⊕ b = a + b - x·a·b` (commutative)
//! - signature convolution: `a ⊛ b = a · Σₖ b[k]·(x·a)ᵏ` (not commutative,
//!   not distributive)
//!
//! The identity of convolution is `Sig(1)`. Because the structure is only a
//! near-ring, subtraction is not `a ⊕ (-b)` and there are two divisions,
//! one for each side of the convolution.

use std::fmt;

use num_traits::{One, Zero};
use snr_core::{Coeff, NearRing, Result, SnrError, STD_LEN};

use crate::operand::Operand;
use crate::sequence::Seq;

/// An element of the signature near-ring.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sig {
    val: Seq,
}

impl Sig {
    /// Wraps a sequence.
    #[must_use]
    pub fn new(val: Seq) -> Self {
        Self { val }
    }

    /// Normalises any operand to a signature.
    #[must_use]
    pub fn coerce(operand: impl Into<Operand>) -> Self {
        operand.into().into_sig()
    }

    /// Returns the wrapped sequence.
    #[must_use]
    pub fn val(&self) -> &Seq {
        &self.val
    }

    /// Consumes the signature, returning the wrapped sequence.
    #[must_use]
    pub fn into_val(self) -> Seq {
        self.val
    }

    /// Logical length of the wrapped sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.val.len()
    }

    /// Returns true if the wrapped sequence has logical length 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }

    /// Returns the coefficient at `i`, or 0 past the end of storage.
    #[must_use]
    pub fn get(&self, i: usize) -> Coeff {
        self.val.get(i)
    }

    /// Appends a coefficient to the wrapped sequence.
    pub fn append(&mut self, value: impl Into<Coeff>) {
        self.val.append(value);
    }

    /// Signature addition `a + b - x·a·b`.
    #[must_use]
    pub fn add_sig(&self, other: &Self) -> Self {
        let (a, b) = (&self.val, &other.val);
        let cross = Seq::shift().mul_seq(a).mul_seq(b);
        Self::new(a.add_seq(b).sub_seq(&cross))
    }

    /// Signature convolution `a · Σₖ b[k]·(x·a)ᵏ`.
    #[must_use]
    pub fn mul_sig(&self, other: &Self) -> Self {
        let a = &self.val;
        let step = a.mul_seq(&Seq::shift());

        let mut sum = Seq::zero();
        let mut power = Seq::one();
        for k in 0..other.len() {
            sum = sum.add_seq(&power.scale(&other.val[k]));
            power = power.mul_seq(&step);
        }

        Self::new(sum.mul_seq(a))
    }

    /// Signature subtraction `(a - b) · F_b` with `F_b` taken to `len`
    /// terms.
    ///
    /// This is not `a ⊕ (-b)`: it is the operation that undoes signature
    /// addition, `(a ⊕ b) ⊖ b = a` within the first `len` terms.
    #[must_use]
    pub fn sub_sig_with_len(&self, other: &Self, len: usize) -> Self {
        Self::new(self.val.sub_seq(&other.val).mul_seq(&other.val.f(len)))
    }

    /// Signature subtraction at the default working length.
    #[must_use]
    pub fn sub_sig(&self, other: &Self) -> Self {
        self.sub_sig_with_len(other, STD_LEN)
    }

    /// The additive inverse of the wrapped sequence.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.val.neg())
    }

    /// Left-inverse division `a ⨸ b`: the `q` with `q ⊛ b = a`.
    ///
    /// Expanding the convolution, `a[x] = Σₖ b[k]·(q^(k+1))[x-k]`. Only the
    /// `k = 0` term involves `q[x]`, so the quotient is solved one column at
    /// a time while a table of the powers `q^(k+1)` is extended alongside.
    /// Runs over `max(len(a), len(b))` terms; trailing zeros are dropped.
    ///
    /// A divisor of length 1 reduces to dividing every term by `b[0]`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if `b[0]` is zero.
    pub fn left_div_sig(&self, other: &Self) -> Result<Self> {
        let (a, b) = (&self.val, &other.val);
        let lead = &b[0];
        if lead.is_zero() {
            return Err(SnrError::DivisionUndefined);
        }

        let len = a.len().max(b.len());
        tracing::debug!(len, "left signature division");

        // powers[k] holds the known coefficients of q^(k+1).
        let q0 = a[0].clone() / lead;
        let mut powers: Vec<Vec<Coeff>> = Vec::with_capacity(len);
        let mut p = q0.clone();
        for _ in 0..len {
            powers.push(vec![p.clone()]);
            p = p * &q0;
        }

        for x in 1..len {
            let known = (1..=x).fold(Coeff::ZERO, |acc, k| acc + &powers[k][x - k] * &b[k]);
            let next = (&a[x] - &known) / lead;
            powers[0].push(next);

            for k in 1..len {
                let c = (0..=x).fold(Coeff::ZERO, |acc, t| {
                    acc + &powers[0][x - t] * &powers[k - 1][t]
                });
                powers[k].push(c);
            }
        }

        let quotient = powers.swap_remove(0);
        Ok(Self::new(Seq::new(quotient).trim()))
    }

    /// Right-inverse division `a ⨹ b`: the `q` with `b ⊛ q = a`.
    ///
    /// `b ⊛ q = Σₖ q[k]·xᵏ·b^(k+1)` is linear in `q`, so each term is peeled
    /// off in turn: `q[k]` is the ratio of the remainder and `xᵏ·b^(k+1)` at
    /// index `k`, after which that multiple is subtracted from the
    /// remainder. Runs over `max(len(a), len(b))` terms; trailing zeros are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if `b[0]` is zero.
    pub fn right_div_sig(&self, other: &Self) -> Result<Self> {
        let b = &other.val;
        if b[0].is_zero() {
            return Err(SnrError::DivisionUndefined);
        }

        let len = self.len().max(b.len());
        tracing::debug!(len, "right signature division");

        let step = b.mul_seq(&Seq::shift());
        let mut remainder = self.val.clone();
        let mut term = b.clone();
        let mut quotient = Vec::with_capacity(len);
        for x in 0..len {
            let q = remainder[x]
                .checked_div(&term[x])
                .ok_or(SnrError::DivisionUndefined)?;
            remainder = remainder.sub_seq(&term.scale(&q));
            if x + 1 < len {
                term = term.mul_seq(&step);
            }
            quotient.push(q);
        }

        Ok(Self::new(Seq::new(quotient).trim()))
    }

    /// Signature addition with any coercible operand.
    #[must_use]
    pub fn add(&self, rhs: impl Into<Operand>) -> Self {
        self.add_sig(&Self::coerce(rhs))
    }

    /// Signature subtraction with any coercible operand.
    #[must_use]
    pub fn sub(&self, rhs: impl Into<Operand>) -> Self {
        self.sub_sig(&Self::coerce(rhs))
    }

    /// Signature convolution with any coercible operand.
    #[must_use]
    pub fn mul(&self, rhs: impl Into<Operand>) -> Self {
        self.mul_sig(&Self::coerce(rhs))
    }

    /// Left-inverse division by any coercible operand.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if the divisor's leading coefficient is
    /// zero.
    pub fn left_div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        self.left_div_sig(&Self::coerce(rhs))
    }

    /// Right-inverse division by any coercible operand.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if the divisor's leading coefficient is
    /// zero.
    pub fn right_div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        self.right_div_sig(&Self::coerce(rhs))
    }

    /// The signature function of the wrapped sequence, `len` terms.
    #[must_use]
    pub fn f(&self, len: usize) -> Self {
        Self::new(self.val.f(len))
    }

    /// The signature function at the default working length.
    #[must_use]
    pub fn f_std(&self) -> Self {
        self.f(STD_LEN)
    }

    /// The inverse signature function of the wrapped sequence.
    ///
    /// # Errors
    ///
    /// Returns `NonInvertible` unless the sequence begins with 1.
    pub fn i(&self) -> Result<Self> {
        self.val.i().map(Self::new)
    }

    /// Returns a copy without trailing zeros.
    #[must_use]
    pub fn trim(&self) -> Self {
        Self::new(self.val.trim())
    }
}

impl Default for Sig {
    /// The zero signature `[0]`.
    fn default() -> Self {
        Self::new(Seq::new(vec![Coeff::ZERO]))
    }
}

impl Zero for Sig {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(&self.val)
    }
}

impl One for Sig {
    fn one() -> Self {
        Self::new(Seq::one())
    }
}

impl NearRing for Sig {}

impl fmt::Debug for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig([{}])", self.val)
    }
}

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.val, f)
    }
}
