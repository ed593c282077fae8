//! The ring of zero-padded sequences.
//!
//! A [`Seq`] stores finitely many coefficients, index 0 first, and reads as
//! zero everywhere past its storage. Addition is termwise and multiplication
//! is the Cauchy product, so a sequence behaves as a formal power series.
//!
//! A sequence whose storage is a single zero has logical length 0, the same
//! as an empty sequence. Storage is never trimmed implicitly; [`Seq::trim`]
//! produces the canonical form.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

use num_traits::{One, Zero};
use snr_core::{Coeff, NearRing, Result, Ring, SnrError, STD_LEN};

use crate::operand::Operand;

static ZERO: Coeff = Coeff::ZERO;

/// A finitely stored, infinitely zero-padded sequence of exact coefficients.
#[derive(Clone, Default)]
pub struct Seq {
    /// Coefficients in ascending index order.
    coeffs: Vec<Coeff>,
}

impl Seq {
    /// Creates a sequence from stored coefficients, kept as given.
    #[must_use]
    pub fn new(coeffs: Vec<Coeff>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero sequence (no stored coefficients).
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the multiplicative identity `[1]`.
    #[must_use]
    pub fn one() -> Self {
        Self::new(vec![Coeff::ONE])
    }

    /// Creates the index-shift sequence `x = [0, 1]`.
    #[must_use]
    pub fn shift() -> Self {
        Self::new(vec![Coeff::ZERO, Coeff::ONE])
    }

    /// Normalises any operand to a sequence.
    #[must_use]
    pub fn coerce(operand: impl Into<Operand>) -> Self {
        operand.into().into_seq()
    }

    /// Returns the logical length.
    ///
    /// This is the stored length, except that a lone zero counts as 0.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.coeffs.len() == 1 && self.coeffs[0].is_zero() {
            0
        } else {
            self.coeffs.len()
        }
    }

    /// Returns true if the logical length is 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Coeff] {
        &self.coeffs
    }

    /// Consumes the sequence, returning its stored coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Coeff> {
        self.coeffs
    }

    /// Iterates over the stored coefficients.
    pub fn iter(&self) -> std::slice::Iter<'_, Coeff> {
        self.coeffs.iter()
    }

    /// Returns the coefficient at `i`, or 0 past the end of storage.
    #[must_use]
    pub fn get(&self, i: usize) -> Coeff {
        self[i].clone()
    }

    /// Appends a coefficient to storage.
    pub fn append(&mut self, value: impl Into<Coeff>) {
        self.coeffs.push(value.into());
    }

    /// Assigns the coefficient at `i`, padding storage with zeros if `i` is
    /// past the end.
    pub fn set(&mut self, i: usize, value: impl Into<Coeff>) {
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, Coeff::ZERO);
        }
        self.coeffs[i] = value.into();
    }

    /// Coefficients up to the logical length.
    fn logical(&self) -> &[Coeff] {
        &self.coeffs[..self.len()]
    }

    /// Termwise sum over `0..max(len(a), len(b))`.
    #[must_use]
    pub fn add_seq(&self, other: &Self) -> Self {
        let len = self.len().max(other.len());
        (0..len).map(|k| &self[k] + &other[k]).collect()
    }

    /// Additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.coeffs.iter().map(|c| -c).collect()
    }

    /// `a + (-b)`.
    #[must_use]
    pub fn sub_seq(&self, other: &Self) -> Self {
        self.add_seq(&other.neg())
    }

    /// Cauchy product: `(a * b)[n] = Σₖ a[k]·b[n-k]`, of length
    /// `len(a) + len(b) - 1`.
    #[must_use]
    pub fn mul_seq(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::zero();
        }

        let (a, b) = (self.logical(), other.logical());
        let mut result = vec![Coeff::ZERO; a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            if x.is_zero() {
                continue;
            }
            for (j, y) in b.iter().enumerate() {
                result[i + j] = &result[i + j] + &(x * y);
            }
        }

        Self::new(result)
    }

    /// Multiplies every stored coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &Coeff) -> Self {
        self.coeffs.iter().map(|x| x * c).collect()
    }

    /// Formal power series division.
    ///
    /// `r[0] = a[0]/b[0]` and `r[x] = (a[x] - Σ_{k<x} r[k]·b[x-k]) / b[0]`,
    /// over `max(len(a), len(b))` terms (at least one).
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if `b[0]` is zero.
    pub fn div_seq(&self, other: &Self) -> Result<Self> {
        let lead = &other[0];
        if lead.is_zero() {
            return Err(SnrError::DivisionUndefined);
        }

        let len = self.len().max(other.len()).max(1);
        tracing::trace!(len, "sequence division");

        let mut result: Vec<Coeff> = Vec::with_capacity(len);
        for x in 0..len {
            let mut acc = self[x].clone();
            for (k, r) in result.iter().enumerate() {
                acc = acc - r * &other[x - k];
            }
            result.push(acc / lead);
        }

        Ok(Self::new(result))
    }

    /// Adds any coercible operand.
    #[must_use]
    pub fn add(&self, rhs: impl Into<Operand>) -> Self {
        self.add_seq(&Self::coerce(rhs))
    }

    /// Subtracts any coercible operand.
    #[must_use]
    pub fn sub(&self, rhs: impl Into<Operand>) -> Self {
        self.sub_seq(&Self::coerce(rhs))
    }

    /// Convolves with any coercible operand.
    #[must_use]
    pub fn mul(&self, rhs: impl Into<Operand>) -> Self {
        self.mul_seq(&Self::coerce(rhs))
    }

    /// Divides by any coercible operand.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if the divisor's leading coefficient is
    /// zero.
    pub fn div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        self.div_seq(&Self::coerce(rhs))
    }

    /// Aerates the sequence: index `k` moves to `k * factor` and the gaps
    /// are zero. `[1, 1]` aerated by 3 is `[1, 0, 0, 1, 0, 0]`.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is zero.
    #[must_use]
    pub fn aerate(&self, factor: usize) -> Self {
        assert!(factor > 0, "aeration factor must be positive");

        let mut result = vec![Coeff::ZERO; self.len() * factor];
        for (k, c) in self.logical().iter().enumerate() {
            result[k * factor] = c.clone();
        }
        Self::new(result)
    }

    /// The signature function `F_d` of length `len` (at least one term).
    ///
    /// `r[0] = 1` and `r[x] = Σₖ d[k]·r[x-k-1]`: the generating function of
    /// the linear recurrence whose coefficients are this sequence. `[1, 1]`
    /// yields the Fibonacci numbers.
    #[must_use]
    pub fn f(&self, len: usize) -> Self {
        let d = self.logical();
        let mut r: Vec<Coeff> = Vec::with_capacity(len.max(1));
        r.push(Coeff::ONE);

        for x in 1..len {
            let n = d
                .iter()
                .take(x)
                .enumerate()
                .fold(Coeff::ZERO, |acc, (k, c)| acc + c * &r[x - k - 1]);
            r.push(n);
        }

        Self::new(r)
    }

    /// The signature function at the default working length.
    #[must_use]
    pub fn f_std(&self) -> Self {
        self.f(STD_LEN)
    }

    /// The inverse signature function `F⁻¹_d`.
    ///
    /// `r[0] = d[1]` and `r[x-1] = d[x] - Σ_{k=1}^{x-1} r[k-1]·d[x-k]`.
    ///
    /// # Errors
    ///
    /// Returns `NonInvertible` unless the sequence begins with 1.
    pub fn i(&self) -> Result<Self> {
        if !self[0].is_one() {
            return Err(SnrError::NonInvertible(self[0].to_string()));
        }

        let mut r = vec![self[1].clone()];
        for x in 2..self.len() {
            let mut n = self[x].clone();
            for k in 1..x {
                n = n - &r[k - 1] * &self[x - k];
            }
            r.push(n);
        }

        Ok(Self::new(r))
    }

    /// Returns a copy without trailing zeros.
    #[must_use]
    pub fn trim(&self) -> Self {
        let end = self
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(0, |i| i + 1);
        Self::new(self.coeffs[..end].to_vec())
    }

    /// Returns true if both sequences agree at every index of the shorter
    /// one.
    #[must_use]
    pub fn contains(&self, other: impl Into<Operand>) -> bool {
        let other = Self::coerce(other);
        let len = self.len().min(other.len());
        (0..len).all(|k| self[k] == other[k])
    }

    /// Floor modulo of every coefficient by `m`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionUndefined` if `m` is zero.
    pub fn modulo(&self, m: i64) -> Result<Self> {
        self.coeffs.iter().map(|c| c.modulo(m)).collect()
    }

    /// Zero-padded window `[start, stop)` taken every `step` terms.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[must_use]
    pub fn slice(&self, start: usize, stop: usize, step: usize) -> Self {
        assert!(step > 0, "slice step must be positive");
        (start..stop).step_by(step).map(|k| self.get(k)).collect()
    }

    /// The first `n` terms, zero-padded.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        self.slice(0, n, 1)
    }
}

impl Index<usize> for Seq {
    type Output = Coeff;

    /// Indexing past the stored coefficients reads 0.
    fn index(&self, i: usize) -> &Coeff {
        self.coeffs.get(i).unwrap_or(&ZERO)
    }
}

impl FromIterator<Coeff> for Seq {
    fn from_iter<I: IntoIterator<Item = Coeff>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Seq {
    type Item = &'a Coeff;
    type IntoIter = std::slice::Iter<'a, Coeff>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl PartialEq for Seq {
    /// Compares over the longer operand, reading missing terms as 0.
    fn eq(&self, other: &Self) -> bool {
        let len = self.stored_len().max(other.stored_len());
        (0..len).all(|k| self[k] == other[k])
    }
}

impl Eq for Seq {}

impl Ord for Seq {
    /// Lexicographic over the zero-padded coefficients.
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.stored_len().max(other.stored_len());
        (0..len)
            .map(|k| self[k].cmp(&other[k]))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Seq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Seq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trim().coeffs.hash(state);
    }
}

impl Zero for Seq {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Coeff::is_zero)
    }
}

impl One for Seq {
    fn one() -> Self {
        Self::one()
    }
}

impl NearRing for Seq {}
impl Ring for Seq {}

impl fmt::Debug for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq([{self}])")
    }
}

impl fmt::Display for Seq {
    /// Comma-separated trimmed coefficients; the zero sequence is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trimmed = self.trim();
        for (i, c) in trimmed.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Seq {
    type Err = SnrError;

    /// Parses the display format, optionally wrapped in brackets.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let body = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        if body.trim().is_empty() {
            return Ok(Self::zero());
        }
        body.split(',').map(str::parse::<Coeff>).collect()
    }
}
