//! Triangles and matrices of sequences.
//!
//! A [`Block`] is an ordered list of rows, each a [`Seq`]. Rows and cells
//! outside the stored range read as zero, so blocks of different shapes can
//! be combined freely. Arithmetic runs over the square window `[0, L)²`
//! where `L` is the longest logical row length of either operand.

use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

use snr_core::{Coeff, Result, STD_LEN};
use snr_series::{Operand, Seq};

static ZERO_ROW: Seq = Seq::zero();

/// A matrix whose rows are sequences.
#[derive(Clone, Debug)]
pub struct Block {
    /// Stored rows, row 0 first.
    rows: Vec<Seq>,
    /// Row count of products built from this block.
    target_len: usize,
}

impl Block {
    /// Creates a block from rows with the default target length.
    #[must_use]
    pub fn new(rows: Vec<Seq>) -> Self {
        Self::with_target_len(rows, STD_LEN)
    }

    /// Creates a block from rows with an explicit target length.
    #[must_use]
    pub fn with_target_len(rows: Vec<Seq>, target_len: usize) -> Self {
        Self { rows, target_len }
    }

    /// Wraps the `window` computed rows of a product, padded with zero rows
    /// of length `window` up to `target_len` rows.
    pub(crate) fn from_product_rows(
        mut rows: Vec<Seq>,
        window: usize,
        target_len: usize,
    ) -> Self {
        rows.resize(target_len.max(window), Seq::new(vec![Coeff::ZERO; window]));
        Self::with_target_len(rows, target_len)
    }

    /// `size` rows of `size` zeros.
    #[must_use]
    pub fn blank(size: usize) -> Self {
        Self::new(vec![Seq::new(vec![Coeff::ZERO; size]); size])
    }

    /// The `size × size` identity.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut out = Self::blank(size);
        for n in 0..size {
            out.set(n, n, Coeff::ONE);
        }
        out
    }

    /// `STD_LEN` rows of `STD_LEN` zeros.
    #[must_use]
    pub fn blank_std() -> Self {
        Self::blank(STD_LEN)
    }

    /// The `STD_LEN × STD_LEN` identity.
    #[must_use]
    pub fn identity_std() -> Self {
        Self::identity(STD_LEN)
    }

    /// The power triangle of `base`: row `n` holds `baseⁿ`.
    ///
    /// With `taper`, the triangle is continued past `size` rows by
    /// multiplying the last row by `base` and cutting one term per row, so
    /// that the antidiagonals crossing the last full row are completed. The
    /// first `size` antidiagonal sums are unaffected.
    ///
    /// The triangle always has at least the row `[1]`.
    #[must_use]
    pub fn power_triangle(base: impl Into<Operand>, size: usize, taper: bool) -> Self {
        let base = Seq::coerce(base);
        let mut last = Seq::one();
        let mut rows = vec![last.clone()];
        for _ in 1..size {
            last = last.mul_seq(&base);
            rows.push(last.clone());
        }

        if taper {
            let t = last.trim().len().saturating_sub(1);
            for k in 0..t {
                last = base.mul_seq(&last).truncate(t - k);
                rows.push(last.clone());
            }
        }

        tracing::trace!(size, taper, rows = rows.len(), "power triangle");
        Self::new(rows)
    }

    /// The untapered power triangle of `base` with `STD_LEN` rows.
    #[must_use]
    pub fn power_triangle_std(base: impl Into<Operand>) -> Self {
        Self::power_triangle(base, STD_LEN, false)
    }

    /// The initial triangle of the signature transform.
    ///
    /// Row 0 is `[1]` padded to `size` (never shorter than `[1]`), row 1 is `[base[0] - 1]`, and row
    /// `x ≥ 2` holds `base[x - y - 1]` at column `y < size` (0 when
    /// `y ≥ x`).
    #[must_use]
    pub fn sen_matrix(base: impl Into<Operand>, size: usize) -> Self {
        let base = Seq::coerce(base);
        let mut rows = vec![
            Seq::one().truncate(size.max(1)),
            Seq::new(vec![&base[0] - &Coeff::ONE]),
        ];
        for x in 2..size {
            rows.push(
                (0..size)
                    .map(|y| if y < x { base.get(x - y - 1) } else { Coeff::ZERO })
                    .collect(),
            );
        }
        Self::new(rows)
    }

    /// Returns the number of stored rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the stored rows.
    #[must_use]
    pub fn rows(&self) -> &[Seq] {
        &self.rows
    }

    /// Returns row `i`, or the zero sequence past the stored rows.
    #[must_use]
    pub fn row(&self, i: usize) -> &Seq {
        self.rows.get(i).unwrap_or(&ZERO_ROW)
    }

    /// Returns the cell at `(x, y)`, or 0 outside the stored range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Coeff {
        self.row(x).get(y)
    }

    /// Assigns the cell at `(x, y)`, growing rows and columns with zeros as
    /// needed.
    pub fn set(&mut self, x: usize, y: usize, value: impl Into<Coeff>) {
        if x >= self.rows.len() {
            self.rows.resize(x + 1, Seq::zero());
        }
        self.rows[x].set(y, value);
    }

    /// Appends a row.
    pub fn append(&mut self, row: impl Into<Seq>) {
        self.rows.push(row.into());
    }

    /// The longest logical row length, `L`.
    #[must_use]
    pub fn window(&self) -> usize {
        self.rows.iter().map(Seq::len).max().unwrap_or(0)
    }

    /// The row count of products built from this block, `l`.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Applies `op` cellwise over the larger of the two windows.
    fn zip_window(&self, other: &Self, op: impl Fn(&Coeff, &Coeff) -> Coeff) -> Self {
        let window = self.window().max(other.window());
        let rows = (0..window)
            .map(|x| (0..window).map(|y| op(&self[(x, y)], &other[(x, y)])).collect())
            .collect();
        Self::new(rows)
    }

    /// Cellwise sum.
    #[must_use]
    pub fn add_block(&self, other: &Self) -> Self {
        self.zip_window(other, |a, b| a + b)
    }

    /// Cellwise difference.
    #[must_use]
    pub fn sub_block(&self, other: &Self) -> Self {
        self.zip_window(other, |a, b| a - b)
    }

    /// Row `x` of the matrix product, over the first `window` columns.
    pub(crate) fn product_row(&self, other: &Self, x: usize, window: usize) -> Seq {
        (0..window)
            .map(|y| {
                (0..window).fold(Coeff::ZERO, |acc, k| acc + &self[(x, k)] * &other[(k, y)])
            })
            .collect()
    }

    /// Matrix product `C[x][y] = Σₖ A[x][k]·B[k][y]` over the larger window.
    ///
    /// The product has as many rows as the larger target length (or the
    /// window, if that is longer); rows past the window are zero.
    #[must_use]
    pub fn mul_block(&self, other: &Self) -> Self {
        let window = self.window().max(other.window());
        let rows = (0..window)
            .map(|x| self.product_row(other, x, window))
            .collect();
        Self::from_product_rows(rows, window, self.target_len.max(other.target_len))
    }

    /// Cauchy-multiplies every row by `s`.
    #[must_use]
    pub fn scale(&self, s: &Seq) -> Self {
        Self::with_target_len(
            self.rows.iter().map(|row| s.mul_seq(row)).collect(),
            self.target_len,
        )
    }

    /// The `n`-fold matrix product; `pow(0)` is the identity on the stored
    /// row count.
    #[must_use]
    pub fn pow(&self, n: usize) -> Self {
        if n == 0 {
            return Self::identity(self.rows.len());
        }
        (1..n).fold(self.clone(), |acc, _| acc.mul_block(self))
    }

    /// The aerated antidiagonal sum at index `n` against the precomputed
    /// signature function `g_f`.
    pub(crate) fn antidiagonal(&self, n: usize, aeration: usize, g_f: &Seq) -> Coeff {
        (0..=n)
            .map_while(|k| {
                let r = aeration.checked_mul(k).and_then(|s| n.checked_sub(s))?;
                Some((r, k))
            })
            .fold(Coeff::ZERO, |acc, (r, k)| acc + &self[(r, k)] * &g_f[r])
    }

    /// Aerated, convolved antidiagonal summation.
    ///
    /// With `g_f = F_conv` taken to the row count,
    /// `out[n] = Σₖ row[n - a·k][k] · g_f[n - a·k]` over `a·k ≤ n`. The
    /// result has one term per stored row. `f(1, 1)` is the plain
    /// antidiagonal sum.
    #[must_use]
    pub fn f(&self, aeration: usize, conv: impl Into<Operand>) -> Seq {
        let rows = self.rows.len();
        let g_f = Seq::coerce(conv).f(rows);
        tracing::debug!(rows, aeration, "antidiagonal summation");

        (0..rows)
            .map(|n| self.antidiagonal(n, aeration, &g_f))
            .collect()
    }

    /// Plain antidiagonal summation, `f(1, 1)`.
    #[must_use]
    pub fn antidiagonal_sums(&self) -> Seq {
        self.f(1, 1)
    }

    /// The inverse signature function of the antidiagonal sums.
    ///
    /// # Errors
    ///
    /// Returns `NonInvertible` unless the sums begin with 1.
    pub fn i(&self, aeration: usize, conv: impl Into<Operand>) -> Result<Seq> {
        self.f(aeration, conv).i()
    }
}

impl Default for Block {
    /// A single zero row.
    fn default() -> Self {
        Self::new(vec![Seq::new(vec![Coeff::ZERO])])
    }
}

impl From<Vec<Seq>> for Block {
    fn from(rows: Vec<Seq>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Seq> for Block {
    fn from_iter<I: IntoIterator<Item = Seq>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<(usize, usize)> for Block {
    type Output = Coeff;

    /// Reads 0 outside the stored range.
    fn index(&self, (x, y): (usize, usize)) -> &Coeff {
        &self.row(x)[y]
    }
}

impl PartialEq for Block {
    /// Compares row by row over the longer block; missing rows are zero.
    fn eq(&self, other: &Self) -> bool {
        let len = self.rows.len().max(other.rows.len());
        (0..len).all(|x| self.row(x) == other.row(x))
    }
}

impl Eq for Block {}

impl Add for &Block {
    type Output = Block;

    fn add(self, other: Self) -> Block {
        self.add_block(other)
    }
}

impl Sub for &Block {
    type Output = Block;

    fn sub(self, other: Self) -> Block {
        self.sub_block(other)
    }
}

impl Mul for &Block {
    type Output = Block;

    fn mul(self, other: Self) -> Block {
        self.mul_block(other)
    }
}

impl Mul<&Seq> for &Block {
    type Output = Block;

    fn mul(self, s: &Seq) -> Block {
        self.scale(s)
    }
}

impl fmt::Display for Block {
    /// One rendered row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
