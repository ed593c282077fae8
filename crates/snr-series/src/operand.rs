//! Operand coercion.
//!
//! Every binary operation on a [`Seq`] or [`Sig`] accepts a number, a list
//! of numbers, a sequence or a signature on its right-hand side. The value
//! is first captured as an [`Operand`] and then normalised to the receiver's
//! own type with [`Operand::into_seq`] or [`Operand::into_sig`].
//!
//! Conversions from integers, coefficients, sequences and signatures cannot
//! fail. Floats and text go through `TryFrom`/`FromStr` and are rejected
//! with `UnsupportedOperand` when they do not denote an exact number.

use std::str::FromStr;

use snr_core::{Coeff, Result, SnrError};

use crate::sequence::Seq;
use crate::signature::Sig;

/// A right-hand operand before normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// A single number, read as the sequence `[n]`.
    Number(Coeff),
    /// A list of numbers, read as a sequence.
    List(Vec<Coeff>),
    /// A sequence.
    Sequence(Seq),
    /// A signature.
    Signature(Sig),
}

impl Operand {
    /// Normalises to a sequence. A signature yields its wrapped value.
    #[must_use]
    pub fn into_seq(self) -> Seq {
        match self {
            Self::Number(c) => Seq::new(vec![c]),
            Self::List(coeffs) => Seq::new(coeffs),
            Self::Sequence(s) => s,
            Self::Signature(s) => s.into_val(),
        }
    }

    /// Normalises to a signature. Anything else is wrapped as a sequence
    /// first.
    #[must_use]
    pub fn into_sig(self) -> Sig {
        match self {
            Self::Signature(s) => s,
            other => Sig::new(other.into_seq()),
        }
    }

    /// Builds a list operand from floats.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` if any element is NaN or infinite.
    pub fn from_f64_list(values: &[f64]) -> Result<Self> {
        values
            .iter()
            .map(|&v| Coeff::from_f64(v))
            .collect::<Result<Vec<_>>>()
            .map(Self::List)
    }
}

impl FromStr for Operand {
    type Err = SnrError;

    /// Parses `"3"`, `"2/3"` as numbers and `"1, 2"` or `"[1, 2]"` as lists.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') || trimmed.contains(',') {
            trimmed.parse::<Seq>().map(|seq| Self::List(seq.coeffs().to_vec()))
        } else {
            trimmed.parse::<Coeff>().map(Self::Number)
        }
    }
}

impl TryFrom<&str> for Operand {
    type Error = SnrError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<f64> for Operand {
    type Error = SnrError;

    fn try_from(value: f64) -> Result<Self> {
        Coeff::from_f64(value).map(Self::Number)
    }
}

impl TryFrom<&[f64]> for Operand {
    type Error = SnrError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_f64_list(values)
    }
}

impl TryFrom<Vec<f64>> for Operand {
    type Error = SnrError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_f64_list(&values)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Self::Number(Coeff::from(n))
                }
            }

            impl<const N: usize> From<[$t; N]> for Operand {
                fn from(values: [$t; N]) -> Self {
                    Self::List(values.into_iter().map(Coeff::from).collect())
                }
            }

            impl From<Vec<$t>> for Operand {
                fn from(values: Vec<$t>) -> Self {
                    Self::List(values.into_iter().map(Coeff::from).collect())
                }
            }

            impl From<&[$t]> for Operand {
                fn from(values: &[$t]) -> Self {
                    Self::List(values.iter().map(|&v| Coeff::from(v)).collect())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64);

impl From<Coeff> for Operand {
    fn from(c: Coeff) -> Self {
        Self::Number(c)
    }
}

impl From<&Coeff> for Operand {
    fn from(c: &Coeff) -> Self {
        Self::Number(c.clone())
    }
}

impl<const N: usize> From<[Coeff; N]> for Operand {
    fn from(values: [Coeff; N]) -> Self {
        Self::List(values.into())
    }
}

impl From<Vec<Coeff>> for Operand {
    fn from(values: Vec<Coeff>) -> Self {
        Self::List(values)
    }
}

impl From<&[Coeff]> for Operand {
    fn from(values: &[Coeff]) -> Self {
        Self::List(values.to_vec())
    }
}

impl From<Seq> for Operand {
    fn from(s: Seq) -> Self {
        Self::Sequence(s)
    }
}

impl From<&Seq> for Operand {
    fn from(s: &Seq) -> Self {
        Self::Sequence(s.clone())
    }
}

impl From<Sig> for Operand {
    fn from(s: Sig) -> Self {
        Self::Signature(s)
    }
}

impl From<&Sig> for Operand {
    fn from(s: &Sig) -> Self {
        Self::Signature(s.clone())
    }
}

/// Implements `From<$t> for $target` through [`Operand`] for every operand
/// shape except the target itself.
macro_rules! impl_coerce_into {
    ($target:ty, $method:ident; $($t:ty),*) => {
        $(
            impl From<$t> for $target {
                fn from(value: $t) -> Self {
                    Operand::from(value).$method()
                }
            }
        )*

        impl<const N: usize> From<[i32; N]> for $target {
            fn from(values: [i32; N]) -> Self {
                Operand::from(values).$method()
            }
        }

        impl<const N: usize> From<[i64; N]> for $target {
            fn from(values: [i64; N]) -> Self {
                Operand::from(values).$method()
            }
        }

        impl<const N: usize> From<[Coeff; N]> for $target {
            fn from(values: [Coeff; N]) -> Self {
                Operand::from(values).$method()
            }
        }

        impl From<Operand> for $target {
            fn from(op: Operand) -> Self {
                op.$method()
            }
        }
    };
}

impl_coerce_into!(Seq, into_seq;
    i32, i64, Coeff, &Coeff, Vec<i32>, Vec<i64>, Vec<Coeff>, &[i32], &[i64], &[Coeff], Sig, &Sig);
impl_coerce_into!(Sig, into_sig;
    i32, i64, Coeff, &Coeff, Vec<i32>, Vec<i64>, Vec<Coeff>, &[i32], &[i64], &[Coeff], Seq, &Seq);
