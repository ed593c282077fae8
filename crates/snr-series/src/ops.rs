//! Operator overloads for sequences and signatures.
//!
//! The right-hand side of `+`, `-` and `*` may be anything that converts
//! into an [`Operand`]. Integers on the left-hand side are coerced to the
//! right-hand operand's type, so `3 - s` means `Seq([3]) - s` and `2 * g`
//! means `Sig([2]) * g`.
//!
//! Division is fallible and only available through the named methods.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::operand::Operand;
use crate::sequence::Seq;
use crate::signature::Sig;

macro_rules! impl_binary_ops {
    ($target:ident, $coerce:ident, $add:ident, $sub:ident, $mul:ident) => {
        impl<O: Into<Operand>> Add<O> for $target {
            type Output = $target;

            fn add(self, rhs: O) -> $target {
                self.$add(&$target::$coerce(rhs))
            }
        }

        impl<O: Into<Operand>> Add<O> for &$target {
            type Output = $target;

            fn add(self, rhs: O) -> $target {
                self.$add(&$target::$coerce(rhs))
            }
        }

        impl<O: Into<Operand>> Sub<O> for $target {
            type Output = $target;

            fn sub(self, rhs: O) -> $target {
                self.$sub(&$target::$coerce(rhs))
            }
        }

        impl<O: Into<Operand>> Sub<O> for &$target {
            type Output = $target;

            fn sub(self, rhs: O) -> $target {
                self.$sub(&$target::$coerce(rhs))
            }
        }

        impl<O: Into<Operand>> Mul<O> for $target {
            type Output = $target;

            fn mul(self, rhs: O) -> $target {
                self.$mul(&$target::$coerce(rhs))
            }
        }

        impl<O: Into<Operand>> Mul<O> for &$target {
            type Output = $target;

            fn mul(self, rhs: O) -> $target {
                self.$mul(&$target::$coerce(rhs))
            }
        }

        impl<O: Into<Operand>> AddAssign<O> for $target {
            fn add_assign(&mut self, rhs: O) {
                *self = self.$add(&$target::$coerce(rhs));
            }
        }

        impl<O: Into<Operand>> SubAssign<O> for $target {
            fn sub_assign(&mut self, rhs: O) {
                *self = self.$sub(&$target::$coerce(rhs));
            }
        }

        impl<O: Into<Operand>> MulAssign<O> for $target {
            fn mul_assign(&mut self, rhs: O) {
                *self = self.$mul(&$target::$coerce(rhs));
            }
        }

        impl Neg for $target {
            type Output = $target;

            fn neg(self) -> $target {
                $target::neg(&self)
            }
        }

        impl Neg for &$target {
            type Output = $target;

            fn neg(self) -> $target {
                $target::neg(self)
            }
        }
    };
}

impl_binary_ops!(Seq, coerce, add_seq, sub_seq, mul_seq);
impl_binary_ops!(Sig, coerce, add_sig, sub_sig, mul_sig);

/// Reflected operators: a plain integer on the left is coerced to the
/// right-hand operand's type before the operation.
macro_rules! impl_reflected_ops {
    ($target:ident, $add:ident, $sub:ident, $mul:ident; $($t:ty),*) => {
        $(
            impl Add<$target> for $t {
                type Output = $target;

                fn add(self, rhs: $target) -> $target {
                    $target::from(self).$add(&rhs)
                }
            }

            impl Add<&$target> for $t {
                type Output = $target;

                fn add(self, rhs: &$target) -> $target {
                    $target::from(self).$add(rhs)
                }
            }

            impl Sub<$target> for $t {
                type Output = $target;

                fn sub(self, rhs: $target) -> $target {
                    $target::from(self).$sub(&rhs)
                }
            }

            impl Sub<&$target> for $t {
                type Output = $target;

                fn sub(self, rhs: &$target) -> $target {
                    $target::from(self).$sub(rhs)
                }
            }

            impl Mul<$target> for $t {
                type Output = $target;

                fn mul(self, rhs: $target) -> $target {
                    $target::from(self).$mul(&rhs)
                }
            }

            impl Mul<&$target> for $t {
                type Output = $target;

                fn mul(self, rhs: &$target) -> $target {
                    $target::from(self).$mul(rhs)
                }
            }
        )*
    };
}

impl_reflected_ops!(Seq, add_seq, sub_seq, mul_seq; i32, i64);
impl_reflected_ops!(Sig, add_sig, sub_sig, mul_sig; i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_operators() {
        let a = Seq::from([1, 1]);
        assert_eq!(&a * &a, Seq::from([1, 2, 1]));
        assert_eq!(&a + [0, 0, 1], Seq::from([1, 1, 1]));
        assert_eq!(a.clone() - 1, Seq::from([0, 1]));
        assert_eq!(-&a, Seq::from([-1, -1]));
    }

    #[test]
    fn test_seq_reflected() {
        let a = Seq::from([1, 2]);
        assert_eq!(3 - &a, Seq::from([2, -2]));
        assert_eq!(2 * a.clone(), Seq::from([2, 4]));
        assert_eq!(1i64 + a, Seq::from([2, 2]));
    }

    #[test]
    fn test_seq_assign() {
        let mut a = Seq::from([1]);
        a += [0, 1];
        a *= Seq::from([1, 1]);
        a -= 1;
        assert_eq!(a, Seq::from([0, 2, 1]));
    }

    #[test]
    fn test_sig_operators_coerce() {
        let g = Sig::from([1, 1]);
        // A list on the right is wrapped as a sequence, then a signature.
        assert_eq!(&g + vec![1], g.add_sig(&Sig::from([1])));
        assert_eq!(&g * 1, g);
        assert_eq!(1 * &g, g);
    }
}
