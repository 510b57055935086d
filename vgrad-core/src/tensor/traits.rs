// src/tensor/traits.rs

use crate::ops::arithmetic;
use crate::tensor::Tensor;
use crate::types::Element;
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

impl<T: Element> Clone for Tensor<T> {
    /// Shallow clone: the copy shares the buffer and the graph node, so it is
    /// the same backward target as `self`.
    fn clone(&self) -> Self {
        Tensor {
            shape: self.shape.clone(),
            data: Arc::clone(&self.data),
            node: Arc::clone(&self.node),
        }
    }
}

impl<T: Element> Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={:?}, dtype={:?}, node={:?}, leaf={}, data=",
            self.shape.sizes(),
            T::DTYPE,
            self.node.id(),
            self.node.is_leaf()
        )?;
        const PREVIEW: usize = 8;
        if self.data.len() <= PREVIEW {
            write!(f, "{:?})", self.data.as_slice())
        } else {
            write!(
                f,
                "{:?} ... ~{} elements)",
                &self.data[..PREVIEW],
                self.data.len()
            )
        }
    }
}

/// Scalars print as their value, vectors as `[ a b c ]`, matrices one row per
/// line; higher ranks print a shape summary.
impl<T: Element> Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            0 => write!(f, "{}", self.data[0]),
            1 => write_row(f, self.data.as_slice()),
            2 => {
                let cols = self.shape.dims()[1].size();
                for (i, row) in self.data.chunks(cols).enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write_row(f, row)?;
                }
                Ok(())
            }
            _ => write!(f, "Tensor<{:?}>({})", T::DTYPE, self.shape),
        }
    }
}

fn write_row<T: Display>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for v in row {
        write!(f, " {}", v)?;
    }
    write!(f, " ]")
}

/// Value equality: same sizes and same elements. Graph identity is ignored.
impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && (Arc::ptr_eq(&self.data, &other.data) || self.data == other.data)
    }
}

// --- Operator overloads ---
//
// These are shorthands for the `xxx_op` functions. Each binary operator
// panics when the shapes cannot be broadcast; use the fallible methods
// (`add`, `sub`, ...) to handle that case.

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:path) => {
        /// # Panics
        /// If the operand shapes cannot be broadcast together.
        impl<'a, T: Element> $trait<&'a Tensor<T>> for &'a Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &'a Tensor<T>) -> Tensor<T> {
                $op(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        /// # Panics
        /// If the operand shapes cannot be broadcast together.
        impl<T: Element> $trait<Tensor<T>> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: Tensor<T>) -> Tensor<T> {
                $op(&self, &rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_binary_operator!(Add, add, arithmetic::add_op);
impl_binary_operator!(Sub, sub, arithmetic::sub_op);
impl_binary_operator!(Mul, mul, arithmetic::mul_op);
impl_binary_operator!(Div, div, arithmetic::div_op);

impl<T: Element> Neg for &Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Tensor<T> {
        arithmetic::neg_op(self)
    }
}

impl<T: Element> Neg for Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Tensor<T> {
        arithmetic::neg_op(&self)
    }
}

macro_rules! impl_scalar_operators {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for &Tensor<$t> {
                type Output = Tensor<$t>;
                fn add(self, rhs: $t) -> Tensor<$t> {
                    arithmetic::add_scalar_op(self, rhs)
                }
            }

            impl Sub<$t> for &Tensor<$t> {
                type Output = Tensor<$t>;
                fn sub(self, rhs: $t) -> Tensor<$t> {
                    arithmetic::sub_scalar_op(self, rhs)
                }
            }

            impl Mul<$t> for &Tensor<$t> {
                type Output = Tensor<$t>;
                fn mul(self, rhs: $t) -> Tensor<$t> {
                    arithmetic::mul_scalar_op(self, rhs)
                }
            }

            impl Div<$t> for &Tensor<$t> {
                type Output = Tensor<$t>;
                fn div(self, rhs: $t) -> Tensor<$t> {
                    arithmetic::div_scalar_op(self, rhs)
                }
            }

            impl Add<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;
                fn add(self, rhs: &Tensor<$t>) -> Tensor<$t> {
                    arithmetic::add_scalar_op(rhs, self)
                }
            }

            impl Sub<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;
                fn sub(self, rhs: &Tensor<$t>) -> Tensor<$t> {
                    arithmetic::rsub_scalar_op(rhs, self)
                }
            }

            impl Mul<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;
                fn mul(self, rhs: &Tensor<$t>) -> Tensor<$t> {
                    arithmetic::mul_scalar_op(rhs, self)
                }
            }

            impl Div<&Tensor<$t>> for $t {
                type Output = Tensor<$t>;
                fn div(self, rhs: &Tensor<$t>) -> Tensor<$t> {
                    arithmetic::rdiv_scalar_op(rhs, self)
                }
            }
        )*
    };
}

impl_scalar_operators!(f32, f64);
