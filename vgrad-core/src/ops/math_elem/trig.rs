use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Elementwise sine.
pub fn sin_op<T: FloatElement>(tensor: &Tensor<T>) -> Tensor<T> {
    apply_unary_op(tensor, |x| x.sin(), |x, _| x.cos(), "sin")
}

/// Elementwise cosine.
pub fn cos_op<T: FloatElement>(tensor: &Tensor<T>) -> Tensor<T> {
    apply_unary_op(tensor, |x| x.cos(), |x, _| -x.sin(), "cos")
}
