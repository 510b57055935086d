use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Elementwise `e^x`. The derivative is the output itself.
pub fn exp_op<T: FloatElement>(tensor: &Tensor<T>) -> Tensor<T> {
    apply_unary_op(tensor, |x| x.exp(), |_, y| y, "exp")
}
