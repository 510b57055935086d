use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Elementwise square root. The derivative is `1 / (2 * sqrt(x))`.
pub fn sqrt_op<T: FloatElement>(tensor: &Tensor<T>) -> Tensor<T> {
    apply_unary_op(
        tensor,
        |x| x.sqrt(),
        |_, y| (y + y).recip(),
        "sqrt",
    )
}
