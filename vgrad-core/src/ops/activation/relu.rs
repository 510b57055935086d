use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use crate::types::Element;

/// ReLU(x) = max(0, x), elementwise.
///
/// The derivative is taken as 0 at x = 0.
pub fn relu_op<T: Element>(tensor: &Tensor<T>) -> Tensor<T> {
    let zero = T::zero();
    apply_unary_op(
        tensor,
        |x| if x > zero { x } else { zero },
        |x, _| if x > zero { T::one() } else { zero },
        "relu",
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
