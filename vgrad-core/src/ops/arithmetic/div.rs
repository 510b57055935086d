use crate::autograd::backward_op::BinaryBackward;
use crate::error::VgradError;
use crate::ops::apply_binary_op;
use crate::ops::arithmetic::{mul_op, neg_op};
use crate::tensor::Tensor;
use crate::types::Element;

/// Elementwise `a / b` with broadcasting.
///
/// Division by zero follows the element type: infinities or NaN for floats.
/// Integer division by zero panics like the primitive operation.
pub fn div_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    apply_binary_op(a, b, |x, y| x / y, |lhs, rhs| DivBackward { lhs, rhs })
}

#[derive(Debug)]
struct DivBackward<T: Element> {
    lhs: Tensor<T>,
    rhs: Tensor<T>,
}

impl<T: Element> BinaryBackward<T> for DivBackward<T> {
    /// d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    fn backward(&self, grad_output: &Tensor<T>) -> Result<(Tensor<T>, Tensor<T>), VgradError> {
        let grad_lhs = div_op(grad_output, &self.rhs)?;
        let rhs_sq = mul_op(&self.rhs, &self.rhs)?;
        let grad_rhs = neg_op(&div_op(&mul_op(grad_output, &self.lhs)?, &rhs_sq)?);
        Ok((grad_lhs, grad_rhs))
    }
}
