use crate::autograd::backward_op::BinaryBackward;
use crate::error::VgradError;
use crate::ops::apply_binary_op;
use crate::tensor::Tensor;
use crate::types::Element;

/// Elementwise `a * b` with broadcasting.
pub fn mul_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    apply_binary_op(a, b, |x, y| x * y, |lhs, rhs| MulBackward { lhs, rhs })
}

/// Holds detached copies of both operands.
#[derive(Debug)]
struct MulBackward<T: Element> {
    lhs: Tensor<T>,
    rhs: Tensor<T>,
}

impl<T: Element> BinaryBackward<T> for MulBackward<T> {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<(Tensor<T>, Tensor<T>), VgradError> {
        let grad_lhs = mul_op(grad_output, &self.rhs)?;
        let grad_rhs = mul_op(grad_output, &self.lhs)?;
        Ok((grad_lhs, grad_rhs))
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
