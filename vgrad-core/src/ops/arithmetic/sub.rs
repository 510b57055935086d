use crate::autograd::backward_op::BinaryBackward;
use crate::error::VgradError;
use crate::ops::apply_binary_op;
use crate::ops::arithmetic::neg_op;
use crate::tensor::Tensor;
use crate::types::Element;

/// Elementwise `a - b` with broadcasting.
pub fn sub_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    apply_binary_op(a, b, |x, y| x - y, |_, _| SubBackward)
}

#[derive(Debug)]
struct SubBackward;

impl<T: Element> BinaryBackward<T> for SubBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<(Tensor<T>, Tensor<T>), VgradError> {
        Ok((grad_output.clone(), neg_op(grad_output)))
    }
}
