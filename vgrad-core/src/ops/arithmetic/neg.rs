use crate::autograd::backward_op::UnaryBackward;
use crate::error::VgradError;
use crate::ops::unary_output;
use crate::tensor::Tensor;
use crate::types::Element;

/// Elementwise negation.
pub fn neg_op<T: Element>(tensor: &Tensor<T>) -> Tensor<T> {
    let data: Vec<T> = tensor.flat_view().iter().map(|&x| -x).collect();
    unary_output(data, tensor.shape().clone(), tensor, NegBackward)
}

#[derive(Debug)]
struct NegBackward;

impl<T: Element> UnaryBackward<T> for NegBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        Ok(neg_op(grad_output))
    }
}
