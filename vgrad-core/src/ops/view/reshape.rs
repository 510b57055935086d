use crate::autograd::backward_op::UnaryBackward;
use crate::error::VgradError;
use crate::ops::unary_output_shared;
use crate::shape::Shape;
use crate::tensor::Tensor;
use crate::types::Element;
use log::trace;
use std::sync::Arc;

/// Reinterprets the buffer of `tensor` under `new_shape` without copying.
///
/// The element count must stay the same.
pub fn reshape_op<T: Element>(tensor: &Tensor<T>, new_shape: &[usize]) -> Result<Tensor<T>, VgradError> {
    reshape_to(tensor, Shape::new(new_shape)?)
}

/// Same as [`reshape_op`] with a prebuilt shape (dimension names are kept).
pub fn reshape_to<T: Element>(tensor: &Tensor<T>, new_shape: Shape) -> Result<Tensor<T>, VgradError> {
    if new_shape.flat_size() != tensor.numel() {
        return Err(VgradError::ShapeMismatch {
            expected: tensor.dims(),
            actual: new_shape.sizes(),
            operation: "reshape".to_string(),
        });
    }
    trace!("reshape {} -> {}", tensor.shape(), new_shape);
    let grad_fn = ReshapeBackward {
        input_shape: tensor.shape().clone(),
    };
    Ok(unary_output_shared(
        Arc::clone(tensor.shared_data()),
        new_shape,
        tensor,
        grad_fn,
    ))
}

#[derive(Debug)]
struct ReshapeBackward {
    input_shape: Shape,
}

impl<T: Element> UnaryBackward<T> for ReshapeBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        reshape_to(grad_output, self.input_shape.clone())
    }
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
