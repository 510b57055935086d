use crate::error::VgradError;
use crate::ops::view::reshape::reshape_to;
use crate::shape::Dimension;
use crate::tensor::Tensor;
use crate::types::Element;

/// Removes the size-1 dimension at `axis`.
///
/// Shares the buffer; the backward pass reshapes the gradient back.
pub fn squeeze_op<T: Element>(tensor: &Tensor<T>, axis: isize) -> Result<Tensor<T>, VgradError> {
    let size = tensor.shape().size_at(axis)?;
    if size != 1 {
        return Err(VgradError::InvalidShape {
            shape: tensor.dims(),
            reason: format!("cannot squeeze axis {} of size {}", axis, size),
        });
    }
    let new_shape = tensor.shape().remove(axis)?;
    reshape_to(tensor, new_shape)
}

/// Inserts a size-1 dimension so that it ends up at position `axis`.
///
/// `axis` may equal the rank, which appends a trailing dimension; negative
/// values count from the end of the result, so `-1` also appends.
pub fn unsqueeze_op<T: Element>(tensor: &Tensor<T>, axis: isize) -> Result<Tensor<T>, VgradError> {
    let new_shape = tensor.shape().insert(axis, Dimension::unit())?;
    reshape_to(tensor, new_shape)
}
