use crate::error::VgradError;
use crate::ops::reduction::utils::{extreme_index, pivot_to_last};
use crate::shape::Dimension;
use crate::tensor::Tensor;
use crate::types::Element;
use std::sync::Arc;

fn arg_extreme<T: Element>(
    tensor: &Tensor<T>,
    axis: isize,
    keep_dim: bool,
    largest: bool,
) -> Result<Tensor<i64>, VgradError> {
    let i = tensor.shape().normalize_index(axis)?;
    let pivoted = pivot_to_last(&tensor.detach(), i)?;
    let n = pivoted.shape().size_at(-1)?;
    let data: Vec<i64> = pivoted
        .flat_view()
        .chunks(n)
        .map(|row| extreme_index(row, largest) as i64)
        .collect();
    let mut shape = tensor.shape().remove(i as isize)?;
    if keep_dim {
        shape = shape.insert(i as isize, Dimension::unit())?;
    }
    Ok(Tensor::new_leaf(Arc::new(data), shape))
}

/// Index of the first maximum along `axis`. The result is not differentiable.
pub fn argmax_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<i64>, VgradError> {
    arg_extreme(tensor, axis, keep_dim, true)
}

/// Index of the first minimum along `axis`.
pub fn argmin_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<i64>, VgradError> {
    arg_extreme(tensor, axis, keep_dim, false)
}
