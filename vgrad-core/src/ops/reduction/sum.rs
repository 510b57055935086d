use crate::error::VgradError;
use crate::ops::reduction::utils::{reduce_op, Reduction};
use crate::tensor::Tensor;
use crate::types::Element;

/// Sums over `axis`. With `keep_dim` the axis stays with size 1.
pub fn sum_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<T>, VgradError> {
    reduce_op(tensor, axis, keep_dim, Reduction::Sum)
}

/// Sums every element into a rank-0 tensor. A rank-0 input is returned as is.
pub fn sum_all_op<T: Element>(tensor: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    let mut result = tensor.clone();
    while !result.shape().is_scalar() {
        result = sum_op(&result, -1, false)?;
    }
    Ok(result)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
