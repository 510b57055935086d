use crate::error::VgradError;
use crate::ops::arithmetic::div_scalar_op;
use crate::ops::reduction::sum::{sum_all_op, sum_op};
use crate::tensor::Tensor;
use crate::types::Element;

fn count_as<T: Element>(n: usize) -> Result<T, VgradError> {
    num_traits::cast(n)
        .ok_or_else(|| VgradError::InternalError(format!("cannot represent count {} as element type", n)))
}

/// Arithmetic mean over `axis`: the sum divided by the axis length.
pub fn mean_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<T>, VgradError> {
    let n = tensor.shape().size_at(axis)?;
    let sum = sum_op(tensor, axis, keep_dim)?;
    Ok(div_scalar_op(&sum, count_as(n)?))
}

/// Mean of every element, as a rank-0 tensor.
pub fn mean_all_op<T: Element>(tensor: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    let sum = sum_all_op(tensor)?;
    Ok(div_scalar_op(&sum, count_as(tensor.numel())?))
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
