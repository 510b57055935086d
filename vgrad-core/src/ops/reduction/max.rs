use crate::error::VgradError;
use crate::ops::reduction::utils::{reduce_op, Reduction};
use crate::tensor::Tensor;
use crate::types::Element;

/// Maximum over `axis`. Ties route the whole gradient to the first maximal
/// element along the axis.
pub fn max_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<T>, VgradError> {
    reduce_op(tensor, axis, keep_dim, Reduction::Max)
}

/// Minimum over `axis`, with the same tie rule as [`max_op`].
pub fn min_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<T>, VgradError> {
    reduce_op(tensor, axis, keep_dim, Reduction::Min)
}

#[cfg(test)]
#[path = "max_test.rs"]
mod tests;
