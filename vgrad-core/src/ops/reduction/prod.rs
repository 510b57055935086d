use crate::error::VgradError;
use crate::ops::reduction::utils::{reduce_op, Reduction};
use crate::tensor::Tensor;
use crate::types::Element;

/// Multiplies over `axis`.
///
/// The gradient of element `k` is `prod / x[k] * g`, so it is undefined
/// (NaN or infinite) when `x[k]` is zero.
pub fn prod_op<T: Element>(tensor: &Tensor<T>, axis: isize, keep_dim: bool) -> Result<Tensor<T>, VgradError> {
    reduce_op(tensor, axis, keep_dim, Reduction::Prod)
}
