use crate::error::VgradError;
use crate::ops::reduction;
use crate::tensor::Tensor;
use crate::types::Element;

/// Reductions over a single axis. With `keep_dim` the reduced axis stays in
/// the result with size 1.
impl<T: Element> Tensor<T> {
    pub fn sum(&self, axis: isize, keep_dim: bool) -> Result<Self, VgradError> {
        reduction::sum_op(self, axis, keep_dim)
    }

    /// Sum of all elements as a rank-0 tensor.
    pub fn sum_all(&self) -> Result<Self, VgradError> {
        reduction::sum_all_op(self)
    }

    pub fn prod(&self, axis: isize, keep_dim: bool) -> Result<Self, VgradError> {
        reduction::prod_op(self, axis, keep_dim)
    }

    pub fn max(&self, axis: isize, keep_dim: bool) -> Result<Self, VgradError> {
        reduction::max_op(self, axis, keep_dim)
    }

    pub fn min(&self, axis: isize, keep_dim: bool) -> Result<Self, VgradError> {
        reduction::min_op(self, axis, keep_dim)
    }

    pub fn mean(&self, axis: isize, keep_dim: bool) -> Result<Self, VgradError> {
        reduction::mean_op(self, axis, keep_dim)
    }

    /// Mean of all elements as a rank-0 tensor.
    pub fn mean_all(&self) -> Result<Self, VgradError> {
        reduction::mean_all_op(self)
    }

    /// Indices of the first maxima along `axis`. Not differentiable.
    pub fn argmax(&self, axis: isize, keep_dim: bool) -> Result<Tensor<i64>, VgradError> {
        reduction::argmax_op(self, axis, keep_dim)
    }

    /// Indices of the first minima along `axis`. Not differentiable.
    pub fn argmin(&self, axis: isize, keep_dim: bool) -> Result<Tensor<i64>, VgradError> {
        reduction::argmin_op(self, axis, keep_dim)
    }
}
