use crate::error::VgradError;
use crate::ops::view;
use crate::shape::Shape;
use crate::tensor::Tensor;
use crate::types::Element;

/// Shape-manipulating methods. `reshape`, `squeeze` and `unsqueeze` share the
/// buffer with `self`; `transpose`, `repeat` and `broadcast_to` copy.
impl<T: Element> Tensor<T> {
    /// Reinterprets the elements under a new shape with the same element count.
    ///
    /// Delegates to [`view::reshape_op`].
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, VgradError> {
        view::reshape_op(self, new_shape)
    }

    /// Swaps dimensions `dim1` and `dim2`. Negative indices count from the end.
    ///
    /// # Example
    /// ```
    /// use vgrad_core::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// let tt = t.transpose(0, 1).unwrap();
    /// assert_eq!(tt.dims(), vec![3, 2]);
    /// assert_eq!(tt.to_vec(), vec![1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&self, dim1: isize, dim2: isize) -> Result<Self, VgradError> {
        view::transpose_op(self, dim1, dim2)
    }

    /// Removes the size-1 dimension at `axis`.
    pub fn squeeze(&self, axis: isize) -> Result<Self, VgradError> {
        view::squeeze_op(self, axis)
    }

    /// Inserts a size-1 dimension at `axis` (which may equal the rank; `-1`
    /// appends).
    pub fn unsqueeze(&self, axis: isize) -> Result<Self, VgradError> {
        view::unsqueeze_op(self, axis)
    }

    /// Replicates the size-1 dimension at `axis` `times` times.
    pub fn repeat(&self, axis: isize, times: usize) -> Result<Self, VgradError> {
        view::repeat_op(self, axis, times)
    }

    /// Expands to `target` by prepending dimensions; `self.shape()` must equal
    /// the trailing dimensions of `target`.
    pub fn broadcast_to(&self, target: &Shape) -> Result<Self, VgradError> {
        view::broadcast_to_op(self, target)
    }
}
