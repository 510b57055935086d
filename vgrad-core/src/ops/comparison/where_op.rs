//! Conditional selection: `where_op`.

use crate::autograd::backward_op::BinaryBackward;
use crate::error::VgradError;
use crate::ops::binary_output;
use crate::ops::view::broadcast::{broadcast_pair, broadcast_to_op};
use crate::tensor::Tensor;
use crate::types::Element;
use std::sync::Arc;

/// Elementwise selection: `x` where `condition` is non-zero, else `y`.
///
/// `x` and `y` are broadcast together first, then `condition` is broadcast
/// to their common shape. The result is differentiable in `x` and `y`; the
/// condition is treated as a constant.
pub fn where_op<T: Element>(
    condition: &Tensor<T>,
    x: &Tensor<T>,
    y: &Tensor<T>,
) -> Result<Tensor<T>, VgradError> {
    let (x, y) = broadcast_pair(x, y)?;
    let condition = broadcast_to_op(&condition.detach(), x.shape())?;

    let zero = T::zero();
    let mask: Vec<T> = condition
        .flat_view()
        .iter()
        .map(|&c| if c != zero { T::one() } else { zero })
        .collect();
    let data: Vec<T> = mask
        .iter()
        .zip(x.flat_view().iter().zip(y.flat_view()))
        .map(|(&m, (&a, &b))| if m != zero { a } else { b })
        .collect();

    let shape = x.shape().clone();
    let grad_fn = WhereBackward {
        mask: Tensor::new_leaf(Arc::new(mask), shape.clone()),
    };
    Ok(binary_output(data, shape, &x, &y, grad_fn))
}

/// Routes the gradient to `x` where the mask is set and to `y` elsewhere.
#[derive(Debug)]
struct WhereBackward<T: Element> {
    mask: Tensor<T>,
}

impl<T: Element> BinaryBackward<T> for WhereBackward<T> {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<(Tensor<T>, Tensor<T>), VgradError> {
        let zero = T::zero();
        let (to_x, to_y): (Vec<T>, Vec<T>) = grad_output
            .flat_view()
            .iter()
            .zip(self.mask.flat_view())
            .map(|(&g, &m)| if m != zero { (g, zero) } else { (zero, g) })
            .unzip();
        let shape = self.mask.shape();
        Ok((
            Tensor::from_vec_shape(to_x, shape.clone())?,
            Tensor::from_vec_shape(to_y, shape.clone())?,
        ))
    }
}

#[cfg(test)]
#[path = "where_op_test.rs"]
mod tests;
