use crate::autograd::backward_op::UnaryBackward;
use crate::error::VgradError;
use crate::ops::unary_output;
use crate::shape::{Dimension, Shape};
use crate::tensor::Tensor;
use crate::types::Element;

/// Replicates the size-1 dimension at `axis` `times` times.
pub fn repeat_op<T: Element>(tensor: &Tensor<T>, axis: isize, times: usize) -> Result<Tensor<T>, VgradError> {
    repeat_dim(tensor, axis, Dimension::new(times)?)
}

/// [`repeat_op`] taking the new dimension itself, so its name carries over.
pub(crate) fn repeat_dim<T: Element>(
    tensor: &Tensor<T>,
    axis: isize,
    dim: Dimension,
) -> Result<Tensor<T>, VgradError> {
    let in_shape = tensor.shape();
    let i = in_shape.normalize_index(axis)?;
    let current = in_shape.dims()[i].size();
    if current != 1 {
        return Err(VgradError::InvalidShape {
            shape: in_shape.sizes(),
            reason: format!("can only repeat a size-1 axis, axis {} has size {}", axis, current),
        });
    }
    let times = dim.size();
    let out_shape = in_shape.remove(axis)?.insert(i as isize, dim)?;

    // The input is viewed as [outer, 1, inner].
    let inner: usize = in_shape.dims()[i + 1..].iter().map(Dimension::size).product();
    let input = tensor.flat_view();
    let mut data = Vec::with_capacity(input.len() * times);
    for block in input.chunks(inner) {
        for _ in 0..times {
            data.extend_from_slice(block);
        }
    }

    Ok(unary_output(
        data,
        out_shape,
        tensor,
        RepeatBackward {
            axis: i,
            input_shape: in_shape.clone(),
        },
    ))
}

/// Sums the gradient over the replicated axis.
#[derive(Debug)]
struct RepeatBackward {
    axis: usize,
    input_shape: Shape,
}

impl<T: Element> UnaryBackward<T> for RepeatBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        let sizes = grad_output.dims();
        let times = sizes[self.axis];
        let inner: usize = sizes[self.axis + 1..].iter().product();
        let grad = grad_output.flat_view();
        let mut data = Vec::with_capacity(self.input_shape.flat_size());
        for group in grad.chunks(times * inner) {
            for k in 0..inner {
                let total: T = (0..times).map(|r| group[r * inner + k]).sum();
                data.push(total);
            }
        }
        Tensor::from_vec_shape(data, self.input_shape.clone())
    }
}
