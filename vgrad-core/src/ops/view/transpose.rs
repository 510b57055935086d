use crate::autograd::backward_op::UnaryBackward;
use crate::error::VgradError;
use crate::ops::unary_output;
use crate::tensor::Tensor;
use crate::types::Element;

/// Swaps dimensions `dim1` and `dim2`, copying the elements into the new
/// row-major order.
///
/// # Arguments
/// * `tensor`: The input tensor.
/// * `dim1`: The first dimension (negative counts from the end).
/// * `dim2`: The second dimension.
pub fn transpose_op<T: Element>(
    tensor: &Tensor<T>,
    dim1: isize,
    dim2: isize,
) -> Result<Tensor<T>, VgradError> {
    let in_shape = tensor.shape();
    let d1 = in_shape.normalize_index(dim1)?;
    let d2 = in_shape.normalize_index(dim2)?;
    let out_shape = in_shape.transpose(dim1, dim2)?;

    let data = if d1 == d2 {
        tensor.to_vec()
    } else {
        let out_sizes = out_shape.sizes();
        // Strides of the input, reordered to follow the output's axes.
        let mut in_strides = in_shape.strides();
        in_strides.swap(d1, d2);

        let input = tensor.flat_view();
        let mut data = Vec::with_capacity(input.len());
        let mut index = vec![0usize; out_sizes.len()];
        let mut src = 0usize;
        for _ in 0..input.len() {
            data.push(input[src]);
            // Odometer increment over the output index.
            for axis in (0..out_sizes.len()).rev() {
                index[axis] += 1;
                src += in_strides[axis];
                if index[axis] < out_sizes[axis] {
                    break;
                }
                src -= in_strides[axis] * out_sizes[axis];
                index[axis] = 0;
            }
        }
        data
    };

    Ok(unary_output(
        data,
        out_shape,
        tensor,
        TransposeBackward { dim1, dim2 },
    ))
}

#[derive(Debug)]
struct TransposeBackward {
    dim1: isize,
    dim2: isize,
}

impl<T: Element> UnaryBackward<T> for TransposeBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        transpose_op(grad_output, self.dim1, self.dim2)
    }
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
