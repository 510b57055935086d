//! Shared machinery for axis reductions.

use crate::autograd::backward_op::UnaryBackward;
use crate::error::VgradError;
use crate::ops::unary_output;
use crate::ops::view::{squeeze_op, transpose_op, unsqueeze_op};
use crate::tensor::Tensor;
use crate::types::Element;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reduction {
    Sum,
    Prod,
    Max,
    Min,
}

impl Reduction {
    fn reduce<T: Element>(self, row: &[T]) -> T {
        match self {
            Reduction::Sum => row.iter().copied().sum(),
            Reduction::Prod => row.iter().fold(T::one(), |acc, &x| acc * x),
            Reduction::Max | Reduction::Min => row[extreme_index(row, self == Reduction::Max)],
        }
    }
}

/// Position of the first maximum (or minimum) in a non-empty row.
pub(crate) fn extreme_index<T: Element>(row: &[T], largest: bool) -> usize {
    let mut best = 0;
    for (k, &x) in row.iter().enumerate().skip(1) {
        let better = if largest { x > row[best] } else { x < row[best] };
        if better {
            best = k;
        }
    }
    best
}

/// Moves dimension `axis` to the last position, keeping the relative order of
/// the others: unsqueeze at the end, swap, squeeze the vacated slot.
pub(crate) fn pivot_to_last<T: Element>(tensor: &Tensor<T>, axis: usize) -> Result<Tensor<T>, VgradError> {
    let rank = tensor.rank();
    if axis + 1 == rank {
        return Ok(tensor.clone());
    }
    let appended = unsqueeze_op(tensor, rank as isize)?;
    let swapped = transpose_op(&appended, axis as isize, rank as isize)?;
    squeeze_op(&swapped, axis as isize)
}

/// Reduces `tensor` over `axis` with `reduction`.
pub(crate) fn reduce_op<T: Element>(
    tensor: &Tensor<T>,
    axis: isize,
    keep_dim: bool,
    reduction: Reduction,
) -> Result<Tensor<T>, VgradError> {
    let i = tensor.shape().normalize_index(axis)?;
    let pivoted = pivot_to_last(tensor, i)?;
    let reduced = reduce_last_op(&pivoted, reduction)?;
    if keep_dim {
        unsqueeze_op(&reduced, i as isize)
    } else {
        Ok(reduced)
    }
}

/// Reduces the last dimension of `tensor`.
pub(crate) fn reduce_last_op<T: Element>(
    tensor: &Tensor<T>,
    reduction: Reduction,
) -> Result<Tensor<T>, VgradError> {
    let out_shape = tensor.shape().remove(-1)?;
    let n = tensor.shape().size_at(-1)?;
    let data: Vec<T> = tensor
        .flat_view()
        .chunks(n)
        .map(|row| reduction.reduce(row))
        .collect();
    let output = Tensor::new_leaf(Arc::new(data.clone()), out_shape.clone());
    let grad_fn = ReduceLastBackward {
        reduction,
        input: tensor.detach(),
        output,
    };
    Ok(unary_output(data, out_shape, tensor, grad_fn))
}

/// Spreads each row's gradient back over the row.
///
/// - sum: every element receives the row gradient.
/// - prod: element `k` receives `prod / row[k] * g`; undefined when
///   `row[k]` is zero.
/// - max/min: the first extreme element receives the whole gradient.
#[derive(Debug)]
struct ReduceLastBackward<T: Element> {
    reduction: Reduction,
    input: Tensor<T>,
    output: Tensor<T>,
}

impl<T: Element> UnaryBackward<T> for ReduceLastBackward<T> {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        let input_shape = self.input.shape();
        let n = input_shape.size_at(-1)?;
        let mut data = Vec::with_capacity(input_shape.flat_size());
        let rows = self.input.flat_view().chunks(n);
        for ((row, &g), &out) in rows
            .zip(grad_output.flat_view())
            .zip(self.output.flat_view())
        {
            match self.reduction {
                Reduction::Sum => data.extend(std::iter::repeat(g).take(n)),
                Reduction::Prod => data.extend(row.iter().map(|&x| out / x * g)),
                Reduction::Max | Reduction::Min => {
                    let winner = extreme_index(row, self.reduction == Reduction::Max);
                    data.extend((0..n).map(|k| if k == winner { g } else { T::zero() }));
                }
            }
        }
        Tensor::from_vec_shape(data, input_shape.clone())
    }
}
