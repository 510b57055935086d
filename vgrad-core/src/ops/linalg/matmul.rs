use crate::error::VgradError;
use crate::ops::arithmetic::mul_op;
use crate::ops::reduction::sum_op;
use crate::ops::view::broadcast::broadcast_shapes;
use crate::ops::view::repeat::repeat_dim;
use crate::ops::view::{transpose_op, unsqueeze_op};
use crate::tensor::Tensor;
use crate::types::Element;
use log::trace;

/// Matrix product of `a: [..., M, N]` and `b: [..., N, P]`, giving
/// `[..., M, P]`.
///
/// Leading batch dimensions combine with the usual broadcasting rule. The
/// product is assembled from differentiable primitives: `a` is stretched to
/// `[..., M, P, N]`, `b` is transposed and stretched to the same shape, and
/// their elementwise product is summed over `N`. Gradients therefore come out
/// of the primitives' own backward rules.
///
/// # Errors
/// `MatmulMismatch` if either operand has rank below 2, the inner dimensions
/// differ, or the batch dimensions cannot be broadcast.
pub fn matmul_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    let mismatch = || VgradError::MatmulMismatch {
        lhs: a.dims(),
        rhs: b.dims(),
    };
    let (rank_a, rank_b) = (a.rank(), b.rank());
    if rank_a < 2 || rank_b < 2 {
        return Err(mismatch());
    }
    if a.shape().size_at(-1)? != b.shape().size_at(-2)? {
        return Err(mismatch());
    }
    let batch_a = a.shape().remove(-1)?.remove(-1)?;
    let batch_b = b.shape().remove(-1)?.remove(-1)?;
    broadcast_shapes(&batch_a, &batch_b).map_err(|_| mismatch())?;
    trace!("matmul {} @ {}", a.shape(), b.shape());

    let m_dim = a.shape().at(-2)?.clone();
    let p_dim = b.shape().at(-1)?.clone();

    // [..., M, N] -> [..., M, 1, N] -> [..., M, P, N]
    let lhs = unsqueeze_op(a, rank_a as isize - 1)?;
    let lhs = repeat_dim(&lhs, rank_a as isize - 1, p_dim)?;

    // [..., N, P] -> [..., P, N] -> [..., 1, P, N] -> [..., M, P, N]
    let rhs = transpose_op(b, -1, -2)?;
    let rhs = unsqueeze_op(&rhs, rank_b as isize - 2)?;
    let rhs = repeat_dim(&rhs, rank_b as isize - 2, m_dim)?;

    sum_op(&mul_op(&lhs, &rhs)?, -1, false)
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
