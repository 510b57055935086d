use crate::error::VgradError;
use crate::ops::view::repeat::repeat_dim;
use crate::ops::view::squeeze_unsqueeze::unsqueeze_op;
use crate::shape::Shape;
use crate::tensor::Tensor;
use crate::types::Element;

/// Result shape of combining `a` and `b` elementwise.
///
/// Equal shapes combine directly. Otherwise the lower-rank shape must equal
/// the trailing dimensions of the other one; size-1 dimensions are not
/// stretched.
pub fn broadcast_shapes(a: &Shape, b: &Shape) -> Result<Shape, VgradError> {
    if a == b {
        return Ok(a.clone());
    }
    let (short, long) = if a.rank() <= b.rank() { (a, b) } else { (b, a) };
    if short.rank() < long.rank() && long.last(short.rank())? == *short {
        return Ok(long.clone());
    }
    Err(VgradError::BroadcastError {
        shape1: a.sizes(),
        shape2: b.sizes(),
    })
}

/// Expands `tensor` to `target` by prepending dimensions.
///
/// Built from unsqueeze and repeat, so the gradient is summed over the new
/// leading dimensions automatically.
pub fn broadcast_to_op<T: Element>(tensor: &Tensor<T>, target: &Shape) -> Result<Tensor<T>, VgradError> {
    if tensor.shape() == target {
        return Ok(tensor.clone());
    }
    let rank = tensor.rank();
    if rank >= target.rank() || target.last(rank)? != *tensor.shape() {
        return Err(VgradError::BroadcastError {
            shape1: tensor.dims(),
            shape2: target.sizes(),
        });
    }
    let mut result = tensor.clone();
    for dim in target.dims()[..target.rank() - rank].iter().rev() {
        result = unsqueeze_op(&result, 0)?;
        result = repeat_dim(&result, 0, dim.clone())?;
    }
    Ok(result)
}

/// Broadcasts two operands to their common shape.
pub(crate) fn broadcast_pair<T: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
) -> Result<(Tensor<T>, Tensor<T>), VgradError> {
    let target = broadcast_shapes(a.shape(), b.shape())?;
    Ok((broadcast_to_op(a, &target)?, broadcast_to_op(b, &target)?))
}

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod tests;
