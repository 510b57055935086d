use crate::error::VgradError;
use crate::ops::arithmetic::{add_op, div_op, sub_op};
use crate::ops::math_elem::{exp_op, ln_op};
use crate::ops::reduction::{max_op, sum_op};
use crate::ops::view::{repeat_op, squeeze_op};
use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Stretches a keep-dim reduction result back over `axis`.
fn expand_reduced<T: FloatElement>(
    reduced: &Tensor<T>,
    axis: usize,
    size: usize,
) -> Result<Tensor<T>, VgradError> {
    if size == 1 {
        return Ok(reduced.clone());
    }
    repeat_op(reduced, axis as isize, size)
}

/// `x - max(x, axis)`; the maximum is a constant for differentiation.
fn shift_by_max<T: FloatElement>(
    tensor: &Tensor<T>,
    axis: usize,
    size: usize,
) -> Result<(Tensor<T>, Tensor<T>), VgradError> {
    let max = max_op(&tensor.detach(), axis as isize, true)?;
    let shifted = sub_op(tensor, &expand_reduced(&max, axis, size)?)?;
    Ok((shifted, max))
}

/// `log(sum(exp(shifted), axis))` with the reduced axis kept.
fn log_sum_exp_kept<T: FloatElement>(shifted: &Tensor<T>, axis: usize) -> Result<Tensor<T>, VgradError> {
    let sum = sum_op(&exp_op(shifted), axis as isize, true)?;
    Ok(ln_op(&sum))
}

/// `exp(x) / sum(exp(x), axis)`, computed on `x - max(x)`.
pub fn softmax_op<T: FloatElement>(tensor: &Tensor<T>, axis: isize) -> Result<Tensor<T>, VgradError> {
    let i = tensor.shape().normalize_index(axis)?;
    let size = tensor.shape().dims()[i].size();
    let (shifted, _) = shift_by_max(tensor, i, size)?;
    let exp = exp_op(&shifted);
    let sum = sum_op(&exp, i as isize, true)?;
    div_op(&exp, &expand_reduced(&sum, i, size)?)
}

/// `x - logsumexp(x, axis)`, computed on `x - max(x)`.
pub fn log_softmax_op<T: FloatElement>(tensor: &Tensor<T>, axis: isize) -> Result<Tensor<T>, VgradError> {
    let i = tensor.shape().normalize_index(axis)?;
    let size = tensor.shape().dims()[i].size();
    let (shifted, _) = shift_by_max(tensor, i, size)?;
    let lse = log_sum_exp_kept(&shifted, i)?;
    sub_op(&shifted, &expand_reduced(&lse, i, size)?)
}

/// `log(sum(exp(x), axis))`, computed as `m + log(sum(exp(x - m)))`.
pub fn logsumexp_op<T: FloatElement>(
    tensor: &Tensor<T>,
    axis: isize,
    keep_dim: bool,
) -> Result<Tensor<T>, VgradError> {
    let i = tensor.shape().normalize_index(axis)?;
    let size = tensor.shape().dims()[i].size();
    let (shifted, max) = shift_by_max(tensor, i, size)?;
    let result = add_op(&log_sum_exp_kept(&shifted, i)?, &max)?;
    if keep_dim {
        Ok(result)
    } else {
        squeeze_op(&result, i as isize)
    }
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
