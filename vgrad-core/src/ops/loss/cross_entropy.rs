use crate::error::VgradError;
use crate::ops::activation::log_softmax_op;
use crate::ops::arithmetic::{mul_op, neg_op};
use crate::ops::indexing::one_hot_op;
use crate::ops::reduction::{mean_all_op, sum_op};
use crate::tensor::Tensor;
use crate::types::{Element, FloatElement};
use num_traits::PrimInt;

/// Mean negative log-likelihood of integer `labels` under `logits`.
///
/// `logits` has shape `[..., C]` and `labels` the leading shape `[...]`. The
/// result is the rank-0 mean over all leading positions of
/// `-sum(log_softmax(logits) * one_hot(labels), -1)`.
///
/// # Errors
/// `ShapeMismatch` if the label shape differs from the leading logits shape,
/// `ClassIndexOutOfRange` if a label is not in `[0, C)`.
pub fn cross_entropy_op<T, L>(logits: &Tensor<T>, labels: &Tensor<L>) -> Result<Tensor<T>, VgradError>
where
    T: FloatElement,
    L: Element + PrimInt,
{
    let leading = logits.shape().remove(-1)?;
    if labels.shape() != &leading {
        return Err(VgradError::ShapeMismatch {
            expected: leading.sizes(),
            actual: labels.dims(),
            operation: "cross_entropy".to_string(),
        });
    }
    let classes = logits.shape().size_at(-1)?;
    let log_probs = log_softmax_op(logits, -1)?;
    let targets: Tensor<T> = one_hot_op(labels, classes)?;
    let picked = sum_op(&mul_op(&log_probs, &targets)?, -1, false)?;
    mean_all_op(&neg_op(&picked))
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
