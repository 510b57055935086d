use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Elementwise natural logarithm.
///
/// Non-positive inputs produce NaN or negative infinity, as `f64::ln` does.
/// The derivative is `1 / x`.
pub fn ln_op<T: FloatElement>(tensor: &Tensor<T>) -> Tensor<T> {
    apply_unary_op(tensor, |x| x.ln(), |x, _| x.recip(), "ln")
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
