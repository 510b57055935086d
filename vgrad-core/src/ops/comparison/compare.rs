use crate::error::VgradError;
use crate::ops::view::broadcast::broadcast_pair;
use crate::tensor::Tensor;
use crate::types::Element;
use std::sync::Arc;

fn compare_op<T, F>(a: &Tensor<T>, b: &Tensor<T>, predicate: F) -> Result<Tensor<T>, VgradError>
where
    T: Element,
    F: Fn(&T, &T) -> bool,
{
    let (a, b) = broadcast_pair(&a.detach(), &b.detach())?;
    let data: Vec<T> = a
        .flat_view()
        .iter()
        .zip(b.flat_view())
        .map(|(x, y)| if predicate(x, y) { T::one() } else { T::zero() })
        .collect();
    Ok(Tensor::new_leaf(Arc::new(data), a.shape().clone()))
}

/// `1` where `a == b`, else `0`.
pub fn eq_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    compare_op(a, b, T::eq)
}

pub fn ne_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    compare_op(a, b, T::ne)
}

/// `1` where `a < b`, else `0`.
pub fn lt_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    compare_op(a, b, T::lt)
}

pub fn le_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    compare_op(a, b, T::le)
}

pub fn gt_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    compare_op(a, b, T::gt)
}

pub fn ge_op<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
    compare_op(a, b, T::ge)
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod tests;
