//! Tensor-scalar arithmetic. The scalar is a constant; only the tensor
//! operand receives a gradient.

use crate::autograd::backward_op::UnaryBackward;
use crate::error::VgradError;
use crate::ops::{apply_unary_op, unary_output};
use crate::tensor::Tensor;
use crate::types::Element;

fn map_scalar<T, F, B>(tensor: &Tensor<T>, op: F, grad_fn: B) -> Tensor<T>
where
    T: Element,
    F: Fn(T) -> T,
    B: UnaryBackward<T> + 'static,
{
    let data: Vec<T> = tensor.flat_view().iter().map(|&x| op(x)).collect();
    unary_output(data, tensor.shape().clone(), tensor, grad_fn)
}

/// `tensor + scalar`
pub fn add_scalar_op<T: Element>(tensor: &Tensor<T>, scalar: T) -> Tensor<T> {
    map_scalar(tensor, |x| x + scalar, PassThroughBackward)
}

/// `tensor - scalar`
pub fn sub_scalar_op<T: Element>(tensor: &Tensor<T>, scalar: T) -> Tensor<T> {
    map_scalar(tensor, |x| x - scalar, PassThroughBackward)
}

/// `scalar - tensor`
pub fn rsub_scalar_op<T: Element>(tensor: &Tensor<T>, scalar: T) -> Tensor<T> {
    map_scalar(tensor, |x| scalar - x, ScaleBackward { factor: -T::one() })
}

/// `tensor * scalar`
pub fn mul_scalar_op<T: Element>(tensor: &Tensor<T>, scalar: T) -> Tensor<T> {
    map_scalar(tensor, |x| x * scalar, ScaleBackward { factor: scalar })
}

/// `tensor / scalar`
pub fn div_scalar_op<T: Element>(tensor: &Tensor<T>, scalar: T) -> Tensor<T> {
    map_scalar(tensor, |x| x / scalar, DivideBackward { divisor: scalar })
}

/// `scalar / tensor`
pub fn rdiv_scalar_op<T: Element>(tensor: &Tensor<T>, scalar: T) -> Tensor<T> {
    apply_unary_op(tensor, |x| scalar / x, |x, y| -y / x, "rdiv_scalar")
}

#[derive(Debug)]
struct PassThroughBackward;

impl<T: Element> UnaryBackward<T> for PassThroughBackward {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        Ok(grad_output.clone())
    }
}

#[derive(Debug)]
struct ScaleBackward<T> {
    factor: T,
}

impl<T: Element> UnaryBackward<T> for ScaleBackward<T> {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        Ok(mul_scalar_op(grad_output, self.factor))
    }
}

#[derive(Debug)]
struct DivideBackward<T> {
    divisor: T,
}

impl<T: Element> UnaryBackward<T> for DivideBackward<T> {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        Ok(div_scalar_op(grad_output, self.divisor))
    }
}
