//! # Tensor Operations Module (`ops`)
//!
//! Operations are grouped by family. Each has a core `xxx_op` function that
//! validates its inputs, computes the forward result and attaches a backward
//! rule to the output node; `Tensor` methods are thin wrappers around these.
//!
//! - [`arithmetic`]: elementwise add/sub/mul/div/neg and scalar variants.
//! - [`math_elem`]: exp, ln, pow, sqrt, sin, cos.
//! - [`activation`]: relu and the softmax family.
//! - [`comparison`]: comparisons and `where_op`.
//! - [`view`]: reshape, squeeze/unsqueeze, transpose, repeat, broadcast.
//! - [`reduction`]: sum, prod, max, min, mean, argmax, argmin.
//! - [`linalg`]: matmul.
//! - [`indexing`]: one_hot.
//! - [`loss`]: cross_entropy.

use crate::autograd::backward_op::{BinaryBackward, UnaryBackward};
use crate::autograd::graph::NodeKind;
use crate::error::VgradError;
use crate::shape::Shape;
use crate::tensor::Tensor;
use crate::types::Element;
use std::sync::Arc;

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod indexing;
pub mod linalg;
pub mod loss;
pub mod math_elem;
pub mod reduction;
pub mod view;

/// Wraps `data` as the output of a one-input operation.
pub(crate) fn unary_output<T, B>(data: Vec<T>, shape: Shape, input: &Tensor<T>, grad_fn: B) -> Tensor<T>
where
    T: Element,
    B: UnaryBackward<T> + 'static,
{
    unary_output_shared(Arc::new(data), shape, input, grad_fn)
}

/// Same as [`unary_output`] for results that reuse an existing buffer.
pub(crate) fn unary_output_shared<T, B>(
    data: Arc<Vec<T>>,
    shape: Shape,
    input: &Tensor<T>,
    grad_fn: B,
) -> Tensor<T>
where
    T: Element,
    B: UnaryBackward<T> + 'static,
{
    Tensor::from_op(
        data,
        shape,
        NodeKind::Unary {
            input: Arc::clone(input.node()),
            grad_fn: Box::new(grad_fn),
        },
    )
}

/// Wraps `data` as the output of a two-input operation.
pub(crate) fn binary_output<T, B>(
    data: Vec<T>,
    shape: Shape,
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    grad_fn: B,
) -> Tensor<T>
where
    T: Element,
    B: BinaryBackward<T> + 'static,
{
    Tensor::from_op(
        Arc::new(data),
        shape,
        NodeKind::Binary {
            lhs: Arc::clone(lhs.node()),
            rhs: Arc::clone(rhs.node()),
            grad_fn: Box::new(grad_fn),
        },
    )
}

/// Gradient of an elementwise function: `grad_output * f'(x)`, with the local
/// derivative evaluated during the forward pass.
#[derive(Debug)]
pub(crate) struct ElementwiseBackward<T: Element> {
    op_name: &'static str,
    local_grad: Tensor<T>,
}

impl<T: Element> UnaryBackward<T> for ElementwiseBackward<T> {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError> {
        let shape = self.local_grad.shape().clone();
        if grad_output.shape() != &shape {
            return Err(VgradError::ShapeMismatch {
                expected: shape.sizes(),
                actual: grad_output.dims(),
                operation: format!("{}_backward", self.op_name),
            });
        }
        let data: Vec<T> = grad_output
            .flat_view()
            .iter()
            .zip(self.local_grad.flat_view())
            .map(|(&g, &d)| g * d)
            .collect();
        Ok(Tensor::new_leaf(Arc::new(data), shape))
    }
}

/// Applies an elementwise function to a tensor.
///
/// `derivative(x, y)` receives the input element and the computed output
/// element and returns `dy/dx`; the results are stored for the backward pass.
pub(crate) fn apply_unary_op<T, F, D>(
    a: &Tensor<T>,
    op: F,
    derivative: D,
    op_name: &'static str,
) -> Tensor<T>
where
    T: Element,
    F: Fn(T) -> T,
    D: Fn(T, T) -> T,
{
    let input = a.flat_view();
    let output: Vec<T> = input.iter().map(|&x| op(x)).collect();
    let local: Vec<T> = input
        .iter()
        .zip(&output)
        .map(|(&x, &y)| derivative(x, y))
        .collect();
    let local_grad = Tensor::new_leaf(Arc::new(local), a.shape().clone());
    unary_output(
        output,
        a.shape().clone(),
        a,
        ElementwiseBackward {
            op_name,
            local_grad,
        },
    )
}

/// Applies an elementwise function of two tensors after broadcasting them to a
/// common shape. `make_backward` receives detached copies of the broadcast
/// operands.
pub(crate) fn apply_binary_op<T, F, B, M>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    op: F,
    make_backward: M,
) -> Result<Tensor<T>, VgradError>
where
    T: Element,
    F: Fn(T, T) -> T,
    B: BinaryBackward<T> + 'static,
    M: FnOnce(Tensor<T>, Tensor<T>) -> B,
{
    let (a, b) = view::broadcast::broadcast_pair(a, b)?;
    let data: Vec<T> = a
        .flat_view()
        .iter()
        .zip(b.flat_view())
        .map(|(&x, &y)| op(x, y))
        .collect();
    let grad_fn = make_backward(a.detach(), b.detach());
    Ok(binary_output(data, a.shape().clone(), &a, &b, grad_fn))
}
