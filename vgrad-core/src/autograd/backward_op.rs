use crate::error::VgradError;
use crate::tensor::Tensor;
use crate::types::Element;
use std::fmt::Debug;

/// Backward rule of an operation with a single differentiable input.
///
/// Implementations store whatever context the forward pass produced (detached
/// inputs, precomputed local derivatives, axes). They must never hold the
/// output tensor's own node, which would create a reference cycle.
///
/// The returned gradient must have exactly the input's shape.
pub trait UnaryBackward<T: Element>: Debug + Send + Sync {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<Tensor<T>, VgradError>;
}

/// Backward rule of an operation with two differentiable inputs.
///
/// Returns `(dL/dlhs, dL/drhs)`, each shaped like the corresponding input.
pub trait BinaryBackward<T: Element>: Debug + Send + Sync {
    fn backward(&self, grad_output: &Tensor<T>) -> Result<(Tensor<T>, Tensor<T>), VgradError>;
}
