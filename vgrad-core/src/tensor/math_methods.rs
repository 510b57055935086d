use crate::autograd;
use crate::error::VgradError;
use crate::ops::{activation, arithmetic, comparison, indexing, linalg, loss, math_elem};
use crate::tensor::Tensor;
use crate::types::{Element, FloatElement};
use num_traits::PrimInt;

/// Arithmetic, comparison and linear-algebra methods available for every
/// element type.
impl<T: Element> Tensor<T> {
    /// Elementwise sum with broadcasting. See [`arithmetic::add_op`].
    pub fn add(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        arithmetic::add_op(self, other)
    }

    pub fn sub(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        arithmetic::sub_op(self, other)
    }

    pub fn mul(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        arithmetic::mul_op(self, other)
    }

    pub fn div(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        arithmetic::div_op(self, other)
    }

    pub fn neg(&self) -> Self {
        arithmetic::neg_op(self)
    }

    pub fn add_scalar(&self, scalar: T) -> Self {
        arithmetic::add_scalar_op(self, scalar)
    }

    pub fn sub_scalar(&self, scalar: T) -> Self {
        arithmetic::sub_scalar_op(self, scalar)
    }

    /// `scalar - self`
    pub fn rsub_scalar(&self, scalar: T) -> Self {
        arithmetic::rsub_scalar_op(self, scalar)
    }

    pub fn mul_scalar(&self, scalar: T) -> Self {
        arithmetic::mul_scalar_op(self, scalar)
    }

    pub fn div_scalar(&self, scalar: T) -> Self {
        arithmetic::div_scalar_op(self, scalar)
    }

    /// `scalar / self`
    pub fn rdiv_scalar(&self, scalar: T) -> Self {
        arithmetic::rdiv_scalar_op(self, scalar)
    }

    pub fn relu(&self) -> Self {
        activation::relu_op(self)
    }

    /// Matrix product over the last two dimensions. See [`linalg::matmul_op`].
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        linalg::matmul_op(self, other)
    }

    pub fn eq(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        comparison::eq_op(self, other)
    }

    pub fn ne(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        comparison::ne_op(self, other)
    }

    pub fn lt(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        comparison::lt_op(self, other)
    }

    pub fn le(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        comparison::le_op(self, other)
    }

    pub fn gt(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        comparison::gt_op(self, other)
    }

    pub fn ge(&self, other: &Tensor<T>) -> Result<Self, VgradError> {
        comparison::ge_op(self, other)
    }
}

/// Differentiable math available for floating-point tensors.
impl<T: FloatElement> Tensor<T> {
    pub fn exp(&self) -> Self {
        math_elem::exp_op(self)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Self {
        math_elem::ln_op(self)
    }

    /// Alias of [`Tensor::ln`].
    pub fn log(&self) -> Self {
        math_elem::ln_op(self)
    }

    pub fn pow(&self, exponent: T) -> Self {
        math_elem::pow_op(self, exponent)
    }

    pub fn sqrt(&self) -> Self {
        math_elem::sqrt_op(self)
    }

    pub fn sin(&self) -> Self {
        math_elem::sin_op(self)
    }

    pub fn cos(&self) -> Self {
        math_elem::cos_op(self)
    }

    pub fn softmax(&self, axis: isize) -> Result<Self, VgradError> {
        activation::softmax_op(self, axis)
    }

    pub fn log_softmax(&self, axis: isize) -> Result<Self, VgradError> {
        activation::log_softmax_op(self, axis)
    }

    pub fn logsumexp(&self, axis: isize, keep_dim: bool) -> Result<Self, VgradError> {
        activation::logsumexp_op(self, axis, keep_dim)
    }

    /// Mean cross-entropy of `labels` under these logits. See
    /// [`loss::cross_entropy_op`].
    pub fn cross_entropy<L: Element + PrimInt>(&self, labels: &Tensor<L>) -> Result<Self, VgradError> {
        loss::cross_entropy_op(self, labels)
    }

    /// Gradients of this rank-0 tensor with respect to `targets`.
    ///
    /// Delegates to [`autograd::backward`].
    ///
    /// # Example
    /// ```
    /// use vgrad_core::Tensor;
    ///
    /// let x = Tensor::scalar(3.0f64);
    /// let y = x.mul(&x).unwrap();
    /// let grads = y.backward(&[&x]).unwrap();
    /// assert_eq!(grads[0].value().unwrap(), 6.0);
    /// ```
    pub fn backward(&self, targets: &[&Tensor<T>]) -> Result<Vec<Self>, VgradError> {
        autograd::backward(self, targets)
    }
}

/// Methods on integer label tensors.
impl<L: Element + PrimInt> Tensor<L> {
    /// One-hot encoding over `classes`. See [`indexing::one_hot_op`].
    pub fn one_hot<T: Element>(&self, classes: usize) -> Result<Tensor<T>, VgradError> {
        indexing::one_hot_op(self, classes)
    }
}
