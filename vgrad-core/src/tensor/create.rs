// src/tensor/create.rs

use crate::error::VgradError;
use crate::shape::Shape;
use crate::tensor::Tensor;
use crate::types::{Element, FloatElement};
use rand::distributions::Standard;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::sync::Arc;

fn filled<T: Element>(shape: Shape, value: T) -> Tensor<T> {
    let data = vec![value; shape.flat_size()];
    Tensor::new_leaf(Arc::new(data), shape)
}

/// Creates a leaf tensor of the given shape filled with `value`.
pub fn full<T: Element>(shape: &[usize], value: T) -> Result<Tensor<T>, VgradError> {
    Ok(filled(Shape::new(shape)?, value))
}

/// Creates a leaf tensor filled with zeros.
pub fn zeros<T: Element>(shape: &[usize]) -> Result<Tensor<T>, VgradError> {
    full(shape, T::zero())
}

/// Creates a leaf tensor filled with ones.
pub fn ones<T: Element>(shape: &[usize]) -> Result<Tensor<T>, VgradError> {
    full(shape, T::one())
}

/// Zeros with the same shape (dimension names included) as `tensor`.
pub fn zeros_like<T: Element>(tensor: &Tensor<T>) -> Tensor<T> {
    filled(tensor.shape().clone(), T::zero())
}

pub fn ones_like<T: Element>(tensor: &Tensor<T>) -> Tensor<T> {
    filled(tensor.shape().clone(), T::one())
}

pub fn full_like<T: Element>(tensor: &Tensor<T>, value: T) -> Tensor<T> {
    filled(tensor.shape().clone(), value)
}

/// The `n x n` identity matrix.
pub fn eye<T: Element>(n: usize) -> Result<Tensor<T>, VgradError> {
    let shape = Shape::new(&[n, n])?;
    let mut data = vec![T::zero(); n * n];
    for i in 0..n {
        data[i * n + i] = T::one();
    }
    Ok(Tensor::new_leaf(Arc::new(data), shape))
}

/// Values `start, start + step, ...` strictly before `end`, as a 1-D tensor.
pub fn arange<T: Element>(start: T, end: T, step: T) -> Result<Tensor<T>, VgradError> {
    let zero = T::zero();
    if step == zero || (end > start && step < zero) || (end < start && step > zero) {
        return Err(VgradError::UnsupportedOperation(format!(
            "Invalid step {} for arange({}, {})",
            step, start, end
        )));
    }
    let mut data = Vec::new();
    let mut current = start;
    while (step > zero && current < end) || (step < zero && current > end) {
        data.push(current);
        current = current + step;
    }
    let len = data.len();
    Tensor::from_vec(data, &[len])
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace<T: FloatElement>(start: T, end: T, steps: usize) -> Result<Tensor<T>, VgradError> {
    if steps < 2 {
        return Err(VgradError::UnsupportedOperation(
            "Linspace requires at least 2 steps".to_string(),
        ));
    }
    let denom: T = num_traits::cast(steps - 1).ok_or_else(|| {
        VgradError::InternalError(format!("cannot represent {} as element type", steps - 1))
    })?;
    let step_size = (end - start) / denom;
    let mut data = Vec::with_capacity(steps);
    let mut current = start;
    for _ in 0..steps {
        data.push(current);
        current = current + step_size;
    }
    Tensor::from_vec(data, &[steps])
}

/// Standard-normal samples for a prebuilt shape; dimension names are kept.
fn randn_shape<T, R>(shape: Shape, rng: &mut R) -> Tensor<T>
where
    T: FloatElement,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    let data: Vec<T> = (0..shape.flat_size())
        .map(|_| StandardNormal.sample(rng))
        .collect();
    Tensor::new_leaf(Arc::new(data), shape)
}

/// Samples from the standard normal distribution using `rng`.
pub fn randn_with<T, R>(shape: &[usize], rng: &mut R) -> Result<Tensor<T>, VgradError>
where
    T: FloatElement,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    Ok(randn_shape(Shape::new(shape)?, rng))
}

/// Samples from the standard normal distribution using the thread-local RNG.
pub fn randn<T>(shape: &[usize]) -> Result<Tensor<T>, VgradError>
where
    T: FloatElement,
    StandardNormal: Distribution<T>,
{
    randn_with(shape, &mut rand::thread_rng())
}

/// Samples uniformly from `[0, 1)` using `rng`.
pub fn rand_with<T, R>(shape: &[usize], rng: &mut R) -> Result<Tensor<T>, VgradError>
where
    T: FloatElement,
    Standard: Distribution<T>,
    R: Rng + ?Sized,
{
    let shape = Shape::new(shape)?;
    let data: Vec<T> = (0..shape.flat_size()).map(|_| Standard.sample(rng)).collect();
    Ok(Tensor::new_leaf(Arc::new(data), shape))
}

pub fn rand<T>(shape: &[usize]) -> Result<Tensor<T>, VgradError>
where
    T: FloatElement,
    Standard: Distribution<T>,
{
    rand_with(shape, &mut rand::thread_rng())
}

/// Standard-normal samples shaped like `tensor`.
pub fn randn_like<T>(tensor: &Tensor<T>) -> Result<Tensor<T>, VgradError>
where
    T: FloatElement,
    StandardNormal: Distribution<T>,
{
    Ok(randn_shape(tensor.shape().clone(), &mut rand::thread_rng()))
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
