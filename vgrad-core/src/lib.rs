//! # vgrad-core
//!
//! Immutable n-dimensional tensors with reverse-mode automatic
//! differentiation.
//!
//! Every operation returns a new [`Tensor`] that remembers its inputs and a
//! backward rule. [`backward`] walks that graph from a scalar output and
//! returns one gradient per requested target:
//!
//! ```
//! use vgrad_core::Tensor;
//!
//! let x = Tensor::scalar(5.0f64);
//! let y = x.sub_scalar(2.0).pow(2.0);
//! let grads = y.backward(&[&x]).unwrap();
//! assert_eq!(grads[0].value().unwrap(), 6.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod shape;
pub mod tensor;
pub mod types;
pub mod utils;

pub use autograd::backward;
pub use error::VgradError;
pub use shape::{Dimension, Shape};
pub use tensor::create::{
    arange, eye, full, full_like, linspace, ones, ones_like, rand, rand_with, randn, randn_like,
    randn_with, zeros, zeros_like,
};
pub use tensor::{NestedData, Tensor, TensorView};
pub use types::{DType, Element, FloatElement};

// Re-export traits required by public functions/structs
pub use num_traits;
