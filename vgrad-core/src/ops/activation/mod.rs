//! # Activation Functions
//!
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`softmax_op`], [`log_softmax_op`], [`logsumexp_op`]: normalizations over
//!   an axis, stabilized by subtracting the (detached) maximum.

pub mod relu;
pub mod softmax;

pub use relu::relu_op;
pub use softmax::{log_softmax_op, logsumexp_op, softmax_op};
