//! Reverse-mode automatic differentiation.
//!
//! - [`graph`]: the node model every tensor carries.
//! - [`backward_op`]: the traits implemented by each operation's backward rule.
//! - [`backward()`]: the engine computing gradients of a scalar output.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::backward;
pub use backward_op::{BinaryBackward, UnaryBackward};
pub use graph::{Node, NodeId, NodeKind};
