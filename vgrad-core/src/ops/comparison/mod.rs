// vgrad-core/src/ops/comparison/mod.rs
//
// Comparisons produce 0/1 masks in the operands' element type. They are
// constants for differentiation.

pub mod compare;
pub mod where_op;

pub use compare::{eq_op, ge_op, gt_op, le_op, lt_op, ne_op};
pub use where_op::where_op;
