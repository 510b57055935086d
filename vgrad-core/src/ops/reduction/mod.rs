// vgrad-core/src/ops/reduction/mod.rs
//
// Every reduction over an axis moves that axis to the end, reduces the last
// dimension, and optionally reinserts a size-1 axis in its place.

pub mod arg;
pub mod max;
pub mod mean;
pub mod prod;
pub mod sum;
pub(crate) mod utils;

pub use arg::{argmax_op, argmin_op};
pub use max::{max_op, min_op};
pub use mean::{mean_all_op, mean_op};
pub use prod::prod_op;
pub use sum::{sum_all_op, sum_op};
