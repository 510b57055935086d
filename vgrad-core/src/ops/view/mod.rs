// vgrad-core/src/ops/view/mod.rs

pub mod broadcast;
pub mod repeat;
pub mod reshape;
pub mod squeeze_unsqueeze;
pub mod transpose;

pub use broadcast::broadcast_to_op;
pub use repeat::repeat_op;
pub use reshape::reshape_op;
pub use squeeze_unsqueeze::{squeeze_op, unsqueeze_op};
pub use transpose::transpose_op;
