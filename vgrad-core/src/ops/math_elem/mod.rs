// vgrad-core/src/ops/math_elem/mod.rs

pub mod exp;
pub mod ln;
pub mod pow;
pub mod sqrt;
pub mod trig;

pub use exp::exp_op;
pub use ln::ln_op;
pub use pow::pow_op;
pub use sqrt::sqrt_op;
pub use trig::{cos_op, sin_op};
