pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod scalar;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use scalar::{
    add_scalar_op, div_scalar_op, mul_scalar_op, rdiv_scalar_op, rsub_scalar_op, sub_scalar_op,
};
pub use sub::sub_op;
