use thiserror::Error;

/// Custom error type for the vgrad library.
///
/// Every variant describes a violated precondition. Operations check their
/// preconditions before computing anything, so an error never leaves a
/// partially built tensor or graph node behind.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum VgradError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes {shape1:?} and {shape2:?}: trailing dimensions must match")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Incompatible shapes for matmul: {lhs:?} and {rhs:?}")]
    MatmulMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: isize, rank: usize },

    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("value() requires a rank-0 tensor, got shape {shape:?}")]
    NotAScalar { shape: Vec<usize> },

    #[error("Backward called on non-scalar tensor of shape {shape:?}")]
    BackwardNonScalar { shape: Vec<usize> },

    #[error("Class index {index} out of range for {classes} classes")]
    ClassIndexOutOfRange { index: i64, classes: usize },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
