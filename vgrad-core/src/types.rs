use num_traits::{Float, Num, NumCast};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::Neg;

/// Defines the possible data types for Tensor elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// 32-bit integer type.
    I32,
    /// 64-bit integer type.
    I64,
}

impl DType {
    /// Size in bytes of one element.
    pub fn size_of(&self) -> usize {
        match self {
            DType::F32 => std::mem::size_of::<f32>(),
            DType::F64 => std::mem::size_of::<f64>(),
            DType::I32 => std::mem::size_of::<i32>(),
            DType::I64 => std::mem::size_of::<i64>(),
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

/// A numeric type that can be stored in a [`Tensor`](crate::Tensor).
///
/// Structural operations, arithmetic, comparisons and reductions are
/// available for every `Element`.
pub trait Element:
    Num + NumCast + Neg<Output = Self> + PartialOrd + Copy + Sum + Debug + Display + Send + Sync + 'static
{
    const DTYPE: DType;
}

/// A floating-point element type. Only tensors of these types can be
/// differentiated.
pub trait FloatElement: Element + Float {}

impl Element for f32 {
    const DTYPE: DType = DType::F32;
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;
}

impl FloatElement for f32 {}
impl FloatElement for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_size_and_kind() {
        assert_eq!(f32::DTYPE.size_of(), 4);
        assert_eq!(f64::DTYPE.size_of(), 8);
        assert_eq!(i32::DTYPE.size_of(), 4);
        assert_eq!(i64::DTYPE.size_of(), 8);
        assert!(f32::DTYPE.is_float());
        assert!(f64::DTYPE.is_float());
        assert!(!i32::DTYPE.is_float());
        assert!(!i64::DTYPE.is_float());
    }
}
