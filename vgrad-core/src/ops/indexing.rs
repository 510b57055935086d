//! Index-based constructors.

use crate::error::VgradError;
use crate::shape::Dimension;
use crate::tensor::Tensor;
use crate::types::Element;
use num_traits::PrimInt;
use std::sync::Arc;

/// Encodes integer `labels` as one-hot vectors over `classes`.
///
/// The output has shape `labels.shape + [classes]` and is a leaf: labels are
/// not differentiable.
///
/// # Errors
/// `InvalidShape` if `classes` is zero, `ClassIndexOutOfRange` if a label is
/// negative or not below `classes`.
pub fn one_hot_op<L, T>(labels: &Tensor<L>, classes: usize) -> Result<Tensor<T>, VgradError>
where
    L: Element + PrimInt,
    T: Element,
{
    let class_dim = Dimension::new(classes)?;
    let out_shape = labels
        .shape()
        .insert(labels.rank() as isize, class_dim)?;

    let mut data = vec![T::zero(); out_shape.flat_size()];
    for (row, &label) in labels.flat_view().iter().enumerate() {
        let index = label.to_i64().unwrap_or(i64::MIN);
        if index < 0 || index as usize >= classes {
            return Err(VgradError::ClassIndexOutOfRange { index, classes });
        }
        data[row * classes + index as usize] = T::one();
    }
    Ok(Tensor::new_leaf(Arc::new(data), out_shape))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_vector() {
        let labels = Tensor::from_vec(vec![0i64, 2, 1], &[3]).unwrap();
        let encoded: Tensor<f32> = one_hot_op(&labels, 3).unwrap();
        assert_eq!(encoded.dims(), vec![3, 3]);
        assert_eq!(
            encoded.to_vec(),
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0]
        );
        assert!(encoded.is_leaf());
    }

    #[test]
    fn test_one_hot_scalar_and_matrix_labels() {
        let label = Tensor::scalar(1i32);
        let encoded: Tensor<f64> = one_hot_op(&label, 4).unwrap();
        assert_eq!(encoded.dims(), vec![4]);
        assert_eq!(encoded.to_vec(), vec![0.0, 1.0, 0.0, 0.0]);

        let labels = Tensor::from_vec(vec![0i32, 1, 1, 0], &[2, 2]).unwrap();
        let encoded: Tensor<i64> = one_hot_op(&labels, 2).unwrap();
        assert_eq!(encoded.dims(), vec![2, 2, 2]);
        assert_eq!(encoded.to_vec(), vec![1, 0, 0, 1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_one_hot_out_of_range() {
        let labels = Tensor::from_vec(vec![0i64, 3], &[2]).unwrap();
        assert_eq!(
            one_hot_op::<i64, f32>(&labels, 3).unwrap_err(),
            VgradError::ClassIndexOutOfRange { index: 3, classes: 3 }
        );
        let negative = Tensor::from_vec(vec![-1i64], &[1]).unwrap();
        assert!(one_hot_op::<i64, f32>(&negative, 3).is_err());
        assert!(matches!(
            one_hot_op::<i64, f32>(&labels, 0),
            Err(VgradError::InvalidShape { .. })
        ));
    }
}
