use super::*;

#[test]
fn test_comparisons_same_shape() -> Result<(), VgradError> {
    let a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3])?;
    let b = Tensor::from_vec(vec![3.0f32, 2.0, 1.0], &[3])?;
    assert_eq!(eq_op(&a, &b)?.to_vec(), vec![0.0, 1.0, 0.0]);
    assert_eq!(ne_op(&a, &b)?.to_vec(), vec![1.0, 0.0, 1.0]);
    assert_eq!(lt_op(&a, &b)?.to_vec(), vec![1.0, 0.0, 0.0]);
    assert_eq!(le_op(&a, &b)?.to_vec(), vec![1.0, 1.0, 0.0]);
    assert_eq!(gt_op(&a, &b)?.to_vec(), vec![0.0, 0.0, 1.0]);
    assert_eq!(ge_op(&a, &b)?.to_vec(), vec![0.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn test_comparison_broadcasts_scalar() -> Result<(), VgradError> {
    let a = Tensor::from_vec(vec![1, 5, 3, 7], &[2, 2])?;
    let threshold = Tensor::scalar(4);
    let mask = gt_op(&a, &threshold)?;
    assert_eq!(mask.dims(), vec![2, 2]);
    assert_eq!(mask.to_vec(), vec![0, 1, 0, 1]);
    Ok(())
}

#[test]
fn test_comparison_result_is_detached() -> Result<(), VgradError> {
    let a = Tensor::from_vec(vec![1.0f64, 2.0], &[2])?;
    let b = a.mul_scalar(2.0);
    let mask = lt_op(&a, &b)?;
    assert!(mask.is_leaf());
    Ok(())
}

#[test]
fn test_comparison_shape_mismatch() {
    let a = Tensor::from_vec(vec![1, 2], &[2]).unwrap();
    let b = Tensor::from_vec(vec![1, 2, 3], &[3]).unwrap();
    assert!(matches!(
        eq_op(&a, &b),
        Err(VgradError::BroadcastError { .. })
    ));
}
