use super::*;
use crate::utils::testing::check_tensor_near;

fn vector(data: Vec<f64>) -> Tensor<f64> {
    let len = data.len();
    Tensor::from_vec(data, &[len]).unwrap()
}

#[test]
fn test_backward_requires_scalar_output() {
    let x = vector(vec![1.0, 2.0]);
    let y = x.mul_scalar(2.0);
    assert_eq!(
        backward(&y, &[&x]).unwrap_err(),
        VgradError::BackwardNonScalar { shape: vec![2] }
    );
}

#[test]
fn test_chain_rule() -> Result<(), VgradError> {
    // f(x) = (x - 2)^2, df/dx = 2(x - 2)
    let x = Tensor::scalar(5.0f64);
    let f = x.sub_scalar(2.0).pow(2.0);
    let grads = backward(&f, &[&x])?;
    assert!(grads[0].shape().is_scalar());
    assert_eq!(grads[0].value()?, 6.0);
    Ok(())
}

#[test]
fn test_multi_use_accumulates() -> Result<(), VgradError> {
    // y = x*x + x, dy/dx = 2x + 1
    let x = vector(vec![1.0, -2.0, 3.5]);
    let y = x.mul(&x)?.add(&x)?.sum_all()?;
    let grads = backward(&y, &[&x])?;
    check_tensor_near(&grads[0], &[3], &[3.0, -3.0, 8.0], 1e-12);
    Ok(())
}

#[test]
fn test_broadcast_scalar_gradient_counts_elements() -> Result<(), VgradError> {
    let n = 5;
    let a = vector(vec![0.5; n]);
    let b = Tensor::scalar(1.0f64);
    let y = a.add(&b)?.sum_all()?;
    let grads = backward(&y, &[&b, &a])?;
    assert_eq!(grads[0].value()?, n as f64);
    check_tensor_near(&grads[1], &[n], &vec![1.0; n], 1e-12);
    Ok(())
}

#[test]
fn test_unreachable_target_gets_zeros() -> Result<(), VgradError> {
    let x = vector(vec![1.0, 2.0]);
    let unrelated = Tensor::from_vec(vec![3.0f64, 4.0, 5.0, 6.0], &[2, 2])?;
    let y = x.mul(&x)?.sum_all()?;
    let grads = backward(&y, &[&unrelated, &x])?;
    check_tensor_near(&grads[0], &[2, 2], &[0.0; 4], 0.0);
    check_tensor_near(&grads[1], &[2], &[2.0, 4.0], 1e-12);
    Ok(())
}

#[test]
fn test_no_target_reachable_returns_zeros() -> Result<(), VgradError> {
    let x = vector(vec![1.0, 2.0]);
    let other = vector(vec![1.0]);
    let y = x.sum_all()?;
    let grads = backward(&y, &[&other])?;
    assert_eq!(grads[0].to_vec(), vec![0.0]);
    Ok(())
}

#[test]
fn test_targets_are_matched_by_identity() -> Result<(), VgradError> {
    let x = vector(vec![1.0, 2.0]);
    let same_values = vector(vec![1.0, 2.0]);
    let detached = x.detach();
    let y = x.mul_scalar(3.0).sum_all()?;
    let grads = backward(&y, &[&x, &same_values, &detached, &x])?;
    check_tensor_near(&grads[0], &[2], &[3.0, 3.0], 1e-12);
    check_tensor_near(&grads[1], &[2], &[0.0, 0.0], 0.0);
    check_tensor_near(&grads[2], &[2], &[0.0, 0.0], 0.0);
    // a repeated target receives the same gradient twice
    check_tensor_near(&grads[3], &[2], &[3.0, 3.0], 1e-12);
    Ok(())
}

#[test]
fn test_detach_blocks_gradient_flow() -> Result<(), VgradError> {
    let x = vector(vec![2.0]);
    let frozen = x.mul(&x)?.detach();
    let y = x.mul(&frozen)?.sum_all()?;
    let grads = backward(&y, &[&x])?;
    // only the direct use of x contributes: d(x * c)/dx = c = 4
    assert_eq!(grads[0].to_vec(), vec![4.0]);
    Ok(())
}

#[test]
fn test_intermediate_target_and_output_target() -> Result<(), VgradError> {
    let x = vector(vec![1.0, 2.0]);
    let h = x.mul_scalar(2.0);
    let y = h.mul(&h)?.sum_all()?;
    let grads = backward(&y, &[&h, &y, &x])?;
    check_tensor_near(&grads[0], &[2], &[4.0, 8.0], 1e-12);
    assert_eq!(grads[1].value()?, 1.0);
    check_tensor_near(&grads[2], &[2], &[8.0, 16.0], 1e-12);
    Ok(())
}

#[test]
fn test_deep_shared_graph_is_linear_in_nodes() -> Result<(), VgradError> {
    // y = x doubled 60 times by adding a value to itself: 2^60 paths.
    let x = Tensor::scalar(1.0f64);
    let mut y = x.clone();
    for _ in 0..60 {
        y = y.add(&y)?;
    }
    let grads = backward(&y, &[&x])?;
    assert_eq!(grads[0].value()?, 2f64.powi(60));
    Ok(())
}

#[test]
fn test_gradients_are_detached_leaves() -> Result<(), VgradError> {
    let x = vector(vec![1.0, 2.0]);
    let y = x.exp().sum_all()?;
    let grads = backward(&y, &[&x])?;
    assert!(grads[0].is_leaf());
    Ok(())
}

#[test]
fn test_tensor_backward_method() -> Result<(), VgradError> {
    let w = vector(vec![0.5, -1.0]);
    let b = Tensor::scalar(0.25f64);
    let loss = w.mul(&w)?.sum_all()?.add(&b)?;
    let grads = loss.backward(&[&w, &b])?;
    check_tensor_near(&grads[0], &[2], &[1.0, -2.0], 1e-12);
    assert_eq!(grads[1].value()?, 1.0);
    Ok(())
}
