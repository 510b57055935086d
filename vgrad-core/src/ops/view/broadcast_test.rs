use super::*;
use crate::autograd::backward;

fn shape(sizes: &[usize]) -> Shape {
    Shape::new(sizes).unwrap()
}

#[test]
fn test_broadcast_shapes_rule() {
    assert_eq!(
        broadcast_shapes(&shape(&[2, 3]), &shape(&[2, 3])).unwrap(),
        shape(&[2, 3])
    );
    assert_eq!(
        broadcast_shapes(&shape(&[3]), &shape(&[4, 2, 3])).unwrap(),
        shape(&[4, 2, 3])
    );
    assert_eq!(
        broadcast_shapes(&Shape::scalar(), &shape(&[5])).unwrap(),
        shape(&[5])
    );
    // size-1 dimensions are not stretched
    assert!(matches!(
        broadcast_shapes(&shape(&[1, 3]), &shape(&[2, 3])),
        Err(VgradError::BroadcastError { .. })
    ));
    assert!(broadcast_shapes(&shape(&[2]), &shape(&[2, 3])).is_err());
}

#[test]
fn test_broadcast_to_values() {
    let t = Tensor::from_vec(vec![1, 2, 3], &[3]).unwrap();
    let b = broadcast_to_op(&t, &shape(&[2, 2, 3])).unwrap();
    assert_eq!(b.dims(), vec![2, 2, 3]);
    assert_eq!(b.to_vec(), vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]);

    let s = Tensor::scalar(7i32);
    assert_eq!(broadcast_to_op(&s, &shape(&[2])).unwrap().to_vec(), vec![7, 7]);
}

#[test]
fn test_broadcast_to_same_shape_is_identity() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
    let b = broadcast_to_op(&t, &shape(&[2])).unwrap();
    assert_eq!(b.node_id(), t.node_id());
}

#[test]
fn test_broadcast_gradient_counts_copies() {
    let x = Tensor::from_vec(vec![1.0f64, 2.0, 3.0], &[3]).unwrap();
    let b = broadcast_to_op(&x, &shape(&[4, 3])).unwrap();
    let loss = b.sum_all().unwrap();
    let grads = backward(&loss, &[&x]).unwrap();
    assert_eq!(grads[0].to_vec(), vec![4.0, 4.0, 4.0]);
}
