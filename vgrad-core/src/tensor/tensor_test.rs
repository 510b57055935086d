use super::*;
use crate::tensor::create::{ones, zeros};

#[test]
fn test_from_vec_checks_length_and_sizes() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    assert_eq!(t.dims(), vec![2, 3]);
    assert_eq!(t.rank(), 2);
    assert_eq!(t.numel(), 6);
    assert_eq!(t.dtype(), DType::F32);
    assert!(t.is_leaf());

    let err = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[2, 2]).unwrap_err();
    assert_eq!(
        err,
        VgradError::TensorCreationError {
            data_len: 3,
            shape: vec![2, 2]
        }
    );
    assert!(matches!(
        Tensor::<f32>::from_vec(vec![], &[0]),
        Err(VgradError::InvalidShape { .. })
    ));
}

#[test]
fn test_from_shared_wraps_buffer_without_copy() {
    let buffer = Arc::new(vec![1.0f64, 2.0, 3.0, 4.0]);
    let t = Tensor::from_shared(Arc::clone(&buffer), Shape::new(&[2, 2]).unwrap()).unwrap();
    assert!(Arc::ptr_eq(t.shared_data(), &buffer));
    assert_eq!(t.dims(), vec![2, 2]);
    assert!(t.is_leaf());

    let err = Tensor::from_shared(buffer, Shape::new(&[3]).unwrap()).unwrap_err();
    assert_eq!(
        err,
        VgradError::TensorCreationError {
            data_len: 4,
            shape: vec![3]
        }
    );
}

#[test]
fn test_scalar_and_value() {
    let s = Tensor::scalar(4.5f64);
    assert_eq!(s.rank(), 0);
    assert_eq!(s.numel(), 1);
    assert_eq!(s.value().unwrap(), 4.5);

    let v = Tensor::from_vec(vec![1i64, 2], &[2]).unwrap();
    assert_eq!(
        v.value().unwrap_err(),
        VgradError::NotAScalar { shape: vec![2] }
    );
}

#[test]
fn test_from_nested_infers_shape() {
    let t = Tensor::<f64>::from_nested(vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(t.dims(), vec![2, 3]);
    assert_eq!(t.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let cube = Tensor::<i32>::from_nested(vec![vec![vec![1i32], vec![2]], vec![vec![3], vec![4]]]).unwrap();
    assert_eq!(cube.dims(), vec![2, 2, 1]);

    let scalar = Tensor::<f32>::from_nested(NestedData::Scalar(2.0f32)).unwrap();
    assert_eq!(scalar.rank(), 0);
    assert_eq!(scalar.value().unwrap(), 2.0);
}

#[test]
fn test_from_nested_rejects_ragged_and_empty() {
    let ragged = Tensor::<f32>::from_nested(vec![vec![1.0f32, 2.0], vec![3.0]]);
    assert!(matches!(ragged, Err(VgradError::ShapeMismatch { .. })));

    let empty: Result<Tensor<f32>, _> = Tensor::from_nested(Vec::<f32>::new());
    assert!(matches!(empty, Err(VgradError::InvalidShape { .. })));
}

#[test]
fn test_nested_view_mirrors_shape() {
    let data = vec![vec![1.0f64, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
    let t = Tensor::<f64>::from_nested(data.clone()).unwrap();
    assert_eq!(t.nested_view(), NestedData::<f64>::from(data));

    let s = Tensor::scalar(1i32);
    assert_eq!(s.nested_view(), NestedData::Scalar(1));
    assert_eq!(s.nested_view().as_scalar(), Some(1));
    assert_eq!(t.nested_view().as_scalar(), None);
}

#[test]
fn test_get_returns_sub_views() {
    let t = Tensor::from_vec((0..24).map(|v| v as f32).collect(), &[2, 3, 4]).unwrap();

    let first = t.get(1).unwrap();
    assert_eq!(first.sizes(), vec![3, 4]);
    assert_eq!(first.flat_view()[0], 12.0);

    let row = first.get(2).unwrap();
    assert_eq!(row.sizes(), vec![4]);
    assert_eq!(row.flat_view(), &[20.0, 21.0, 22.0, 23.0]);

    let elem = row.get(3).unwrap();
    assert_eq!(elem.rank(), 0);
    assert_eq!(elem.value().unwrap(), 23.0);

    assert!(matches!(
        t.get(2),
        Err(VgradError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        elem.get(0),
        Err(VgradError::InvalidAxis { axis: 0, rank: 0 })
    ));
}

#[test]
fn test_detach_shares_buffer_and_drops_history() {
    let a = Tensor::from_vec(vec![1.0f64, 2.0], &[2]).unwrap();
    let b = a.mul_scalar(3.0);
    assert!(!b.is_leaf());

    let d = b.detach();
    assert!(d.is_leaf());
    assert_ne!(d.node_id(), b.node_id());
    assert!(Arc::ptr_eq(d.shared_data(), b.shared_data()));
    assert_eq!(d.to_vec(), vec![3.0, 6.0]);
}

#[test]
fn test_clone_is_same_graph_node() {
    let a = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
    let c = a.clone();
    assert_eq!(a.node_id(), c.node_id());
    assert!(Arc::ptr_eq(a.shared_data(), c.shared_data()));
}

#[test]
fn test_partial_eq_compares_values() {
    let a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let b = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let c = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[4]).unwrap();
    let d = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 5.0], &[2, 2]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Tensor::scalar(2i32)), "2");

    let v = Tensor::from_vec(vec![1i32, 2, 3], &[3]).unwrap();
    assert_eq!(format!("{}", v), "[ 1 2 3 ]");

    let m = Tensor::from_vec(vec![1i64, 2, 3, 4], &[2, 2]).unwrap();
    assert_eq!(format!("{}", m), "[ 1 2 ]\n[ 3 4 ]");

    let cube = zeros::<f32>(&[2, 2, 2]).unwrap();
    assert!(format!("{}", cube).starts_with("Tensor<F32>"));
}

#[test]
fn test_debug_mentions_shape() {
    let t = ones::<f64>(&[3, 1]).unwrap();
    let s = format!("{:?}", t);
    assert!(s.contains("shape=[3, 1]"), "{}", s);
    assert!(s.contains("leaf=true"), "{}", s);
}

#[test]
fn test_operators() {
    let a = Tensor::from_vec(vec![1.0f64, 2.0, 3.0], &[3]).unwrap();
    let b = Tensor::from_vec(vec![4.0f64, 5.0, 6.0], &[3]).unwrap();

    assert_eq!((&a + &b).to_vec(), vec![5.0, 7.0, 9.0]);
    assert_eq!((&b - &a).to_vec(), vec![3.0, 3.0, 3.0]);
    assert_eq!((&a * &b).to_vec(), vec![4.0, 10.0, 18.0]);
    assert_eq!((&b / &a).to_vec(), vec![4.0, 2.5, 2.0]);
    assert_eq!((-&a).to_vec(), vec![-1.0, -2.0, -3.0]);
    assert_eq!((a.clone() + b.clone()).to_vec(), vec![5.0, 7.0, 9.0]);

    assert_eq!((&a + 1.0).to_vec(), vec![2.0, 3.0, 4.0]);
    assert_eq!((&a * 2.0).to_vec(), vec![2.0, 4.0, 6.0]);
    assert_eq!((10.0 - &a).to_vec(), vec![9.0, 8.0, 7.0]);
    assert_eq!((6.0 / &a).to_vec(), vec![6.0, 3.0, 2.0]);
}

#[test]
#[should_panic(expected = "Cannot broadcast")]
fn test_operator_panics_on_incompatible_shapes() {
    let a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap();
    let b = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
    let _ = &a + &b;
}
