use super::*;

fn shape(sizes: &[usize]) -> Shape {
    Shape::new(sizes).expect("valid test shape")
}

#[test]
fn test_rank_flat_size_strides() {
    let s = shape(&[2, 3, 4]);
    assert_eq!(s.rank(), 3);
    assert_eq!(s.flat_size(), 24);
    assert_eq!(s.strides(), vec![12, 4, 1]);

    let scalar = Shape::scalar();
    assert_eq!(scalar.rank(), 0);
    assert_eq!(scalar.flat_size(), 1);
    assert!(scalar.strides().is_empty());
}

#[test]
fn test_zero_sized_dimension_rejected() {
    assert!(matches!(
        Shape::new(&[2, 0]),
        Err(VgradError::InvalidShape { .. })
    ));
    assert!(Dimension::new(0).is_err());
}

#[test]
fn test_negative_index_normalization() {
    let s = shape(&[2, 3, 4]);
    assert_eq!(s.size_at(-1).unwrap(), 4);
    assert_eq!(s.size_at(-3).unwrap(), 2);
    assert_eq!(s.size_at(1).unwrap(), 3);
    assert_eq!(
        s.at(3).unwrap_err(),
        VgradError::InvalidAxis { axis: 3, rank: 3 }
    );
    assert!(s.at(-4).is_err());
}

#[test]
fn test_remove_then_insert_restores_shape() {
    let s = shape(&[2, 3, 4]);
    for i in -3isize..3 {
        let dim = s.at(i).unwrap().clone();
        let restored = s.remove(i).unwrap().insert(i, dim).unwrap();
        assert_eq!(restored, s, "round trip failed for index {}", i);
    }
}

#[test]
fn test_insert_appends_at_rank() {
    let s = shape(&[2, 3]);
    let appended = s.insert(2, Dimension::new(5).unwrap()).unwrap();
    assert_eq!(appended.sizes(), vec![2, 3, 5]);

    let scalar = Shape::scalar();
    let lifted = scalar.insert(0, Dimension::new(7).unwrap()).unwrap();
    assert_eq!(lifted.sizes(), vec![7]);
    assert!(scalar.insert(1, Dimension::new(7).unwrap()).is_err());
}

#[test]
fn test_insert_negative_counts_from_result_end() {
    let s = shape(&[2, 3]);
    let unit = Dimension::new(1).unwrap();
    assert_eq!(s.insert(-1, unit.clone()).unwrap().sizes(), vec![2, 3, 1]);
    assert_eq!(s.insert(-2, unit.clone()).unwrap().sizes(), vec![2, 1, 3]);
    assert_eq!(s.insert(-3, unit.clone()).unwrap().sizes(), vec![1, 2, 3]);
    assert_eq!(
        s.insert(-4, unit.clone()).unwrap_err(),
        VgradError::InvalidAxis { axis: -4, rank: 2 }
    );
    assert_eq!(
        s.insert(3, unit.clone()).unwrap_err(),
        VgradError::InvalidAxis { axis: 3, rank: 2 }
    );

    let lifted = Shape::scalar().insert(-1, unit).unwrap();
    assert_eq!(lifted.sizes(), vec![1]);
}

#[test]
fn test_transpose_is_involution() {
    let s = shape(&[2, 3, 4]);
    let t = s.transpose(0, -1).unwrap();
    assert_eq!(t.sizes(), vec![4, 3, 2]);
    assert_eq!(t.transpose(0, -1).unwrap(), s);
    assert_eq!(s.transpose(1, 1).unwrap(), s);
}

#[test]
fn test_flat_index_bijection() {
    let s = shape(&[2, 3, 4]);
    for flat in 0..s.flat_size() {
        let indices = s.to_indices(flat).unwrap();
        assert_eq!(s.to_flat_index(&indices).unwrap(), flat);
    }
    assert_eq!(s.to_indices(13).unwrap(), vec![1, 0, 1]);
    assert!(s.to_indices(24).is_err());
    assert!(s.to_flat_index(&[0, 3, 0]).is_err());
    assert!(s.to_flat_index(&[0, 0]).is_err());
}

#[test]
fn test_last() {
    let s = shape(&[2, 3, 4]);
    assert_eq!(s.last(2).unwrap().sizes(), vec![3, 4]);
    assert_eq!(s.last(0).unwrap(), Shape::scalar());
    assert!(s.last(4).is_err());
}

#[test]
fn test_display_and_named_dimensions() {
    let s = Shape::from_dims(vec![
        Dimension::named(10, "batch").unwrap(),
        Dimension::new(3).unwrap(),
    ]);
    assert_eq!(s.to_string(), "batch x 3");
    assert_eq!(Shape::scalar().to_string(), "scalar");
    // names are display metadata only
    assert_eq!(s, shape(&[10, 3]));
}
