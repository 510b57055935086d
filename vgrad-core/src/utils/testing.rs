//! Assertion helpers shared by unit and integration tests.

use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Checks that `actual` has `expected_shape` and that every element is within
/// `tolerance` of `expected_data`.
///
/// # Panics
/// On a shape, length or value mismatch, naming the first offending index.
pub fn check_tensor_near<T: FloatElement>(
    actual: &Tensor<T>,
    expected_shape: &[usize],
    expected_data: &[T],
    tolerance: T,
) {
    assert_eq!(actual.dims(), expected_shape, "Shape mismatch");
    let actual_data = actual.flat_view();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (&a, &e)) in actual_data.iter().zip(expected_data).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
