use crate::ops::apply_unary_op;
use crate::tensor::Tensor;
use crate::types::FloatElement;

/// Raises every element to the constant power `exponent`.
///
/// The derivative is `exponent * x^(exponent - 1)`.
pub fn pow_op<T: FloatElement>(tensor: &Tensor<T>, exponent: T) -> Tensor<T> {
    apply_unary_op(
        tensor,
        |x| x.powf(exponent),
        |x, _| exponent * x.powf(exponent - T::one()),
        "pow",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::backward;
    use crate::autograd::grad_check::check_grad;
    use crate::utils::testing::check_tensor_near;

    #[test]
    fn test_pow_forward() {
        let x = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap();
        check_tensor_near(&pow_op(&x, 2.0), &[3], &[1.0, 4.0, 9.0], 1e-6);
        check_tensor_near(&pow_op(&x, 0.0), &[3], &[1.0, 1.0, 1.0], 1e-6);
    }

    #[test]
    fn test_pow_backward() {
        let x = Tensor::from_vec(vec![1.0f64, 2.0, 3.0], &[3]).unwrap();
        let grads = backward(&pow_op(&x, 3.0).sum_all().unwrap(), &[&x]).unwrap();
        check_tensor_near(&grads[0], &[3], &[3.0, 12.0, 27.0], 1e-12);
    }

    #[test]
    fn test_pow_fractional_grad_check() {
        let x = Tensor::from_vec(vec![0.4f64, 1.3, 2.2], &[3]).unwrap();
        let func = |inputs: &[Tensor<f64>]| pow_op(&inputs[0], 1.5).sum_all();
        check_grad(func, &[x], 1e-6, 1e-6).unwrap();
    }
}
