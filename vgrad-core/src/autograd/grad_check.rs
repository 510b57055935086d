use crate::autograd::backward::backward;
use crate::error::VgradError;
use crate::tensor::Tensor;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },

    #[error("Tensor error during gradient check: {0}")]
    TensorError(VgradError),
}

impl From<VgradError> for GradCheckError {
    fn from(err: VgradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Checks analytic gradients against central finite differences.
///
/// `func` maps the inputs to a rank-0 loss. For every element `x` of every
/// input, the numerical derivative `(f(x + eps) - f(x - eps)) / (2 * eps)` is
/// compared with the gradient computed by [`backward`]; both absolute and
/// relative differences are accepted up to `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor<f64>],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor<f64>]) -> Result<Tensor<f64>, VgradError>,
{
    // Fresh leaves, so that the inputs are independent backward targets.
    let leaves: Vec<Tensor<f64>> = inputs.iter().map(Tensor::detach).collect();
    let output = func(&leaves)?;
    let targets: Vec<&Tensor<f64>> = leaves.iter().collect();
    let analytical = backward(&output, &targets)?;

    for (input_index, (input, grad)) in leaves.iter().zip(&analytical).enumerate() {
        let original = input.to_vec();
        for (element_index, &analytical_grad) in grad.flat_view().iter().enumerate() {
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    value: analytical_grad,
                });
            }

            let loss_at = |delta: f64| -> Result<f64, VgradError> {
                let mut data = original.clone();
                data[element_index] += delta;
                let mut perturbed = leaves.clone();
                perturbed[input_index] = Tensor::from_vec_shape(data, input.shape().clone())?;
                func(&perturbed)?.value()
            };
            let loss_plus = loss_at(epsilon)?;
            let loss_minus = loss_at(-epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }

            if !relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }
    Ok(())
}
