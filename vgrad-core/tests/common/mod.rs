use rand::rngs::StdRng;
use rand::SeedableRng;
use vgrad_core::{randn_with, Tensor};

/// Installs `env_logger` once per test binary so `RUST_LOG=vgrad_core=trace`
/// shows the backward traversal.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Standard-normal `f64` tensor drawn from an RNG seeded with `seed`.
#[allow(dead_code)]
pub fn seeded_randn(shape: &[usize], seed: u64) -> Tensor<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    randn_with(shape, &mut rng).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn tensor_f64(data: Vec<f64>, shape: &[usize]) -> Tensor<f64> {
    Tensor::from_vec(data, shape).expect("Test tensor creation failed")
}
