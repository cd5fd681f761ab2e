// Two gaussian blobs, one per class, scored by a random linear classifier.
// Evaluates the naive and vectorized loss, compares them, and checks the
// analytic gradient against a finite-difference approximation.

use rand::prelude::*;
use softgrad::{numerical_gradient, Matrix, SoftmaxLoss};

const NUM_PER_CLASS: usize = 50;
const NUM_FEATURES: usize = 2;
const NUM_CLASSES: usize = 2;
const REG: f64 = 0.05;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    // Class 0 centered at (-2, -2), class 1 at (+2, +2).
    let mut rows = Vec::with_capacity(2 * NUM_PER_CLASS);
    let mut labels = Vec::with_capacity(2 * NUM_PER_CLASS);
    for class in 0..NUM_CLASSES {
        let center = if class == 0 { -2.0 } else { 2.0 };
        for _ in 0..NUM_PER_CLASS {
            let noise = Matrix::gaussian_with(1, NUM_FEATURES, 1.0, &mut rng);
            rows.push(noise.data[0].iter().map(|n| center + n).collect());
            labels.push(class);
        }
    }
    let x = Matrix::from_data(rows);

    let w = Matrix::gaussian_with(NUM_FEATURES, NUM_CLASSES, 0.01, &mut rng);

    let (loss_naive, dw_naive) = SoftmaxLoss::naive(&w, &x, &labels, REG);
    let (loss_vec, dw_vec) = SoftmaxLoss::vectorized(&w, &x, &labels, REG);

    println!("naive loss:      {loss_naive:.10}");
    println!("vectorized loss: {loss_vec:.10}");
    println!("loss difference: {:.3e}", (loss_naive - loss_vec).abs());

    let max_grad_diff = dw_naive.data.iter().flatten()
        .zip(dw_vec.data.iter().flatten())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    println!("max |dW_naive - dW_vectorized|: {max_grad_diff:.3e}");

    let numeric = numerical_gradient(
        |probe| SoftmaxLoss::vectorized(probe, &x, &labels, REG).0,
        &w,
        1e-5,
    );
    let max_check_diff = numeric.data.iter().flatten()
        .zip(dw_vec.data.iter().flatten())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    println!("max |dW_numeric - dW_analytic|: {max_check_diff:.3e}");

    let predictions = SoftmaxLoss::predict(&w, &x);
    let correct = predictions.iter().zip(labels.iter()).filter(|(p, y)| p == y).count();
    println!(
        "accuracy of the random (untrained) classifier: {:.1}%",
        100.0 * correct as f64 / labels.len() as f64
    );
}
