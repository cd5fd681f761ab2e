// Cross-implementation and gradient-check properties on random inputs.

use rand::prelude::*;
use softgrad::{numerical_gradient, Matrix, SoftmaxLoss};

fn random_problem(
    rng: &mut StdRng,
    num_train: usize,
    num_features: usize,
    num_classes: usize,
) -> (Matrix, Matrix, Vec<usize>) {
    let w = Matrix::gaussian_with(num_features, num_classes, 0.01, rng);
    let x = Matrix::gaussian_with(num_train, num_features, 1.0, rng);
    let y = (0..num_train).map(|_| rng.gen_range(0..num_classes)).collect();
    (w, x, y)
}

fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    assert_eq!((a.rows, a.cols), (b.rows, b.cols));
    a.data.iter().flatten()
        .zip(b.data.iter().flatten())
        .map(|(p, q)| (p - q).abs())
        .fold(0.0_f64, f64::max)
}

#[test]
fn naive_and_vectorized_agree_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for reg in [0.0, 0.1, 5.0] {
        for _ in 0..5 {
            let (w, x, y) = random_problem(&mut rng, 20, 6, 4);

            let (loss_n, dw_n) = SoftmaxLoss::naive(&w, &x, &y, reg);
            let (loss_v, dw_v) = SoftmaxLoss::vectorized(&w, &x, &y, reg);

            let rel = (loss_n - loss_v).abs() / loss_n.max(1.0);
            assert!(rel < 1e-7, "loss mismatch: {loss_n} vs {loss_v}");
            assert!(max_abs_diff(&dw_n, &dw_v) < 1e-7);
        }
    }
}

#[test]
fn analytic_gradient_matches_finite_differences() {
    let mut rng = StdRng::seed_from_u64(1234);

    for reg in [0.0, 0.5] {
        let (w, x, y) = random_problem(&mut rng, 10, 4, 3);

        let (_, dw) = SoftmaxLoss::vectorized(&w, &x, &y, reg);
        let numeric = numerical_gradient(
            |probe| SoftmaxLoss::vectorized(probe, &x, &y, reg).0,
            &w,
            1e-5,
        );

        assert!(
            max_abs_diff(&dw, &numeric) < 1e-5,
            "gradient check failed at reg = {reg}"
        );
    }
}

#[test]
fn naive_gradient_also_passes_the_numeric_check() {
    let mut rng = StdRng::seed_from_u64(99);
    let (w, x, y) = random_problem(&mut rng, 8, 5, 3);

    let (_, dw) = SoftmaxLoss::naive(&w, &x, &y, 0.1);
    let numeric = numerical_gradient(
        |probe| SoftmaxLoss::naive(probe, &x, &y, 0.1).0,
        &w,
        1e-5,
    );

    assert!(max_abs_diff(&dw, &numeric) < 1e-5);
}

#[test]
fn regularization_term_is_exactly_half_reg_times_weight_norm() {
    let mut rng = StdRng::seed_from_u64(7);
    let (w, x, y) = random_problem(&mut rng, 12, 3, 3);

    let (base, _) = SoftmaxLoss::vectorized(&w, &x, &y, 0.0);
    let reg = 2.5;
    let (with_reg, _) = SoftmaxLoss::vectorized(&w, &x, &y, reg);

    let expected = base + 0.5 * reg * w.sum_of_squares();
    assert!((with_reg - expected).abs() < 1e-12);
}

#[test]
fn single_class_problem_has_zero_data_loss() {
    // With C = 1 every probability is 1, so −ln(p) = 0 and only the L2
    // term can contribute.
    let w = Matrix::from_data(vec![vec![0.4], vec![-0.3]]);
    let x = Matrix::from_data(vec![vec![1.0, 2.0], vec![-1.0, 0.5]]);
    let y = vec![0, 0];

    let (loss, _) = SoftmaxLoss::naive(&w, &x, &y, 0.0);
    assert!(loss.abs() < 1e-12);

    let (loss_v, _) = SoftmaxLoss::vectorized(&w, &x, &y, 0.0);
    assert!(loss_v.abs() < 1e-12);
}
