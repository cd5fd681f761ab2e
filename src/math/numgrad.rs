use crate::math::matrix::Matrix;

/// Central-difference numerical gradient of a scalar function w.r.t. `w`:
///   ∂f/∂wᵢⱼ ≈ (f(w + h·eᵢⱼ) − f(w − h·eᵢⱼ)) / (2h)
///
/// One entry is perturbed at a time, so `f` is evaluated 2·rows·cols times.
/// Slow, but it is the ground truth an analytic gradient is checked against.
pub fn numerical_gradient<F>(f: F, w: &Matrix, h: f64) -> Matrix
where
    F: Fn(&Matrix) -> f64,
{
    let mut grad = Matrix::zeros(w.rows, w.cols);
    let mut probe = w.clone();

    for i in 0..w.rows {
        for j in 0..w.cols {
            let orig = probe.data[i][j];

            probe.data[i][j] = orig + h;
            let f_plus = f(&probe);

            probe.data[i][j] = orig - h;
            let f_minus = f(&probe);

            probe.data[i][j] = orig;
            grad.data[i][j] = (f_plus - f_minus) / (2.0 * h);
        }
    }

    grad
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_gradient_of_sum_of_squares() {
        // f(W) = Σ wᵢⱼ²  ⇒  ∂f/∂wᵢⱼ = 2·wᵢⱼ
        let w = Matrix::from_data(vec![
            vec![1.0, -2.0],
            vec![0.5, 3.0],
        ]);
        let grad = numerical_gradient(|m| m.sum_of_squares(), &w, 1e-5);

        for i in 0..w.rows {
            for j in 0..w.cols {
                let expected = 2.0 * w.data[i][j];
                assert!((grad.data[i][j] - expected).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn leaves_input_matrix_unmodified() {
        let w = Matrix::from_data(vec![vec![1.0, 2.0, 3.0]]);
        let before = w.clone();
        let _ = numerical_gradient(|m| m.data[0][0] * m.data[0][2], &w, 1e-5);
        assert_eq!(w.data, before.data);
    }
}
