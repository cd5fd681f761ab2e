use crate::math::matrix::Matrix;

/// Softmax cross-entropy loss for a linear classifier, with L2 weight decay.
///
/// Shapes follow the usual minibatch convention:
///   `w` — weights, (D, C): D input features, C classes
///   `x` — data, (N, D): N examples as rows
///   `y` — labels, N entries, each in [0, C)
///
/// Both implementations return `(loss, dw)` where `dw` always has `w`'s
/// shape. Labels outside [0, C) are not validated; the result is then
/// numerically meaningless.
pub struct SoftmaxLoss;

impl SoftmaxLoss {
    /// Reference implementation with explicit per-example loops.
    ///
    /// For each example i: scores s = x[i]·W, shifted by max(s) so exp()
    /// cannot overflow, normalized to probabilities p. Accumulates
    /// −ln(p[y[i]]) into the loss and (p[c] − [c == y[i]])·x[i] into
    /// column c of dW. Both are averaged over N, then the L2 terms
    /// 0.5·reg·ΣW² and reg·W are added.
    pub fn naive(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = x.rows;
        let num_classes = w.cols;
        let num_features = w.rows;

        let mut loss = 0.0;
        let mut dw = Matrix::zeros(w.rows, w.cols);

        for i in 0..num_train {
            // s = x[i]·W, one score per class
            let mut scores = vec![0.0; num_classes];
            for c in 0..num_classes {
                for d in 0..num_features {
                    scores[c] += x.data[i][d] * w.data[d][c];
                }
            }

            let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let exp_scores: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
            let exp_sum: f64 = exp_scores.iter().sum();
            let probs: Vec<f64> = exp_scores.iter().map(|e| e / exp_sum).collect();

            loss += -probs[y[i]].ln();

            for c in 0..num_classes {
                let coeff = if c == y[i] { probs[c] - 1.0 } else { probs[c] };
                for d in 0..num_features {
                    dw.data[d][c] += coeff * x.data[i][d];
                }
            }
        }

        loss /= num_train as f64;
        dw = dw.map(|g| g / num_train as f64);

        loss += 0.5 * reg * w.sum_of_squares();
        dw = dw + w.map(|v| v * reg);

        (loss, dw)
    }

    /// Vectorized implementation: one X·W product for all scores, row-wise
    /// softmax into an N×C probability matrix P, and
    ///   dW = Xᵗ·(P − onehot(y)) / N + reg·W
    /// where the onehot subtraction decrements the true-class entry of each
    /// row of P by 1 in place. Agrees with `naive` to floating-point
    /// tolerance.
    pub fn vectorized(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = x.rows;

        let scores = x.clone() * w.clone();
        let probs = row_softmax(&scores);

        let data_loss: f64 = y.iter()
            .enumerate()
            .map(|(i, &label)| -probs.data[i][label].ln())
            .sum::<f64>() / num_train as f64;
        let loss = data_loss + 0.5 * reg * w.sum_of_squares();

        // P − onehot(y): only the true-class entry of each row changes.
        let mut delta = probs;
        for (i, &label) in y.iter().enumerate() {
            delta.data[i][label] -= 1.0;
        }

        let dw = (x.transpose() * delta).map(|g| g / num_train as f64)
            + w.map(|v| v * reg);

        (loss, dw)
    }

    /// Predicted class per example: argmax over each score row of X·W.
    pub fn predict(w: &Matrix, x: &Matrix) -> Vec<usize> {
        let scores = x.clone() * w.clone();
        scores.data.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .max_by(|a, b| a.1.partial_cmp(b.1).expect("NaN score"))
                    .map(|(c, _)| c)
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Row-wise softmax with the max-shift trick: each row is shifted by its
/// maximum before exponentiation so the largest exponent is exp(0) = 1.
fn row_softmax(scores: &Matrix) -> Matrix {
    let data = scores.data.iter()
        .map(|row| {
            let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let exp: Vec<f64> = row.iter().map(|s| (s - max).exp()).collect();
            let sum: f64 = exp.iter().sum();
            exp.into_iter().map(|e| e / sum).collect()
        })
        .collect();
    Matrix::from_data(data)
}
