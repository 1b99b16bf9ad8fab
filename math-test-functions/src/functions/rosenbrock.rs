//! Rosenbrock test function

use ndarray::{Array1, s};

/// Rosenbrock valley - N-dimensional (N >= 2), unimodal with a narrow curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048] (often [-5, 10])
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    let head = x.slice(s![..-1]);
    let tail = x.slice(s![1..]);
    head.iter()
        .zip(tail.iter())
        .map(|(&xi, &xn)| 100.0 * (xn - xi * xi).powi(2) + (1.0 - xi).powi(2))
        .sum()
}
