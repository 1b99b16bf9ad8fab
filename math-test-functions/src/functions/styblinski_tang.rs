//! Styblinski-Tang test function

use ndarray::Array1;

/// Styblinski-Tang function - N-dimensional multimodal
/// Global minimum: f(x) = -39.16617 * N at x = (-2.903534, ..., -2.903534)
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>) -> f64 {
    0.5 * x
        .iter()
        .map(|&xi| xi.powi(4) - 16.0 * xi.powi(2) + 5.0 * xi)
        .sum::<f64>()
}
