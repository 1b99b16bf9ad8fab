//! Rastrigin test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Rastrigin function - N-dimensional, highly multimodal on a regular grid
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let a = 10.0;
    a * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - a * (2.0 * PI * xi).cos())
            .sum::<f64>()
}
