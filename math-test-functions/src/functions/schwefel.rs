//! Schwefel test function

use ndarray::Array1;

/// Schwefel function - N-dimensional, deceptive: the second best minimum is far
/// from the global one
/// Global minimum: f(x) ~ 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    418.9829 * x.len() as f64 - x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}
