//! Eggholder test function

use ndarray::Array1;

/// Eggholder function - 2D, highly multimodal, minimum on the domain boundary
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let a = -(x2 + 47.0) * (x2 + 0.5 * x1 + 47.0).abs().sqrt().sin();
    let b = x1 * (x1 - (x2 + 47.0)).abs().sqrt().sin();
    a - b
}
