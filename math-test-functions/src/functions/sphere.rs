//! Sphere test function

use ndarray::Array1;

/// Sphere function - N-dimensional, convex, unimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.dot(x)
}
