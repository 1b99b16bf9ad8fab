//! Six-hump camel test function

use ndarray::Array1;

/// Six-hump camel function - 2D, six local minima, two of them global
/// Global minimum: f(x) = -1.0316 at x = (0.0898, -0.7126) and (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn six_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let a = x1 * x1;
    let b = x2 * x2;
    (4.0 - 2.1 * a + a * a / 3.0) * a + x1 * x2 + (-4.0 + 4.0 * b) * b
}
