//! Easom test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Easom function - 2D, flat almost everywhere with a narrow well around (pi, pi)
/// Global minimum: f(x) = -1 at x = (pi, pi)
/// Bounds: x_i in [-100, 100]
pub fn easom(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -x1.cos() * x2.cos() * (-(x1 - PI).powi(2) - (x2 - PI).powi(2)).exp()
}
