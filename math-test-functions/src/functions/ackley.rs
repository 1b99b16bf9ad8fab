//! Ackley test function

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Ackley function - N-dimensional multimodal, nearly flat outer region
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let (a, b, c) = (20.0, 0.2, 2.0 * PI);
    let n = x.len() as f64;
    let mean_sq = x.dot(x) / n;
    let mean_cos = x.iter().map(|&xi| (c * xi).cos()).sum::<f64>() / n;
    -a * (-b * mean_sq.sqrt()).exp() - mean_cos.exp() + a + E
}
