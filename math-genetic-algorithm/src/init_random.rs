use ndarray::{Array1, Array2};
use rand::Rng;

/// Point at fraction `u` of `[lo, hi]`.
///
/// Interpolates without forming `hi - lo`, which overflows for spans wider
/// than `f64::MAX`.
pub(crate) fn lerp(lo: f64, hi: f64, u: f64) -> f64 {
    (lo * (1.0 - u) + hi * u).clamp(lo, hi)
}

/// Draws one coordinate uniformly from `[lo, hi]`.
///
/// A degenerate interval returns `lo` exactly.
pub(crate) fn uniform_in<R: Rng + ?Sized>(lo: f64, hi: f64, rng: &mut R) -> f64 {
    lerp(lo, hi, rng.random::<f64>())
}

/// Samples `npop` individuals, every coordinate drawn independently and
/// uniformly inside its bounds.
pub fn init_random<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let n = lower.len();
    let mut pop = Array2::<f64>::zeros((npop, n));
    for i in 0..npop {
        for j in 0..n {
            pop[(i, j)] = uniform_in(lower[j], upper[j], rng);
        }
    }
    pop
}
