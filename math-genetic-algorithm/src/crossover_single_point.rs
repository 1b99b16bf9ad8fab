use ndarray::{Array1, s};
use rand::Rng;

/// Exchanges the coordinates `[0, k)` between two parents.
///
/// `k = 0` returns copies of the parents.
pub fn single_point_crossover_at(
    a: &Array1<f64>,
    b: &Array1<f64>,
    k: usize,
) -> (Array1<f64>, Array1<f64>) {
    debug_assert_eq!(a.len(), b.len());
    let k = k.min(a.len());
    let mut child_a = a.clone();
    let mut child_b = b.clone();
    child_a.slice_mut(s![..k]).assign(&b.slice(s![..k]));
    child_b.slice_mut(s![..k]).assign(&a.slice(s![..k]));
    (child_a, child_b)
}

/// Single-point crossover with the cut point drawn uniformly from `[0, d)`.
pub fn single_point_crossover<R: Rng + ?Sized>(
    a: &Array1<f64>,
    b: &Array1<f64>,
    rng: &mut R,
) -> (Array1<f64>, Array1<f64>) {
    if a.is_empty() {
        return (a.clone(), b.clone());
    }
    let k = rng.random_range(0..a.len());
    single_point_crossover_at(a, b, k)
}
