use crate::init_random::lerp;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand::seq::SliceRandom;

/// Latin hypercube sample of `npop` individuals.
///
/// Each dimension is cut into `npop` strata of equal width; every stratum
/// receives exactly one point and the strata are permuted independently per
/// dimension.
pub fn init_latin_hypercube<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let n = lower.len();
    let mut samples = Array2::<f64>::zeros((npop, n));
    for j in 0..n {
        let mut vals = Vec::with_capacity(npop);
        for k in 0..npop {
            let u: f64 = rng.random::<f64>();
            vals.push(((k as f64) + u) / (npop as f64));
        }
        vals.shuffle(rng);
        for (i, v) in vals.into_iter().enumerate() {
            samples[(i, j)] = lerp(lower[j], upper[j], v);
        }
    }
    samples
}
