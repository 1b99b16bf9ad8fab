//! Bounds handling and generation-0 construction.

use crate::argmin::argmin;
use crate::evaluate::evaluate_population;
use crate::init_latin_hypercube::init_latin_hypercube;
use crate::init_random::init_random;
use crate::{GAError, Init, Result};
use ndarray::{Array1, Array2};
use rand::Rng;

/// Checks that bounds are non-empty, of equal length, finite and ordered.
pub fn validate_bounds(lower: &Array1<f64>, upper: &Array1<f64>) -> Result<()> {
    if lower.len() != upper.len() {
        return Err(GAError::BoundsMismatch {
            lower_len: lower.len(),
            upper_len: upper.len(),
        });
    }
    if lower.is_empty() {
        return Err(GAError::EmptyBounds);
    }
    for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(GAError::InvalidBounds {
                index,
                lower: lo,
                upper: hi,
            });
        }
    }
    Ok(())
}

/// Splits `(lower, upper)` pairs into two validated vectors.
pub fn bounds_from_pairs(bounds: &[(f64, f64)]) -> Result<(Array1<f64>, Array1<f64>)> {
    let lower: Array1<f64> = bounds.iter().map(|&(lo, _)| lo).collect();
    let upper: Array1<f64> = bounds.iter().map(|&(_, hi)| hi).collect();
    validate_bounds(&lower, &upper)?;
    Ok((lower, upper))
}

/// Samples `npop` individuals with the given initialization scheme.
pub fn sample_population<R: Rng + ?Sized>(
    init: Init,
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    match init {
        Init::Uniform => init_random(npop, lower, upper, rng),
        Init::LatinHypercube => init_latin_hypercube(npop, lower, upper, rng),
    }
}

/// Generation 0: sampled positions, their fitness and the best of them.
#[derive(Debug, Clone)]
pub struct InitialPopulation {
    /// Number of dimensions of the search space.
    pub dimensions: usize,
    /// Population matrix (npop x dimensions).
    pub positions: Array2<f64>,
    /// Fitness of each row of `positions`.
    pub fitness: Array1<f64>,
    /// Best individual of the initial population.
    pub best: Array1<f64>,
    /// Fitness of `best`.
    pub best_fitness: f64,
}

/// Samples and evaluates the initial population.
///
/// # Errors
///
/// Returns a bounds error for empty or inverted bounds,
/// `GAError::PopulationTooSmall` when `npop == 0`, and
/// `GAError::Evaluation` (generation 0) if the objective fails.
pub fn initialize<F, R>(
    func: &F,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    npop: usize,
    init: Init,
    rng: &mut R,
) -> Result<InitialPopulation>
where
    F: Fn(&Array1<f64>) -> f64,
    R: Rng + ?Sized,
{
    validate_bounds(lower, upper)?;
    if npop == 0 {
        return Err(GAError::PopulationTooSmall { pop_size: npop });
    }

    let positions = sample_population(init, npop, lower, upper, rng);
    let fitness = evaluate_population(func, &positions, 0)?;
    let (best_idx, best_fitness) = argmin(&fitness);
    let best = positions.row(best_idx).to_owned();

    Ok(InitialPopulation {
        dimensions: lower.len(),
        positions,
        fitness,
        best,
        best_fitness,
    })
}
