use crate::sampler::sample_population;
use crate::{GAError, Init, Repopulation, Result};
use ndarray::{Array1, Array2, s};
use rand::Rng;

/// Refills the population by cycling through the survivors until
/// `target` rows exist (survivors concatenated with themselves, then
/// truncated).
///
/// # Errors
/// `GAError::DegenerateState` if `survivors` is empty while `target > 0`.
pub fn repopulate_duplicate(
    survivors: &Array2<f64>,
    target: usize,
    generation: usize,
) -> Result<Array2<f64>> {
    let nsurv = survivors.nrows();
    if nsurv == 0 && target > 0 {
        return Err(GAError::DegenerateState { generation });
    }
    Ok(Array2::from_shape_fn((target, survivors.ncols()), |(i, j)| {
        survivors[(i % nsurv, j)]
    }))
}

/// Refills the population by appending `target - survivors` freshly sampled
/// individuals after the survivors.
pub fn repopulate_inject<R: Rng + ?Sized>(
    survivors: &Array2<f64>,
    target: usize,
    init: Init,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let keep = survivors.nrows().min(target);
    let fresh = sample_population(init, target - keep, lower, upper, rng);

    let mut population = Array2::zeros((target, lower.len()));
    population
        .slice_mut(s![..keep, ..])
        .assign(&survivors.slice(s![..keep, ..]));
    population.slice_mut(s![keep.., ..]).assign(&fresh);
    population
}

/// Restores the population to `target` rows with the configured strategy.
///
/// # Errors
/// `GAError::DegenerateState` when duplicating an empty survivor set.
#[allow(clippy::too_many_arguments)]
pub fn repopulate<R: Rng + ?Sized>(
    strategy: Repopulation,
    survivors: &Array2<f64>,
    target: usize,
    init: Init,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    generation: usize,
    rng: &mut R,
) -> Result<Array2<f64>> {
    match strategy {
        Repopulation::Duplicate => repopulate_duplicate(survivors, target, generation),
        Repopulation::InjectRandom => Ok(repopulate_inject(
            survivors, target, init, lower, upper, rng,
        )),
    }
}
