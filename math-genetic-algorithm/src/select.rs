use crate::{GAError, Result};
use ndarray::{Array2, s};

/// Number of individuals kept by truncation selection: `floor(npop * survival_fraction)`.
pub fn survivor_count(npop: usize, survival_fraction: f64) -> usize {
    ((npop as f64) * survival_fraction).floor() as usize
}

/// Truncation selection on a ranked population: keeps the best
/// `floor(npop * survival_fraction)` rows.
///
/// `survival_fraction` is the fraction that survives, so `1.0` keeps everyone.
///
/// # Errors
/// `GAError::DegenerateState` when no row would survive.
pub fn select_survivors(
    ranked: &Array2<f64>,
    survival_fraction: f64,
    generation: usize,
) -> Result<Array2<f64>> {
    let keep = survivor_count(ranked.nrows(), survival_fraction).min(ranked.nrows());
    if keep == 0 {
        return Err(GAError::DegenerateState { generation });
    }
    Ok(ranked.slice(s![..keep, ..]).to_owned())
}
