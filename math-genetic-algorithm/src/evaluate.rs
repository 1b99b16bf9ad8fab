use crate::{GAError, Result};
use ndarray::{Array1, Array2};

/// Evaluate a population, one objective call per row, in row order.
///
/// # Arguments
/// * `func` - Objective to minimize
/// * `population` - 2D array where each row is an individual
/// * `generation` - Generation index, attached to evaluation errors
///
/// # Returns
/// Fitness values index-aligned with the rows of `population`.
///
/// # Errors
/// `GAError::Evaluation` for the first individual whose objective value is
/// NaN. Remaining individuals are not evaluated.
pub fn evaluate_population<F>(
    func: &F,
    population: &Array2<f64>,
    generation: usize,
) -> Result<Array1<f64>>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let mut energies = Array1::zeros(population.nrows());
    for (index, row) in population.rows().into_iter().enumerate() {
        let individual = row.to_owned();
        let energy = func(&individual);
        if energy.is_nan() {
            return Err(GAError::Evaluation {
                generation,
                index,
                x: individual.to_vec(),
            });
        }
        energies[index] = energy;
    }
    Ok(energies)
}
