use crate::sampler::bounds_from_pairs;
use crate::{GAConfig, GAReport, GeneticAlgorithm, Result};
use ndarray::Array1;

/// Runs the genetic algorithm on a function.
///
/// This is a convenience function that splits the bound pairs, creates a
/// [`GeneticAlgorithm`] with the given configuration and runs it.
///
/// # Arguments
///
/// * `func` - The objective function to minimize, mapping `&Array1<f64>` to `f64`
/// * `bounds` - Slice of (lower, upper) bound pairs for each dimension
/// * `config` - GA configuration (use `GAConfigBuilder` to construct)
///
/// # Errors
///
/// Returns a bounds error if `bounds` is empty or any pair has upper < lower,
/// a configuration error for an invalid `config`, and `GAError::Evaluation`
/// if the objective returns NaN.
///
/// # Example
///
/// ```rust
/// use math_genetic_algorithm::{genetic_algorithm, GAConfigBuilder};
///
/// let result = genetic_algorithm(
///     &|x| x[0].powi(2) + x[1].powi(2),
///     &[(-5.0, 5.0), (-5.0, 5.0)],
///     GAConfigBuilder::new().popsize(30).maxiter(20).seed(7).build().unwrap(),
/// ).expect("optimization failed");
///
/// assert_eq!(result.nit, 20);
/// assert_eq!(result.nfev, 30 * 21);
/// ```
pub fn genetic_algorithm<F>(func: &F, bounds: &[(f64, f64)], config: GAConfig) -> Result<GAReport>
where
    F: Fn(&Array1<f64>) -> f64,
{
    let (lower, upper) = bounds_from_pairs(bounds)?;
    let mut ga = GeneticAlgorithm::new(func, lower, upper)?;
    *ga.config_mut() = config;
    ga.solve()
}
