use ndarray::{Array1, Array2, Axis};
use std::cmp::Ordering;

/// Indices of `energies` in ascending order; equal values keep their
/// original relative order.
///
/// NaN sorts after every number and NaNs tie with each other, so the
/// comparison stays a total order.
pub fn ranking_order(energies: &Array1<f64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..energies.len()).collect();
    indices.sort_by(|&a, &b| fitness_cmp(energies[a], energies[b]));
    indices
}

fn fitness_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Reorders a population and its fitness vector from best (lowest) to worst.
pub fn rank_population(
    population: &Array2<f64>,
    energies: &Array1<f64>,
) -> (Array2<f64>, Array1<f64>) {
    let order = ranking_order(energies);
    (
        population.select(Axis(0), &order),
        energies.select(Axis(0), &order),
    )
}
