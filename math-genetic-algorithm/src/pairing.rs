use crate::crossover_single_point::single_point_crossover;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

/// Pairs the first half of the population with a shuffled permutation of the
/// second half.
///
/// With an odd `npop` the last individual is left unpaired.
pub fn pair_indices<R: Rng + ?Sized>(npop: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let half = npop / 2;
    let mut partners: Vec<usize> = (half..2 * half).collect();
    partners.shuffle(rng);
    (0..half).zip(partners).collect()
}

/// Applies single-point crossover to every pair, replacing both parents by
/// their children in place of the parents' rows.
pub fn crossover_population<R: Rng + ?Sized>(
    population: &Array2<f64>,
    rng: &mut R,
) -> Array2<f64> {
    let mut offspring = population.clone();
    for (i, j) in pair_indices(population.nrows(), rng) {
        let a = population.row(i).to_owned();
        let b = population.row(j).to_owned();
        let (ca, cb) = single_point_crossover(&a, &b, rng);
        offspring.row_mut(i).assign(&ca);
        offspring.row_mut(j).assign(&cb);
    }
    offspring
}
