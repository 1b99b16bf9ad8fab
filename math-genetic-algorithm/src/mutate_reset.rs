use crate::init_random::uniform_in;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Reset mutation: each coordinate is redrawn uniformly inside its bounds
/// with probability `rate`.
pub fn reset_mutation<R: Rng + ?Sized>(
    individual: &Array1<f64>,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rate: f64,
    rng: &mut R,
) -> Array1<f64> {
    let mut mutated = individual.clone();
    for j in 0..mutated.len() {
        if rng.random::<f64>() < rate {
            mutated[j] = uniform_in(lower[j], upper[j], rng);
        }
    }
    mutated
}

/// Applies [`reset_mutation`] to every row.
pub fn mutate_population<R: Rng + ?Sized>(
    population: &Array2<f64>,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rate: f64,
    rng: &mut R,
) -> Array2<f64> {
    let mut mutated = population.clone();
    for mut row in mutated.rows_mut() {
        let child = reset_mutation(&row.to_owned(), lower, upper, rate, rng);
        row.assign(&child);
    }
    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let pop = array![[0.5, -0.5], [0.25, 0.75]];
        let out = mutate_population(&pop, &array![-1.0, -1.0], &array![1.0, 1.0], 0.0, &mut rng);
        assert_eq!(out, pop);
    }

    #[test]
    fn test_rate_one_redraws_every_coordinate() {
        let mut rng = StdRng::seed_from_u64(4);
        // Sentinel lies outside the bounds, so any redraw is visible.
        let pop = Array2::from_elem((30, 4), 100.0);
        let out = mutate_population(&pop, &array![0.0, 0.0, 0.0, 0.0], &array![1.0, 1.0, 1.0, 1.0], 1.0, &mut rng);
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_mutation_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        let lower = array![-5.0, 0.0, 10.0];
        let upper = array![5.0, 0.0, 20.0];
        let ind = array![0.0, 0.0, 15.0];
        for _ in 0..200 {
            let m = reset_mutation(&ind, &lower, &upper, 0.5, &mut rng);
            for j in 0..3 {
                assert!(m[j] >= lower[j] && m[j] <= upper[j]);
            }
            assert_eq!(m[1], 0.0);
        }
    }

    #[test]
    fn test_mutation_frequency_matches_rate() {
        let mut rng = StdRng::seed_from_u64(99);
        let pop = Array2::from_elem((1000, 10), 2.0);
        let out = mutate_population(&pop, &Array1::zeros(10), &Array1::ones(10), 0.2, &mut rng);
        let changed = out.iter().filter(|&&v| v != 2.0).count() as f64 / 10_000.0;
        assert!((changed - 0.2).abs() < 0.03, "observed mutation rate {changed}");
    }
}
