//! Genetic algorithm optimization library.
//!
//! This crate provides a generational genetic algorithm (GA) for minimizing
//! continuous, real-valued black-box functions inside per-dimension bounds.
//! Every generation ranks the population, keeps the best fraction, refills the
//! population, recombines it with single-point crossover and applies reset
//! mutation before evaluating it again.
//!
//! # Features
//!
//! - Uniform or Latin Hypercube initialization
//! - Truncation selection with a configurable survival fraction
//! - Repopulation by duplication or by injecting fresh random individuals
//! - Single-point crossover over a shuffled half/half pairing
//! - Per-coordinate reset mutation
//! - Optional elitism
//! - Per-generation recording to CSV
//!
//! # Example
//!
//! ```rust
//! use math_genetic_algorithm::{genetic_algorithm, GAConfigBuilder, Repopulation};
//!
//! // Minimize the sphere function: f(x) = sum(x_i^2)
//! let bounds = vec![(-5.0, 5.0), (-5.0, 5.0)];
//! let config = GAConfigBuilder::new()
//!     .popsize(50)
//!     .maxiter(200)
//!     .mutation_rate(0.1)
//!     .repopulation(Repopulation::InjectRandom)
//!     .elitism(true)
//!     .seed(42)
//!     .build()
//!     .expect("invalid config");
//!
//! let result = genetic_algorithm(
//!     &|x| x.iter().map(|&xi| xi * xi).sum(),
//!     &bounds,
//!     config,
//! ).expect("optimization should succeed");
//!
//! assert!(result.fun < 0.1);
//! assert_eq!(result.history.len(), 201);
//! ```
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub use error::{GAError, Result};

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod argmin;
/// Latin Hypercube Sampling initialization strategy.
pub mod init_latin_hypercube;
/// Random uniform initialization strategy.
pub mod init_random;
/// Bounds validation and initial population construction.
pub mod sampler;

/// Sequential population evaluation.
pub mod evaluate;
/// Stable ranking of a population by fitness.
pub mod rank;
/// Truncation selection.
pub mod select;
/// Restoring the population size after selection.
pub mod repopulate;

/// Single-point crossover implementation.
pub mod crossover_single_point;
/// Half/half pairing of the population for crossover.
pub mod pairing;
/// Per-coordinate reset mutation.
pub mod mutate_reset;

/// Tests for the full generational loop.
#[cfg(test)]
mod ga_tests;
/// Main genetic algorithm entry point.
pub mod genetic_algorithm;
/// Registry of standard test functions for benchmarking.
pub mod function_registry;
/// Internal helper functions for the GA implementation.
pub mod impl_helpers;
/// Metadata-driven optimization examples and tests.
pub mod metadata;
/// Optimization recording for analysis and plotting.
pub mod recorder;
/// Recorded optimization wrapper for testing.
pub mod run_recorded;
pub use genetic_algorithm::genetic_algorithm;
pub use recorder::{GenerationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_genetic_algorithm;

use argmin::argmin;

/// Callback function type
pub type CallbackFn = Box<dyn FnMut(&GAIntermediate)>;

/// Initialization scheme for the population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Init {
    /// Every coordinate drawn independently and uniformly inside its bounds.
    #[default]
    Uniform,
    /// Latin Hypercube Sampling for better space coverage.
    LatinHypercube,
}

impl FromStr for Init {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Ok(Init::Uniform),
            "latin-hypercube" | "latin_hypercube" | "latinhypercube" | "lhs" => {
                Ok(Init::LatinHypercube)
            }
            _ => Err(format!("unknown init scheme: {}", s)),
        }
    }
}

/// How the population is refilled after truncation selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Repopulation {
    /// Repeat the survivors until the population is full.
    #[default]
    Duplicate,
    /// Keep the survivors and append freshly sampled individuals.
    InjectRandom,
}

impl FromStr for Repopulation {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "duplicate" => Ok(Repopulation::Duplicate),
            "inject-random" | "inject_random" | "injectrandom" | "inject" => {
                Ok(Repopulation::InjectRandom)
            }
            _ => Err(format!("unknown repopulation strategy: {}", s)),
        }
    }
}

/// Configuration for the genetic algorithm.
///
/// The run always performs exactly `maxiter` generations; there is no
/// convergence-based stopping.
pub struct GAConfig {
    /// Number of generations.
    pub maxiter: usize,
    /// Population size (number of individuals, not a multiplier).
    pub popsize: usize,
    /// Fraction of the ranked population kept by selection, in (0, 1].
    pub survival_fraction: f64,
    /// Per-coordinate probability of reset mutation, in [0, 1].
    pub mutation_rate: f64,
    /// Sampling scheme for the initial population and injected individuals.
    pub init: Init,
    /// Strategy used to refill the population after selection.
    pub repopulation: Repopulation,
    /// Carry the best ranked individual into the next generation unchanged.
    pub elitism: bool,
    /// Optional random seed for reproducibility.
    pub seed: Option<u64>,
    /// Log each generation at info level instead of debug.
    pub disp: bool,
    /// Optional per-generation observer.
    pub callback: Option<CallbackFn>,
}

impl Default for GAConfig {
    fn default() -> Self {
        Self {
            maxiter: 1000,
            popsize: 100,
            survival_fraction: 0.5,
            mutation_rate: 0.05,
            init: Init::default(),
            repopulation: Repopulation::default(),
            elitism: false,
            seed: None,
            disp: false,
            callback: None,
        }
    }
}

impl GAConfig {
    /// Checks every parameter range.
    ///
    /// # Errors
    ///
    /// Returns the matching configuration error (`is_config_error()` is true).
    pub fn validate(&self) -> Result<()> {
        if self.popsize < 1 {
            return Err(GAError::PopulationTooSmall {
                pop_size: self.popsize,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GAError::InvalidMutationRate {
                rate: self.mutation_rate,
            });
        }
        if !(self.survival_fraction > 0.0 && self.survival_fraction <= 1.0) {
            return Err(GAError::InvalidSurvivalFraction {
                fraction: self.survival_fraction,
            });
        }
        if select::survivor_count(self.popsize, self.survival_fraction) == 0 {
            return Err(GAError::NoSurvivors {
                pop_size: self.popsize,
                survival_fraction: self.survival_fraction,
            });
        }
        Ok(())
    }
}

/// Fluent builder for `GAConfig`.
///
/// # Example
///
/// ```rust
/// use math_genetic_algorithm::{GAConfigBuilder, Init, Repopulation};
///
/// let config = GAConfigBuilder::new()
///     .maxiter(500)
///     .popsize(40)
///     .survival_fraction(0.3)
///     .mutation_rate(0.1)
///     .init(Init::LatinHypercube)
///     .repopulation(Repopulation::InjectRandom)
///     .seed(42)
///     .build();
/// assert!(config.is_ok());
/// ```
pub struct GAConfigBuilder {
    cfg: GAConfig,
}
impl Default for GAConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GAConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: GAConfig::default(),
        }
    }
    /// Sets the number of generations.
    pub fn maxiter(mut self, v: usize) -> Self {
        self.cfg.maxiter = v;
        self
    }
    /// Sets the population size.
    pub fn popsize(mut self, v: usize) -> Self {
        self.cfg.popsize = v;
        self
    }
    /// Sets the fraction of the population kept by selection.
    pub fn survival_fraction(mut self, v: f64) -> Self {
        self.cfg.survival_fraction = v;
        self
    }
    /// Sets the per-coordinate mutation probability.
    pub fn mutation_rate(mut self, v: f64) -> Self {
        self.cfg.mutation_rate = v;
        self
    }
    /// Sets the population initialization scheme.
    pub fn init(mut self, v: Init) -> Self {
        self.cfg.init = v;
        self
    }
    /// Sets the repopulation strategy.
    pub fn repopulation(mut self, v: Repopulation) -> Self {
        self.cfg.repopulation = v;
        self
    }
    /// Enables/disables elitism.
    pub fn elitism(mut self, v: bool) -> Self {
        self.cfg.elitism = v;
        self
    }
    /// Sets the random seed for reproducibility.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    /// Enables/disables progress display.
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    /// Sets a per-generation callback function.
    pub fn callback(mut self, cb: Box<dyn FnMut(&GAIntermediate)>) -> Self {
        self.cfg.callback = Some(cb);
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any parameter is out of range, see
    /// [`GAConfig::validate`].
    pub fn build(self) -> error::Result<GAConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Result/report of a GA optimization run.
#[derive(Clone)]
pub struct GAReport {
    /// Best individual evaluated during the whole run.
    pub x: Array1<f64>,
    /// The objective function value at `x`.
    pub fun: f64,
    /// Human-readable status message.
    pub message: String,
    /// Number of generations performed.
    pub nit: usize,
    /// Number of function evaluations performed.
    pub nfev: usize,
    /// Final population matrix (popsize x n).
    pub population: Array2<f64>,
    /// Fitness values for each member of the final population.
    pub population_energies: Array1<f64>,
    /// Best fitness of each generation, generation 0 first.
    pub history: Vec<f64>,
}

impl fmt::Debug for GAReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GAReport")
            .field("x", &format!("len={}", self.x.len()))
            .field("fun", &self.fun)
            .field("message", &self.message)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .field(
                "population",
                &format!("{}x{}", self.population.nrows(), self.population.ncols()),
            )
            .field(
                "population_energies",
                &format!("len={}", self.population_energies.len()),
            )
            .field("history", &format!("len={}", self.history.len()))
            .finish()
    }
}

/// Information passed to the callback after each generation.
pub struct GAIntermediate {
    /// Best individual of this generation.
    pub x: Array1<f64>,
    /// Fitness of `x`.
    pub fun: f64,
    /// Best fitness seen since the start of the run.
    pub best_fun: f64,
    /// Mean fitness of the population.
    pub mean: f64,
    /// Standard deviation of the population fitness.
    pub std: f64,
    /// Whether this generation improved on the best-ever fitness.
    pub improved: bool,
    /// Generation number, 0 for the initial population.
    pub iter: usize,
}

/// Genetic algorithm optimizer.
///
/// Use [`GeneticAlgorithm::new`] to create an instance, configure
/// with [`config_mut`](Self::config_mut), then call [`solve`](Self::solve).
pub struct GeneticAlgorithm<'a, F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    func: &'a F,
    lower: Array1<f64>,
    upper: Array1<f64>,
    config: GAConfig,
}

impl<'a, F> GeneticAlgorithm<'a, F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    /// Creates a new GA optimizer with objective `func` and bounds [lower, upper].
    ///
    /// # Errors
    ///
    /// Returns `GAError::BoundsMismatch`, `GAError::EmptyBounds` or
    /// `GAError::InvalidBounds` for malformed bounds.
    pub fn new(func: &'a F, lower: Array1<f64>, upper: Array1<f64>) -> Result<Self> {
        sampler::validate_bounds(&lower, &upper)?;
        Ok(Self {
            func,
            lower,
            upper,
            config: GAConfig::default(),
        })
    }

    /// Mutable access to configuration
    pub fn config_mut(&mut self) -> &mut GAConfig {
        &mut self.config
    }

    /// Run the optimization and return a report
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configuration was made invalid
    /// through [`config_mut`](Self::config_mut), and `GAError::Evaluation`
    /// as soon as the objective returns NaN.
    pub fn solve(&mut self) -> Result<GAReport> {
        use evaluate::evaluate_population;
        use mutate_reset::mutate_population;
        use pairing::crossover_population;
        use rank::rank_population;
        use repopulate::repopulate;
        use select::select_survivors;

        self.config.validate()?;
        sampler::validate_bounds(&self.lower, &self.upper)?;

        let n = self.lower.len();
        let npop = self.config.popsize;
        let maxiter = self.config.maxiter;

        if self.lower.iter().zip(self.upper.iter()).all(|(lo, hi)| lo == hi) {
            return self.solve_fixed();
        }

        let level = self.log_level();
        log::log!(
            level,
            "GA init: {} dimensions, population={}, maxiter={}",
            n,
            npop,
            maxiter
        );
        log::log!(
            level,
            "  survival_fraction={:.3}, mutation_rate={:.3}, init={:?}, repopulation={:?}, elitism={}",
            self.config.survival_fraction,
            self.config.mutation_rate,
            self.config.init,
            self.config.repopulation,
            self.config.elitism
        );

        // RNG
        let mut rng: StdRng = match self.config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        let initial = sampler::initialize(
            self.func,
            &self.lower,
            &self.upper,
            npop,
            self.config.init,
            &mut rng,
        )?;
        let mut nfev = npop;
        let mut population = initial.positions;
        let mut energies = initial.fitness;
        let mut best_x = initial.best;
        let mut best_f = initial.best_fitness;

        let mut history = Vec::with_capacity(maxiter + 1);
        history.push(best_f);
        self.report_generation(0, &best_x, best_f, best_f, &energies, true);

        for generation in 1..=maxiter {
            let (ranked, _) = rank_population(&population, &energies);
            let elite = self.config.elitism.then(|| ranked.row(0).to_owned());

            let survivors = select_survivors(&ranked, self.config.survival_fraction, generation)?;
            let refilled = repopulate(
                self.config.repopulation,
                &survivors,
                npop,
                self.config.init,
                &self.lower,
                &self.upper,
                generation,
                &mut rng,
            )?;
            let crossed = crossover_population(&refilled, &mut rng);
            let mut offspring = mutate_population(
                &crossed,
                &self.lower,
                &self.upper,
                self.config.mutation_rate,
                &mut rng,
            );
            if let Some(elite) = &elite {
                offspring.row_mut(0).assign(elite);
            }

            energies = evaluate_population(self.func, &offspring, generation)?;
            population = offspring;
            nfev += npop;

            let (gen_idx, gen_f) = argmin(&energies);
            let gen_x = population.row(gen_idx).to_owned();
            let improved = gen_f < best_f;
            if improved {
                best_f = gen_f;
                best_x = gen_x.clone();
            }
            history.push(gen_f);

            self.report_generation(generation, &gen_x, gen_f, best_f, &energies, improved);
        }

        let message = format!("Maximum iterations reached: {}", maxiter);
        log::log!(level, "GA finished: {}, best_f={:.6e}", message, best_f);

        Ok(self.finish_report(
            population, energies, best_x, best_f, message, maxiter, nfev, history,
        ))
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_parse_init_and_repopulation() {
        assert_eq!("uniform".parse::<Init>().unwrap(), Init::Uniform);
        assert_eq!(
            "latin-hypercube".parse::<Init>().unwrap(),
            Init::LatinHypercube
        );
        assert_eq!(
            "Duplicate".parse::<Repopulation>().unwrap(),
            Repopulation::Duplicate
        );
        assert_eq!(
            "inject-random".parse::<Repopulation>().unwrap(),
            Repopulation::InjectRandom
        );
        assert!("sobol".parse::<Init>().is_err());
        assert!("cull".parse::<Repopulation>().is_err());
    }

    #[test]
    fn test_defaults() {
        let cfg = GAConfig::default();
        assert_eq!(cfg.maxiter, 1000);
        assert_eq!(cfg.popsize, 100);
        assert_eq!(cfg.survival_fraction, 0.5);
        assert_eq!(cfg.mutation_rate, 0.05);
        assert_eq!(cfg.init, Init::Uniform);
        assert_eq!(cfg.repopulation, Repopulation::Duplicate);
        assert!(!cfg.elitism);
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_parameters() {
        let err = GAConfigBuilder::new().popsize(0).build().err().unwrap();
        assert!(matches!(err, GAError::PopulationTooSmall { pop_size: 0 }));

        let err = GAConfigBuilder::new().mutation_rate(1.5).build().err().unwrap();
        assert!(matches!(err, GAError::InvalidMutationRate { .. }));

        let err = GAConfigBuilder::new()
            .mutation_rate(f64::NAN)
            .build()
            .err()
            .unwrap();
        assert!(err.is_config_error());

        for fraction in [0.0, -0.2, 1.01, f64::NAN] {
            let err = GAConfigBuilder::new()
                .survival_fraction(fraction)
                .build()
                .err()
                .unwrap();
            assert!(matches!(err, GAError::InvalidSurvivalFraction { .. }));
        }

        let err = GAConfigBuilder::new()
            .popsize(3)
            .survival_fraction(0.3)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GAError::NoSurvivors { pop_size: 3, .. }));
    }

    #[test]
    fn test_builder_accepts_edges() {
        assert!(
            GAConfigBuilder::new()
                .popsize(1)
                .survival_fraction(1.0)
                .mutation_rate(0.0)
                .maxiter(0)
                .build()
                .is_ok()
        );
        assert!(GAConfigBuilder::new().mutation_rate(1.0).build().is_ok());
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        let f = |x: &Array1<f64>| x.sum();
        assert!(matches!(
            GeneticAlgorithm::new(&f, Array1::zeros(0), Array1::zeros(0)),
            Err(GAError::EmptyBounds)
        ));
        assert!(matches!(
            GeneticAlgorithm::new(&f, Array1::from(vec![1.0]), Array1::from(vec![0.0])),
            Err(GAError::InvalidBounds { index: 0, .. })
        ));
    }

    #[test]
    fn test_solve_revalidates_config() {
        let f = |x: &Array1<f64>| x.sum();
        let mut ga =
            GeneticAlgorithm::new(&f, Array1::from(vec![0.0]), Array1::from(vec![1.0])).unwrap();
        ga.config_mut().popsize = 0;
        assert!(matches!(
            ga.solve(),
            Err(GAError::PopulationTooSmall { pop_size: 0 })
        ));
    }
}
