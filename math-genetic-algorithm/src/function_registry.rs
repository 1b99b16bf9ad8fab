//! Shared function registry for genetic algorithm benchmarks
use crate::{GAConfig, GAConfigBuilder, Repopulation, Result};
use math_test_functions::*;
use ndarray::Array1;
use std::collections::HashMap;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Configuration for a benchmark run.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Descriptive name for the benchmark.
    pub name: String,
    /// Name of the test function.
    pub function_name: String,
    /// Variable bounds as (lower, upper) pairs.
    pub bounds: Vec<(f64, f64)>,
    /// Known global minimum value.
    pub expected_fun: f64,
    /// Accepted distance between the best fitness and `expected_fun`.
    pub fun_tolerance: f64,
    /// Number of generations.
    pub maxiter: usize,
    /// Population size.
    pub popsize: usize,
    /// Fraction of the population kept by selection.
    pub survival_fraction: f64,
    /// Per-coordinate mutation probability.
    pub mutation_rate: f64,
    /// Repopulation strategy.
    pub repopulation: Repopulation,
    /// Whether the best individual is carried over unchanged.
    pub elitism: bool,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl BenchmarkConfig {
    /// Builds the GA configuration of this benchmark.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the preset is out of range.
    pub fn config(&self) -> Result<GAConfig> {
        GAConfigBuilder::new()
            .maxiter(self.maxiter)
            .popsize(self.popsize)
            .survival_fraction(self.survival_fraction)
            .mutation_rate(self.mutation_rate)
            .repopulation(self.repopulation)
            .elitism(self.elitism)
            .seed(self.seed)
            .build()
    }
}

/// Function registry mapping names to actual function pointers.
pub struct FunctionRegistry {
    functions: HashMap<String, TestFunction>,
}

impl FunctionRegistry {
    /// Creates a new registry with all standard test functions.
    pub fn new() -> Self {
        let mut functions = HashMap::new();

        // Unimodal functions
        functions.insert("sphere".to_string(), sphere as TestFunction);
        functions.insert("rosenbrock".to_string(), rosenbrock as TestFunction);

        // Multimodal functions
        functions.insert("ackley".to_string(), ackley as TestFunction);
        functions.insert("rastrigin".to_string(), rastrigin as TestFunction);
        functions.insert("schwefel".to_string(), schwefel as TestFunction);
        functions.insert("six_hump_camel".to_string(), six_hump_camel as TestFunction);
        functions.insert("styblinski_tang".to_string(), styblinski_tang as TestFunction);
        functions.insert("eggholder".to_string(), eggholder as TestFunction);
        functions.insert("easom".to_string(), easom as TestFunction);

        Self { functions }
    }

    /// Gets a test function by name.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        self.functions.get(name).copied()
    }

    /// Bounds for `name` in `n` dimensions, from the function metadata.
    pub fn bounds(&self, name: &str, n: usize) -> Option<Vec<(f64, f64)>> {
        self.functions
            .contains_key(name)
            .then(|| get_function_bounds_vec(name, n, (-5.0, 5.0)))
    }

    /// Lists all available function names, sorted alphabetically.
    pub fn list_functions(&self) -> Vec<String> {
        let mut names: Vec<_> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns an iterator over all (name, function) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TestFunction)> {
        self.functions.iter()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate all benchmark configurations
pub fn generate_benchmark_configs() -> Vec<BenchmarkConfig> {
    vec![
        BenchmarkConfig {
            name: "sphere_2d".to_string(),
            function_name: "sphere".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            expected_fun: 0.0,
            fun_tolerance: 0.1,
            maxiter: 200,
            popsize: 50,
            survival_fraction: 0.5,
            mutation_rate: 0.1,
            repopulation: Repopulation::InjectRandom,
            elitism: true,
            seed: 42,
        },
        BenchmarkConfig {
            name: "rastrigin_2d".to_string(),
            function_name: "rastrigin".to_string(),
            bounds: vec![(-5.12, 5.12); 2],
            expected_fun: 0.0,
            fun_tolerance: 2.0,
            maxiter: 200,
            popsize: 100,
            survival_fraction: 0.5,
            mutation_rate: 0.05,
            repopulation: Repopulation::Duplicate,
            elitism: false,
            seed: 43,
        },
        BenchmarkConfig {
            name: "styblinski_tang_2d".to_string(),
            function_name: "styblinski_tang".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            expected_fun: -78.33233,
            fun_tolerance: 0.85,
            maxiter: 200,
            popsize: 100,
            survival_fraction: 0.5,
            mutation_rate: 0.1,
            repopulation: Repopulation::InjectRandom,
            elitism: true,
            seed: 44,
        },
    ]
}
