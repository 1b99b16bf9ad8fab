//! Error types for the genetic algorithm optimizer.
//!
//! Configuration problems are reported before the first generation runs.
//! Evaluation failures abort the run and carry enough context to reproduce
//! the failing call.

use thiserror::Error;

/// Errors that can occur during genetic algorithm optimization.
#[derive(Debug, Error)]
pub enum GAError {
    /// No dimension was given.
    #[error("bounds are empty: at least one dimension is required")]
    EmptyBounds,

    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A bound is not finite, or the lower bound exceeds the upper bound.
    #[error("invalid bounds at index {index}: [{lower}, {upper}] must be finite with lower <= upper")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Population size is zero.
    #[error("population size ({pop_size}) must be >= 1")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Mutation rate is out of valid range [0, 1].
    #[error("invalid mutation rate: {rate} (must be in [0, 1])")]
    InvalidMutationRate {
        /// The invalid mutation rate
        rate: f64,
    },

    /// Survival fraction is out of valid range (0, 1].
    #[error("invalid survival fraction: {fraction} (must be in (0, 1])")]
    InvalidSurvivalFraction {
        /// The invalid survival fraction
        fraction: f64,
    },

    /// Truncation selection would keep no individual at all.
    #[error("survival fraction {survival_fraction} keeps no individual out of {pop_size}")]
    NoSurvivors {
        /// Configured population size
        pop_size: usize,
        /// Configured survival fraction
        survival_fraction: f64,
    },

    /// The objective signalled a failure (returned NaN).
    #[error("objective returned NaN for individual {index} at generation {generation}: x = {x:?}")]
    Evaluation {
        /// Generation during which the evaluation failed (0 = initial population)
        generation: usize,
        /// Row of the failing individual in the population
        index: usize,
        /// Coordinates passed to the objective
        x: Vec<f64>,
    },

    /// Selection emptied the population before repopulation could restore it.
    #[error("population is empty after selection at generation {generation}")]
    DegenerateState {
        /// Generation at which the population collapsed
        generation: usize,
    },
}

/// A specialized `Result` type for GA operations.
pub type Result<T> = std::result::Result<T, GAError>;

impl GAError {
    /// Returns `true` if this is a bounds-related error.
    ///
    /// This includes `EmptyBounds`, `BoundsMismatch` and `InvalidBounds`.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            GAError::EmptyBounds | GAError::BoundsMismatch { .. } | GAError::InvalidBounds { .. }
        )
    }

    /// Returns `true` if this is a configuration-related error.
    ///
    /// Every bounds error is also a configuration error, as are
    /// `PopulationTooSmall`, `InvalidMutationRate`, `InvalidSurvivalFraction`
    /// and `NoSurvivors`.
    pub fn is_config_error(&self) -> bool {
        self.is_bounds_error()
            || matches!(
                self,
                GAError::PopulationTooSmall { .. }
                    | GAError::InvalidMutationRate { .. }
                    | GAError::InvalidSurvivalFraction { .. }
                    | GAError::NoSurvivors { .. }
            )
    }

    /// Returns `true` if the objective failed during the run.
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, GAError::Evaluation { .. })
    }
}
