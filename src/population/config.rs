//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds every parameter of the generational loop.

use super::selection::SelectionScheme;
use crate::breeding::DEFAULT_MUTATION_RATE;
use crate::fitness::DEFAULT_PERFECT_MATCH_FITNESS;
use thiserror::Error;

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("generations must be at least 1")]
    NoGenerations,

    #[error("replacement_rate must lie in [0, 1], got {0}")]
    ReplacementRate(f64),

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRate(f64),

    #[error("perfect_match_fitness must be finite and greater than 1, got {0}")]
    PerfectMatchFitness(f64),
}

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use genexpr::population::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 1000);
/// assert_eq!(config.new_individuals(config.population_size), 250);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genexpr::population::{EvolutionConfig, SelectionScheme};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(200)
///     .with_generations(50)
///     .with_selection(SelectionScheme::Proportional)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Number of individuals, constant across generations.
    pub population_size: usize,

    /// Number of generation transitions performed by the runner.
    pub generations: usize,

    /// Fraction of each generation replaced by bred offspring (0.0–1.0).
    ///
    /// The rest of the population is carried over from the best-ranked
    /// individuals of the previous generation.
    pub replacement_rate: f64,

    /// Probability that an offspring gets one bit flipped (0.0–1.0).
    pub mutation_rate: f64,

    /// How fitness scores are turned into roulette boundaries.
    pub selection: SelectionScheme,

    /// Score given to an individual that hits the target exactly.
    pub perfect_match_fitness: f64,

    /// Score individuals on the rayon pool.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            generations: 100,
            replacement_rate: 0.25,
            mutation_rate: DEFAULT_MUTATION_RATE,
            selection: SelectionScheme::default(),
            perfect_match_fitness: DEFAULT_PERFECT_MATCH_FITNESS,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the replacement rate, clamped to `[0, 1]`.
    pub fn with_replacement_rate(mut self, rate: f64) -> Self {
        self.replacement_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection scheme.
    pub fn with_selection(mut self, selection: SelectionScheme) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the score of an exact match.
    pub fn with_perfect_match_fitness(mut self, fitness: f64) -> Self {
        self.perfect_match_fitness = fitness;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of offspring bred per generation for a population of `n`.
    pub fn new_individuals(&self, n: usize) -> usize {
        ((self.replacement_rate * n as f64).floor() as usize).min(n)
    }

    /// Number of individuals carried over unchanged for a population of `n`.
    pub fn elite_count(&self, n: usize) -> usize {
        n - self.new_individuals(n)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.replacement_rate) {
            return Err(ConfigError::ReplacementRate(self.replacement_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if !(self.perfect_match_fitness.is_finite() && self.perfect_match_fitness > 1.0) {
            return Err(ConfigError::PerfectMatchFitness(
                self.perfect_match_fitness,
            ));
        }
        Ok(())
    }
}
