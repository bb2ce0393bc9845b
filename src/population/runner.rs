//! Evolution loop execution.
//!
//! [`EvolutionRunner`] drives a complete run:
//! validation → seeding → random population → `generations` transitions.

use super::config::{ConfigError, EvolutionConfig};
use super::Population;
use crate::evaluator::Evaluator;
use crate::fitness::{Evaluation, FitnessFunction};
use crate::genome::Individual;
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The final population.
    pub population: Population,

    /// Best individual of the final population.
    pub best: Individual,

    /// Evaluation of [`best`](Self::best).
    pub best_evaluation: Evaluation,

    /// Score of [`best`](Self::best).
    pub best_fitness: f64,

    /// Number of transitions performed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best score of the initial population and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolution loop.
///
/// # Usage
///
/// ```
/// use genexpr::evaluator::ArithmeticEvaluator;
/// use genexpr::population::{EvolutionConfig, EvolutionRunner};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(100)
///     .with_generations(10)
///     .with_seed(42);
/// let result = EvolutionRunner::run(&config, 24, ArithmeticEvaluator).unwrap();
/// assert_eq!(result.population.len(), 100);
/// assert_eq!(result.fitness_history.len(), 11);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs an evolution toward `target`.
    ///
    /// Returns `Err` before any work is done if the configuration is invalid.
    pub fn run<E: Evaluator>(
        config: &EvolutionConfig,
        target: i64,
        evaluator: E,
    ) -> Result<EvolutionResult, ConfigError> {
        Self::run_with_cancel(config, target, evaluator, None)
    }

    /// Runs an evolution with an optional cancellation token.
    ///
    /// The flag is checked before each generation; once set, the run stops
    /// and reports the population reached so far.
    pub fn run_with_cancel<E: Evaluator>(
        config: &EvolutionConfig,
        target: i64,
        evaluator: E,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolutionResult, ConfigError> {
        config.validate()?;

        let fitness = FitnessFunction::new(target, evaluator)
            .with_perfect_match_fitness(config.perfect_match_fitness);
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        log::info!(
            "evolving toward {target}: population {}, {} generations, seed {seed}",
            config.population_size,
            config.generations
        );

        let mut population = Population::random(config.population_size, &mut rng);
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        let mut generations = 0;
        let mut cancelled = false;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    log::warn!("evolution cancelled after {gen} generations");
                    cancelled = true;
                    break;
                }
            }

            let ranked = population.rank(&fitness, config.selection, config.parallel);
            if let Some(best) = ranked.best() {
                fitness_history.push(best.score);
                log::debug!(
                    "generation {gen}: best {:.6} ({:?})",
                    best.score,
                    best.individual.compile()
                );
            }

            population = Population::breed_from(&ranked, config, &mut rng);
            generations = gen + 1;
        }

        let ranked = population.rank(&fitness, config.selection, config.parallel);
        let best = ranked
            .best()
            .copied()
            .ok_or(ConfigError::EmptyPopulation)?;
        fitness_history.push(best.score);

        let best_evaluation = fitness.evaluate(best.individual);
        log::info!(
            "finished after {generations} generations: {:?} = {:?}",
            best.individual.compile(),
            best_evaluation
        );

        Ok(EvolutionResult {
            population,
            best: best.individual,
            best_evaluation,
            best_fitness: best.score,
            generations,
            cancelled,
            fitness_history,
        })
    }
}
