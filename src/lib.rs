//! Evolves arithmetic expressions toward a target integer with a genetic
//! algorithm.
//!
//! Candidate expressions are encoded as fixed-width bit strings:
//!
//! - **Genome codec** ([`genome`]): 64-bit genomes, nine 4-bit genes read as
//!   digits or operators, compiled into alternating operand/operator text.
//! - **Evaluator** ([`evaluator`]): the [`Evaluator`](evaluator::Evaluator)
//!   seam and a built-in arithmetic parser.
//! - **Fitness** ([`fitness`]): inverse distance between an expression's
//!   floored result and the target.
//! - **Breeding** ([`breeding`]): single-point crossover and single-bit
//!   mutation over the used genome bits.
//! - **Population engine** ([`population`]): scoring, ranking, roulette
//!   selection, elitist replacement and the [`EvolutionRunner`](population::EvolutionRunner).
//! - **Summary** ([`summary`]): deduplicated expression → result mapping of a
//!   finished population.
//!
//! # Example
//!
//! ```
//! use genexpr::evaluator::ArithmeticEvaluator;
//! use genexpr::population::{EvolutionConfig, EvolutionRunner};
//! use genexpr::summary::ResultSummary;
//! use genexpr::fitness::FitnessFunction;
//!
//! let config = EvolutionConfig::default()
//!     .with_population_size(200)
//!     .with_generations(20)
//!     .with_seed(7);
//! let result = EvolutionRunner::run(&config, 42, ArithmeticEvaluator).unwrap();
//!
//! let summary = ResultSummary::from_population(&result.population, &FitnessFunction::arithmetic(42));
//! assert!(summary.best_match(42).is_some());
//! ```
//!
//! All randomness is drawn from an explicit generator; runs are reproducible
//! from [`EvolutionConfig::seed`](population::EvolutionConfig::seed).
//! Logging goes through the `log` facade.

pub mod breeding;
pub mod evaluator;
pub mod fitness;
pub mod genome;
pub mod population;
pub mod random;
pub mod summary;
