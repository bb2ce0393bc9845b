//! Population engine.
//!
//! A [`Population`] is a fixed-size vector of individuals that is replaced
//! wholesale at every generation. One transition:
//!
//! 1. score every individual (optionally on the rayon pool),
//! 2. rank them by descending score and build roulette boundaries,
//! 3. breed `floor(replacement_rate × N)` children from roulette-selected
//!    parents,
//! 4. fill the remaining slots with the best-ranked individuals, unchanged.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: loop parameters and validation
//! - [`RankedPopulation`]: a scored, sorted generation used for selection
//! - [`EvolutionRunner`]: runs a whole evolution from a config
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod runner;
mod selection;

pub use config::{ConfigError, EvolutionConfig};
pub use runner::{EvolutionResult, EvolutionRunner};
pub use selection::{RankedPopulation, ScoredIndividual, SelectionScheme};

use crate::breeding::breed;
use crate::evaluator::Evaluator;
use crate::fitness::{Evaluation, FitnessFunction};
use crate::genome::Individual;
use rand::Rng;

/// Evaluated view of one individual, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub individual: Individual,
    pub expression: String,
    pub evaluation: Evaluation,
}

/// An ordered, fixed-size collection of individuals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` random individuals.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        Self {
            individuals: (0..size).map(|_| Individual::random(rng)).collect(),
        }
    }

    /// Wraps an existing set of individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Individuals in order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Consumes the population, returning its individuals.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Scores and ranks the population.
    ///
    /// All scores are computed before sorting starts, so the parallel and
    /// sequential paths produce the same ranking.
    pub fn rank<E: Evaluator>(
        &self,
        fitness: &FitnessFunction<E>,
        scheme: SelectionScheme,
        parallel: bool,
    ) -> RankedPopulation {
        RankedPopulation::new(score_all(&self.individuals, fitness, parallel), scheme)
    }

    /// Produces the next generation.
    pub fn next_generation<E: Evaluator, R: Rng>(
        &self,
        fitness: &FitnessFunction<E>,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Population {
        let ranked = self.rank(fitness, config.selection, config.parallel);
        Self::breed_from(&ranked, config, rng)
    }

    /// Builds the next generation from an already ranked one.
    pub(crate) fn breed_from<R: Rng>(
        ranked: &RankedPopulation,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Population {
        let n = ranked.len();
        let bred = config.new_individuals(n);

        let mut individuals = Vec::with_capacity(n);
        for _ in 0..bred {
            let parent_a = ranked.select(rng);
            let parent_b = ranked.select(rng);
            individuals.push(breed(parent_a, parent_b, config.mutation_rate, rng));
        }
        individuals.extend(
            ranked.entries()[..n - bred]
                .iter()
                .map(|entry| entry.individual),
        );

        Population { individuals }
    }

    /// Applies `count` transitions in sequence.
    ///
    /// With `count == 0` the population is returned as is.
    pub fn run_generations<E: Evaluator, R: Rng>(
        self,
        count: usize,
        fitness: &FitnessFunction<E>,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Population {
        (0..count).fold(self, |population, _| {
            population.next_generation(fitness, config, rng)
        })
    }

    /// Compiled expression and evaluation of every individual, in order.
    pub fn outcomes<E: Evaluator>(&self, fitness: &FitnessFunction<E>) -> Vec<Outcome> {
        self.individuals
            .iter()
            .map(|&individual| Outcome {
                individual,
                expression: individual.compile(),
                evaluation: fitness.evaluate(individual),
            })
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn score_all<E: Evaluator>(
    individuals: &[Individual],
    fitness: &FitnessFunction<E>,
    parallel: bool,
) -> Vec<(Individual, f64)> {
    use rayon::prelude::*;

    if parallel {
        individuals
            .par_iter()
            .map(|&individual| (individual, fitness.score(individual)))
            .collect()
    } else {
        individuals
            .iter()
            .map(|&individual| (individual, fitness.score(individual)))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<E: Evaluator>(
    individuals: &[Individual],
    fitness: &FitnessFunction<E>,
    _parallel: bool,
) -> Vec<(Individual, f64)> {
    individuals
        .iter()
        .map(|&individual| (individual, fitness.score(individual)))
        .collect()
}
