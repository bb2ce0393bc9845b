//! Breeding operators: single-point crossover and single-bit mutation.
//!
//! Genes sit at fixed bit positions, so crossover is a plain mask merge of
//! the two parent genomes and needs no alignment step.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*, ch. 1

use crate::genome::{Individual, GENOME_BITS};
use rand::Rng;

/// Probability of flipping one bit after crossover unless configured otherwise.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Single-point crossover at a uniformly drawn cut in `[0, GENOME_BITS]`.
///
/// The child takes bits `0..cut` from `parent_b` and every bit at or above
/// `cut` from `parent_a`, including the unused storage bits. Both extremes
/// are reachable: cut `0` copies `parent_a`, cut `GENOME_BITS` takes every
/// used bit from `parent_b`.
pub fn crossover<R: Rng>(
    parent_a: Individual,
    parent_b: Individual,
    rng: &mut R,
) -> Individual {
    let cut = rng.random_range(0..=GENOME_BITS);
    crossover_at(parent_a, parent_b, cut)
}

/// Crossover with an explicit cut position.
///
/// # Panics
/// Panics if `cut > GENOME_BITS`.
pub fn crossover_at(parent_a: Individual, parent_b: Individual, cut: u32) -> Individual {
    assert!(cut <= GENOME_BITS, "cut {cut} beyond genome width");
    let low = (1u64 << cut) - 1;
    Individual::from_genome((parent_a.genome() & !low) | (parent_b.genome() & low))
}

/// With probability `rate`, flips one uniformly chosen bit among the
/// [`GENOME_BITS`] used bits; otherwise returns `individual` unchanged.
pub fn mutate<R: Rng>(individual: Individual, rate: f64, rng: &mut R) -> Individual {
    if rng.random::<f64>() < rate {
        let bit = rng.random_range(0..GENOME_BITS);
        Individual::from_genome(individual.genome() ^ (1u64 << bit))
    } else {
        individual
    }
}

/// Crossover followed by conditional mutation. Parents are untouched.
pub fn breed<R: Rng>(
    parent_a: Individual,
    parent_b: Individual,
    mutation_rate: f64,
    rng: &mut R,
) -> Individual {
    mutate(crossover(parent_a, parent_b, rng), mutation_rate, rng)
}
