//! Ranking and roulette-wheel selection.
//!
//! A generation is scored, sorted by score (best first) and normalized into
//! a non-decreasing sequence of cumulative boundaries. A parent is chosen by
//! drawing `t` in `[0, 1)` and taking the last entry whose boundary is
//! `<= t`. The first boundary is always `0`, so every draw selects someone.
//!
//! # Schemes
//!
//! Both schemes compute `share = score / global_fitness` per entry and give
//! each entry an interval of width `w` on the wheel:
//!
//! - [`SelectionScheme::Ramp`]: `w = 1 - share`. The wheel is `N - 1` units
//!   long while draws only cover the first unit, so selection is confined
//!   to the head of the ranking. Inside that head a dominant individual gets
//!   a narrow interval and its runners-up wide ones.
//! - [`SelectionScheme::Proportional`]: `w = share`, classic
//!   fitness-proportionate selection on a wheel of length 1.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::genome::Individual;
use rand::Rng;

/// How fitness scores are turned into roulette boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionScheme {
    /// Interval width `1 - score / global_fitness`, draws in `[0, 1)`.
    #[default]
    Ramp,

    /// Interval width `score / global_fitness`.
    Proportional,
}

/// An individual with its score and roulette boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndividual {
    pub individual: Individual,
    pub score: f64,
    /// Sum of the interval widths of every better-ranked entry.
    pub cumulative: f64,
}

/// One generation sorted by descending score, ready for selection.
#[derive(Debug, Clone)]
pub struct RankedPopulation {
    entries: Vec<ScoredIndividual>,
    global_fitness: f64,
}

impl RankedPopulation {
    /// Ranks `(individual, score)` pairs.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn new(scored: Vec<(Individual, f64)>, scheme: SelectionScheme) -> Self {
        let global_fitness: f64 = scored.iter().map(|&(_, score)| score).sum();

        let mut entries: Vec<ScoredIndividual> = scored
            .into_iter()
            .map(|(individual, score)| ScoredIndividual {
                individual,
                score,
                cumulative: 0.0,
            })
            .collect();
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        let n = entries.len();
        let mut cumulative = 0.0;
        for entry in &mut entries {
            let width = match scheme {
                SelectionScheme::Ramp if global_fitness > 0.0 => {
                    1.0 - entry.score / global_fitness
                }
                SelectionScheme::Ramp => 1.0,
                SelectionScheme::Proportional if global_fitness > 0.0 => {
                    entry.score / global_fitness
                }
                SelectionScheme::Proportional => 1.0 / n as f64,
            };
            entry.cumulative = cumulative;
            cumulative += width.max(0.0);
        }

        Self {
            entries,
            global_fitness,
        }
    }

    /// Sum of all scores.
    pub fn global_fitness(&self) -> f64 {
        self.global_fitness
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, best first.
    pub fn entries(&self) -> &[ScoredIndividual] {
        &self.entries
    }

    /// Highest-scoring entry.
    pub fn best(&self) -> Option<&ScoredIndividual> {
        self.entries.first()
    }

    /// Index of the entry owning draw `t`.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn index_for(&self, t: f64) -> usize {
        assert!(!self.entries.is_empty(), "cannot select from empty population");
        self.entries
            .partition_point(|entry| entry.cumulative <= t)
            .saturating_sub(1)
    }

    /// Roulette-wheel selection of one parent.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn select<R: Rng>(&self, rng: &mut R) -> Individual {
        let t: f64 = rng.random();
        let index = self.index_for(t);
        log::trace!("roulette draw {t:.6} selected rank {index}");
        self.entries[index].individual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn ranked(scores: &[f64], scheme: SelectionScheme) -> RankedPopulation {
        let scored = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (Individual::from_genome(i as u64), s))
            .collect();
        RankedPopulation::new(scored, scheme)
    }

    fn cumulative(r: &RankedPopulation) -> Vec<f64> {
        r.entries().iter().map(|e| e.cumulative).collect()
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let r = ranked(&[0.1, 0.5, 0.1, 1.0], SelectionScheme::Ramp);
        let order: Vec<u64> = r.entries().iter().map(|e| e.individual.genome()).collect();
        assert_eq!(order, vec![3, 1, 0, 2]);
        assert!((r.global_fitness() - 1.7).abs() < 1e-12);
        assert_eq!(r.best().map(|e| e.individual.genome()), Some(3));
    }

    #[test]
    fn test_ramp_boundaries() {
        // global = 2.0; widths 1 - s/2 = 0.5, 0.75, 0.75
        let r = ranked(&[1.0, 0.5, 0.5], SelectionScheme::Ramp);
        let c = cumulative(&r);
        assert_eq!(c, vec![0.0, 0.5, 1.25]);
    }

    #[test]
    fn test_proportional_boundaries() {
        let r = ranked(&[1.0, 0.5, 0.5], SelectionScheme::Proportional);
        assert_eq!(cumulative(&r), vec![0.0, 0.5, 0.75]);
    }

    #[test]
    fn test_zero_global_fitness() {
        let r = ranked(&[0.0, 0.0, 0.0, 0.0], SelectionScheme::Proportional);
        assert_eq!(cumulative(&r), vec![0.0, 0.25, 0.5, 0.75]);

        let r = ranked(&[0.0, 0.0], SelectionScheme::Ramp);
        assert_eq!(cumulative(&r), vec![0.0, 1.0]);
    }

    #[test]
    fn test_index_for_is_total() {
        let r = ranked(&[1.0, 0.5, 0.5], SelectionScheme::Ramp);
        assert_eq!(r.index_for(0.0), 0);
        assert_eq!(r.index_for(0.49), 0);
        assert_eq!(r.index_for(0.5), 1);
        assert_eq!(r.index_for(0.999), 1);

        // A dominant individual has a zero-width interval: every draw above 0
        // falls to the runner-up, and 0 itself is still answered.
        let r = ranked(&[1.0, 0.0, 0.0], SelectionScheme::Ramp);
        assert_eq!(cumulative(&r), vec![0.0, 0.0, 1.0]);
        assert_eq!(r.index_for(0.0), 1);
        assert_eq!(r.index_for(0.3), 1);
    }

    #[test]
    fn test_ramp_reaches_only_the_head() {
        let scores: Vec<f64> = (1..=50).map(|i| 1.0 / i as f64).collect();
        let r = ranked(&scores, SelectionScheme::Ramp);
        let mut rng = create_rng(42);
        for _ in 0..2000 {
            let chosen = r.select(&mut rng).genome();
            // Index 0 (score 1.0) and 1 (score 0.5) cover the whole [0, 1) range.
            assert!(chosen <= 1, "selected rank {chosen}");
        }
    }

    #[test]
    fn test_proportional_favors_best() {
        let r = ranked(&[8.0, 1.0, 1.0], SelectionScheme::Proportional);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 3];
        let n = 10_000;
        for _ in 0..n {
            counts[r.select(&mut rng).genome() as usize] += 1;
        }
        assert!(
            counts[0] > 7_500 && counts[0] < 8_500,
            "expected ~80% for the best, got {counts:?}"
        );
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        for scheme in [SelectionScheme::Ramp, SelectionScheme::Proportional] {
            let r = ranked(&[0.3], scheme);
            assert_eq!(r.select(&mut rng).genome(), 0);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let r = ranked(&[], SelectionScheme::Ramp);
        let mut rng = create_rng(42);
        r.select(&mut rng);
    }
}
