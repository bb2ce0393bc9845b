//! Deduplicated view of a finished population.
//!
//! Many individuals of a converged population share the same compiled
//! expression. [`ResultSummary`] keeps one entry per distinct expression with
//! its numeric result, for reporters to render however they like.

use crate::evaluator::Evaluator;
use crate::fitness::FitnessFunction;
use crate::population::Population;
use std::collections::BTreeMap;

/// Distinct compiled expressions mapped to their result.
///
/// Unusable expressions (including the empty one) map to
/// [`WORST_RESULT`](crate::fitness::WORST_RESULT).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResultSummary {
    results: BTreeMap<String, i64>,
}

impl ResultSummary {
    /// Evaluates every individual and keeps one entry per expression.
    pub fn from_population<E: Evaluator>(
        population: &Population,
        fitness: &FitnessFunction<E>,
    ) -> Self {
        let results = population
            .outcomes(fitness)
            .into_iter()
            .map(|outcome| (outcome.expression, outcome.evaluation.result_or_worst()))
            .collect();
        Self { results }
    }

    /// Number of distinct expressions.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no expression was recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result recorded for `expression`.
    pub fn get(&self, expression: &str) -> Option<i64> {
        self.results.get(expression).copied()
    }

    /// Entries in lexicographic expression order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.results.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Entry whose result is closest to `target`; ties go to the
    /// lexicographically smallest expression.
    pub fn best_match(&self, target: i64) -> Option<(&str, i64)> {
        self.iter()
            .min_by_key(|&(_, result)| (i128::from(target) - i128::from(result)).unsigned_abs())
    }

    /// Consumes the summary, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, i64> {
        self.results
    }
}
