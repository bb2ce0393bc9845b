//! Fitness function.
//!
//! An individual is scored by compiling its genome, evaluating the text and
//! comparing the floored result with the target:
//!
//! ```text
//! score = 1 / |target - result|
//! ```
//!
//! Higher is better. Results are integers, so every non-exact answer scores
//! at most `1.0`; an exact answer scores the configured perfect-match value
//! instead of dividing by zero. Individuals that cannot be evaluated score
//! `0.0`.

use crate::evaluator::{ArithmeticEvaluator, EvalError, Evaluator};
use crate::genome::Individual;

/// Result reported for unusable individuals by [`Evaluation::result_or_worst`].
pub const WORST_RESULT: i64 = i32::MIN as i64;

/// Score given to an exact match unless overridden.
pub const DEFAULT_PERFECT_MATCH_FITNESS: f64 = 2.0;

/// Outcome of evaluating one individual.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Floored numeric result.
    Value(i64),
    /// The genome compiled to an empty string.
    EmptyExpression,
    /// The evaluator rejected the text.
    ParseError(EvalError),
    /// The text parsed but could not be computed.
    EvaluationError(EvalError),
}

impl Evaluation {
    fn from_evaluator(outcome: Result<f64, EvalError>) -> Self {
        match outcome {
            Ok(value) => {
                let floored = value.floor();
                // i64::MAX as f64 rounds up to 2^63, hence the strict bound.
                if floored.is_finite()
                    && floored >= i64::MIN as f64
                    && floored < i64::MAX as f64
                {
                    Evaluation::Value(floored as i64)
                } else {
                    Evaluation::EvaluationError(EvalError::NonFinite)
                }
            }
            Err(e) if e.is_syntax() => Evaluation::ParseError(e),
            Err(e) => Evaluation::EvaluationError(e),
        }
    }

    /// The numeric result, if any.
    pub fn value(&self) -> Option<i64> {
        match self {
            Evaluation::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the individual produced a number.
    pub fn is_usable(&self) -> bool {
        self.value().is_some()
    }

    /// The numeric result, or [`WORST_RESULT`] for every failure kind.
    pub fn result_or_worst(&self) -> i64 {
        self.value().unwrap_or(WORST_RESULT)
    }
}

/// Scores individuals against a target value.
#[derive(Debug, Clone)]
pub struct FitnessFunction<E = ArithmeticEvaluator> {
    evaluator: E,
    target: i64,
    perfect_match_fitness: f64,
}

impl FitnessFunction<ArithmeticEvaluator> {
    /// Fitness against `target` using the built-in evaluator.
    pub fn arithmetic(target: i64) -> Self {
        Self::new(target, ArithmeticEvaluator)
    }
}

impl<E: Evaluator> FitnessFunction<E> {
    /// Creates a fitness function for `target` using `evaluator`.
    pub fn new(target: i64, evaluator: E) -> Self {
        Self {
            evaluator,
            target,
            perfect_match_fitness: DEFAULT_PERFECT_MATCH_FITNESS,
        }
    }

    /// Sets the score of an exact match.
    pub fn with_perfect_match_fitness(mut self, fitness: f64) -> Self {
        self.perfect_match_fitness = fitness;
        self
    }

    /// Target value.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Score awarded to an exact match.
    pub fn perfect_match_fitness(&self) -> f64 {
        self.perfect_match_fitness
    }

    /// Evaluator used for scoring.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Compiles and evaluates `individual`.
    pub fn evaluate(&self, individual: Individual) -> Evaluation {
        let text = individual.compile();
        if text.is_empty() {
            return Evaluation::EmptyExpression;
        }
        Evaluation::from_evaluator(self.evaluator.evaluate(&text))
    }

    /// Fitness score of `individual`.
    pub fn score(&self, individual: Individual) -> f64 {
        self.score_evaluation(&self.evaluate(individual))
    }

    /// Fitness score of an already computed evaluation.
    pub fn score_evaluation(&self, evaluation: &Evaluation) -> f64 {
        let Some(value) = evaluation.value() else {
            return 0.0;
        };
        match (i128::from(self.target) - i128::from(value)).unsigned_abs() {
            0 => self.perfect_match_fitness,
            distance => 1.0 / distance as f64,
        }
    }
}
