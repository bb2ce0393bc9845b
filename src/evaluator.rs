//! Arithmetic expression evaluation.
//!
//! The fitness function only depends on the [`Evaluator`] contract: given a
//! string, produce a number or an [`EvalError`]. [`ArithmeticEvaluator`] is
//! the default implementation, parsing with the `expression.pest` grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := '-'* primary
//! primary := number | '(' expr ')'
//! ```
//!
//! Division is real division; a zero divisor is an error rather than an
//! infinity.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "expression.pest"]
struct ExpressionGrammar;

/// Failure reported by an [`Evaluator`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("invalid number literal at position {position}")]
    InvalidNumber { position: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// Whether the text was rejected before evaluation started.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            EvalError::Parse { .. } | EvalError::UnexpectedEnd | EvalError::InvalidNumber { .. }
        )
    }

    fn from_pest(input: &str, e: pest::error::Error<Rule>) -> Self {
        let position = match e.location {
            pest::error::InputLocation::Pos(pos) => pos,
            pest::error::InputLocation::Span((start, _)) => start,
        };
        if input.get(position..).map_or(true, |rest| rest.trim().is_empty()) {
            return EvalError::UnexpectedEnd;
        }
        EvalError::Parse {
            position,
            message: e.variant.message().into_owned(),
        }
    }

    fn unexpected(pair: &Pair<'_, Rule>) -> Self {
        EvalError::Parse {
            position: pair.as_span().start(),
            message: format!("unexpected {:?}", pair.as_rule()),
        }
    }
}

/// Evaluates a textual arithmetic expression.
///
/// `Send + Sync` so scoring can be spread across threads.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<f64, EvalError> + Send + Sync,
{
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        self(expression)
    }
}

/// Default evaluator for `+ - * /`, unary minus and parentheses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl Evaluator for ArithmeticEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let mut pairs = ExpressionGrammar::parse(Rule::expression, expression)
            .map_err(|e| EvalError::from_pest(expression, e))?;

        let expr = pairs
            .next()
            .and_then(|root| root.into_inner().next())
            .ok_or(EvalError::UnexpectedEnd)?;
        let value = eval_expr(expr)?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

fn eval_expr(pair: Pair<'_, Rule>) -> Result<f64, EvalError> {
    let mut inner = pair.into_inner();
    let mut acc = eval_term(inner.next().ok_or(EvalError::UnexpectedEnd)?)?;

    while let Some(op) = inner.next() {
        let rhs = eval_term(inner.next().ok_or(EvalError::UnexpectedEnd)?)?;
        match op.as_rule() {
            Rule::add => acc += rhs,
            Rule::sub => acc -= rhs,
            _ => return Err(EvalError::unexpected(&op)),
        }
    }
    Ok(acc)
}

fn eval_term(pair: Pair<'_, Rule>) -> Result<f64, EvalError> {
    let mut inner = pair.into_inner();
    let mut acc = eval_unary(inner.next().ok_or(EvalError::UnexpectedEnd)?)?;

    while let Some(op) = inner.next() {
        let rhs = eval_unary(inner.next().ok_or(EvalError::UnexpectedEnd)?)?;
        match op.as_rule() {
            Rule::mul => acc *= rhs,
            Rule::div if rhs == 0.0 => return Err(EvalError::DivisionByZero),
            Rule::div => acc /= rhs,
            _ => return Err(EvalError::unexpected(&op)),
        }
    }
    Ok(acc)
}

fn eval_unary(pair: Pair<'_, Rule>) -> Result<f64, EvalError> {
    let mut negate = false;
    for inner in pair.into_inner() {
        let value = match inner.as_rule() {
            Rule::neg => {
                negate = !negate;
                continue;
            }
            Rule::number => inner
                .as_str()
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidNumber {
                    position: inner.as_span().start(),
                })?,
            Rule::expr => eval_expr(inner)?,
            _ => return Err(EvalError::unexpected(&inner)),
        };
        return Ok(if negate { -value } else { value });
    }
    Err(EvalError::UnexpectedEnd)
}
