//! Conversion helpers between `Outcome` and core fallible types.
//!
//! These adapters make it straightforward to incrementally adopt
//! `outcome-rail` by wrapping existing results or by flattening outcomes back
//! into core types when interacting with external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//! ```

use crate::outcome::Outcome;
use alloc::vec::Vec;

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if the result is `Ok`
/// * `Outcome::Failure(error)` if the result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let err_result: Result<i32, &str> = Err("failed");
/// let outcome = result_to_outcome(err_result);
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` back into a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<i32, &str>::failure("failed");
/// assert_eq!(outcome_to_result(outcome), Err("failed"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Collects many outcomes into one, failing fast on the first failure.
///
/// Named-function form of the `FromIterator` impl: all success values are
/// gathered in order, or the first failure is returned and later elements are
/// not drawn.
///
/// # Arguments
///
/// * `outcomes` - An iterator of outcomes to collect
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_outcomes;
/// use outcome_rail::Outcome;
///
/// let all = collect_outcomes([
///     Outcome::<i32, &str>::success(1),
///     Outcome::success(2),
/// ]);
/// assert_eq!(all.into_value(), Some(vec![1, 2]));
/// ```
#[inline]
pub fn collect_outcomes<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Splits a stream of outcomes into its success and failure halves.
///
/// Order is preserved within each half. Unlike
/// [`collect_outcomes`](collect_outcomes), nothing short-circuits: every
/// element is inspected.
///
/// # Arguments
///
/// * `outcomes` - An iterator of outcomes to split
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::partition_outcomes;
/// use outcome_rail::Outcome;
///
/// let (values, errors) = partition_outcomes([
///     Outcome::<i32, &str>::success(1),
///     Outcome::failure("a"),
///     Outcome::success(2),
///     Outcome::failure("b"),
/// ]);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["a", "b"]);
/// ```
pub fn partition_outcomes<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }
    (values, errors)
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
