//! Ordered, short-circuiting aggregation over many outcomes.

use crate::outcome::core::Outcome;
use crate::outcome::ValueVec;

/// Composes the success values of many outcomes, failing fast on the first failure.
///
/// Scans `outcomes` left to right. The first failure encountered is returned
/// immediately: `transform` is not invoked and later elements are not drawn
/// from the iterator, so any failures after the first are never observed. If
/// every element is a success, `transform` receives the unwrapped values in
/// their original order and its outcome is returned.
///
/// An empty input is valid: `transform` is invoked with an empty vec.
///
/// # Arguments
///
/// * `transform` - Composition applied to the ordered success values
/// * `outcomes` - The outcomes to aggregate, in order
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Outcome, ValueVec};
///
/// let sum = combine(
///     |values: ValueVec<i32>| Outcome::<i32, &str>::success(values.iter().sum::<i32>()),
///     [Outcome::success(1), Outcome::success(2), Outcome::success(3)],
/// );
/// assert_eq!(sum.into_value(), Some(6));
///
/// let first_failure = combine(
///     |values: ValueVec<i32>| Outcome::success(values.len()),
///     [Outcome::success(1), Outcome::failure("first"), Outcome::failure("second")],
/// );
/// assert_eq!(first_failure.into_error(), Some("first"));
/// ```
#[inline]
pub fn combine<T, E, U, F, I>(transform: F, outcomes: I) -> Outcome<U, E>
where
    F: FnOnce(ValueVec<T>) -> Outcome<U, E>,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iter = outcomes.into_iter();
    let mut values = ValueVec::with_capacity(iter.size_hint().0);
    for outcome in iter {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    transform(values)
}
