//! Extension trait for converting existing fallible shapes into [`Outcome`].
//!
//! Implemented for `Result<T, E>` and for the two-part `(Option<T>,
//! Option<E>)` pair, so both native and foreign fallible conventions enter an
//! outcome chain with a single postfix call instead of a wrapping constructor.

use crate::outcome::Outcome;

/// Extension trait for converting fallible values into [`Outcome`] ergonomically.
///
/// This trait provides a more natural API at chain heads compared to wrapping
/// calls in [`Outcome::from_result`] or [`Outcome::from_parts`], reducing
/// nesting while keeping the same classification policy.
///
/// # Examples
///
/// ## From a Result
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
///
/// let parsed = "21".parse::<i32>().into_outcome().map(|n| n * 2);
/// assert_eq!(parsed.into_value(), Some(42));
/// ```
///
/// ## From a Two-Part Pair
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
///
/// let pair: (Option<i32>, Option<&str>) = (None, Some("boom"));
/// let outcome = pair.into_outcome();
/// assert_eq!(outcome.into_error(), Some("boom"));
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}

/// Two-part `(value, error)` pairs classify with the
/// [`Outcome::from_parts`] policy: a present error wins.
///
/// # Panics
///
/// Panics if both sides of the pair are `None`, as documented on
/// [`Outcome::from_parts`].
impl<T, E> IntoOutcome<T, E> for (Option<T>, Option<E>) {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        let (value, error) = self;
        Outcome::from_parts(value, error)
    }
}
