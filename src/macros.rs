//! Ergonomic macros for entering and aggregating [`Outcome`](crate::Outcome) chains.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression into an
//!   [`Outcome`](crate::Outcome), the usual chain head.
//! - [`macro@crate::combine`] - Variadic front end over
//!   [`combine`](crate::outcome::combine()), restoring the
//!   `combine(transform, a, b, c)` calling convention without an explicit
//!   collection at the call site.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{outcome, Outcome};
//!
//! let parsed = outcome!("21".parse::<i32>()).map(|n| n * 2);
//! assert_eq!(parsed.into_value(), Some(42));
//! ```

/// Wraps a `Result`-producing expression or block into an [`Outcome`](crate::Outcome).
///
/// `Ok` maps to `Success` and `Err` maps to `Failure`. Accepts either a single
/// expression or a block of code that produces a `Result`.
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome;
///
/// let failed = outcome!(Err::<i32, &str>("boom"));
/// assert!(failed.is_failure());
///
/// let parsed = outcome!({
///     let raw = "42";
///     raw.parse::<i32>()
/// });
/// assert_eq!(parsed.into_value(), Some(42));
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}

/// Aggregates a fixed list of outcomes through [`combine`](crate::outcome::combine()).
///
/// The first failure in left-to-right order short-circuits; otherwise the
/// transform receives the unwrapped success values in the order written.
/// Invoked with only a transform, the transform receives an empty vec.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Outcome, ValueVec};
///
/// let sum = combine!(
///     |values: ValueVec<i32>| Outcome::<i32, &str>::success(values.iter().sum::<i32>()),
///     Outcome::success(1),
///     Outcome::success(2),
///     Outcome::success(3),
/// );
/// assert_eq!(sum.into_value(), Some(6));
/// ```
#[macro_export]
macro_rules! combine {
    ($transform:expr $(,)?) => {
        $crate::outcome::combine($transform, ::core::iter::empty())
    };
    ($transform:expr, $($outcome:expr),+ $(,)?) => {
        $crate::outcome::combine($transform, [$($outcome),+])
    };
}
