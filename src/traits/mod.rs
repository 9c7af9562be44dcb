//! Adoption traits for existing fallible types.
//!
//! This module defines [`IntoOutcome`], the postfix conversion path from the
//! fallible shapes a codebase already has (`Result` values and two-part
//! `(value, error)` pairs) into [`Outcome`](crate::Outcome) chains.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result.into_outcome().map(|x| x * 2);
//! assert_eq!(outcome.into_value(), Some(84));
//! ```

pub mod into_outcome;

pub use into_outcome::IntoOutcome;
