//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Fallible Steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse::<i32>() {
//!         Ok(n) => Outcome::success(n),
//!         Err(e) => Outcome::failure(e.to_string()),
//!     }
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.into_value(), Some(42));
//!
//! let failed = parse("not a number").map(|n| n * 2);
//! assert!(failed.is_failure());
//! ```
//!
//! ## Aggregating Ordered Outcomes
//!
//! ```
//! use outcome_rail::{combine, Outcome, ValueVec};
//!
//! let total = combine(
//!     |values: ValueVec<i32>| Outcome::<i32, &str>::success(values.iter().sum::<i32>()),
//!     [Outcome::success(1), Outcome::success(2), Outcome::success(3)],
//! );
//! assert_eq!(total.into_value(), Some(6));
//! ```
//!
//! ## Bridging the Two-Part Convention
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let fetched: Outcome<&str, &str> = Outcome::attempt(|| (Some("payload"), None));
//! let (value, error) = fetched.into_parts();
//! assert_eq!(value, Some("payload"));
//! assert_eq!(error, None);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result, and the two-part convention
pub mod convert;
/// Convenience macros for wrapping and aggregating outcomes
pub mod macros;
/// The Outcome sum type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Adoption traits for existing fallible types
pub mod traits;

pub use convert::*;
pub use outcome::{combine, Outcome, ValueVec};
pub use traits::IntoOutcome;
