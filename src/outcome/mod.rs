//! The [`Outcome`] sum type and its combinator algebra.
//!
//! This module provides [`Outcome`], a disjoint union holding exactly one of a
//! success value or a failure value. Unlike an accumulating validation type,
//! `Outcome` is strictly fail-fast: the first failure in any chain or
//! aggregation wins and propagates unchanged until a recovery combinator
//! intercepts it.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type that represents either a success value or a failure value
//! - [`combine()`] - Ordered, short-circuiting aggregation over many outcomes
//! - Iterator adapters and a short-circuiting `FromIterator` collect
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let success: Outcome<i32, String> = Outcome::Success(42);
//! assert!(success.is_success());
//!
//! let failure: Outcome<i32, &str> = Outcome::failure("boom");
//! assert_eq!(failure.into_error(), Some("boom"));
//! ```
use smallvec::SmallVec;

pub mod combine;
pub mod core;
pub mod iter;

pub use self::combine::*;
pub use self::core::*;
pub use self::iter::*;

/// SmallVec-backed collection used for aggregated success values.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations
/// in common cases where only a few outcomes are combined.
pub type ValueVec<T> = SmallVec<[T; 4]>;
