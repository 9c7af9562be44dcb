//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`combine!`]
//! - **Types**: [`Outcome`], [`ValueVec`]
//! - **Functions**: [`combine()`]
//! - **Traits**: [`IntoOutcome`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into_outcome()
//! }
//!
//! let port = parse_port("8080").recover(80);
//! assert_eq!(port, 8080);
//! ```

// Macros; the `combine` function rides along in the value namespace.
pub use crate::{combine, outcome};

// Core type and aggregation storage
pub use crate::outcome::{Outcome, ValueVec};

// Traits
pub use crate::traits::IntoOutcome;
