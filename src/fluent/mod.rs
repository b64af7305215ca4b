//! Fluent assertion API for `Option` values.
//!
//! This module provides a chainable API for making assertions about an
//! optional value. Assertions evaluate immediately (panic on failure) when
//! using methods like `to_contain()`, or can be evaluated non-destructively
//! using the `evaluate_*` methods.
//!
//! # Example
//!
//! ```rust
//! use expectant::expect;
//!
//! let value = Some(10);
//!
//! // Immediate evaluation (panics on failure)
//! expect(&value)
//!     .to_be_present()
//!     .to_contain(&10);
//!
//! // Non-panicking evaluation
//! let result = expect(&value).evaluate_contains(&99);
//! assert!(!result.passed);
//! ```

mod builder;
mod failure;
mod strategy;

pub use builder::{expect, expect_maybe, AssertionResult, OptionAssertion};
pub use failure::FailureKind;
pub use strategy::{ComparatorBased, ComparisonError, ComparisonStrategy, StandardEquality};

#[cfg(feature = "fieldwise")]
pub use strategy::FieldwiseEquality;

#[cfg(test)]
mod tests;
