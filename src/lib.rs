//! # expectant
//!
//! A fluent assertion library for `Option` values.
//!
//! This library provides chainable assertions over optional values with
//! rich failure messages and a pluggable comparison strategy. It is meant
//! to be used with Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use expectant::expect;
//!
//! #[derive(Debug, PartialEq)]
//! struct User { name: String }
//!
//! let user = Some(User { name: "frodo".into() });
//!
//! expect(&user)
//!     .to_be_present()
//!     .to_contain(&User { name: "frodo".into() });
//!
//! let nobody: Option<User> = None;
//! expect(&nobody).to_be_empty();
//! ```
//!
//! ## Swapping the Comparison Strategy
//!
//! Each chain starts with standard `PartialEq` comparison. When the value
//! type's equality does not suit the test, swap in a custom comparator or
//! field-by-field comparison; the swap only affects checks made after it.
//!
//! ```rust
//! use expectant::expect;
//!
//! let answer = Some(42_i64);
//!
//! expect(&answer)
//!     .using_value_comparator(|a: &i64, b: &i64| (a % 10).cmp(&(b % 10)))
//!     .to_contain(&12)
//!     .using_default_value_comparator()
//!     .to_contain(&42);
//! ```
//!
//! ## Inspecting Failures Without Panicking
//!
//! Every assertion has an `evaluate_*` counterpart that returns an
//! [`AssertionResult`] carrying the failure classification instead of
//! panicking.
//!
//! ```rust
//! use expectant::{expect, FailureKind};
//!
//! let value: Option<&str> = None;
//! let result = expect(&value).evaluate_contains(&"something");
//!
//! assert!(!result.passed);
//! assert_eq!(result.kind, Some(FailureKind::NotPresent));
//! ```

pub mod fluent;
pub mod format;

// Core types
pub use fluent::{expect, expect_maybe, AssertionResult, OptionAssertion};

// Failure classification
pub use fluent::FailureKind;

// Comparison strategies
pub use fluent::{ComparatorBased, ComparisonError, ComparisonStrategy, StandardEquality};

// Fieldwise comparison (feature-gated)
#[cfg(feature = "fieldwise")]
pub use fluent::FieldwiseEquality;

// Failure message rendering
pub use format::ValueFormatter;
