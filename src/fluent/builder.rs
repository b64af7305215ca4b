//! Fluent assertion builder for `Option` values.
//!
//! This module provides the core types for making assertions about an
//! optional value:
//! - `expect()` - Entry point wrapping a borrowed `Option<T>`
//! - `expect_maybe()` - Entry point for a container that may itself be missing
//! - `OptionAssertion` - The assertion chain

use super::failure::FailureKind;
use super::strategy::{ComparatorBased, ComparisonStrategy, StandardEquality};
use crate::format::ValueFormatter;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "fieldwise")]
use super::strategy::FieldwiseEquality;
#[cfg(feature = "fieldwise")]
use serde::Serialize;

/// Result of evaluating an assertion.
#[derive(Debug, Clone)]
pub struct AssertionResult {
    /// Whether the assertion passed.
    pub passed: bool,
    /// Description of what was asserted.
    pub description: String,
    /// Failure reason if the assertion failed.
    pub reason: Option<String>,
    /// Failure classification if the assertion failed.
    pub kind: Option<FailureKind>,
}

impl AssertionResult {
    /// Create a passing assertion result.
    pub(crate) fn pass(description: impl Into<String>) -> Self {
        Self {
            passed: true,
            description: description.into(),
            reason: None,
            kind: None,
        }
    }

    /// Create a failing assertion result.
    pub(crate) fn fail(
        kind: FailureKind,
        description: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            passed: false,
            description: description.into(),
            reason: Some(reason.into()),
            kind: Some(kind),
        }
    }
}

/// Create an assertion chain for an `Option`.
///
/// This is the entry point for the fluent assertion API. The value is
/// borrowed, not cloned, so identity checks with
/// [`to_contain_same`](OptionAssertion::to_contain_same) remain meaningful.
///
/// # Example
///
/// ```rust
/// use expectant::expect;
///
/// let value = Some("something");
/// expect(&value).to_be_present().to_contain(&"something");
/// ```
pub fn expect<T: PartialEq>(actual: &Option<T>) -> OptionAssertion<'_, T> {
    OptionAssertion::new(Some(actual))
}

/// Create an assertion chain for a container that may itself be missing.
///
/// Use this when the `Option` comes out of a fallible lookup, so that "the
/// container was never there" stays distinct from "the container was empty".
/// Every check on a missing container fails with
/// [`FailureKind::NullActual`].
///
/// # Example
///
/// ```rust
/// use expectant::{expect_maybe, FailureKind};
/// use std::collections::HashMap;
///
/// let mut sessions: HashMap<&str, Option<u64>> = HashMap::new();
/// sessions.insert("alice", Some(41));
///
/// expect_maybe(sessions.get("alice")).to_contain(&41);
///
/// let result = expect_maybe(sessions.get("bob")).evaluate_present();
/// assert_eq!(result.kind, Some(FailureKind::NullActual));
/// ```
pub fn expect_maybe<T: PartialEq>(actual: Option<&Option<T>>) -> OptionAssertion<'_, T> {
    OptionAssertion::new(actual)
}

/// Assertion chain over a borrowed `Option<T>`.
///
/// Assertion methods like [`to_contain`](Self::to_contain) evaluate
/// immediately, panic on failure, and return the chain so further checks
/// can follow. Strategy-swap methods
/// ([`using_value_comparator`](Self::using_value_comparator) and friends)
/// never fail and only affect checks made after them. Every panicking
/// method has a non-panicking `evaluate_*` counterpart returning an
/// [`AssertionResult`].
pub struct OptionAssertion<'a, T> {
    actual: Option<&'a Option<T>>,
    strategy: Box<dyn ComparisonStrategy<T> + 'a>,
    formatter: ValueFormatter,
}

impl<'a, T: PartialEq> OptionAssertion<'a, T> {
    fn new(actual: Option<&'a Option<T>>) -> Self {
        Self {
            actual,
            strategy: Box::new(StandardEquality),
            formatter: ValueFormatter::default(),
        }
    }
}

impl<'a, T> OptionAssertion<'a, T> {
    // =========================================================================
    // Chain configuration (never fails)
    // =========================================================================

    /// Compare contained values with the given ordering function instead of
    /// `PartialEq` for the rest of the chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let greeting = Some("HELLO");
    /// expect(&greeting)
    ///     .using_value_comparator(|a: &&str, b: &&str| {
    ///         a.to_lowercase().cmp(&b.to_lowercase())
    ///     })
    ///     .to_contain(&"hello");
    /// ```
    pub fn using_value_comparator(mut self, cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.strategy = Box::new(ComparatorBased::new(cmp));
        self
    }

    /// Compare contained values field by field instead of with `PartialEq`
    /// for the rest of the chain.
    ///
    /// Handy when the value type's `PartialEq` does not suit the test, e.g.
    /// it compares identity or includes bookkeeping fields. The comparison
    /// is not recursive; see
    /// [`FieldwiseEquality`](crate::FieldwiseEquality) for the exact rules
    /// and for excluding individual fields.
    #[cfg(feature = "fieldwise")]
    pub fn using_field_by_field_value_comparator(mut self) -> Self
    where
        T: Serialize,
    {
        self.strategy = Box::new(FieldwiseEquality::new());
        self
    }

    /// Compare contained values with an arbitrary strategy for the rest of
    /// the chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::{expect, FieldwiseEquality};
    /// use serde::Serialize;
    ///
    /// #[derive(Debug, PartialEq, Serialize)]
    /// struct Record { id: u64, body: String }
    ///
    /// let stored = Some(Record { id: 7, body: "hello".into() });
    /// let expected = Record { id: 99, body: "hello".into() };
    ///
    /// expect(&stored)
    ///     .using_comparison_strategy(FieldwiseEquality::new().ignoring("id"))
    ///     .to_contain(&expected);
    /// ```
    pub fn using_comparison_strategy(mut self, strategy: impl ComparisonStrategy<T> + 'a) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Revert to standard `PartialEq` comparison for the rest of the chain.
    pub fn using_default_value_comparator(mut self) -> Self
    where
        T: PartialEq,
    {
        self.strategy = Box::new(StandardEquality);
        self
    }

    /// Replace the formatter used to render values in failure messages.
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}

impl<'a, T: fmt::Debug> OptionAssertion<'a, T> {
    // =========================================================================
    // Assertion methods (panic on failure)
    // =========================================================================

    /// Assert the `Option` holds a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// expect(&Some("something")).to_be_present();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the `Option` is empty or the container is missing.
    pub fn to_be_present(self) -> Self {
        let result = self.evaluate_present();
        if !result.passed {
            self.panic_with_context(&result);
        }
        self
    }

    /// Assert the `Option` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// expect(&None::<i32>).to_be_empty();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the `Option` holds a value or the container is missing.
    pub fn to_be_empty(self) -> Self {
        let result = self.evaluate_empty();
        if !result.passed {
            self.panic_with_context(&result);
        }
        self
    }

    /// Assert the `Option` contains the given value under the active
    /// comparison strategy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// expect(&Some(10)).to_contain(&10);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the `Option` is empty, the contained value does not match,
    /// or the active strategy cannot compare the values.
    pub fn to_contain(self, expected: &T) -> Self {
        let result = self.evaluate_contains(expected);
        if !result.passed {
            self.panic_with_context(&result);
        }
        self
    }

    /// Assert the `Option` contains the given value (alias of
    /// [`to_contain`](Self::to_contain)).
    ///
    /// # Panics
    ///
    /// Same as [`to_contain`](Self::to_contain).
    pub fn has_value(self, expected: &T) -> Self {
        self.to_contain(expected)
    }

    /// Assert the `Option` contains the identical instance as `expected`.
    ///
    /// Identity means pointer equality: the contained value and `expected`
    /// are the same object in memory, regardless of the active comparison
    /// strategy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let config = Some(String::from("release"));
    /// let inner = config.as_ref().unwrap();
    /// expect(&config).to_contain_same(inner);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the `Option` is empty or contains a different instance,
    /// even a structurally equal one.
    pub fn to_contain_same(self, expected: &T) -> Self {
        let result = self.evaluate_contains_same(expected);
        if !result.passed {
            self.panic_with_context(&result);
        }
        self
    }

    /// Assert the `Option` contains a value whose runtime type is `U`.
    ///
    /// The check is exact: Rust has no runtime subtype relation. Useful
    /// from generic test helpers where the contained type is a parameter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// expect(&Some(10_i32)).to_contain_instance_of::<i32>();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the `Option` is empty or the contained value is not a `U`.
    pub fn to_contain_instance_of<U: Any>(self) -> Self
    where
        T: Any,
    {
        let result = self.evaluate_contains_instance_of::<U>();
        if !result.passed {
            self.panic_with_context(&result);
        }
        self
    }

    // =========================================================================
    // Non-panicking evaluation
    // =========================================================================

    /// Evaluate presence without panicking.
    pub fn evaluate_present(&self) -> AssertionResult {
        let description = "Option to contain a value".to_string();
        let actual = match self.actual {
            Some(actual) => actual,
            None => return self.null_actual(description),
        };
        if actual.is_some() {
            AssertionResult::pass(description)
        } else {
            AssertionResult::fail(FailureKind::NotPresent, description, "Option was empty")
        }
    }

    /// Evaluate emptiness without panicking.
    pub fn evaluate_empty(&self) -> AssertionResult {
        let description = "Option to be empty".to_string();
        let actual = match self.actual {
            Some(actual) => actual,
            None => return self.null_actual(description),
        };
        match actual {
            None => AssertionResult::pass(description),
            Some(value) => AssertionResult::fail(
                FailureKind::NotEmpty,
                description,
                format!("Option contained {}", self.formatter.format(value)),
            ),
        }
    }

    /// Evaluate containment under the active strategy without panicking.
    pub fn evaluate_contains(&self, expected: &T) -> AssertionResult {
        let description = format!("Option to contain {}", self.formatter.format(expected));
        let actual = match self.actual {
            Some(actual) => actual,
            None => return self.null_actual(description),
        };
        let value = match actual {
            Some(value) => value,
            None => {
                return AssertionResult::fail(
                    FailureKind::NotPresent,
                    description,
                    "Option was empty",
                )
            }
        };
        match self.strategy.are_equal(expected, value) {
            Ok(true) => AssertionResult::pass(description),
            Ok(false) => {
                let mut reason = format!("Option contained {}", self.formatter.format(value));
                if let Some(how) = self.strategy.describe() {
                    reason.push_str(&format!(" (compared using {})", how));
                }
                AssertionResult::fail(FailureKind::ValueMismatch, description, reason)
            }
            Err(err) => {
                AssertionResult::fail(FailureKind::InvalidArgument, description, err.to_string())
            }
        }
    }

    /// Evaluate instance identity without panicking.
    pub fn evaluate_contains_same(&self, expected: &T) -> AssertionResult {
        let description = format!(
            "Option to contain the same instance as {}",
            self.formatter.format(expected)
        );
        let actual = match self.actual {
            Some(actual) => actual,
            None => return self.null_actual(description),
        };
        let value = match actual {
            Some(value) => value,
            None => {
                return AssertionResult::fail(
                    FailureKind::NotPresent,
                    description,
                    "Option was empty",
                )
            }
        };
        if std::ptr::eq(value, expected) {
            AssertionResult::pass(description)
        } else {
            AssertionResult::fail(
                FailureKind::IdentityMismatch,
                description,
                format!(
                    "Option contained {}, a different instance",
                    self.formatter.format(value)
                ),
            )
        }
    }

    /// Evaluate the contained value's runtime type without panicking.
    pub fn evaluate_contains_instance_of<U: Any>(&self) -> AssertionResult
    where
        T: Any,
    {
        let description = format!(
            "Option to contain a value of type {}",
            std::any::type_name::<U>()
        );
        let actual = match self.actual {
            Some(actual) => actual,
            None => return self.null_actual(description),
        };
        let value = match actual {
            Some(value) => value,
            None => {
                return AssertionResult::fail(
                    FailureKind::NotPresent,
                    description,
                    "Option was empty",
                )
            }
        };
        let value: &dyn Any = value;
        if value.is::<U>() {
            AssertionResult::pass(description)
        } else {
            AssertionResult::fail(
                FailureKind::TypeMismatch,
                description,
                format!(
                    "Option contained a value of type {}",
                    std::any::type_name::<T>()
                ),
            )
        }
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn null_actual(&self, description: String) -> AssertionResult {
        AssertionResult::fail(
            FailureKind::NullActual,
            description,
            "no Option was supplied, the container itself is missing",
        )
    }

    fn panic_with_context(&self, result: &AssertionResult) -> ! {
        let reason = result.reason.as_deref().unwrap_or("unknown reason");
        panic!(
            "assertion failed: expected {}\n\n  reason: {}\n  actual: {}\n",
            result.description,
            reason,
            self.format_actual()
        );
    }

    fn format_actual(&self) -> String {
        match self.actual {
            None => "(missing container)".to_string(),
            Some(None) => "None".to_string(),
            Some(Some(value)) => format!("Some({})", self.formatter.format(value)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionAssertion<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionAssertion")
            .field("actual", &self.actual)
            .field(
                "strategy",
                &self.strategy.describe().unwrap_or("standard equality"),
            )
            .finish()
    }
}
