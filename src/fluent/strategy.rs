//! Pluggable comparison strategies for contained values.
//!
//! A strategy decides whether the value inside an `Option` matches an
//! expected value. Every assertion chain starts with [`StandardEquality`]
//! and can swap to a [`ComparatorBased`] or [`FieldwiseEquality`] strategy
//! mid-chain; the swap only affects checks made after it.

use std::cmp::Ordering;

/// Error raised when a strategy cannot compare the given values at all.
///
/// Distinct from an unequal result: this means the arguments were not
/// usable for the requested kind of comparison (surfaced by the assertion
/// as an `InvalidArgument` failure).
#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("field-by-field comparison requires struct-like values, got {0}")]
    NotAStruct(&'static str),

    #[error("value could not be serialized for field-by-field comparison: {0}")]
    Unserializable(String),
}

/// A pluggable equality capability.
///
/// Implementations must be total and side-effect-free: the same pair of
/// values always yields the same answer, and comparing never mutates them.
pub trait ComparisonStrategy<T> {
    /// Whether `expected` and `actual` should be considered equal.
    fn are_equal(&self, expected: &T, actual: &T) -> Result<bool, ComparisonError>;

    /// Short description of the strategy for failure messages.
    ///
    /// `None` means the default (standard equality), which failure messages
    /// do not call out.
    fn describe(&self) -> Option<&'static str> {
        None
    }
}

/// Native `PartialEq` equality. The default for every new assertion chain.
///
/// # Example
///
/// ```rust
/// use expectant::{ComparisonStrategy, StandardEquality};
///
/// assert!(StandardEquality.are_equal(&1, &1).unwrap());
/// assert!(!StandardEquality.are_equal(&1, &2).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEquality;

impl<T: PartialEq> ComparisonStrategy<T> for StandardEquality {
    fn are_equal(&self, expected: &T, actual: &T) -> Result<bool, ComparisonError> {
        Ok(expected == actual)
    }
}

/// Equality delegated to a caller-supplied ordering function.
///
/// Two values are equal iff the function returns [`Ordering::Equal`].
///
/// # Example
///
/// ```rust
/// use expectant::{ComparatorBased, ComparisonStrategy};
///
/// let case_insensitive = ComparatorBased::new(|a: &&str, b: &&str| {
///     a.to_lowercase().cmp(&b.to_lowercase())
/// });
/// assert!(case_insensitive.are_equal(&"Hello", &"hello").unwrap());
/// ```
pub struct ComparatorBased<T> {
    cmp: Box<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> ComparatorBased<T> {
    /// Create a strategy from an ordering function.
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self { cmp: Box::new(cmp) }
    }
}

impl<T> ComparisonStrategy<T> for ComparatorBased<T> {
    fn are_equal(&self, expected: &T, actual: &T) -> Result<bool, ComparisonError> {
        Ok((self.cmp)(expected, actual) == Ordering::Equal)
    }

    fn describe(&self) -> Option<&'static str> {
        Some("custom comparator")
    }
}

#[cfg(feature = "fieldwise")]
pub use fieldwise::FieldwiseEquality;

#[cfg(feature = "fieldwise")]
mod fieldwise {
    use super::{ComparisonError, ComparisonStrategy};
    use serde::Serialize;
    use serde_json::Value;
    use std::collections::BTreeSet;

    /// Structural equality over serialized fields.
    ///
    /// Both values are serialized and their top-level fields compared
    /// pairwise. The comparison is not recursive: a nested struct field is
    /// compared via its serialized form as a whole, not unpacked
    /// field-by-field. Differing field sets compare unequal. Values that do
    /// not serialize to a struct/map shape cannot be compared this way and
    /// produce a [`ComparisonError`].
    ///
    /// Fields skipped by serde attributes (`#[serde(skip)]`) never take part
    /// in the comparison; [`FieldwiseEquality::ignoring`] excludes further
    /// fields per comparison.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::{ComparisonStrategy, FieldwiseEquality};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let strategy = FieldwiseEquality::new();
    /// let a = Point { x: 1, y: 2 };
    /// let b = Point { x: 1, y: 2 };
    /// assert!(strategy.are_equal(&a, &b).unwrap());
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct FieldwiseEquality {
        ignored: BTreeSet<String>,
    }

    impl FieldwiseEquality {
        /// Create a strategy comparing every serialized field.
        pub fn new() -> Self {
            Self::default()
        }

        /// Exclude a field from the comparison.
        ///
        /// # Example
        ///
        /// ```rust
        /// use expectant::{ComparisonStrategy, FieldwiseEquality};
        /// use serde::Serialize;
        ///
        /// #[derive(Serialize)]
        /// struct Record { id: u64, body: String }
        ///
        /// let strategy = FieldwiseEquality::new().ignoring("id");
        /// let a = Record { id: 1, body: "same".into() };
        /// let b = Record { id: 2, body: "same".into() };
        /// assert!(strategy.are_equal(&a, &b).unwrap());
        /// ```
        pub fn ignoring(mut self, field: &str) -> Self {
            self.ignored.insert(field.to_string());
            self
        }

        fn fields_of<T: Serialize>(
            &self,
            value: &T,
        ) -> Result<serde_json::Map<String, Value>, ComparisonError> {
            let json = serde_json::to_value(value)
                .map_err(|e| ComparisonError::Unserializable(e.to_string()))?;
            match json {
                Value::Object(map) => Ok(map),
                other => Err(ComparisonError::NotAStruct(json_shape(&other))),
            }
        }
    }

    impl<T: Serialize> ComparisonStrategy<T> for FieldwiseEquality {
        fn are_equal(&self, expected: &T, actual: &T) -> Result<bool, ComparisonError> {
            let expected = self.fields_of(expected)?;
            let actual = self.fields_of(actual)?;

            let expected_keys: BTreeSet<&String> = expected
                .keys()
                .filter(|k| !self.ignored.contains(*k))
                .collect();
            let actual_keys: BTreeSet<&String> = actual
                .keys()
                .filter(|k| !self.ignored.contains(*k))
                .collect();

            // Differing field sets are unequal, not an error.
            if expected_keys != actual_keys {
                return Ok(false);
            }

            let result = expected_keys
                .into_iter()
                .all(|k| expected.get(k.as_str()) == actual.get(k.as_str()));
            Ok(result)
        }

        fn describe(&self) -> Option<&'static str> {
            Some("field-by-field comparison")
        }
    }

    fn json_shape(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
