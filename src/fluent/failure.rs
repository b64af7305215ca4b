//! Failure classification for assertion results.

/// Classifies why an assertion failed.
///
/// Carried by [`AssertionResult`](super::AssertionResult) so callers using
/// the non-panicking `evaluate_*` API can branch on the failure category
/// instead of parsing the message.
///
/// # Example
///
/// ```rust
/// use expectant::{expect, FailureKind};
///
/// let value: Option<i32> = None;
/// let result = expect(&value).evaluate_present();
/// assert_eq!(result.kind, Some(FailureKind::NotPresent));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The container itself was absent, as opposed to holding an empty `Option`.
    NullActual,
    /// An argument could not be used for the requested check.
    InvalidArgument,
    /// The `Option` was expected to hold a value but was empty.
    NotPresent,
    /// The `Option` was expected to be empty but held a value.
    NotEmpty,
    /// The contained value did not match the expected value under the active strategy.
    ValueMismatch,
    /// The contained value was not of the expected runtime type.
    TypeMismatch,
    /// The contained value was not the identical instance as the expected one.
    IdentityMismatch,
}

impl FailureKind {
    /// Get the canonical short name for this failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NullActual => "NullActual",
            FailureKind::InvalidArgument => "InvalidArgument",
            FailureKind::NotPresent => "NotPresent",
            FailureKind::NotEmpty => "NotEmpty",
            FailureKind::ValueMismatch => "ValueMismatch",
            FailureKind::TypeMismatch => "TypeMismatch",
            FailureKind::IdentityMismatch => "IdentityMismatch",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(FailureKind::NotPresent.as_str(), "NotPresent");
        assert_eq!(FailureKind::ValueMismatch.as_str(), "ValueMismatch");
        assert_eq!(FailureKind::NullActual.as_str(), "NullActual");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FailureKind::NotEmpty), "NotEmpty");
        assert_eq!(format!("{}", FailureKind::TypeMismatch), "TypeMismatch");
    }

    #[test]
    fn test_equality() {
        assert_eq!(FailureKind::IdentityMismatch, FailureKind::IdentityMismatch);
        assert_ne!(FailureKind::NotPresent, FailureKind::NotEmpty);
    }
}
