//! Rendering of values inside failure messages.

use std::fmt::Debug;

const DEFAULT_TRUNCATE_AT: usize = 60;

/// Renders values for failure messages.
///
/// Values are rendered with their `Debug` representation and truncated past
/// a configurable limit so a large contained value does not drown the
/// message.
///
/// # Example
///
/// ```rust
/// use expectant::ValueFormatter;
///
/// let formatter = ValueFormatter::new().truncate_at(10);
/// assert_eq!(formatter.format(&42), "42");
/// assert_eq!(formatter.format(&"a very long string"), "\"a very...");
/// ```
#[derive(Debug, Clone)]
pub struct ValueFormatter {
    truncate_at: usize,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            truncate_at: DEFAULT_TRUNCATE_AT,
        }
    }
}

impl ValueFormatter {
    /// Create a formatter with the default truncation limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum rendered length before truncation.
    pub fn truncate_at(mut self, limit: usize) -> Self {
        self.truncate_at = limit;
        self
    }

    /// Render a value, truncating long output.
    pub fn format<T: Debug>(&self, value: &T) -> String {
        self.truncate(&format!("{:?}", value))
    }

    fn truncate(&self, rendered: &str) -> String {
        if rendered.chars().count() > self.truncate_at {
            let kept: String = rendered
                .chars()
                .take(self.truncate_at.saturating_sub(3))
                .collect();
            format!("{}...", kept)
        } else {
            rendered.to_string()
        }
    }
}
