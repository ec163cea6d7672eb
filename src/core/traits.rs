//! Shared traits for tasks and links.
//!
//! These traits give filtering and scheduling a single seam to work
//! through, so list commands don't need to know which record type they
//! are looking at.

use chrono::NaiveDate;

/// A value extracted from a filterable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String value.
    String(String),
    /// Optional string value.
    OptionalString(Option<String>),
    /// Boolean value.
    Bool(bool),
    /// Optional date value.
    OptionalDate(Option<NaiveDate>),
    /// List of strings (e.g., tags).
    StringList(Vec<String>),
}

impl FieldValue {
    /// Check if this value contains a substring (case-insensitive).
    #[must_use]
    pub fn contains_str(&self, needle: &str) -> bool {
        let needle_lower = needle.to_lowercase();
        match self {
            Self::String(s) | Self::OptionalString(Some(s)) => {
                s.to_lowercase().contains(&needle_lower)
            },
            Self::StringList(list) => list
                .iter()
                .any(|s| s.to_lowercase().contains(&needle_lower)),
            Self::OptionalString(None) | Self::Bool(_) | Self::OptionalDate(_) => false,
        }
    }

    /// Check if this value equals another (for string comparisons).
    #[must_use]
    pub fn equals_str(&self, other: &str) -> bool {
        match self {
            Self::String(s) | Self::OptionalString(Some(s)) => s.eq_ignore_ascii_case(other),
            Self::OptionalString(None)
            | Self::Bool(_)
            | Self::OptionalDate(_)
            | Self::StringList(_) => false,
        }
    }
}

/// Trait for items that can be filtered.
pub trait Filterable {
    /// Get the value of a named field.
    ///
    /// Returns `None` if the field doesn't exist on this item type.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Get the unique identifier.
    fn id(&self) -> &str;

    /// Get the display title.
    fn title(&self) -> &str;
}

/// Trait for items with a due date.
pub trait Schedulable {
    /// Get the due date as a local calendar day.
    fn due_day(&self) -> Option<NaiveDate>;

    /// Check if this item is due within the next N days of `today`.
    fn is_due_within(&self, today: NaiveDate, days: i64) -> bool {
        let horizon = today + chrono::Duration::days(days);
        self.due_day().is_some_and(|d| d >= today && d <= horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_contains_str() {
        let value = FieldValue::String("Hello World".to_string());
        assert!(value.contains_str("hello"));
        assert!(value.contains_str("WORLD"));
        assert!(!value.contains_str("foo"));
    }

    #[test]
    fn test_field_value_string_list() {
        let value = FieldValue::StringList(vec!["investing".to_string(), "beginners".to_string()]);
        assert!(value.contains_str("invest"));
        assert!(!value.contains_str("advanced"));
    }

    #[test]
    fn test_field_value_equals_str() {
        let value = FieldValue::String("work".to_string());
        assert!(value.equals_str("Work"));
        assert!(!value.equals_str("personal"));
        assert!(!FieldValue::OptionalString(None).equals_str("work"));
    }
}
