//! Sort specs
//!
//! A sort spec serializes to a directive string: the field name, prefixed
//! with `-` when descending. `-created_at` sorts newest first.

use serde::Serialize;
use std::fmt;

pub use sl_core::config::SortDirection;

/// A single resolved sort
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortSpec {
    /// The attribute to sort by
    pub field: String,
    /// The sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create ascending sort
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create descending sort
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse a directive string without checking the field.
    ///
    /// Exactly one leading `-` selects descending order; everything after it
    /// is the field name.
    pub fn parse(directive: &str) -> Self {
        match directive.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(directive),
        }
    }

    /// Render as a directive string
    pub fn directive(&self) -> String {
        self.to_string()
    }

    /// Reverse the sort direction
    pub fn reversed(mut self) -> Self {
        self.direction = self.direction.reverse();
        self
    }

    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Desc
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.prefix(), self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directive() {
        assert_eq!(SortSpec::parse("name"), SortSpec::asc("name"));
        assert_eq!(SortSpec::parse("-created_at"), SortSpec::desc("created_at"));
        assert_eq!(SortSpec::parse(""), SortSpec::asc(""));
        // only the first dash is a direction marker
        assert_eq!(SortSpec::parse("--name"), SortSpec::desc("-name"));
        assert_eq!(SortSpec::parse("-due-date"), SortSpec::desc("due-date"));
    }

    #[test]
    fn test_directive() {
        assert_eq!(SortSpec::asc("name").directive(), "name");
        assert_eq!(SortSpec::desc("name").directive(), "-name");
        assert_eq!(SortSpec::desc("name").to_string(), "-name");
    }

    #[test]
    fn test_directive_round_trip() {
        for spec in [SortSpec::asc("id"), SortSpec::desc("id"), SortSpec::desc("due-date")] {
            assert_eq!(SortSpec::parse(&spec.directive()), spec);
        }
    }

    #[test]
    fn test_reversed() {
        let spec = SortSpec::asc("created_at").reversed();
        assert_eq!(spec.direction, SortDirection::Desc);
        assert!(spec.is_descending());
        assert_eq!(spec.reversed(), SortSpec::asc("created_at"));
    }
}
