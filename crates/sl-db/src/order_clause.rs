//! SQL ordering
//!
//! SQL backends translate the resolved sort into an `ORDER BY` clause.
//! Field names never reach the SQL text directly: each allowed field maps to
//! a known column expression, and unmapped fields produce no clause.

use sl_queries::{SortDirection, SortSpec};

/// Field name to column expression mapping
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: Vec<(String, String)>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `field` to a column expression such as `p.created_at`
    pub fn with(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.columns.push((field.into(), column.into()));
        self
    }

    pub fn column(&self, field: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, c)| c.as_str())
    }

    /// Build the `ORDER BY` clause, or `None` for an unmapped field
    pub fn order_clause(&self, sort: &SortSpec) -> Option<String> {
        let column = self.column(&sort.field)?;
        let (direction, nulls) = match sort.direction {
            SortDirection::Asc => ("ASC", "NULLS LAST"),
            SortDirection::Desc => ("DESC", "NULLS FIRST"),
        };
        Some(format!("ORDER BY {} {} {}", column, direction, nulls))
    }
}
