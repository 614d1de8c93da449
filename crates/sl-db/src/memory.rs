//! In-memory data source
//!
//! Orders a vector of rows by a named field. Rows expose their fields
//! through [`SortKey`]; nulls sort after every value, so they come last in
//! ascending order and first in descending order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sl_queries::{SortDirection, SortSpec};
use std::cmp::Ordering;

use crate::repository::{ListSource, RepositoryError, RepositoryResult};

/// A comparable field value
#[derive(Debug, Clone)]
pub enum SortValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Bool(_) => 0,
            SortValue::Int(_) | SortValue::Float(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::Timestamp(_) => 3,
            SortValue::Null => 4,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Int(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Float(value)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Bool(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> Self {
        SortValue::Timestamp(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Null)
    }
}

/// Field access for rows held in memory
pub trait SortKey {
    /// Value of `field` for this row, or `None` if the row has no such field
    fn sort_key(&self, field: &str) -> Option<SortValue>;
}

/// A fixed collection ordered on request
#[derive(Debug, Clone, Default)]
pub struct InMemorySource<T> {
    items: Vec<T>,
}

impl<T> InMemorySource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: SortKey + Clone> InMemorySource<T> {
    /// All items in `sort` order. Equal keys keep insertion order.
    pub fn ordered(&self, sort: &SortSpec) -> RepositoryResult<Vec<T>> {
        let mut keyed = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let key = item
                .sort_key(&sort.field)
                .ok_or_else(|| RepositoryError::UnknownField(sort.field.clone()))?;
            keyed.push((key, item));
        }

        keyed.sort_by(|(a, _), (b, _)| match sort.direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        });

        Ok(keyed.into_iter().map(|(_, item)| item.clone()).collect())
    }
}

#[async_trait]
impl<T> ListSource<T> for InMemorySource<T>
where
    T: SortKey + Clone + Send + Sync,
{
    async fn fetch_ordered(
        &self,
        sort: &SortSpec,
        limit: Option<usize>,
        offset: usize,
    ) -> RepositoryResult<Vec<T>> {
        tracing::trace!(ordering = %sort, ?limit, offset, "Ordering in-memory source");
        let ordered = self.ordered(sort)?;
        let window = ordered.into_iter().skip(offset);
        Ok(match limit {
            Some(limit) => window.take(limit).collect(),
            None => window.collect(),
        })
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        due: Option<DateTime<Utc>>,
    }

    impl SortKey for Row {
        fn sort_key(&self, field: &str) -> Option<SortValue> {
            match field {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "due" => Some(self.due.into()),
                _ => None,
            }
        }
    }

    fn day(d: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).single()
    }

    fn source() -> InMemorySource<Row> {
        InMemorySource::new(vec![
            Row { id: 1, name: "beta", due: day(3) },
            Row { id: 2, name: "alpha", due: None },
            Row { id: 3, name: "gamma", due: day(1) },
            Row { id: 4, name: "alpha", due: day(2) },
        ])
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_orders_ascending_and_descending() {
        let source = source();
        let asc = source.fetch_ordered(&SortSpec::asc("id"), None, 0).await.unwrap();
        assert_eq!(ids(&asc), vec![1, 2, 3, 4]);

        let desc = source.fetch_ordered(&SortSpec::desc("id"), None, 0).await.unwrap();
        assert_eq!(ids(&desc), vec![4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn test_ties_keep_insertion_order() {
        let rows = source()
            .fetch_ordered(&SortSpec::asc("name"), None, 0)
            .await
            .unwrap();
        assert_eq!(ids(&rows), vec![2, 4, 1, 3]);
    }

    #[tokio::test]
    async fn test_nulls_last_ascending_first_descending() {
        let source = source();
        let asc = source.fetch_ordered(&SortSpec::asc("due"), None, 0).await.unwrap();
        assert_eq!(ids(&asc), vec![3, 4, 1, 2]);

        let desc = source.fetch_ordered(&SortSpec::desc("due"), None, 0).await.unwrap();
        assert_eq!(ids(&desc), vec![2, 1, 4, 3]);
    }

    #[tokio::test]
    async fn test_window() {
        let source = source();
        let page = source
            .fetch_ordered(&SortSpec::desc("id"), Some(2), 1)
            .await
            .unwrap();
        assert_eq!(ids(&page), vec![3, 2]);

        let past_end = source
            .fetch_ordered(&SortSpec::desc("id"), Some(2), 10)
            .await
            .unwrap();
        assert!(past_end.is_empty());
        assert_eq!(source.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_unknown_field() {
        let result = source().fetch_ordered(&SortSpec::asc("secret"), None, 0).await;
        assert!(matches!(result, Err(RepositoryError::UnknownField(f)) if f == "secret"));
    }

    #[test]
    fn test_sort_value_ordering() {
        assert!(SortValue::Int(2) < SortValue::Float(2.5));
        assert!(SortValue::Text("z".into()) < SortValue::Null);
        assert!(SortValue::Int(i64::MAX) < SortValue::Null);
        assert_eq!(SortValue::from(None::<i64>), SortValue::Null);
        assert_eq!(SortValue::Float(1.0), SortValue::Int(1));
    }
}
